//! Configuration for import sessions.

use crate::dates::DateFormatConfig;

/// Configuration for a `MatchSession`
#[derive(Debug, Clone)]
pub struct ImportConfig {
    /// Whether large row batches may validate in parallel
    pub use_parallel: bool,
    /// Show a progress bar during parallel bulk validation
    pub show_progress: bool,
    /// Log match and claim decisions for debugging
    pub log_decisions: bool,
    /// Date format configuration for the host's default parser
    pub date_formats: DateFormatConfig,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            use_parallel: true,
            show_progress: false,
            log_decisions: true,
            date_formats: DateFormatConfig::default(),
        }
    }
}
