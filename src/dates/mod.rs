//! Date parsing for date-typed cells
//!
//! The import flow treats the date parser as an external collaborator: a
//! date cell is exactly as valid as the parser says it is, and validation
//! with no parser at hand marks every date cell invalid rather than
//! guessing. This module provides that seam plus a chrono-backed default
//! that tries a configurable format list with heuristic detection.

use chrono::NaiveDate;

/// External date parsing seam
///
/// Implementations must be shareable across threads; bulk validation fans
/// rows out with rayon.
pub trait DateParser: Send + Sync {
    /// Parse a raw cell value into a date, `None` when unparseable
    fn parse(&self, raw: &str) -> Option<NaiveDate>;
}

/// Configuration for date format handling
#[derive(Debug, Clone)]
pub struct DateFormatConfig {
    /// List of date format strings to try when parsing dates
    pub date_formats: Vec<String>,
    /// Enable heuristic format detection
    pub enable_format_detection: bool,
}

impl Default for DateFormatConfig {
    fn default() -> Self {
        Self {
            date_formats: vec![
                "%Y-%m-%d".to_string(), // ISO format: 2023-01-15
                "%d-%m-%Y".to_string(), // European: 15-01-2023
                "%m/%d/%Y".to_string(), // US: 01/15/2023
                "%d/%m/%Y".to_string(), // UK: 15/01/2023
                "%d.%m.%Y".to_string(), // German/Danish: 15.01.2023
                "%Y%m%d".to_string(),   // Compact: 20230115
                "%d %b %Y".to_string(), // 15 Jan 2023
                "%d %B %Y".to_string(), // 15 January 2023
            ],
            enable_format_detection: true,
        }
    }
}

/// Parse a date string with multiple format attempts
#[must_use]
pub fn parse_date_string(s: &str, config: &DateFormatConfig) -> Option<NaiveDate> {
    // Try all the provided formats
    for format in &config.date_formats {
        if let Ok(date) = NaiveDate::parse_from_str(s, format) {
            return Some(date);
        }
    }

    // If enabled, try to detect the format based on string patterns
    if config.enable_format_detection {
        if let Some(detected_format) = detect_date_format(s) {
            if let Ok(date) = NaiveDate::parse_from_str(s, &detected_format) {
                return Some(date);
            }
        }
    }

    None
}

/// Try to detect the date format from the shape of the string
#[must_use]
pub fn detect_date_format(s: &str) -> Option<String> {
    // ISO-like format with dashes (YYYY-MM-DD)
    if s.len() == 10 && s.chars().nth(4) == Some('-') && s.chars().nth(7) == Some('-') {
        return Some("%Y-%m-%d".to_string());
    }

    // Slash-separated; the year position decides the format
    if s.contains('/') {
        let parts: Vec<&str> = s.split('/').collect();
        if parts.len() == 3 {
            if parts[0].len() == 4 {
                return Some("%Y/%m/%d".to_string());
            }
            // Read ambiguous day/month order as day-first
            if parts[2].len() == 4 && parts[0].parse::<u8>().is_ok() {
                return Some("%d/%m/%Y".to_string());
            }
        }
    }

    // Dot-separated (DD.MM.YYYY)
    if s.contains('.') {
        let parts: Vec<&str> = s.split('.').collect();
        if parts.len() == 3 && parts[2].len() == 4 {
            return Some("%d.%m.%Y".to_string());
        }
    }

    // Compact format (YYYYMMDD)
    if s.len() == 8 && s.chars().all(|c| c.is_ascii_digit()) {
        return Some("%Y%m%d".to_string());
    }

    None
}

/// Chrono-backed multi-format date parser
///
/// The default parser hosts plug in when they have no house style of their
/// own. Values are trimmed before parsing; spreadsheet exports pad date
/// cells often enough to warrant it.
#[derive(Debug, Clone)]
pub struct ChronoDateParser {
    config: DateFormatConfig,
}

impl ChronoDateParser {
    /// Create a parser over the given format configuration
    #[must_use]
    pub const fn new(config: DateFormatConfig) -> Self {
        Self { config }
    }

    /// Format configuration this parser tries
    #[must_use]
    pub const fn config(&self) -> &DateFormatConfig {
        &self.config
    }
}

impl Default for ChronoDateParser {
    fn default() -> Self {
        Self::new(DateFormatConfig::default())
    }
}

impl DateParser for ChronoDateParser {
    fn parse(&self, raw: &str) -> Option<NaiveDate> {
        parse_date_string(raw.trim(), &self.config)
    }
}
