//! Error handling for the column mapper
//!
//! Bad imported data is never an error here: unmatched columns and invalid
//! cells are ordinary results the import preview reports back. Errors are
//! reserved for registry misconfiguration, which means a programming mistake
//! rather than anything a customer file did.

use crate::schema::FieldKey;

/// Specialized error type for registry construction and lookup
#[derive(Debug, thiserror::Error)]
pub enum ColumnMapperError {
    /// A header or value pattern failed to compile
    #[error("invalid pattern for field '{field}': {source}")]
    InvalidPattern {
        /// Field whose rule carried the pattern
        field: FieldKey,
        /// Compile error reported by the regex engine
        #[source]
        source: regex::Error,
    },

    /// Two definitions with the same key were registered
    #[error("duplicate field key in registry: '{0}'")]
    DuplicateField(FieldKey),

    /// A field key was used that the registry does not contain
    #[error("field '{0}' is not present in this registry")]
    UnknownField(FieldKey),
}

/// Result type alias for column mapper operations
pub type Result<T> = std::result::Result<T, ColumnMapperError>;
