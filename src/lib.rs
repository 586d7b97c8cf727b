//! A Rust library for mapping imported spreadsheet columns to canonical
//! applicant fields, with per-cell validation against host-supplied
//! reference data.
//!
//! Matching is heuristic and first-match-wins: fields are tried in
//! registration order, each field is claimed by at most one column, and
//! headers that fit nothing are reported unmatched instead of failing the
//! import. Validation never errors on messy data; verdicts come back on the
//! preview report.

pub mod config;
pub mod dates;
pub mod error;
pub mod matching;
pub mod refdata;
pub mod report;
pub mod schema;
pub mod utils;
pub mod validate;

// Re-export the most common types for easier use
// Core types
pub use config::ImportConfig;
pub use error::{ColumnMapperError, Result};
pub use schema::{FieldDefinition, FieldKey, FieldRegistry, HeaderRule, InputType, SystemFields};

// Matching
pub use matching::{ColumnMatch, MatchSession, RowValues};

// Validation
pub use validate::{CellValidator, ValidationContext};

// Reference data and dates
pub use dates::{ChronoDateParser, DateFormatConfig, DateParser};
pub use refdata::ReferenceData;

// Reports
pub use report::{CellReport, ImportReport, RowReport};
