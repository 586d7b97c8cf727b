//! Canonical field schema for imported applicant spreadsheets
//!
//! The static side of the import flow: field definitions, the header rules
//! that recognize them, and the registry that holds them in matching
//! priority order. Per-import mutable state lives in [`crate::matching`].

pub mod catalog;
pub mod field;
pub mod rules;

// Re-export the schema types for easier access
pub use catalog::{FieldRegistry, SystemFields};
pub use field::{ColumnAlign, FieldCategory, FieldDefinition, FieldKey, InputType};
pub use rules::{HeaderRule, PatternList, normalize_header};
