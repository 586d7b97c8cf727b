//! Type definitions for the column matching phase

use serde::{Deserialize, Serialize};

use crate::schema::FieldKey;

/// Outcome of resolving one source column against the registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnMatch {
    /// Zero-based index of the source column
    pub column_index: usize,
    /// Raw header text as it appeared in the file
    pub header: String,
    /// Claimed field, `None` when nothing matched or every match was taken
    pub field_key: Option<FieldKey>,
}

impl ColumnMatch {
    /// Whether this column claimed a field
    #[must_use]
    pub const fn is_matched(&self) -> bool {
        self.field_key.is_some()
    }
}
