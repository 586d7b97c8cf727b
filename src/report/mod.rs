//! Import preview reports
//!
//! Result types the host UI renders: per-cell verdicts, per-row rollups and
//! the whole-import summary. Everything serializes to the camelCase JSON
//! shape the import screen consumes.

use serde::{Deserialize, Serialize};

use crate::matching::ColumnMatch;
use crate::schema::FieldKey;

/// Verdict for a single cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellReport {
    /// Field the cell was validated against
    pub field: FieldKey,
    /// Display name of that field
    pub name: String,
    /// Echo of the raw cell value
    pub value: Option<String>,
    /// Whether the value passed the field's rule
    pub is_valid: bool,
}

/// Verdicts for every claimed field of one row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowReport {
    /// Zero-based row index in the imported file
    pub row_index: usize,
    /// One verdict per claimed field, in registration order
    pub cells: Vec<CellReport>,
    /// Whether every cell passed
    pub is_valid: bool,
}

impl RowReport {
    /// Roll up cell verdicts into a row report
    #[must_use]
    pub fn new(row_index: usize, cells: Vec<CellReport>) -> Self {
        let is_valid = cells.iter().all(|cell| cell.is_valid);
        Self {
            row_index,
            cells,
            is_valid,
        }
    }

    /// Cells that failed validation
    #[must_use]
    pub fn invalid_cells(&self) -> Vec<&CellReport> {
        self.cells.iter().filter(|cell| !cell.is_valid).collect()
    }
}

/// Whole-import preview: column mapping plus row verdicts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportReport {
    /// Match outcome per source column
    pub columns: Vec<ColumnMatch>,
    /// Verdicts per row
    pub rows: Vec<RowReport>,
    /// Rows with every cell valid
    pub valid_rows: usize,
    /// Rows with at least one invalid cell
    pub invalid_rows: usize,
}

impl ImportReport {
    /// Build a report and its rollup counts
    #[must_use]
    pub fn new(columns: Vec<ColumnMatch>, rows: Vec<RowReport>) -> Self {
        let valid_rows = rows.iter().filter(|row| row.is_valid).count();
        let invalid_rows = rows.len() - valid_rows;
        Self {
            columns,
            rows,
            valid_rows,
            invalid_rows,
        }
    }

    /// Number of source columns that claimed a field
    #[must_use]
    pub fn matched_columns(&self) -> usize {
        self.columns.iter().filter(|column| column.is_matched()).count()
    }

    /// Source columns that claimed no field
    #[must_use]
    pub fn unmatched_columns(&self) -> Vec<&ColumnMatch> {
        self.columns
            .iter()
            .filter(|column| !column.is_matched())
            .collect()
    }

    /// Invalid cell counts per field, worst offenders first
    #[must_use]
    pub fn invalid_counts_by_field(&self) -> Vec<(FieldKey, usize)> {
        use itertools::Itertools;

        let mut counts: Vec<(FieldKey, usize)> = self
            .rows
            .iter()
            .flat_map(|row| row.cells.iter())
            .filter(|cell| !cell.is_valid)
            .counts_by(|cell| cell.field)
            .into_iter()
            .collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        counts
    }
}
