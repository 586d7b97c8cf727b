//! Per-import match session
//!
//! A session owns the mutable state of one import run: which source column
//! has claimed which canonical field. Matching is first-match-wins in
//! registration order and claims one column per field, which makes it
//! inherently sequential. Validation only reads the claim table, so bulk
//! row validation can fan out across threads once matching is done.

use std::sync::Arc;
use std::time::Instant;

use log::{debug, info};
use rayon::prelude::*;
use rustc_hash::FxHashMap;

use crate::config::ImportConfig;
use crate::error::{ColumnMapperError, Result};
use crate::matching::types::ColumnMatch;
use crate::report::{CellReport, ImportReport, RowReport};
use crate::schema::{FieldKey, FieldRegistry};
use crate::utils::progress::{create_progress_bar, finish_progress_bar};
use crate::validate::{CellValidator, ValidationContext};

/// Raw cell values of one imported row, one entry per source column
pub type RowValues = Vec<Option<String>>;

/// Mutable match state for one import run
///
/// Reuse across files is allowed but demands a [`reset`](Self::reset)
/// between them; a stale claim table silently suppresses new matches. The
/// [`preview`](Self::preview) flow resets on entry and is the safe default.
pub struct MatchSession {
    registry: Arc<FieldRegistry>,
    validator: CellValidator,
    config: ImportConfig,
    /// Claim table: field to owning column index
    bound: FxHashMap<FieldKey, usize>,
}

impl MatchSession {
    /// Row count at which bulk validation switches to the parallel path
    const PARALLEL_THRESHOLD: usize = 1000;

    /// Create a session over a registry with default configuration
    pub fn new(registry: Arc<FieldRegistry>) -> Result<Self> {
        Self::with_config(registry, ImportConfig::default())
    }

    /// Create a session with explicit configuration
    pub fn with_config(registry: Arc<FieldRegistry>, config: ImportConfig) -> Result<Self> {
        Ok(Self {
            registry,
            validator: CellValidator::new()?,
            config,
            bound: FxHashMap::default(),
        })
    }

    /// Registry this session matches against
    #[must_use]
    pub fn registry(&self) -> &FieldRegistry {
        &self.registry
    }

    /// Clear every claim
    ///
    /// Must run between files when a session is reused.
    pub fn reset(&mut self) {
        self.bound.clear();
    }

    /// Whether a field has been claimed by some column
    #[must_use]
    pub fn is_claimed(&self, key: FieldKey) -> bool {
        self.bound.contains_key(&key)
    }

    /// Column currently supplying a field, if any
    #[must_use]
    pub fn column_for(&self, key: FieldKey) -> Option<usize> {
        self.bound.get(&key).copied()
    }

    /// Field claimed by a column, if any
    #[must_use]
    pub fn field_for_column(&self, column_index: usize) -> Option<FieldKey> {
        self.bound
            .iter()
            .find_map(|(&key, &index)| (index == column_index).then_some(key))
    }

    /// Current claims as (field, column) pairs in registration order
    #[must_use]
    pub fn bindings(&self) -> Vec<(FieldKey, usize)> {
        self.registry
            .fields()
            .iter()
            .filter_map(|field| self.column_for(field.key).map(|index| (field.key, index)))
            .collect()
    }

    /// Resolve a single column header against the unclaimed fields
    ///
    /// Fields are tested in registration order; the first match on an
    /// unclaimed field binds it to `column_index` and claims it. A match on
    /// an already claimed field is skipped and later fields still get their
    /// turn. Returns `None` when no rule matched or every matching field
    /// was taken.
    pub fn match_header(&mut self, column_index: usize, header: &str) -> Option<FieldKey> {
        for field in self.registry.fields() {
            if !field.matches_header(header) {
                continue;
            }
            if let Some(&owner) = self.bound.get(&field.key) {
                if self.config.log_decisions {
                    debug!(
                        "column {column_index} '{header}' also names '{}', already claimed by column {owner}",
                        field.key
                    );
                }
                continue;
            }
            self.bound.insert(field.key, column_index);
            if self.config.log_decisions {
                debug!("column {column_index} '{header}' matched '{}'", field.key);
            }
            return Some(field.key);
        }
        if self.config.log_decisions {
            debug!("column {column_index} '{header}' matched no field");
        }
        None
    }

    /// Resolve a whole header row, left to right
    ///
    /// Claims accumulate; prior claims are NOT cleared. Resetting between
    /// files is the caller's job when driving the raw operations directly.
    pub fn match_headers<S: AsRef<str>>(&mut self, headers: &[S]) -> Vec<ColumnMatch> {
        headers
            .iter()
            .enumerate()
            .map(|(column_index, header)| {
                let header = header.as_ref();
                ColumnMatch {
                    column_index,
                    header: header.to_string(),
                    field_key: self.match_header(column_index, header),
                }
            })
            .collect()
    }

    /// Validate one cell against a field looked up by key
    ///
    /// # Errors
    /// Returns [`ColumnMapperError::UnknownField`] when the key is not in
    /// this session's registry.
    pub fn validate_cell(
        &self,
        key: FieldKey,
        value: Option<&str>,
        ctx: &ValidationContext<'_>,
    ) -> Result<CellReport> {
        let field = self
            .registry
            .get(key)
            .ok_or(ColumnMapperError::UnknownField(key))?;
        Ok(self.validator.validate(field, value, ctx))
    }

    /// Validate every claimed field of one row
    ///
    /// Cells are picked out of `row` by each field's claimed column, in
    /// registration order. A row too short for a claimed column validates
    /// that field against a missing value.
    #[must_use]
    pub fn validate_row(
        &self,
        row_index: usize,
        row: &[Option<String>],
        ctx: &ValidationContext<'_>,
    ) -> RowReport {
        let cells: Vec<CellReport> = self
            .registry
            .fields()
            .iter()
            .filter_map(|field| {
                self.column_for(field.key).map(|column_index| {
                    let value = row.get(column_index).and_then(|cell| cell.as_deref());
                    self.validator.validate(field, value, ctx)
                })
            })
            .collect();
        RowReport::new(row_index, cells)
    }

    /// Validate a batch of rows sequentially
    #[must_use]
    pub fn validate_rows(&self, rows: &[RowValues], ctx: &ValidationContext<'_>) -> Vec<RowReport> {
        rows.iter()
            .enumerate()
            .map(|(row_index, row)| self.validate_row(row_index, row, ctx))
            .collect()
    }

    /// Validate a batch of rows across threads
    ///
    /// Matching must be complete first. Rows are independent once the claim
    /// table is frozen, and row order is preserved in the output.
    #[must_use]
    pub fn validate_rows_parallel(
        &self,
        rows: &[RowValues],
        ctx: &ValidationContext<'_>,
    ) -> Vec<RowReport> {
        let pb = self
            .config
            .show_progress
            .then(|| create_progress_bar(rows.len() as u64, Some("Validating rows")));

        let reports: Vec<RowReport> = rows
            .par_iter()
            .enumerate()
            .map(|(row_index, row)| {
                let report = self.validate_row(row_index, row, ctx);
                if let Some(pb) = &pb {
                    pb.inc(1);
                }
                report
            })
            .collect();

        if let Some(pb) = &pb {
            finish_progress_bar(pb, Some("Validation complete"));
        }
        reports
    }

    /// Run the full import preview: reset, match every header, validate
    /// every row, summarize
    ///
    /// This is the one-call flow for a fresh file. It performs the reset the
    /// raw operations leave to the caller, and switches to parallel
    /// validation for large files.
    #[must_use]
    pub fn preview<S: AsRef<str>>(
        &mut self,
        headers: &[S],
        rows: &[RowValues],
        ctx: &ValidationContext<'_>,
    ) -> ImportReport {
        let start = Instant::now();

        self.reset();
        let columns = self.match_headers(headers);

        let use_parallel = self.config.use_parallel && rows.len() >= Self::PARALLEL_THRESHOLD;
        let row_reports = if use_parallel {
            self.validate_rows_parallel(rows, ctx)
        } else {
            self.validate_rows(rows, ctx)
        };

        let report = ImportReport::new(columns, row_reports);
        if self.config.log_decisions {
            let elapsed = start.elapsed();
            info!(
                "import preview: {}/{} columns matched, {} rows valid, {} rows invalid in {:.2?}",
                report.matched_columns(),
                report.columns.len(),
                report.valid_rows,
                report.invalid_rows,
                elapsed
            );
        }
        report
    }
}
