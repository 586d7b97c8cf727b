//! Header matching rules
//!
//! Two rule shapes cover every canonical field: a plain any-of pattern list,
//! and an include/exclude pair for fields prone to false positives (the trip
//! dates against the birth date, "Student Number" against phone and passport
//! columns). Patterns compile once at registry construction and are
//! evaluated case-insensitively against normalized headers.

use regex::{Regex, RegexBuilder};
use smallvec::SmallVec;

use crate::error::{ColumnMapperError, Result};
use crate::schema::FieldKey;
use crate::utils::fold_case_strip_first_space;

/// Inline list of compiled header patterns
///
/// No canonical field carries more than four patterns, so the list stays on
/// the stack.
pub type PatternList = SmallVec<[Regex; 4]>;

/// Normalize a raw column header before rule evaluation
///
/// Lowercases and strips the FIRST literal space only. `"FIRST NAME"`
/// becomes `"firstname"` while `" First Name "` becomes `"first name "`.
/// Not a trim and not a whitespace collapse; the rule patterns are written
/// against exactly this folding.
#[must_use]
pub fn normalize_header(raw: &str) -> String {
    fold_case_strip_first_space(raw)
}

/// Decides whether a raw column header names a given canonical field
#[derive(Debug, Clone)]
pub enum HeaderRule {
    /// Matches when ANY pattern matches the normalized header
    AnyOf(PatternList),
    /// Matches when ANY include pattern matches AND NO exclude pattern does
    IncludeExclude {
        /// Patterns that nominate the header
        includes: PatternList,
        /// Patterns that veto a nominated header
        excludes: PatternList,
    },
}

impl HeaderRule {
    /// Build a plain any-of rule from literal patterns
    pub fn any_of(field: FieldKey, patterns: &[&str]) -> Result<Self> {
        Ok(Self::AnyOf(compile_patterns(field, patterns)?))
    }

    /// Build an include/exclude rule from literal pattern lists
    pub fn include_exclude(
        field: FieldKey,
        includes: &[&str],
        excludes: &[&str],
    ) -> Result<Self> {
        Ok(Self::IncludeExclude {
            includes: compile_patterns(field, includes)?,
            excludes: compile_patterns(field, excludes)?,
        })
    }

    /// Evaluate this rule against a raw column header
    ///
    /// Pure and repeatable: normalizes internally, touches no shared state,
    /// and an empty or unrecognizable header simply matches nothing.
    #[must_use]
    pub fn matches(&self, header: &str) -> bool {
        let normalized = normalize_header(header);
        match self {
            Self::AnyOf(patterns) => matches_any(patterns, &normalized),
            Self::IncludeExclude { includes, excludes } => {
                matches_any(includes, &normalized) && !matches_any(excludes, &normalized)
            }
        }
    }
}

fn matches_any(patterns: &PatternList, header: &str) -> bool {
    patterns.iter().any(|pattern| pattern.is_match(header))
}

/// Compile literal patterns with case-insensitive matching enabled
fn compile_patterns(field: FieldKey, patterns: &[&str]) -> Result<PatternList> {
    patterns
        .iter()
        .map(|pattern| {
            RegexBuilder::new(pattern)
                .case_insensitive(true)
                .build()
                .map_err(|source| ColumnMapperError::InvalidPattern { field, source })
        })
        .collect()
}
