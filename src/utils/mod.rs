//! Utility functions shared by header matching and value validation

pub mod progress;

/// Lowercase a raw string and strip the FIRST literal space only
///
/// This is the exact normalization the import flow applies to column headers
/// and to plan comparisons: a single-occurrence space strip, not a trim and
/// not a whitespace collapse. `"FIRST NAME"` folds to `"firstname"`, while
/// `" First Name "` folds to `"first name "` and `"Date of Birth"` to
/// `"dateof birth"`.
#[must_use]
pub fn fold_case_strip_first_space(raw: &str) -> String {
    raw.to_lowercase().replacen(' ', "", 1)
}
