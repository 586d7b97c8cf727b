//! Per-type validation rules
//!
//! Each rule is a small pure function over the raw cell value and one
//! reference list, unit-testable without a registry or session. The
//! dispatching validator lives in [`crate::validate`].

use crate::refdata::{Country, GenderOption, Plan, PolicyType};
use crate::utils::fold_case_strip_first_space;

/// Non-blank check used by the name fields
#[must_use]
pub fn is_string_valid(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

/// Plan rule: the value must equal some plan's name or description
///
/// Both sides are lowercased and stripped of their FIRST space only, the
/// same folding headers get. The single-occurrence strip is the historical
/// comparison for this field and is kept bit-for-bit: multi-word plans
/// whose later spacing differs from the reference entry do not match.
#[must_use]
pub fn plan_matches(value: &str, plans: &[Plan]) -> bool {
    let wanted = fold_case_strip_first_space(value);
    plans.iter().any(|plan| {
        fold_case_strip_first_space(&plan.name) == wanted
            || fold_case_strip_first_space(&plan.description) == wanted
    })
}

/// Country rule: case-insensitive match on a country's name or code
#[must_use]
pub fn is_valid_country(value: &str, countries: &[Country]) -> bool {
    let wanted = value.to_lowercase();
    countries.iter().any(|country| {
        country.name.to_lowercase() == wanted || country.code.to_lowercase() == wanted
    })
}

/// Applicant type rule: case-insensitive match on a type's id or name
#[must_use]
pub fn policy_type_matches(value: &str, policy_types: &[PolicyType]) -> bool {
    let wanted = value.to_lowercase();
    policy_types.iter().any(|policy_type| {
        policy_type.id.to_lowercase() == wanted || policy_type.name.to_lowercase() == wanted
    })
}

/// Gender rule: case-insensitive match on an option's name
#[must_use]
pub fn gender_matches(value: &str, genders: &[GenderOption]) -> bool {
    let wanted = value.to_lowercase();
    genders.iter().any(|gender| gender.name.to_lowercase() == wanted)
}
