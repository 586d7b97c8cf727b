//! Reference lookup lists supplied by the host application
//!
//! The mapper owns none of this data. Plans, countries, gender options and
//! policy types come from the host's configuration and are passed into each
//! validation call. `Default` gives every list empty; lookups against an
//! empty list fail the cell rather than erroring, so an upstream loading
//! problem shows up as a wall of invalid cells in the preview.

use serde::{Deserialize, Serialize};

/// An insurance plan an applicant can enroll in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    /// Stable plan identifier
    pub id: String,
    /// Short plan name
    pub name: String,
    /// Longer marketing label, often what customer files carry
    #[serde(default)]
    pub description: String,
}

/// A country entry from the host's country table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    /// Stable country identifier
    pub id: String,
    /// Full country name
    pub name: String,
    /// Short country code
    #[serde(default)]
    pub code: String,
}

/// A selectable gender option
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenderOption {
    /// Stable option identifier
    pub id: String,
    /// Option label
    pub name: String,
}

/// An applicant or policy type ("Student", "Dependent", ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyType {
    /// Stable type identifier
    pub id: String,
    /// Type label
    pub name: String,
}

/// Bundle of reference lists for one validation pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferenceData {
    /// Plans offered on this import
    pub plans: Vec<Plan>,
    /// Country table
    pub countries: Vec<Country>,
    /// Gender options
    pub genders: Vec<GenderOption>,
    /// Applicant types
    pub policy_types: Vec<PolicyType>,
}
