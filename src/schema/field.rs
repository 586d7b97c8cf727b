//! Field definitions for the canonical applicant schema
//!
//! This module defines the core structures describing the fields an imported
//! policy spreadsheet can map to. Definitions are immutable and shareable;
//! per-import claim state lives in [`crate::matching::MatchSession`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::schema::rules::HeaderRule;

/// Stable identifier for one canonical system field
///
/// The set is closed: the import UI only knows how to collect these
/// applicant attributes. Serialized values match the canonical display
/// strings the UI uses as keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FieldKey {
    /// Insurance plan the applicant enrolls in
    Plan,
    /// Applicant first name
    #[serde(rename = "First Name")]
    FirstName,
    /// Applicant last name
    #[serde(rename = "Last Name")]
    LastName,
    /// Applicant date of birth
    #[serde(rename = "Date of Birth")]
    DateOfBirth,
    /// Applicant gender
    Gender,
    /// Contact email address
    #[serde(rename = "Email Address")]
    EmailAddress,
    /// Applicant or policy type
    #[serde(rename = "Type")]
    ApplicantType,
    /// Country the applicant lives in
    #[serde(rename = "Country of Residence")]
    CountryOfResidence,
    /// Applicant nationality
    Nationality,
    /// Destination country for travel policies
    #[serde(rename = "Country of Destination")]
    CountryOfDestination,
    /// First day of the covered trip
    #[serde(rename = "Trip Start Date")]
    TripStartDate,
    /// Last day of the covered trip
    #[serde(rename = "Trip End Date")]
    TripEndDate,
    /// Passport number
    #[serde(rename = "Passport Number")]
    PassportNumber,
    /// Student identification number
    #[serde(rename = "Student Number")]
    StudentNumber,
    /// Group or company name
    #[serde(rename = "Group Name")]
    GroupName,
}

impl FieldKey {
    /// Convert `FieldKey` to its canonical display string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Plan => "Plan",
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::DateOfBirth => "Date of Birth",
            Self::Gender => "Gender",
            Self::EmailAddress => "Email Address",
            Self::ApplicantType => "Type",
            Self::CountryOfResidence => "Country of Residence",
            Self::Nationality => "Nationality",
            Self::CountryOfDestination => "Country of Destination",
            Self::TripStartDate => "Trip Start Date",
            Self::TripEndDate => "Trip End Date",
            Self::PassportNumber => "Passport Number",
            Self::StudentNumber => "Student Number",
            Self::GroupName => "Group Name",
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Widget family a field binds to in the import UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldCategory {
    /// Dropdown backed by a reference list
    Select,
    /// Free text input
    TextField,
    /// Calendar input
    DatePicker,
}

/// Semantic subtype deciding which validation rule applies to cell values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InputType {
    /// Value must resolve against the plan list
    Plan,
    /// Free text, checked for non-blank content unless the field is free-form
    Text,
    /// Value must resolve against the country list
    Country,
    /// Value must resolve against the policy type list
    ApplicantType,
    /// Optional email address
    Email,
    /// Value must resolve against the gender options
    Gender,
    /// Value must parse as a date
    Date,
    /// Free-form identifier, accepted as-is
    Number,
}

impl InputType {
    /// Convert `InputType` to its wire string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Plan => "plan",
            Self::Text => "text",
            Self::Country => "country",
            Self::ApplicantType => "applicantType",
            Self::Email => "email",
            Self::Gender => "gender",
            Self::Date => "date",
            Self::Number => "number",
        }
    }
}

impl fmt::Display for InputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Horizontal alignment hint for the mapping preview table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColumnAlign {
    /// Left-aligned cell contents
    Left,
    /// Centered cell contents
    Center,
    /// Right-aligned cell contents
    Right,
}

/// A single canonical field definition
///
/// Holds the presentation hints the import UI renders, the semantic input
/// type validation dispatches on, and the header rule that decides whether a
/// raw column header names this field. Definitions carry no match state.
#[derive(Debug, Clone)]
pub struct FieldDefinition {
    /// Stable field identifier
    pub key: FieldKey,
    /// Human label shown in the mapping UI
    pub display_text: String,
    /// Widget family
    pub category: FieldCategory,
    /// Semantic subtype for validation
    pub input_type: InputType,
    /// Whether matched cells skip value checks entirely
    pub free_form: bool,
    /// Whether the preview table may sort on this field
    pub sortable: bool,
    /// Alignment hint for the preview table
    pub align: ColumnAlign,
    /// Whether the field renders greyed out
    pub disabled: bool,
    /// Header rule deciding whether a raw column header names this field
    rule: HeaderRule,
}

impl FieldDefinition {
    /// Create a field definition with default presentation hints
    #[must_use]
    pub fn new(
        key: FieldKey,
        category: FieldCategory,
        input_type: InputType,
        rule: HeaderRule,
    ) -> Self {
        Self {
            key,
            display_text: key.as_str().to_string(),
            category,
            input_type,
            free_form: false,
            sortable: false,
            align: ColumnAlign::Left,
            disabled: false,
            rule,
        }
    }

    /// Override the label shown in the mapping UI
    #[must_use]
    pub fn with_display_text(mut self, text: impl Into<String>) -> Self {
        self.display_text = text.into();
        self
    }

    /// Accept any cell value once the column is matched
    #[must_use]
    pub const fn free_form(mut self) -> Self {
        self.free_form = true;
        self
    }

    /// Allow the preview table to sort on this field
    #[must_use]
    pub const fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Set the alignment hint
    #[must_use]
    pub const fn with_align(mut self, align: ColumnAlign) -> Self {
        self.align = align;
        self
    }

    /// Render the field greyed out in the mapping UI
    #[must_use]
    pub const fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Check whether a raw column header names this field
    ///
    /// Pure predicate over the header string. Whether the field is already
    /// claimed by another column is the session's business, not the
    /// definition's.
    #[must_use]
    pub fn matches_header(&self, header: &str) -> bool {
        self.rule.matches(header)
    }

    /// Header rule backing [`Self::matches_header`]
    #[must_use]
    pub const fn rule(&self) -> &HeaderRule {
        &self.rule
    }
}
