//! Cell validation
//!
//! Once a column is matched to a field, every cell in that column is
//! checked against the field's semantic type. Validation is informational:
//! a failing cell comes back as `is_valid: false` on the report, never as an
//! error. Imported files are full of surprises and the preview's job is to
//! show them, not to stop on them.

pub mod rules;

use regex::Regex;

use crate::dates::DateParser;
use crate::error::{ColumnMapperError, Result};
use crate::refdata::ReferenceData;
use crate::report::CellReport;
use crate::schema::{FieldDefinition, FieldKey, InputType};

/// Pattern for the optional email field: local part, at sign, dotted domain
const EMAIL_PATTERN: &str = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";

/// Everything a validation call needs besides the cell value itself
///
/// Reference lists and the date parser are borrowed per invocation; the
/// validator holds no state about either.
#[derive(Clone, Copy)]
pub struct ValidationContext<'a> {
    /// Host-supplied lookup lists
    pub refs: &'a ReferenceData,
    /// Host-supplied date parser; `None` marks every date cell invalid
    pub date_parser: Option<&'a dyn DateParser>,
}

impl<'a> ValidationContext<'a> {
    /// Context over reference lists, with no date parser attached
    #[must_use]
    pub const fn new(refs: &'a ReferenceData) -> Self {
        Self {
            refs,
            date_parser: None,
        }
    }

    /// Attach a date parser
    #[must_use]
    pub const fn with_date_parser(mut self, parser: &'a dyn DateParser) -> Self {
        self.date_parser = Some(parser);
        self
    }
}

/// Validates cells against their matched field's input type
#[derive(Debug, Clone)]
pub struct CellValidator {
    email: Regex,
}

impl CellValidator {
    /// Create a validator, compiling its value patterns
    pub fn new() -> Result<Self> {
        let email = Regex::new(EMAIL_PATTERN).map_err(|source| {
            ColumnMapperError::InvalidPattern {
                field: FieldKey::EmailAddress,
                source,
            }
        })?;
        Ok(Self { email })
    }

    /// Validate one cell against its field definition
    ///
    /// Returns a fresh report carrying the field's display name, the echoed
    /// value and the verdict. The inputs are only borrowed; nothing is
    /// mutated, so repeated calls with the same inputs give the same answer.
    #[must_use]
    pub fn validate(
        &self,
        field: &FieldDefinition,
        value: Option<&str>,
        ctx: &ValidationContext<'_>,
    ) -> CellReport {
        CellReport {
            field: field.key,
            name: field.display_text.clone(),
            value: value.map(str::to_string),
            is_valid: self.check(field, value, ctx),
        }
    }

    /// Per-type dispatch
    fn check(
        &self,
        field: &FieldDefinition,
        value: Option<&str>,
        ctx: &ValidationContext<'_>,
    ) -> bool {
        // Free-form identifier fields accept whatever the file carried
        if field.free_form {
            return true;
        }

        match field.input_type {
            InputType::Plan => value.is_some_and(|v| rules::plan_matches(v, &ctx.refs.plans)),
            InputType::Text => rules::is_string_valid(value),
            InputType::Country => {
                value.is_some_and(|v| rules::is_valid_country(v, &ctx.refs.countries))
            }
            InputType::ApplicantType => {
                value.is_some_and(|v| rules::policy_type_matches(v, &ctx.refs.policy_types))
            }
            // Email is the one optional field: absent or empty passes
            InputType::Email => match value {
                None | Some("") => true,
                Some(v) => self.email.is_match(v),
            },
            InputType::Gender => {
                value.is_some_and(|v| rules::gender_matches(v, &ctx.refs.genders))
            }
            InputType::Date => match (value, ctx.date_parser) {
                (Some(v), Some(parser)) => parser.parse(v).is_some(),
                _ => false,
            },
            InputType::Number => true,
        }
    }
}
