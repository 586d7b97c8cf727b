//! Centralized catalog of canonical applicant fields
//!
//! Single source of truth for the fields an imported policy spreadsheet can
//! map to. Registration order is matching priority: a session walks this
//! list top to bottom and the first unclaimed match wins, so the more
//! specific rules (passport before student number, the excluded trip dates
//! around the birth date) are ordered deliberately.

use rustc_hash::FxHashMap;

use crate::error::{ColumnMapperError, Result};
use crate::schema::field::{ColumnAlign, FieldCategory, FieldDefinition, FieldKey, InputType};
use crate::schema::rules::HeaderRule;

/// Canonical field constructors
///
/// Mirrors the import UI's field list; each constructor carries the header
/// patterns that have historically named the field in customer files.
#[derive(Debug)]
pub struct SystemFields;

impl SystemFields {
    /// Insurance plan column
    pub fn plan() -> Result<FieldDefinition> {
        Ok(FieldDefinition::new(
            FieldKey::Plan,
            FieldCategory::Select,
            InputType::Plan,
            HeaderRule::any_of(FieldKey::Plan, &["plan"])?,
        )
        .sortable())
    }

    /// Applicant first name
    pub fn first_name() -> Result<FieldDefinition> {
        Ok(FieldDefinition::new(
            FieldKey::FirstName,
            FieldCategory::TextField,
            InputType::Text,
            HeaderRule::any_of(FieldKey::FirstName, &["first", "first_name", "firstname"])?,
        )
        .sortable())
    }

    /// Applicant last name
    pub fn last_name() -> Result<FieldDefinition> {
        Ok(FieldDefinition::new(
            FieldKey::LastName,
            FieldCategory::TextField,
            InputType::Text,
            HeaderRule::any_of(FieldKey::LastName, &["last", "last_name", "lastname"])?,
        )
        .sortable())
    }

    /// Applicant date of birth
    ///
    /// The bare `date` pattern makes this the default home for generic date
    /// columns; the excludes keep trip date columns out.
    pub fn date_of_birth() -> Result<FieldDefinition> {
        Ok(FieldDefinition::new(
            FieldKey::DateOfBirth,
            FieldCategory::DatePicker,
            InputType::Date,
            HeaderRule::include_exclude(
                FieldKey::DateOfBirth,
                &["birth", "dob", "date"],
                &["trip", "start", "end"],
            )?,
        )
        .sortable()
        .with_align(ColumnAlign::Center))
    }

    /// Applicant gender
    pub fn gender() -> Result<FieldDefinition> {
        Ok(FieldDefinition::new(
            FieldKey::Gender,
            FieldCategory::Select,
            InputType::Gender,
            HeaderRule::any_of(FieldKey::Gender, &["gender", "sex"])?,
        ))
    }

    /// Contact email, optional in customer files
    pub fn email_address() -> Result<FieldDefinition> {
        Ok(FieldDefinition::new(
            FieldKey::EmailAddress,
            FieldCategory::TextField,
            InputType::Email,
            HeaderRule::any_of(FieldKey::EmailAddress, &["email", "e-mail", "mail"])?,
        ))
    }

    /// Applicant or policy type
    pub fn applicant_type() -> Result<FieldDefinition> {
        Ok(FieldDefinition::new(
            FieldKey::ApplicantType,
            FieldCategory::Select,
            InputType::ApplicantType,
            HeaderRule::any_of(FieldKey::ApplicantType, &["type"])?,
        ))
    }

    /// Country the applicant lives in
    ///
    /// Claims bare `country` headers; nationality and destination columns
    /// are excluded so their own fields can take them.
    pub fn country_of_residence() -> Result<FieldDefinition> {
        Ok(FieldDefinition::new(
            FieldKey::CountryOfResidence,
            FieldCategory::Select,
            InputType::Country,
            HeaderRule::include_exclude(
                FieldKey::CountryOfResidence,
                &["residence", "country"],
                &["destination", "nationality"],
            )?,
        ))
    }

    /// Applicant nationality
    pub fn nationality() -> Result<FieldDefinition> {
        Ok(FieldDefinition::new(
            FieldKey::Nationality,
            FieldCategory::Select,
            InputType::Country,
            HeaderRule::any_of(FieldKey::Nationality, &["nationality", "citizenship"])?,
        ))
    }

    /// Destination country for travel policies
    pub fn country_of_destination() -> Result<FieldDefinition> {
        Ok(FieldDefinition::new(
            FieldKey::CountryOfDestination,
            FieldCategory::Select,
            InputType::Country,
            HeaderRule::any_of(FieldKey::CountryOfDestination, &["destination"])?,
        ))
    }

    /// First day of the covered trip
    pub fn trip_start_date() -> Result<FieldDefinition> {
        Ok(FieldDefinition::new(
            FieldKey::TripStartDate,
            FieldCategory::DatePicker,
            InputType::Date,
            HeaderRule::include_exclude(FieldKey::TripStartDate, &["start"], &["end", "birth"])?,
        )
        .with_align(ColumnAlign::Center))
    }

    /// Last day of the covered trip
    pub fn trip_end_date() -> Result<FieldDefinition> {
        Ok(FieldDefinition::new(
            FieldKey::TripEndDate,
            FieldCategory::DatePicker,
            InputType::Date,
            HeaderRule::include_exclude(FieldKey::TripEndDate, &["end"], &["start", "birth"])?,
        )
        .with_align(ColumnAlign::Center))
    }

    /// Passport number, free-form
    ///
    /// Registered ahead of the student number so passport columns never run
    /// its broader `number` pattern.
    pub fn passport_number() -> Result<FieldDefinition> {
        Ok(FieldDefinition::new(
            FieldKey::PassportNumber,
            FieldCategory::TextField,
            InputType::Text,
            HeaderRule::any_of(FieldKey::PassportNumber, &["passport"])?,
        )
        .free_form())
    }

    /// Student identification number, free-form
    pub fn student_number() -> Result<FieldDefinition> {
        Ok(FieldDefinition::new(
            FieldKey::StudentNumber,
            FieldCategory::TextField,
            InputType::Number,
            HeaderRule::include_exclude(
                FieldKey::StudentNumber,
                &["student", "number"],
                &["phone", "passport"],
            )?,
        )
        .free_form())
    }

    /// Group or company name, free-form
    pub fn group_name() -> Result<FieldDefinition> {
        Ok(FieldDefinition::new(
            FieldKey::GroupName,
            FieldCategory::TextField,
            InputType::Text,
            HeaderRule::any_of(FieldKey::GroupName, &["group"])?,
        )
        .free_form())
    }

    /// Every canonical field, in registration order
    pub fn all() -> Result<Vec<FieldDefinition>> {
        Ok(vec![
            Self::plan()?,
            Self::first_name()?,
            Self::last_name()?,
            Self::date_of_birth()?,
            Self::gender()?,
            Self::email_address()?,
            Self::applicant_type()?,
            Self::country_of_residence()?,
            Self::nationality()?,
            Self::country_of_destination()?,
            Self::trip_start_date()?,
            Self::trip_end_date()?,
            Self::passport_number()?,
            Self::student_number()?,
            Self::group_name()?,
        ])
    }
}

/// The ordered, keyed set of field definitions a session matches against
#[derive(Debug, Clone)]
pub struct FieldRegistry {
    fields: Vec<FieldDefinition>,
    index: FxHashMap<FieldKey, usize>,
}

impl FieldRegistry {
    /// Build the canonical system registry
    pub fn system() -> Result<Self> {
        Self::from_fields(SystemFields::all()?)
    }

    /// Build a registry from an explicit field list
    ///
    /// The list order becomes matching priority. Duplicate keys are
    /// rejected: one column per field only holds if every key appears once.
    pub fn from_fields(fields: Vec<FieldDefinition>) -> Result<Self> {
        let mut index = FxHashMap::default();
        for (position, field) in fields.iter().enumerate() {
            if index.insert(field.key, position).is_some() {
                return Err(ColumnMapperError::DuplicateField(field.key));
            }
        }
        Ok(Self { fields, index })
    }

    /// All fields in registration order
    #[must_use]
    pub fn fields(&self) -> &[FieldDefinition] {
        &self.fields
    }

    /// Look up a field definition by key
    #[must_use]
    pub fn get(&self, key: FieldKey) -> Option<&FieldDefinition> {
        self.index.get(&key).map(|&position| &self.fields[position])
    }

    /// Number of registered fields
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the registry holds no fields
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
