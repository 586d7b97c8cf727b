#[cfg(test)]
mod tests {
    use col_mapper::schema::{
        ColumnAlign, FieldCategory, FieldKey, FieldRegistry, InputType, SystemFields,
    };
    use col_mapper::ColumnMapperError;

    #[test]
    fn test_system_registry_field_order() {
        let registry = FieldRegistry::system().unwrap();
        let keys: Vec<FieldKey> = registry.fields().iter().map(|field| field.key).collect();

        assert_eq!(
            keys,
            vec![
                FieldKey::Plan,
                FieldKey::FirstName,
                FieldKey::LastName,
                FieldKey::DateOfBirth,
                FieldKey::Gender,
                FieldKey::EmailAddress,
                FieldKey::ApplicantType,
                FieldKey::CountryOfResidence,
                FieldKey::Nationality,
                FieldKey::CountryOfDestination,
                FieldKey::TripStartDate,
                FieldKey::TripEndDate,
                FieldKey::PassportNumber,
                FieldKey::StudentNumber,
                FieldKey::GroupName,
            ]
        );
        assert_eq!(registry.len(), 15);
        assert!(!registry.is_empty());
    }

    #[test]
    fn test_display_text_defaults_to_canonical_key() {
        let registry = FieldRegistry::system().unwrap();
        for field in registry.fields() {
            assert_eq!(field.display_text, field.key.as_str());
        }
    }

    #[test]
    fn test_lookup_by_key() {
        let registry = FieldRegistry::system().unwrap();

        let dob = registry.get(FieldKey::DateOfBirth).unwrap();
        assert_eq!(dob.category, FieldCategory::DatePicker);
        assert_eq!(dob.input_type, InputType::Date);
        assert_eq!(dob.align, ColumnAlign::Center);
        assert!(dob.sortable);
        assert!(!dob.disabled);

        let email = registry.get(FieldKey::EmailAddress).unwrap();
        assert_eq!(email.category, FieldCategory::TextField);
        assert_eq!(email.input_type, InputType::Email);

        let country = registry.get(FieldKey::Nationality).unwrap();
        assert_eq!(country.category, FieldCategory::Select);
        assert_eq!(country.input_type, InputType::Country);
    }

    #[test]
    fn test_free_form_flags() {
        let registry = FieldRegistry::system().unwrap();
        let free_form: Vec<FieldKey> = registry
            .fields()
            .iter()
            .filter(|field| field.free_form)
            .map(|field| field.key)
            .collect();

        assert_eq!(
            free_form,
            vec![
                FieldKey::PassportNumber,
                FieldKey::StudentNumber,
                FieldKey::GroupName,
            ]
        );
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let fields = vec![SystemFields::plan().unwrap(), SystemFields::plan().unwrap()];
        let err = FieldRegistry::from_fields(fields).unwrap_err();
        assert!(matches!(
            err,
            ColumnMapperError::DuplicateField(FieldKey::Plan)
        ));
    }

    #[test]
    fn test_subset_registry_lookup() {
        let registry = FieldRegistry::from_fields(vec![
            SystemFields::first_name().unwrap(),
            SystemFields::last_name().unwrap(),
        ])
        .unwrap();

        assert_eq!(registry.len(), 2);
        assert!(registry.get(FieldKey::FirstName).is_some());
        assert!(registry.get(FieldKey::Plan).is_none());
    }

    #[test]
    fn test_input_type_wire_names() {
        assert_eq!(InputType::ApplicantType.as_str(), "applicantType");
        assert_eq!(InputType::Plan.as_str(), "plan");
        assert_eq!(InputType::Email.as_str(), "email");
        assert_eq!(InputType::Number.as_str(), "number");

        assert_eq!(FieldKey::ApplicantType.as_str(), "Type");
        assert_eq!(
            FieldKey::CountryOfResidence.to_string(),
            "Country of Residence"
        );
    }

    #[test]
    fn test_field_key_serializes_to_canonical_string() {
        let json = serde_json::to_string(&FieldKey::FirstName).unwrap();
        assert_eq!(json, "\"First Name\"");

        let back: FieldKey = serde_json::from_str("\"Trip End Date\"").unwrap();
        assert_eq!(back, FieldKey::TripEndDate);
    }

    #[test]
    fn test_display_text_override() {
        let field = SystemFields::group_name()
            .unwrap()
            .with_display_text("Company / Group");
        assert_eq!(field.display_text, "Company / Group");
        assert_eq!(field.key, FieldKey::GroupName);
    }
}
