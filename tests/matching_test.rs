#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use col_mapper::schema::normalize_header;
    use col_mapper::{FieldKey, FieldRegistry, MatchSession};

    /// Create a session over the full system registry
    fn create_test_session() -> MatchSession {
        MatchSession::new(Arc::new(FieldRegistry::system().unwrap())).unwrap()
    }

    /// Field keys claimed for the given headers, in column order
    fn match_all(session: &mut MatchSession, headers: &[&str]) -> Vec<Option<FieldKey>> {
        session
            .match_headers(headers)
            .into_iter()
            .map(|column| column.field_key)
            .collect()
    }

    #[test]
    fn test_normalize_header_strips_first_space_only() {
        assert_eq!(normalize_header("FIRST NAME"), "firstname");
        assert_eq!(normalize_header(" First Name "), "first name ");
        assert_eq!(normalize_header("Date of Birth"), "dateof birth");
        assert_eq!(normalize_header(""), "");
    }

    #[test]
    fn test_header_rule_is_repeatable() {
        let registry = FieldRegistry::system().unwrap();
        let first_name = registry.get(FieldKey::FirstName).unwrap();

        // Pure predicate: asking twice changes nothing
        assert!(first_name.matches_header("First Name"));
        assert!(first_name.matches_header("First Name"));
        assert!(!first_name.matches_header("Favourite Colour"));
    }

    #[test]
    fn test_header_variants_reach_first_name() {
        let variants = [
            "First Name",
            "FIRST NAME",
            "firstname",
            " First Name ",
            "first_name",
        ];
        for header in variants {
            let mut session = create_test_session();
            assert_eq!(
                session.match_header(0, header),
                Some(FieldKey::FirstName),
                "header {header:?} should match First Name"
            );
        }
    }

    #[test]
    fn test_first_match_wins_on_duplicate_headers() {
        let mut session = create_test_session();
        let matches = match_all(&mut session, &["Date", "Date"]);

        assert_eq!(matches, vec![Some(FieldKey::DateOfBirth), None]);
        assert_eq!(session.column_for(FieldKey::DateOfBirth), Some(0));
        assert!(session.is_claimed(FieldKey::DateOfBirth));
    }

    #[test]
    fn test_skipped_claim_falls_through_to_later_fields() {
        let mut session = create_test_session();

        // "First Last" names both name fields; the claimed one is skipped
        // and the next field in registration order still gets its turn
        let matches = match_all(&mut session, &["First Name", "First Last"]);
        assert_eq!(
            matches,
            vec![Some(FieldKey::FirstName), Some(FieldKey::LastName)]
        );
    }

    #[test]
    fn test_student_number_exclusions() {
        let mut session = create_test_session();
        assert_eq!(session.match_header(0, "Student Phone Number"), None);

        let mut session = create_test_session();
        assert_eq!(
            session.match_header(0, "Student Number"),
            Some(FieldKey::StudentNumber)
        );

        let mut session = create_test_session();
        assert_eq!(
            session.match_header(0, "Passport Number"),
            Some(FieldKey::PassportNumber)
        );
    }

    #[test]
    fn test_trip_dates_do_not_take_birth_date() {
        let mut session = create_test_session();
        let matches = match_all(
            &mut session,
            &["Trip Start Date", "Trip End Date", "Date of Birth"],
        );

        assert_eq!(
            matches,
            vec![
                Some(FieldKey::TripStartDate),
                Some(FieldKey::TripEndDate),
                Some(FieldKey::DateOfBirth),
            ]
        );
    }

    #[test]
    fn test_birth_date_first_then_trip_dates() {
        let mut session = create_test_session();
        let matches = match_all(&mut session, &["DOB", "Start Date", "End Date"]);

        assert_eq!(
            matches,
            vec![
                Some(FieldKey::DateOfBirth),
                Some(FieldKey::TripStartDate),
                Some(FieldKey::TripEndDate),
            ]
        );
    }

    #[test]
    fn test_country_family_disambiguation() {
        let mut session = create_test_session();
        let matches = match_all(
            &mut session,
            &["Country of Residence", "Nationality", "Country of Destination"],
        );

        assert_eq!(
            matches,
            vec![
                Some(FieldKey::CountryOfResidence),
                Some(FieldKey::Nationality),
                Some(FieldKey::CountryOfDestination),
            ]
        );
    }

    #[test]
    fn test_bare_country_goes_to_residence() {
        let mut session = create_test_session();
        assert_eq!(
            session.match_header(0, "Country"),
            Some(FieldKey::CountryOfResidence)
        );
    }

    #[test]
    fn test_unmatched_headers() {
        let mut session = create_test_session();

        assert_eq!(session.match_header(0, "Favourite Colour"), None);
        assert_eq!(session.match_header(1, ""), None);
        // Close variants without a listed pattern stay unmatched
        assert_eq!(session.match_header(2, "Given Name"), None);
        assert!(session.bindings().is_empty());
    }

    #[test]
    fn test_stale_session_suppresses_then_reset_recovers() {
        let mut session = create_test_session();
        assert_eq!(
            session.match_header(0, "First Name"),
            Some(FieldKey::FirstName)
        );

        // Same session, next file, no reset: the old claim swallows the match
        assert_eq!(session.match_header(0, "First Name"), None);

        session.reset();
        assert_eq!(
            session.match_header(0, "First Name"),
            Some(FieldKey::FirstName)
        );
    }

    #[test]
    fn test_bindings_and_reverse_lookup() {
        let mut session = create_test_session();
        session.match_headers(&["Email", "Plan"]);

        // Bindings come back in registration order, not column order
        assert_eq!(
            session.bindings(),
            vec![(FieldKey::Plan, 1), (FieldKey::EmailAddress, 0)]
        );
        assert_eq!(session.field_for_column(0), Some(FieldKey::EmailAddress));
        assert_eq!(session.field_for_column(1), Some(FieldKey::Plan));
        assert_eq!(session.field_for_column(2), None);
        assert_eq!(session.column_for(FieldKey::Plan), Some(1));
    }

    #[test]
    fn test_column_match_records_header_text() {
        let mut session = create_test_session();
        let matches = session.match_headers(&["  Plan  ", "Whatever"]);

        assert_eq!(matches[0].header, "  Plan  ");
        assert!(matches[0].is_matched());
        assert!(!matches[1].is_matched());
        assert_eq!(matches[1].column_index, 1);
    }
}
