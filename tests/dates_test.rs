#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use col_mapper::dates::{
        ChronoDateParser, DateFormatConfig, DateParser, detect_date_format, parse_date_string,
    };

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_parse_all_configured_formats() {
        let config = DateFormatConfig::default();

        assert_eq!(
            parse_date_string("2023-01-15", &config),
            Some(ymd(2023, 1, 15))
        );
        assert_eq!(
            parse_date_string("15-01-2023", &config),
            Some(ymd(2023, 1, 15))
        );
        assert_eq!(
            parse_date_string("01/15/2023", &config),
            Some(ymd(2023, 1, 15))
        );
        assert_eq!(
            parse_date_string("15/01/2023", &config),
            Some(ymd(2023, 1, 15))
        );
        assert_eq!(
            parse_date_string("15.01.2023", &config),
            Some(ymd(2023, 1, 15))
        );
        assert_eq!(
            parse_date_string("20230115", &config),
            Some(ymd(2023, 1, 15))
        );
        assert_eq!(
            parse_date_string("15 Jan 2023", &config),
            Some(ymd(2023, 1, 15))
        );
        assert_eq!(
            parse_date_string("15 January 2023", &config),
            Some(ymd(2023, 1, 15))
        );
    }

    #[test]
    fn test_format_detection_shapes() {
        assert_eq!(detect_date_format("2023-01-15").as_deref(), Some("%Y-%m-%d"));
        assert_eq!(detect_date_format("2023/01/15").as_deref(), Some("%Y/%m/%d"));
        assert_eq!(detect_date_format("15/01/2023").as_deref(), Some("%d/%m/%Y"));
        assert_eq!(detect_date_format("15.01.2023").as_deref(), Some("%d.%m.%Y"));
        assert_eq!(detect_date_format("20230115").as_deref(), Some("%Y%m%d"));
        assert_eq!(detect_date_format("January 15, 2023"), None);
    }

    #[test]
    fn test_detection_rescues_unlisted_formats() {
        // YYYY/MM/DD is not in the default format list
        let config = DateFormatConfig {
            date_formats: vec![],
            enable_format_detection: true,
        };
        assert_eq!(
            parse_date_string("2023/01/15", &config),
            Some(ymd(2023, 1, 15))
        );

        let no_detection = DateFormatConfig {
            date_formats: vec![],
            enable_format_detection: false,
        };
        assert_eq!(parse_date_string("2023/01/15", &no_detection), None);
    }

    #[test]
    fn test_impossible_dates_rejected() {
        let config = DateFormatConfig::default();

        assert_eq!(parse_date_string("not a date", &config), None);
        assert_eq!(parse_date_string("2023-13-40", &config), None);
        assert_eq!(parse_date_string("31/02/2023", &config), None);
    }

    #[test]
    fn test_chrono_parser_trims_cell_padding() {
        let parser = ChronoDateParser::default();

        assert_eq!(parser.parse(" 2023-01-15 "), Some(ymd(2023, 1, 15)));
        assert_eq!(parser.parse("2023-01-15"), Some(ymd(2023, 1, 15)));
        assert_eq!(parser.parse(""), None);
    }
}
