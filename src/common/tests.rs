#[cfg(test)]
mod common_tests {
    use crate::common::common::parse_log_level;
    use crate::common::structs::custom_error::CustomError;

    #[test]
    fn test_parse_log_level_known_levels() {
        assert_eq!(parse_log_level("off").unwrap(), log::LevelFilter::Off);
        assert_eq!(parse_log_level("trace").unwrap(), log::LevelFilter::Trace);
        assert_eq!(parse_log_level("debug").unwrap(), log::LevelFilter::Debug);
        assert_eq!(parse_log_level("info").unwrap(), log::LevelFilter::Info);
        assert_eq!(parse_log_level("warn").unwrap(), log::LevelFilter::Warn);
        assert_eq!(parse_log_level("error").unwrap(), log::LevelFilter::Error);
    }

    #[test]
    fn test_parse_log_level_unknown_level() {
        let error = parse_log_level("verbose").unwrap_err();
        assert_eq!(error.message(), "Unknown log level encountered: 'verbose'");
    }

    #[test]
    fn test_custom_error_display() {
        let error = CustomError::new("could not create config file");
        assert_eq!(format!("{}", error), "could not create config file");
    }
}
