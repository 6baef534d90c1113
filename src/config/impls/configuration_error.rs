use crate::config::enums::configuration_error::ConfigurationError;

impl std::fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ConfigurationError::IOError(e) => e.fmt(f),
            ConfigurationError::ParseError(e) => e.fmt(f),
            ConfigurationError::Invalid { violations } => write!(f, "{}", violations.join("; ")),
        }
    }
}

impl std::error::Error for ConfigurationError {}

impl ConfigurationError {
    pub fn invalid(violations: Vec<String>) -> ConfigurationError {
        ConfigurationError::Invalid { violations }
    }

    pub fn violations(&self) -> &[String] {
        match self {
            ConfigurationError::Invalid { violations } => violations,
            _ => &[],
        }
    }
}
