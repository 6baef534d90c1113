use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrmError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Unsupported dialect: {0}")]
    UnsupportedDialect(String),

    #[error("Invalid identifier `{identifier}` in model {model}")]
    InvalidIdentifier {
        model: String,
        identifier: String,
    },

    #[error("Unsupported value for connection option {key}: {value}")]
    UnsupportedOption {
        key: String,
        value: String,
    },

    #[error("Import error: {0}")]
    ImportError(String),

    #[error("Connection to {0} is closed")]
    Closed(String),

    #[error("Database error: {0}")]
    SqlxError(#[from] sqlx::Error),
}

/// Every close failure collected while tearing the connection cache down.
#[derive(Debug, Default)]
pub struct ShutdownError {
    pub failures: Vec<(String, OrmError)>,
}

impl ShutdownError {
    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn merge(&mut self, other: ShutdownError) {
        self.failures.extend(other.failures);
    }

    pub fn into_result(self) -> Result<(), ShutdownError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ShutdownError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unable to close {} connection(s)", self.failures.len())?;
        for (key, error) in &self.failures {
            write!(f, "; {}: {}", key, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ShutdownError {}
