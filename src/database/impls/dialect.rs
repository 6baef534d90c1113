use std::fmt;
use crate::database::enums::dialect::Dialect;

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dialect::sqlite3 => write!(f, "sqlite3"),
            Dialect::mysql => write!(f, "mysql"),
            Dialect::pgsql => write!(f, "pgsql"),
        }
    }
}

impl Dialect {
    pub fn url_scheme(&self) -> &'static str {
        match self {
            Dialect::sqlite3 => "sqlite://",
            Dialect::mysql => "mysql://",
            Dialect::pgsql => "postgres://",
        }
    }

    pub fn default_port(&self) -> Option<u16> {
        match self {
            Dialect::sqlite3 => None,
            Dialect::mysql => Some(3306),
            Dialect::pgsql => Some(5432),
        }
    }

    /// Infers the dialect from the scheme of a database URI.
    pub fn from_uri(uri: &str) -> Option<Dialect> {
        let (scheme, _) = uri.split_once(':')?;
        match scheme.to_ascii_lowercase().as_str() {
            "sqlite" | "sqlite3" => Some(Dialect::sqlite3),
            "mysql" | "mariadb" => Some(Dialect::mysql),
            "postgres" | "postgresql" | "pgsql" => Some(Dialect::pgsql),
            _ => None,
        }
    }
}
