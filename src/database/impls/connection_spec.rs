use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::json;
use crate::database::enums::dialect::Dialect;
use crate::database::structs::connection_options::ConnectionOptions;
use crate::database::structs::connection_spec::ConnectionSpec;
use crate::models::enums::model_reference::ModelReference;

static URI_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-zA-Z]+://").unwrap());

const DEFAULT_HOST: &str = "127.0.0.1";

impl ConnectionSpec {
    pub fn new(database: &str) -> ConnectionSpec {
        ConnectionSpec {
            database: database.to_string(),
            username: None,
            password: None,
            options: ConnectionOptions::default(),
            models: Vec::new(),
        }
    }

    pub fn with_credentials(mut self, username: &str, password: &str) -> ConnectionSpec {
        self.username = Some(username.to_string());
        self.password = Some(password.to_string());
        self
    }

    pub fn with_options(mut self, options: ConnectionOptions) -> ConnectionSpec {
        self.options = options;
        self
    }

    pub fn with_model(mut self, model: ModelReference) -> ConnectionSpec {
        self.models.push(model);
        self
    }

    pub fn is_uri(&self) -> bool {
        URI_PATTERN.is_match(&self.database)
    }

    /// Effective dialect: explicit option, then URI scheme, then mysql.
    pub fn dialect(&self) -> Dialect {
        if let Some(dialect) = self.options.dialect {
            return dialect;
        }
        if self.is_uri() {
            if let Some(dialect) = Dialect::from_uri(&self.database) {
                return dialect;
            }
        }
        Dialect::default()
    }

    /// Key identifying the physical database behind this spec.
    ///
    /// A URI is its own key. Anything else is keyed by the JSON form of
    /// dialect, credentials, host, storage, port and database name, with the
    /// dialect and host defaults applied only here.
    pub fn cache_key(&self) -> String {
        if self.is_uri() {
            return self.database.clone();
        }
        json!({
            "dialect": self.options.dialect.unwrap_or_default(),
            "username": self.username,
            "password": self.password,
            "host": self.options.host.as_deref().unwrap_or(DEFAULT_HOST),
            "storage": self.options.storage,
            "port": self.options.port,
            "database": self.database,
        })
        .to_string()
    }

    pub fn model_names(&self) -> Vec<&str> {
        self.models.iter().map(|model| model.name()).collect()
    }
}
