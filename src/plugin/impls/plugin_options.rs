use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::enums::model_config::ModelConfig;
use crate::config::structs::connection_config::ConnectionConfig;
use crate::config::structs::database_entry_config::DatabaseEntryConfig;
use crate::config::structs::models_config::ModelsConfig;
use crate::database::helpers::is_valid_identifier;
use crate::database::structs::connection_options::ConnectionOptions;
use crate::database::structs::connection_spec::ConnectionSpec;
use crate::database::traits::orm_factory::OrmFactory;
use crate::models::enums::model_reference::ModelReference;
use crate::plugin::structs::plugin_options::PluginOptions;
use crate::plugin::structs::validated_options::ValidatedOptions;

impl fmt::Debug for PluginOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PluginOptions")
            .field("orm", &self.orm.as_ref().map(|_| "<orm>"))
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("options", &self.options)
            .field("models_path", &self.models_path)
            .field("databases", &self.databases)
            .field("connections", &self.connections)
            .finish()
    }
}

impl fmt::Debug for ValidatedOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatedOptions")
            .field("models_path", &self.models_path)
            .field("connections", &self.connections)
            .finish()
    }
}

impl From<&ModelConfig> for ModelReference {
    fn from(config: &ModelConfig) -> Self {
        match config {
            ModelConfig::Name(name) => ModelReference::Named(name.clone()),
            ModelConfig::Inline { name, schema } => ModelReference::defined(name, Arc::new(schema.clone())),
        }
    }
}

impl From<&ConnectionConfig> for ConnectionSpec {
    fn from(config: &ConnectionConfig) -> Self {
        ConnectionSpec {
            database: config.database.clone(),
            username: config.username.clone(),
            password: config.password.clone(),
            options: config.options.clone(),
            models: config.models.iter().map(ModelReference::from).collect(),
        }
    }
}

impl PluginOptions {
    pub fn new() -> PluginOptions {
        PluginOptions::default()
    }

    /// Options as written in the `[models]` section; the ORM still has to be
    /// supplied with [`PluginOptions::with_orm`].
    pub fn from_config(config: &ModelsConfig) -> PluginOptions {
        PluginOptions {
            orm: None,
            username: config.username.clone(),
            password: config.password.clone(),
            options: config.options.clone(),
            models_path: config.models_path.as_ref().map(PathBuf::from),
            databases: config.databases.clone(),
            connections: config
                .connections
                .as_ref()
                .map(|connections| connections.iter().map(ConnectionSpec::from).collect()),
        }
    }

    pub fn with_orm(mut self, orm: Arc<dyn OrmFactory>) -> PluginOptions {
        self.orm = Some(orm);
        self
    }

    pub fn with_credentials(mut self, username: &str, password: &str) -> PluginOptions {
        self.username = Some(username.to_string());
        self.password = Some(password.to_string());
        self
    }

    pub fn with_options(mut self, options: ConnectionOptions) -> PluginOptions {
        self.options = Some(options);
        self
    }

    pub fn with_models_path(mut self, path: impl Into<PathBuf>) -> PluginOptions {
        self.models_path = Some(path.into());
        self
    }

    pub fn with_database(mut self, database: &str, models: &[&str]) -> PluginOptions {
        self.databases.get_or_insert_with(Vec::new).push(DatabaseEntryConfig {
            database: database.to_string(),
            models: models.iter().map(|model| model.to_string()).collect(),
        });
        self
    }

    pub fn with_connection(mut self, spec: ConnectionSpec) -> PluginOptions {
        self.connections.get_or_insert_with(Vec::new).push(spec);
        self
    }

    /// Checks every constraint and reports all violations at once.
    ///
    /// The flat shape is expanded into one connection spec per `databases`
    /// entry sharing the top-level credentials and options.
    pub fn validate(self) -> Result<ValidatedOptions, ConfigurationError> {
        let mut violations = Vec::new();

        if self.orm.is_none() {
            violations.push(String::from("\"orm\" is required"));
        }

        let (label, connections) = match (self.databases, self.connections) {
            (Some(_), Some(_)) => {
                violations.push(String::from("\"databases\" and \"connections\" are mutually exclusive"));
                ("connections", Vec::new())
            }
            (Some(databases), None) => {
                let options = self.options.unwrap_or_default();
                let connections = databases
                    .into_iter()
                    .map(|entry| ConnectionSpec {
                        database: entry.database,
                        username: self.username.clone(),
                        password: self.password.clone(),
                        options: options.clone(),
                        models: entry.models.into_iter().map(ModelReference::Named).collect(),
                    })
                    .collect();
                ("databases", connections)
            }
            (None, connections) => {
                for (field, present) in [
                    ("username", self.username.is_some()),
                    ("password", self.password.is_some()),
                    ("options", self.options.is_some()),
                ] {
                    if present {
                        violations.push(format!("\"{}\" is only allowed together with \"databases\"", field));
                    }
                }
                ("connections", connections.unwrap_or_default())
            }
        };

        let mut uses_named = false;
        for (index, spec) in connections.iter().enumerate() {
            if spec.database.trim().is_empty() {
                violations.push(format!("\"{}[{}].database\" is not allowed to be empty", label, index));
            }
            if spec.options.port == Some(0) {
                violations.push(format!("\"{}[{}].options.port\" must be greater than 0", label, index));
            }
            if spec.options.max_connections == Some(0) {
                violations.push(format!("\"{}[{}].options.max_connections\" must be greater than 0", label, index));
            }
            for (model_index, model) in spec.models.iter().enumerate() {
                if model.name().trim().is_empty() {
                    violations.push(format!(
                        "\"{}[{}].models[{}]\" name is not allowed to be empty",
                        label, index, model_index
                    ));
                } else if !is_valid_identifier(model.name()) {
                    // Named models are file names below "models_path".
                    violations.push(format!(
                        "\"{}[{}].models[{}]\" name \"{}\" must be a valid identifier",
                        label,
                        index,
                        model_index,
                        model.name()
                    ));
                }
                if model.is_named() {
                    uses_named = true;
                    if self.models_path.is_none() {
                        violations.push(format!(
                            "\"{}[{}].models[{}]\" refers to model \"{}\" by name and requires \"models_path\"",
                            label,
                            index,
                            model_index,
                            model.name()
                        ));
                    }
                }
            }
        }

        if let Some(path) = &self.models_path {
            if uses_named && !path.is_dir() {
                violations.push(format!("\"models_path\" must be an existing directory, got {:?}", path));
            }
        }

        match self.orm {
            Some(orm) if violations.is_empty() => Ok(ValidatedOptions {
                orm,
                models_path: self.models_path,
                connections,
            }),
            _ => Err(ConfigurationError::invalid(violations)),
        }
    }
}
