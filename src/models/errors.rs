use std::path::PathBuf;
use thiserror::Error;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::database::errors::OrmError;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Invalid configuration: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("The connection {key} is defined multiple times.")]
    DuplicateConnection { key: String },

    #[error("The model {name} is defined multiple times.")]
    DuplicateModel { name: String },

    #[error("{0}")]
    Connection(OrmError),

    #[error("Unable to import model {name}: {source}")]
    Import {
        name: String,
        #[source]
        source: OrmError,
    },

    #[error("Unable to read model file {path:?} for model {name}: {source}")]
    ModelFile {
        name: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unable to parse model file {path:?} for model {name}: {source}")]
    ModelFileParse {
        name: String,
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    Association(#[from] AssociationError),

    #[error("Plugin {0} is already registered")]
    AlreadyRegistered(String),

    #[error("Unable to sync model {name}: {source}")]
    Sync {
        name: String,
        #[source]
        source: OrmError,
    },
}

#[derive(Error, Debug)]
pub enum AssociationError {
    #[error("Model {model} references unknown model {target}")]
    UnknownModel { model: String, target: String },

    #[error("Model {model} already has a {kind} association to {target}")]
    Duplicate {
        model: String,
        target: String,
        kind: String,
    },

    #[error("Model {model} uses invalid foreign key {foreign_key:?} towards {target}")]
    InvalidForeignKey {
        model: String,
        target: String,
        foreign_key: String,
    },

    #[error("Association of model {model} failed: {message}")]
    Failed { model: String, message: String },
}
