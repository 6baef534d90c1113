//! Model registry module.
//!
//! Loads model definitions onto the connections declared in configuration,
//! wires their associations and hands back an immutable [`ModelRegistry`].
//!
//! # Load sequence
//!
//! 1. Every connection spec, in declaration order, gets its own connection
//!    from the [`ConnectionCache`](crate::database::structs::connection_cache::ConnectionCache).
//! 2. Every model of that spec is resolved (inline definition or
//!    `<models_path>/<name>.toml`), imported through the connection and
//!    recorded in a [`ModelRegistryBuilder`]. Model names are unique across
//!    all connections.
//! 3. Once everything is loaded the builder is frozen and each model's
//!    associate callback runs once against the complete registry, so a model
//!    can relate to any other model whichever connection loaded it.
//!
//! Each [`Model`] keeps a link to its connection that is resolved through the
//! cache on every call.
//!
//! [`ModelRegistry`]: structs::model_registry::ModelRegistry
//! [`ModelRegistryBuilder`]: structs::model_registry_builder::ModelRegistryBuilder
//! [`Model`]: structs::model::Model

/// Association kinds, column types and model references.
pub mod enums;

/// Error types for loading and associating models.
pub mod errors;

/// Implementation blocks for model structures.
pub mod impls;

/// Model loading entry point.
pub mod loader;

/// Models, schemas, associations and the registry.
pub mod structs;

/// Model definition trait.
pub mod traits;

/// Type aliases for the models module.
pub mod types;
