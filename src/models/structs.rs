//! Model structures.

/// Loaded model handle.
pub mod model;

/// Declarative model description (TOML model files, inline definitions).
pub mod model_schema;

/// One column of a model schema.
pub mod column_schema;

/// Association declared in a model schema.
pub mod association_schema;

/// Association wired between two loaded models.
pub mod association;

/// Late-bound link from a model to its connection.
pub mod connection_link;

/// Immutable registry of loaded models.
pub mod model_registry;

/// Mutable accumulator producing a registry.
pub mod model_registry_builder;
