//! Model definition traits.

/// Describes a model to the ORM and optionally declares its associations.
pub mod model_definition;
