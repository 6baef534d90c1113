//! Configuration enumerations.

/// Errors raised while loading or validating configuration.
pub mod configuration_error;

/// A model entry of a connection: a name or an inline schema.
pub mod model_config;
