//! Plugin structures.

/// The models plugin itself.
pub mod models_plugin;

/// Raw plugin options, before validation.
pub mod plugin_options;

/// Normalized options produced by validation.
pub mod validated_options;

/// State published to the host.
pub mod plugin_state;

/// Host implementation backing an actix-web server.
pub mod actix_host;
