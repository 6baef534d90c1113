//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Root configuration structure containing all settings.
pub mod configuration;

/// HTTP server configuration (address, workers, timeouts).
pub mod http_server_config;

/// Models plugin options as written in the configuration file.
pub mod models_config;

/// One entry of the flat `databases` list.
pub mod database_entry_config;

/// One entry of the `connections` list.
pub mod connection_config;
