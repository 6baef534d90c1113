//! Configuration management module.
//!
//! Loads, parses and validates `config.toml`.
//!
//! # Configuration Structure
//!
//! - **log_level**: `off`, `trace`, `debug`, `info`, `warn` or `error`
//! - **http_server**: the actix-web listener publishing the registry
//! - **models**: connections and models handed to the models plugin, either
//!   the flat shape (`username`, `password`, `options`, `models_path`,
//!   `databases`) or a `connections` list with per-connection credentials
//!
//! # Example
//!
//! ```rust,ignore
//! use actix_sqlx_models::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_from_file("config.toml", false)?;
//! config.validate()?;
//! ```

/// Configuration enumerations (errors, model entries).
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;
