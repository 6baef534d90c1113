//! # Actix-Sqlx Models
//!
//! A configuration driven model registry for actix-web services backed by sqlx.
//!
//! ## Overview
//!
//! The models plugin reads a `[models]` configuration section, opens one pooled
//! connection per distinct database (SQLite, MySQL or PostgreSQL), imports the
//! model definitions declared for each connection, wires their associations
//! once every model is loaded, and publishes the frozen registry to the host.
//! When the host stops, every connection the plugin opened is closed again.
//!
//! ## Features
//!
//! - **One pool per database**: every declared database gets its own
//!   connection, and declaring the same database twice is rejected
//! - **Two-phase loading**: associations see the complete registry
//! - **All or nothing**: a failed registration publishes nothing and closes
//!   what it opened
//! - **Inline or file based models**: schemas in the config file or as
//!   `<models_path>/<name>.toml`
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use actix_sqlx_models::config::structs::configuration::Configuration;
//! use actix_sqlx_models::database::structs::sqlx_orm::SqlxOrm;
//! use actix_sqlx_models::plugin::structs::actix_host::ActixHost;
//! use actix_sqlx_models::plugin::structs::models_plugin::ModelsPlugin;
//! use actix_sqlx_models::plugin::structs::plugin_options::PluginOptions;
//!
//! let config = Configuration::load_from_file("config.toml", false)?;
//! let host = Arc::new(ActixHost::new());
//! let options = PluginOptions::from_config(&config.models).with_orm(Arc::new(SqlxOrm::new()));
//! let models = ModelsPlugin::new().register(&host, options).await?;
//! ```
//!
//! ## Modules
//!
//! - [`common`] - Logging setup and the boot error type
//! - [`config`] - Configuration management and TOML parsing
//! - [`database`] - Connection specs, the connection cache and the sqlx backed ORM
//! - [`http`] - Read-only HTTP view of the loaded models
//! - [`models`] - Model schemas, the registry and the loader
//! - [`plugin`] - Plugin lifecycle and the actix host
//! - [`structs`] - CLI argument parsing

/// Common utilities and shared functionality.
///
/// Contains logging setup and the error type used while booting the binary.
pub mod common;

/// Configuration management module.
///
/// Handles loading, parsing, and validating configuration from TOML files
/// and environment variables.
pub mod config;

/// Database module.
///
/// Connection specs and their cache keys, the connection cache and the
/// sqlx implementation of the ORM seam.
pub mod database;

/// HTTP service exposing the published registry as JSON.
pub mod http;

/// Model schemas, associations, the frozen registry and the loader.
pub mod models;

/// Plugin registration, shutdown and the actix host.
pub mod plugin;

/// CLI argument parsing.
pub mod structs;
