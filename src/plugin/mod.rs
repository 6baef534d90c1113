//! Models plugin module.
//!
//! Mirrors a web-server extension lifecycle:
//!
//! - `register` validates the options, injects a default logging hook into
//!   every connection that has none, loads the model registry, publishes it to
//!   the host and registers a shutdown hook.
//! - `deregister` closes every connection the registration opened.
//!
//! Registration is all or nothing: when any step fails the connections opened
//! so far are closed and nothing is published to the host.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use actix_sqlx_models::database::structs::sqlx_orm::SqlxOrm;
//! use actix_sqlx_models::plugin::structs::actix_host::ActixHost;
//! use actix_sqlx_models::plugin::structs::models_plugin::ModelsPlugin;
//! use actix_sqlx_models::plugin::structs::plugin_options::PluginOptions;
//!
//! let host = Arc::new(ActixHost::new());
//! let options = PluginOptions::from_config(&config.models).with_orm(Arc::new(SqlxOrm::new()));
//! let models = ModelsPlugin::new().register(&host, options).await?;
//! // serve requests...
//! host.stop().await?;
//! ```

/// Implementation blocks for plugin structures.
pub mod impls;

/// Plugin, options, published state and the actix host.
pub mod structs;

/// Host integration trait.
pub mod traits;

/// Type aliases for the plugin module.
pub mod types;
