//! Database connection module.
//!
//! Everything that deals with physical databases lives here: the supported
//! SQL dialects, the connection specifications read from configuration, the
//! cache key that identifies one physical database, the per-registration
//! [`ConnectionCache`](structs::connection_cache::ConnectionCache) and the ORM
//! seam.
//!
//! # Architecture
//!
//! The ORM is reached through two traits:
//! - `OrmFactory` opens a connection for a `ConnectionSpec`
//! - `Connection` imports model definitions, creates tables and closes
//!
//! `SqlxOrm` is the bundled implementation on top of sqlx pools (SQLite,
//! MySQL/MariaDB and PostgreSQL). Tests and embedders can plug in their own.
//!
//! # Example
//!
//! ```rust,ignore
//! use actix_sqlx_models::database::structs::connection_cache::ConnectionCache;
//! use actix_sqlx_models::database::structs::sqlx_orm::SqlxOrm;
//!
//! let cache = ConnectionCache::new();
//! let (key, connection) = cache.get_or_create(&spec, &SqlxOrm::new()).await?;
//! // ...
//! cache.close_all().await?;
//! ```

/// Dialect enumeration (sqlite3, mysql, pgsql).
pub mod enums;

/// Error types for ORM and shutdown operations.
pub mod errors;

/// SQL helpers (identifier quoting, DSN and DDL building).
pub mod helpers;

/// Implementation blocks for database structures.
pub mod impls;

/// Connection specifications, options, cache and the sqlx ORM.
pub mod structs;

/// ORM seam trait definitions.
pub mod traits;

/// Type aliases for the database module.
pub mod types;

#[cfg(test)]
mod tests;
