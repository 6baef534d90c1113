//! Database connection structures.

/// Dialect specific options passed through to the ORM.
pub mod connection_options;

/// One declared connection: credentials, options and its models.
pub mod connection_spec;

/// Cache of live connections keyed by their derived cache key.
pub mod connection_cache;

/// sqlx backed ORM factory.
pub mod sqlx_orm;

/// sqlx backed connection handle (SQLite, MySQL, PostgreSQL pools).
pub mod sqlx_connection;
