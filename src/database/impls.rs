pub mod dialect;
pub mod connection_options;
pub mod connection_spec;
pub mod connection_cache;
pub mod sqlx_orm;
pub mod sqlx_connection;
