use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use async_trait::async_trait;
use log::{error, info};
use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::ConnectOptions;
use crate::database::enums::dialect::Dialect;
use crate::database::errors::OrmError;
use crate::database::helpers::{build_dsn, is_memory_storage};
use crate::database::structs::connection_spec::ConnectionSpec;
use crate::database::structs::sqlx_connection::SqlxConnection;
use crate::database::structs::sqlx_orm::SqlxOrm;
use crate::database::traits::connection::Connection;
use crate::database::traits::orm_factory::OrmFactory;

const LOG_PREFIX: &str = "[SQLX]";
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

impl Default for SqlxOrm {
    fn default() -> Self {
        Self::new()
    }
}

impl SqlxOrm {
    pub fn new() -> SqlxOrm {
        SqlxOrm {
            acquire_timeout: Duration::from_secs(30),
            slow_statement_threshold: Duration::from_secs(1),
        }
    }

    pub fn with_acquire_timeout(mut self, timeout: Duration) -> SqlxOrm {
        self.acquire_timeout = timeout;
        self
    }

    async fn open(&self, spec: &ConnectionSpec, dsn: &str) -> Result<SqlxConnection, OrmError> {
        let dialect = if spec.is_uri() {
            Dialect::from_uri(dsn).ok_or_else(|| OrmError::UnsupportedDialect(dsn.to_string()))?
        } else {
            spec.dialect()
        };
        let max_connections = spec.options.max_connections.unwrap_or(DEFAULT_MAX_CONNECTIONS);
        let mut connection = SqlxConnection::new(&spec.database, dialect, spec.options.logging.clone());

        match dialect {
            Dialect::sqlite3 => {
                let options = SqliteConnectOptions::from_str(dsn)?
                    .create_if_missing(true)
                    .log_statements(log::LevelFilter::Debug)
                    .log_slow_statements(log::LevelFilter::Warn, self.slow_statement_threshold);
                let pool_options = SqlitePoolOptions::new().acquire_timeout(self.acquire_timeout);
                // Every pooled connection to `:memory:` is its own database.
                let pool_options = if is_memory_storage(spec) {
                    pool_options
                        .max_connections(1)
                        .idle_timeout(None::<Duration>)
                        .max_lifetime(None::<Duration>)
                } else {
                    pool_options.max_connections(max_connections)
                };
                connection.sqlite = Some(pool_options.connect_with(options).await?);
            }
            Dialect::mysql => {
                let options = MySqlConnectOptions::from_str(dsn)?
                    .log_statements(log::LevelFilter::Debug)
                    .log_slow_statements(log::LevelFilter::Warn, self.slow_statement_threshold);
                connection.mysql = Some(
                    MySqlPoolOptions::new()
                        .max_connections(max_connections)
                        .acquire_timeout(self.acquire_timeout)
                        .connect_with(options)
                        .await?,
                );
            }
            Dialect::pgsql => {
                let options = PgConnectOptions::from_str(dsn)?
                    .log_statements(log::LevelFilter::Debug)
                    .log_slow_statements(log::LevelFilter::Warn, self.slow_statement_threshold);
                connection.pgsql = Some(
                    PgPoolOptions::new()
                        .max_connections(max_connections)
                        .acquire_timeout(self.acquire_timeout)
                        .connect_with(options)
                        .await?,
                );
            }
        }
        Ok(connection)
    }
}

#[async_trait]
impl OrmFactory for SqlxOrm {
    #[tracing::instrument(level = "debug", skip_all, fields(database = %spec.database))]
    async fn connect(&self, spec: &ConnectionSpec) -> Result<Arc<dyn Connection>, OrmError> {
        let dsn = build_dsn(spec)?;
        match self.open(spec, &dsn).await {
            Ok(connection) => {
                info!("{} Connected to {} database {}", LOG_PREFIX, connection.dialect, spec.database);
                spec.options.log(&format!("Connected to {} database {}", connection.dialect, spec.database));
                Ok(Arc::new(connection))
            }
            Err(e) => {
                error!("{} Unable to connect to database {}: {}", LOG_PREFIX, spec.database, e);
                Err(e)
            }
        }
    }
}
