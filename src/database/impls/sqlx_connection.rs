use std::any::Any;
use std::fmt;
use async_trait::async_trait;
use log::debug;
use sqlx::{MySql, Pool, Postgres, Sqlite};
use crate::database::enums::dialect::Dialect;
use crate::database::errors::OrmError;
use crate::database::helpers::{build_create_table_query, validate_schema_identifiers};
use crate::database::structs::sqlx_connection::SqlxConnection;
use crate::database::traits::connection::Connection;
use crate::database::types::LogHook;
use crate::models::structs::model_schema::ModelSchema;
use crate::models::traits::model_definition::ModelDefinition;

const LOG_PREFIX: &str = "[SQLX]";

impl fmt::Debug for SqlxConnection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SqlxConnection")
            .field("database", &self.database)
            .field("dialect", &self.dialect)
            .field("connected", &self.is_connected())
            .finish()
    }
}

impl SqlxConnection {
    pub fn new(database: &str, dialect: Dialect, logging: Option<LogHook>) -> SqlxConnection {
        SqlxConnection {
            database: database.to_string(),
            dialect,
            sqlite: None,
            mysql: None,
            pgsql: None,
            logging,
        }
    }

    pub fn sqlite_pool(&self) -> Option<&Pool<Sqlite>> {
        self.sqlite.as_ref()
    }

    pub fn mysql_pool(&self) -> Option<&Pool<MySql>> {
        self.mysql.as_ref()
    }

    pub fn pgsql_pool(&self) -> Option<&Pool<Postgres>> {
        self.pgsql.as_ref()
    }

    pub fn is_connected(&self) -> bool {
        match self.dialect {
            Dialect::sqlite3 => self.sqlite.as_ref().is_some_and(|pool| !pool.is_closed()),
            Dialect::mysql => self.mysql.as_ref().is_some_and(|pool| !pool.is_closed()),
            Dialect::pgsql => self.pgsql.as_ref().is_some_and(|pool| !pool.is_closed()),
        }
    }

    fn log(&self, message: &str) {
        if let Some(hook) = &self.logging {
            hook(message);
        }
    }

    async fn execute(&self, query: &str) -> Result<(), OrmError> {
        self.log(&format!("Executing ({}): {}", self.database, query));
        match self.dialect {
            Dialect::sqlite3 => {
                let pool = self.sqlite.as_ref().ok_or_else(|| OrmError::Closed(self.database.clone()))?;
                sqlx::query(query).execute(pool).await?;
            }
            Dialect::mysql => {
                let pool = self.mysql.as_ref().ok_or_else(|| OrmError::Closed(self.database.clone()))?;
                sqlx::query(query).execute(pool).await?;
            }
            Dialect::pgsql => {
                let pool = self.pgsql.as_ref().ok_or_else(|| OrmError::Closed(self.database.clone()))?;
                sqlx::query(query).execute(pool).await?;
            }
        }
        Ok(())
    }
}

#[async_trait]
impl Connection for SqlxConnection {
    fn dialect(&self) -> Dialect {
        self.dialect
    }

    fn database(&self) -> &str {
        &self.database
    }

    async fn import(
        &self,
        name: &str,
        definition: &dyn ModelDefinition,
    ) -> Result<ModelSchema, OrmError> {
        if !self.is_connected() {
            return Err(OrmError::Closed(self.database.clone()));
        }
        let schema = definition.schema(name).normalized(name);
        validate_schema_identifiers(name, &schema)?;
        debug!("{} Imported model {} into {}", LOG_PREFIX, name, self.database);
        self.log(&format!("Imported model {} (table {})", name, schema.table_name(name)));
        Ok(schema)
    }

    async fn sync(&self, name: &str, schema: &ModelSchema) -> Result<(), OrmError> {
        let query = build_create_table_query(self.dialect, name, schema);
        self.execute(&query).await
    }

    async fn close(&self) -> Result<(), OrmError> {
        if let Some(pool) = &self.sqlite {
            pool.close().await;
        }
        if let Some(pool) = &self.mysql {
            pool.close().await;
        }
        if let Some(pool) = &self.pgsql {
            pool.close().await;
        }
        self.log(&format!("Closed connection to {}", self.database));
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
