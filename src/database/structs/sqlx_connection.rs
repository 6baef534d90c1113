use sqlx::{MySql, Pool, Postgres, Sqlite};
use crate::database::enums::dialect::Dialect;
use crate::database::types::LogHook;

#[derive(Clone)]
pub struct SqlxConnection {
    pub(crate) database: String,
    pub(crate) dialect: Dialect,
    pub(crate) sqlite: Option<Pool<Sqlite>>,
    pub(crate) mysql: Option<Pool<MySql>>,
    pub(crate) pgsql: Option<Pool<Postgres>>,
    pub(crate) logging: Option<LogHook>,
}
