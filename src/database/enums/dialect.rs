use clap::ValueEnum;
use serde::{
    Deserialize,
    Serialize
};

#[allow(non_camel_case_types)]
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum, Default)]
pub enum Dialect {
    #[serde(alias = "sqlite")]
    sqlite3,
    #[default]
    mysql,
    #[serde(alias = "postgres", alias = "postgresql")]
    pgsql,
}
