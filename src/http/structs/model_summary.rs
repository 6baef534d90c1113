use serde::Serialize;
use crate::database::enums::dialect::Dialect;
use crate::models::structs::association::Association;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ModelSummary {
    pub name: String,
    pub table: String,
    pub connection: String,
    pub database: Option<String>,
    pub dialect: Option<Dialect>,
    pub connected: bool,
    pub associations: Vec<Association>,
}
