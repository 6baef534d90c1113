use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use crate::database::enums::dialect::Dialect;
use crate::database::types::LogHook;

#[derive(Serialize, Deserialize, Clone, Default)]
pub struct ConnectionOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dialect: Option<Dialect>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_connections: Option<u32>,
    #[serde(skip)]
    pub logging: Option<LogHook>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, toml::Value>,
}
