use serde::{Deserialize, Serialize};
use crate::config::enums::model_config::ModelConfig;
use crate::database::structs::connection_options::ConnectionOptions;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ConnectionConfig {
    pub database: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default)]
    pub options: ConnectionOptions,
    #[serde(default)]
    pub models: Vec<ModelConfig>,
}
