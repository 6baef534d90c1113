use serde::{Deserialize, Serialize};
use crate::config::structs::http_server_config::HttpServerConfig;
use crate::config::structs::models_config::ModelsConfig;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Configuration {
    pub log_level: String,
    pub http_server: HttpServerConfig,
    #[serde(default)]
    pub models: ModelsConfig,
}
