use serde::{Deserialize, Serialize};
use crate::config::structs::connection_config::ConnectionConfig;
use crate::config::structs::database_entry_config::DatabaseEntryConfig;
use crate::database::structs::connection_options::ConnectionOptions;

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct ModelsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub models_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<ConnectionOptions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub databases: Option<Vec<DatabaseEntryConfig>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connections: Option<Vec<ConnectionConfig>>,
}
