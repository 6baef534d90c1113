use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DatabaseEntryConfig {
    pub database: String,
    #[serde(default)]
    pub models: Vec<String>,
}
