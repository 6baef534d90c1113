use serde::{Deserialize, Serialize};
use crate::models::structs::model_schema::ModelSchema;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum ModelConfig {
    Name(String),
    Inline {
        name: String,
        schema: ModelSchema,
    },
}
