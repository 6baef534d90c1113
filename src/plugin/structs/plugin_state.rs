use std::sync::Arc;
use crate::models::structs::model_registry::ModelRegistry;

#[derive(Debug, Clone)]
pub struct PluginState {
    pub models: Arc<ModelRegistry>,
}
