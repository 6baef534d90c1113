use std::sync::Arc;
use crate::models::structs::model_registry::ModelRegistry;
use crate::plugin::structs::plugin_state::PluginState;

impl PluginState {
    pub fn new(models: Arc<ModelRegistry>) -> PluginState {
        PluginState { models }
    }

    pub fn models(&self) -> &Arc<ModelRegistry> {
        &self.models
    }
}
