use std::sync::Arc;
use crate::models::traits::model_definition::ModelDefinition;

#[derive(Debug, Clone)]
pub enum ModelReference {
    /// Resolved as `<models_path>/<name>.toml` at load time.
    Named(String),
    Defined {
        name: String,
        definition: Arc<dyn ModelDefinition>,
    },
}
