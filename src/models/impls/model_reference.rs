use std::path::Path;
use std::sync::Arc;
use crate::models::enums::model_reference::ModelReference;
use crate::models::errors::RegistryError;
use crate::models::structs::model_schema::ModelSchema;
use crate::models::traits::model_definition::ModelDefinition;

const MODEL_FILE_EXTENSION: &str = "toml";

impl ModelReference {
    pub fn named(name: &str) -> ModelReference {
        ModelReference::Named(name.to_string())
    }

    pub fn defined(name: &str, definition: Arc<dyn ModelDefinition>) -> ModelReference {
        ModelReference::Defined {
            name: name.to_string(),
            definition,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            ModelReference::Named(name) => name,
            ModelReference::Defined { name, .. } => name,
        }
    }

    pub fn is_named(&self) -> bool {
        matches!(self, ModelReference::Named(_))
    }

    /// Resolves the definition, reading `<models_path>/<name>.toml` for named
    /// references.
    pub fn resolve(&self, models_path: Option<&Path>) -> Result<Arc<dyn ModelDefinition>, RegistryError> {
        match self {
            ModelReference::Defined { definition, .. } => Ok(definition.clone()),
            ModelReference::Named(name) => {
                let path = models_path
                    .unwrap_or_else(|| Path::new("."))
                    .join(format!("{}.{}", name, MODEL_FILE_EXTENSION));
                let schema = ModelSchema::load_file(name, &path)?;
                Ok(Arc::new(schema))
            }
        }
    }
}
