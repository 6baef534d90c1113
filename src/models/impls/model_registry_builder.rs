use std::collections::BTreeMap;
use std::sync::Arc;
use crate::models::errors::RegistryError;
use crate::models::structs::model::Model;
use crate::models::structs::model_registry::ModelRegistry;
use crate::models::structs::model_registry_builder::ModelRegistryBuilder;

impl ModelRegistryBuilder {
    pub fn new() -> ModelRegistryBuilder {
        ModelRegistryBuilder { models: Vec::new() }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.models.iter().any(|model| model.name() == name)
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    pub fn insert(&mut self, model: Model) -> Result<Arc<Model>, RegistryError> {
        if self.contains(model.name()) {
            return Err(RegistryError::DuplicateModel {
                name: model.name().to_string(),
            });
        }
        let model = Arc::new(model);
        self.models.push(model.clone());
        Ok(model)
    }

    /// Freezes the accumulated models into a registry.
    pub fn build(self) -> ModelRegistry {
        let order = self.models.iter().map(|model| model.name().to_string()).collect();
        let models = self
            .models
            .into_iter()
            .map(|model| (model.name().to_string(), model))
            .collect::<BTreeMap<_, _>>();
        ModelRegistry { models, order }
    }
}
