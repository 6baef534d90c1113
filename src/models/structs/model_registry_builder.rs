use std::sync::Arc;
use crate::models::structs::model::Model;

#[derive(Debug, Default)]
pub struct ModelRegistryBuilder {
    pub(crate) models: Vec<Arc<Model>>,
}
