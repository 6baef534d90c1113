use std::collections::BTreeMap;
use std::sync::Arc;
use crate::models::structs::model::Model;

#[derive(Debug, Default)]
pub struct ModelRegistry {
    pub(crate) models: BTreeMap<String, Arc<Model>>,
    pub(crate) order: Vec<String>,
}
