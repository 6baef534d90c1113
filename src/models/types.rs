use std::sync::Arc;
use crate::models::errors::AssociationError;
use crate::models::structs::model::Model;
use crate::models::structs::model_registry::ModelRegistry;

/// Associate callback of a model, run once after every model is loaded.
pub type AssociateFn = Arc<dyn Fn(&Model, &ModelRegistry) -> Result<(), AssociationError> + Send + Sync>;
