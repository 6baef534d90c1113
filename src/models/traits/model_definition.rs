use std::fmt;
use crate::models::structs::model_schema::ModelSchema;
use crate::models::types::AssociateFn;

pub trait ModelDefinition: Send + Sync + fmt::Debug {
    fn schema(&self, name: &str) -> ModelSchema;

    /// Callback declaring relations to sibling models, if the model has any.
    fn associate(&self) -> Option<AssociateFn> {
        None
    }
}
