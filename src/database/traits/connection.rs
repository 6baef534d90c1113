use std::any::Any;
use std::fmt;
use async_trait::async_trait;
use crate::database::enums::dialect::Dialect;
use crate::database::errors::OrmError;
use crate::models::structs::model_schema::ModelSchema;
use crate::models::traits::model_definition::ModelDefinition;

#[async_trait]
pub trait Connection: Send + Sync + fmt::Debug {
    fn dialect(&self) -> Dialect;

    fn database(&self) -> &str;

    /// Registers a model definition against this connection and returns the
    /// normalized schema the ORM accepted.
    async fn import(
        &self,
        name: &str,
        definition: &dyn ModelDefinition,
    ) -> Result<ModelSchema, OrmError>;

    /// Creates the table backing a model when it does not exist yet.
    async fn sync(&self, name: &str, schema: &ModelSchema) -> Result<(), OrmError>;

    async fn close(&self) -> Result<(), OrmError>;

    fn as_any(&self) -> &dyn Any;
}
