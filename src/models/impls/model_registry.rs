use std::sync::Arc;
use log::info;
use crate::database::errors::OrmError;
use crate::models::errors::{AssociationError, RegistryError};
use crate::models::structs::column_schema::ColumnSchema;
use crate::models::structs::model::Model;
use crate::models::structs::model_registry::ModelRegistry;
use crate::models::structs::model_schema::ModelSchema;

impl ModelRegistry {
    pub fn get(&self, name: &str) -> Option<&Arc<Model>> {
        self.models.get(name)
    }

    /// Looks up `target` on behalf of `model`'s associate callback.
    pub fn require(&self, model: &str, target: &str) -> Result<&Arc<Model>, AssociationError> {
        self.models.get(target).ok_or_else(|| AssociationError::UnknownModel {
            model: model.to_string(),
            target: target.to_string(),
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.models.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Model names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Models in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Model>> {
        self.order.iter().filter_map(|name| self.models.get(name))
    }

    pub(crate) fn associate_all(&self) -> Result<(), AssociationError> {
        for model in self.iter() {
            model.associate(self)?;
        }
        Ok(())
    }

    /// Schema of `name` including the foreign key columns its associations
    /// and the associations pointing at it imply.
    pub fn table_schema(&self, name: &str) -> Option<ModelSchema> {
        let model = self.models.get(name)?;
        let mut schema = model.schema().clone().normalized(name);
        let own = model
            .associations()
            .into_iter()
            .filter(|a| a.kind.foreign_key_on_source());
        let incoming = self
            .iter()
            .flat_map(|other| other.associations())
            .filter(|a| a.target == name && !a.kind.foreign_key_on_source());
        for association in own.chain(incoming) {
            if !schema.has_column(&association.foreign_key) {
                schema.columns.push(ColumnSchema::foreign_key(&association.foreign_key));
            }
        }
        Some(schema)
    }

    /// Creates the table of every model through its own connection.
    pub async fn sync_all(&self) -> Result<usize, RegistryError> {
        let mut synced = 0;
        for model in self.iter() {
            let connection = model.connection().ok_or_else(|| RegistryError::Sync {
                name: model.name().to_string(),
                source: OrmError::Closed(model.connection_key().to_string()),
            })?;
            let schema = self.table_schema(model.name()).unwrap_or_default();
            connection
                .sync(model.name(), &schema)
                .await
                .map_err(|source| RegistryError::Sync {
                    name: model.name().to_string(),
                    source,
                })?;
            synced += 1;
        }
        info!("[MODELS] Synced {} model table(s)", synced);
        Ok(synced)
    }
}
