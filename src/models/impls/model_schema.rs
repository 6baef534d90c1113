use std::path::Path;
use std::sync::Arc;
use crate::models::enums::association_kind::AssociationKind;
use crate::models::errors::{AssociationError, RegistryError};
use crate::models::structs::association_schema::AssociationSchema;
use crate::models::structs::column_schema::ColumnSchema;
use crate::models::structs::model::Model;
use crate::models::structs::model_registry::ModelRegistry;
use crate::models::structs::model_schema::ModelSchema;
use crate::models::traits::model_definition::ModelDefinition;
use crate::models::types::AssociateFn;

const DEFAULT_CREATED_AT: &str = "created_at";
const DEFAULT_UPDATED_AT: &str = "updated_at";

impl ModelSchema {
    pub fn new(table: &str) -> ModelSchema {
        ModelSchema {
            table: Some(table.to_string()),
            ..ModelSchema::default()
        }
    }

    pub fn with_column(mut self, column: ColumnSchema) -> ModelSchema {
        self.columns.push(column);
        self
    }

    pub fn with_timestamps(mut self) -> ModelSchema {
        self.timestamps = true;
        self
    }

    pub fn with_association(mut self, kind: AssociationKind, target: &str, foreign_key: Option<&str>) -> ModelSchema {
        self.associations.push(AssociationSchema {
            kind,
            target: target.to_string(),
            foreign_key: foreign_key.map(str::to_string),
        });
        self
    }

    pub fn table_name<'a>(&'a self, model: &'a str) -> &'a str {
        self.table.as_deref().unwrap_or(model)
    }

    /// Copy with the table name pinned, defaulting to the model name.
    pub fn normalized(mut self, model: &str) -> ModelSchema {
        if self.table.is_none() {
            self.table = Some(model.to_string());
        }
        self
    }

    pub fn timestamp_columns(&self) -> impl Iterator<Item = &str> {
        let columns = if self.timestamps {
            vec![
                self.created_at.as_deref().unwrap_or(DEFAULT_CREATED_AT),
                self.updated_at.as_deref().unwrap_or(DEFAULT_UPDATED_AT),
            ]
        } else {
            Vec::new()
        };
        columns.into_iter()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|column| column.name == name)
    }

    pub fn load(data: &str) -> Result<ModelSchema, toml::de::Error> {
        toml::from_str(data)
    }

    /// Reads a model file, reporting failures against the model `name`.
    pub fn load_file(name: &str, path: &Path) -> Result<ModelSchema, RegistryError> {
        let data = std::fs::read_to_string(path).map_err(|source| RegistryError::ModelFile {
            name: name.to_string(),
            path: path.to_path_buf(),
            source,
        })?;
        Self::load(&data).map_err(|source| RegistryError::ModelFileParse {
            name: name.to_string(),
            path: path.to_path_buf(),
            source,
        })
    }
}

impl ModelDefinition for ModelSchema {
    fn schema(&self, name: &str) -> ModelSchema {
        self.clone().normalized(name)
    }

    fn associate(&self) -> Option<AssociateFn> {
        if self.associations.is_empty() {
            return None;
        }
        let associations = self.associations.clone();
        Some(Arc::new(move |model: &Model, registry: &ModelRegistry| -> Result<(), AssociationError> {
            for association in &associations {
                let target = registry.require(model.name(), &association.target)?;
                model.associate_with(association.kind, target, association.foreign_key.as_deref())?;
            }
            Ok(())
        }))
    }
}
