use std::fmt;
use std::sync::Arc;
use parking_lot::RwLock;
use crate::database::helpers::is_valid_identifier;
use crate::database::traits::connection::Connection;
use crate::models::enums::association_kind::AssociationKind;
use crate::models::errors::AssociationError;
use crate::models::structs::association::Association;
use crate::models::structs::connection_link::ConnectionLink;
use crate::models::structs::model::Model;
use crate::models::structs::model_registry::ModelRegistry;
use crate::models::structs::model_schema::ModelSchema;
use crate::models::types::AssociateFn;

impl fmt::Debug for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Model")
            .field("name", &self.name)
            .field("table", &self.table_name())
            .field("connection", &self.connection.key())
            .field("associate", &self.associate.is_some())
            .field("associations", &*self.associations.read())
            .finish()
    }
}

impl Model {
    pub fn new(name: &str, schema: ModelSchema, associate: Option<AssociateFn>, connection: ConnectionLink) -> Model {
        Model {
            name: name.to_string(),
            schema,
            associate,
            associations: RwLock::new(Vec::new()),
            connection,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn schema(&self) -> &ModelSchema {
        &self.schema
    }

    pub fn table_name(&self) -> &str {
        self.schema.table_name(&self.name)
    }

    pub fn connection_key(&self) -> &str {
        self.connection.key()
    }

    /// Connection this model was imported with, looked up in the connection
    /// cache at call time.
    pub fn connection(&self) -> Option<Arc<dyn Connection>> {
        self.connection.resolve()
    }

    pub fn has_associate(&self) -> bool {
        self.associate.is_some()
    }

    /// Runs the associate callback, if any, against the full registry.
    pub fn associate(&self, registry: &ModelRegistry) -> Result<(), AssociationError> {
        match &self.associate {
            Some(associate) => associate(self, registry),
            None => Ok(()),
        }
    }

    pub fn belongs_to(&self, target: &Model, foreign_key: Option<&str>) -> Result<(), AssociationError> {
        self.associate_with(AssociationKind::belongs_to, target, foreign_key)
    }

    pub fn has_one(&self, target: &Model, foreign_key: Option<&str>) -> Result<(), AssociationError> {
        self.associate_with(AssociationKind::has_one, target, foreign_key)
    }

    pub fn has_many(&self, target: &Model, foreign_key: Option<&str>) -> Result<(), AssociationError> {
        self.associate_with(AssociationKind::has_many, target, foreign_key)
    }

    pub fn associate_with(&self, kind: AssociationKind, target: &Model, foreign_key: Option<&str>) -> Result<(), AssociationError> {
        let mut associations = self.associations.write();
        if associations.iter().any(|a| a.kind == kind && a.target == target.name) {
            return Err(AssociationError::Duplicate {
                model: self.name.clone(),
                target: target.name.clone(),
                kind: kind.to_string(),
            });
        }
        let foreign_key = foreign_key
            .map(str::to_string)
            .unwrap_or_else(|| kind.default_foreign_key(&self.name, &target.name));
        // Foreign keys end up as column names in the generated DDL.
        if !is_valid_identifier(&foreign_key) {
            return Err(AssociationError::InvalidForeignKey {
                model: self.name.clone(),
                target: target.name.clone(),
                foreign_key,
            });
        }
        associations.push(Association {
            kind,
            source: self.name.clone(),
            target: target.name.clone(),
            target_table: target.table_name().to_string(),
            foreign_key,
        });
        Ok(())
    }

    pub fn associations(&self) -> Vec<Association> {
        self.associations.read().clone()
    }

    pub fn association(&self, target: &str) -> Option<Association> {
        self.associations.read().iter().find(|a| a.target == target).cloned()
    }
}
