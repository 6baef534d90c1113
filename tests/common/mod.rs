#![allow(dead_code)]
use std::any::Any;
use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;
use std::sync::Arc;
use async_trait::async_trait;
use parking_lot::Mutex;
use actix_sqlx_models::database::enums::dialect::Dialect;
use actix_sqlx_models::database::errors::{OrmError, ShutdownError};
use actix_sqlx_models::database::structs::connection_spec::ConnectionSpec;
use actix_sqlx_models::database::traits::connection::Connection;
use actix_sqlx_models::database::traits::orm_factory::OrmFactory;
use actix_sqlx_models::models::structs::model_schema::ModelSchema;
use actix_sqlx_models::models::traits::model_definition::ModelDefinition;
use actix_sqlx_models::plugin::structs::plugin_state::PluginState;
use actix_sqlx_models::plugin::traits::plugin_host::PluginHost;
use actix_sqlx_models::plugin::types::ShutdownHook;

pub fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures").join("models")
}

/// Shared record of everything the fake ORM and its connections did.
#[derive(Debug, Default)]
pub struct OrmJournal {
    pub connects: Vec<String>,
    pub imports: Vec<(String, String)>,
    pub closes: Vec<String>,
    pub logging_hooks: usize,
}

#[derive(Debug, Default)]
pub struct RecordingOrm {
    pub journal: Arc<Mutex<OrmJournal>>,
    pub fail_connect: BTreeSet<String>,
    pub fail_import: BTreeSet<String>,
    pub fail_close: BTreeSet<String>,
}

impl RecordingOrm {
    pub fn new() -> RecordingOrm {
        RecordingOrm::default()
    }

    pub fn failing_connect(mut self, database: &str) -> RecordingOrm {
        self.fail_connect.insert(database.to_string());
        self
    }

    pub fn failing_import(mut self, model: &str) -> RecordingOrm {
        self.fail_import.insert(model.to_string());
        self
    }

    pub fn failing_close(mut self, database: &str) -> RecordingOrm {
        self.fail_close.insert(database.to_string());
        self
    }

    pub fn connects(&self) -> Vec<String> {
        self.journal.lock().connects.clone()
    }

    pub fn imports(&self) -> Vec<(String, String)> {
        self.journal.lock().imports.clone()
    }

    pub fn closes(&self) -> Vec<String> {
        self.journal.lock().closes.clone()
    }

    pub fn logging_hooks(&self) -> usize {
        self.journal.lock().logging_hooks
    }
}

#[async_trait]
impl OrmFactory for RecordingOrm {
    async fn connect(&self, spec: &ConnectionSpec) -> Result<Arc<dyn Connection>, OrmError> {
        let mut journal = self.journal.lock();
        journal.connects.push(spec.database.clone());
        if spec.options.has_logging() {
            journal.logging_hooks += 1;
        }
        if self.fail_connect.contains(&spec.database) {
            return Err(OrmError::ConnectionError(format!("refused {}", spec.database)));
        }
        spec.options.log(&format!("Connected to {}", spec.database));
        Ok(Arc::new(MemoryConnection {
            database: spec.database.clone(),
            dialect: spec.dialect(),
            journal: self.journal.clone(),
            fail_import: self.fail_import.clone(),
            fail_close: self.fail_close.contains(&spec.database),
        }))
    }
}

#[derive(Debug)]
pub struct MemoryConnection {
    pub database: String,
    pub dialect: Dialect,
    journal: Arc<Mutex<OrmJournal>>,
    fail_import: BTreeSet<String>,
    fail_close: bool,
}

#[async_trait]
impl Connection for MemoryConnection {
    fn dialect(&self) -> Dialect {
        self.dialect
    }

    fn database(&self) -> &str {
        &self.database
    }

    async fn import(&self, name: &str, definition: &dyn ModelDefinition) -> Result<ModelSchema, OrmError> {
        if self.fail_import.contains(name) {
            return Err(OrmError::ImportError(format!("rejected {}", name)));
        }
        self.journal.lock().imports.push((self.database.clone(), name.to_string()));
        Ok(definition.schema(name))
    }

    async fn sync(&self, _name: &str, _schema: &ModelSchema) -> Result<(), OrmError> {
        Ok(())
    }

    async fn close(&self) -> Result<(), OrmError> {
        self.journal.lock().closes.push(self.database.clone());
        if self.fail_close {
            return Err(OrmError::ConnectionError(format!("stuck {}", self.database)));
        }
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Host double that records what the plugin publishes and logs.
#[derive(Default)]
pub struct RecordingHost {
    pub logs: Mutex<Vec<(Vec<String>, String)>>,
    pub exposed: Mutex<BTreeMap<String, PluginState>>,
    pub hooks: Mutex<Vec<ShutdownHook>>,
}

impl RecordingHost {
    pub fn new() -> Arc<RecordingHost> {
        Arc::new(RecordingHost::default())
    }

    pub fn exposed(&self, plugin: &str) -> Option<PluginState> {
        self.exposed.lock().get(plugin).cloned()
    }

    pub fn hook_count(&self) -> usize {
        self.hooks.lock().len()
    }

    pub fn logs(&self) -> Vec<(Vec<String>, String)> {
        self.logs.lock().clone()
    }

    pub async fn stop(&self) -> Result<(), ShutdownError> {
        let hooks = std::mem::take(&mut *self.hooks.lock());
        let mut shutdown = ShutdownError::default();
        for hook in hooks {
            if let Err(error) = hook().await {
                shutdown.merge(error);
            }
        }
        shutdown.into_result()
    }
}

impl PluginHost for RecordingHost {
    fn log(&self, tags: &[&str], message: &str) {
        self.logs
            .lock()
            .push((tags.iter().map(|tag| tag.to_string()).collect(), message.to_string()));
    }

    fn expose(&self, plugin: &str, state: PluginState) {
        self.exposed.lock().insert(plugin.to_string(), state);
    }

    fn on_post_stop(&self, hook: ShutdownHook) {
        self.hooks.lock().push(hook);
    }
}
