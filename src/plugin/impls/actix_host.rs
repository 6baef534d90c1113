use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use log::{info, log, Level};
use parking_lot::{Mutex, RwLock};
use crate::database::errors::ShutdownError;
use crate::models::structs::model_registry::ModelRegistry;
use crate::plugin::structs::actix_host::ActixHost;
use crate::plugin::structs::plugin_state::PluginState;
use crate::plugin::traits::plugin_host::PluginHost;
use crate::plugin::types::ShutdownHook;

impl fmt::Debug for ActixHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActixHost")
            .field("plugins", &self.plugins.read().keys().collect::<Vec<_>>())
            .field("shutdown_hooks", &self.shutdown_hooks.lock().len())
            .finish()
    }
}

impl Default for ActixHost {
    fn default() -> Self {
        Self::new()
    }
}

impl ActixHost {
    pub fn new() -> ActixHost {
        ActixHost {
            plugins: RwLock::new(BTreeMap::new()),
            shutdown_hooks: Mutex::new(Vec::new()),
        }
    }

    pub fn plugin_state(&self, plugin: &str) -> Option<PluginState> {
        self.plugins.read().get(plugin).cloned()
    }

    pub fn models(&self, plugin: &str) -> Option<Arc<ModelRegistry>> {
        self.plugin_state(plugin).map(|state| state.models)
    }

    pub fn plugins(&self) -> Vec<String> {
        self.plugins.read().keys().cloned().collect()
    }

    pub fn pending_shutdown_hooks(&self) -> usize {
        self.shutdown_hooks.lock().len()
    }

    /// Runs every shutdown hook once and withdraws the published states.
    /// Later calls find nothing left to run.
    pub async fn stop(&self) -> Result<(), ShutdownError> {
        let hooks = std::mem::take(&mut *self.shutdown_hooks.lock());
        let mut shutdown = ShutdownError::default();
        for hook in hooks {
            if let Err(error) = hook().await {
                shutdown.merge(error);
            }
        }
        self.plugins.write().clear();
        info!("[HOST] Stopped");
        shutdown.into_result()
    }

    fn level(tags: &[&str]) -> Level {
        for tag in tags {
            match *tag {
                "error" => return Level::Error,
                "warn" | "warning" => return Level::Warn,
                "info" => return Level::Info,
                "debug" => return Level::Debug,
                "trace" => return Level::Trace,
                _ => {}
            }
        }
        Level::Info
    }
}

impl PluginHost for ActixHost {
    fn log(&self, tags: &[&str], message: &str) {
        log!(Self::level(tags), "[HOST] [{}] {}", tags.join(","), message);
    }

    fn expose(&self, plugin: &str, state: PluginState) {
        self.plugins.write().insert(plugin.to_string(), state);
    }

    fn on_post_stop(&self, hook: ShutdownHook) {
        self.shutdown_hooks.lock().push(hook);
    }
}
