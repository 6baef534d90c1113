use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use futures_util::future::BoxFuture;
use log::{error, info, warn};
use crate::database::errors::ShutdownError;
use crate::database::structs::connection_cache::ConnectionCache;
use crate::database::types::LogHook;
use crate::models::errors::RegistryError;
use crate::models::loader::load_models;
use crate::models::structs::model_registry::ModelRegistry;
use crate::plugin::structs::models_plugin::ModelsPlugin;
use crate::plugin::structs::plugin_options::PluginOptions;
use crate::plugin::structs::plugin_state::PluginState;
use crate::plugin::traits::plugin_host::PluginHost;
use crate::plugin::types::ShutdownHook;

pub const PLUGIN_NAME: &str = env!("CARGO_PKG_NAME");
pub const PLUGIN_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Tags of messages forwarded from connections to the host log.
pub const CONNECTION_LOG_TAGS: [&str; 2] = ["trace", "sqlx"];

impl Default for ModelsPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelsPlugin {
    pub fn new() -> ModelsPlugin {
        ModelsPlugin {
            cache: Arc::new(ConnectionCache::new()),
            registered: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn name(&self) -> &'static str {
        PLUGIN_NAME
    }

    pub fn version(&self) -> &'static str {
        PLUGIN_VERSION
    }

    pub fn connections(&self) -> &Arc<ConnectionCache> {
        &self.cache
    }

    pub fn is_registered(&self) -> bool {
        self.registered.load(Ordering::SeqCst)
    }

    /// Validates `options`, loads the model registry and publishes it to `host`.
    ///
    /// Nothing reaches the host unless every step succeeds; on failure the
    /// connections opened so far are closed again.
    pub async fn register<H: PluginHost + 'static>(
        &self,
        host: &Arc<H>,
        options: PluginOptions,
    ) -> Result<Arc<ModelRegistry>, RegistryError> {
        if self
            .registered
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(RegistryError::AlreadyRegistered(PLUGIN_NAME.to_string()));
        }

        match self.load(host, options).await {
            Ok(registry) => Ok(registry),
            Err(error) => {
                self.registered.store(false, Ordering::SeqCst);
                Err(error)
            }
        }
    }

    async fn load<H: PluginHost + 'static>(
        &self,
        host: &Arc<H>,
        options: PluginOptions,
    ) -> Result<Arc<ModelRegistry>, RegistryError> {
        let mut validated = match options.validate() {
            Ok(validated) => validated,
            Err(error) => {
                error!("[MODELS] Can not register {} with invalid options: {}", PLUGIN_NAME, error);
                return Err(error.into());
            }
        };

        let logger = Self::host_logger(host);
        for spec in validated.connections.iter_mut() {
            if !spec.options.has_logging() {
                spec.options.logging = Some(logger.clone());
            }
        }

        let registry = match load_models(&validated, &self.cache).await {
            Ok(registry) => Arc::new(registry),
            Err(error) => {
                error!("[MODELS] Unable to load models: {}", error);
                if let Err(close_error) = self.cache.close_all().await {
                    warn!("[MODELS] {}", close_error);
                }
                return Err(error);
            }
        };

        host.expose(PLUGIN_NAME, PluginState::new(registry.clone()));
        host.on_post_stop(self.shutdown_hook());
        info!(
            "[MODELS] {} v{} registered with {} model(s)",
            PLUGIN_NAME,
            PLUGIN_VERSION,
            registry.len()
        );
        Ok(registry)
    }

    /// Closes every connection of the current registration. Safe to call more
    /// than once.
    pub async fn deregister(&self) -> Result<(), ShutdownError> {
        let result = self.cache.close_all().await;
        self.registered.store(false, Ordering::SeqCst);
        result
    }

    fn shutdown_hook(&self) -> ShutdownHook {
        let plugin = self.clone();
        Box::new(move || {
            let future: BoxFuture<'static, Result<(), ShutdownError>> =
                Box::pin(async move { plugin.deregister().await });
            future
        })
    }

    fn host_logger<H: PluginHost + 'static>(host: &Arc<H>) -> LogHook {
        let host = Arc::downgrade(host);
        Arc::new(move |message: &str| {
            if let Some(host) = host.upgrade() {
                host.log(&CONNECTION_LOG_TAGS, message);
            }
        })
    }
}
