use std::collections::BTreeMap;
use std::sync::Arc;
use log::{debug, info, warn};
use parking_lot::RwLock;
use crate::database::errors::ShutdownError;
use crate::database::structs::connection_cache::ConnectionCache;
use crate::database::structs::connection_spec::ConnectionSpec;
use crate::database::traits::connection::Connection;
use crate::database::traits::orm_factory::OrmFactory;
use crate::models::errors::RegistryError;

impl ConnectionCache {
    pub fn new() -> ConnectionCache {
        ConnectionCache {
            connections: RwLock::new(BTreeMap::new()),
        }
    }

    pub fn get(&self, key: &str) -> Option<Arc<dyn Connection>> {
        self.connections.read().get(key).cloned()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.connections.read().contains_key(key)
    }

    pub fn keys(&self) -> Vec<String> {
        self.connections.read().keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.connections.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.connections.read().is_empty()
    }

    pub fn insert(&self, key: String, connection: Arc<dyn Connection>) -> Result<(), RegistryError> {
        let mut connections = self.connections.write();
        if connections.contains_key(&key) {
            return Err(RegistryError::DuplicateConnection { key });
        }
        connections.insert(key, connection);
        Ok(())
    }

    /// Opens the connection for `spec` and stores it under its cache key.
    ///
    /// A key that is already cached is a configuration error; the ORM is not
    /// asked for a second handle to the same database.
    #[tracing::instrument(level = "debug", skip_all, fields(database = %spec.database))]
    pub async fn get_or_create(
        &self,
        spec: &ConnectionSpec,
        orm: &dyn OrmFactory,
    ) -> Result<(String, Arc<dyn Connection>), RegistryError> {
        let key = spec.cache_key();
        if self.contains(&key) {
            return Err(RegistryError::DuplicateConnection { key });
        }

        debug!("[CACHE] Opening connection for database {}", spec.database);
        let connection = orm.connect(spec).await.map_err(RegistryError::Connection)?;
        if let Err(error) = self.insert(key.clone(), connection.clone()) {
            if let Err(close_error) = connection.close().await {
                warn!("[CACHE] Unable to close rejected connection {}: {}", key, close_error);
            }
            return Err(error);
        }
        Ok((key, connection))
    }

    /// Closes every cached connection and empties the cache.
    ///
    /// The cache is drained before the first close, so it is empty afterwards
    /// even when some closes fail. Failures do not stop the remaining closes;
    /// they are collected into one [`ShutdownError`].
    pub async fn close_all(&self) -> Result<(), ShutdownError> {
        let drained: Vec<(String, Arc<dyn Connection>)> = {
            let mut connections = self.connections.write();
            std::mem::take(&mut *connections).into_iter().collect()
        };
        if drained.is_empty() {
            return Ok(());
        }

        let mut shutdown = ShutdownError::default();
        for (key, connection) in drained {
            match connection.close().await {
                Ok(_) => debug!("[CACHE] Closed connection to {}", connection.database()),
                Err(error) => {
                    warn!("[CACHE] Unable to close connection to {}: {}", connection.database(), error);
                    shutdown.failures.push((key, error));
                }
            }
        }
        info!("[CACHE] Connection cache cleared");
        shutdown.into_result()
    }
}
