use std::sync::Arc;
use crate::database::structs::connection_cache::ConnectionCache;
use crate::database::traits::connection::Connection;
use crate::models::structs::connection_link::ConnectionLink;

impl ConnectionLink {
    pub fn new(key: String, cache: Arc<ConnectionCache>) -> ConnectionLink {
        ConnectionLink { key, cache }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Looks the connection up in the cache now; `None` once it is closed.
    pub fn resolve(&self) -> Option<Arc<dyn Connection>> {
        self.cache.get(&self.key)
    }
}
