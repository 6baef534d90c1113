use std::sync::Arc;
use crate::database::structs::connection_cache::ConnectionCache;

#[derive(Debug, Clone)]
pub struct ConnectionLink {
    pub(crate) key: String,
    pub(crate) cache: Arc<ConnectionCache>,
}
