use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use crate::database::structs::connection_cache::ConnectionCache;

#[derive(Debug, Clone)]
pub struct ModelsPlugin {
    pub(crate) cache: Arc<ConnectionCache>,
    pub(crate) registered: Arc<AtomicBool>,
}
