use std::collections::BTreeMap;
use std::sync::Arc;
use parking_lot::RwLock;
use crate::database::traits::connection::Connection;

#[derive(Debug, Default)]
pub struct ConnectionCache {
    pub(crate) connections: RwLock<BTreeMap<String, Arc<dyn Connection>>>,
}
