use std::collections::BTreeMap;
use parking_lot::{Mutex, RwLock};
use crate::plugin::structs::plugin_state::PluginState;
use crate::plugin::types::ShutdownHook;

pub struct ActixHost {
    pub(crate) plugins: RwLock<BTreeMap<String, PluginState>>,
    pub(crate) shutdown_hooks: Mutex<Vec<ShutdownHook>>,
}
