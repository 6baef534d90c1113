use crate::plugin::structs::plugin_state::PluginState;
use crate::plugin::types::ShutdownHook;

pub trait PluginHost: Send + Sync {
    /// Host logging sink; `tags` carry the severity and the source.
    fn log(&self, tags: &[&str], message: &str);

    /// Publishes `state` under the plugin name for other host consumers.
    fn expose(&self, plugin: &str, state: PluginState);

    /// Registers a hook the host runs exactly once while stopping.
    fn on_post_stop(&self, hook: ShutdownHook);
}
