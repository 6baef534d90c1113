pub mod actix_host;
pub mod models_plugin;
pub mod plugin_options;
pub mod plugin_state;
