//! Host integration traits.

/// What the plugin needs from the server it is registered into.
pub mod plugin_host;
