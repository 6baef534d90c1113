use std::sync::Arc;

/// Logging hook handed to a connection; receives every message the ORM emits.
pub type LogHook = Arc<dyn Fn(&str) + Send + Sync>;
