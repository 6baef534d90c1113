use std::fmt;
use crate::database::structs::connection_options::ConnectionOptions;
use crate::database::types::LogHook;

impl fmt::Debug for ConnectionOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionOptions")
            .field("dialect", &self.dialect)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("storage", &self.storage)
            .field("max_connections", &self.max_connections)
            .field("logging", &self.logging.as_ref().map(|_| "<hook>"))
            .field("extra", &self.extra)
            .finish()
    }
}

impl ConnectionOptions {
    pub fn with_logging(mut self, hook: LogHook) -> ConnectionOptions {
        self.logging = Some(hook);
        self
    }

    pub fn has_logging(&self) -> bool {
        self.logging.is_some()
    }

    /// Forwards a message to the logging hook, if one is set.
    pub fn log(&self, message: &str) {
        if let Some(hook) = &self.logging {
            hook(message);
        }
    }
}
