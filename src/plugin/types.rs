use futures_util::future::BoxFuture;
use crate::database::errors::ShutdownError;

/// Callback the host runs once while it stops.
pub type ShutdownHook = Box<dyn FnOnce() -> BoxFuture<'static, Result<(), ShutdownError>> + Send>;
