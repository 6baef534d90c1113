use std::sync::Arc;
use async_trait::async_trait;
use crate::database::errors::OrmError;
use crate::database::structs::connection_spec::ConnectionSpec;
use crate::database::traits::connection::Connection;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrmFactory: Send + Sync {
    async fn connect(&self, spec: &ConnectionSpec) -> Result<Arc<dyn Connection>, OrmError>;
}
