use std::path::PathBuf;
use std::sync::Arc;
use crate::config::structs::database_entry_config::DatabaseEntryConfig;
use crate::database::structs::connection_options::ConnectionOptions;
use crate::database::structs::connection_spec::ConnectionSpec;
use crate::database::traits::orm_factory::OrmFactory;

#[derive(Clone, Default)]
pub struct PluginOptions {
    pub orm: Option<Arc<dyn OrmFactory>>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub options: Option<ConnectionOptions>,
    pub models_path: Option<PathBuf>,
    pub databases: Option<Vec<DatabaseEntryConfig>>,
    pub connections: Option<Vec<ConnectionSpec>>,
}
