use std::path::PathBuf;
use std::sync::Arc;
use crate::database::structs::connection_spec::ConnectionSpec;
use crate::database::traits::orm_factory::OrmFactory;

#[derive(Clone)]
pub struct ValidatedOptions {
    pub orm: Arc<dyn OrmFactory>,
    pub models_path: Option<PathBuf>,
    pub connections: Vec<ConnectionSpec>,
}
