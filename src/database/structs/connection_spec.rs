use crate::database::structs::connection_options::ConnectionOptions;
use crate::models::enums::model_reference::ModelReference;

#[derive(Debug, Clone)]
pub struct ConnectionSpec {
    pub database: String,
    pub username: Option<String>,
    pub password: Option<String>,
    pub options: ConnectionOptions,
    pub models: Vec<ModelReference>,
}
