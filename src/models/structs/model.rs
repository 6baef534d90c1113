use parking_lot::RwLock;
use crate::models::structs::association::Association;
use crate::models::structs::connection_link::ConnectionLink;
use crate::models::structs::model_schema::ModelSchema;
use crate::models::types::AssociateFn;

pub struct Model {
    pub(crate) name: String,
    pub(crate) schema: ModelSchema,
    pub(crate) associate: Option<AssociateFn>,
    pub(crate) associations: RwLock<Vec<Association>>,
    pub(crate) connection: ConnectionLink,
}
