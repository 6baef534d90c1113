use crate::http::structs::model_summary::ModelSummary;
use crate::models::structs::model::Model;

impl From<&Model> for ModelSummary {
    fn from(model: &Model) -> Self {
        let connection = model.connection();
        ModelSummary {
            name: model.name().to_string(),
            table: model.table_name().to_string(),
            connection: model.connection_key().to_string(),
            database: connection.as_ref().map(|c| c.database().to_string()),
            dialect: connection.as_ref().map(|c| c.dialect()),
            connected: connection.is_some(),
            associations: model.associations(),
        }
    }
}
