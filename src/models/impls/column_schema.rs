use crate::models::enums::column_type::ColumnType;
use crate::models::structs::column_schema::ColumnSchema;

impl ColumnSchema {
    pub fn new(name: &str, column_type: ColumnType) -> ColumnSchema {
        ColumnSchema {
            name: name.to_string(),
            column_type,
            length: None,
            primary_key: false,
            allow_null: true,
            auto_increment: false,
        }
    }

    /// Auto incrementing `id` primary key added to schemas that declare none.
    pub fn primary_id() -> ColumnSchema {
        ColumnSchema {
            primary_key: true,
            allow_null: false,
            auto_increment: true,
            ..ColumnSchema::new("id", ColumnType::integer)
        }
    }

    pub fn foreign_key(name: &str) -> ColumnSchema {
        ColumnSchema::new(name, ColumnType::integer)
    }
}
