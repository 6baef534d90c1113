use once_cell::sync::Lazy;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use regex::Regex;
use crate::database::enums::dialect::Dialect;
use crate::database::errors::OrmError;
use crate::database::structs::connection_spec::ConnectionSpec;
use crate::models::enums::column_type::ColumnType;
use crate::models::structs::column_schema::ColumnSchema;
use crate::models::structs::model_schema::ModelSchema;

static IDENTIFIER_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_]{0,62}$").unwrap());

const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.');

pub const MEMORY_STORAGE: &str = ":memory:";

pub fn quote_identifier(dialect: Dialect, identifier: &str) -> String {
    match dialect {
        Dialect::sqlite3 | Dialect::mysql => format!("`{}`", identifier),
        Dialect::pgsql => format!("\"{}\"", identifier),
    }
}

pub fn is_valid_identifier(identifier: &str) -> bool {
    IDENTIFIER_PATTERN.is_match(identifier)
}

pub fn validate_schema_identifiers(model: &str, schema: &ModelSchema) -> Result<(), OrmError> {
    let table = schema.table_name(model);
    let identifiers = std::iter::once(table)
        .chain(schema.columns.iter().map(|column| column.name.as_str()))
        .chain(schema.timestamp_columns())
        .chain(schema.associations.iter().filter_map(|association| association.foreign_key.as_deref()));
    for identifier in identifiers {
        if !is_valid_identifier(identifier) {
            return Err(OrmError::InvalidIdentifier {
                model: model.to_string(),
                identifier: identifier.to_string(),
            });
        }
    }
    Ok(())
}

pub fn is_memory_storage(spec: &ConnectionSpec) -> bool {
    spec.dialect() == Dialect::sqlite3
        && !spec.is_uri()
        && spec.options.storage.as_deref().unwrap_or(&spec.database) == MEMORY_STORAGE
}

/// Builds the sqlx connection string for a connection spec. Unknown
/// connection options are passed to the driver as query parameters.
pub fn build_dsn(spec: &ConnectionSpec) -> Result<String, OrmError> {
    let dsn = base_dsn(spec)?;
    let query = extra_query(spec)?;
    if query.is_empty() {
        Ok(dsn)
    } else if dsn.contains('?') {
        Ok(format!("{}&{}", dsn, query))
    } else {
        Ok(format!("{}?{}", dsn, query))
    }
}

fn extra_query(spec: &ConnectionSpec) -> Result<String, OrmError> {
    let mut pairs = Vec::with_capacity(spec.options.extra.len());
    for (key, value) in &spec.options.extra {
        let value = match value {
            toml::Value::String(value) => value.clone(),
            toml::Value::Integer(value) => value.to_string(),
            toml::Value::Float(value) => value.to_string(),
            toml::Value::Boolean(value) => value.to_string(),
            other => {
                return Err(OrmError::UnsupportedOption {
                    key: key.clone(),
                    value: other.to_string(),
                });
            }
        };
        pairs.push(format!(
            "{}={}",
            utf8_percent_encode(key, QUERY_COMPONENT),
            utf8_percent_encode(&value, QUERY_COMPONENT)
        ));
    }
    Ok(pairs.join("&"))
}

fn base_dsn(spec: &ConnectionSpec) -> Result<String, OrmError> {
    if spec.is_uri() {
        return match Dialect::from_uri(&spec.database) {
            Some(_) => Ok(spec.database.clone()),
            None => Err(OrmError::UnsupportedDialect(spec.database.clone())),
        };
    }

    let dialect = spec.dialect();
    match dialect {
        Dialect::sqlite3 => {
            let storage = spec.options.storage.as_deref().unwrap_or(&spec.database);
            if storage == MEMORY_STORAGE {
                Ok(String::from("sqlite::memory:"))
            } else {
                Ok(format!("{}{}", dialect.url_scheme(), storage))
            }
        }
        Dialect::mysql | Dialect::pgsql => {
            let credentials = match (&spec.username, &spec.password) {
                (Some(username), Some(password)) => format!(
                    "{}:{}@",
                    utf8_percent_encode(username, NON_ALPHANUMERIC),
                    utf8_percent_encode(password, NON_ALPHANUMERIC)
                ),
                (Some(username), None) => format!("{}@", utf8_percent_encode(username, NON_ALPHANUMERIC)),
                _ => String::new(),
            };
            let host = spec.options.host.as_deref().unwrap_or("127.0.0.1");
            let port = spec.options.port.or(dialect.default_port()).unwrap_or_default();
            Ok(format!(
                "{}{}{}:{}/{}",
                dialect.url_scheme(),
                credentials,
                host,
                port,
                utf8_percent_encode(&spec.database, NON_ALPHANUMERIC)
            ))
        }
    }
}

pub fn column_sql_type(dialect: Dialect, column_type: ColumnType, length: Option<u32>) -> String {
    match (dialect, column_type) {
        (Dialect::sqlite3, ColumnType::integer | ColumnType::big_integer | ColumnType::boolean) => String::from("INTEGER"),
        (Dialect::sqlite3, ColumnType::float) => String::from("REAL"),
        (Dialect::sqlite3, ColumnType::string) => format!("VARCHAR({})", length.unwrap_or(255)),
        (Dialect::sqlite3, ColumnType::text | ColumnType::uuid) => String::from("TEXT"),
        (Dialect::sqlite3, ColumnType::timestamp) => String::from("DATETIME"),
        (Dialect::mysql, ColumnType::integer) => String::from("INT"),
        (Dialect::mysql, ColumnType::big_integer) => String::from("BIGINT"),
        (Dialect::mysql, ColumnType::float) => String::from("DOUBLE"),
        (Dialect::mysql, ColumnType::boolean) => String::from("TINYINT(1)"),
        (Dialect::mysql, ColumnType::string) => format!("VARCHAR({})", length.unwrap_or(255)),
        (Dialect::mysql, ColumnType::text) => String::from("TEXT"),
        (Dialect::mysql, ColumnType::timestamp) => String::from("DATETIME"),
        (Dialect::mysql, ColumnType::uuid) => String::from("CHAR(36)"),
        (Dialect::pgsql, ColumnType::integer) => String::from("INTEGER"),
        (Dialect::pgsql, ColumnType::big_integer) => String::from("BIGINT"),
        (Dialect::pgsql, ColumnType::float) => String::from("DOUBLE PRECISION"),
        (Dialect::pgsql, ColumnType::boolean) => String::from("BOOLEAN"),
        (Dialect::pgsql, ColumnType::string) => format!("VARCHAR({})", length.unwrap_or(255)),
        (Dialect::pgsql, ColumnType::text) => String::from("TEXT"),
        (Dialect::pgsql, ColumnType::timestamp) => String::from("TIMESTAMP"),
        (Dialect::pgsql, ColumnType::uuid) => String::from("UUID"),
    }
}

fn column_definition(dialect: Dialect, column: &ColumnSchema) -> String {
    let name = quote_identifier(dialect, &column.name);
    if column.auto_increment {
        return match dialect {
            Dialect::sqlite3 => format!("{} INTEGER PRIMARY KEY AUTOINCREMENT", name),
            Dialect::mysql => format!(
                "{} {} NOT NULL AUTO_INCREMENT PRIMARY KEY",
                name,
                column_sql_type(dialect, column.column_type, column.length)
            ),
            Dialect::pgsql => match column.column_type {
                ColumnType::big_integer => format!("{} BIGSERIAL PRIMARY KEY", name),
                _ => format!("{} SERIAL PRIMARY KEY", name),
            },
        };
    }

    let mut definition = format!("{} {}", name, column_sql_type(dialect, column.column_type, column.length));
    if !column.allow_null {
        definition.push_str(" NOT NULL");
    }
    if column.primary_key {
        definition.push_str(" PRIMARY KEY");
    }
    definition
}

/// `CREATE TABLE IF NOT EXISTS` statement for a schema; adds an `id` primary
/// key when the schema declares none.
pub fn build_create_table_query(dialect: Dialect, model: &str, schema: &ModelSchema) -> String {
    let mut definitions = Vec::new();
    if !schema.columns.iter().any(|column| column.primary_key || column.auto_increment) {
        definitions.push(column_definition(dialect, &ColumnSchema::primary_id()));
    }
    definitions.extend(schema.columns.iter().map(|column| column_definition(dialect, column)));
    definitions.extend(schema.timestamp_columns().map(|column| {
        format!(
            "{} {}",
            quote_identifier(dialect, column),
            column_sql_type(dialect, ColumnType::timestamp, None)
        )
    }));
    format!(
        "CREATE TABLE IF NOT EXISTS {} ({})",
        quote_identifier(dialect, schema.table_name(model)),
        definitions.join(", ")
    )
}
