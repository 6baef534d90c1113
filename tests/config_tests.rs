mod common;

use std::sync::Arc;
use actix_sqlx_models::config::structs::configuration::Configuration;
use actix_sqlx_models::database::enums::dialect::Dialect;
use actix_sqlx_models::models::errors::RegistryError;
use actix_sqlx_models::plugin::structs::models_plugin::ModelsPlugin;
use actix_sqlx_models::plugin::structs::plugin_options::PluginOptions;
use common::{fixtures_path, RecordingHost, RecordingOrm};

fn write_config(dir: &tempfile::TempDir, models: &str) -> String {
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        format!(
            r#"
log_level = "info"

[http_server]
enabled = true
bind_address = "127.0.0.1:8080"
threads = 2
keep_alive = 60
request_timeout = 15
disconnect_timeout = 15

{}
"#,
            models
        ),
    )
    .unwrap();
    path.to_str().unwrap().to_string()
}

#[tokio::test]
async fn test_flat_config_registers_every_database() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(
        &dir,
        &format!(
            r#"
[models]
username = "root"
password = "secret"
models_path = {:?}
options = {{ dialect = "postgres", host = "db.local" }}

[[models.databases]]
database = "test"
models = ["test", "test2"]

[[models.databases]]
database = "test3"
models = ["next"]
"#,
            fixtures_path().to_str().unwrap()
        ),
    );

    let config = Configuration::load_from_file(&path, false).unwrap();
    let orm = Arc::new(RecordingOrm::new());
    let host = RecordingHost::new();
    let models = ModelsPlugin::new()
        .register(&host, PluginOptions::from_config(&config.models).with_orm(orm.clone()))
        .await
        .unwrap();

    assert_eq!(models.names().collect::<Vec<_>>(), vec!["test", "test2", "next"]);
    assert_eq!(orm.connects(), vec!["test", "test3"]);
    let connection = models.get("next").unwrap().connection().unwrap();
    assert_eq!(connection.dialect(), Dialect::pgsql);
}

#[tokio::test]
async fn test_connections_config_with_inline_models() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(
        &dir,
        r#"
[[models.connections]]
database = "sqlite://inline.db"
models = [
    { name = "author", schema = { columns = [{ name = "name", type = "string" }] } },
    { name = "book", schema = { associations = [{ kind = "belongs_to", target = "author" }] } },
]
"#,
    );

    let config = Configuration::load_from_file(&path, false).unwrap();
    let orm = Arc::new(RecordingOrm::new());
    let host = RecordingHost::new();
    let models = ModelsPlugin::new()
        .register(&host, PluginOptions::from_config(&config.models).with_orm(orm.clone()))
        .await
        .unwrap();

    assert_eq!(models.len(), 2);
    assert_eq!(models.get("book").unwrap().association("author").unwrap().foreign_key, "author_id");
    assert_eq!(models.get("author").unwrap().connection().unwrap().dialect(), Dialect::sqlite3);
}

#[tokio::test]
async fn test_config_mixing_shapes_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(
        &dir,
        r#"
[models]
username = "root"

[[models.databases]]
database = "test"

[[models.connections]]
database = "other"
"#,
    );

    let config = Configuration::load_from_file(&path, false).unwrap();
    let orm = Arc::new(RecordingOrm::new());
    let result = ModelsPlugin::new()
        .register(&RecordingHost::new(), PluginOptions::from_config(&config.models).with_orm(orm.clone()))
        .await;

    match result {
        Err(RegistryError::Configuration(error)) => {
            assert!(error.violations().iter().any(|v| v.contains("mutually exclusive")));
        }
        other => panic!("unexpected result: {:?}", other.map(|models| models.len())),
    }
    assert!(orm.connects().is_empty());
}

#[test]
fn test_invalid_host_settings_fail_loading() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
log_level = "chatty"

[http_server]
enabled = true
bind_address = "127.0.0.1:8080"
threads = 1
keep_alive = 60
request_timeout = 15
disconnect_timeout = 15
"#,
    )
    .unwrap();

    let error = Configuration::load_from_file(path.to_str().unwrap(), false).unwrap_err();
    assert_eq!(error.message(), "invalid configuration");
}
