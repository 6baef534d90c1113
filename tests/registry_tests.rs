mod common;

use std::sync::Arc;
use actix_sqlx_models::database::structs::connection_cache::ConnectionCache;
use actix_sqlx_models::database::structs::connection_spec::ConnectionSpec;
use actix_sqlx_models::models::enums::association_kind::AssociationKind;
use actix_sqlx_models::models::enums::model_reference::ModelReference;
use actix_sqlx_models::models::errors::RegistryError;
use actix_sqlx_models::models::loader::load_models;
use actix_sqlx_models::models::structs::model_schema::ModelSchema;
use actix_sqlx_models::plugin::structs::validated_options::ValidatedOptions;
use common::{fixtures_path, RecordingOrm};

fn validated(orm: &Arc<RecordingOrm>, connections: Vec<ConnectionSpec>) -> ValidatedOptions {
    ValidatedOptions {
        orm: orm.clone(),
        models_path: Some(fixtures_path()),
        connections,
    }
}

#[tokio::test]
async fn test_load_models_in_declaration_order() {
    let orm = Arc::new(RecordingOrm::new());
    let cache = Arc::new(ConnectionCache::new());
    let options = validated(
        &orm,
        vec![
            ConnectionSpec::new("sqlite://one.db")
                .with_model(ModelReference::named("xxx"))
                .with_model(ModelReference::named("test")),
            ConnectionSpec::new("sqlite://two.db").with_model(ModelReference::named("test2")),
        ],
    );

    let registry = load_models(&options, &cache).await.unwrap();

    assert_eq!(registry.names().collect::<Vec<_>>(), vec!["xxx", "test", "test2"]);
    assert_eq!(cache.keys(), vec!["sqlite://one.db", "sqlite://two.db"]);
    assert_eq!(registry.get("test2").unwrap().connection_key(), "sqlite://two.db");
}

#[tokio::test]
async fn test_load_models_mixes_named_and_defined() {
    let orm = Arc::new(RecordingOrm::new());
    let cache = Arc::new(ConnectionCache::new());
    let inline = ModelSchema::new("comments").with_association(AssociationKind::belongs_to, "test", Some("post_id"));
    let options = validated(
        &orm,
        vec![ConnectionSpec::new("sqlite://blog.db")
            .with_model(ModelReference::named("test"))
            .with_model(ModelReference::defined("comment", Arc::new(inline)))],
    );

    let registry = load_models(&options, &cache).await.unwrap();

    let comment = registry.get("comment").unwrap();
    assert_eq!(comment.table_name(), "comments");
    assert!(comment.has_associate());
    assert_eq!(comment.association("test").unwrap().foreign_key, "post_id");
    assert!(registry.get("test").unwrap().associations().is_empty());

    let schema = registry.table_schema("comment").unwrap();
    assert!(schema.has_column("post_id"));
}

#[tokio::test]
async fn test_failed_load_leaves_connections_for_the_caller() {
    let orm = Arc::new(RecordingOrm::new());
    let cache = Arc::new(ConnectionCache::new());
    let options = validated(
        &orm,
        vec![
            ConnectionSpec::new("sqlite://one.db").with_model(ModelReference::named("test")),
            ConnectionSpec::new("sqlite://two.db").with_model(ModelReference::named("test")),
        ],
    );

    let result = load_models(&options, &cache).await;

    assert!(matches!(result, Err(RegistryError::DuplicateModel { name }) if name == "test"));
    assert_eq!(cache.len(), 2);
    assert!(orm.closes().is_empty());

    cache.close_all().await.unwrap();
    assert_eq!(orm.closes(), vec!["sqlite://one.db", "sqlite://two.db"]);
    assert!(cache.is_empty());
}

#[tokio::test]
async fn test_connection_without_models() {
    let orm = Arc::new(RecordingOrm::new());
    let cache = Arc::new(ConnectionCache::new());
    let options = validated(&orm, vec![ConnectionSpec::new("sqlite://empty.db")]);

    let registry = load_models(&options, &cache).await.unwrap();

    assert!(registry.is_empty());
    assert_eq!(cache.len(), 1);
}
