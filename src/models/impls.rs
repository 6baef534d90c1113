pub mod association_kind;
pub mod column_schema;
pub mod connection_link;
pub mod model;
pub mod model_reference;
pub mod model_registry;
pub mod model_registry_builder;
pub mod model_schema;
