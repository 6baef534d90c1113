use std::sync::Arc;
use log::{debug, info};
use crate::database::structs::connection_cache::ConnectionCache;
use crate::models::errors::RegistryError;
use crate::models::structs::connection_link::ConnectionLink;
use crate::models::structs::model::Model;
use crate::models::structs::model_registry::ModelRegistry;
use crate::models::structs::model_registry_builder::ModelRegistryBuilder;
use crate::plugin::structs::validated_options::ValidatedOptions;

/// Opens every declared connection, imports its models and wires their
/// associations.
///
/// Connections and models are processed strictly in declaration order.
/// Associations only run once every model of every connection is loaded, on
/// the frozen registry. Any failure aborts the load; connections opened so far
/// stay in `cache` for the caller to close.
#[tracing::instrument(level = "debug", skip_all)]
pub async fn load_models(
    options: &ValidatedOptions,
    cache: &Arc<ConnectionCache>,
) -> Result<ModelRegistry, RegistryError> {
    let mut builder = ModelRegistryBuilder::new();

    for spec in &options.connections {
        let (key, connection) = cache.get_or_create(spec, options.orm.as_ref()).await?;

        for reference in &spec.models {
            let name = reference.name();
            if builder.contains(name) {
                return Err(RegistryError::DuplicateModel { name: name.to_string() });
            }

            let definition = reference.resolve(options.models_path.as_deref())?;
            let schema = connection
                .import(name, definition.as_ref())
                .await
                .map_err(|source| RegistryError::Import {
                    name: name.to_string(),
                    source,
                })?;
            debug!("[MODELS] Loaded model {} on {}", name, connection.database());
            builder.insert(Model::new(
                name,
                schema,
                definition.associate(),
                ConnectionLink::new(key.clone(), cache.clone()),
            ))?;
        }
    }

    let registry = builder.build();
    registry.associate_all()?;
    info!(
        "[MODELS] Loaded {} model(s) over {} connection(s)",
        registry.len(),
        options.connections.len()
    );
    Ok(registry)
}
