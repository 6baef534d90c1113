use std::net::SocketAddr;
use std::process::exit;
use std::sync::Arc;
use clap::Parser;
use log::{error, info, warn};
use tokio::runtime::Builder;
use tokio_shutdown::Shutdown;
use actix_sqlx_models::common::common::setup_logging;
use actix_sqlx_models::config::structs::configuration::Configuration;
use actix_sqlx_models::database::structs::sqlx_orm::SqlxOrm;
use actix_sqlx_models::http::http::{http_check_host_and_port_used, http_service};
use actix_sqlx_models::plugin::structs::actix_host::ActixHost;
use actix_sqlx_models::plugin::structs::models_plugin::ModelsPlugin;
use actix_sqlx_models::plugin::structs::plugin_options::PluginOptions;
use actix_sqlx_models::structs::Cli;

#[tracing::instrument(level = "debug")]
fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => Arc::new(config),
        Err(_) => exit(101)
    };

    if let Err(error) = setup_logging(&config) {
        eprintln!("[BOOT] {}", error);
        exit(1);
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let host = Arc::new(ActixHost::new());
            let plugin = ModelsPlugin::new();
            let options = PluginOptions::from_config(&config.models).with_orm(Arc::new(SqlxOrm::new()));

            let models = match plugin.register(&host, options).await {
                Ok(models) => models,
                Err(error) => {
                    error!("[BOOT] Unable to register {}: {}", plugin.name(), error);
                    exit(1);
                }
            };

            if args.create_databases {
                match models.sync_all().await {
                    Ok(count) => info!("[BOOT] Created {} table(s)", count),
                    Err(error) => {
                        error!("[BOOT] Unable to create tables: {}", error);
                        if let Err(error) = host.stop().await {
                            warn!("[BOOT] {}", error);
                        }
                        exit(1);
                    }
                }
            }

            let tokio_shutdown = Shutdown::new().expect("shutdown creation works on first call");

            let mut http_handle = None;
            if config.http_server.enabled {
                http_check_host_and_port_used(&config.http_server.bind_address)?;
                let address: SocketAddr = match config.http_server.bind_address.parse() {
                    Ok(address) => address,
                    Err(error) => {
                        error!("[BOOT] Invalid bind address {}: {}", config.http_server.bind_address, error);
                        exit(1);
                    }
                };
                let (handle, future) = http_service(address, host.clone(), config.http_server.clone()).await?;
                tokio::spawn(async move {
                    if let Err(error) = future.await {
                        error!("[HTTP] Server stopped with error: {}", error);
                    }
                });
                http_handle = Some(handle);
            }

            tokio_shutdown.handle().await;

            info!("[BOOT] Shutting down...");
            if let Some(handle) = http_handle {
                handle.stop(true).await;
            }
            if let Err(error) = host.stop().await {
                warn!("[BOOT] {}", error);
            }
            info!("[BOOT] Shutdown complete");
            Ok(())
        })
}
