use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use actix_web::dev::ServerHandle;
use actix_web::http::header::ContentType;
use actix_web::web::{Data, ServiceConfig};
use log::{debug, info};
use serde_json::json;
use crate::config::structs::http_server_config::HttpServerConfig;
use crate::http::structs::model_summary::ModelSummary;
use crate::models::structs::model_registry::ModelRegistry;
use crate::plugin::impls::models_plugin::PLUGIN_NAME;
use crate::plugin::structs::actix_host::ActixHost;

pub fn http_service_routes(data: Arc<ActixHost>) -> Box<dyn Fn(&mut ServiceConfig)>
{
    Box::new(move |cfg: &mut ServiceConfig| {
        cfg.app_data(web::Data::new(data.clone()));
        cfg.service(web::resource("/models").route(web::get().to(http_service_models)));
        cfg.service(web::resource("/models/{name}").route(web::get().to(http_service_model)));
        cfg.default_service(web::route().to(http_service_not_found));
    })
}

pub async fn http_service(
    addr: SocketAddr,
    data: Arc<ActixHost>,
    config: HttpServerConfig
) -> std::io::Result<(ServerHandle, impl Future<Output=Result<(), std::io::Error>>)>
{
    info!("[HTTP] Starting server listener on {}", addr);
    let server = HttpServer::new(move || {
        App::new()
            .configure(http_service_routes(data.clone()))
    })
        .keep_alive(Duration::from_secs(config.keep_alive))
        .client_request_timeout(Duration::from_secs(config.request_timeout))
        .client_disconnect_timeout(Duration::from_secs(config.disconnect_timeout))
        .workers(config.threads as usize)
        .bind((addr.ip(), addr.port()))?
        .disable_signals()
        .run();

    Ok((server.handle(), server))
}

pub async fn http_service_models(data: Data<Arc<ActixHost>>) -> HttpResponse
{
    let registry = match http_service_registry(&data) {
        Ok(registry) => registry,
        Err(response) => return response
    };
    let summaries: Vec<ModelSummary> = registry.iter().map(|model| ModelSummary::from(model.as_ref())).collect();
    HttpResponse::Ok().content_type(ContentType::json()).json(json!({
        "plugin": PLUGIN_NAME,
        "models": summaries
    }))
}

pub async fn http_service_model(path: web::Path<String>, data: Data<Arc<ActixHost>>) -> HttpResponse
{
    let registry = match http_service_registry(&data) {
        Ok(registry) => registry,
        Err(response) => return response
    };
    let name = path.into_inner();
    match registry.get(&name) {
        None => {
            debug!("[HTTP] Unknown model requested: {}", name);
            HttpResponse::NotFound().content_type(ContentType::json()).json(json!({
                "status": format!("unknown model {}", name)
            }))
        }
        Some(model) => {
            HttpResponse::Ok().content_type(ContentType::json()).json(ModelSummary::from(model.as_ref()))
        }
    }
}

pub async fn http_service_not_found(request: HttpRequest) -> HttpResponse
{
    debug!("[HTTP] Unknown request: {} {}", request.method(), request.path());
    HttpResponse::NotFound().content_type(ContentType::json()).json(json!({
        "status": "unknown request"
    }))
}

fn http_service_registry(data: &Data<Arc<ActixHost>>) -> Result<Arc<ModelRegistry>, HttpResponse>
{
    data.models(PLUGIN_NAME).ok_or_else(|| {
        HttpResponse::ServiceUnavailable().content_type(ContentType::json()).json(json!({
            "status": "models not loaded"
        }))
    })
}

pub fn http_check_host_and_port_used(bind_address: &str) -> std::io::Result<()> {
    if cfg!(target_os = "windows") {
        std::net::TcpListener::bind(bind_address)?;
    }
    Ok(())
}
