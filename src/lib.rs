#[cfg(feature = "server")]
use std::sync::Arc;

#[cfg(feature = "server")]
use actix_cors::Cors;
#[cfg(feature = "server")]
use actix_web::{App, HttpServer, middleware, web};

#[cfg(feature = "server")]
use crate::ai::{ChatModel, GeminiModel};
#[cfg(feature = "server")]
use crate::models::config::ServerConfig;
#[cfg(feature = "server")]
use crate::repository::JsonFileRepository;
#[cfg(feature = "server")]
use crate::routes::SharedRepository;
#[cfg(feature = "server")]
use crate::routes::api::{ask_ai, list_data};

#[cfg(feature = "server")]
pub mod ai;
pub mod domain;
#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "server")]
mod error_conversions;
pub mod filtering;
pub mod models;
pub mod pagination;
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;

/// Registers the `/api` scope with its handlers.
#[cfg(feature = "server")]
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api").service(list_data).service(ask_ai));
}

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
#[cfg(feature = "server")]
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    // Records are re-read from this file on every request.
    let repo: Arc<SharedRepository> = Arc::new(JsonFileRepository::new(&server_config.data_path));

    let gemini = GeminiModel::new(&server_config.ai)
        .map_err(|e| std::io::Error::other(format!("Failed to build AI client: {e}")))?;
    if server_config.ai.api_key.is_none() {
        log::warn!("No AI API key configured; /api/ai will answer with the fallback message");
    }
    log::info!("AI proxy uses model {}", gemini.model());
    let model: Arc<dyn ChatModel> = Arc::new(gemini);

    let bind_address = (server_config.address.clone(), server_config.port);
    log::info!(
        "Serving {} on {}:{}",
        server_config.data_path,
        bind_address.0,
        bind_address.1
    );

    let repo = web::Data::from(repo);
    let model = web::Data::from(model);
    let server_config = web::Data::new(server_config);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .configure(configure_api)
            .app_data(repo.clone())
            .app_data(model.clone())
            .app_data(server_config.clone())
    })
    .bind(bind_address)?
    .run()
    .await
}
