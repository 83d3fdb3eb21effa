//! Developer Directory Backend
//!
//! A REST backend keeping developer profiles in a single JSON file.

mod api;
mod config;
mod errors;
mod models;
mod search;
mod service;
mod store;

use std::sync::Arc;

use axum::{
    routing::get,
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::{Config, LogFormat};
use service::DeveloperService;
use store::JsonFileStore;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<DeveloperService>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_tracing(&config);

    tracing::info!("Starting Developer Directory Backend");
    tracing::info!("Bind address: {}", config.bind_addr);

    // Initialize the store
    let store = JsonFileStore::new(&config.data_path);
    tracing::info!("Data path: {:?}", store.path());
    let service = Arc::new(DeveloperService::new(store));
    service.init().await?;

    // Refuse to serve from a file we cannot read
    let count = service.list().await?.len();
    tracing::info!("Loaded {} developers", count);

    let state = AppState { service };

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing(config: &Config) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let registry = tracing_subscriber::registry().with(env_filter);
    match config.log_format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route(
            "/developers",
            get(api::list_developers).post(api::create_developer),
        )
        .route("/developers/search", get(api::search_developers))
        .route(
            "/developers/{id}",
            get(api::get_developer)
                .put(api::update_developer)
                .delete(api::delete_developer),
        );

    // Health check
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .merge(api_routes)
        .merge(health_routes)
        .fallback(api::route_not_found)
        .method_not_allowed_fallback(api::route_not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
