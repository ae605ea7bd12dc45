mod config;
mod doc;
mod dtos;
mod error;
mod routes;
mod utils;

use axum::{
    Router,
    http::Method,
    routing::{get, post},
};
use config::Config;
use database::db::create_pool;
use doc::ApiDoc;
use log::{error, info};
use sea_orm::DatabaseConnection;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use utils::shutdown::shutdown_signal;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Shared handler state: the pooled database connection
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

/// Only the submission POST and its preflight cross the origin boundary;
/// credentials are never allowed.
fn cors_layer(config: &Config) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers(Any)
        .allow_credentials(false);

    match config.origin_values() {
        Some(origins) => layer.allow_origin(AllowOrigin::list(origins)),
        None => layer.allow_origin(Any),
    }
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!("{err}");
            std::process::exit(1);
        }
    };

    let db = match create_pool(&config.database_url).await {
        Ok(db) => db,
        Err(err) => {
            error!("failed to connect to database: {err}");
            std::process::exit(1);
        }
    };
    info!("database connection established");

    let app = Router::new()
        .route("/submit", post(routes::submit::submit))
        .route("/health", get(routes::health::health))
        .route("/debug/db", get(routes::debug::db_check))
        .route("/debug/insert", post(routes::debug::debug_insert))
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(ServiceBuilder::new().layer(cors_layer(&config)))
        .with_state(AppState { db });

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port))
        .await
        .expect("failed to bind listener");
    info!("running axum on http://0.0.0.0:{}", config.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();
}
