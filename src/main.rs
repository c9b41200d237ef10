use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

mod config;
mod models;
mod routes;
mod services;

use config::Config;
use routes::{health::health_check, search::search_documents};
use services::elastic::ElasticClient;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("search_gateway=info,tower_http=info")
        .init();

    let config = Config::from_env();
    let client = Arc::new(ElasticClient::new(&config));

    let app = Router::new()
        .route("/search", post(search_documents))
        .route("/health", get(health_check))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(client);

    let addr = format!("0.0.0.0:{}", config.port);

    info!("Search gateway starting on {}", addr);
    info!("Using Elasticsearch node {}", config.elastic_node);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
