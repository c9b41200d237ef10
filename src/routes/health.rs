use crate::models::responses::HealthResponse;
use axum::response::Json;

/// Liveness only; does not probe the search engine.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
