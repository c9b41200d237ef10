use crate::models::requests::SearchRequest;
use crate::models::responses::ErrorResponse;
use crate::services::elastic::ElasticClient;
use crate::services::query::build_search_body;
use axum::{extract::State, http::StatusCode, response::Json};
use serde_json::Value;
use std::sync::Arc;
use tracing::{error, info};

type SearchClient = Arc<ElasticClient>;

pub async fn search_documents(
    State(client): State<SearchClient>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<Value>, (StatusCode, Json<ErrorResponse>)> {
    info!("Search query: {:?}", request);

    let body = build_search_body(&request);

    match client.search(&body).await {
        Ok(response) => Ok(Json(response)),
        Err(e) => {
            error!("Search error: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Search failed".to_string(),
                    details: e.to_string(),
                }),
            ))
        }
    }
}
