use crate::config::Config;
use serde_json::Value;
use thiserror::Error;

/// Target index for all searches. Fixed, not request-configurable.
pub const SEARCH_INDEX: &str = "test";

#[derive(Error, Debug)]
pub enum ElasticError {
    #[error("Elasticsearch request error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Elasticsearch returned {status}: {message}")]
    Engine {
        status: reqwest::StatusCode,
        message: String,
    },
}

/// Long-lived handle to the search engine. Constructed once at startup
/// and shared by every request; connection pooling is reqwest's.
pub struct ElasticClient {
    client: reqwest::Client,
    node: String,
    username: String,
    password: String,
}

impl ElasticClient {
    pub fn new(config: &Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            node: config.elastic_node.trim_end_matches('/').to_string(),
            username: config.elastic_username.clone(),
            password: config.elastic_password.clone(),
        }
    }

    /// Submits a query body against the fixed index and returns the
    /// engine's response verbatim. One round trip, no retry.
    pub async fn search(&self, body: &Value) -> Result<Value, ElasticError> {
        let url = format!("{}/{}/_search", self.node, SEARCH_INDEX);

        let response = self
            .client
            .post(&url)
            .basic_auth(&self.username, Some(&self.password))
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ElasticError::Engine { status, message });
        }

        Ok(response.json().await?)
    }
}
