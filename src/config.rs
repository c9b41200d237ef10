/// Runtime configuration, resolved once at startup from environment
/// variables and injected into the service. Never read at request time.
#[derive(Debug, Clone)]
pub struct Config {
    pub elastic_node: String,
    pub elastic_username: String,
    pub elastic_password: String,
    pub port: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            elastic_node: std::env::var("ELASTIC_NODE")
                .unwrap_or_else(|_| "http://localhost:9200".to_string()),
            elastic_username: std::env::var("ELASTIC_USERNAME")
                .unwrap_or_else(|_| "elastic".to_string()),
            elastic_password: std::env::var("ELASTIC_PASSWORD").unwrap_or_default(),
            port: std::env::var("PORT").unwrap_or_else(|_| "3000".to_string()),
        }
    }
}
