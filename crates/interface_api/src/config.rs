//! API configuration

use serde::Deserialize;

/// API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// JWT secret for authentication
    pub jwt_secret: String,
    /// JWT expiration in seconds
    pub jwt_expiration_secs: u64,
    /// Database URL
    pub database_url: String,
    /// Log level
    pub log_level: String,
    /// Chat-completions endpoint for the match advisor
    pub advisor_api_url: String,
    /// Bearer token for the match advisor
    pub advisor_api_key: String,
    /// Advisor model identifier
    pub advisor_model: String,
    /// Transactional email endpoint
    pub email_api_url: String,
    /// Bearer token for the email service
    pub email_api_key: String,
    /// Sender identity for outcome emails
    pub email_from: String,
    /// Public base URL for bucket-relative image references
    pub storage_public_base: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            jwt_secret: "change-me-in-production".to_string(),
            jwt_expiration_secs: 3600,
            database_url: "postgres://localhost/lostfound".to_string(),
            log_level: "info".to_string(),
            advisor_api_url: "https://api.openai.com/v1/chat/completions".to_string(),
            advisor_api_key: String::new(),
            advisor_model: "gpt-4".to_string(),
            email_api_url: "https://api.resend.com/emails".to_string(),
            email_api_key: String::new(),
            email_from: "Lost Realm <onboarding@tradenexusonline.com>".to_string(),
            storage_public_base: String::new(),
        }
    }
}

impl ApiConfig {
    /// Loads configuration from environment
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("API"))
            .build()?
            .try_deserialize()
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
