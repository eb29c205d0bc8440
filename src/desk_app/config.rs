use crate::shared::config::{AppConfig, AppConfigBuilder, ConfigError};

/// Default server URL
const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:3000";

/// Desktop client configuration wrapper.
#[derive(Debug, Clone)]
pub struct Config {
    app: AppConfig,
}

impl Default for Config {
    fn default() -> Self {
        let server_url = std::env::var("CLIENT_API_URL")
            .unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string());

        match Self::with_builder(AppConfig::builder().server_url(server_url)) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring CLIENT_API_URL ({}), using {}", e, DEFAULT_SERVER_URL);
                Self {
                    app: AppConfig {
                        server_url: Some(DEFAULT_SERVER_URL.to_string()),
                    },
                }
            }
        }
    }
}

impl Config {
    /// Create a new configuration from the environment, with defaults
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_builder(builder: AppConfigBuilder) -> Result<Self, ConfigError> {
        let app = builder.build()?;
        Ok(Self { app })
    }

    /// Configuration pointing at an explicit server
    pub fn for_server(url: impl Into<String>) -> Result<Self, ConfigError> {
        Self::with_builder(AppConfig::builder().server_url(url))
    }

    /// Get the full URL for an API endpoint
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.server_url(), path)
    }

    pub fn server_url(&self) -> &str {
        self.app.server_url.as_deref().unwrap_or(DEFAULT_SERVER_URL)
    }
}
