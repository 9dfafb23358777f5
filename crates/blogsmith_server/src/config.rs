//! Configuration for the local inference runtime connection

use blogsmith_error::ConfigError;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Default address of a locally hosted runtime.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Configuration for local inference runtime connection
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters, derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct ServerConfig {
    /// Base URL of the runtime (e.g., "http://localhost:8080")
    #[serde(default = "default_base_url")]
    #[builder(default = "default_base_url()")]
    base_url: String,
    /// Model identifier sent to the runtime; defaults to the artifact's file stem
    #[serde(default)]
    #[builder(default)]
    model: Option<String>,
    /// Optional API key (llama.cpp and mistral.rs don't require one by default)
    #[serde(default)]
    #[builder(default)]
    api_key: Option<String>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: None,
            api_key: None,
        }
    }
}

impl ServerConfig {
    /// Creates a new builder for ServerConfig.
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }

    /// Create config from environment variables
    ///
    /// Reads:
    /// - `INFERENCE_SERVER_BASE_URL` (default: "http://localhost:8080")
    /// - `INFERENCE_SERVER_MODEL` (optional)
    /// - `INFERENCE_SERVER_API_KEY` (optional)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().with_env_overrides()
    }

    /// Apply any `INFERENCE_SERVER_*` variables on top of this config.
    pub fn with_env_overrides(mut self) -> Result<Self, ConfigError> {
        if let Ok(base_url) = std::env::var("INFERENCE_SERVER_BASE_URL") {
            self.base_url = base_url;
        }
        if let Ok(model) = std::env::var("INFERENCE_SERVER_MODEL") {
            self.model = Some(model).filter(|m| !m.is_empty());
        }
        if let Ok(api_key) = std::env::var("INFERENCE_SERVER_API_KEY") {
            self.api_key = Some(api_key).filter(|k| !k.is_empty());
        }
        self.validate()?;
        Ok(self)
    }

    /// Check that the base URL is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::new(format!(
                "Inference base URL must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }
        Ok(())
    }

    /// Completions endpoint derived from the base URL.
    pub fn completions_url(&self) -> String {
        format!("{}/v1/completions", self.base_url.trim_end_matches('/'))
    }
}
