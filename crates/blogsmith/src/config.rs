//! Application configuration: defaults, TOML file, environment, CLI.

use blogsmith_error::ConfigError;
use blogsmith_server::{ModelSpec, ServerConfig};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// Address the page server listens on by default.
pub const DEFAULT_BIND: &str = "127.0.0.1:8501";

/// Top-level configuration.
///
/// Layers apply in order: built-in defaults, an optional TOML file,
/// `BLOGSMITH_*` / `INFERENCE_SERVER_*` environment variables, then CLI flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct AppConfig {
    /// Listen address for the page server
    #[serde(default = "default_bind")]
    bind: String,
    /// Model artifact and cache behavior
    #[serde(default)]
    model: ModelSettings,
    /// Inference runtime connection
    #[serde(default)]
    inference: ServerConfig,
}

/// Model artifact plus handle lifecycle options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Getters)]
pub struct ModelSettings {
    /// Artifact path and architecture
    #[serde(flatten)]
    spec: ModelSpec,
    /// Reload the artifact for every generation instead of caching it
    #[serde(default)]
    reload_per_request: bool,
    /// Load the artifact at startup rather than on first use
    #[serde(default)]
    warm_up: bool,
}

fn default_bind() -> String {
    DEFAULT_BIND.to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            model: ModelSettings::default(),
            inference: ServerConfig::default(),
        }
    }
}

impl AppConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Load configuration from a TOML file.
    #[tracing::instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Defaults or the given file, with environment overrides applied.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let base = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        base.with_env_overrides()
    }

    /// Apply `BLOGSMITH_BIND`, `BLOGSMITH_MODEL_PATH` and the
    /// `INFERENCE_SERVER_*` variables.
    pub fn with_env_overrides(mut self) -> Result<Self, ConfigError> {
        if let Ok(bind) = std::env::var("BLOGSMITH_BIND") {
            self.bind = bind;
        }
        if let Ok(model_path) = std::env::var("BLOGSMITH_MODEL_PATH") {
            self.model.spec = self.model.spec.with_path(model_path);
        }
        self.inference = self.inference.with_env_overrides()?;
        self.validate()?;
        Ok(self)
    }

    /// Apply command-line overrides.
    pub fn with_overrides(
        mut self,
        bind: Option<String>,
        model_path: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        if let Some(bind) = bind {
            self.bind = bind;
        }
        if let Some(model_path) = model_path {
            self.model.spec = self.model.spec.with_path(model_path);
        }
        self.validate()?;
        Ok(self)
    }

    /// Parsed listen address.
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.bind
            .parse()
            .map_err(|e| ConfigError::new(format!("Invalid bind address '{}': {}", self.bind, e)))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.bind_addr()?;
        self.inference.validate()
    }
}
