//! Model artifact specification and the loaded model handle.

use blogsmith_error::{ModelLoadError, ModelLoadErrorKind};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tokio::io::AsyncReadExt;
use tracing::{debug, info, instrument};

/// Artifact shipped with the original deployment.
pub const DEFAULT_MODEL_PATH: &str = "models/llama-2-7b-chat.ggmlv3.q2_K.bin";

/// Architecture family handed to the runtime.
pub const DEFAULT_MODEL_TYPE: &str = "llama";

/// Architecture families the runtime can serve.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumString,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ModelType {
    /// LLaMA and LLaMA-2 checkpoints
    Llama,
}

/// On-disk checkpoint container, identified by the first four bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum ModelFormat {
    /// Unversioned GGML
    #[strum(to_string = "ggml")]
    Ggml,
    /// Versioned GGML
    #[strum(to_string = "ggmf")]
    Ggmf,
    /// GGJT, the mmap-able GGML variant (ggmlv3 files)
    #[strum(to_string = "ggjt")]
    Ggjt,
    /// GGUF
    #[strum(to_string = "gguf")]
    Gguf,
}

impl ModelFormat {
    /// Identify a format from the file's leading bytes.
    ///
    /// GGML-era magics are little-endian u32s, so they appear reversed on disk.
    pub fn from_magic(magic: &[u8]) -> Option<Self> {
        match magic {
            b"lmgg" => Some(Self::Ggml),
            b"fmgg" => Some(Self::Ggmf),
            b"tjgg" => Some(Self::Ggjt),
            b"GGUF" => Some(Self::Gguf),
            _ => None,
        }
    }
}

/// Where the artifact lives and what architecture it holds.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters, derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct ModelSpec {
    /// Path to the checkpoint file
    #[serde(default = "default_model_path")]
    #[builder(default = "default_model_path()")]
    path: PathBuf,
    /// Architecture family name, e.g. "llama"
    #[serde(default = "default_model_type")]
    #[builder(default = "default_model_type()")]
    model_type: String,
}

fn default_model_path() -> PathBuf {
    PathBuf::from(DEFAULT_MODEL_PATH)
}

fn default_model_type() -> String {
    DEFAULT_MODEL_TYPE.to_string()
}

impl Default for ModelSpec {
    fn default() -> Self {
        Self {
            path: default_model_path(),
            model_type: default_model_type(),
        }
    }
}

impl ModelSpec {
    /// Creates a new builder for ModelSpec.
    pub fn builder() -> ModelSpecBuilder {
        ModelSpecBuilder::default()
    }

    /// Spec for a llama checkpoint at `path`.
    pub fn llama(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            model_type: default_model_type(),
        }
    }

    /// Same architecture, different artifact.
    pub fn with_path(self, path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..self
        }
    }
}

/// A validated model artifact, ready to be served by the runtime.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct LocalModel {
    /// Checkpoint path
    path: PathBuf,
    /// Architecture family
    model_type: ModelType,
    /// Container format
    format: ModelFormat,
    /// File size in bytes
    size_bytes: u64,
}

impl LocalModel {
    /// Validate the artifact described by `spec`.
    ///
    /// # Errors
    ///
    /// Fails when the model type is unknown, the path is missing or not a
    /// regular file, the file cannot be read, or its header is not a
    /// recognized checkpoint magic.
    #[instrument(skip(spec), fields(path = %spec.path().display(), model_type = %spec.model_type()))]
    pub async fn load(spec: &ModelSpec) -> Result<Self, ModelLoadError> {
        let model_type = ModelType::from_str(spec.model_type()).map_err(|_| {
            ModelLoadError::new(ModelLoadErrorKind::UnsupportedModelType(
                spec.model_type().clone(),
            ))
        })?;

        let path = spec.path();
        let display = path.display().to_string();

        let metadata = tokio::fs::metadata(path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ModelLoadError::new(ModelLoadErrorKind::NotFound(display.clone()))
            } else {
                ModelLoadError::new(ModelLoadErrorKind::Io {
                    path: display.clone(),
                    message: e.to_string(),
                })
            }
        })?;

        if !metadata.is_file() {
            return Err(ModelLoadError::new(ModelLoadErrorKind::NotAFile(display)));
        }

        let magic = read_magic(path).await.map_err(|e| {
            ModelLoadError::new(ModelLoadErrorKind::Io {
                path: display.clone(),
                message: e.to_string(),
            })
        })?;
        debug!(magic = ?magic, "Read artifact header");

        let format = ModelFormat::from_magic(&magic).ok_or_else(|| {
            ModelLoadError::new(ModelLoadErrorKind::UnknownFormat {
                path: display.clone(),
                magic: String::from_utf8_lossy(&magic).into_owned(),
            })
        })?;

        info!(
            format = %format,
            size_bytes = metadata.len(),
            "Model artifact loaded"
        );

        Ok(Self {
            path: path.clone(),
            model_type,
            format,
            size_bytes: metadata.len(),
        })
    }

    /// Identifier the runtime knows this model by: the file stem.
    pub fn name(&self) -> String {
        self.path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

async fn read_magic(path: &Path) -> std::io::Result<Vec<u8>> {
    let file = tokio::fs::File::open(path).await?;
    let mut magic = Vec::with_capacity(4);
    file.take(4).read_to_end(&mut magic).await?;
    Ok(magic)
}
