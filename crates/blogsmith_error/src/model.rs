//! Model artifact loading errors.

/// Reasons a model artifact could not be turned into a usable handle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ModelLoadErrorKind {
    /// No file exists at the configured path
    #[display("Model artifact not found: {}", _0)]
    NotFound(String),
    /// Path exists but is a directory or special file
    #[display("Model artifact is not a regular file: {}", _0)]
    NotAFile(String),
    /// File exists but could not be read
    #[display("Failed to read model artifact {}: {}", path, message)]
    Io {
        /// Artifact path
        path: String,
        /// Underlying I/O error message
        message: String,
    },
    /// Header does not match any known quantized checkpoint format
    #[display("Unrecognized model format in {} (magic {:?})", path, magic)]
    UnknownFormat {
        /// Artifact path
        path: String,
        /// First bytes of the file, lossily decoded
        magic: String,
    },
    /// Architecture family the runtime cannot serve
    #[display("Unsupported model type: {}", _0)]
    UnsupportedModelType(String),
}

/// Model load error with location tracking.
///
/// # Examples
///
/// ```
/// use blogsmith_error::{ModelLoadError, ModelLoadErrorKind};
///
/// let err = ModelLoadError::new(ModelLoadErrorKind::NotFound("models/missing.bin".to_string()));
/// assert!(format!("{}", err).contains("not found"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Model Load Error: {} at line {} in {}", kind, line, file)]
pub struct ModelLoadError {
    /// The kind of error that occurred
    pub kind: ModelLoadErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ModelLoadError {
    /// Create a new model load error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ModelLoadErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
