//! Error types for the Blogsmith blog generator.
//!
//! Every error records the source line and file where it was constructed,
//! and all of them fold into [`BlogsmithError`] through `From`.

mod config;
mod form;
mod inference;
mod model;
mod render;

pub use config::ConfigError;
pub use form::{FormError, FormErrorKind};
pub use inference::{InferenceError, InferenceErrorKind};
pub use model::{ModelLoadError, ModelLoadErrorKind};
pub use render::RenderError;

/// Crate-level error variants.
#[derive(Debug, derive_more::From)]
pub enum BlogsmithErrorKind {
    /// Model artifact could not be loaded
    ModelLoad(ModelLoadError),
    /// Inference runtime call failed
    Inference(InferenceError),
    /// Configuration error
    Config(ConfigError),
    /// Form input could not be coerced
    Form(FormError),
    /// Page template failed to render
    Render(RenderError),
}

impl std::fmt::Display for BlogsmithErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BlogsmithErrorKind::ModelLoad(e) => write!(f, "{}", e),
            BlogsmithErrorKind::Inference(e) => write!(f, "{}", e),
            BlogsmithErrorKind::Config(e) => write!(f, "{}", e),
            BlogsmithErrorKind::Form(e) => write!(f, "{}", e),
            BlogsmithErrorKind::Render(e) => write!(f, "{}", e),
        }
    }
}

/// Blogsmith error with kind discrimination.
///
/// # Examples
///
/// ```
/// use blogsmith_error::{BlogsmithError, BlogsmithErrorKind, ModelLoadError, ModelLoadErrorKind};
///
/// let err: BlogsmithError =
///     ModelLoadError::new(ModelLoadErrorKind::UnsupportedModelType("gpt2".to_string())).into();
/// assert!(matches!(err.kind(), BlogsmithErrorKind::ModelLoad(_)));
/// ```
#[derive(Debug)]
pub struct BlogsmithError(Box<BlogsmithErrorKind>);

impl BlogsmithError {
    /// Create a new error from a kind.
    pub fn new(kind: BlogsmithErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &BlogsmithErrorKind {
        &self.0
    }

    /// What went wrong, without the source location.
    ///
    /// ```
    /// use blogsmith_error::{BlogsmithError, ModelLoadError, ModelLoadErrorKind};
    ///
    /// let err: BlogsmithError =
    ///     ModelLoadError::new(ModelLoadErrorKind::NotFound("models/x.bin".to_string())).into();
    /// assert!(!err.summary().contains("at line"));
    /// assert!(err.to_string().contains("at line"));
    /// ```
    pub fn summary(&self) -> String {
        match self.kind() {
            BlogsmithErrorKind::ModelLoad(e) => e.kind.to_string(),
            BlogsmithErrorKind::Inference(e) => e.kind.to_string(),
            BlogsmithErrorKind::Config(e) => e.message.clone(),
            BlogsmithErrorKind::Form(e) => e.kind.to_string(),
            BlogsmithErrorKind::Render(e) => e.message.clone(),
        }
    }
}

impl std::fmt::Display for BlogsmithError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Blogsmith Error: {}", self.0)
    }
}

impl std::error::Error for BlogsmithError {}

impl<T> From<T> for BlogsmithError
where
    T: Into<BlogsmithErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Blogsmith operations.
pub type BlogsmithResult<T> = std::result::Result<T, BlogsmithError>;
