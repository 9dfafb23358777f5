//! Inference runtime error types.

/// Failures talking to the local inference runtime.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum InferenceErrorKind {
    /// Request never completed (connection refused, reset, DNS)
    #[display("HTTP error: {}", _0)]
    Http(String),
    /// Runtime answered with a non-success status
    #[display("Runtime error (status {}): {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body
        message: String,
    },
    /// Response body was not a completions payload
    #[display("Response parsing failed: {}", _0)]
    ResponseParsing(String),
    /// Completions payload held no choices
    #[display("Runtime returned no completion choices")]
    EmptyResponse,
}

/// Inference error with location tracking.
///
/// # Examples
///
/// ```
/// use blogsmith_error::{InferenceError, InferenceErrorKind};
///
/// let err = InferenceError::new(InferenceErrorKind::Api {
///     status: 503,
///     message: "model still loading".to_string(),
/// });
/// assert!(format!("{}", err).contains("503"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Inference Error: {} at line {} in {}", kind, line, file)]
pub struct InferenceError {
    /// The kind of error that occurred
    pub kind: InferenceErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl InferenceError {
    /// Create a new inference error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: InferenceErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
