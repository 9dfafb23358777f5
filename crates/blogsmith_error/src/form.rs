//! Form input errors.

/// Form input that could not be coerced into a request field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum FormErrorKind {
    /// Style label outside the fixed option set
    #[display("Unknown blog style: {}", _0)]
    UnknownStyle(String),
}

/// Form error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Form Error: {} at line {} in {}", kind, line, file)]
pub struct FormError {
    /// The kind of error that occurred
    pub kind: FormErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl FormError {
    /// Create a new form error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: FormErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
