//! Payload decoding error types.

/// Decoding error conditions for response bodies and stream chunks.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DecodeErrorKind {
    /// The payload was not valid JSON for the expected schema
    Json(String),
    /// The `outputs` array was empty (the response is malformed)
    EmptyOutputs,
}

impl std::fmt::Display for DecodeErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecodeErrorKind::Json(msg) => write!(f, "Invalid response JSON: {}", msg),
            DecodeErrorKind::EmptyOutputs => {
                write!(f, "Response contained no outputs")
            }
        }
    }
}

/// Decoding error with source location tracking.
///
/// # Examples
///
/// ```
/// use tintoretto_error::{DecodeError, DecodeErrorKind};
///
/// let err = DecodeError::new(DecodeErrorKind::EmptyOutputs);
/// assert!(format!("{}", err).contains("no outputs"));
/// ```
#[derive(Debug, Clone)]
pub struct DecodeError {
    /// The kind of error that occurred
    pub kind: DecodeErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl DecodeError {
    /// Create a new DecodeError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: DecodeErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Decode Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for DecodeError {}
