//! Inference service error types.

/// Service-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ServiceErrorKind {
    /// The InvokeModel call itself failed
    Invoke(String),
    /// The streaming call failed to establish the response stream
    StreamStart(String),
    /// Receiving the next frame from an established stream failed
    StreamReceive(String),
}

impl std::fmt::Display for ServiceErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceErrorKind::Invoke(msg) => write!(f, "Model invocation failed: {}", msg),
            ServiceErrorKind::StreamStart(msg) => {
                write!(f, "Failed to establish response stream: {}", msg)
            }
            ServiceErrorKind::StreamReceive(msg) => {
                write!(f, "Stream receive failed: {}", msg)
            }
        }
    }
}

/// Inference service error with source location tracking.
///
/// Any variant is fatal to the current turn; no retry is attempted.
///
/// # Examples
///
/// ```
/// use tintoretto_error::{ServiceError, ServiceErrorKind};
///
/// let err = ServiceError::new(ServiceErrorKind::Invoke("timeout".to_string()));
/// assert!(format!("{}", err).contains("invocation failed"));
/// ```
#[derive(Debug, Clone)]
pub struct ServiceError {
    /// The kind of error that occurred
    pub kind: ServiceErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ServiceError {
    /// Create a new ServiceError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ServiceErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Service Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for ServiceError {}
