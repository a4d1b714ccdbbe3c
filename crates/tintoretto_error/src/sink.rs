//! Fragment sink error types.

/// Error raised by a streaming fragment sink.
///
/// Sink failures abort aggregation; the accumulated text for the turn is
/// discarded.
#[derive(Debug, Clone)]
pub struct SinkError {
    /// Error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl SinkError {
    /// Create a new SinkError with the given message at the current location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for SinkError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Sink Error: {} at line {} in {}",
            self.message, self.line, self.file
        )
    }
}

impl std::error::Error for SinkError {}
