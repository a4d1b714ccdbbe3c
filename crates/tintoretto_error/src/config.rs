//! Startup configuration error types.

/// Client configuration error with source location.
///
/// Raised when the shared Bedrock client cannot be built at startup —
/// credentials that fail to resolve, or no provider configured at all.
/// Always fatal: the process exits before any interactive loop begins.
#[derive(Debug, Clone)]
pub struct ConfigError {
    /// What failed while building the client
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new ConfigError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use tintoretto_error::ConfigError;
    ///
    /// let err = ConfigError::new("No credentials provider configured");
    /// assert!(format!("{}", err).contains("credentials provider"));
    /// ```
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

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Bedrock client configuration failed: {} at line {} in {}",
            self.message, self.line, self.file
        )
    }
}

impl std::error::Error for ConfigError {}
