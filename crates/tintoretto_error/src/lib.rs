//! Error types for the Tintoretto library.
//!
//! This crate provides the foundation error types used throughout the
//! Tintoretto workspace: configuration failures at startup, inference
//! service failures, payload decoding failures, and fragment sink failures
//! during streaming.

mod config;
mod decode;
mod service;
mod sink;

pub use config::ConfigError;
pub use decode::{DecodeError, DecodeErrorKind};
pub use service::{ServiceError, ServiceErrorKind};
pub use sink::SinkError;

/// Umbrella error for the Tintoretto workspace.
///
/// Every variant is fatal to the current turn; there is no retry, backoff,
/// or partial-result recovery.
#[derive(Debug, derive_more::Display, derive_more::From)]
pub enum TintorettoError {
    /// Startup configuration failure
    #[display("{}", _0)]
    Config(ConfigError),

    /// Inference service call failure
    #[display("{}", _0)]
    Service(ServiceError),

    /// Response body or stream chunk decoding failure
    #[display("{}", _0)]
    Decode(DecodeError),

    /// Streaming fragment sink failure
    #[display("{}", _0)]
    Sink(SinkError),
}

impl std::error::Error for TintorettoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TintorettoError::Config(e) => Some(e),
            TintorettoError::Service(e) => Some(e),
            TintorettoError::Decode(e) => Some(e),
            TintorettoError::Sink(e) => Some(e),
        }
    }
}
