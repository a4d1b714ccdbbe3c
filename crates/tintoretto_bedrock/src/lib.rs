//! Bedrock integration for the Tintoretto chat examples.
//!
//! Wraps the AWS Bedrock runtime client behind [`BedrockInvoker`] and turns
//! its response stream into a plain sequence of [`StreamEvent`]s that
//! [`aggregate`] drains into a single combined response.

mod invoker;
mod stream;

pub use invoker::BedrockInvoker;
pub use stream::{FragmentSink, StreamEvent, aggregate};
