//! Core data types for the Tintoretto Bedrock chat examples.
//!
//! This crate owns the request/response payload shapes for Mistral models
//! hosted on Bedrock, and the conversation transcript that frames multi-turn
//! dialogue in the model's instruction-tag convention.

mod request;
mod response;
mod transcript;

pub use request::{MistralRequest, MistralRequestBuilder};
pub use response::{MistralOutput, MistralOutputBuilder, MistralResponse, decode_response};
pub use transcript::Transcript;
