//! Mistral invocation request types.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tintoretto_error::{DecodeError, DecodeErrorKind};

/// Mistral text-completion request.
///
/// The `prompt` is expected to already carry all instruction tags (see
/// [`Transcript`](crate::Transcript)). Optional sampling parameters are
/// omitted from the wire payload when unset; Bedrock treats an explicit
/// zero differently from an absent field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, derive_builder::Builder)]
#[builder(setter(into), pattern = "owned")]
pub struct MistralRequest {
    /// Fully tagged prompt text
    prompt: String,
    /// Maximum tokens to generate
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    /// Sampling temperature
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    /// Nucleus sampling probability mass
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f32>,
    /// Top-k sampling cutoff
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    top_k: Option<u32>,
    /// Stop sequences
    #[builder(default)]
    #[serde(rename = "stop", skip_serializing_if = "Option::is_none")]
    stop_sequences: Option<Vec<String>>,
}

impl MistralRequest {
    /// Creates a request carrying only a prompt, all sampling parameters unset.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            max_tokens: None,
            temperature: None,
            top_p: None,
            top_k: None,
            stop_sequences: None,
        }
    }

    /// Creates a builder for `MistralRequest`.
    pub fn builder() -> MistralRequestBuilder {
        MistralRequestBuilder::default()
    }

    /// Serializes the request to its JSON wire payload.
    ///
    /// Serialization is deterministic: the same request always produces
    /// byte-identical output.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] if JSON serialization fails.
    pub fn to_payload(&self) -> Result<Vec<u8>, DecodeError> {
        serde_json::to_vec(self).map_err(|e| DecodeError::new(DecodeErrorKind::Json(e.to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn omitted_parameters_absent_from_payload() {
        let request = MistralRequest::new("<s>[INST] Hello [/INST]");
        let payload = request.to_payload().expect("serializable request");

        assert_eq!(
            payload,
            br#"{"prompt":"<s>[INST] Hello [/INST]"}"#.to_vec()
        );
    }

    #[test]
    fn set_parameters_serialize_under_wire_names() {
        let request = MistralRequest::builder()
            .prompt("<s>[INST] Hi [/INST]")
            .max_tokens(Some(512))
            .temperature(Some(0.7))
            .top_p(Some(0.9))
            .top_k(Some(50))
            .stop_sequences(Some(vec!["</s>".to_string()]))
            .build()
            .expect("valid request");

        let value: serde_json::Value =
            serde_json::from_slice(&request.to_payload().expect("serializable request"))
                .expect("valid JSON");

        assert_eq!(value["max_tokens"], 512);
        assert_eq!(value["top_k"], 50);
        assert_eq!(value["stop"][0], "</s>");
        assert!(value.get("stop_sequences").is_none());
    }

    #[test]
    fn serialization_is_idempotent() {
        let request = MistralRequest::builder()
            .prompt("<s>[INST] Same [/INST]")
            .temperature(Some(0.2))
            .build()
            .expect("valid request");

        let first = request.to_payload().expect("serializable request");
        let second = request.to_payload().expect("serializable request");
        assert_eq!(first, second);
    }
}
