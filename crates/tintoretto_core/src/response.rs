//! Mistral invocation response types.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tintoretto_error::{DecodeError, DecodeErrorKind};

/// One completion candidate in a Mistral response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, derive_builder::Builder)]
#[builder(setter(into), pattern = "owned")]
pub struct MistralOutput {
    /// Generated text
    text: String,
    /// Why generation ended (length limit, stop sequence, ...)
    stop_reason: String,
}

impl MistralOutput {
    /// Creates a builder for `MistralOutput`.
    pub fn builder() -> MistralOutputBuilder {
        MistralOutputBuilder::default()
    }
}

/// Mistral response body: an ordered sequence of completion candidates.
///
/// Only the first candidate is consumed; the service never returned more
/// than one in practice, and behavior for additional candidates is
/// deliberately "first candidate wins".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct MistralResponse {
    /// Completion candidates
    outputs: Vec<MistralOutput>,
}

impl MistralResponse {
    /// Creates a response holding exactly one output.
    pub fn single(text: impl Into<String>, stop_reason: impl Into<String>) -> Self {
        Self {
            outputs: vec![MistralOutput {
                text: text.into(),
                stop_reason: stop_reason.into(),
            }],
        }
    }

    /// Returns the first completion candidate.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] with [`DecodeErrorKind::EmptyOutputs`] if
    /// the response carries no candidates.
    pub fn primary(&self) -> Result<&MistralOutput, DecodeError> {
        self.outputs
            .first()
            .ok_or_else(|| DecodeError::new(DecodeErrorKind::EmptyOutputs))
    }
}

/// Decodes a response body or stream chunk into a [`MistralResponse`].
///
/// An empty `outputs` array is treated as malformed.
///
/// # Errors
///
/// Returns a [`DecodeError`] if the bytes are not valid JSON for the
/// response schema, or if `outputs` is empty.
pub fn decode_response(bytes: &[u8]) -> Result<MistralResponse, DecodeError> {
    let response: MistralResponse = serde_json::from_slice(bytes)
        .map_err(|e| DecodeError::new(DecodeErrorKind::Json(e.to_string())))?;

    if response.outputs.is_empty() {
        return Err(DecodeError::new(DecodeErrorKind::EmptyOutputs));
    }

    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_single_output_body() {
        let body = br#"{"outputs":[{"text":"hi","stop_reason":"stop"}]}"#;
        let response = decode_response(body).expect("valid body");

        let output = response.primary().expect("one output");
        assert_eq!(output.text(), "hi");
        assert_eq!(output.stop_reason(), "stop");
    }

    #[test]
    fn empty_outputs_is_malformed() {
        let body = br#"{"outputs":[]}"#;
        let err = decode_response(body).expect_err("empty outputs rejected");
        assert_eq!(err.kind, DecodeErrorKind::EmptyOutputs);
    }

    #[test]
    fn invalid_json_is_a_decode_error() {
        let err = decode_response(b"not json").expect_err("invalid JSON rejected");
        assert!(matches!(err.kind, DecodeErrorKind::Json(_)));
    }

    #[test]
    fn extra_candidates_first_wins() {
        let body =
            br#"{"outputs":[{"text":"a","stop_reason":"stop"},{"text":"b","stop_reason":"stop"}]}"#;
        let response = decode_response(body).expect("valid body");
        assert_eq!(response.primary().expect("one output").text(), "a");
    }
}
