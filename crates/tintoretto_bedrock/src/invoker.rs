//! Bedrock model invocation.

use crate::StreamEvent;
use aws_config::{BehaviorVersion, Region};
use aws_credential_types::provider::ProvideCredentials;
use aws_sdk_bedrockruntime::Client;
use aws_sdk_bedrockruntime::types::ResponseStream;
use aws_smithy_types::Blob;
use aws_smithy_types::error::display::DisplayErrorContext;
use futures_util::Stream;
use tintoretto_core::{MistralRequest, MistralResponse, decode_response};
use tintoretto_error::{ConfigError, ServiceError, ServiceErrorKind, TintorettoError};
use tracing::{debug, error, instrument};

/// Region used when `AWS_REGION` is not set.
const DEFAULT_REGION: &str = "us-east-1";

/// Content type for Bedrock invoke payloads.
const CONTENT_TYPE_JSON: &str = "application/json";

/// Invoker for Mistral models hosted on Bedrock.
///
/// Wraps a single shared `aws_sdk_bedrockruntime::Client`, constructed once
/// at startup and passed by reference thereafter. Credential and region
/// resolution happen in [`BedrockInvoker::connect`]; a failure there is
/// fatal before any interactive loop begins. No retries are attempted on
/// any operation.
#[derive(Debug, Clone)]
pub struct BedrockInvoker {
    client: Client,
    model_id: String,
}

impl BedrockInvoker {
    /// Connects to Bedrock, resolving region and credentials up front.
    ///
    /// The region comes from `AWS_REGION`, falling back to `us-east-1`.
    /// Credentials are resolved eagerly so a misconfigured environment
    /// fails here instead of on the first turn.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if no credentials provider is configured
    /// or credential resolution fails.
    #[instrument(skip_all)]
    pub async fn connect(model_id: impl Into<String>) -> Result<Self, ConfigError> {
        let model_id = model_id.into();
        let region =
            std::env::var("AWS_REGION").unwrap_or_else(|_| DEFAULT_REGION.to_string());

        let config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region.clone()))
            .load()
            .await;

        let provider = config
            .credentials_provider()
            .ok_or_else(|| ConfigError::new("No credentials provider configured"))?;
        provider.provide_credentials().await.map_err(|e| {
            ConfigError::new(format!(
                "Credential resolution failed: {}",
                DisplayErrorContext(&e)
            ))
        })?;

        debug!(region = %region, model = %model_id, "Created Bedrock client");

        Ok(Self {
            client: Client::new(&config),
            model_id,
        })
    }

    /// Returns the model identifier this invoker targets.
    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    /// Sends a serialized request payload and returns the raw response body.
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError`] if the InvokeModel call fails.
    #[instrument(skip(self, payload), fields(model = %self.model_id))]
    pub async fn invoke_payload(&self, payload: Vec<u8>) -> Result<Vec<u8>, ServiceError> {
        debug!(bytes = payload.len(), "Sending InvokeModel request");

        let output = self
            .client
            .invoke_model()
            .model_id(&self.model_id)
            .content_type(CONTENT_TYPE_JSON)
            .body(Blob::new(payload))
            .send()
            .await
            .map_err(|e| {
                let message = format!("{}", DisplayErrorContext(&e));
                error!(model = %self.model_id, error = %message, "InvokeModel failed");
                ServiceError::new(ServiceErrorKind::Invoke(message))
            })?;

        let body = output.body.into_inner();
        debug!(bytes = body.len(), "Received response body");
        Ok(body)
    }

    /// Sends a request and decodes the complete response.
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError`] if the call fails, or a
    /// [`DecodeError`](tintoretto_error::DecodeError) if the body cannot be
    /// parsed or carries no outputs.
    pub async fn invoke(
        &self,
        request: &MistralRequest,
    ) -> Result<MistralResponse, TintorettoError> {
        let payload = request.to_payload()?;
        let body = self.invoke_payload(payload).await?;
        Ok(decode_response(&body)?)
    }

    /// Sends a serialized request payload and returns the response stream as
    /// a sequence of [`StreamEvent`]s.
    ///
    /// The sequence is finite and single-pass: it terminates with
    /// [`StreamEvent::StreamEnd`] when the transport closes the stream, and
    /// cannot be restarted. A mid-stream receive failure surfaces as an
    /// error item and ends the sequence.
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError`] if the stream cannot be established.
    #[instrument(skip(self, payload), fields(model = %self.model_id))]
    pub async fn invoke_streaming_payload(
        &self,
        payload: Vec<u8>,
    ) -> Result<impl Stream<Item = Result<StreamEvent, ServiceError>>, ServiceError>
    {
        debug!(
            bytes = payload.len(),
            "Sending InvokeModelWithResponseStream request"
        );

        let output = self
            .client
            .invoke_model_with_response_stream()
            .model_id(&self.model_id)
            .content_type(CONTENT_TYPE_JSON)
            .body(Blob::new(payload))
            .send()
            .await
            .map_err(|e| {
                let message = format!("{}", DisplayErrorContext(&e));
                error!(model = %self.model_id, error = %message, "Stream establishment failed");
                ServiceError::new(ServiceErrorKind::StreamStart(message))
            })?;

        let mut receiver = output.body;

        Ok(async_stream::stream! {
            loop {
                match receiver.recv().await {
                    Ok(Some(ResponseStream::Chunk(part))) => {
                        let bytes = part.bytes.map(Blob::into_inner).unwrap_or_default();
                        yield Ok(StreamEvent::Chunk(bytes));
                    }
                    Ok(Some(other)) => {
                        yield Ok(StreamEvent::Unrecognized(format!("{other:?}")));
                    }
                    Ok(None) => {
                        yield Ok(StreamEvent::StreamEnd);
                        break;
                    }
                    Err(e) => {
                        yield Err(ServiceError::new(ServiceErrorKind::StreamReceive(
                            format!("{}", DisplayErrorContext(&e)),
                        )));
                        break;
                    }
                }
            }
        })
    }

    /// Sends a request and returns its response stream.
    ///
    /// # Errors
    ///
    /// Returns a serialization [`DecodeError`](tintoretto_error::DecodeError)
    /// or a [`ServiceError`] if the stream cannot be established.
    pub async fn invoke_streaming(
        &self,
        request: &MistralRequest,
    ) -> Result<impl Stream<Item = Result<StreamEvent, ServiceError>>, TintorettoError>
    {
        let payload = request.to_payload()?;
        Ok(self.invoke_streaming_payload(payload).await?)
    }
}
