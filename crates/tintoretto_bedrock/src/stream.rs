//! Stream events and chunk aggregation.

use futures_util::{Stream, StreamExt, pin_mut};
use tintoretto_core::{MistralResponse, decode_response};
use tintoretto_error::{ServiceError, SinkError, TintorettoError};
use tracing::{debug, warn};

/// One event from a Bedrock response stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamEvent {
    /// A partial-response frame carrying JSON bytes
    Chunk(Vec<u8>),
    /// An event-stream member this client does not recognize; reported and
    /// skipped during aggregation
    Unrecognized(String),
    /// The transport closed the stream
    StreamEnd,
}

/// Synchronous consumer of decoded text fragments.
///
/// The sink is invoked on the same logical thread of control as stream
/// draining, once per chunk, in arrival order. Sink work that blocks stalls
/// the drain. A sink failure aborts aggregation for the turn.
pub trait FragmentSink {
    /// Accepts one decoded text fragment for live display.
    ///
    /// # Errors
    ///
    /// Returns a [`SinkError`] if the fragment cannot be consumed; the
    /// error propagates out of [`aggregate`] as fatal.
    fn accept(&mut self, fragment: &str) -> Result<(), SinkError>;
}

impl<F> FragmentSink for F
where
    F: FnMut(&str) -> Result<(), SinkError>,
{
    fn accept(&mut self, fragment: &str) -> Result<(), SinkError> {
        self(fragment)
    }
}

/// Drains a response stream, forwarding each decoded fragment to `sink` as
/// it arrives and combining the fragments into one final response.
///
/// Each chunk is decoded as a partial [`MistralResponse`]; its first
/// output's text is forwarded and accumulated, and its stop reason
/// overwrites the running value (the final chunk's stop reason is
/// authoritative). Unrecognized members are logged and skipped. Any other
/// failure — transport, decode, or sink — is fatal and discards all text
/// accumulated for the turn.
///
/// # Errors
///
/// Returns a [`TintorettoError`] on a mid-stream transport failure, a
/// chunk that cannot be decoded (or has no outputs), or a sink failure.
pub async fn aggregate<S, K>(events: S, sink: &mut K) -> Result<MistralResponse, TintorettoError>
where
    S: Stream<Item = Result<StreamEvent, ServiceError>>,
    K: FragmentSink + ?Sized,
{
    pin_mut!(events);

    let mut text = String::new();
    let mut stop_reason = String::new();

    while let Some(event) = events.next().await {
        match event? {
            StreamEvent::Chunk(bytes) => {
                let partial = decode_response(&bytes)?;
                let output = partial.primary()?;
                sink.accept(output.text())?;
                text.push_str(output.text());
                stop_reason = output.stop_reason().clone();
            }
            StreamEvent::Unrecognized(tag) => {
                warn!(tag = %tag, "Skipping unrecognized stream member");
            }
            StreamEvent::StreamEnd => break,
        }
    }

    debug!(
        chars = text.len(),
        stop_reason = %stop_reason,
        "Stream aggregation complete"
    );

    Ok(MistralResponse::single(text, stop_reason))
}
