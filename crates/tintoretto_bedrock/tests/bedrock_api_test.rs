//! Tests against the live Bedrock API.
//!
//! These tests require AWS credentials with Bedrock model access and spend
//! real tokens. Run with: cargo test -p tintoretto_bedrock --features api

use futures_util::StreamExt;
use tintoretto_bedrock::{BedrockInvoker, StreamEvent, aggregate};
use tintoretto_core::MistralRequest;
use tintoretto_error::SinkError;

const MODEL_ID_7B_INSTRUCT: &str = "mistral.mistral-7b-instruct-v0:2";
const MODEL_ID_LARGE: &str = "mistral.mistral-large-2402-v1:0";

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn invoke_returns_one_output() {
    dotenvy::dotenv().ok();

    let invoker = BedrockInvoker::connect(MODEL_ID_7B_INSTRUCT)
        .await
        .expect("credentials resolve");

    let request = MistralRequest::new("<s>[INST] Say 'test' and nothing else. [/INST]");
    let response = invoker.invoke(&request).await.expect("API call succeeds");

    let output = response.primary().expect("one output");
    assert!(!output.text().is_empty());
    println!("Response: {:?}", output);
}

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn streaming_invoke_yields_chunks_then_end() {
    dotenvy::dotenv().ok();

    let invoker = BedrockInvoker::connect(MODEL_ID_LARGE)
        .await
        .expect("credentials resolve");

    let request = MistralRequest::builder()
        .prompt("<s>[INST] Count to 3. [/INST]")
        .max_tokens(Some(64u32))
        .build()
        .expect("valid request");

    let events = invoker
        .invoke_streaming(&request)
        .await
        .expect("stream established");
    futures_util::pin_mut!(events);

    let mut saw_chunk = false;
    let mut saw_end = false;
    while let Some(event) = events.next().await {
        match event.expect("no transport failure") {
            StreamEvent::Chunk(_) => saw_chunk = true,
            StreamEvent::Unrecognized(tag) => println!("unrecognized member: {}", tag),
            StreamEvent::StreamEnd => saw_end = true,
        }
    }

    assert!(saw_chunk);
    assert!(saw_end);
}

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn streaming_aggregation_matches_fragments() {
    dotenvy::dotenv().ok();

    let invoker = BedrockInvoker::connect(MODEL_ID_LARGE)
        .await
        .expect("credentials resolve");

    let request = MistralRequest::builder()
        .prompt("<s>[INST] Say hello. [/INST]")
        .max_tokens(Some(64u32))
        .build()
        .expect("valid request");

    let events = invoker
        .invoke_streaming(&request)
        .await
        .expect("stream established");

    let mut combined = String::new();
    let mut sink = |fragment: &str| -> Result<(), SinkError> {
        combined.push_str(fragment);
        Ok(())
    };

    let response = aggregate(events, &mut sink).await.expect("aggregation succeeds");
    drop(sink);

    assert_eq!(response.primary().expect("one output").text(), &combined);
}
