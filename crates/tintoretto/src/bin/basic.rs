//! One-shot Mistral invocation on Bedrock.
//!
//! Sends a fixed prompt to Mistral 7B Instruct and prints the raw request
//! payload, the raw response payload, and the response text.

use tintoretto::repl;
use tintoretto_bedrock::BedrockInvoker;
use tintoretto_core::{MistralRequest, Transcript, decode_response};

const MODEL_ID_7B_INSTRUCT: &str = "mistral.mistral-7b-instruct-v0:2";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    repl::init_tracing();

    let invoker = BedrockInvoker::connect(MODEL_ID_7B_INSTRUCT).await?;

    let mut transcript = Transcript::new();
    transcript.push_user("Hello, what's your name?");

    let request = MistralRequest::new(transcript.prompt());
    let payload = request.to_payload()?;
    println!("request payload:\n{}", String::from_utf8_lossy(&payload));

    let body = invoker.invoke_payload(payload).await?;
    println!("response payload:\n{}", String::from_utf8_lossy(&body));

    let response = decode_response(&body)?;
    println!("response string:\n{}", response.primary()?.text());

    Ok(())
}
