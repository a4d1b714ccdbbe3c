//! Interactive multi-turn chat with Mixtral on Bedrock, non-streaming.
//!
//! Reads messages from the terminal in a loop, sends the growing transcript
//! on every turn, and prints the complete reply. Terminate with an external
//! interrupt.

use clap::Parser;
use tintoretto::{ChatArgs, repl};
use tintoretto_bedrock::BedrockInvoker;
use tintoretto_core::{MistralRequest, Transcript, decode_response};

const MODEL_ID_8X7B_INSTRUCT: &str = "mistral.mixtral-8x7b-instruct-v0:1";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    repl::init_tracing();
    let args = ChatArgs::parse();

    let invoker = BedrockInvoker::connect(MODEL_ID_8X7B_INSTRUCT).await?;
    let mut transcript = Transcript::new();

    while let Some(input) = repl::read_message()? {
        transcript.push_user(&input);

        let request = MistralRequest::new(transcript.prompt());
        let payload = request.to_payload()?;
        if args.verbose {
            println!("[request payload] {}", String::from_utf8_lossy(&payload));
        }

        let body = invoker.invoke_payload(payload).await?;
        if args.verbose {
            println!("[response payload] {}", String::from_utf8_lossy(&body));
        }

        let response = decode_response(&body)?;
        let reply = response.primary()?.text().clone();
        println!("[Assistant]: {}", reply);

        transcript.push_assistant(&reply);
    }

    Ok(())
}
