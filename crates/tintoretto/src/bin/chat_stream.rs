//! Interactive multi-turn chat with Mistral Large on Bedrock, streaming.
//!
//! Reads messages from the terminal in a loop and prints the reply fragment
//! by fragment as the response stream arrives. Terminate with an external
//! interrupt.

use clap::Parser;
use std::io::Write;
use tintoretto::{ChatArgs, repl};
use tintoretto_bedrock::{BedrockInvoker, aggregate};
use tintoretto_core::{MistralRequest, Transcript};
use tintoretto_error::SinkError;

const MODEL_ID_MISTRAL_LARGE: &str = "mistral.mistral-large-2402-v1:0";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    repl::init_tracing();
    let args = ChatArgs::parse();

    let invoker = BedrockInvoker::connect(MODEL_ID_MISTRAL_LARGE).await?;
    let mut transcript = Transcript::new();

    while let Some(input) = repl::read_message()? {
        transcript.push_user(&input);

        let request = MistralRequest::new(transcript.prompt());
        let payload = request.to_payload()?;
        if args.verbose {
            println!("[request payload] {}", String::from_utf8_lossy(&payload));
        }

        let events = invoker.invoke_streaming_payload(payload).await?;

        print!("[Assistant]:");
        std::io::stdout().flush()?;

        let mut sink = |fragment: &str| -> Result<(), SinkError> {
            let mut stdout = std::io::stdout();
            write!(stdout, "{}", fragment)
                .and_then(|_| stdout.flush())
                .map_err(|e| SinkError::new(e.to_string()))
        };

        let response = aggregate(events, &mut sink).await?;
        println!();

        if args.verbose {
            println!("[response] {:?}", response);
        }

        let reply = response.primary()?.text().clone();
        transcript.push_assistant(&reply);
    }

    Ok(())
}
