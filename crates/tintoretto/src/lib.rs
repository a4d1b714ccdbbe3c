//! Chat example programs for Mistral models hosted on AWS Bedrock.
//!
//! Three binaries share the components in this workspace:
//!
//! - `basic` — a single non-streaming request/response call
//! - `chat` — an interactive multi-turn loop using non-streaming calls
//! - `chat-stream` — an interactive multi-turn loop that streams the reply
//!
//! Conversation history lives only in process memory for the life of one
//! run; there is no persistence, retry, or recovery.

pub mod cli;
pub mod repl;

pub use cli::ChatArgs;
