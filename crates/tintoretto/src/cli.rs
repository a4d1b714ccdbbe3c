//! Command-line arguments for the interactive chat binaries.

use clap::Parser;

/// Arguments shared by the interactive chat binaries.
///
/// The binaries take no positional arguments; interaction happens through
/// the read-eval loop.
#[derive(Parser, Debug)]
#[command(version)]
pub struct ChatArgs {
    /// Echo the raw request and response payloads exchanged with the model
    #[arg(long)]
    pub verbose: bool,
}
