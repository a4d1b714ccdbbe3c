//! Read-eval loop plumbing shared by the binaries.

use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

/// Installs the tracing subscriber, honoring `RUST_LOG` with an `info`
/// default.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

/// Prompts for and reads one message from the terminal, trimming
/// surrounding whitespace.
///
/// Returns `None` when standard input is exhausted. Empty input is passed
/// through; no validation happens at this layer.
///
/// # Errors
///
/// Returns an [`io::Error`] if the terminal cannot be read or the prompt
/// cannot be written.
pub fn read_message() -> io::Result<Option<String>> {
    print!("\nEnter your message: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
