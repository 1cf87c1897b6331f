//! Interactive read loop.
//!
//! Reads one command per line and writes each reply followed by a newline.
//! The loop ends on `exit`/`close` or when the input is exhausted. A line
//! that is not valid UTF-8 is answered as an invalid command.

use crate::commands::CommandHandler;
use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

pub const WELCOME: &str = "Welcome to the assistant bot!";
pub const PROMPT: &str = "Enter a command: ";

/// Run the command loop over `input`, writing replies to `output`.
///
/// # Arguments
/// * `handler` - Owns the address book the commands act on
/// * `input` - Line source, usually stdin
/// * `output` - Reply sink, usually stdout
pub async fn run_repl<R, W>(handler: &mut CommandHandler, input: R, mut output: W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut input = input;
    let mut line = Vec::new();

    output.write_all(format!("{}\n", WELCOME).as_bytes()).await?;

    loop {
        output.write_all(PROMPT.as_bytes()).await?;
        output.flush().await?;

        line.clear();
        if input.read_until(b'\n', &mut line).await? == 0 {
            tracing::info!("Input closed");
            output.write_all(b"\n").await?;
            break;
        }

        let Some(reply) = handler.handle_bytes(strip_line_ending(&line)) else {
            continue;
        };

        output
            .write_all(format!("{}\n", reply.text()).as_bytes())
            .await?;

        if reply.is_exit() {
            tracing::info!("Exit requested");
            break;
        }
    }

    output.flush().await?;
    Ok(())
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
