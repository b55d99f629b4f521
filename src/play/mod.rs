//! Console game loops.
//!
//! These loops are the orchestration layer: they read the human's move,
//! ask the engines for the computer's reply and print the result. They
//! take any reader/writer pair so tests can script a whole session.

pub mod maze;
pub mod tictactoe;

use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// Prints `prompt` and reads one trimmed line, or `None` at end of input.
fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<Option<String>> {
    write!(output, "{prompt}")?;
    output.flush()?;
    let mut line = String::new();
    let read = input.read_line(&mut line).context("Failed to read input")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Sleeps for the configured pacing delay.
fn pace(delay_ms: u64) {
    if delay_ms > 0 {
        std::thread::sleep(std::time::Duration::from_millis(delay_ms));
    }
}
