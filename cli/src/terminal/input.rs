use std::io::BufRead;

use anyhow::Context;
use colored::*;

use crate::terminal::{colors, print};

/// Prompts with `question` and reads one line from `reader`.
///
/// The returned choice is trimmed. Reaching end of input before a line is
/// read is an error.
pub fn read_choice<R: BufRead>(reader: &mut R, question: &str) -> anyhow::Result<String> {
    print::print(&format!("{} {}", "?".color(colors::ACCENT).bold(), question));

    let mut line = String::new();
    let read = reader
        .read_line(&mut line)
        .context("failed to read choice from stdin")?;
    if read == 0 {
        anyhow::bail!("input ended before '{question}' was answered");
    }

    Ok(line.trim().to_string())
}
