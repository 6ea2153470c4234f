// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Production line reader over real input.

use crate::reader::{HistoryAck, LineReader};
use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

/// Line reader backed by a real input source.
///
/// Writes the prompt (no newline) to the prompt writer, flushes, and reads
/// one line from the input source. End of input or a read error yields
/// `None`; otherwise the trailing `\n` or `\r\n` is stripped and the line is
/// returned. Delivered lines handed to `record_history` accumulate in an
/// in-memory history.
pub struct StdinReader<R: BufRead, W: Write> {
    input: R,
    prompt_out: W,
    last: Option<String>,
    history: Vec<String>,
}

impl StdinReader<BufReader<Stdin>, Stdout> {
    /// Create a reader over the process's stdin and stdout.
    pub fn new() -> Self {
        Self::with_io(BufReader::new(io::stdin()), io::stdout())
    }
}

impl Default for StdinReader<BufReader<Stdin>, Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: BufRead, W: Write> StdinReader<R, W> {
    /// Create a reader over an arbitrary input source and prompt writer.
    pub fn with_io(input: R, prompt_out: W) -> Self {
        Self {
            input,
            prompt_out,
            last: None,
            history: Vec::new(),
        }
    }

    /// Get the most recently delivered line, if any.
    pub fn last_line(&self) -> Option<&str> {
        self.last.as_deref()
    }

    /// Get the lines recorded to history, oldest first.
    pub fn history(&self) -> &[String] {
        &self.history
    }
}

impl<R: BufRead, W: Write> LineReader for StdinReader<R, W> {
    fn read_line(&mut self, prompt: &str) -> Option<String> {
        let _ = write!(self.prompt_out, "{prompt}");
        let _ = self.prompt_out.flush();

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => {
                if line.ends_with('\n') {
                    line.pop();
                    if line.ends_with('\r') {
                        line.pop();
                    }
                }
                self.last = Some(line.clone());
                Some(line)
            }
        }
    }

    fn record_history(&mut self, line: &str) -> HistoryAck {
        self.history.push(line.to_string());
        HistoryAck
    }
}

#[cfg(test)]
#[path = "stdin_tests.rs"]
mod tests;
