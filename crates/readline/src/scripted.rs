// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Scripted line reader for tests.

use crate::reader::{HistoryAck, LineReader};
use crate::script::InputScript;
use std::io::Write;

/// Line reader that delivers pre-programmed lines instead of blocking on a
/// terminal.
///
/// Each `read_line` call echoes what a real terminal session would show:
/// the prompt immediately followed by the delivered line and a newline, or
/// just the prompt and a newline once the script is exhausted. The echo goes
/// to whatever writer the reader was built over, so a test that routes it
/// through a capture sink sees the full transcript.
///
/// `record_history` records nothing; scripted lines have no history worth
/// keeping.
pub struct ScriptedReader<W: Write> {
    script: InputScript,
    echo: W,
    last: Option<String>,
}

impl<W: Write> ScriptedReader<W> {
    /// Create a reader with an empty script, echoing to `echo`.
    pub fn new(echo: W) -> Self {
        Self::with_script(InputScript::new(), echo)
    }

    /// Create a reader fed by an existing script handle.
    pub fn with_script(script: InputScript, echo: W) -> Self {
        Self {
            script,
            echo,
            last: None,
        }
    }

    /// Append a line to the script.
    pub fn enqueue(&self, line: impl Into<String>) {
        self.script.enqueue(line);
    }

    /// Append each line in order.
    pub fn enqueue_all<I, S>(&self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.script.enqueue_all(lines);
    }

    /// Get a handle to the shared script queue.
    pub fn script(&self) -> InputScript {
        self.script.clone()
    }

    /// Get the number of lines not yet delivered.
    pub fn pending(&self) -> usize {
        self.script.pending()
    }

    /// Check if every scripted line has been delivered.
    pub fn is_exhausted(&self) -> bool {
        self.script.is_exhausted()
    }

    /// Get the most recently delivered line, if any.
    ///
    /// Overwritten on each successful `read_line`; an exhausted read leaves
    /// it untouched.
    pub fn last_line(&self) -> Option<&str> {
        self.last.as_deref()
    }
}

impl<W: Write> LineReader for ScriptedReader<W> {
    fn read_line(&mut self, prompt: &str) -> Option<String> {
        match self.script.pop() {
            Some(line) => {
                // Echo failures never fail the read; the mock always succeeds.
                let _ = writeln!(self.echo, "{prompt}{line}");
                self.last = Some(line.clone());
                Some(line)
            }
            None => {
                let _ = writeln!(self.echo, "{prompt}");
                None
            }
        }
    }

    fn record_history(&mut self, _line: &str) -> HistoryAck {
        HistoryAck
    }
}

impl<W: Write> std::fmt::Debug for ScriptedReader<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScriptedReader")
            .field("script", &self.script)
            .field("last", &self.last)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "scripted_tests.rs"]
mod tests;
