// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared queue of canned input lines.

use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;

/// FIFO of pending input lines for a [`ScriptedReader`](crate::ScriptedReader).
///
/// Lines are appended at the back and delivered from the front, in insertion
/// order, each exactly once. Clones share the queue, so a test can keep a
/// handle and feed more lines after the reader has been handed to the
/// program under test.
pub struct InputScript {
    lines: Arc<Mutex<VecDeque<String>>>,
}

impl InputScript {
    /// Create an empty script.
    pub fn new() -> Self {
        Self {
            lines: Arc::new(Mutex::new(VecDeque::new())),
        }
    }

    /// Append a line to the back of the queue. Empty lines are allowed.
    pub fn enqueue(&self, line: impl Into<String>) {
        self.lines.lock().push_back(line.into());
    }

    /// Append each line in order.
    pub fn enqueue_all<I, S>(&self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut queue = self.lines.lock();
        for line in lines {
            queue.push_back(line.into());
        }
    }

    /// Take the front line, if any.
    pub(crate) fn pop(&self) -> Option<String> {
        self.lines.lock().pop_front()
    }

    /// Get the number of lines not yet delivered.
    pub fn pending(&self) -> usize {
        self.lines.lock().len()
    }

    /// Check if every enqueued line has been delivered.
    pub fn is_exhausted(&self) -> bool {
        self.lines.lock().is_empty()
    }
}

impl Clone for InputScript {
    fn clone(&self) -> Self {
        Self {
            lines: Arc::clone(&self.lines),
        }
    }
}

impl Default for InputScript {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for InputScript {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InputScript")
            .field("pending", &self.pending())
            .finish()
    }
}

#[cfg(test)]
#[path = "script_tests.rs"]
mod tests;
