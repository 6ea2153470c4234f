// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Swappable output destination.

use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

/// Handle to the currently-installed output destination.
///
/// Everything that would print to standard output writes through a sink
/// instead. Clones share the destination, so the test, the program under
/// test, and a capture session can all hold the same sink; swapping the
/// destination with [`install`](Self::install) takes effect for every clone
/// at once.
pub struct OutputSink {
    target: Arc<Mutex<Box<dyn Write + Send>>>,
}

impl OutputSink {
    /// Create a sink that forwards to the process's standard output.
    pub fn stdout() -> Self {
        Self::from_writer(io::stdout())
    }

    /// Create a sink that forwards to an arbitrary writer.
    pub fn from_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            target: Arc::new(Mutex::new(Box::new(writer))),
        }
    }

    /// Install a new destination, returning the one it replaces.
    ///
    /// The returned destination is the opaque handle to "whatever was
    /// installed before"; reinstalling it undoes the swap.
    pub fn install(&self, target: Box<dyn Write + Send>) -> Box<dyn Write + Send> {
        std::mem::replace(&mut *self.target.lock(), target)
    }
}

impl Clone for OutputSink {
    fn clone(&self) -> Self {
        Self {
            target: Arc::clone(&self.target),
        }
    }
}

impl Default for OutputSink {
    fn default() -> Self {
        Self::stdout()
    }
}

impl Write for OutputSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.target.lock().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.target.lock().flush()
    }
}

impl std::fmt::Debug for OutputSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutputSink").finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "sink_tests.rs"]
mod tests;
