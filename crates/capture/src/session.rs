// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Capture session lifecycle and text search over the captured output.

use crate::buffer::CaptureBuffer;
use crate::sink::OutputSink;
use std::io::Write;
use thiserror::Error;

/// Errors reported for mispaired capture calls.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum CaptureError {
    /// `start()` was called while a capture was already running.
    #[error("capture already in progress; stop it before starting another")]
    AlreadyCapturing,

    /// `stop()` was called with no capture running.
    #[error("no capture in progress; nothing to restore")]
    NotCapturing,
}

/// Capture of everything written to an [`OutputSink`].
///
/// Between `start()` and `stop()` the sink's destination is the session's
/// in-memory buffer; `stop()` reinstalls whatever destination was in place
/// when `start()` ran. `buffer()` and `occurrence_count()` inspect the text
/// accumulated since the last `clear()`.
///
/// Sessions on different sinks are independent; a single session refuses to
/// nest. Dropping a session that is still capturing reinstalls the saved
/// destination.
pub struct CaptureSession {
    sink: OutputSink,
    buffer: CaptureBuffer,
    saved: Option<Box<dyn Write + Send>>,
}

impl CaptureSession {
    /// Create a session over `sink`. Nothing is redirected until `start()`.
    pub fn new(sink: OutputSink) -> Self {
        Self {
            sink,
            buffer: CaptureBuffer::new(),
            saved: None,
        }
    }

    /// Empty the captured text.
    ///
    /// May be called at any time, including mid-capture; `buffer()` reports
    /// what was written since this call.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Redirect the sink into the session's buffer.
    ///
    /// The destination installed at this moment is saved and reinstalled by
    /// `stop()`. Starting twice without an intervening stop is an error.
    pub fn start(&mut self) -> Result<(), CaptureError> {
        if self.saved.is_some() {
            return Err(CaptureError::AlreadyCapturing);
        }
        let previous = self.sink.install(Box::new(self.buffer.clone()));
        self.saved = Some(previous);
        Ok(())
    }

    /// Restore the destination that was installed when `start()` ran.
    pub fn stop(&mut self) -> Result<(), CaptureError> {
        let saved = self.saved.take().ok_or(CaptureError::NotCapturing)?;
        self.sink.install(saved);
        Ok(())
    }

    /// Check if the sink is currently redirected into this session.
    pub fn is_capturing(&self) -> bool {
        self.saved.is_some()
    }

    /// Get the text captured since the last `clear()` as a snapshot.
    ///
    /// Later writes are not reflected in the returned value; call again for
    /// fresh content.
    pub fn buffer(&self) -> String {
        self.buffer.contents()
    }

    /// Count non-overlapping occurrences of `partial` in the captured text.
    ///
    /// The scan runs left to right and resumes immediately after the end of
    /// each match, so `"aa"` occurs twice in `"aaaa"`. An empty `partial`
    /// returns 0 rather than matching at every position.
    pub fn occurrence_count(&self, partial: &str) -> usize {
        count_occurrences(&self.buffer.contents(), partial)
    }
}

impl Drop for CaptureSession {
    fn drop(&mut self) {
        if let Some(saved) = self.saved.take() {
            self.sink.install(saved);
        }
    }
}

/// Non-overlapping left-to-right substring count.
fn count_occurrences(text: &str, partial: &str) -> usize {
    // A zero-length needle would match without advancing the scan.
    if partial.is_empty() {
        return 0;
    }
    let mut count = 0;
    let mut pos = 0;
    while let Some(found) = text[pos..].find(partial) {
        count += 1;
        pos += found + partial.len();
    }
    count
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
