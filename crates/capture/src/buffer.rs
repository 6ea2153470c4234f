// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared in-memory accumulation target.

use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

/// Growable buffer that can stand in as an output destination.
///
/// Clones share the underlying storage: the clone installed in an output
/// sink and the clone held by a capture session observe the same bytes.
pub struct CaptureBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl CaptureBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self {
            bytes: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get the accumulated text as a snapshot.
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than dropped.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.bytes.lock()).into_owned()
    }

    /// Discard everything accumulated so far.
    pub fn clear(&self) {
        self.bytes.lock().clear();
    }

    /// Get the number of bytes accumulated.
    pub fn len(&self) -> usize {
        self.bytes.lock().len()
    }

    /// Check if nothing has been written since creation or the last clear.
    pub fn is_empty(&self) -> bool {
        self.bytes.lock().is_empty()
    }
}

impl Clone for CaptureBuffer {
    fn clone(&self) -> Self {
        Self {
            bytes: Arc::clone(&self.bytes),
        }
    }
}

impl Default for CaptureBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Write for CaptureBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
#[path = "buffer_tests.rs"]
mod tests;
