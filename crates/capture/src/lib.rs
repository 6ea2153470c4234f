// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Standard-output capture for test assertions.
//!
//! This crate redirects a program's output into an in-memory buffer so tests
//! can assert on what was written. Programs under test write through an
//! [`OutputSink`] instead of `stdout` directly; a [`CaptureSession`] swaps the
//! sink's destination for a [`CaptureBuffer`] between `start()` and `stop()`
//! and exposes the captured text for inspection.

mod buffer;
mod session;
mod sink;

pub use buffer::CaptureBuffer;
pub use session::{CaptureError, CaptureSession};
pub use sink::OutputSink;
