// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The line-reader seam.

/// Acknowledgement from recording a line to history.
///
/// The token carries no information and callers are free to discard it; it
/// exists so `record_history` has one signature everywhere instead of
/// returning a status code on some platforms and nothing on others.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HistoryAck;

/// Interactive line-reading primitive.
///
/// `read_line` displays `prompt` and produces the next line of input, or
/// `None` when input is exhausted. `None` means "no more input" and is
/// distinct from `Some("")`, an empty line the user actually entered.
/// Callers conventionally hand each delivered line to `record_history`.
pub trait LineReader {
    /// Display `prompt` and read the next line, without its terminator.
    fn read_line(&mut self, prompt: &str) -> Option<String>;

    /// Record a delivered line to the reader's history mechanism.
    fn record_history(&mut self, line: &str) -> HistoryAck;
}
