// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Scripted replacement for an interactive line reader.
//!
//! Programs that prompt a user for lines of input are written against the
//! [`LineReader`] trait. In production that is a [`StdinReader`]; in tests it
//! is a [`ScriptedReader`] fed canned lines through an [`InputScript`], so
//! the program runs to completion without a terminal and without blocking.

mod reader;
mod script;
mod scripted;
mod stdin;

pub use reader::{HistoryAck, LineReader};
pub use script::InputScript;
pub use scripted::ScriptedReader;
pub use stdin::StdinReader;
