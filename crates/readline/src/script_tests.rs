// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use proptest::prelude::*;

#[test]
fn test_new_is_exhausted() {
    let script = InputScript::new();
    assert!(script.is_exhausted());
    assert_eq!(script.pending(), 0);
    assert_eq!(script.pop(), None);
}

#[test]
fn test_fifo_order() {
    let script = InputScript::new();
    script.enqueue("first");
    script.enqueue("second");
    script.enqueue("third");

    assert_eq!(script.pop(), Some("first".to_string()));
    assert_eq!(script.pop(), Some("second".to_string()));
    assert_eq!(script.pop(), Some("third".to_string()));
    assert_eq!(script.pop(), None);
}

#[test]
fn test_enqueue_all() {
    let script = InputScript::new();
    script.enqueue_all(["a", "b", "c"]);
    assert_eq!(script.pending(), 3);
    assert_eq!(script.pop(), Some("a".to_string()));
}

#[test]
fn test_enqueue_after_partial_consumption_appends() {
    let script = InputScript::new();
    script.enqueue("one");
    script.enqueue("two");

    assert_eq!(script.pop(), Some("one".to_string()));
    script.enqueue("three");

    assert_eq!(script.pop(), Some("two".to_string()));
    assert_eq!(script.pop(), Some("three".to_string()));
}

#[test]
fn test_empty_line_is_a_real_entry() {
    let script = InputScript::new();
    script.enqueue("");
    assert_eq!(script.pending(), 1);
    assert_eq!(script.pop(), Some(String::new()));
}

#[test]
fn test_clones_share_the_queue() {
    let script = InputScript::new();
    let feeder = script.clone();

    feeder.enqueue("shared");
    assert_eq!(script.pending(), 1);
    assert_eq!(script.pop(), Some("shared".to_string()));
    assert!(feeder.is_exhausted());
}

#[test]
fn test_thread_safety() {
    let script = InputScript::new();
    let feeder = script.clone();

    let handle = std::thread::spawn(move || {
        for i in 0..100 {
            feeder.enqueue(format!("line {i}"));
        }
    });

    handle.join().unwrap();
    assert_eq!(script.pending(), 100);
}

// Property-based tests
proptest! {
    #[test]
    fn delivery_order_equals_insertion_order(lines in prop::collection::vec(".*", 0..32)) {
        let script = InputScript::new();
        script.enqueue_all(lines.clone());

        for line in &lines {
            let popped = script.pop();
            prop_assert_eq!(popped.as_deref(), Some(line.as_str()));
        }
        prop_assert!(script.is_exhausted());
        prop_assert_eq!(script.pop(), None);
    }
}
