//! Fuzz target for find/replace with undo.
//!
//! Drives a TextReplacementManager with arbitrary text and edit sequences
//! and checks that history stays consistent.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use quicktools::{TextRange, TextReplacementManager};

#[derive(Arbitrary, Debug)]
enum Edit {
    ReplaceOne { start: usize, end: usize, text: String },
    ReplaceAll { old: String, new: String, ignore_case: bool },
    Update(String),
    Undo,
    Redo,
}

#[derive(Arbitrary, Debug)]
struct Input {
    text: String,
    edits: Vec<Edit>,
}

fuzz_target!(|input: Input| {
    let mut manager = TextReplacementManager::new(input.text.clone());

    for edit in input.edits.iter().take(64) {
        match edit {
            Edit::ReplaceOne { start, end, text } => {
                // Out-of-range requests must fail cleanly
                let _ = manager.replace_one(TextRange::new(*start, *end), text);
            }
            Edit::ReplaceAll {
                old,
                new,
                ignore_case,
            } => {
                let len = manager.len_chars();
                for range in manager.find(old, *ignore_case) {
                    assert!(range.fits(len));
                }
                manager.replace_all(old, new, *ignore_case);
            }
            Edit::Update(text) => {
                manager.update_text(text);
            }
            Edit::Undo => {
                manager.undo();
            }
            Edit::Redo => {
                manager.redo();
            }
        }
        assert!(manager.action_pointer() <= manager.actions().len());
    }

    while manager.can_undo() {
        manager.undo();
    }
    assert_eq!(manager.text(), input.text);
});
