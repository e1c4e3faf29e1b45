//! Find/replace buffer with linear undo/redo.
//!
//! [`TextReplacementManager`] owns one text buffer and records every
//! mutation as a full before/after snapshot. History is linear: recording a
//! new action after one or more undos discards the redo branch.
//!
//! # Examples
//!
//! ```
//! use quicktools::text::{TextRange, TextReplacementManager};
//!
//! let mut manager = TextReplacementManager::new("one two one");
//! manager.replace_all("one", "1", false);
//! assert_eq!(manager.text(), "1 two 1");
//!
//! manager.replace_one(TextRange::new(2, 5), "2").unwrap();
//! assert_eq!(manager.text(), "1 2 1");
//!
//! manager.undo();
//! manager.undo();
//! assert_eq!(manager.text(), "one two one");
//! assert!(!manager.can_undo());
//! ```

use ropey::Rope;

use crate::error::{Error, Result};
use crate::event::{LogLevel, emit_log};
use crate::text::TextRange;
use crate::text::search::{find_next, find_ranges, replace_ranges};

/// One recorded buffer transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextReplacementAction {
    old_text: String,
    new_text: String,
}

impl TextReplacementAction {
    #[must_use]
    pub fn new(old_text: impl Into<String>, new_text: impl Into<String>) -> Self {
        Self {
            old_text: old_text.into(),
            new_text: new_text.into(),
        }
    }

    /// Buffer contents before the action.
    #[must_use]
    pub fn old_text(&self) -> &str {
        &self.old_text
    }

    /// Buffer contents after the action.
    #[must_use]
    pub fn new_text(&self) -> &str {
        &self.new_text
    }
}

/// Ordered action log with a cursor at the next redo position.
#[derive(Clone, Debug, Default)]
struct ActionLog {
    actions: Vec<TextReplacementAction>,
    /// Number of applied actions, counted from the start of the log.
    pointer: usize,
}

impl ActionLog {
    /// Append an action, truncating any redo branch first.
    ///
    /// Returns how many actions were discarded.
    fn push(&mut self, action: TextReplacementAction) -> usize {
        let discarded = self.actions.len() - self.pointer;
        self.actions.truncate(self.pointer);
        self.actions.push(action);
        self.pointer = self.actions.len();
        discarded
    }

    fn step_back(&mut self) -> Option<&TextReplacementAction> {
        if self.pointer == 0 {
            return None;
        }
        self.pointer -= 1;
        self.actions.get(self.pointer)
    }

    fn step_forward(&mut self) -> Option<&TextReplacementAction> {
        let action = self.actions.get(self.pointer)?;
        self.pointer += 1;
        Some(action)
    }

    fn can_undo(&self) -> bool {
        self.pointer > 0
    }

    fn can_redo(&self) -> bool {
        self.pointer < self.actions.len()
    }

    fn clear(&mut self) {
        self.actions.clear();
        self.pointer = 0;
    }
}

/// Text buffer with find/replace operations and undo/redo.
///
/// The manager is single-writer: every mutation goes through `&mut self`.
/// Positions are character (code point) indices, matching the ranges
/// produced by [`find`](Self::find).
#[derive(Clone, Debug, Default)]
pub struct TextReplacementManager {
    initial: String,
    buffer: Rope,
    log: ActionLog,
}

impl TextReplacementManager {
    /// Create a manager whose initial and current text is `text`.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        let initial = text.into();
        Self {
            buffer: Rope::from_str(&initial),
            initial,
            log: ActionLog::default(),
        }
    }

    /// Current buffer contents.
    #[must_use]
    pub fn text(&self) -> String {
        self.buffer.to_string()
    }

    /// The text the manager was created with.
    #[must_use]
    pub fn initial_text(&self) -> &str {
        &self.initial
    }

    /// Number of characters in the current buffer.
    #[must_use]
    pub fn len_chars(&self) -> usize {
        self.buffer.len_chars()
    }

    /// Recorded actions, including any that are currently undone.
    #[must_use]
    pub fn actions(&self) -> &[TextReplacementAction] {
        &self.log.actions
    }

    /// Number of actions currently applied.
    #[must_use]
    pub fn action_pointer(&self) -> usize {
        self.log.pointer
    }

    /// Discard all history and restore the initial text.
    pub fn reset(&mut self) -> String {
        self.log.clear();
        self.buffer = Rope::from_str(&self.initial);
        self.text()
    }

    /// Find all occurrences of `needle` in the current buffer.
    #[must_use]
    pub fn find(&self, needle: &str, ignore_case: bool) -> Vec<TextRange> {
        find_ranges(&self.text(), needle, ignore_case)
    }

    /// Find the first occurrence of `needle` at or after character `from`.
    #[must_use]
    pub fn find_next(&self, needle: &str, from: usize, ignore_case: bool) -> Option<TextRange> {
        find_next(&self.text(), needle, from, ignore_case)
    }

    /// Replace the characters in `range` with `new_text`.
    ///
    /// Fails without touching the buffer if `range` does not fit.
    pub fn replace_one(&mut self, range: TextRange, new_text: &str) -> Result<String> {
        let len = self.buffer.len_chars();
        if !range.fits(len) {
            emit_log(
                LogLevel::Warn,
                &format!(
                    "rejected replace of {}..{} in text of {len} characters",
                    range.start, range.end
                ),
            );
            return Err(Error::InvalidRange {
                start: range.start,
                end: range.end,
                len,
            });
        }

        let before = self.text();
        self.buffer.remove(range.as_range());
        self.buffer.insert(range.start, new_text);
        let after = self.text();
        self.record(before, after.clone());
        Ok(after)
    }

    /// Replace every occurrence of `old` with `new`.
    ///
    /// Recorded as a single action even when nothing matched. An empty
    /// `old` leaves the buffer and history untouched.
    pub fn replace_all(&mut self, old: &str, new: &str, ignore_case: bool) -> String {
        let before = self.text();
        if old.is_empty() {
            return before;
        }

        let ranges = find_ranges(&before, old, ignore_case);
        let after = replace_ranges(&before, &ranges, new);
        self.buffer = Rope::from_str(&after);
        self.record(before, after.clone());
        after
    }

    /// Record an external edit of the whole buffer.
    pub fn update_text(&mut self, new_text: &str) -> String {
        let before = self.text();
        self.buffer = Rope::from_str(new_text);
        self.record(before, new_text.to_string());
        self.text()
    }

    /// Step back one action. A no-op when nothing is applied.
    pub fn undo(&mut self) -> String {
        if let Some(action) = self.log.step_back() {
            self.buffer = Rope::from_str(action.old_text());
        }
        self.text()
    }

    /// Re-apply the next undone action. A no-op at the end of history.
    pub fn redo(&mut self) -> String {
        if let Some(action) = self.log.step_forward() {
            self.buffer = Rope::from_str(action.new_text());
        }
        self.text()
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.log.can_undo()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.log.can_redo()
    }

    fn record(&mut self, old_text: String, new_text: String) {
        let discarded = self
            .log
            .push(TextReplacementAction::new(old_text, new_text));
        if discarded > 0 {
            emit_log(
                LogLevel::Debug,
                &format!("discarded {discarded} undone action(s)"),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_manager_has_no_history() {
        let manager = TextReplacementManager::new("hello");
        assert_eq!(manager.text(), "hello");
        assert_eq!(manager.initial_text(), "hello");
        assert!(!manager.can_undo());
        assert!(!manager.can_redo());
        assert_eq!(manager.action_pointer(), 0);
    }

    #[test]
    fn test_replace_one() {
        let mut manager = TextReplacementManager::new("Hello World");
        let text = manager.replace_one(TextRange::new(6, 11), "Rust").unwrap();
        assert_eq!(text, "Hello Rust");
        assert_eq!(manager.actions().len(), 1);
        assert_eq!(manager.actions()[0].old_text(), "Hello World");
        assert_eq!(manager.actions()[0].new_text(), "Hello Rust");
    }

    #[test]
    fn test_replace_one_uses_char_positions() {
        let mut manager = TextReplacementManager::new("naïve café");
        let range = manager.find("café", false)[0];
        assert_eq!(range, TextRange::new(6, 10));
        manager.replace_one(range, "bar").unwrap();
        assert_eq!(manager.text(), "naïve bar");
    }

    #[test]
    fn test_replace_one_empty_range_inserts() {
        let mut manager = TextReplacementManager::new("ac");
        manager.replace_one(TextRange::new(1, 1), "b").unwrap();
        assert_eq!(manager.text(), "abc");
    }

    #[test]
    fn test_replace_one_out_of_bounds() {
        let mut manager = TextReplacementManager::new("short");
        let err = manager
            .replace_one(TextRange::new(3, 10), "x")
            .unwrap_err();
        assert_eq!(
            err,
            Error::InvalidRange {
                start: 3,
                end: 10,
                len: 5
            }
        );
        assert_eq!(manager.text(), "short");
        assert!(!manager.can_undo());
    }

    #[test]
    fn test_replace_one_inverted_range() {
        let mut manager = TextReplacementManager::new("short");
        let result = manager.replace_one(TextRange { start: 4, end: 2 }, "x");
        assert!(result.is_err());
        assert_eq!(manager.text(), "short");
    }

    #[test]
    fn test_replace_all() {
        let mut manager = TextReplacementManager::new("cat Cat CAT");
        assert_eq!(manager.replace_all("cat", "dog", false), "dog Cat CAT");
        manager.undo();
        assert_eq!(manager.replace_all("cat", "dog", true), "dog dog dog");
        assert_eq!(manager.actions().len(), 1);
    }

    #[test]
    fn test_replace_all_without_match_still_records() {
        let mut manager = TextReplacementManager::new("abc");
        assert_eq!(manager.replace_all("zzz", "y", false), "abc");
        assert!(manager.can_undo());
    }

    #[test]
    fn test_replace_all_empty_needle_is_noop() {
        let mut manager = TextReplacementManager::new("abc");
        assert_eq!(manager.replace_all("", "-", false), "abc");
        assert!(!manager.can_undo());
        assert!(manager.actions().is_empty());
    }

    #[test]
    fn test_undo_redo() {
        let mut manager = TextReplacementManager::new("a");
        manager.update_text("ab");
        manager.update_text("abc");

        assert_eq!(manager.undo(), "ab");
        assert_eq!(manager.undo(), "a");
        assert!(!manager.can_undo());
        assert_eq!(manager.undo(), "a");

        assert_eq!(manager.redo(), "ab");
        assert_eq!(manager.redo(), "abc");
        assert!(!manager.can_redo());
        assert_eq!(manager.redo(), "abc");
    }

    #[test]
    fn test_new_action_discards_redo_branch() {
        let mut manager = TextReplacementManager::new("one");
        manager.update_text("two");
        manager.update_text("three");
        manager.undo();
        manager.undo();
        assert!(manager.can_redo());

        manager.update_text("four");
        assert!(!manager.can_redo());
        assert_eq!(manager.redo(), "four");
        assert_eq!(manager.actions().len(), 1);
        assert_eq!(manager.undo(), "one");
    }

    #[test]
    fn test_reset() {
        let mut manager = TextReplacementManager::new("start");
        manager.update_text("middle");
        manager.update_text("end");
        manager.undo();

        assert_eq!(manager.reset(), "start");
        assert!(!manager.can_undo());
        assert!(!manager.can_redo());
        assert!(manager.actions().is_empty());
    }

    #[test]
    fn test_find_next_on_current_text() {
        let mut manager = TextReplacementManager::new("x y x y");
        let first = manager.find_next("y", 0, false).unwrap();
        manager.replace_one(first, "z").unwrap();
        let second = manager.find_next("y", first.end, false).unwrap();
        assert_eq!(second, TextRange::new(6, 7));
        manager.replace_one(second, "z").unwrap();
        assert_eq!(manager.text(), "x z x z");
    }
}
