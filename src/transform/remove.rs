//! Removal operations.

use std::collections::HashSet;

use unicode_normalization::UnicodeNormalization;

/// Which occurrences [`remove_text`] deletes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RemoveMode {
    First,
    Last,
    #[default]
    All,
}

impl RemoveMode {
    /// `0` is first, `1` is last, anything else removes all.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        match index {
            0 => Self::First,
            1 => Self::Last,
            _ => Self::All,
        }
    }
}

/// Remove occurrences of `target` from `text`.
///
/// [`RemoveMode::Last`] removes the rightmost occurrence found scanning
/// from the end. An empty target leaves the text unchanged.
#[must_use]
pub fn remove_text(text: &str, target: &str, mode: RemoveMode) -> String {
    if target.is_empty() {
        return text.to_string();
    }
    match mode {
        RemoveMode::First => text.replacen(target, "", 1),
        RemoveMode::Last => match text.rfind(target) {
            Some(idx) => {
                let mut out = String::with_capacity(text.len() - target.len());
                out.push_str(&text[..idx]);
                out.push_str(&text[idx + target.len()..]);
                out
            }
            None => text.to_string(),
        },
        RemoveMode::All => text.replace(target, ""),
    }
}

/// Remove every space character. Other whitespace is kept.
#[must_use]
pub fn remove_white_spaces(text: &str) -> String {
    text.replace(' ', "")
}

/// Remove every `\n`.
#[must_use]
pub fn remove_line_breaks(text: &str) -> String {
    text.replace('\n', "")
}

/// Drop later repeats of space-separated words, keeping first occurrences
/// in order.
#[must_use]
pub fn remove_duplicate_words(text: &str, ignore_case: bool) -> String {
    dedupe_tokens(text, ' ', ignore_case)
}

/// Keep the first occurrence of each `sep`-separated token, then trim.
pub(crate) fn dedupe_tokens(text: &str, sep: char, ignore_case: bool) -> String {
    let mut seen = HashSet::new();
    let kept: Vec<&str> = text
        .split(sep)
        .filter(|token| seen.insert(token_key(token, ignore_case)))
        .collect();
    kept.join(&sep.to_string()).trim().to_string()
}

fn token_key(token: &str, ignore_case: bool) -> String {
    if ignore_case {
        token.nfc().collect::<String>().to_lowercase()
    } else {
        token.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_first_last_all() {
        let text = "a-b-c-d";
        assert_eq!(remove_text(text, "-", RemoveMode::First), "ab-c-d");
        assert_eq!(remove_text(text, "-", RemoveMode::Last), "a-b-cd");
        assert_eq!(remove_text(text, "-", RemoveMode::All), "abcd");
    }

    #[test]
    fn test_remove_last_multichar() {
        assert_eq!(
            remove_text("abc xabc abc!", "abc", RemoveMode::Last),
            "abc xabc !"
        );
        // Overlapping candidates: the rightmost start wins.
        assert_eq!(remove_text("aaa", "aa", RemoveMode::Last), "a");
    }

    #[test]
    fn test_remove_missing_target() {
        assert_eq!(remove_text("hello", "z", RemoveMode::Last), "hello");
        assert_eq!(remove_text("hello", "", RemoveMode::All), "hello");
    }

    #[test]
    fn test_remove_mode_from_index() {
        assert_eq!(RemoveMode::from_index(0), RemoveMode::First);
        assert_eq!(RemoveMode::from_index(1), RemoveMode::Last);
        assert_eq!(RemoveMode::from_index(2), RemoveMode::All);
        assert_eq!(RemoveMode::from_index(99), RemoveMode::All);
    }

    #[test]
    fn test_remove_white_spaces_only_spaces() {
        assert_eq!(remove_white_spaces("a b\tc\nd"), "ab\tc\nd");
    }

    #[test]
    fn test_remove_line_breaks() {
        assert_eq!(remove_line_breaks("a\nb\n\nc"), "abc");
    }

    #[test]
    fn test_remove_duplicate_words() {
        assert_eq!(
            remove_duplicate_words("the cat the dog The cat", false),
            "the cat dog The"
        );
        assert_eq!(
            remove_duplicate_words("the cat the dog The cat", true),
            "the cat dog"
        );
    }

    #[test]
    fn test_remove_duplicate_words_normalizes_when_ignoring_case() {
        assert_eq!(remove_duplicate_words("café CAFE\u{301}", true), "café");
        assert_eq!(
            remove_duplicate_words("café cafe\u{301}", false),
            "café cafe\u{301}"
        );
    }
}
