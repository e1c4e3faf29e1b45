//! Line-oriented operations. Lines are separated by `\n` only.

use crate::transform::remove::{dedupe_tokens, remove_line_breaks};
use crate::transform::reverse_tokens;

/// Sort lines by code point order.
#[must_use]
pub fn sort_lines(text: &str) -> String {
    let mut lines: Vec<&str> = text.split('\n').collect();
    lines.sort_unstable();
    lines.join("\n")
}

/// Prefix each line with `"{n}. "`, counting blank lines too.
#[must_use]
pub fn number_lines(text: &str) -> String {
    text.split('\n')
        .enumerate()
        .map(|(idx, line)| format!("{}. {line}", idx + 1))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Drop lines that are exactly empty. Whitespace-only lines are kept.
#[must_use]
pub fn remove_empty_lines(text: &str) -> String {
    text.split('\n')
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Drop later repeats of a line, keeping first occurrences in order.
#[must_use]
pub fn remove_duplicate_lines(text: &str, ignore_case: bool) -> String {
    dedupe_tokens(text, '\n', ignore_case)
}

/// Reverse the characters of each line, keeping line order.
#[must_use]
pub fn reverse_lines(text: &str) -> String {
    reverse_tokens(text, '\n')
}

/// Put `prefix` at the start of every line.
#[must_use]
pub fn prepend_lines(text: &str, prefix: &str) -> String {
    text.split('\n')
        .map(|line| format!("{prefix}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Put `suffix` at the end of every line.
#[must_use]
pub fn append_lines(text: &str, suffix: &str) -> String {
    text.split('\n')
        .map(|line| format!("{line}{suffix}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Break every line after each run of `n` characters.
///
/// Existing line breaks restart the count and are not counted themselves.
/// No break is added after the final run. `n == 0` returns the text as-is.
#[must_use]
pub fn line_break_by_character(text: &str, n: usize) -> String {
    if n == 0 {
        return text.to_string();
    }
    text.split('\n')
        .map(|line| {
            let chars: Vec<char> = line.chars().collect();
            chars
                .chunks(n)
                .map(|chunk| chunk.iter().collect::<String>())
                .collect::<Vec<_>>()
                .join("\n")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Put `n` space-separated words on each line.
///
/// Only non-empty tokens count as words. Spacing inside a line is kept; the
/// spaces between the last word of a line and the next word become a single
/// line break. `n == 0` returns the text as-is.
#[must_use]
pub fn line_break_by_words(text: &str, n: usize) -> String {
    if n == 0 {
        return text.to_string();
    }
    let mut out = String::with_capacity(text.len());
    // Separators seen since the previous word.
    let mut gap = String::new();
    let mut words_on_line = 0;

    for (idx, token) in text.split(' ').enumerate() {
        if idx > 0 {
            gap.push(' ');
        }
        if token.is_empty() {
            continue;
        }
        if words_on_line == n {
            out.push('\n');
            words_on_line = 0;
        } else {
            out.push_str(&gap);
        }
        gap.clear();
        out.push_str(token);
        words_on_line += 1;
    }
    out.push_str(&gap);
    out
}

/// Join all lines, then re-break at `max_chars_per_line`.
#[must_use]
pub fn squeeze(text: &str, max_chars_per_line: usize) -> String {
    line_break_by_character(&remove_line_breaks(text), max_chars_per_line)
}
