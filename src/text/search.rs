//! Occurrence search over text.
//!
//! Every position reported here is a character (code point) index, so
//! results can be fed straight into [`TextReplacementManager`] and the rope
//! it owns.
//!
//! Matches never overlap: after a hit the scan resumes at the end of that
//! hit, so searching `"aba"` in `"ababab"` yields one range, not two.
//!
//! [`TextReplacementManager`]: crate::text::TextReplacementManager

use crate::text::TextRange;

/// Fold a character for case-insensitive comparison.
///
/// Only single code point lowercase mappings are applied. Characters whose
/// lowercase form expands (e.g. `'İ'`) compare as themselves, which keeps
/// match positions aligned with the unfolded text.
#[must_use]
#[inline]
pub fn fold_char(ch: char) -> char {
    let mut lower = ch.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(folded), None) => folded,
        _ => ch,
    }
}

/// Find every non-overlapping occurrence of `needle` in `haystack`.
///
/// An empty needle has no occurrences.
#[must_use]
pub fn find_ranges(haystack: &str, needle: &str, ignore_case: bool) -> Vec<TextRange> {
    if needle.is_empty() || haystack.is_empty() {
        return Vec::new();
    }
    if ignore_case {
        find_ranges_folded(haystack, needle)
    } else {
        find_ranges_exact(haystack, needle)
    }
}

/// Find the first occurrence of `needle` starting at character `from`.
///
/// Used to step through matches one at a time when replacing selectively.
#[must_use]
pub fn find_next(
    haystack: &str,
    needle: &str,
    from: usize,
    ignore_case: bool,
) -> Option<TextRange> {
    find_ranges(haystack, needle, ignore_case)
        .into_iter()
        .find(|range| range.start >= from)
}

/// Count non-overlapping occurrences of `needle`.
#[must_use]
pub fn count_matches(haystack: &str, needle: &str, ignore_case: bool) -> usize {
    find_ranges(haystack, needle, ignore_case).len()
}

/// Rebuild `text` with every range replaced by `replacement`.
///
/// Ranges must be sorted and non-overlapping, as returned by
/// [`find_ranges`]. Empty ranges and ranges past the end of the text are
/// ignored.
#[must_use]
pub fn replace_ranges(text: &str, ranges: &[TextRange], replacement: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut ranges = ranges.iter().filter(|range| !range.is_empty()).peekable();

    for (idx, ch) in text.chars().enumerate() {
        if let Some(range) = ranges.peek() {
            if idx == range.start {
                out.push_str(replacement);
            }
            if range.contains(idx) {
                if idx + 1 == range.end {
                    ranges.next();
                }
                continue;
            }
        }
        out.push(ch);
    }

    out
}

fn find_ranges_exact(haystack: &str, needle: &str) -> Vec<TextRange> {
    let needle_chars = needle.chars().count();
    let mut ranges = Vec::new();
    let mut byte_cursor = 0usize;
    let mut char_cursor = 0usize;

    // `match_indices` already scans left to right without overlap.
    for (byte_idx, _) in haystack.match_indices(needle) {
        char_cursor += haystack[byte_cursor..byte_idx].chars().count();
        byte_cursor = byte_idx;
        ranges.push(TextRange::new(char_cursor, char_cursor + needle_chars));
    }

    ranges
}

fn find_ranges_folded(haystack: &str, needle: &str) -> Vec<TextRange> {
    let hay: Vec<char> = haystack.chars().map(fold_char).collect();
    let pat: Vec<char> = needle.chars().map(fold_char).collect();
    let mut ranges = Vec::new();

    if pat.len() > hay.len() {
        return ranges;
    }

    let mut i = 0usize;
    while i + pat.len() <= hay.len() {
        if hay[i..i + pat.len()] == pat[..] {
            ranges.push(TextRange::new(i, i + pat.len()));
            i += pat.len();
        } else {
            i += 1;
        }
    }

    ranges
}
