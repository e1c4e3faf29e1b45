//! Character, word and line statistics.

use std::cmp::Reverse;
use std::collections::HashMap;

/// Counts gathered in a single pass over a text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextStatistics {
    /// Code points.
    pub characters: usize,
    pub letters: usize,
    pub digits: usize,
    /// The space character only; tabs and line breaks count as symbols.
    pub spaces: usize,
    /// Everything that is not a letter, digit or space.
    pub symbols: usize,
    /// Non-empty space-separated tokens.
    pub words: usize,
    /// `\n`-separated lines, zero for empty text.
    pub lines: usize,
}

impl TextStatistics {
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let mut stats = Self::default();
        for ch in text.chars() {
            stats.characters += 1;
            if ch.is_alphabetic() {
                stats.letters += 1;
            } else if ch.is_numeric() {
                stats.digits += 1;
            } else if ch == ' ' {
                stats.spaces += 1;
            } else {
                stats.symbols += 1;
            }
        }
        stats.words = word_count(text);
        stats.lines = if text.is_empty() {
            0
        } else {
            text.split('\n').count()
        };
        stats
    }
}

/// Number of non-empty space-separated tokens.
#[must_use]
pub fn word_count(text: &str) -> usize {
    text.split(' ').filter(|word| !word.is_empty()).count()
}

/// Occurrences of each word, most frequent first.
///
/// Words are compared exactly (case-sensitive). Words with equal counts keep
/// the order in which they first appeared.
#[must_use]
pub fn word_frequency(text: &str) -> Vec<(String, usize)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(&str, usize)> = Vec::new();

    for word in text.split(' ').filter(|word| !word.is_empty()) {
        if let Some(&slot) = index.get(word) {
            counts[slot].1 += 1;
        } else {
            index.insert(word, counts.len());
            counts.push((word, 1));
        }
    }

    // Stable, so ties stay in first-appearance order.
    counts.sort_by_key(|&(_, count)| Reverse(count));
    counts
        .into_iter()
        .map(|(word, count)| (word.to_string(), count))
        .collect()
}

/// The `n` most frequent words.
#[must_use]
pub fn top_words(text: &str, n: usize) -> Vec<(String, usize)> {
    let mut ranked = word_frequency(text);
    ranked.truncate(n);
    ranked
}
