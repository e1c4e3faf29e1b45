//! Stateless text transformations.
//!
//! Every operation takes the input text (plus parameters) and returns a new
//! string. Nothing here holds state between calls, so operations compose
//! freely. [`Transform`] names each operation as a value so callers can
//! store a choice or chain several.
//!
//! # Examples
//!
//! ```
//! use quicktools::transform::{CaseMode, Transform, WrapPreset, apply_all};
//!
//! let out = apply_all(
//!     "hello world",
//!     &[
//!         Transform::ChangeCase(CaseMode::Title),
//!         Transform::PresetWrap(WrapPreset::Brackets),
//!     ],
//! );
//! assert_eq!(out, "[Hello World]");
//! ```

mod case;
mod lines;
mod remove;
mod wrap;

pub use case::{CaseMode, change_case, change_case_with};
pub use lines::{
    append_lines, line_break_by_character, line_break_by_words, number_lines, prepend_lines,
    remove_duplicate_lines, remove_empty_lines, reverse_lines, sort_lines, squeeze,
};
pub use remove::{
    RemoveMode, remove_duplicate_words, remove_line_breaks, remove_text, remove_white_spaces,
};
pub use wrap::{WrapPreset, custom_wrap, preset_wrap};

use unicode_segmentation::UnicodeSegmentation;

use crate::decorate::{Decoration, decorate};

/// `n` copies of `text` back to back.
#[must_use]
pub fn repeat_text(text: &str, n: usize) -> String {
    text.repeat(n)
}

#[must_use]
pub fn add_prefix(text: &str, prefix: &str) -> String {
    format!("{prefix}{text}")
}

#[must_use]
pub fn add_suffix(text: &str, suffix: &str) -> String {
    format!("{text}{suffix}")
}

/// Reverse the text by user-perceived character, so combining marks and
/// emoji sequences stay intact.
#[must_use]
pub fn reverse_text(text: &str) -> String {
    text.graphemes(true).rev().collect()
}

/// Reverse the characters of each space-separated word, keeping word order.
#[must_use]
pub fn reverse_words(text: &str) -> String {
    reverse_tokens(text, ' ')
}

pub(crate) fn reverse_tokens(text: &str, sep: char) -> String {
    let joined = text
        .split(sep)
        .map(reverse_text)
        .collect::<Vec<_>>()
        .join(&sep.to_string());
    joined.trim_end_matches(sep).to_string()
}

/// A single transformation with its parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Transform {
    ChangeCase(CaseMode),
    CustomWrap(String),
    PresetWrap(WrapPreset),
    SortLines,
    Repeat(usize),
    Remove { target: String, mode: RemoveMode },
    RemoveWhiteSpaces,
    RemoveLineBreaks,
    RemoveEmptyLines,
    RemoveDuplicateWords { ignore_case: bool },
    RemoveDuplicateLines { ignore_case: bool },
    AddPrefix(String),
    AddSuffix(String),
    NumberLines,
    Reverse,
    ReverseWords,
    ReverseLines,
    LineBreakByCharacter(usize),
    LineBreakByWords(usize),
    Squeeze(usize),
    PrependLines(String),
    AppendLines(String),
    Decorate(Decoration),
}

impl Transform {
    /// Run this transformation on `text`.
    #[must_use]
    pub fn apply(&self, text: &str) -> String {
        match self {
            Self::ChangeCase(mode) => change_case(text, *mode),
            Self::CustomWrap(wrap) => custom_wrap(text, wrap),
            Self::PresetWrap(preset) => preset.wrap(text),
            Self::SortLines => sort_lines(text),
            Self::Repeat(n) => repeat_text(text, *n),
            Self::Remove { target, mode } => remove_text(text, target, *mode),
            Self::RemoveWhiteSpaces => remove_white_spaces(text),
            Self::RemoveLineBreaks => remove_line_breaks(text),
            Self::RemoveEmptyLines => remove_empty_lines(text),
            Self::RemoveDuplicateWords { ignore_case } => {
                remove_duplicate_words(text, *ignore_case)
            }
            Self::RemoveDuplicateLines { ignore_case } => {
                remove_duplicate_lines(text, *ignore_case)
            }
            Self::AddPrefix(prefix) => add_prefix(text, prefix),
            Self::AddSuffix(suffix) => add_suffix(text, suffix),
            Self::NumberLines => number_lines(text),
            Self::Reverse => reverse_text(text),
            Self::ReverseWords => reverse_words(text),
            Self::ReverseLines => reverse_lines(text),
            Self::LineBreakByCharacter(n) => line_break_by_character(text, *n),
            Self::LineBreakByWords(n) => line_break_by_words(text, *n),
            Self::Squeeze(n) => squeeze(text, *n),
            Self::PrependLines(prefix) => prepend_lines(text, prefix),
            Self::AppendLines(suffix) => append_lines(text, suffix),
            Self::Decorate(style) => decorate(text, *style),
        }
    }
}

/// Apply `transforms` left to right.
#[must_use]
pub fn apply_all(text: &str, transforms: &[Transform]) -> String {
    transforms
        .iter()
        .fold(text.to_string(), |acc, transform| transform.apply(&acc))
}
