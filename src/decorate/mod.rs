//! "Fake font" decoration by code point remapping.
//!
//! Styled text is produced by swapping ASCII letters and digits for their
//! counterparts in the Mathematical Alphanumeric Symbols block, or by
//! following every character with a combining stroke overlay. The output is
//! plain Unicode text that renders styled anywhere the fonts cover it.
//!
//! # Examples
//!
//! ```
//! use quicktools::decorate::{Decoration, decorate, undecorate};
//!
//! let bold = decorate("abc123!", Decoration::BoldSerif);
//! assert_eq!(bold, "𝐚𝐛𝐜𝟏𝟐𝟑!");
//! assert_eq!(undecorate(&bold), "abc123!");
//! ```

mod table;

pub use table::{AlphabetTable, CharScope};

use table::{
    ALPHABETS, BOLD_ITALIC_SANS, BOLD_ITALIC_SERIF, BOLD_SANS, BOLD_SERIF, ITALIC_SANS,
    ITALIC_SERIF, SCRIPT,
};

/// COMBINING SHORT STROKE OVERLAY
const SHORT_STROKE: char = '\u{0335}';
/// COMBINING LONG STROKE OVERLAY
const LONG_STROKE: char = '\u{0336}';

/// Decoration style.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Decoration {
    BoldSerif,
    ItalicSerif,
    BoldItalicSerif,
    BoldSans,
    ItalicSans,
    BoldItalicSans,
    Cursive,
    ShortStrikethrough,
    LongStrikethrough,
}

enum Rendering {
    Alphabet(&'static AlphabetTable),
    Overlay(char),
}

impl Decoration {
    /// Every style, in menu order.
    pub const ALL: [Self; 9] = [
        Self::BoldSerif,
        Self::ItalicSerif,
        Self::BoldItalicSerif,
        Self::BoldSans,
        Self::ItalicSans,
        Self::BoldItalicSans,
        Self::Cursive,
        Self::ShortStrikethrough,
        Self::LongStrikethrough,
    ];

    /// Style at menu position `index`.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Human-readable style name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::BoldSerif => "bold (serif)",
            Self::ItalicSerif => "italic (serif)",
            Self::BoldItalicSerif => "bold italic (serif)",
            Self::BoldSans => "bold (sans)",
            Self::ItalicSans => "italic (sans)",
            Self::BoldItalicSans => "bold italic (sans)",
            Self::Cursive => "cursive",
            Self::ShortStrikethrough => "short strikethrough",
            Self::LongStrikethrough => "long strikethrough",
        }
    }

    /// The alphabet this style draws from, if it remaps characters.
    #[must_use]
    pub const fn alphabet(self) -> Option<&'static AlphabetTable> {
        match self.rendering() {
            Rendering::Alphabet(table) => Some(table),
            Rendering::Overlay(_) => None,
        }
    }

    const fn rendering(self) -> Rendering {
        match self {
            Self::BoldSerif => Rendering::Alphabet(&BOLD_SERIF),
            Self::ItalicSerif => Rendering::Alphabet(&ITALIC_SERIF),
            Self::BoldItalicSerif => Rendering::Alphabet(&BOLD_ITALIC_SERIF),
            Self::BoldSans => Rendering::Alphabet(&BOLD_SANS),
            Self::ItalicSans => Rendering::Alphabet(&ITALIC_SANS),
            Self::BoldItalicSans => Rendering::Alphabet(&BOLD_ITALIC_SANS),
            Self::Cursive => Rendering::Alphabet(&SCRIPT),
            Self::ShortStrikethrough => Rendering::Overlay(SHORT_STROKE),
            Self::LongStrikethrough => Rendering::Overlay(LONG_STROKE),
        }
    }
}

/// Apply `style` to every in-scope character of `text`.
///
/// Characters outside the style's scope pass through unchanged.
#[must_use]
pub fn decorate(text: &str, style: Decoration) -> String {
    match style.rendering() {
        Rendering::Alphabet(table) => text
            .chars()
            .map(|ch| table.map(ch).unwrap_or(ch))
            .collect(),
        Rendering::Overlay(mark) => {
            let mut out = String::with_capacity(text.len() * 3);
            for ch in text.chars() {
                out.push(ch);
                out.push(mark);
            }
            out
        }
    }
}

/// Map styled characters of any style back to ASCII and drop stroke
/// overlays.
#[must_use]
pub fn undecorate(text: &str) -> String {
    text.chars()
        .filter(|&ch| ch != SHORT_STROKE && ch != LONG_STROKE)
        .map(|ch| {
            ALPHABETS
                .iter()
                .find_map(|table| table.unmap(ch))
                .unwrap_or(ch)
        })
        .collect()
}

#[must_use]
pub fn bold_serif(text: &str) -> String {
    decorate(text, Decoration::BoldSerif)
}

#[must_use]
pub fn italic_serif(text: &str) -> String {
    decorate(text, Decoration::ItalicSerif)
}

#[must_use]
pub fn bold_italic_serif(text: &str) -> String {
    decorate(text, Decoration::BoldItalicSerif)
}

#[must_use]
pub fn bold_sans(text: &str) -> String {
    decorate(text, Decoration::BoldSans)
}

#[must_use]
pub fn italic_sans(text: &str) -> String {
    decorate(text, Decoration::ItalicSans)
}

#[must_use]
pub fn bold_italic_sans(text: &str) -> String {
    decorate(text, Decoration::BoldItalicSans)
}

#[must_use]
pub fn cursive(text: &str) -> String {
    decorate(text, Decoration::Cursive)
}

#[must_use]
pub fn short_strikethrough(text: &str) -> String {
    decorate(text, Decoration::ShortStrikethrough)
}

#[must_use]
pub fn long_strikethrough(text: &str) -> String {
    decorate(text, Decoration::LongStrikethrough)
}
