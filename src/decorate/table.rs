//! Code point tables for the Mathematical Alphanumeric Symbols block.
//!
//! Each styled alphabet is laid out contiguously from a base code point, one
//! run per character class. Where Unicode had already encoded a glyph in the
//! Letterlike Symbols block before the math block existed, the math block
//! leaves a hole and the glyph lives elsewhere. Those holes are the
//! `exceptions` of a table.

use bitflags::bitflags;

bitflags! {
    /// Character classes a styled alphabet rewrites.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
    pub struct CharScope: u8 {
        /// ASCII digits `0-9`.
        const DIGIT = 0x01;
        /// ASCII capitals `A-Z`.
        const UPPER = 0x02;
        /// ASCII small letters `a-z`.
        const LOWER = 0x04;
        const LETTERS = Self::UPPER.bits() | Self::LOWER.bits();
        const ALPHANUMERIC = Self::LETTERS.bits() | Self::DIGIT.bits();
    }
}

impl CharScope {
    /// Class of an ASCII letter or digit; empty for anything else.
    #[must_use]
    pub const fn of(ch: char) -> Self {
        match ch {
            '0'..='9' => Self::DIGIT,
            'A'..='Z' => Self::UPPER,
            'a'..='z' => Self::LOWER,
            _ => Self::empty(),
        }
    }
}

/// A styled alphabet: base code point per class plus exceptions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AlphabetTable {
    /// Classes this alphabet rewrites.
    pub scope: CharScope,
    /// Code point of styled `A`.
    pub upper: u32,
    /// Code point of styled `a`.
    pub lower: u32,
    /// Code point of styled `0`, if the alphabet has digits.
    pub digit: Option<u32>,
    /// Characters whose styled glyph lives outside the contiguous run.
    pub exceptions: &'static [(char, char)],
}

impl AlphabetTable {
    /// Styled form of `ch`, or `None` if `ch` is out of scope.
    #[must_use]
    pub fn map(&self, ch: char) -> Option<char> {
        let class = CharScope::of(ch);
        if class.is_empty() || !self.scope.contains(class) {
            return None;
        }
        if let Some(&(_, styled)) = self.exceptions.iter().find(|(plain, _)| *plain == ch) {
            return Some(styled);
        }
        let (base, first) = self.run(class)?;
        char::from_u32(base + (u32::from(ch) - u32::from(first)))
    }

    /// Plain ASCII form of a styled character from this alphabet.
    #[must_use]
    pub fn unmap(&self, ch: char) -> Option<char> {
        if let Some(&(plain, _)) = self.exceptions.iter().find(|(_, styled)| *styled == ch) {
            return Some(plain);
        }
        let cp = u32::from(ch);
        for class in [CharScope::UPPER, CharScope::LOWER, CharScope::DIGIT] {
            if !self.scope.contains(class) {
                continue;
            }
            let Some((base, first)) = self.run(class) else {
                continue;
            };
            let span = if class == CharScope::DIGIT { 10 } else { 26 };
            if (base..base + span).contains(&cp) {
                return char::from_u32(u32::from(first) + (cp - base));
            }
        }
        None
    }

    fn run(&self, class: CharScope) -> Option<(u32, char)> {
        if class == CharScope::UPPER {
            Some((self.upper, 'A'))
        } else if class == CharScope::LOWER {
            Some((self.lower, 'a'))
        } else if class == CharScope::DIGIT {
            self.digit.map(|base| (base, '0'))
        } else {
            None
        }
    }
}

pub const BOLD_SERIF: AlphabetTable = AlphabetTable {
    scope: CharScope::ALPHANUMERIC,
    upper: 0x1D400,
    lower: 0x1D41A,
    digit: Some(0x1D7CE),
    exceptions: &[],
};

pub const ITALIC_SERIF: AlphabetTable = AlphabetTable {
    scope: CharScope::LETTERS,
    upper: 0x1D434,
    lower: 0x1D44E,
    digit: None,
    // PLANCK CONSTANT
    exceptions: &[('h', '\u{210E}')],
};

pub const BOLD_ITALIC_SERIF: AlphabetTable = AlphabetTable {
    scope: CharScope::LETTERS,
    upper: 0x1D468,
    lower: 0x1D482,
    digit: None,
    exceptions: &[],
};

pub const BOLD_SANS: AlphabetTable = AlphabetTable {
    scope: CharScope::ALPHANUMERIC,
    upper: 0x1D5D4,
    lower: 0x1D5EE,
    digit: Some(0x1D7EC),
    exceptions: &[],
};

pub const ITALIC_SANS: AlphabetTable = AlphabetTable {
    scope: CharScope::LETTERS,
    upper: 0x1D608,
    lower: 0x1D622,
    digit: None,
    exceptions: &[],
};

pub const BOLD_ITALIC_SANS: AlphabetTable = AlphabetTable {
    scope: CharScope::LETTERS,
    upper: 0x1D63C,
    lower: 0x1D656,
    digit: None,
    exceptions: &[],
};

pub const SCRIPT: AlphabetTable = AlphabetTable {
    scope: CharScope::LETTERS,
    upper: 0x1D49C,
    lower: 0x1D4B6,
    digit: None,
    exceptions: &[
        ('B', '\u{212C}'),
        ('E', '\u{2130}'),
        ('F', '\u{2131}'),
        ('H', '\u{210B}'),
        ('I', '\u{2110}'),
        ('L', '\u{2112}'),
        ('M', '\u{2133}'),
        ('R', '\u{211B}'),
        ('e', '\u{212F}'),
        ('g', '\u{210A}'),
        ('o', '\u{2134}'),
    ],
};

/// Every styled alphabet, for reverse lookups.
pub const ALPHABETS: [&AlphabetTable; 7] = [
    &BOLD_SERIF,
    &ITALIC_SERIF,
    &BOLD_ITALIC_SERIF,
    &BOLD_SANS,
    &ITALIC_SANS,
    &BOLD_ITALIC_SANS,
    &SCRIPT,
];
