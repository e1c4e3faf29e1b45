//! Surround text with delimiters.

/// Built-in delimiter pairs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WrapPreset {
    SingleQuotes,
    DoubleQuotes,
    Parentheses,
    Braces,
    Brackets,
}

impl WrapPreset {
    pub const ALL: [Self; 5] = [
        Self::SingleQuotes,
        Self::DoubleQuotes,
        Self::Parentheses,
        Self::Braces,
        Self::Brackets,
    ];

    /// Preset at menu position `index`.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Opening and closing delimiter.
    #[must_use]
    pub const fn delimiters(self) -> (char, char) {
        match self {
            Self::SingleQuotes => ('\'', '\''),
            Self::DoubleQuotes => ('"', '"'),
            Self::Parentheses => ('(', ')'),
            Self::Braces => ('{', '}'),
            Self::Brackets => ('[', ']'),
        }
    }

    #[must_use]
    pub fn wrap(self, text: &str) -> String {
        let (open, close) = self.delimiters();
        let mut out = String::with_capacity(text.len() + 2);
        out.push(open);
        out.push_str(text);
        out.push(close);
        out
    }
}

/// Wrap `text` in the preset at `index`; unknown indices leave it unchanged.
#[must_use]
pub fn preset_wrap(text: &str, index: usize) -> String {
    WrapPreset::from_index(index).map_or_else(|| text.to_string(), |preset| preset.wrap(text))
}

/// Wrap `text` in a caller-supplied delimiter.
///
/// A wrap of odd length goes on both sides as-is. A wrap of even length is
/// split at its midpoint: the first half opens and the second half closes,
/// so `"<>"` produces `<text>`.
#[must_use]
pub fn custom_wrap(text: &str, wrap: &str) -> String {
    let chars: Vec<char> = wrap.chars().collect();
    if chars.len() % 2 == 1 {
        return format!("{wrap}{text}{wrap}");
    }
    let (first, second) = chars.split_at(chars.len() / 2);
    let mut out = String::with_capacity(text.len() + wrap.len());
    out.extend(first);
    out.push_str(text);
    out.extend(second);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_wrap_parity() {
        assert_eq!(custom_wrap("X", "ab"), "aXb");
        assert_eq!(custom_wrap("X", "abc"), "abcXabc");
        assert_eq!(custom_wrap("X", "<<>>"), "<<X>>");
    }

    #[test]
    fn test_custom_wrap_empty() {
        assert_eq!(custom_wrap("X", ""), "X");
    }

    #[test]
    fn test_custom_wrap_multibyte_midpoint() {
        assert_eq!(custom_wrap("x", "«»"), "«x»");
        assert_eq!(custom_wrap("x", "★"), "★x★");
    }

    #[test]
    fn test_preset_wrap() {
        assert_eq!(preset_wrap("text", 0), "'text'");
        assert_eq!(preset_wrap("text", 1), "\"text\"");
        assert_eq!(preset_wrap("text", 2), "(text)");
        assert_eq!(preset_wrap("text", 3), "{text}");
        assert_eq!(preset_wrap("text", 4), "[text]");
        assert_eq!(preset_wrap("text", 5), "text");
    }
}
