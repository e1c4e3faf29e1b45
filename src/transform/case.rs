//! Case conversion.

use rand::Rng;

/// Case conversion mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CaseMode {
    /// Every character upper-cased.
    Upper,
    /// Every character lower-cased.
    Lower,
    /// First character of the text upper-cased, the rest untouched.
    Sentence,
    /// First character of every space-separated word upper-cased.
    Title,
    /// Each character independently upper- or lower-cased at random.
    Random,
}

impl CaseMode {
    pub const ALL: [Self; 5] = [
        Self::Upper,
        Self::Lower,
        Self::Sentence,
        Self::Title,
        Self::Random,
    ];

    /// Mode at menu position `index`.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Convert the case of `text`.
///
/// [`CaseMode::Random`] draws from the thread-local RNG; use
/// [`change_case_with`] to supply a seeded one.
#[must_use]
pub fn change_case(text: &str, mode: CaseMode) -> String {
    change_case_with(text, mode, &mut rand::rng())
}

/// Convert the case of `text`, drawing random choices from `rng`.
#[must_use]
pub fn change_case_with<R: Rng>(text: &str, mode: CaseMode, rng: &mut R) -> String {
    match mode {
        CaseMode::Upper => text.to_uppercase(),
        CaseMode::Lower => text.to_lowercase(),
        CaseMode::Sentence => capitalize_first(text),
        CaseMode::Title => text
            .split(' ')
            .map(capitalize_first)
            .collect::<Vec<_>>()
            .join(" "),
        CaseMode::Random => {
            let mut out = String::with_capacity(text.len());
            for ch in text.chars() {
                if rng.random_bool(0.5) {
                    out.extend(ch.to_uppercase());
                } else {
                    out.extend(ch.to_lowercase());
                }
            }
            out
        }
    }
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_upper_lower() {
        assert_eq!(change_case("Hello World", CaseMode::Upper), "HELLO WORLD");
        assert_eq!(change_case("Hello World", CaseMode::Lower), "hello world");
    }

    #[test]
    fn test_sentence_only_touches_first_char() {
        assert_eq!(
            change_case("hello wORLD", CaseMode::Sentence),
            "Hello wORLD"
        );
        assert_eq!(change_case("", CaseMode::Sentence), "");
    }

    #[test]
    fn test_title_every_word() {
        assert_eq!(
            change_case("the quick  brown fox", CaseMode::Title),
            "The Quick  Brown Fox"
        );
    }

    #[test]
    fn test_title_leaves_rest_of_word() {
        assert_eq!(change_case("mcDonald iPhone", CaseMode::Title), "McDonald IPhone");
    }

    #[test]
    fn test_random_is_reproducible_with_seed() {
        let text = "the quick brown fox jumps over the lazy dog";
        let a = change_case_with(text, CaseMode::Random, &mut StdRng::seed_from_u64(42));
        let b = change_case_with(text, CaseMode::Random, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_random_only_flips_case() {
        let text = "abcdefghijklmnopqrstuvwxyz".repeat(8);
        let out = change_case_with(&text, CaseMode::Random, &mut StdRng::seed_from_u64(7));
        assert_eq!(out.to_lowercase(), text);
        assert!(out.chars().any(char::is_uppercase));
        assert!(out.chars().any(char::is_lowercase));
    }

    #[test]
    fn test_from_index() {
        assert_eq!(CaseMode::from_index(3), Some(CaseMode::Title));
        assert_eq!(CaseMode::from_index(5), None);
    }
}
