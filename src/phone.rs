//! Phone number cleanup for messaging shortcuts.
//!
//! Selected text is stripped of separators, validated, and optionally given
//! the user's country code before it is turned into a messaging link.

use std::sync::OnceLock;

use regex::Regex;

/// Characters removed from a number before it is validated or used.
pub const SEPARATORS: [char; 5] = [' ', '-', '(', ')', '.'];

const PHONE_PATTERN: &str = r"(?i)^(?:\+\d{1,3}[\s.-]?)?(?:\(\d{1,4}\)[\s.-]?)?\d{1,4}(?:[\s.-]?\d{1,4}){1,5}(?:\s*(?:ext\.?|x|#)\s*\d{1,6})?$";

fn phone_regex() -> Option<&'static Regex> {
    static PHONE_REGEX: OnceLock<Option<Regex>> = OnceLock::new();
    PHONE_REGEX
        .get_or_init(|| Regex::new(PHONE_PATTERN).ok())
        .as_ref()
}

/// Country code preferences supplied by the host.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CountryCodeSettings {
    /// Prepend `country_code` to numbers that lack one.
    pub prepend_enabled: bool,
    /// Code to prepend, usually including the leading `+`.
    pub country_code: String,
}

impl CountryCodeSettings {
    #[must_use]
    pub fn new(prepend_enabled: bool, country_code: impl Into<String>) -> Self {
        Self {
            prepend_enabled,
            country_code: country_code.into(),
        }
    }
}

/// Validates and normalizes phone numbers.
#[derive(Clone, Debug, Default)]
pub struct PhoneNumberNormalizer {
    settings: CountryCodeSettings,
}

impl PhoneNumberNormalizer {
    #[must_use]
    pub fn new(settings: CountryCodeSettings) -> Self {
        Self { settings }
    }

    #[must_use]
    pub fn settings(&self) -> &CountryCodeSettings {
        &self.settings
    }

    /// Whether `text` looks like a phone number.
    #[must_use]
    pub fn is_valid(text: &str) -> bool {
        phone_regex().is_some_and(|regex| regex.is_match(text.trim()))
    }

    /// `text` without any [`SEPARATORS`].
    #[must_use]
    pub fn special_characters_removed(text: &str) -> String {
        text.chars().filter(|ch| !SEPARATORS.contains(ch)).collect()
    }

    /// Apply the configured country code to `number`.
    ///
    /// Unchanged when prepending is off, no code is set, the number already
    /// starts with the code, or the number already starts with `+`, checked
    /// in that order.
    #[must_use]
    pub fn country_coded_number(&self, number: &str) -> String {
        let code = self.settings.country_code.trim();
        if !self.settings.prepend_enabled || code.is_empty() {
            return number.to_string();
        }
        if number.starts_with(code) || number.starts_with('+') {
            return number.to_string();
        }
        format!("{code}{number}")
    }

    /// Strip separators, validate, and apply the country code.
    ///
    /// Returns `None` if the stripped text is not a phone number.
    #[must_use]
    pub fn normalize(&self, text: &str) -> Option<String> {
        let stripped = Self::special_characters_removed(text.trim());
        if !Self::is_valid(&stripped) {
            return None;
        }
        Some(self.country_coded_number(&stripped))
    }
}

/// Messaging service a shortcut opens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MessagingApp {
    WhatsApp,
    Telegram,
    Signal,
    Sms,
}

impl MessagingApp {
    pub const ALL: [Self; 4] = [Self::WhatsApp, Self::Telegram, Self::Signal, Self::Sms];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::WhatsApp => "WhatsApp",
            Self::Telegram => "Telegram",
            Self::Signal => "Signal",
            Self::Sms => "SMS",
        }
    }

    /// Deep link that opens a chat with `number`.
    ///
    /// `number` should already be normalized.
    #[must_use]
    pub fn link(self, number: &str) -> String {
        let digits = number.trim_start_matches('+');
        match self {
            Self::WhatsApp => format!("https://wa.me/{digits}"),
            Self::Telegram => format!("https://t.me/+{digits}"),
            Self::Signal => format!("https://signal.me/#p/+{digits}"),
            Self::Sms => format!("sms:{number}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plus_one() -> PhoneNumberNormalizer {
        PhoneNumberNormalizer::new(CountryCodeSettings::new(true, "+1"))
    }

    #[test]
    fn test_pattern_compiles() {
        assert!(phone_regex().is_some());
    }

    #[test]
    fn test_is_valid() {
        assert!(PhoneNumberNormalizer::is_valid("+1 555 123 4567"));
        assert!(PhoneNumberNormalizer::is_valid("+44 (20) 7946-0958"));
        assert!(PhoneNumberNormalizer::is_valid("555.123.4567"));
        assert!(PhoneNumberNormalizer::is_valid("1234567"));
        assert!(PhoneNumberNormalizer::is_valid("555-1234 ext. 42"));
        assert!(PhoneNumberNormalizer::is_valid("  +15551234  "));
    }

    #[test]
    fn test_is_valid_rejects_text() {
        assert!(!PhoneNumberNormalizer::is_valid("hello"));
        assert!(!PhoneNumberNormalizer::is_valid(""));
        assert!(!PhoneNumberNormalizer::is_valid("+"));
        assert!(!PhoneNumberNormalizer::is_valid("555-CALL-NOW"));
        assert!(!PhoneNumberNormalizer::is_valid("++15551234"));
    }

    #[test]
    fn test_special_characters_removed() {
        assert_eq!(
            PhoneNumberNormalizer::special_characters_removed("+1 (555) 123-45.67"),
            "+15551234567"
        );
    }

    #[test]
    fn test_country_code_precedence() {
        let normalizer = plus_one();
        assert_eq!(normalizer.country_coded_number("+44123"), "+44123");
        assert_eq!(normalizer.country_coded_number("1234567"), "+11234567");
        assert_eq!(normalizer.country_coded_number("+15551234"), "+15551234");
    }

    #[test]
    fn test_country_code_without_plus() {
        let normalizer = PhoneNumberNormalizer::new(CountryCodeSettings::new(true, "44"));
        assert_eq!(normalizer.country_coded_number("447700900"), "447700900");
        assert_eq!(normalizer.country_coded_number("7700900"), "447700900");
    }

    #[test]
    fn test_country_code_disabled_or_empty() {
        let disabled = PhoneNumberNormalizer::new(CountryCodeSettings::new(false, "+1"));
        assert_eq!(disabled.country_coded_number("5551234"), "5551234");

        let empty = PhoneNumberNormalizer::new(CountryCodeSettings::new(true, "  "));
        assert_eq!(empty.country_coded_number("5551234"), "5551234");
    }

    #[test]
    fn test_normalize() {
        let normalizer = plus_one();
        assert_eq!(
            normalizer.normalize(" (555) 123-4567 "),
            Some("+15551234567".to_string())
        );
        assert_eq!(
            normalizer.normalize("+49 30 1234567"),
            Some("+49301234567".to_string())
        );
        assert_eq!(normalizer.normalize("not a number"), None);
    }

    #[test]
    fn test_message_links() {
        let number = "+15551234567";
        assert_eq!(MessagingApp::WhatsApp.link(number), "https://wa.me/15551234567");
        assert_eq!(MessagingApp::Telegram.link(number), "https://t.me/+15551234567");
        assert_eq!(
            MessagingApp::Signal.link(number),
            "https://signal.me/#p/+15551234567"
        );
        assert_eq!(MessagingApp::Sms.link(number), "sms:+15551234567");
    }
}
