//! Host-supplied preferences.
//!
//! The host app keeps preferences in a key/value store. This module turns
//! those pairs (or environment variables, for command-line hosts) into the
//! typed settings the rest of the crate takes as parameters.
//!
//! | Key | Type | Default |
//! |---|---|---|
//! | `prepend_country_code` | bool | `false` |
//! | `country_code` | string | empty |
//! | `decimal_points` | `0..=15` | `2` |
//! | `evaluation_result` | `replace` \| `append` | `replace` |

use std::env;

use crate::calc::{CalcSettings, EvalResultMode, MAX_DECIMAL_POINTS};
use crate::error::{Error, Result};
use crate::event::{LogLevel, emit_log};
use crate::phone::{CountryCodeSettings, PhoneNumberNormalizer};

/// Prefix for environment variable names, e.g. `QUICKTOOLS_COUNTRY_CODE`.
pub const ENV_PREFIX: &str = "QUICKTOOLS_";

/// Recognized setting keys.
pub const KEYS: [&str; 4] = [
    "prepend_country_code",
    "country_code",
    "decimal_points",
    "evaluation_result",
];

/// All preferences the core consumes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Settings {
    pub phone: CountryCodeSettings,
    pub calc: CalcSettings,
}

impl Settings {
    /// Build settings from key/value pairs, starting from the defaults.
    ///
    /// Unknown keys are skipped with a warning.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut settings = Self::default();
        for (key, value) in pairs {
            settings.set(key.as_ref(), value.as_ref())?;
        }
        Ok(settings)
    }

    /// Read `QUICKTOOLS_*` environment variables. Unset ones keep defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Like [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let pairs = KEYS.iter().filter_map(|key| {
            let name = format!("{ENV_PREFIX}{}", key.to_ascii_uppercase());
            lookup(&name).map(|value| (*key, value))
        });
        Self::from_pairs(pairs)
    }

    /// Apply a single key/value pair.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let trimmed = value.trim();
        match key {
            "prepend_country_code" => {
                self.phone.prepend_enabled = parse_bool(key, trimmed)?;
            }
            "country_code" => {
                self.phone.country_code = trimmed.to_string();
            }
            "decimal_points" => {
                self.calc.decimal_points = trimmed
                    .parse::<u8>()
                    .ok()
                    .filter(|points| *points <= MAX_DECIMAL_POINTS)
                    .ok_or_else(|| invalid(key, value))?;
            }
            "evaluation_result" => {
                self.calc.result_mode = match trimmed.to_ascii_lowercase().as_str() {
                    "replace" => EvalResultMode::Replace,
                    "append" => EvalResultMode::Append,
                    _ => return Err(invalid(key, value)),
                };
            }
            unknown => {
                emit_log(LogLevel::Warn, &format!("ignoring unknown setting {unknown}"));
            }
        }
        Ok(())
    }

    /// Normalizer configured with these phone settings.
    #[must_use]
    pub fn normalizer(&self) -> PhoneNumberNormalizer {
        PhoneNumberNormalizer::new(self.phone.clone())
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(invalid(key, value)),
    }
}

fn invalid(key: &str, value: &str) -> Error {
    Error::InvalidSetting {
        key: key.to_string(),
        value: value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert!(!settings.phone.prepend_enabled);
        assert!(settings.phone.country_code.is_empty());
        assert_eq!(settings.calc.decimal_points, 2);
        assert_eq!(settings.calc.result_mode, EvalResultMode::Replace);
    }

    #[test]
    fn test_from_pairs() {
        let settings = Settings::from_pairs([
            ("prepend_country_code", "yes"),
            ("country_code", " +44 "),
            ("decimal_points", "4"),
            ("evaluation_result", "Append"),
        ])
        .unwrap();
        assert!(settings.phone.prepend_enabled);
        assert_eq!(settings.phone.country_code, "+44");
        assert_eq!(settings.calc.decimal_points, 4);
        assert_eq!(settings.calc.result_mode, EvalResultMode::Append);
    }

    #[test]
    fn test_invalid_values() {
        let err = Settings::from_pairs([("decimal_points", "lots")]).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidSetting {
                key: "decimal_points".to_string(),
                value: "lots".to_string(),
            }
        );
        assert!(Settings::from_pairs([("decimal_points", "16")]).is_err());
        assert!(Settings::from_pairs([("prepend_country_code", "maybe")]).is_err());
        assert!(Settings::from_pairs([("evaluation_result", "copy")]).is_err());
    }

    #[test]
    fn test_unknown_key_is_ignored() {
        let settings = Settings::from_pairs([("theme", "dark")]).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_from_lookup_uses_prefixed_names() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("QUICKTOOLS_PREPEND_COUNTRY_CODE", "1"),
            ("QUICKTOOLS_COUNTRY_CODE", "+1"),
        ]);
        let settings = Settings::from_lookup(|name| vars.get(name).map(ToString::to_string)).unwrap();
        assert!(settings.phone.prepend_enabled);
        assert_eq!(settings.phone.country_code, "+1");
        assert_eq!(settings.calc, CalcSettings::default());
    }

    #[test]
    fn test_normalizer_uses_phone_settings() {
        let settings = Settings::from_pairs([
            ("prepend_country_code", "true"),
            ("country_code", "+1"),
        ])
        .unwrap();
        assert_eq!(
            settings.normalizer().normalize("555-1234"),
            Some("+15551234".to_string())
        );
    }
}
