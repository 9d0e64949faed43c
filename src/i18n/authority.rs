//! Locale authority: decides which strings are acceptable locales.
//!
//! The registry never admits a locale on its own; it asks a
//! [`LocaleAuthority`]. Applications with their own locale catalogue implement
//! the trait; [`PatternLocaleAuthority`] covers the common
//! `language[_REGION]` shapes.

use crate::i18n::Locale;
use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

/// External validator and resolver for locale identifiers.
pub trait LocaleAuthority: Send + Sync {
    /// Whether `locale` is an acceptable locale identifier.
    fn validate(&self, locale: &str) -> bool;

    /// Map a language or locale code to the locale it stands for, if any.
    fn resolve(&self, code: &str) -> Option<Locale>;
}

// Language subtag, then any number of `_`/`-` separated subtags.
static LOCALE_REGEX: OnceLock<Regex> = OnceLock::new();

fn locale_regex() -> &'static Regex {
    LOCALE_REGEX.get_or_init(|| {
        Regex::new(r"^[A-Za-z]{2,3}(?:[_-][A-Za-z0-9]{2,8})*$").expect("locale pattern is valid")
    })
}

/// Regex-backed authority accepting identifiers like `en`, `FR`, `en_US`,
/// `pt-BR` or `zh_Hant_TW`.
///
/// `resolve` consults the alias table first (so a bare language such as `en`
/// can stand for `en_US`), then normalizes the code to
/// `language_REGION` form.
#[derive(Debug, Clone, Default)]
pub struct PatternLocaleAuthority {
    aliases: HashMap<String, Locale>,
}

impl PatternLocaleAuthority {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve `code` (matched case-insensitively) to `locale`.
    pub fn with_alias(mut self, code: &str, locale: impl Into<Locale>) -> Self {
        self.aliases.insert(code.to_ascii_lowercase(), locale.into());
        self
    }

    /// Normalize a valid code: language lower-case, two-letter regions
    /// upper-case, other subtags untouched, `_` as separator.
    fn normalize(code: &str) -> String {
        code.split(['_', '-'])
            .enumerate()
            .map(|(index, part)| match index {
                0 => part.to_ascii_lowercase(),
                _ if part.len() == 2 && part.chars().all(|c| c.is_ascii_alphabetic()) => {
                    part.to_ascii_uppercase()
                }
                _ => part.to_string(),
            })
            .collect::<Vec<_>>()
            .join("_")
    }
}

impl LocaleAuthority for PatternLocaleAuthority {
    fn validate(&self, locale: &str) -> bool {
        locale_regex().is_match(locale)
    }

    fn resolve(&self, code: &str) -> Option<Locale> {
        if let Some(locale) = self.aliases.get(&code.to_ascii_lowercase()) {
            return Some(locale.clone());
        }

        if !self.validate(code) {
            return None;
        }

        Some(Locale::new(Self::normalize(code)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== validate Tests ====================

    #[test]
    fn test_validate_accepts_common_shapes() {
        let authority = PatternLocaleAuthority::new();
        for code in ["en", "FR", "it", "en_US", "pt-BR", "zh_Hant_TW", "ast"] {
            assert!(authority.validate(code), "{code} should be valid");
        }
    }

    #[test]
    fn test_validate_rejects_garbage() {
        let authority = PatternLocaleAuthority::new();
        for code in ["", "e", "english", "en__US", "en_", "12", "en US", "fr!"] {
            assert!(!authority.validate(code), "{code} should be rejected");
        }
    }

    // ==================== resolve Tests ====================

    #[test]
    fn test_resolve_normalizes_region() {
        let authority = PatternLocaleAuthority::new();
        assert_eq!(authority.resolve("pt-br"), Some(Locale::new("pt_BR")));
        assert_eq!(authority.resolve("EN_us"), Some(Locale::new("en_US")));
    }

    #[test]
    fn test_resolve_keeps_script_subtag() {
        let authority = PatternLocaleAuthority::new();
        assert_eq!(
            authority.resolve("zh-Hant-tw"),
            Some(Locale::new("zh_Hant_TW"))
        );
    }

    #[test]
    fn test_resolve_prefers_alias() {
        let authority = PatternLocaleAuthority::new().with_alias("en", "en_US");
        assert_eq!(authority.resolve("EN"), Some(Locale::new("en_US")));
        assert_eq!(authority.resolve("fr"), Some(Locale::new("fr")));
    }

    #[test]
    fn test_resolve_invalid_is_none() {
        let authority = PatternLocaleAuthority::new();
        assert_eq!(authority.resolve("not a locale"), None);
    }
}
