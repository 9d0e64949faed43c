//! Locale type: an opaque language/region identifier.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A locale identifier such as `en_US`, `fr` or `IT`.
///
/// The value is kept verbatim; no case folding happens here. Holding a
/// `Locale` does not imply it was admitted into a [`LocaleRegistry`]: the
/// registry (through its [`LocaleAuthority`]) is the validation gate.
///
/// [`LocaleRegistry`]: crate::i18n::LocaleRegistry
/// [`LocaleAuthority`]: crate::i18n::LocaleAuthority
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Locale(String);

impl Locale {
    /// Wrap an identifier without validating it.
    pub fn new(code: impl Into<String>) -> Self {
        Locale(code.into())
    }

    /// The identifier as written.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Locale {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Locale {
    fn from(code: &str) -> Self {
        Locale::new(code)
    }
}

impl From<String> for Locale {
    fn from(code: String) -> Self {
        Locale(code)
    }
}

impl PartialEq<str> for Locale {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Locale {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_keeps_case() {
        let locale = Locale::new("en_US");
        assert_eq!(locale.as_str(), "en_US");
        assert_eq!(locale.to_string(), "en_US");
    }

    #[test]
    fn test_locale_compares_with_str() {
        let locale = Locale::from("FR");
        assert_eq!(locale, "FR");
        assert_ne!(locale.as_str(), "fr");
    }

    #[test]
    fn test_locale_serializes_as_plain_string() {
        let json = serde_json::to_string(&Locale::new("it")).unwrap();
        assert_eq!(json, "\"it\"");

        let back: Locale = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Locale::new("it"));
    }
}
