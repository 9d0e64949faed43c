//! Locale registry: the set of locales translations are generated for.
//!
//! Locales accumulate for the lifetime of the registry; there is no removal.
//! Every admitted locale has been accepted by a [`LocaleAuthority`], is
//! free of the translation-key delimiter and does not start with `_`, so keys
//! derived from it always split back cleanly.

use crate::error::{Result, TranslationError};
use crate::i18n::{Locale, LocaleAuthority};
use crate::manifest::is_key_locale;
use tracing::debug;

/// Insertion-ordered set of admitted locales.
///
/// Order matters: manifest keys are generated locale-minor in this order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleRegistry {
    locales: Vec<Locale>,
}

impl LocaleRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and admit `locales`.
    ///
    /// The whole batch is validated before anything is inserted, so a
    /// rejected locale leaves the registry untouched. Locales already present
    /// are skipped.
    ///
    /// # Returns
    /// The number of locales that were not present before.
    ///
    /// # Errors
    /// * `Configuration` if `locales` is empty
    /// * `InvalidLocale` naming the first rejected input
    pub fn add_locales<I, S>(&mut self, locales: I, authority: &dyn LocaleAuthority) -> Result<usize>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let candidates: Vec<Locale> = locales
            .into_iter()
            .map(|locale| Locale::new(locale.as_ref()))
            .collect();

        if candidates.is_empty() {
            return Err(TranslationError::Configuration(
                "at least one locale must be given".to_string(),
            ));
        }

        for locale in &candidates {
            if !is_admissible(locale, authority) {
                return Err(TranslationError::InvalidLocale {
                    locale: locale.to_string(),
                });
            }
        }

        Ok(self.insert_all(candidates))
    }

    /// Resolve language codes through the authority and admit the resulting
    /// locales (`en` may become `en_US`, depending on the authority).
    ///
    /// # Returns
    /// The resolved locales, in input order.
    ///
    /// # Errors
    /// * `Configuration` if `codes` is empty
    /// * `InvalidLocale` for a code the authority cannot resolve
    pub fn add_languages<I, S>(
        &mut self,
        codes: I,
        authority: &dyn LocaleAuthority,
    ) -> Result<Vec<Locale>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut resolved = Vec::new();
        for code in codes {
            let code = code.as_ref();
            match authority.resolve(code) {
                Some(locale) if is_admissible(&locale, authority) => resolved.push(locale),
                _ => {
                    return Err(TranslationError::InvalidLocale {
                        locale: code.to_string(),
                    })
                }
            }
        }

        if resolved.is_empty() {
            return Err(TranslationError::Configuration(
                "at least one language must be given".to_string(),
            ));
        }

        self.insert_all(resolved.iter().cloned());
        Ok(resolved)
    }

    /// Get all admitted locales.
    ///
    /// # Returns
    /// A slice of locales in admission order.
    pub fn all_locales(&self) -> &[Locale] {
        &self.locales
    }

    /// Check if a locale was admitted.
    ///
    /// # Arguments
    /// * `locale` - The locale identifier, compared case-sensitively
    pub fn contains(&self, locale: &str) -> bool {
        self.locales.iter().any(|known| known == locale)
    }

    /// Number of admitted locales.
    pub fn len(&self) -> usize {
        self.locales.len()
    }

    /// Check if no locale was admitted yet.
    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }

    fn insert_all(&mut self, locales: impl IntoIterator<Item = Locale>) -> usize {
        let mut added = 0;
        for locale in locales {
            if self.locales.contains(&locale) {
                debug!(locale = %locale, "Locale already registered");
                continue;
            }
            self.locales.push(locale);
            added += 1;
        }
        added
    }
}

fn is_admissible(locale: &Locale, authority: &dyn LocaleAuthority) -> bool {
    is_key_locale(locale.as_str()) && authority.validate(locale.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::PatternLocaleAuthority;

    /// Accepts everything; lets tests reach the delimiter check.
    struct AnythingGoes;

    impl LocaleAuthority for AnythingGoes {
        fn validate(&self, _locale: &str) -> bool {
            true
        }

        fn resolve(&self, code: &str) -> Option<Locale> {
            Some(Locale::new(code))
        }
    }

    fn authority() -> PatternLocaleAuthority {
        PatternLocaleAuthority::new()
    }

    // ==================== add_locales Tests ====================

    #[test]
    fn test_add_locales_preserves_order() {
        let mut registry = LocaleRegistry::new();
        registry.add_locales(["EN", "FR", "IT"], &authority()).unwrap();

        let codes: Vec<&str> = registry.all_locales().iter().map(Locale::as_str).collect();
        assert_eq!(codes, vec!["EN", "FR", "IT"]);
    }

    #[test]
    fn test_add_locales_is_idempotent_across_calls() {
        let mut registry = LocaleRegistry::new();
        assert_eq!(registry.add_locales(["EN", "FR"], &authority()).unwrap(), 2);
        assert_eq!(registry.add_locales(["FR", "IT", "EN"], &authority()).unwrap(), 1);
        assert_eq!(registry.add_locales(["FR", "FR"], &authority()).unwrap(), 0);

        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_add_locales_empty_is_configuration_error() {
        let mut registry = LocaleRegistry::new();
        let result = registry.add_locales(Vec::<String>::new(), &authority());

        assert!(matches!(result, Err(TranslationError::Configuration(_))));
    }

    #[test]
    fn test_add_locales_invalid_names_offender() {
        let mut registry = LocaleRegistry::new();
        let result = registry.add_locales(["EN", "not a locale", "FR"], &authority());

        assert_eq!(
            result,
            Err(TranslationError::InvalidLocale {
                locale: "not a locale".to_string()
            })
        );
    }

    #[test]
    fn test_add_locales_rejected_batch_admits_nothing() {
        let mut registry = LocaleRegistry::new();
        let _ = registry.add_locales(["EN", "??"], &authority());

        assert!(registry.is_empty());
    }

    #[test]
    fn test_add_locales_rejects_delimiter_even_if_authority_accepts() {
        let mut registry = LocaleRegistry::new();
        let result = registry.add_locales(["en__US"], &AnythingGoes);

        assert!(matches!(result, Err(TranslationError::InvalidLocale { .. })));
    }

    #[test]
    fn test_add_locales_rejects_leading_underscore_even_if_authority_accepts() {
        let mut registry = LocaleRegistry::new();
        let result = registry.add_locales(["FR", "_IT"], &AnythingGoes);

        assert_eq!(
            result,
            Err(TranslationError::InvalidLocale {
                locale: "_IT".to_string()
            })
        );
        assert!(registry.is_empty());
    }

    // ==================== add_languages Tests ====================

    #[test]
    fn test_add_languages_resolves_through_authority() {
        let authority = PatternLocaleAuthority::new().with_alias("en", "en_US");
        let mut registry = LocaleRegistry::new();

        let resolved = registry.add_languages(["en", "pt-br"], &authority).unwrap();

        assert_eq!(resolved, vec![Locale::new("en_US"), Locale::new("pt_BR")]);
        assert!(registry.contains("en_US"));
        assert!(registry.contains("pt_BR"));
        assert!(!registry.contains("en"));
    }

    #[test]
    fn test_add_languages_unresolvable_code() {
        let mut registry = LocaleRegistry::new();
        let result = registry.add_languages(["klingon!"], &authority());

        assert_eq!(
            result,
            Err(TranslationError::InvalidLocale {
                locale: "klingon!".to_string()
            })
        );
    }

    #[test]
    fn test_add_languages_empty_is_configuration_error() {
        let mut registry = LocaleRegistry::new();
        let result = registry.add_languages(Vec::<&str>::new(), &authority());

        assert!(matches!(result, Err(TranslationError::Configuration(_))));
    }

    // ==================== Query Tests ====================

    #[test]
    fn test_contains_is_case_sensitive() {
        let mut registry = LocaleRegistry::new();
        registry.add_locales(["FR"], &authority()).unwrap();

        assert!(registry.contains("FR"));
        assert!(!registry.contains("fr"));
    }
}
