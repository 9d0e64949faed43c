//! Translation keys: `base + "__" + locale`.

use crate::error::{Result, TranslationError};
use crate::i18n::Locale;

/// Separator between a base field name and a locale in a translation key.
pub const DELIMITER: &str = "__";

/// Derive the storage key of `base` translated into `locale`.
pub fn translation_key(base: &str, locale: &Locale) -> String {
    format!("{base}{DELIMITER}{locale}")
}

/// The base field name of a translation key (its first segment).
///
/// Permissive: `A__B__C` yields `A`.
///
/// # Errors
/// `MalformedKey` if `key` contains no delimiter at all.
pub fn basename(key: &str) -> Result<&str> {
    key.split_once(DELIMITER)
        .map(|(base, _)| base)
        .ok_or_else(|| TranslationError::MalformedKey {
            key: key.to_string(),
        })
}

/// The locale of a translation key.
///
/// Returns `None` ("not a translation key") unless `key` splits into exactly
/// two non-empty segments.
pub fn locale_of(key: &str) -> Option<Locale> {
    let mut parts = key.split(DELIMITER);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(base), Some(locale), None) if !base.is_empty() && !locale.is_empty() => {
            Some(Locale::new(locale))
        }
        _ => None,
    }
}

/// Whether `key` is a well-formed translation key.
pub fn is_translation_key(key: &str) -> bool {
    locale_of(key).is_some()
}

/// Whether `base` can be the first half of a key. A trailing `_` would
/// merge with the delimiter (`Title_` + `__FR` splits as `Title` / `_FR`).
pub(crate) fn is_key_base(base: &str) -> bool {
    !base.is_empty() && !base.contains(DELIMITER) && !base.ends_with('_')
}

/// Whether `locale` can be the second half of a key. A leading `_` would
/// merge with the delimiter.
pub(crate) fn is_key_locale(locale: &str) -> bool {
    !locale.is_empty() && !locale.contains(DELIMITER) && !locale.starts_with('_')
}
