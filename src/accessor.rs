//! Reading and writing translated values on entities.

use crate::entity::{is_populated, Entity};
use crate::error::{Result, TranslationError};
use crate::i18n::Locale;
use crate::manifest::{translation_key, TranslationManifest};
use serde_json::Value;

/// Value of `base` in `locale`, falling back to the base field when the
/// translation is missing or empty.
pub fn translated_value<'a, E>(entity: &'a E, base: &str, locale: &Locale) -> Option<&'a Value>
where
    E: Entity + ?Sized,
{
    let translated = entity.field(&translation_key(base, locale));
    if is_populated(translated) {
        translated
    } else {
        entity.field(base)
    }
}

/// Write the `locale` translation of `base`.
///
/// # Errors
/// `UnknownTranslation` if the manifest has no such shadow field for the
/// entity's type; the entity is left untouched.
pub fn set_translation<E>(
    manifest: &TranslationManifest,
    entity: &mut E,
    base: &str,
    locale: &Locale,
    value: Value,
) -> Result<()>
where
    E: Entity + ?Sized,
{
    let key = translation_key(base, locale);
    if !manifest.is_translation_field(entity.entity_type(), &key) {
        return Err(TranslationError::UnknownTranslation {
            entity_type: entity.entity_type().to_string(),
            key,
        });
    }

    entity.set_field(&key, value);
    Ok(())
}
