//! Entity-type registration: fans base fields out into one shadow key per
//! registered locale.

use crate::error::{Result, TranslationError};
use crate::i18n::LocaleRegistry;
use crate::manifest::{is_key_base, translation_key, ManifestEntry};
use crate::schema::{SchemaExtensionSink, SchemaProvider};
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

/// Manifest entries for every registered entity type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationManifest {
    pub(super) entries: BTreeMap<String, ManifestEntry>,
}

impl TranslationManifest {
    /// Create an empty manifest with no registered entity types.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `base_fields` of `entity_type` as translatable.
    ///
    /// Any existing entry for the type is dropped first; the new entry
    /// replaces it wholesale. Base fields the schema does not declare are
    /// skipped, as are names that cannot split back out of a key (empty,
    /// containing the delimiter, or ending in `_`). For each remaining
    /// field, and each locale in `locales`, the key `field__locale` is mapped
    /// to the field's declared type. The finished entry is stored and granted
    /// to `sink`.
    ///
    /// # Errors
    /// `UnknownEntityType` if `schema` does not know `entity_type`. The old
    /// entry stays dropped in that case.
    pub fn register<S: AsRef<str>>(
        &mut self,
        entity_type: &str,
        base_fields: &[S],
        locales: &LocaleRegistry,
        schema: &dyn SchemaProvider,
        sink: &dyn SchemaExtensionSink,
    ) -> Result<&ManifestEntry> {
        if self.entries.remove(entity_type).is_some() {
            warn!(entity_type, "Replacing existing translation manifest entry");
        }

        if !schema.has_entity_type(entity_type) {
            return Err(TranslationError::UnknownEntityType {
                entity_type: entity_type.to_string(),
            });
        }

        if locales.is_empty() {
            warn!(entity_type, "No locales registered; no translation fields will be generated");
        }

        let mut entry = ManifestEntry::new(entity_type);
        for base in base_fields {
            let base = base.as_ref();
            if !is_key_base(base) {
                warn!(entity_type, field = base, "Field name cannot carry translations, skipping");
                continue;
            }

            let Some(field_type) = schema.declared_field_type(entity_type, base) else {
                debug!(entity_type, field = base, "Field not declared on schema, skipping");
                continue;
            };

            entry.note_base_field(base);
            for locale in locales.all_locales() {
                entry.insert(translation_key(base, locale), field_type.clone());
            }
        }

        info!(
            entity_type,
            fields = entry.base_fields().len(),
            keys = entry.len(),
            "Registered translatable fields"
        );

        sink.grant_capability(entity_type, &entry);
        Ok(self.entries.entry(entity_type.to_string()).or_insert(entry))
    }

    /// Get the manifest entry of an entity type.
    ///
    /// # Returns
    /// * `Some(&ManifestEntry)` if the type was registered
    /// * `None` otherwise
    pub fn entry(&self, entity_type: &str) -> Option<&ManifestEntry> {
        self.entries.get(entity_type)
    }

    /// Registered entity types, sorted.
    pub fn entity_types(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Check whether a field name is a shadow field of an entity type.
    ///
    /// # Arguments
    /// * `entity_type` - The registered entity type
    /// * `name` - A full translation key such as `Title__FR`
    pub fn is_translation_field(&self, entity_type: &str, name: &str) -> bool {
        self.entry(entity_type)
            .is_some_and(|entry| entry.contains_key(name))
    }
}
