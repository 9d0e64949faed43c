//! Editable form fields for the translations of an entity type.

use crate::i18n::Locale;
use crate::manifest::{basename, locale_of, TranslationManifest};
use crate::schema::{FieldDescriptor, FieldScaffolder};
use tracing::debug;

impl TranslationManifest {
    /// Scaffold one editable field per translation of `entity_type`.
    ///
    /// Walks the manifest entry in registration order and skips keys that
    /// are not well-formed translation keys, keys of a different base field
    /// than `base_field` (when given), keys of a different locale than
    /// `locale` (when given), and keys of `default_locale`, which the base
    /// field itself serves.
    ///
    /// Each surviving field is named with its full key and titled
    /// `"<base title> (<locale>)"`.
    ///
    /// An entity type without a manifest entry yields no fields.
    pub fn translation_fields(
        &self,
        entity_type: &str,
        base_field: Option<&str>,
        locale: Option<&Locale>,
        default_locale: &Locale,
        scaffolder: &dyn FieldScaffolder,
    ) -> Vec<FieldDescriptor> {
        let Some(entry) = self.entry(entity_type) else {
            debug!(entity_type, "No translation manifest entry");
            return Vec::new();
        };

        let mut descriptors = Vec::new();
        for field in entry.fields() {
            let Some(key_locale) = locale_of(&field.key) else {
                debug!(entity_type, key = %field.key, "Skipping malformed translation key");
                continue;
            };
            let Ok(base) = basename(&field.key) else {
                continue;
            };

            if base_field.is_some_and(|wanted| wanted != base)
                || locale.is_some_and(|wanted| *wanted != key_locale)
                || key_locale == *default_locale
            {
                continue;
            }

            let mut descriptor = scaffolder.scaffold(entity_type, &field.key, &field.field_type);
            descriptor.name = field.key.clone();
            descriptor.title = format!(
                "{} ({})",
                scaffolder.display_title(entity_type, base),
                key_locale
            );
            descriptors.push(descriptor);
        }
        descriptors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{LocaleRegistry, PatternLocaleAuthority};
    use crate::manifest::ManifestEntry;
    use crate::schema::{BasicScaffolder, FieldKind, FieldType, NoopSink, StaticSchema};

    fn manifest() -> TranslationManifest {
        let mut locales = LocaleRegistry::new();
        locales
            .add_locales(["EN", "FR", "IT"], &PatternLocaleAuthority::new())
            .unwrap();
        let schema = StaticSchema::new().with_entity(
            "Page",
            [("Title", "Varchar(255)"), ("Description", "Text")],
        );

        let mut manifest = TranslationManifest::new();
        manifest
            .register("Page", &["Title", "Description"], &locales, &schema, &NoopSink)
            .unwrap();
        manifest
    }

    fn names(fields: &[FieldDescriptor]) -> Vec<&str> {
        fields.iter().map(|field| field.name.as_str()).collect()
    }

    fn en() -> Locale {
        Locale::new("EN")
    }

    #[test]
    fn test_translation_fields_excludes_default_locale() {
        let fields = manifest().translation_fields("Page", None, None, &en(), &BasicScaffolder::new());

        assert_eq!(
            names(&fields),
            vec!["Title__FR", "Title__IT", "Description__FR", "Description__IT"]
        );
    }

    #[test]
    fn test_translation_fields_filtered_by_base_field() {
        let fields = manifest().translation_fields(
            "Page",
            Some("Description"),
            None,
            &en(),
            &BasicScaffolder::new(),
        );

        assert_eq!(names(&fields), vec!["Description__FR", "Description__IT"]);
        assert_eq!(fields[0].title, "Description (FR)");
        assert_eq!(fields[1].title, "Description (IT)");
        assert_eq!(fields[0].kind, FieldKind::TextArea);
    }

    #[test]
    fn test_translation_fields_filtered_by_locale() {
        let fields = manifest().translation_fields(
            "Page",
            None,
            Some(&Locale::new("IT")),
            &en(),
            &BasicScaffolder::new(),
        );

        assert_eq!(names(&fields), vec!["Title__IT", "Description__IT"]);
    }

    #[test]
    fn test_translation_fields_default_locale_filter_yields_nothing() {
        let fields = manifest().translation_fields(
            "Page",
            Some("Title"),
            Some(&en()),
            &en(),
            &BasicScaffolder::new(),
        );

        assert!(fields.is_empty());
    }

    #[test]
    fn test_translation_fields_uses_display_title() {
        let scaffolder = BasicScaffolder::new().with_title("Page", "Title", "Page title");
        let fields = manifest().translation_fields("Page", Some("Title"), None, &en(), &scaffolder);

        assert_eq!(fields[0].title, "Page title (FR)");
        assert_eq!(fields[0].name, "Title__FR");
    }

    #[test]
    fn test_translation_fields_unknown_entity_type_is_empty() {
        let fields = manifest().translation_fields("Product", None, None, &en(), &BasicScaffolder::new());
        assert!(fields.is_empty());
    }

    #[test]
    fn test_translation_fields_skips_malformed_keys() {
        let mut manifest = TranslationManifest::new();
        manifest.entries.insert(
            "Page".to_string(),
            ManifestEntry::from_fields(
                "Page",
                [
                    ("Title__FR".to_string(), FieldType::new("Varchar")),
                    ("Title".to_string(), FieldType::new("Varchar")),
                    ("Title__FR__x".to_string(), FieldType::new("Varchar")),
                ],
            ),
        );

        let fields = manifest.translation_fields("Page", None, None, &en(), &BasicScaffolder::new());
        assert_eq!(names(&fields), vec!["Title__FR"]);
    }
}
