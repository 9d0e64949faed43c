//! The translatable service: locales, manifest and collaborators in one
//! explicitly constructed object.
//!
//! Mutating operations (`init`, `add_locales`, `register`) take `&mut self`
//! and belong to startup. Once configured, the service is shared by
//! reference, optionally process-wide through [`Translatable::install`].

use crate::accessor;
use crate::config::Config;
use crate::entity::Entity;
use crate::error::{Result, TranslationError};
use crate::i18n::{Locale, LocaleAuthority, LocaleContext, LocaleRegistry, PatternLocaleAuthority};
use crate::manifest::{ManifestEntry, TranslationManifest};
use crate::schema::{
    BasicScaffolder, FieldDescriptor, FieldScaffolder, NoopSink, SchemaExtensionSink, SchemaProvider,
};
use serde_json::Value;
use std::sync::OnceLock;
use tracing::info;

/// Process-wide service slot (set once, after startup)
static INSTALLED: OnceLock<Translatable> = OnceLock::new();

/// Field-translation service.
///
/// Owns the locale registry, the translation manifest and the default
/// locale, plus the collaborators that validate locales, describe the
/// schema, receive shadow-field grants, scaffold form fields and report the
/// active locale. Build one with [`Translatable::builder`], configure it with
/// [`Translatable::init`], then share it by reference.
pub struct Translatable {
    locales: LocaleRegistry,
    manifest: TranslationManifest,
    default_locale: Option<Locale>,
    authority: Box<dyn LocaleAuthority>,
    schema: Box<dyn SchemaProvider>,
    sink: Box<dyn SchemaExtensionSink>,
    scaffolder: Box<dyn FieldScaffolder>,
    context: Option<Box<dyn LocaleContext>>,
}

/// Builds a [`Translatable`]. Only the schema provider is required.
pub struct TranslatableBuilder {
    authority: Box<dyn LocaleAuthority>,
    schema: Box<dyn SchemaProvider>,
    sink: Box<dyn SchemaExtensionSink>,
    scaffolder: Box<dyn FieldScaffolder>,
    context: Option<Box<dyn LocaleContext>>,
}

impl TranslatableBuilder {
    /// Replace the locale authority (default: [`PatternLocaleAuthority`]).
    pub fn authority(mut self, authority: impl LocaleAuthority + 'static) -> Self {
        self.authority = Box::new(authority);
        self
    }

    /// Replace the schema-extension sink (default: [`NoopSink`]).
    pub fn sink(mut self, sink: impl SchemaExtensionSink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    /// Replace the form-field scaffolder (default: [`BasicScaffolder`]).
    pub fn scaffolder(mut self, scaffolder: impl FieldScaffolder + 'static) -> Self {
        self.scaffolder = Box::new(scaffolder);
        self
    }

    /// Where the active locale comes from. Without one, the default locale
    /// is treated as active.
    pub fn locale_context(mut self, context: impl LocaleContext + 'static) -> Self {
        self.context = Some(Box::new(context));
        self
    }

    /// Finish the service. It starts without locales or entity types;
    /// call [`Translatable::init`] or the registration methods next.
    pub fn build(self) -> Translatable {
        Translatable {
            locales: LocaleRegistry::new(),
            manifest: TranslationManifest::new(),
            default_locale: None,
            authority: self.authority,
            schema: self.schema,
            sink: self.sink,
            scaffolder: self.scaffolder,
            context: self.context,
        }
    }
}

impl Translatable {
    /// Start building a service over `schema`, with the regex locale
    /// authority, a no-op sink and the basic scaffolder.
    pub fn builder(schema: impl SchemaProvider + 'static) -> TranslatableBuilder {
        TranslatableBuilder {
            authority: Box::new(PatternLocaleAuthority::new()),
            schema: Box::new(schema),
            sink: Box::new(NoopSink),
            scaffolder: Box::new(BasicScaffolder::new()),
            context: None,
        }
    }

    /// Apply `config`: admit its locales, set the default locale and
    /// register every configured entity type.
    ///
    /// Re-entrant: locales are admitted idempotently and entity types are
    /// re-registered (replaced), so running it twice with the same config
    /// leaves the same state.
    ///
    /// # Errors
    /// The first configuration, locale or entity-type error. Entity types
    /// registered before the failure stay registered.
    pub fn init(&mut self, config: &Config) -> Result<()> {
        self.add_locales(&config.locales)?;

        if let Some(default_locale) = config.default_locale() {
            self.set_default_locale(default_locale)?;
        }

        for entity in &config.entities {
            self.register(&entity.entity_type, &entity.fields)?;
        }

        info!(
            locales = self.locales.len(),
            entity_types = config.entities.len(),
            default_locale = ?self.default_locale().map(Locale::as_str),
            "Translatable fields initialized"
        );
        Ok(())
    }

    /// See [`LocaleRegistry::add_locales`].
    pub fn add_locales<I, S>(&mut self, locales: I) -> Result<usize>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.locales.add_locales(locales, self.authority.as_ref())
    }

    /// See [`LocaleRegistry::add_languages`].
    pub fn add_languages<I, S>(&mut self, codes: I) -> Result<Vec<Locale>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.locales.add_languages(codes, self.authority.as_ref())
    }

    /// Set the locale served by base fields.
    ///
    /// # Errors
    /// `InvalidLocale` if the authority rejects it.
    pub fn set_default_locale(&mut self, locale: &str) -> Result<()> {
        if !self.authority.validate(locale) {
            return Err(TranslationError::InvalidLocale {
                locale: locale.to_string(),
            });
        }
        self.default_locale = Some(Locale::new(locale));
        Ok(())
    }

    /// See [`TranslationManifest::register`]. Fields are fanned out over the
    /// locales admitted so far.
    pub fn register<S: AsRef<str>>(
        &mut self,
        entity_type: &str,
        base_fields: &[S],
    ) -> Result<&ManifestEntry> {
        self.manifest.register(
            entity_type,
            base_fields,
            &self.locales,
            self.schema.as_ref(),
            self.sink.as_ref(),
        )
    }

    /// Get the admitted locales.
    pub fn locales(&self) -> &LocaleRegistry {
        &self.locales
    }

    /// Get the manifest of registered entity types.
    pub fn manifest(&self) -> &TranslationManifest {
        &self.manifest
    }

    /// The configured default locale, or the first admitted locale.
    pub fn default_locale(&self) -> Option<&Locale> {
        self.default_locale
            .as_ref()
            .or_else(|| self.locales.all_locales().first())
    }

    /// The active locale: the context's answer, or the default locale.
    pub fn current_locale(&self) -> Option<Locale> {
        match &self.context {
            Some(context) => Some(context.current_locale()),
            None => self.default_locale().cloned(),
        }
    }

    /// Value of `base` for the active locale, falling back to the base field.
    pub fn translate<'a, E>(&self, entity: &'a E, base: &str) -> Option<&'a Value>
    where
        E: Entity + ?Sized,
    {
        match self.current_locale() {
            Some(locale) => accessor::translated_value(entity, base, &locale),
            None => entity.field(base),
        }
    }

    /// Value of `base` for `locale`, falling back to the base field.
    pub fn translation<'a, E>(&self, entity: &'a E, base: &str, locale: &Locale) -> Option<&'a Value>
    where
        E: Entity + ?Sized,
    {
        accessor::translated_value(entity, base, locale)
    }

    /// See [`accessor::set_translation`].
    pub fn set_translation<E>(&self, entity: &mut E, base: &str, locale: &Locale, value: Value) -> Result<()>
    where
        E: Entity + ?Sized,
    {
        accessor::set_translation(&self.manifest, entity, base, locale, value)
    }

    /// Editable fields for the non-default translations of `entity_type`,
    /// optionally narrowed to one base field and/or one locale.
    ///
    /// Without any default locale (nothing admitted yet) there is nothing to
    /// enumerate.
    pub fn translation_fields(
        &self,
        entity_type: &str,
        base_field: Option<&str>,
        locale: Option<&Locale>,
    ) -> Vec<FieldDescriptor> {
        let Some(default_locale) = self.default_locale() else {
            return Vec::new();
        };

        self.manifest.translation_fields(
            entity_type,
            base_field,
            locale,
            default_locale,
            self.scaffolder.as_ref(),
        )
    }

    /// Move a configured service into the process-wide slot.
    ///
    /// # Errors
    /// `AlreadyInstalled` if a service was installed before.
    pub fn install(self) -> Result<&'static Translatable> {
        INSTALLED
            .set(self)
            .map_err(|_| TranslationError::AlreadyInstalled)?;
        INSTALLED.get().ok_or(TranslationError::AlreadyInstalled)
    }

    /// The installed service, if any.
    pub fn global() -> Option<&'static Translatable> {
        INSTALLED.get()
    }
}
