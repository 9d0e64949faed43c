//! Per-locale shadow fields for record types.
//!
//! Register locales, then register entity types with the fields that should
//! be translatable. Every (field, locale) pair gets a shadow storage key
//! (`Title__FR`) carrying the base field's declared type. At render time,
//! [`Translatable::translate`] reads the active locale's value and falls back
//! to the base field; in editing UIs, [`Translatable::translation_fields`]
//! scaffolds one form field per non-default translation.
//!
//! ```rust,ignore
//! use translatable_fields::{Config, Record, StaticSchema, Translatable};
//!
//! let schema = StaticSchema::new().with_entity("Page", [("Title", "Varchar(255)")]);
//! let mut service = Translatable::builder(schema).build();
//! service.init(&Config::load()?)?;
//!
//! let page = Record::new("Page").with("Title", "Hello").with("Title__FR", "Bonjour");
//! let title = service.translate(&page, "Title");
//! ```

pub mod accessor;
pub mod config;
pub mod entity;
pub mod error;
pub mod i18n;
pub mod manifest;
pub mod schema;
pub mod translatable;

pub use config::{Config, EntityConfig};
pub use entity::{Entity, Record};
pub use error::{Result, TranslationError};
pub use i18n::{Locale, LocaleRegistry};
pub use manifest::{basename, locale_of, translation_key, ManifestEntry, TranslationManifest};
pub use schema::{FieldDescriptor, FieldType, StaticSchema};
pub use translatable::{Translatable, TranslatableBuilder};
