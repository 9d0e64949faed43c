//! Translation manifest: which shadow fields exist for which entity types.
//!
//! - `key`: deriving and splitting `field__locale` keys
//! - `entry`: `ManifestEntry`, the shadow fields of one entity type
//! - `registry`: `TranslationManifest` and entity-type registration
//! - `fields`: form-field enumeration over a manifest entry

mod entry;
mod fields;
mod key;
mod registry;

pub use entry::{ManifestEntry, ManifestField};
pub use key::{basename, is_translation_key, locale_of, translation_key, DELIMITER};
pub(crate) use key::{is_key_base, is_key_locale};
pub use registry::TranslationManifest;
