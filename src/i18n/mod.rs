//! Locale handling: validated identifiers, the locale registry and the
//! collaborators that validate locales and report the active one.
//!
//! # Architecture
//!
//! - `locale`: the `Locale` identifier type
//! - `authority`: `LocaleAuthority` trait plus a regex-backed default
//! - `registry`: `LocaleRegistry`, the insertion-ordered set of admitted locales
//! - `context`: `LocaleContext`, the source of the currently active locale
//!
//! # Example
//!
//! ```rust,ignore
//! use translatable_fields::i18n::{LocaleRegistry, PatternLocaleAuthority};
//!
//! let mut registry = LocaleRegistry::new();
//! registry.add_locales(["EN", "FR", "IT"], &PatternLocaleAuthority::new())?;
//! assert_eq!(registry.len(), 3);
//! ```

mod authority;
mod context;
mod locale;
mod registry;

pub use authority::{LocaleAuthority, PatternLocaleAuthority};
pub use context::{FixedLocale, LocaleContext};
pub use locale::Locale;
pub use registry::LocaleRegistry;
