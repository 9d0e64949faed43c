use thiserror::Error;

/// Errors surfaced by locale registration, manifest registration and the
/// translation mutators.
///
/// Startup problems (`Configuration`, `InvalidLocale`, `UnknownEntityType`)
/// are meant to abort initialization. Read-path lookups never return these;
/// they fall back instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TranslationError {
    /// Configuration is missing or inconsistent.
    #[error("translation configuration error: {0}")]
    Configuration(String),

    /// A locale was rejected by the locale authority.
    #[error("invalid locale '{locale}'")]
    InvalidLocale {
        /// The rejected input, verbatim.
        locale: String,
    },

    /// A key did not contain the translation delimiter.
    #[error("'{key}' is not a translation key")]
    MalformedKey { key: String },

    /// The schema provider does not know the entity type.
    #[error("unknown entity type '{entity_type}'")]
    UnknownEntityType { entity_type: String },

    /// The key is not part of the entity type's manifest.
    #[error("'{key}' is not a registered translation of '{entity_type}'")]
    UnknownTranslation { entity_type: String, key: String },

    /// A service was already installed process-wide.
    #[error("a translatable service is already installed")]
    AlreadyInstalled,
}

pub type Result<T> = std::result::Result<T, TranslationError>;
