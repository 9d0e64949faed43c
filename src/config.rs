use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Translatable fields of one entity type.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EntityConfig {
    pub entity_type: String,
    pub fields: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    // Locales translations are generated for
    pub locales: Vec<String>,

    // Locale served by the base fields; the first locale when unset
    #[serde(default)]
    pub default_locale: Option<String>,

    // Entity types and their translatable fields
    #[serde(default)]
    pub entities: Vec<EntityConfig>,
}

impl Config {
    /// Load a `.env` file if one exists, then read the environment.
    pub fn load() -> Result<Self> {
        // Missing .env is fine; the process environment may carry everything
        let _ = dotenvy::dotenv();
        Self::from_env()
    }

    /// Read `TRANSLATABLE_LOCALES`, `TRANSLATABLE_DEFAULT_LOCALE` and
    /// `TRANSLATABLE_ENTITIES` from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the same variables from a `.env`-style file without touching the
    /// process environment.
    pub fn from_env_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let vars = dotenvy::from_path_iter(path)
            .with_context(|| format!("Failed to open {}", path.display()))?
            .collect::<std::result::Result<HashMap<String, String>, _>>()
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        Self::from_lookup(|key| vars.get(key).cloned())
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: Config =
            serde_json::from_str(json).context("Failed to parse translation config JSON")?;
        if config.locales.is_empty() {
            bail!("Translation config must list at least one locale");
        }
        Ok(config)
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let locales = split_list(
            &lookup("TRANSLATABLE_LOCALES").context("TRANSLATABLE_LOCALES not set")?,
            ',',
        );
        if locales.is_empty() {
            bail!("TRANSLATABLE_LOCALES is empty");
        }

        Ok(Self {
            locales,
            default_locale: lookup("TRANSLATABLE_DEFAULT_LOCALE")
                .map(|locale| locale.trim().to_string())
                .filter(|locale| !locale.is_empty()),
            entities: match lookup("TRANSLATABLE_ENTITIES") {
                Some(value) => parse_entities(&value).context("Invalid TRANSLATABLE_ENTITIES")?,
                None => Vec::new(),
            },
        })
    }

    /// The configured default locale, or the first listed locale.
    pub fn default_locale(&self) -> Option<&str> {
        self.default_locale
            .as_deref()
            .or_else(|| self.locales.first().map(String::as_str))
    }
}

/// Parse `Page=Title,Content;Product=Name`.
fn parse_entities(value: &str) -> Result<Vec<EntityConfig>> {
    let mut entities = Vec::new();
    for item in value.split(';').map(str::trim).filter(|item| !item.is_empty()) {
        let Some((entity_type, fields)) = item.split_once('=') else {
            bail!("Expected `Type=Field,...`, got '{}'", item);
        };

        let entity_type = entity_type.trim();
        if entity_type.is_empty() {
            bail!("Missing entity type in '{}'", item);
        }

        let fields = split_list(fields, ',');
        if fields.is_empty() {
            bail!("No fields listed for '{}'", entity_type);
        }

        entities.push(EntityConfig {
            entity_type: entity_type.to_string(),
            fields,
        });
    }
    Ok(entities)
}

fn split_list(value: &str, separator: char) -> Vec<String> {
    value
        .split(separator)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
