use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Declared value type of a field, e.g. `Varchar(255)` or `HTMLText`.
///
/// Opaque to the translation layer: it is copied verbatim onto every locale
/// variant of the field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldType(String);

impl FieldType {
    pub fn new(declared: impl Into<String>) -> Self {
        FieldType(declared.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The type name without arguments: `Varchar(255)` -> `Varchar`.
    pub fn name(&self) -> &str {
        self.0
            .split_once('(')
            .map_or(self.0.as_str(), |(name, _)| name)
            .trim()
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FieldType {
    fn from(declared: &str) -> Self {
        FieldType::new(declared)
    }
}

/// Answers "what does entity type X declare for field F".
///
/// Consulted at registration time only, never on the read path.
pub trait SchemaProvider: Send + Sync {
    /// Whether the entity type exists at all.
    fn has_entity_type(&self, entity_type: &str) -> bool;

    /// Declared type of `field`, or `None` if the type does not declare it.
    fn declared_field_type(&self, entity_type: &str, field: &str) -> Option<FieldType>;
}

/// In-memory schema, built up front.
///
/// ```rust,ignore
/// let schema = StaticSchema::new()
///     .with_entity("Page", [("Title", "Varchar(255)"), ("Content", "HTMLText")]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticSchema {
    entities: HashMap<String, HashMap<String, FieldType>>,
}

impl StaticSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare an entity type with its fields. Declaring the same type again
    /// adds to its fields.
    pub fn with_entity<I, F, T>(mut self, entity_type: &str, fields: I) -> Self
    where
        I: IntoIterator<Item = (F, T)>,
        F: Into<String>,
        T: Into<FieldType>,
    {
        let declared = self.entities.entry(entity_type.to_string()).or_default();
        for (field, field_type) in fields {
            declared.insert(field.into(), field_type.into());
        }
        self
    }
}

impl SchemaProvider for StaticSchema {
    fn has_entity_type(&self, entity_type: &str) -> bool {
        self.entities.contains_key(entity_type)
    }

    fn declared_field_type(&self, entity_type: &str, field: &str) -> Option<FieldType> {
        self.entities.get(entity_type)?.get(field).cloned()
    }
}
