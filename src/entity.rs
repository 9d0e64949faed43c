//! Entity instances as seen by the translation layer.
//!
//! Entities own their values, shadow fields included. The layer only reads
//! and writes them by name.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Field access on a host record.
pub trait Entity {
    /// Name of the entity type, as registered with the manifest.
    fn entity_type(&self) -> &str;

    fn field(&self, name: &str) -> Option<&Value>;

    fn set_field(&mut self, name: &str, value: Value);
}

/// Whether a field value counts as filled in. Missing, `null` and empty
/// strings do not.
pub fn is_populated(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::String(text)) => !text.is_empty(),
        Some(_) => true,
    }
}

/// A plain in-memory entity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    entity_type: String,
    fields: BTreeMap<String, Value>,
}

impl Record {
    pub fn new(entity_type: &str) -> Self {
        Self {
            entity_type: entity_type.to_string(),
            fields: BTreeMap::new(),
        }
    }

    /// Builder-style setter.
    pub fn with(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(name.to_string(), value.into());
        self
    }

    pub fn fields(&self) -> &BTreeMap<String, Value> {
        &self.fields
    }
}

impl Entity for Record {
    fn entity_type(&self) -> &str {
        &self.entity_type
    }

    fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    fn set_field(&mut self, name: &str, value: Value) {
        self.fields.insert(name.to_string(), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_populated() {
        assert!(!is_populated(None));
        assert!(!is_populated(Some(&Value::Null)));
        assert!(!is_populated(Some(&json!(""))));
        assert!(is_populated(Some(&json!("Bonjour"))));
        assert!(is_populated(Some(&json!(0))));
        assert!(is_populated(Some(&json!(false))));
    }

    #[test]
    fn test_record_field_access() {
        let mut record = Record::new("Page").with("Title", "Hello");
        record.set_field("Title__FR", json!("Bonjour"));

        assert_eq!(record.entity_type(), "Page");
        assert_eq!(record.field("Title"), Some(&json!("Hello")));
        assert_eq!(record.field("Title__FR"), Some(&json!("Bonjour")));
        assert_eq!(record.field("Missing"), None);
        assert_eq!(record.fields().len(), 2);
    }
}
