use crate::manifest::basename;
use crate::schema::FieldType;
use serde::{Deserialize, Serialize};

/// One shadow field: its storage key and the type copied from the base field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestField {
    pub key: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
}

/// Shadow fields of one entity type, in registration order (field-major,
/// then locale-minor).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    entity_type: String,
    base_fields: Vec<String>,
    fields: Vec<ManifestField>,
}

impl ManifestEntry {
    pub(crate) fn new(entity_type: &str) -> Self {
        Self {
            entity_type: entity_type.to_string(),
            ..Self::default()
        }
    }

    /// Build an entry from raw `(key, type)` pairs, e.g. when loading a
    /// manifest produced elsewhere. Keys are taken as given; base fields are
    /// collected from the keys that have a delimiter.
    pub fn from_fields<I>(entity_type: &str, fields: I) -> Self
    where
        I: IntoIterator<Item = (String, FieldType)>,
    {
        let mut entry = Self::new(entity_type);
        for (key, field_type) in fields {
            if let Ok(base) = basename(&key) {
                entry.note_base_field(base);
            }
            entry.fields.push(ManifestField { key, field_type });
        }
        entry
    }

    pub(crate) fn note_base_field(&mut self, base: &str) {
        if !self.base_fields.iter().any(|known| known == base) {
            self.base_fields.push(base.to_string());
        }
    }

    pub(crate) fn insert(&mut self, key: String, field_type: FieldType) {
        match self.fields.iter_mut().find(|field| field.key == key) {
            Some(existing) => existing.field_type = field_type,
            None => self.fields.push(ManifestField { key, field_type }),
        }
    }

    pub fn entity_type(&self) -> &str {
        &self.entity_type
    }

    /// Base fields that were declared on the schema and fanned out.
    pub fn base_fields(&self) -> &[String] {
        &self.base_fields
    }

    pub fn fields(&self) -> &[ManifestField] {
        &self.fields
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.iter().any(|field| field.key == key)
    }

    /// Declared type stored for `key`.
    pub fn field_type(&self, key: &str) -> Option<&FieldType> {
        self.fields
            .iter()
            .find(|field| field.key == key)
            .map(|field| &field.field_type)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_fields_collects_base_fields_in_order() {
        let entry = ManifestEntry::from_fields(
            "Page",
            [
                ("Title__FR".to_string(), FieldType::new("Varchar")),
                ("Title__IT".to_string(), FieldType::new("Varchar")),
                ("Content__FR".to_string(), FieldType::new("HTMLText")),
                ("junk".to_string(), FieldType::new("Varchar")),
            ],
        );

        assert_eq!(entry.entity_type(), "Page");
        assert_eq!(entry.base_fields(), ["Title".to_string(), "Content".to_string()]);
        assert_eq!(entry.len(), 4);
        assert_eq!(entry.field_type("Content__FR"), Some(&FieldType::new("HTMLText")));
    }

    #[test]
    fn test_insert_same_key_overwrites_type() {
        let mut entry = ManifestEntry::new("Page");
        entry.insert("Title__FR".to_string(), FieldType::new("Varchar"));
        entry.insert("Title__FR".to_string(), FieldType::new("Text"));

        assert_eq!(entry.len(), 1);
        assert_eq!(entry.field_type("Title__FR"), Some(&FieldType::new("Text")));
    }

    #[test]
    fn test_entry_json_shape() {
        let entry = ManifestEntry::from_fields(
            "Page",
            [("Title__FR".to_string(), FieldType::new("Varchar(255)"))],
        );

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["entity_type"], "Page");
        assert_eq!(json["fields"][0]["key"], "Title__FR");
        assert_eq!(json["fields"][0]["type"], "Varchar(255)");

        let back: ManifestEntry = serde_json::from_value(json).unwrap();
        assert_eq!(back, entry);
    }
}
