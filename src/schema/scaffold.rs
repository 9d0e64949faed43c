use crate::schema::FieldType;
use serde::Serialize;
use std::collections::HashMap;

/// Widget family of an editable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    TextArea,
    HtmlEditor,
    Checkbox,
    Numeric,
    Date,
}

impl FieldKind {
    /// Pick a widget for a declared type; unknown types edit as plain text.
    pub fn for_type(field_type: &FieldType) -> Self {
        match field_type.name() {
            "Text" | "MultilineText" => FieldKind::TextArea,
            "HTMLText" | "HTMLVarchar" | "HTMLFragment" => FieldKind::HtmlEditor,
            "Boolean" => FieldKind::Checkbox,
            "Int" | "BigInt" | "Float" | "Double" | "Decimal" | "Currency" | "Percentage" => {
                FieldKind::Numeric
            }
            "Date" | "Datetime" | "Time" => FieldKind::Date,
            _ => FieldKind::Text,
        }
    }
}

/// An editable form field. `name` is the storage key the form writes back
/// to; `title` is the label shown to editors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    pub name: String,
    pub title: String,
    pub field_type: FieldType,
    pub kind: FieldKind,
}

/// Builds editable field descriptors for declared fields.
pub trait FieldScaffolder: Send + Sync {
    fn scaffold(&self, entity_type: &str, name: &str, field_type: &FieldType) -> FieldDescriptor;

    /// Label of a base field, before any locale suffix is added.
    fn display_title(&self, _entity_type: &str, base_field: &str) -> String {
        base_field.to_string()
    }
}

/// Scaffolder choosing widgets by type name, with optional per-field labels.
#[derive(Debug, Clone, Default)]
pub struct BasicScaffolder {
    titles: HashMap<(String, String), String>,
}

impl BasicScaffolder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Label `field` of `entity_type` as `title` instead of its name.
    pub fn with_title(mut self, entity_type: &str, field: &str, title: &str) -> Self {
        self.titles.insert(
            (entity_type.to_string(), field.to_string()),
            title.to_string(),
        );
        self
    }
}

impl FieldScaffolder for BasicScaffolder {
    fn scaffold(&self, entity_type: &str, name: &str, field_type: &FieldType) -> FieldDescriptor {
        FieldDescriptor {
            name: name.to_string(),
            title: self.display_title(entity_type, name),
            field_type: field_type.clone(),
            kind: FieldKind::for_type(field_type),
        }
    }

    fn display_title(&self, entity_type: &str, base_field: &str) -> String {
        self.titles
            .get(&(entity_type.to_string(), base_field.to_string()))
            .cloned()
            .unwrap_or_else(|| base_field.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_kind_for_known_types() {
        assert_eq!(FieldKind::for_type(&"Varchar(255)".into()), FieldKind::Text);
        assert_eq!(FieldKind::for_type(&"Text".into()), FieldKind::TextArea);
        assert_eq!(FieldKind::for_type(&"HTMLText".into()), FieldKind::HtmlEditor);
        assert_eq!(FieldKind::for_type(&"Boolean".into()), FieldKind::Checkbox);
        assert_eq!(FieldKind::for_type(&"Decimal(9,2)".into()), FieldKind::Numeric);
        assert_eq!(FieldKind::for_type(&"Datetime".into()), FieldKind::Date);
    }

    #[test]
    fn test_field_kind_unknown_type_is_text() {
        assert_eq!(FieldKind::for_type(&"Geometry".into()), FieldKind::Text);
    }

    #[test]
    fn test_basic_scaffolder_titles() {
        let scaffolder = BasicScaffolder::new().with_title("Page", "MenuTitle", "Navigation label");

        assert_eq!(scaffolder.display_title("Page", "MenuTitle"), "Navigation label");
        assert_eq!(scaffolder.display_title("Page", "Title"), "Title");
        assert_eq!(scaffolder.display_title("Product", "MenuTitle"), "MenuTitle");
    }

    #[test]
    fn test_basic_scaffolder_scaffold() {
        let field = BasicScaffolder::new().scaffold("Page", "Content", &"HTMLText".into());

        assert_eq!(field.name, "Content");
        assert_eq!(field.title, "Content");
        assert_eq!(field.kind, FieldKind::HtmlEditor);
    }
}
