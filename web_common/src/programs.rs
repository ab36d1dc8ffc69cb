//! Program records as served by `/programs` and submitted back by the page form.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::WidgetError;

/// Id of the HTML form every card field belongs to.
pub const FORM_ID: &str = "programs";

/// Metadata for one radio show.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Program {
    pub name: String,
    /// Podcast feed URL.
    pub rss: String,
    pub image: String,
    pub description: String,
    pub category: String,
}

impl Program {
    /// Value of a record field. `Key` is not part of the record and reads as empty.
    pub fn field(&self, field: ProgramField) -> &str {
        match field {
            ProgramField::Key => "",
            ProgramField::Name => &self.name,
            ProgramField::Category => &self.category,
            ProgramField::Description => &self.description,
            ProgramField::Rss => &self.rss,
            ProgramField::Image => &self.image,
        }
    }

    fn field_mut(&mut self, field: ProgramField) -> Option<&mut String> {
        match field {
            ProgramField::Key => None,
            ProgramField::Name => Some(&mut self.name),
            ProgramField::Category => Some(&mut self.category),
            ProgramField::Description => Some(&mut self.description),
            ProgramField::Rss => Some(&mut self.rss),
            ProgramField::Image => Some(&mut self.image),
        }
    }

    /// Overwrite a record field. Returns false for `Key`.
    pub fn set_field(&mut self, field: ProgramField, value: String) -> bool {
        match self.field_mut(field) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }
}

/// Editable fields of a card, including the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProgramField {
    Key,
    Name,
    Category,
    Description,
    Rss,
    Image,
}

impl ProgramField {
    /// Fields shown in a card's collapsible detail section, top to bottom.
    pub const DETAILS: [ProgramField; 5] = [
        ProgramField::Name,
        ProgramField::Category,
        ProgramField::Description,
        ProgramField::Rss,
        ProgramField::Image,
    ];

    /// Order in which a card's fields appear in the submitted form.
    pub const FORM_ORDER: [ProgramField; 6] = [
        ProgramField::Key,
        ProgramField::Name,
        ProgramField::Category,
        ProgramField::Description,
        ProgramField::Rss,
        ProgramField::Image,
    ];

    /// Repeated-array form name the server reads, e.g. `programs[][rss]`.
    pub fn form_name(self) -> &'static str {
        match self {
            ProgramField::Key => "programs[][key]",
            ProgramField::Name => "programs[][name]",
            ProgramField::Category => "programs[][category]",
            ProgramField::Description => "programs[][description]",
            ProgramField::Rss => "programs[][rss]",
            ProgramField::Image => "programs[][image]",
        }
    }

    /// Rendered as a textarea rather than a single-line input.
    pub fn is_multiline(self) -> bool {
        matches!(self, ProgramField::Description)
    }
}

/// Programs keyed by program id, in the order the server sent them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProgramCollection(IndexMap<String, Program>);

impl ProgramCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode the `/programs` body.
    pub fn from_json(body: &str) -> Result<Self, WidgetError> {
        serde_json::from_str(body).map_err(|e| WidgetError::Decode(e.to_string()))
    }

    /// Add a record by hand; the page itself only builds collections from JSON.
    pub fn insert(&mut self, key: impl Into<String>, program: Program) -> Option<Program> {
        self.0.insert(key.into(), program)
    }

    pub fn get(&self, key: &str) -> Option<&Program> {
        self.0.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Program)> {
        self.0.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_keeps_server_order() {
        let body = r#"{
            "zeta": {"name": "Z", "rss": "", "image": "", "description": "", "category": ""},
            "alfa": {"name": "A", "rss": "", "image": "", "description": "", "category": ""},
            "morgon": {"name": "Morgonpasset", "rss": "", "image": "", "description": "", "category": ""}
        }"#;
        let programs = ProgramCollection::from_json(body).unwrap();
        let keys: Vec<&str> = programs.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["zeta", "alfa", "morgon"]);
    }

    #[test]
    fn test_missing_fields_decode_as_empty() {
        let programs = ProgramCollection::from_json(r#"{"morgon": {"name": "Morgonpasset"}}"#).unwrap();
        let program = programs.get("morgon").unwrap();
        assert_eq!(program.name, "Morgonpasset");
        assert_eq!(program.rss, "");
        assert_eq!(program.category, "");
    }

    #[test]
    fn test_invalid_json_is_decode_error() {
        let result = ProgramCollection::from_json("<html>oops</html>");
        assert!(matches!(result, Err(WidgetError::Decode(_))));
    }

    #[test]
    fn test_key_is_not_a_record_field() {
        let mut program = Program::default();
        assert!(!program.set_field(ProgramField::Key, "morgon".to_string()));
        assert!(program.set_field(ProgramField::Rss, "http://example.org/feed".to_string()));
        assert_eq!(program.field(ProgramField::Rss), "http://example.org/feed");
        assert_eq!(program.field(ProgramField::Key), "");
    }

    #[test]
    fn test_only_description_is_multiline() {
        let multiline: Vec<ProgramField> = ProgramField::FORM_ORDER
            .into_iter()
            .filter(|f| f.is_multiline())
            .collect();
        assert_eq!(multiline, vec![ProgramField::Description]);
    }
}
