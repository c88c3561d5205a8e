//! Explicit type hints.
//!
//! A hint names a type and may carry options after a colon:
//!
//! | Hint | Type | Options |
//! |------|------|---------|
//! | `date` | date | none |
//! | `Pick: Red, Green, Blue` | pick | the pick list entries |
//! | `picklist` | pick | none |
//! | `integer` | int | none |

use super::{find_type, FieldType};
use crate::label::common_form;

/// Alternate spellings accepted in hints.
const HINT_SYNONYMS: &[(&str, &str)] = &[
    ("picklist", "pick"),
    ("combolist", "combo"),
    ("integer", "int"),
    ("number", "int"),
    ("bool", "boolean"),
    ("checkbox", "boolean"),
    ("text", "longtext"),
    ("class", "klass"),
    ("url", "link"),
    ("sequence", "seq"),
    ("time", "timeofday"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeHint {
    name: String,
    options: Option<String>,
}

impl TypeHint {
    /// Returns `None` for a blank hint.
    pub fn parse(text: &str) -> Option<Self> {
        let (name, options) = match text.split_once(':') {
            Some((name, options)) => (name, Some(options.trim())),
            None => (text, None),
        };
        let name = common_form(name);
        if name.is_empty() {
            return None;
        }
        let name = HINT_SYNONYMS
            .iter()
            .find(|(synonym, _)| *synonym == name)
            .map(|(_, target)| target.to_string())
            .unwrap_or(name);
        Some(Self {
            name,
            options: options.filter(|o| !o.is_empty()).map(str::to_string),
        })
    }

    /// The hinted type string in common form.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn options(&self) -> Option<&str> {
        self.options.as_deref()
    }

    /// The registered type the hint names, if any.
    pub fn field_type(&self) -> Option<&'static FieldType> {
        find_type(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_hint() {
        let hint = TypeHint::parse(" Date ").unwrap();
        assert_eq!(hint.name(), "date");
        assert_eq!(hint.options(), None);
        assert_eq!(hint.field_type().map(|t| t.type_string), Some("date"));
    }

    #[test]
    fn test_hint_with_options() {
        let hint = TypeHint::parse("Pick: Red, Green, Blue").unwrap();
        assert_eq!(hint.name(), "pick");
        assert_eq!(hint.options(), Some("Red, Green, Blue"));
    }

    #[test]
    fn test_synonyms() {
        assert_eq!(TypeHint::parse("picklist").unwrap().name(), "pick");
        assert_eq!(TypeHint::parse("Integer").unwrap().name(), "int");
        assert_eq!(TypeHint::parse("bool").unwrap().name(), "boolean");
    }

    #[test]
    fn test_blank_and_unknown_hints() {
        assert!(TypeHint::parse("  ").is_none());
        assert!(TypeHint::parse(": a, b").is_none());
        let hint = TypeHint::parse("gizmo").unwrap();
        assert!(hint.field_type().is_none());
    }
}
