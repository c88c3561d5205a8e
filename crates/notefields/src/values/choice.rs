//! Values chosen from a field's pick list or combo list.

use super::FieldValue;
use crate::field::PickList;

/// A value meant to come from a fixed pick list.
///
/// Text matching a list entry (ignoring case) adopts the entry's spelling.
/// Text that matches nothing is still kept, but [`PickValue::is_listed`]
/// reports false.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PickValue {
    value: String,
    listed: bool,
}

impl PickValue {
    pub fn parse(text: &str, list: Option<&PickList>) -> Self {
        let trimmed = text.trim();
        match list.and_then(|l| l.find(trimmed)) {
            Some(entry) => Self {
                value: entry.to_string(),
                listed: true,
            },
            None => Self {
                value: trimmed.to_string(),
                listed: false,
            },
        }
    }

    pub fn is_listed(&self) -> bool {
        self.listed
    }
}

impl FieldValue for PickValue {
    fn value(&self) -> &str {
        &self.value
    }

    fn sort_key(&self) -> String {
        self.value.to_lowercase()
    }
}

/// Free text whose past values are offered as suggestions.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ComboValue {
    value: String,
}

impl ComboValue {
    pub fn new(text: &str) -> Self {
        Self {
            value: text.trim().to_string(),
        }
    }
}

impl FieldValue for ComboValue {
    fn value(&self) -> &str {
        &self.value
    }

    fn sort_key(&self) -> String {
        self.value.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_adopts_list_spelling() {
        let list = PickList::from_options("Red, Green, Blue");
        let v = PickValue::parse(" green ", Some(&list));
        assert_eq!(v.value(), "Green");
        assert!(v.is_listed());
    }

    #[test]
    fn test_pick_keeps_unlisted_text() {
        let list = PickList::from_options("Red, Green");
        let v = PickValue::parse("Mauve", Some(&list));
        assert_eq!(v.value(), "Mauve");
        assert!(!v.is_listed());
        assert!(!PickValue::parse("Red", None).is_listed());
    }

    #[test]
    fn test_combo_trims() {
        let v = ComboValue::new("  Acme Corp ");
        assert_eq!(v.value(), "Acme Corp");
        assert_eq!(v.sort_key(), "acme corp");
    }
}
