//! # Field Types
//!
//! A field's type decides how its text is parsed, sorted and written back.
//! Types are plain descriptors kept in one ordered registry,
//! [`FIELD_TYPES`]. A label is matched against the registry in order and the
//! first type that accepts it wins, so specific types come before general
//! ones and the plain `string` type closes the list.
//!
//! A type accepts a label when the label's common form is one of the type's
//! aliases (`author` also answers to `by`, `creator` and `authors`), or ends
//! with the type's suffix (`Due Date` is a date, `Home Page URL` a link).
//! Some types (`boolean`, `int`, `pick`, `combo`, ...) have no aliases and are
//! only reached through an explicit type hint; see [`TypeHint`].

mod catalog;
mod hint;

pub use catalog::{assign_type, TypeCatalog};
pub use hint::TypeHint;

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::values::ValueKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldType {
    /// Identity of the type, also what a type hint names (`"date"`)
    pub type_string: &'static str,

    /// The parser behind the type
    pub kind: ValueKind,

    /// Preferred spelling of the type's main label (`"Date Added"`)
    pub proper_label: &'static str,

    /// Common-form labels this type claims
    pub aliases: &'static [&'static str],

    /// Common-form suffix that also claims a label
    pub suffix: Option<&'static str>,

    /// Whether people edit the field, as opposed to the engine maintaining it
    pub user_editable: bool,

    /// Whether the value spans several lines
    pub text_block: bool,
}

impl FieldType {
    const fn new(type_string: &'static str, kind: ValueKind, proper_label: &'static str) -> Self {
        Self {
            type_string,
            kind,
            proper_label,
            aliases: &[],
            suffix: None,
            user_editable: true,
            text_block: false,
        }
    }

    const fn aliases(mut self, aliases: &'static [&'static str]) -> Self {
        self.aliases = aliases;
        self
    }

    const fn suffix(mut self, suffix: &'static str) -> Self {
        self.suffix = Some(suffix);
        self
    }

    const fn text_block(mut self) -> Self {
        self.text_block = true;
        self
    }

    const fn maintained(mut self) -> Self {
        self.user_editable = false;
        self
    }

    /// Whether this type claims a label, given the label's common form.
    pub fn applies_to(&self, common: &str) -> bool {
        if common.is_empty() {
            return false;
        }
        self.aliases.contains(&common)
            || self
                .suffix
                .is_some_and(|suffix| common.len() > suffix.len() && common.ends_with(suffix))
    }

    /// The common form of the type's main label.
    pub fn common_label(&self) -> String {
        crate::label::common_form(self.proper_label)
    }
}

/// The registry, in matching order.
pub const FIELD_TYPES: &[FieldType] = &[
    FieldType::new("title", ValueKind::Title, "Title").aliases(&["title"]),
    FieldType::new("tags", ValueKind::Tags, "Tags")
        .aliases(&["tags", "tag", "keywords", "category", "categories"]),
    FieldType::new("link", ValueKind::Link, "Link")
        .aliases(&["link", "url", "website"])
        .suffix("url"),
    FieldType::new("body", ValueKind::LongText, "Body")
        .aliases(&["body"])
        .text_block(),
    // Stamps must precede the generic date type.
    FieldType::new("dateadded", ValueKind::Stamp, "Date Added")
        .aliases(&["dateadded", "added", "created"])
        .maintained(),
    FieldType::new("datemodified", ValueKind::Stamp, "Date Modified")
        .aliases(&["datemodified", "modified", "updated"])
        .maintained(),
    FieldType::new("date", ValueKind::Date, "Date")
        .aliases(&["date"])
        .suffix("date"),
    FieldType::new("timeofday", ValueKind::TimeOfDay, "Time of Day").aliases(&["time", "timeofday"]),
    FieldType::new("seq", ValueKind::Seq, "Seq")
        .aliases(&["seq", "sequence", "rev", "revision", "version"]),
    FieldType::new("status", ValueKind::Status, "Status").aliases(&["status"]),
    FieldType::new("rank", ValueKind::Rank, "Rank").aliases(&["rank", "priority"]),
    FieldType::new("level", ValueKind::Level, "Level").aliases(&["level"]),
    FieldType::new("index", ValueKind::Index, "Index").aliases(&["index", "indexterms"]),
    FieldType::new("author", ValueKind::Author, "Author")
        .aliases(&["author", "authors", "by", "creator"]),
    FieldType::new("artist", ValueKind::Author, "Artist").aliases(&["artist"]),
    FieldType::new("backlinks", ValueKind::NoteLinks, "Backlinks")
        .aliases(&["backlinks"])
        .maintained(),
    FieldType::new("wikilinks", ValueKind::NoteLinks, "Wiki Links")
        .aliases(&["wikilinks"])
        .maintained(),
    FieldType::new("klass", ValueKind::Klass, "Class").aliases(&["class", "klass"]),
    FieldType::new("rating", ValueKind::Rating, "Rating").aliases(&["rating"]),
    FieldType::new("boolean", ValueKind::Boolean, "Boolean"),
    FieldType::new("int", ValueKind::Integer, "Integer"),
    FieldType::new("minutestoread", ValueKind::Integer, "Minutes to Read")
        .aliases(&["minutestoread"])
        .maintained(),
    FieldType::new("email", ValueKind::Email, "Email").aliases(&["email", "emailaddress"]),
    FieldType::new("phone", ValueKind::Phone, "Phone").aliases(&["phone", "phonenumber"]),
    FieldType::new("address", ValueKind::Text, "Address").aliases(&["address"]),
    FieldType::new("teaser", ValueKind::LongText, "Teaser")
        .aliases(&["teaser"])
        .text_block(),
    FieldType::new("longtext", ValueKind::LongText, "Long Text").text_block(),
    FieldType::new("code", ValueKind::LongText, "Code")
        .aliases(&["code"])
        .text_block(),
    FieldType::new("label", ValueKind::Text, "Label"),
    FieldType::new("pick", ValueKind::Pick, "Pick"),
    FieldType::new("combo", ValueKind::Combo, "Combo"),
    FieldType::new("shortid", ValueKind::Text, "Short ID").aliases(&["shortid"]),
    FieldType::new("worktitle", ValueKind::Text, "Work Title").aliases(&["worktitle"]),
    FieldType::new("worktype", ValueKind::Text, "Work Type").aliases(&["worktype"]),
    FieldType::new("imagename", ValueKind::Text, "Image Name").aliases(&["imagename", "image"]),
    FieldType::new("recurs", ValueKind::Text, "Recurs").aliases(&["recurs"]),
    FieldType::new("pagestyle", ValueKind::Text, "Page Style").aliases(&["pagestyle"]),
    FieldType::new("attribution", ValueKind::LongText, "Attribution")
        .aliases(&["attribution"])
        .text_block(),
    FieldType::new("string", ValueKind::Text, "String"),
];

/// The fallback type.
pub fn string_type() -> &'static FieldType {
    &FIELD_TYPES[FIELD_TYPES.len() - 1]
}

/// The type named `type_string`, or the string type when no type has that name.
pub fn type_for_string(type_string: &str) -> &'static FieldType {
    find_type(type_string).unwrap_or_else(string_type)
}

static TYPES_BY_NAME: Lazy<HashMap<&'static str, &'static FieldType>> =
    Lazy::new(|| FIELD_TYPES.iter().map(|t| (t.type_string, t)).collect());

/// The type named `type_string`, if any.
pub fn find_type(type_string: &str) -> Option<&'static FieldType> {
    TYPES_BY_NAME.get(type_string).copied()
}

/// The first type claiming a label's common form.
pub fn type_for_label(common: &str) -> Option<&'static FieldType> {
    FIELD_TYPES.iter().find(|t| t.applies_to(common))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_strings_are_unique() {
        for (i, t) in FIELD_TYPES.iter().enumerate() {
            assert!(
                FIELD_TYPES[i + 1..].iter().all(|o| o.type_string != t.type_string),
                "duplicate type {}",
                t.type_string
            );
        }
    }

    #[test]
    fn test_string_closes_the_registry() {
        assert_eq!(string_type().type_string, "string");
        assert_eq!(string_type().kind, ValueKind::Text);
    }

    #[test]
    fn test_aliases_match() {
        assert_eq!(type_for_label("by").map(|t| t.type_string), Some("author"));
        assert_eq!(type_for_label("priority").map(|t| t.type_string), Some("rank"));
        assert_eq!(type_for_label("keywords").map(|t| t.type_string), Some("tags"));
        assert_eq!(type_for_label("class").map(|t| t.type_string), Some("klass"));
    }

    #[test]
    fn test_suffixes_match() {
        assert_eq!(type_for_label("duedate").map(|t| t.type_string), Some("date"));
        assert_eq!(type_for_label("homepageurl").map(|t| t.type_string), Some("link"));
        assert_eq!(type_for_label("dateadded").map(|t| t.type_string), Some("dateadded"));
    }

    #[test]
    fn test_hint_only_types_claim_no_labels() {
        for name in ["boolean", "int", "pick", "combo", "longtext", "label", "string"] {
            let t = find_type(name).unwrap();
            assert!(!t.applies_to(name), "{name} should be hint-only");
        }
        assert!(type_for_label("notes").is_none());
    }

    #[test]
    fn test_unknown_type_string_falls_back() {
        assert_eq!(type_for_string("nonsense").type_string, "string");
        assert_eq!(type_for_string("seq").kind, ValueKind::Seq);
    }

    #[test]
    fn test_maintained_types() {
        assert!(!type_for_string("dateadded").user_editable);
        assert!(type_for_string("date").user_editable);
        assert!(type_for_string("body").text_block);
        assert_eq!(type_for_string("dateadded").common_label(), "dateadded");
    }
}
