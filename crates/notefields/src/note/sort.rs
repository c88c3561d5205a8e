//! Note ordering.
//!
//! A collection sorts its notes by one of fifteen named policies
//! ([`SortParm`]). Each named policy builds a note's sort key by
//! concatenating the sort keys of one to four role fields, in a fixed order.
//! Each component key is closed by `\u{1}`, which sorts below any printable
//! character, so a short tag or klass orders before a longer one it prefixes
//! (`a` before `ab`) whatever the components after it.
//!
//! | Policy | Components |
//! |--------|------------|
//! | `title` | title |
//! | `seq-plus-title` | seq, title |
//! | `tasks-by-date` | done flag, date, seq, title |
//! | `tasks-by-seq` | done flag, seq, date, title |
//! | `tags-plus-title` | tags, title |
//! | `author` | author, date, title |
//! | `tags-plus-seq` | tags, seq, title |
//! | `custom` | the collection's sort fields |
//! | `date-added` | date added, title |
//! | `date-modified` | date modified, title |
//! | `date-plus-seq` | date, seq, title |
//! | `rank-seq-title` | rank, seq, title |
//! | `klass-title` | klass, title |
//! | `klass-date-title` | klass, date, title |
//! | `klass-seq-title` | klass, seq, title |
//!
//! The done flag is `1` for notes whose status counts as done, so open tasks
//! come first. The `custom` policy compares field by field instead, each
//! field ascending or descending, stopping at the first difference.

use std::cmp::Ordering;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Note;
use crate::collection::{CollectionSchema, NoteCollection};
use crate::error::FieldError;
use crate::label::common_form;
use crate::values::FieldValue;

/// Closes each component of a composite sort key.
const COMPONENT_END: char = '\u{1}';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortParm {
    #[default]
    Title,
    SeqPlusTitle,
    TasksByDate,
    TasksBySeq,
    TagsPlusTitle,
    Author,
    TagsPlusSeq,
    Custom,
    DateAdded,
    DateModified,
    DatePlusSeq,
    RankSeqTitle,
    KlassTitle,
    KlassDateTitle,
    KlassSeqTitle,
}

/// A role field that can take part in a sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Component {
    Title,
    Seq,
    Date,
    Done,
    Tags,
    Author,
    DateAdded,
    DateModified,
    Rank,
    Klass,
}

impl SortParm {
    pub const ALL: [SortParm; 15] = [
        SortParm::Title,
        SortParm::SeqPlusTitle,
        SortParm::TasksByDate,
        SortParm::TasksBySeq,
        SortParm::TagsPlusTitle,
        SortParm::Author,
        SortParm::TagsPlusSeq,
        SortParm::Custom,
        SortParm::DateAdded,
        SortParm::DateModified,
        SortParm::DatePlusSeq,
        SortParm::RankSeqTitle,
        SortParm::KlassTitle,
        SortParm::KlassDateTitle,
        SortParm::KlassSeqTitle,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SortParm::Title => "title",
            SortParm::SeqPlusTitle => "seq-plus-title",
            SortParm::TasksByDate => "tasks-by-date",
            SortParm::TasksBySeq => "tasks-by-seq",
            SortParm::TagsPlusTitle => "tags-plus-title",
            SortParm::Author => "author",
            SortParm::TagsPlusSeq => "tags-plus-seq",
            SortParm::Custom => "custom",
            SortParm::DateAdded => "date-added",
            SortParm::DateModified => "date-modified",
            SortParm::DatePlusSeq => "date-plus-seq",
            SortParm::RankSeqTitle => "rank-seq-title",
            SortParm::KlassTitle => "klass-title",
            SortParm::KlassDateTitle => "klass-date-title",
            SortParm::KlassSeqTitle => "klass-seq-title",
        }
    }

    fn components(&self) -> &'static [Component] {
        use Component::*;
        match self {
            SortParm::Title => &[Title],
            SortParm::SeqPlusTitle => &[Seq, Title],
            SortParm::TasksByDate => &[Done, Date, Seq, Title],
            SortParm::TasksBySeq => &[Done, Seq, Date, Title],
            SortParm::TagsPlusTitle => &[Tags, Title],
            SortParm::Author => &[Author, Date, Title],
            SortParm::TagsPlusSeq => &[Tags, Seq, Title],
            SortParm::Custom => &[],
            SortParm::DateAdded => &[DateAdded, Title],
            SortParm::DateModified => &[DateModified, Title],
            SortParm::DatePlusSeq => &[Date, Seq, Title],
            SortParm::RankSeqTitle => &[Rank, Seq, Title],
            SortParm::KlassTitle => &[Klass, Title],
            SortParm::KlassDateTitle => &[Klass, Date, Title],
            SortParm::KlassSeqTitle => &[Klass, Seq, Title],
        }
    }
}

impl FromStr for SortParm {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = common_form(s);
        SortParm::ALL
            .into_iter()
            .find(|parm| common_form(parm.name()) == wanted)
            .ok_or_else(|| FieldError::UnknownSortParm(s.to_string()))
    }
}

impl std::fmt::Display for SortParm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One entry of a custom sort: a field and its direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortField {
    label: String,
    descending: bool,
}

impl SortField {
    pub fn new(label: &str, descending: bool) -> Self {
        Self {
            label: common_form(label),
            descending,
        }
    }

    /// Common form of the field label.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_descending(&self) -> bool {
        self.descending
    }
}

/// Parses `"priority desc, due date, title asc"`.
///
/// A trailing `asc`/`ascending`/`desc`/`descending` word sets the direction;
/// ascending is the default. Entries without a label are skipped.
pub fn parse_sort_fields(text: &str) -> Vec<SortField> {
    text.split(',')
        .filter_map(|entry| {
            let mut words: Vec<&str> = entry.split_whitespace().collect();
            let descending = match words.last().map(|w| w.to_lowercase()).as_deref() {
                Some("desc") | Some("descending") => {
                    words.pop();
                    true
                }
                Some("asc") | Some("ascending") => {
                    words.pop();
                    false
                }
                _ => false,
            };
            let field = SortField::new(&words.join(" "), descending);
            (!field.label.is_empty()).then_some(field)
        })
        .collect()
}

fn role_label(schema: &CollectionSchema, component: Component) -> Option<&str> {
    match component {
        Component::Title => schema.title.as_deref(),
        Component::Seq => schema.seq.as_deref(),
        Component::Date => schema.date.as_deref(),
        Component::Done => schema.status.as_deref(),
        Component::Tags => schema.tags.as_deref(),
        Component::Author => schema.author.as_deref(),
        Component::DateAdded => schema.date_added.as_deref(),
        Component::DateModified => schema.date_modified.as_deref(),
        Component::Rank => schema.rank.as_deref(),
        Component::Klass => schema.klass.as_deref(),
    }
}

impl Note {
    /// The sort key of one field, or the key of an empty value when the note
    /// lacks the field.
    pub fn field_sort_key(&self, label: &str, collection: &NoteCollection) -> String {
        if let Some(field) = self.get_field(label) {
            return field.value().sort_key();
        }
        collection
            .dictionary()
            .get_def(label)
            .map(|def| collection.catalog().create_empty(def).sort_key())
            .unwrap_or_default()
    }

    fn component_key(&self, component: Component, collection: &NoteCollection) -> String {
        let Some(label) = role_label(collection.schema(), component) else {
            return String::new();
        };
        if component == Component::Done {
            let done = self
                .get_field(label)
                .and_then(|f| f.value().as_status())
                .is_some_and(|status| status.is_done());
            return if done { "1" } else { "0" }.to_string();
        }
        self.field_sort_key(label, collection)
    }

    /// The composite sort key under the collection's policy.
    ///
    /// For the custom policy the keys of the sort fields are concatenated;
    /// use [`compare_notes`] to honour their directions.
    pub fn sort_key(&self, collection: &NoteCollection) -> String {
        self.check_collection(collection);
        match collection.sort_parm() {
            SortParm::Custom => collection
                .sort_fields()
                .iter()
                .map(|f| self.field_sort_key(f.label(), collection))
                .fold(String::new(), close_component),
            parm => parm
                .components()
                .iter()
                .map(|c| self.component_key(*c, collection))
                .fold(String::new(), close_component),
        }
    }
}

fn close_component(mut key: String, component: String) -> String {
    key.push_str(&component);
    key.push(COMPONENT_END);
    key
}

/// Orders two notes under the collection's policy and direction.
pub fn compare_notes(a: &Note, b: &Note, collection: &NoteCollection) -> Ordering {
    if collection.sort_parm() == SortParm::Custom {
        return compare_custom_fields(a, b, collection);
    }
    let ordering = a.sort_key(collection).cmp(&b.sort_key(collection));
    if collection.sort_descending() {
        ordering.reverse()
    } else {
        ordering
    }
}

/// Compares the collection's custom sort fields in order and returns at the
/// first field whose values differ.
pub fn compare_custom_fields(a: &Note, b: &Note, collection: &NoteCollection) -> Ordering {
    for field in collection.sort_fields() {
        let ordering = a
            .field_sort_key(field.label(), collection)
            .cmp(&b.field_sort_key(field.label(), collection));
        let ordering = if field.is_descending() {
            ordering.reverse()
        } else {
            ordering
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    Ordering::Equal
}
