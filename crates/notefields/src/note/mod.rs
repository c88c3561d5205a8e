//! # Notes
//!
//! A [`Note`] is a set of labeled fields, keyed by each label's common form.
//! What a field means (title, sequence, status, date, ...) comes from the
//! [`NoteCollection`] the note belongs to.
//!
//! ## Ownership
//!
//! Notes never hold their collection. A note records the id of the
//! collection it was created for, and every operation that needs the schema
//! takes the collection as a parameter. Handing a note a different
//! collection is logged and, for mutations, refused.
//!
//! ## Mutation
//!
//! Fields change only through [`Note::set_field`] and [`Note::add_field`].
//! Both register the field's definition with the collection first, so a
//! locked dictionary refuses unknown labels and the note stays unchanged:
//!
//! ```text
//! "Due Date: March 15, 2024"
//!     -> resolve "Due Date"        (dictionary, or catalog for new labels)
//!     -> parse "March 15, 2024"    (the definition's type)
//!     -> store under "duedate"
//!     -> re-identify               (only when the title or aux field changed)
//! ```
//!
//! ## Identity and Attachments
//!
//! The note's identifiers follow the collection's [`IdRule`] and are
//! recomputed whenever an identifying field changes; attachments are then
//! re-based onto the new identifier.

mod attachment;
mod identify;
mod sort;

pub use attachment::AttachmentName;
pub use identify::{IdRule, Identification};
pub use sort::{compare_custom_fields, compare_notes, parse_sort_fields, SortField, SortParm};

use std::collections::BTreeMap;

use log::{debug, warn};
use uuid::Uuid;

use crate::collection::NoteCollection;
use crate::field::Field;
use crate::label::common_form;
use crate::values::{DateTimeValue, FieldValue, KlassValue, Value};

const DATE_ADDED: &str = "Date Added";
const DATE_MODIFIED: &str = "Date Modified";

#[derive(Debug, Clone)]
pub struct Note {
    collection_id: Uuid,
    fields: BTreeMap<String, Field>,
    identification: Identification,
    attachments: Vec<AttachmentName>,
}

impl Note {
    pub fn new(collection: &NoteCollection) -> Self {
        Self {
            collection_id: collection.id(),
            fields: BTreeMap::new(),
            identification: Identification::default(),
            attachments: Vec::new(),
        }
    }

    pub fn collection_id(&self) -> Uuid {
        self.collection_id
    }

    pub(crate) fn check_collection(&self, collection: &NoteCollection) -> bool {
        if self.collection_id == collection.id() {
            return true;
        }
        warn!(
            "event=foreign_collection note={:?} expected={} got={}",
            self.identification.id,
            self.collection_id,
            collection.id()
        );
        false
    }

    /// Sets a field from its label and raw text.
    ///
    /// Returns false, leaving the note unchanged, when the label is invalid
    /// or unknown to a locked dictionary.
    pub fn set_field(&mut self, collection: &mut NoteCollection, label: &str, text: &str) -> bool {
        self.set_field_with_type(collection, label, None, text)
    }

    /// Like [`Note::set_field`], with a type hint for labels the collection
    /// has not seen yet.
    pub fn set_field_with_type(
        &mut self,
        collection: &mut NoteCollection,
        label: &str,
        hint: Option<&str>,
        text: &str,
    ) -> bool {
        if !self.check_collection(collection) {
            return false;
        }
        let def = match collection.resolve_field(label, hint) {
            Ok(def) => def,
            Err(e) => {
                debug!("event=set_field_refused label={:?} reason={:?}", label, e.to_string());
                return false;
            }
        };
        let value = collection.parse_value(&def, text);
        self.store(collection, Field::new(def, value));
        true
    }

    /// Adds a prepared field.
    ///
    /// When the collection already defines the label with another type, the
    /// value is parsed again as that type.
    pub fn add_field(&mut self, collection: &mut NoteCollection, field: Field) -> bool {
        if !self.check_collection(collection) {
            return false;
        }
        let def = match collection.register_def(field.def().clone()) {
            Ok(def) => def,
            Err(e) => {
                debug!(
                    "event=add_field_refused label={:?} reason={:?}",
                    field.label().proper_form(),
                    e.to_string()
                );
                return false;
            }
        };
        let value = if def.type_string() == field.def().type_string() {
            field.into_value()
        } else {
            collection.parse_value(&def, &field.value().value_to_write())
        };
        self.store(collection, Field::new(def, value));
        true
    }

    fn store(&mut self, collection: &mut NoteCollection, field: Field) {
        collection.register_value(field.def(), field.value());
        let common = field.def().common_form().to_string();
        let identifying = collection.schema().title.as_deref() == Some(common.as_str())
            || (collection.id_rule().uses_aux() && collection.aux_field() == Some(common.as_str()));
        self.fields.insert(common, field);
        if identifying {
            self.identify(collection);
        }
    }

    /// Looks up a field by any spelling of its label.
    pub fn get_field(&self, label: &str) -> Option<&Field> {
        self.fields.get(&common_form(label))
    }

    pub fn get_field_mut(&mut self, label: &str) -> Option<&mut Field> {
        self.fields.get_mut(&common_form(label))
    }

    pub fn field_value(&self, label: &str) -> Option<&Value> {
        self.get_field(label).map(Field::value)
    }

    pub fn remove_field(&mut self, collection: &NoteCollection, label: &str) -> Option<Field> {
        if !self.check_collection(collection) {
            return None;
        }
        let removed = self.fields.remove(&common_form(label))?;
        self.identify(collection);
        Some(removed)
    }

    /// Fields ordered by common form.
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.values()
    }

    /// Fields in the order the collection's dictionary defines them.
    pub fn fields_in_order<'a>(
        &'a self,
        collection: &'a NoteCollection,
    ) -> impl Iterator<Item = &'a Field> + 'a {
        collection
            .dictionary()
            .iter()
            .filter_map(move |def| self.fields.get(def.common_form()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    fn role_text(&self, label: Option<&str>) -> String {
        label
            .and_then(|l| self.get_field(l))
            .map(|f| f.value().value_to_write())
            .unwrap_or_default()
    }

    /// The title, or an empty string when the note has none.
    pub fn title(&self, collection: &NoteCollection) -> String {
        self.role_text(collection.schema().title.as_deref())
    }

    pub fn identification(&self) -> &Identification {
        &self.identification
    }

    /// Recomputes the note's identifiers. Returns whether they changed.
    pub fn identify(&mut self, collection: &NoteCollection) -> bool {
        let title = self.title(collection);
        let aux = if collection.id_rule().uses_aux() {
            self.role_text(collection.aux_field())
        } else {
            String::new()
        };
        let identification = collection.id_rule().compose(&title, &aux);
        if identification == self.identification {
            return false;
        }
        if !identification.id.is_empty() {
            for attachment in &mut self.attachments {
                attachment.rebase(&identification.id);
            }
        }
        debug!(
            "event=note_identified id={:?} previous={:?}",
            identification.id, self.identification.id
        );
        self.identification = identification;
        true
    }

    /// Stamps `Date Modified` with the current time, and `Date Added` too if
    /// it is not set yet. Both are accepted even by a locked dictionary.
    pub fn touch(&mut self, collection: &mut NoteCollection) -> bool {
        let now = DateTimeValue::now().value_to_write();
        let added = collection
            .schema()
            .date_added
            .clone()
            .unwrap_or_else(|| DATE_ADDED.to_string());
        let modified = collection
            .schema()
            .date_modified
            .clone()
            .unwrap_or_else(|| DATE_MODIFIED.to_string());

        let mut ok = true;
        if !self.get_field(&added).is_some_and(Field::has_data) {
            ok &= self.set_field_with_type(collection, &added, Some("dateadded"), &now);
        }
        ok &= self.set_field_with_type(collection, &modified, Some("datemodified"), &now);
        ok
    }

    /// Fills fields the note lacks from its klass template. Returns how many
    /// fields were set.
    pub fn apply_klass_defaults(&mut self, collection: &mut NoteCollection) -> usize {
        let Some(klass) = collection
            .schema()
            .klass
            .as_deref()
            .and_then(|l| self.get_field(l))
            .and_then(|f| f.value().as_klass())
            .map(KlassValue::klass_name)
        else {
            return 0;
        };
        let Some(template) = collection.klass_template(&klass).cloned() else {
            return 0;
        };

        let mut applied = 0;
        for (label, text) in template.fields() {
            if self.get_field(label).is_some_and(Field::has_data) {
                continue;
            }
            if self.set_field(collection, label, text) {
                applied += 1;
            }
        }
        applied
    }

    /// Increments the note's seq field and returns its new text.
    ///
    /// `None` increments the deepest level; `Some(level)` increments that
    /// level, see [`SeqStack::inc_at_level`](crate::seq::SeqStack::inc_at_level).
    /// Returns `None` when the collection has no seq field.
    pub fn increment_seq(
        &mut self,
        collection: &NoteCollection,
        level: Option<usize>,
        remove_deeper: bool,
    ) -> Option<String> {
        if !self.check_collection(collection) {
            return None;
        }
        let label = collection.schema().seq.clone()?;
        if !self.fields.contains_key(&label) {
            let def = collection.dictionary().get_def(&label)?.clone();
            let value = collection.catalog().create_empty(&def);
            self.fields.insert(label.clone(), Field::new(def, value));
        }
        let seq = self.fields.get_mut(&label)?.value_mut().as_seq_mut()?;
        match level {
            Some(level) => seq.increment_at_level(level, remove_deeper),
            None => seq.increment(),
        }
        Some(seq.value_to_write())
    }

    pub fn attachments(&self) -> &[AttachmentName] {
        &self.attachments
    }

    /// Attaches a file named after the note's current identifier.
    pub fn add_attachment(&mut self, suffix: &str, ext: &str) -> &AttachmentName {
        let index = self.attachments.len();
        self.attachments
            .push(AttachmentName::new(&self.identification.id, suffix, ext));
        &self.attachments[index]
    }

    pub fn remove_attachment(&mut self, name: &AttachmentName) -> bool {
        let before = self.attachments.len();
        self.attachments.retain(|a| a != name);
        self.attachments.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::KlassTemplate;
    use crate::field::FieldDefinition;
    use crate::label::FieldLabel;
    use crate::types::type_for_string;
    use crate::values::StringValue;

    #[test]
    fn test_set_and_get_fields() {
        let mut coll = NoteCollection::new();
        let mut note = Note::new(&coll);
        assert!(note.set_field(&mut coll, "Title", "First Note"));
        assert!(note.set_field(&mut coll, "Due Date", "March 15, 2024"));
        assert_eq!(note.len(), 2);
        let due = note.get_field("due-date").unwrap();
        assert_eq!(due.value().sort_key(), "2024-03-15");
        assert_eq!(due.def().type_string(), "date");
    }

    #[test]
    fn test_locked_dictionary_rejects_without_mutation() {
        let mut coll = NoteCollection::new();
        let mut note = Note::new(&coll);
        note.set_field(&mut coll, "Title", "A");
        coll.lock_dictionary();
        assert!(!note.set_field(&mut coll, "Mood", "sunny"));
        assert!(note.get_field("mood").is_none());
        assert_eq!(coll.dictionary().len(), 1);
        assert!(note.set_field(&mut coll, "Title", "B"));
    }

    #[test]
    fn test_invalid_label_is_refused() {
        let mut coll = NoteCollection::new();
        let mut note = Note::new(&coll);
        assert!(!note.set_field(&mut coll, "http", "//example.com"));
        assert!(note.is_empty());
    }

    #[test]
    fn test_foreign_collection_is_refused() {
        let mut home = NoteCollection::new();
        let mut other = NoteCollection::new();
        let mut note = Note::new(&home);
        assert!(!note.set_field(&mut other, "Title", "Stray"));
        assert!(note.set_field(&mut home, "Title", "Home"));
        assert_eq!(note.collection_id(), home.id());
    }

    #[test]
    fn test_title_changes_reidentify() {
        let mut coll = NoteCollection::new();
        let mut note = Note::new(&coll);
        note.set_field(&mut coll, "Title", "Meeting Notes");
        assert_eq!(note.identification().id, "meeting-notes");
        note.set_field(&mut coll, "Title", "Weekly Sync");
        assert_eq!(note.identification().display, "Weekly Sync");
    }

    #[test]
    fn test_aux_field_joins_identity() {
        let mut coll = NoteCollection::new();
        coll.set_id_rule(IdRule::TitleBeforeAux);
        coll.set_aux_field(Some("Date"));
        let mut note = Note::new(&coll);
        note.set_field(&mut coll, "Title", "Standup");
        note.set_field(&mut coll, "Date", "2024-03-15");
        assert_eq!(note.identification().id, "standup-2024-03-15");
    }

    #[test]
    fn test_attachments_follow_identity() {
        let mut coll = NoteCollection::new();
        let mut note = Note::new(&coll);
        note.set_field(&mut coll, "Title", "Draft");
        note.add_attachment("cover", "png");
        note.set_field(&mut coll, "Title", "Final Cut");
        assert_eq!(note.attachments()[0].to_string(), "final-cut | cover.png");
        let name = note.attachments()[0].clone();
        assert!(note.remove_attachment(&name));
        assert!(note.attachments().is_empty());
    }

    #[test]
    fn test_add_field_reparses_to_collection_type() {
        let mut coll = NoteCollection::new();
        coll.resolve_field("Seq", None).unwrap();
        let mut note = Note::new(&coll);
        let field = Field::new(
            FieldDefinition::new(FieldLabel::new("Seq"), type_for_string("string")),
            Value::Text(StringValue::new("1.2")),
        );
        assert!(note.add_field(&mut coll, field));
        assert!(note.field_value("seq").and_then(Value::as_seq).is_some());
    }

    #[test]
    fn test_touch_stamps_through_a_locked_dictionary() {
        let mut coll = NoteCollection::new();
        let mut note = Note::new(&coll);
        note.set_field(&mut coll, "Title", "Log");
        coll.lock_dictionary();
        assert!(note.touch(&mut coll));
        let added = note.get_field("dateadded").unwrap().value().value_to_write();
        assert_eq!(added.len(), 19);
        assert!(note.get_field("datemodified").is_some());
        assert!(coll.dictionary().is_locked());

        note.set_field(&mut coll, "Date Added", "2020-01-01 08:00:00");
        assert!(note.touch(&mut coll));
        assert_eq!(
            note.get_field("dateadded").unwrap().value().value(),
            "2020-01-01 08:00:00"
        );
    }

    #[test]
    fn test_klass_defaults_fill_missing_fields() {
        let mut coll = NoteCollection::new();
        coll.add_klass_template(
            KlassTemplate::new("Book")
                .with_field("Rating", "3")
                .with_field("Status", "1"),
        );
        let mut note = Note::new(&coll);
        note.set_field(&mut coll, "Class", "book");
        note.set_field(&mut coll, "Rating", "5");
        assert_eq!(note.apply_klass_defaults(&mut coll), 1);
        assert_eq!(note.field_value("rating").unwrap().value_to_write(), "5");
        assert_eq!(
            note.field_value("status").unwrap().value_to_write(),
            "1 - Proposed"
        );
    }

    #[test]
    fn test_klass_defaults_need_a_template() {
        let mut coll = NoteCollection::new();
        let mut note = Note::new(&coll);
        assert_eq!(note.apply_klass_defaults(&mut coll), 0);
        note.set_field(&mut coll, "Class", "Poem");
        assert_eq!(note.apply_klass_defaults(&mut coll), 0);
    }

    #[test]
    fn test_increment_seq_levels() {
        let mut coll = NoteCollection::new();
        let mut note = Note::new(&coll);
        assert_eq!(note.increment_seq(&coll, None, false), None);
        note.set_field(&mut coll, "Seq", "1.3");
        assert_eq!(note.increment_seq(&coll, Some(2), false).as_deref(), Some("1.3.1"));
        assert_eq!(note.increment_seq(&coll, None, false).as_deref(), Some("1.3.2"));
        assert_eq!(note.increment_seq(&coll, Some(1), true).as_deref(), Some("1.4"));
    }

    #[test]
    fn test_fields_in_dictionary_order() {
        let mut coll = NoteCollection::new();
        let mut note = Note::new(&coll);
        note.set_field(&mut coll, "Title", "T");
        note.set_field(&mut coll, "Body", "B");
        note.set_field(&mut coll, "Author", "A");
        let labels: Vec<&str> = note
            .fields_in_order(&coll)
            .map(|f| f.label().proper_form())
            .collect();
        assert_eq!(labels, vec!["Title", "Body", "Author"]);
        note.remove_field(&coll, "body");
        assert_eq!(note.len(), 2);
    }
}
