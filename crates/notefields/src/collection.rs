//! # Note Collections
//!
//! A [`NoteCollection`] owns everything notes share: the field dictionary,
//! the type catalog with its status/rank/level tables, the sort policy and
//! the identifier rule. Notes do not own their collection; each note records
//! the id of the collection it was created for, and every note operation
//! takes the collection as a parameter.
//!
//! ## Field Roles
//!
//! Some fields play a role the engine relies on: the title identifies a
//! note, the seq orders an outline, the status decides whether a task is
//! done. [`CollectionSchema`] records, per role, the first field registered
//! with the matching type. A role is assigned once and never reassigned.
//! Only the first date and the first link field get the role; any later
//! fields of those types are ordinary fields.

use std::collections::BTreeMap;

use log::{debug, warn};
use uuid::Uuid;

use crate::config::CollectionConfig;
use crate::dictionary::FieldDictionary;
use crate::error::{FieldError, Result};
use crate::field::{ComboList, FieldDefinition, PickList};
use crate::label::{common_form, FieldLabel};
use crate::note::{parse_sort_fields, IdRule, SortField, SortParm};
use crate::types::{TypeCatalog, TypeHint};
use crate::values::{
    FieldValue, LevelValueConfig, RankValueConfig, StatusValueConfig, Value, ValueKind,
};

/// Common-form labels of the fields holding each role.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectionSchema {
    pub title: Option<String>,
    pub body: Option<String>,
    pub date: Option<String>,
    pub link: Option<String>,
    pub status: Option<String>,
    pub rank: Option<String>,
    pub level: Option<String>,
    pub seq: Option<String>,
    pub klass: Option<String>,
    pub tags: Option<String>,
    pub author: Option<String>,
    pub index: Option<String>,
    pub date_added: Option<String>,
    pub date_modified: Option<String>,
    pub backlinks: Option<String>,
    pub wikilinks: Option<String>,
}

impl CollectionSchema {
    fn slot(&mut self, type_string: &str) -> Option<&mut Option<String>> {
        let slot = match type_string {
            "title" => &mut self.title,
            "body" => &mut self.body,
            "date" => &mut self.date,
            "link" => &mut self.link,
            "status" => &mut self.status,
            "rank" => &mut self.rank,
            "level" => &mut self.level,
            "seq" => &mut self.seq,
            "klass" => &mut self.klass,
            "tags" => &mut self.tags,
            "author" => &mut self.author,
            "index" => &mut self.index,
            "dateadded" => &mut self.date_added,
            "datemodified" => &mut self.date_modified,
            "backlinks" => &mut self.backlinks,
            "wikilinks" => &mut self.wikilinks,
            _ => return None,
        };
        Some(slot)
    }
}

/// Default field texts for notes of one klass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KlassTemplate {
    klass: String,
    fields: Vec<(String, String)>,
}

impl KlassTemplate {
    pub fn new(klass: &str) -> Self {
        Self {
            klass: klass.trim().to_string(),
            fields: Vec::new(),
        }
    }

    pub fn with_field(mut self, label: &str, text: &str) -> Self {
        self.fields.push((label.to_string(), text.to_string()));
        self
    }

    pub fn klass(&self) -> &str {
        &self.klass
    }

    /// `(label, text)` pairs in the order they were added.
    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }
}

#[derive(Debug, Clone)]
pub struct NoteCollection {
    id: Uuid,
    config: CollectionConfig,
    dict: FieldDictionary,
    catalog: TypeCatalog,
    schema: CollectionSchema,
    date_count: usize,
    link_count: usize,
    sort_parm: SortParm,
    sort_descending: bool,
    sort_fields: Vec<SortField>,
    id_rule: IdRule,
    aux_field: Option<String>,
    klass_templates: BTreeMap<String, KlassTemplate>,
}

impl Default for NoteCollection {
    fn default() -> Self {
        Self::from_config(CollectionConfig::default())
    }
}

impl NoteCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a collection from its configuration.
    ///
    /// Unknown sort policy or identifier rule names fall back to the
    /// defaults. A `locked` setting takes effect at [`finish_schema`].
    ///
    /// [`finish_schema`]: NoteCollection::finish_schema
    pub fn from_config(config: CollectionConfig) -> Self {
        let catalog = TypeCatalog::new(
            StatusValueConfig::new(&config.status_config, config.status_done_threshold),
            RankValueConfig::new(&config.rank_config),
            LevelValueConfig::new(&config.level_config),
        );
        let sort_parm = config.sort_parm.parse().unwrap_or_else(|e: FieldError| {
            warn!("event=config_fallback key=sort_parm reason={:?}", e.to_string());
            SortParm::default()
        });
        let id_rule = config.id_rule.parse().unwrap_or_else(|e: FieldError| {
            warn!("event=config_fallback key=id_rule reason={:?}", e.to_string());
            IdRule::default()
        });
        let sort_fields = config
            .sort_fields
            .as_deref()
            .map(parse_sort_fields)
            .unwrap_or_default();
        let aux_field = config
            .aux_field
            .as_deref()
            .map(common_form)
            .filter(|aux| !aux.is_empty());

        Self {
            id: Uuid::new_v4(),
            sort_descending: config.sort_descending,
            config,
            dict: FieldDictionary::new(),
            catalog,
            schema: CollectionSchema::default(),
            date_count: 0,
            link_count: 0,
            sort_parm,
            sort_fields,
            id_rule,
            aux_field,
            klass_templates: BTreeMap::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.config.title
    }

    pub fn config(&self) -> &CollectionConfig {
        &self.config
    }

    pub fn dictionary(&self) -> &FieldDictionary {
        &self.dict
    }

    pub fn catalog(&self) -> &TypeCatalog {
        &self.catalog
    }

    pub fn schema(&self) -> &CollectionSchema {
        &self.schema
    }

    /// Finds or creates the definition for `label`.
    ///
    /// Existing definitions are returned as they are, whatever the hint.
    /// New ones get their type from the catalog and are registered; this
    /// fails when the label is invalid or the dictionary is locked.
    pub fn resolve_field(&mut self, label: &str, hint: Option<&str>) -> Result<FieldDefinition> {
        let mut label = FieldLabel::new(label);
        if !label.is_valid() {
            warn!(
                "event=label_rejected label={:?} common={:?}",
                label.proper_form(),
                label.common_form()
            );
            return Err(FieldError::InvalidLabel(label.proper_form().to_string()));
        }
        if let Some(def) = self.dict.get_def(label.common_form()) {
            return Ok(def.clone());
        }

        let field_type = self.catalog.assign_type(&label, hint);
        if label.proper_form() == label.common_form() {
            label.set_proper_form(field_type.proper_label);
        }
        let mut def = FieldDefinition::new(label, field_type);
        match field_type.kind {
            ValueKind::Pick => {
                let options = hint
                    .and_then(TypeHint::parse)
                    .and_then(|h| h.options().map(PickList::from_options))
                    .unwrap_or_default();
                def = def.with_pick_list(options);
            }
            ValueKind::Combo => def = def.with_combo_list(ComboList::new()),
            _ => {}
        }
        self.register_def(def)
    }

    /// Adds a definition to the dictionary and assigns it any free role.
    pub fn register_def(&mut self, def: FieldDefinition) -> Result<FieldDefinition> {
        let is_new = !self.dict.contains(def.common_form());
        let stored = self.dict.try_add_def(def)?.clone();
        if is_new {
            self.assign_role(&stored);
        }
        Ok(stored)
    }

    fn assign_role(&mut self, def: &FieldDefinition) {
        let type_string = def.type_string();
        match type_string {
            "date" => self.date_count += 1,
            "link" => self.link_count += 1,
            _ => {}
        }
        if let Some(slot) = self.schema.slot(type_string) {
            if slot.is_none() {
                debug!(
                    "event=role_assigned role={} label={:?}",
                    type_string,
                    def.proper_form()
                );
                *slot = Some(def.common_form().to_string());
            }
        }
    }

    pub fn parse_value(&self, def: &FieldDefinition, text: &str) -> Value {
        self.catalog.parse_value(def, text)
    }

    /// Records a value in its field's combo list, if the field keeps one.
    pub fn register_value(&mut self, def: &FieldDefinition, value: &Value) {
        if def.kind() != ValueKind::Combo || !value.has_data() {
            return;
        }
        if let Some(list) = self
            .dict
            .get_def_mut(def.common_form())
            .and_then(FieldDefinition::combo_list_mut)
        {
            list.register_value(value.value());
        }
    }

    /// Applies the configured `locked` setting once initial fields are known.
    pub fn finish_schema(&mut self) {
        if self.config.locked {
            self.lock_dictionary();
        }
    }

    pub fn lock_dictionary(&mut self) {
        self.dict.lock();
    }

    pub fn unlock_dictionary(&mut self) {
        self.dict.unlock();
    }

    /// Number of date-typed fields registered; only the first holds the role.
    pub fn date_count(&self) -> usize {
        self.date_count
    }

    pub fn link_count(&self) -> usize {
        self.link_count
    }

    pub fn sort_parm(&self) -> SortParm {
        self.sort_parm
    }

    pub fn set_sort_parm(&mut self, sort_parm: SortParm) {
        self.sort_parm = sort_parm;
    }

    pub fn sort_descending(&self) -> bool {
        self.sort_descending
    }

    pub fn set_sort_descending(&mut self, descending: bool) {
        self.sort_descending = descending;
    }

    pub fn sort_fields(&self) -> &[SortField] {
        &self.sort_fields
    }

    pub fn set_sort_fields(&mut self, fields: Vec<SortField>) {
        self.sort_fields = fields;
    }

    pub fn id_rule(&self) -> IdRule {
        self.id_rule
    }

    pub fn set_id_rule(&mut self, rule: IdRule) {
        self.id_rule = rule;
    }

    /// Common form of the auxiliary identifying field.
    pub fn aux_field(&self) -> Option<&str> {
        self.aux_field.as_deref()
    }

    pub fn set_aux_field(&mut self, label: Option<&str>) {
        self.aux_field = label.map(common_form).filter(|aux| !aux.is_empty());
    }

    pub fn add_klass_template(&mut self, template: KlassTemplate) {
        self.klass_templates
            .insert(common_form(template.klass()), template);
    }

    pub fn klass_template(&self, klass: &str) -> Option<&KlassTemplate> {
        self.klass_templates.get(&common_form(klass))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolves_and_registers() {
        let mut coll = NoteCollection::new();
        let def = coll.resolve_field("Title", None).unwrap();
        assert_eq!(def.type_string(), "title");
        assert_eq!(coll.dictionary().len(), 1);
        assert_eq!(coll.schema().title.as_deref(), Some("title"));
    }

    #[test]
    fn test_shorthand_labels_get_proper_spelling() {
        let mut coll = NoteCollection::new();
        let def = coll.resolve_field("dateadded", None).unwrap();
        assert_eq!(def.proper_form(), "Date Added");
        let def = coll.resolve_field("due date", None).unwrap();
        assert_eq!(def.proper_form(), "due date");
    }

    #[test]
    fn test_existing_definition_ignores_hint() {
        let mut coll = NoteCollection::new();
        coll.resolve_field("Seq", None).unwrap();
        let def = coll.resolve_field("seq", Some("string")).unwrap();
        assert_eq!(def.type_string(), "seq");
        assert_eq!(coll.dictionary().len(), 1);
    }

    #[test]
    fn test_reserved_label_fails() {
        let mut coll = NoteCollection::new();
        assert!(matches!(
            coll.resolve_field("https", None),
            Err(FieldError::InvalidLabel(_))
        ));
        assert!(coll.dictionary().is_empty());
    }

    #[test]
    fn test_locked_collection_refuses_new_fields() {
        let mut coll = NoteCollection::new();
        coll.resolve_field("Title", None).unwrap();
        coll.lock_dictionary();
        assert!(matches!(
            coll.resolve_field("Notes", None),
            Err(FieldError::Locked(_))
        ));
        assert!(coll.resolve_field("Title", None).is_ok());
        assert!(coll.resolve_field("Date Modified", None).is_ok());
    }

    #[test]
    fn test_first_date_and_link_hold_the_role() {
        let mut coll = NoteCollection::new();
        coll.resolve_field("Due Date", None).unwrap();
        coll.resolve_field("Start Date", None).unwrap();
        coll.resolve_field("URL", None).unwrap();
        assert_eq!(coll.schema().date.as_deref(), Some("duedate"));
        assert_eq!(coll.date_count(), 2);
        assert_eq!(coll.link_count(), 1);
        coll.resolve_field("due date", None).unwrap();
        assert_eq!(coll.date_count(), 2);
    }

    #[test]
    fn test_pick_hint_seeds_list() {
        let mut coll = NoteCollection::new();
        let def = coll.resolve_field("Color", Some("pick: Red, Green")).unwrap();
        assert_eq!(def.pick_list().map(PickList::len), Some(2));
        let value = coll.parse_value(&def, "GREEN");
        assert_eq!(value.value(), "Green");
    }

    #[test]
    fn test_combo_values_accumulate() {
        let mut coll = NoteCollection::new();
        let def = coll.resolve_field("Publisher", Some("combo")).unwrap();
        for text in ["Acme", "Bolt", "acme"] {
            let value = coll.parse_value(&def, text);
            coll.register_value(&def, &value);
        }
        let stored = coll.dictionary().get_def("publisher").unwrap();
        assert_eq!(stored.combo_list().map(ComboList::len), Some(2));
    }

    #[test]
    fn test_config_drives_catalog_and_policy() {
        let config = CollectionConfig {
            status_config: "1 - Open; 5 - Closed".to_string(),
            status_done_threshold: 5,
            sort_parm: "seq-plus-title".to_string(),
            sort_fields: Some("priority desc, title".to_string()),
            aux_field: Some("Work Title".to_string()),
            locked: true,
            ..Default::default()
        };
        let mut coll = NoteCollection::from_config(config);
        assert_eq!(coll.sort_parm(), SortParm::SeqPlusTitle);
        assert_eq!(coll.sort_fields().len(), 2);
        assert_eq!(coll.aux_field(), Some("worktitle"));
        assert_eq!(coll.catalog().status_config().labels().len(), 2);
        assert!(!coll.dictionary().is_locked());
        coll.finish_schema();
        assert!(coll.dictionary().is_locked());
    }

    #[test]
    fn test_unknown_policy_names_fall_back() {
        let config = CollectionConfig {
            sort_parm: "sideways".to_string(),
            id_rule: "nope".to_string(),
            ..Default::default()
        };
        let coll = NoteCollection::from_config(config);
        assert_eq!(coll.sort_parm(), SortParm::Title);
        assert_eq!(coll.id_rule(), IdRule::TitleOnly);
    }

    #[test]
    fn test_klass_templates_by_common_name() {
        let mut coll = NoteCollection::new();
        coll.add_klass_template(KlassTemplate::new("Book Review").with_field("Rating", "3"));
        let template = coll.klass_template("book-review").unwrap();
        assert_eq!(template.fields().len(), 1);
        assert!(coll.klass_template("essay").is_none());
    }
}
