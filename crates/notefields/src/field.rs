//! Field definitions and the fields stored in a note.
//!
//! A [`FieldDefinition`] binds a label to a type, and optionally carries a
//! pick list, a combo list and a default value. Definitions compare and order
//! by the label's common form alone.

use std::cmp::Ordering;

use crate::label::FieldLabel;
use crate::types::FieldType;
use crate::values::{FieldValue, Value, ValueKind};

fn find_ignoring_case<'a>(values: &'a [String], text: &str) -> Option<&'a str> {
    let text = text.trim();
    values
        .iter()
        .find(|v| v.eq_ignore_ascii_case(text))
        .map(String::as_str)
}

/// Insert into a case-insensitively sorted, case-insensitively unique list.
fn insert_sorted(values: &mut Vec<String>, text: &str) -> bool {
    let text = text.trim();
    if text.is_empty() || find_ignoring_case(values, text).is_some() {
        return false;
    }
    let key = text.to_lowercase();
    let at = values
        .iter()
        .position(|v| v.to_lowercase() > key)
        .unwrap_or(values.len());
    values.insert(at, text.to_string());
    true
}

/// The allowed values of a pick field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PickList {
    values: Vec<String>,
}

impl PickList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a list from comma separated options (`"Red, Green, Blue"`).
    pub fn from_options(options: &str) -> Self {
        let mut list = Self::new();
        for option in options.split(',') {
            list.register(option);
        }
        list
    }

    /// Adds `value` unless an entry already matches it ignoring case.
    pub fn register(&mut self, value: &str) -> bool {
        insert_sorted(&mut self.values, value)
    }

    /// The entry matching `text` ignoring case.
    pub fn find(&self, text: &str) -> Option<&str> {
        find_ignoring_case(&self.values, text)
    }

    pub fn contains(&self, text: &str) -> bool {
        self.find(text).is_some()
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Every value seen so far for a combo field, offered as suggestions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComboList {
    values: Vec<String>,
}

impl ComboList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_value(&mut self, value: &str) -> bool {
        insert_sorted(&mut self.values, value)
    }

    pub fn find(&self, text: &str) -> Option<&str> {
        find_ignoring_case(&self.values, text)
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct FieldDefinition {
    label: FieldLabel,
    field_type: &'static FieldType,
    pick_list: Option<PickList>,
    combo_list: Option<ComboList>,
    default_value: Option<String>,
}

impl FieldDefinition {
    pub fn new(label: FieldLabel, field_type: &'static FieldType) -> Self {
        Self {
            label,
            field_type,
            pick_list: None,
            combo_list: None,
            default_value: None,
        }
    }

    pub fn with_pick_list(mut self, list: PickList) -> Self {
        self.pick_list = Some(list);
        self
    }

    pub fn with_combo_list(mut self, list: ComboList) -> Self {
        self.combo_list = Some(list);
        self
    }

    pub fn with_default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn label(&self) -> &FieldLabel {
        &self.label
    }

    pub fn common_form(&self) -> &str {
        self.label.common_form()
    }

    pub fn proper_form(&self) -> &str {
        self.label.proper_form()
    }

    pub fn field_type(&self) -> &'static FieldType {
        self.field_type
    }

    pub fn kind(&self) -> ValueKind {
        self.field_type.kind
    }

    pub fn type_string(&self) -> &'static str {
        self.field_type.type_string
    }

    pub fn pick_list(&self) -> Option<&PickList> {
        self.pick_list.as_ref()
    }

    pub fn combo_list(&self) -> Option<&ComboList> {
        self.combo_list.as_ref()
    }

    pub(crate) fn combo_list_mut(&mut self) -> Option<&mut ComboList> {
        self.combo_list.as_mut()
    }

    pub fn default_value(&self) -> Option<&str> {
        self.default_value.as_deref()
    }
}

impl PartialEq for FieldDefinition {
    fn eq(&self, other: &Self) -> bool {
        self.common_form() == other.common_form()
    }
}

impl Eq for FieldDefinition {}

impl PartialOrd for FieldDefinition {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FieldDefinition {
    fn cmp(&self, other: &Self) -> Ordering {
        self.common_form().cmp(other.common_form())
    }
}

/// A definition together with the value a note holds for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    def: FieldDefinition,
    value: Value,
}

impl Field {
    pub fn new(def: FieldDefinition, value: Value) -> Self {
        Self { def, value }
    }

    pub fn def(&self) -> &FieldDefinition {
        &self.def
    }

    pub fn label(&self) -> &FieldLabel {
        self.def.label()
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut Value {
        &mut self.value
    }

    pub fn set_value(&mut self, value: Value) {
        self.value = value;
    }

    pub fn has_data(&self) -> bool {
        self.value.has_data()
    }

    pub fn into_value(self) -> Value {
        self.value
    }
}
