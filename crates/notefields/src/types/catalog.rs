//! Type assignment and value parsing for one collection.

use super::{string_type, type_for_label, FieldType, TypeHint};
use crate::field::FieldDefinition;
use crate::label::FieldLabel;
use crate::seq::SeqValue;
use crate::values::{
    AuthorValue, BooleanValue, ComboValue, DateTimeValue, DateValue, EmailValue, IndexValue,
    IntValue, KlassValue, LevelValue, LevelValueConfig, LinkValue, NoteLinksValue, PhoneValue,
    PickValue, RankValue, RankValueConfig, RatingValue, StatusValue, StatusValueConfig,
    StringValue, TagsValue, TimeOfDayValue, TitleValue, Value, ValueKind,
};

/// Picks the type for a label.
///
/// A hint naming a registered type wins. Otherwise the first type claiming
/// the label's common form is used, and failing that the string type.
pub fn assign_type(label: &FieldLabel, hint: Option<&str>) -> &'static FieldType {
    hint.and_then(TypeHint::parse)
        .and_then(|h| h.field_type())
        .or_else(|| type_for_label(label.common_form()))
        .unwrap_or_else(string_type)
}

/// The type registry as seen by one collection: the shared descriptors plus
/// the collection's status, rank and level tables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeCatalog {
    status: StatusValueConfig,
    rank: RankValueConfig,
    level: LevelValueConfig,
}

impl TypeCatalog {
    pub fn new(status: StatusValueConfig, rank: RankValueConfig, level: LevelValueConfig) -> Self {
        Self {
            status,
            rank,
            level,
        }
    }

    pub fn status_config(&self) -> &StatusValueConfig {
        &self.status
    }

    pub fn rank_config(&self) -> &RankValueConfig {
        &self.rank
    }

    pub fn level_config(&self) -> &LevelValueConfig {
        &self.level
    }

    pub fn assign_type(&self, label: &FieldLabel, hint: Option<&str>) -> &'static FieldType {
        assign_type(label, hint)
    }

    /// The value a field has before anything is typed into it: the
    /// definition's default value if it carries one, otherwise empty.
    pub fn create_empty(&self, def: &FieldDefinition) -> Value {
        self.parse_value(def, def.default_value().unwrap_or_default())
    }

    /// Parses `text` as a value of the definition's type. Never fails.
    pub fn parse_value(&self, def: &FieldDefinition, text: &str) -> Value {
        match def.kind() {
            ValueKind::Text | ValueKind::LongText => Value::Text(StringValue::new(text)),
            ValueKind::Title => Value::Title(TitleValue::new(text)),
            ValueKind::Author => Value::Author(AuthorValue::parse(text)),
            ValueKind::Tags => Value::Tags(TagsValue::parse(text)),
            ValueKind::Link => Value::Link(LinkValue::parse(text)),
            ValueKind::Date => Value::Date(DateValue::parse(text)),
            ValueKind::Stamp => Value::Stamp(DateTimeValue::parse(text)),
            ValueKind::TimeOfDay => Value::TimeOfDay(TimeOfDayValue::parse(text)),
            ValueKind::Seq => Value::Seq(SeqValue::parse(text)),
            ValueKind::Status => Value::Status(StatusValue::parse(text, &self.status)),
            ValueKind::Rank => Value::Rank(RankValue::parse(text, &self.rank)),
            ValueKind::Level => Value::Level(LevelValue::parse(text, &self.level)),
            ValueKind::Boolean => Value::Boolean(BooleanValue::parse(text)),
            ValueKind::Integer => Value::Integer(IntValue::parse(text)),
            ValueKind::Rating => Value::Rating(RatingValue::parse(text)),
            ValueKind::Index => Value::Index(IndexValue::parse(text)),
            ValueKind::NoteLinks => Value::Links(NoteLinksValue::parse(text)),
            ValueKind::Email => Value::Email(EmailValue::new(text)),
            ValueKind::Phone => Value::Phone(PhoneValue::new(text)),
            ValueKind::Klass => Value::Klass(KlassValue::new(text)),
            ValueKind::Pick => Value::Pick(PickValue::parse(text, def.pick_list())),
            ValueKind::Combo => Value::Combo(ComboValue::new(text)),
        }
    }
}
