//! # Field Values
//!
//! Every field of a note holds a [`Value`]: the raw text as typed, plus
//! whatever structure its type could read out of that text.
//!
//! Parsing never fails. Text a type cannot make sense of is kept verbatim
//! and sorts by a best-effort key, usually its lowercased text.
//!
//! ## The Value Contract
//!
//! | Method | Purpose |
//! |--------|---------|
//! | [`FieldValue::value`] | The text as stored in the value |
//! | [`FieldValue::sort_key`] | A string whose plain ordering is the domain ordering |
//! | [`FieldValue::value_to_write`] | Canonical text for persistence |
//! | [`FieldValue::value_to_display`] | Text for people to read |
//! | [`FieldValue::has_data`] | Whether the value holds anything at all |
//!
//! Sort keys survive a round trip through storage: parsing the output of
//! `value_to_write` yields the same sort key.
//!
//! Values that hold a list (authors, tags, index terms, sequences, note
//! links) also implement [`MultiValues`].

mod author;
mod choice;
mod date;
mod link;
mod lists;
mod numbered;
mod numeric;
mod rank;
mod status;
mod tags;
mod text;
mod time;

pub use author::{Author, AuthorValue};
pub use choice::{ComboValue, PickValue};
pub use date::{DateValue, PartialDate};
pub use link::LinkValue;
pub use lists::{IndexValue, NoteLinksValue};
pub use numbered::NumberedLabels;
pub use numeric::{BooleanValue, IntValue, RatingValue};
pub use rank::{
    LevelValue, LevelValueConfig, RankValue, RankValueConfig, DEFAULT_LEVEL_CONFIG,
    DEFAULT_RANK_CONFIG,
};
pub use status::{StatusValue, StatusValueConfig, DEFAULT_DONE_THRESHOLD, DEFAULT_STATUS_CONFIG};
pub use tags::{Tag, TagsValue};
pub use text::{EmailValue, KlassValue, PhoneValue, StringValue, TitleValue};
pub use time::{DateTimeValue, TimeOfDayValue};

pub(crate) use text::lower_hyphenated;

use crate::seq::SeqValue;

pub trait FieldValue {
    fn value(&self) -> &str;

    fn sort_key(&self) -> String {
        self.value().to_string()
    }

    fn value_to_write(&self) -> String {
        self.value().to_string()
    }

    fn value_to_display(&self) -> String {
        self.value_to_write()
    }

    fn has_data(&self) -> bool {
        !self.value().trim().is_empty()
    }
}

/// A value made of several items joined by a delimiter.
pub trait MultiValues {
    fn count(&self) -> usize;

    /// The item at `index`, or `None` past the end.
    fn at(&self, index: usize) -> Option<String>;

    fn delimiter(&self) -> &'static str;
}

/// Which parser a field type uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Text,
    /// Multi-line text such as a body; stored like [`ValueKind::Text`].
    LongText,
    Title,
    Author,
    Tags,
    Link,
    Date,
    /// Date and time, as kept in `Date Added` / `Date Modified`.
    Stamp,
    TimeOfDay,
    Seq,
    Status,
    Rank,
    Level,
    Boolean,
    Integer,
    Rating,
    Index,
    NoteLinks,
    Email,
    Phone,
    Klass,
    Pick,
    Combo,
}

/// A parsed field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Text(StringValue),
    Title(TitleValue),
    Author(AuthorValue),
    Tags(TagsValue),
    Link(LinkValue),
    Date(DateValue),
    Stamp(DateTimeValue),
    TimeOfDay(TimeOfDayValue),
    Seq(SeqValue),
    Status(StatusValue),
    Rank(RankValue),
    Level(LevelValue),
    Boolean(BooleanValue),
    Integer(IntValue),
    Rating(RatingValue),
    Index(IndexValue),
    Links(NoteLinksValue),
    Email(EmailValue),
    Phone(PhoneValue),
    Klass(KlassValue),
    Pick(PickValue),
    Combo(ComboValue),
}

macro_rules! each_variant {
    ($value:expr, $inner:ident => $body:expr) => {
        match $value {
            Value::Text($inner) => $body,
            Value::Title($inner) => $body,
            Value::Author($inner) => $body,
            Value::Tags($inner) => $body,
            Value::Link($inner) => $body,
            Value::Date($inner) => $body,
            Value::Stamp($inner) => $body,
            Value::TimeOfDay($inner) => $body,
            Value::Seq($inner) => $body,
            Value::Status($inner) => $body,
            Value::Rank($inner) => $body,
            Value::Level($inner) => $body,
            Value::Boolean($inner) => $body,
            Value::Integer($inner) => $body,
            Value::Rating($inner) => $body,
            Value::Index($inner) => $body,
            Value::Links($inner) => $body,
            Value::Email($inner) => $body,
            Value::Phone($inner) => $body,
            Value::Klass($inner) => $body,
            Value::Pick($inner) => $body,
            Value::Combo($inner) => $body,
        }
    };
}

impl FieldValue for Value {
    fn value(&self) -> &str {
        each_variant!(self, v => v.value())
    }

    fn sort_key(&self) -> String {
        each_variant!(self, v => v.sort_key())
    }

    fn value_to_write(&self) -> String {
        each_variant!(self, v => v.value_to_write())
    }

    fn value_to_display(&self) -> String {
        each_variant!(self, v => v.value_to_display())
    }

    fn has_data(&self) -> bool {
        each_variant!(self, v => v.has_data())
    }
}

impl Value {
    /// The list view of this value, for the variants that hold lists.
    pub fn as_multi(&self) -> Option<&dyn MultiValues> {
        match self {
            Value::Author(v) => Some(v),
            Value::Tags(v) => Some(v),
            Value::Index(v) => Some(v),
            Value::Seq(v) => Some(v),
            Value::Links(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_seq(&self) -> Option<&SeqValue> {
        match self {
            Value::Seq(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_seq_mut(&mut self) -> Option<&mut SeqValue> {
        match self {
            Value::Seq(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_status(&self) -> Option<&StatusValue> {
        match self {
            Value::Status(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_tags(&self) -> Option<&TagsValue> {
        match self {
            Value::Tags(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<&DateValue> {
        match self {
            Value::Date(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_klass(&self) -> Option<&KlassValue> {
        match self {
            Value::Klass(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_links_mut(&mut self) -> Option<&mut NoteLinksValue> {
        match self {
            Value::Links(v) => Some(v),
            _ => None,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value_to_display())
    }
}
