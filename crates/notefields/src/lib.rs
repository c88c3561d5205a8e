//! # Notefields
//!
//! Notefields is the **typed field engine** behind a plain text notes app. A
//! note is a set of labeled text fields (`Title: ...`, `Seq: 1.2`,
//! `Status: 4 - In Work`); this crate decides what each field means, parses
//! its text into a structured value, orders notes by those values and writes
//! them back out as text.
//!
//! Reading and writing note files, rendering Markdown and any UI are left to
//! the caller. The engine is synchronous and single threaded.
//!
//! ## The Flow of a Field
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Label ("Due Date")                                         │
//! │  - normalized to a common form ("duedate")                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Dictionary + Type Catalog (per collection)                 │
//! │  - known label: its existing definition                     │
//! │  - new label: first matching type, unless locked            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Value ("March 15, 2024")                                   │
//! │  - parsed leniently, never rejected                         │
//! │  - sort key "2024-03-15", written back verbatim             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Note                                                       │
//! │  - stored under the common form                             │
//! │  - composite sort key from the collection's sort policy     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use notefields::{compare_notes, Note, NoteCollection, SortParm};
//! use std::cmp::Ordering;
//!
//! let mut coll = NoteCollection::new();
//! coll.set_sort_parm(SortParm::SeqPlusTitle);
//!
//! let mut intro = Note::new(&coll);
//! intro.set_field(&mut coll, "Title", "Introduction");
//! intro.set_field(&mut coll, "Seq", "1");
//!
//! let mut details = Note::new(&coll);
//! details.set_field(&mut coll, "Title", "Details");
//! details.set_field(&mut coll, "Seq", "1.2");
//!
//! assert_eq!(compare_notes(&intro, &details, &coll), Ordering::Less);
//! ```
//!
//! ## Module Overview
//!
//! - [`label`]: Field labels and their common form
//! - [`types`]: Type descriptors, type hints and the per-collection catalog
//! - [`values`]: The [`Value`] sum type and every value family
//! - [`seq`]: Hierarchical sequence numbers and their increments
//! - [`field`]: Field definitions, pick lists and combo lists
//! - [`dictionary`]: The lockable field dictionary
//! - [`collection`]: Collections, field roles and klass templates
//! - [`note`]: Notes, identifiers, attachments and sorting
//! - [`config`]: Collection configuration
//! - [`error`]: Error types

pub mod collection;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod field;
pub mod label;
pub mod note;
pub mod seq;
pub mod types;
pub mod values;

pub use collection::{CollectionSchema, KlassTemplate, NoteCollection};
pub use config::CollectionConfig;
pub use dictionary::FieldDictionary;
pub use error::{FieldError, Result};
pub use field::{ComboList, Field, FieldDefinition, PickList};
pub use label::FieldLabel;
pub use note::{
    compare_custom_fields, compare_notes, AttachmentName, IdRule, Identification, Note,
    SortField, SortParm,
};
pub use seq::{SeqStack, SeqValue};
pub use types::{FieldType, TypeCatalog};
pub use values::{FieldValue, MultiValues, Value, ValueKind};
