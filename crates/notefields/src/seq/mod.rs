//! # Sequence Numbers
//!
//! Hierarchical identifiers such as `1.2.3a`, `II.B` or `2024-03`, used to
//! order notes in an outline.
//!
//! | Type | Role |
//! |------|------|
//! | [`SeqSegment`] | One level (`3` in `1.3.2`), with its punctuation |
//! | [`SeqStack`] | The ordered levels of one sequence |
//! | [`SeqSingleValue`] | One sequence inside a field |
//! | [`SeqValue`] | A field value: one or more sequences separated by `;` |
//!
//! Increments behave like an odometer per level: `9` becomes `10`, `z`
//! becomes `aa`, `Az` becomes `Ba`. Letters count as letters even when they
//! happen to spell a roman numeral.

mod segment;
mod stack;
mod value;

pub use segment::{increment_char, increment_text, NumberKind, SeqSegment};
pub use stack::{SeqStack, SEQ_PUNCTUATION};
pub use value::{SeqSingleValue, SeqValue};
