//! Sequence field values.
//!
//! A sequence field may hold several sequences separated by `;` (a chapter
//! number that also appears in a second outline, say). The first one is the
//! primary sequence: it drives sorting and increments.

use super::stack::SeqStack;
use crate::values::{FieldValue, MultiValues};

/// One sequence inside a sequence field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SeqSingleValue {
    stack: SeqStack,
}

impl SeqSingleValue {
    pub fn parse(text: &str) -> Self {
        Self {
            stack: SeqStack::parse(text),
        }
    }

    pub fn stack(&self) -> &SeqStack {
        &self.stack
    }

    pub fn stack_mut(&mut self) -> &mut SeqStack {
        &mut self.stack
    }

    pub fn sort_key(&self) -> String {
        self.stack.sort_key()
    }
}

impl std::fmt::Display for SeqSingleValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.stack)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SeqValue {
    value: String,
    singles: Vec<SeqSingleValue>,
}

impl SeqValue {
    pub const DELIMITER: &'static str = "; ";

    pub fn parse(text: &str) -> Self {
        let singles = text
            .split(';')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(SeqSingleValue::parse)
            .filter(|single| !single.stack().is_empty())
            .collect();
        Self {
            value: text.to_string(),
            singles,
        }
    }

    pub fn primary(&self) -> Option<&SeqSingleValue> {
        self.singles.first()
    }

    pub fn singles(&self) -> &[SeqSingleValue] {
        &self.singles
    }

    /// Increments the deepest level of the primary sequence.
    pub fn increment(&mut self) {
        let level = self
            .primary()
            .and_then(|single| single.stack().max_level())
            .unwrap_or(0);
        self.increment_at_level(level, false);
    }

    /// Level-aware increment of the primary sequence; see [`SeqStack::inc_at_level`].
    pub fn increment_at_level(&mut self, level: usize, remove_deeper: bool) {
        if self.singles.is_empty() {
            self.singles.push(SeqSingleValue::default());
        }
        self.singles[0].stack_mut().inc_at_level(level, remove_deeper);
        self.value = self.value_to_write();
    }
}

impl FieldValue for SeqValue {
    fn value(&self) -> &str {
        &self.value
    }

    fn sort_key(&self) -> String {
        self.primary()
            .map(SeqSingleValue::sort_key)
            .unwrap_or_else(|| SeqStack::new().sort_key())
    }

    fn value_to_write(&self) -> String {
        self.singles
            .iter()
            .map(|single| single.to_string())
            .collect::<Vec<_>>()
            .join(Self::DELIMITER)
    }

    fn has_data(&self) -> bool {
        !self.singles.is_empty()
    }
}

impl MultiValues for SeqValue {
    fn count(&self) -> usize {
        self.singles.len()
    }

    fn at(&self, index: usize) -> Option<String> {
        self.singles.get(index).map(|single| single.to_string())
    }

    fn delimiter(&self) -> &'static str {
        Self::DELIMITER
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_multiple_sequences() {
        let seq = SeqValue::parse("1.2; 3.4.5");
        assert_eq!(seq.count(), 2);
        assert_eq!(seq.at(0).as_deref(), Some("1.2"));
        assert_eq!(seq.at(1).as_deref(), Some("3.4.5"));
        assert_eq!(seq.at(2), None);
        assert_eq!(seq.value_to_write(), "1.2; 3.4.5");
    }

    #[test]
    fn test_sort_key_uses_primary_sequence() {
        let seq = SeqValue::parse("2; 1");
        assert_eq!(seq.sort_key(), SeqStack::parse("2").sort_key());
    }

    #[test]
    fn test_empty_value_has_blank_sort_key() {
        let seq = SeqValue::parse("  ");
        assert!(!seq.has_data());
        assert_eq!(seq.sort_key().trim_matches(|c| c == ' ' || c == '.'), "");
    }

    #[test]
    fn test_sort_key_is_stable_under_reparsing() {
        for text in ["1.2.3a", "II.B", "2024-03", "1..2", "4:", "x; 1"] {
            let seq = SeqValue::parse(text);
            let reparsed = SeqValue::parse(&seq.value_to_write());
            assert_eq!(reparsed.sort_key(), seq.sort_key(), "for {text}");
        }
    }

    #[test]
    fn test_increment_updates_raw_value() {
        let mut seq = SeqValue::parse("1.9");
        seq.increment();
        assert_eq!(seq.value(), "1.10");
        assert_eq!(seq.value_to_write(), "1.10");
    }

    #[test]
    fn test_increment_empty_starts_at_one() {
        let mut seq = SeqValue::parse("");
        seq.increment();
        assert_eq!(seq.value_to_write(), "1");
    }

    #[test]
    fn test_increment_at_level_only_touches_primary() {
        let mut seq = SeqValue::parse("1.3; 7");
        seq.increment_at_level(2, false);
        assert_eq!(seq.value_to_write(), "1.3.1; 7");
    }
}
