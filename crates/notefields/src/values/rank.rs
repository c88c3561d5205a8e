//! Rank (priority) and level values.
//!
//! Both resolve against a numbered table like status does, but allow two
//! digits and keep bare numbers the table does not name.

use super::numbered::{Numbered, NumberedLabels};
use super::FieldValue;

pub const DEFAULT_RANK_CONFIG: &str = "1 - High; 5 - Medium; 9 - Low";
pub const DEFAULT_LEVEL_CONFIG: &str = "1 - Top; 2 - Major; 3 - Minor; 4 - Detail";

const MAX_NUMBER: u8 = 99;
const KEY_WIDTH: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankValueConfig {
    labels: NumberedLabels,
}

impl RankValueConfig {
    pub fn new(options: &str) -> Self {
        Self {
            labels: NumberedLabels::parse(options, MAX_NUMBER),
        }
    }

    pub fn labels(&self) -> &NumberedLabels {
        &self.labels
    }
}

impl Default for RankValueConfig {
    fn default() -> Self {
        Self::new(DEFAULT_RANK_CONFIG)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RankValue {
    inner: Numbered,
}

impl RankValue {
    pub fn parse(text: &str, config: &RankValueConfig) -> Self {
        Self {
            inner: Numbered::parse_loose(text, &config.labels, MAX_NUMBER),
        }
    }

    pub fn number(&self) -> Option<u8> {
        self.inner.number
    }

    pub fn label(&self) -> Option<&str> {
        self.inner.label.as_deref()
    }
}

impl FieldValue for RankValue {
    fn value(&self) -> &str {
        &self.inner.value
    }

    fn sort_key(&self) -> String {
        self.inner.sort_key(KEY_WIDTH)
    }

    fn value_to_write(&self) -> String {
        self.inner.write()
    }

    fn value_to_display(&self) -> String {
        self.inner.display()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelValueConfig {
    labels: NumberedLabels,
}

impl LevelValueConfig {
    pub fn new(options: &str) -> Self {
        Self {
            labels: NumberedLabels::parse(options, MAX_NUMBER),
        }
    }

    pub fn labels(&self) -> &NumberedLabels {
        &self.labels
    }

    pub fn low(&self) -> Option<u8> {
        self.labels.lowest()
    }

    pub fn high(&self) -> Option<u8> {
        self.labels.highest()
    }
}

impl Default for LevelValueConfig {
    fn default() -> Self {
        Self::new(DEFAULT_LEVEL_CONFIG)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LevelValue {
    inner: Numbered,
}

impl LevelValue {
    pub fn parse(text: &str, config: &LevelValueConfig) -> Self {
        Self {
            inner: Numbered::parse_loose(text, &config.labels, MAX_NUMBER),
        }
    }

    pub fn number(&self) -> Option<u8> {
        self.inner.number
    }

    pub fn label(&self) -> Option<&str> {
        self.inner.label.as_deref()
    }
}

impl FieldValue for LevelValue {
    fn value(&self) -> &str {
        &self.inner.value
    }

    fn sort_key(&self) -> String {
        self.inner.sort_key(KEY_WIDTH)
    }

    fn value_to_write(&self) -> String {
        self.inner.write()
    }

    fn value_to_display(&self) -> String {
        self.inner.display()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_resolves_and_pads() {
        let config = RankValueConfig::default();
        let high = RankValue::parse("high", &config);
        assert_eq!(high.number(), Some(1));
        assert_eq!(high.value_to_write(), "1 - High");
        assert_eq!(high.sort_key(), "01");

        let low = RankValue::parse("9", &config);
        assert_eq!(low.label(), Some("Low"));
        assert!(high.sort_key() < low.sort_key());
    }

    #[test]
    fn test_rank_keeps_unnamed_numbers() {
        let config = RankValueConfig::default();
        let r = RankValue::parse("12", &config);
        assert_eq!(r.number(), Some(12));
        assert_eq!(r.sort_key(), "12");
        assert_eq!(r.value_to_write(), "12");
        assert!(RankValue::parse("5", &config).sort_key() < r.sort_key());
    }

    #[test]
    fn test_out_of_range_rank_sorts_after_numbers() {
        let config = RankValueConfig::default();
        let top = RankValue::parse("99", &config);
        let over = RankValue::parse("100", &config);
        assert_eq!(over.number(), None);
        assert_eq!(over.value_to_write(), "100");
        assert!(top.sort_key() < over.sort_key());
        assert!(RankValue::parse("whenever", &config).sort_key() > top.sort_key());
    }

    #[test]
    fn test_level_bounds() {
        let config = LevelValueConfig::default();
        assert_eq!(config.low(), Some(1));
        assert_eq!(config.high(), Some(4));
        let l = LevelValue::parse("minor", &config);
        assert_eq!(l.number(), Some(3));
        assert_eq!(l.value_to_display(), "Minor");
    }
}
