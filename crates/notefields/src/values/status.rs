//! Workflow status values.

use super::numbered::{Numbered, NumberedLabels};
use super::FieldValue;

pub const DEFAULT_STATUS_CONFIG: &str =
    "0 - Idea; 1 - Proposed; 2 - Approved; 3 - Started; 4 - In Work; 8 - Canceled; 9 - Completed";
pub const DEFAULT_DONE_THRESHOLD: u8 = 8;

/// The status table of a collection: single digits `0`-`9`, plus the digit
/// at which a note counts as done.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusValueConfig {
    labels: NumberedLabels,
    done_threshold: u8,
}

impl StatusValueConfig {
    pub fn new(options: &str, done_threshold: u8) -> Self {
        Self {
            labels: NumberedLabels::parse(options, 9),
            done_threshold: done_threshold.min(9),
        }
    }

    pub fn labels(&self) -> &NumberedLabels {
        &self.labels
    }

    pub fn done_threshold(&self) -> u8 {
        self.done_threshold
    }

    pub fn is_done(&self, digit: u8) -> bool {
        digit >= self.done_threshold
    }
}

impl Default for StatusValueConfig {
    fn default() -> Self {
        Self::new(DEFAULT_STATUS_CONFIG, DEFAULT_DONE_THRESHOLD)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusValue {
    inner: Numbered,
    done: bool,
}

impl StatusValue {
    /// Resolves `text` (a digit or a label prefix) against `config`; unknown
    /// text is kept as typed.
    pub fn parse(text: &str, config: &StatusValueConfig) -> Self {
        let inner = Numbered::parse(text, &config.labels);
        let done = inner.number.is_some_and(|n| config.is_done(n));
        Self { inner, done }
    }

    pub fn digit(&self) -> Option<u8> {
        self.inner.number
    }

    pub fn label(&self) -> Option<&str> {
        self.inner.label.as_deref()
    }

    pub fn is_done(&self) -> bool {
        self.done
    }
}

impl FieldValue for StatusValue {
    fn value(&self) -> &str {
        &self.inner.value
    }

    fn sort_key(&self) -> String {
        self.inner.sort_key(1)
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
    fn test_default_config() {
        let config = StatusValueConfig::default();
        assert_eq!(config.labels().len(), 7);
        assert_eq!(config.done_threshold(), 8);
        assert!(config.is_done(9));
        assert!(!config.is_done(4));
    }

    #[test]
    fn test_parses_digits_and_labels() {
        let config = StatusValueConfig::default();
        let s = StatusValue::parse("4", &config);
        assert_eq!(s.value_to_write(), "4 - In Work");
        assert_eq!(s.label(), Some("In Work"));
        assert!(!s.is_done());

        let s = StatusValue::parse("completed", &config);
        assert_eq!(s.digit(), Some(9));
        assert_eq!(s.sort_key(), "9");
        assert!(s.is_done());
    }

    #[test]
    fn test_unknown_status_is_kept() {
        let config = StatusValueConfig::default();
        let s = StatusValue::parse("Pending Review", &config);
        assert_eq!(s.digit(), None);
        assert_eq!(s.value_to_write(), "Pending Review");
        assert!(!s.is_done());
    }

    #[test]
    fn test_custom_threshold() {
        let config = StatusValueConfig::new("1 - Open; 5 - Closed", 5);
        assert!(StatusValue::parse("closed", &config).is_done());
        assert!(!StatusValue::parse("open", &config).is_done());
    }
}
