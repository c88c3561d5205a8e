//! Plain text values and their close relatives.

use super::FieldValue;
use crate::label::common_form;

/// Free text stored verbatim. Also used for text blocks such as the body.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StringValue {
    value: String,
}

impl StringValue {
    pub fn new(text: &str) -> Self {
        Self {
            value: text.to_string(),
        }
    }
}

impl FieldValue for StringValue {
    fn value(&self) -> &str {
        &self.value
    }
}

/// A note title.
///
/// Sorting ignores case and punctuation, so `"The Road"` and `"the road!"`
/// land together.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TitleValue {
    value: String,
}

impl TitleValue {
    pub fn new(text: &str) -> Self {
        Self {
            value: text.trim().to_string(),
        }
    }

    /// Lowercase words joined by single hyphens, e.g. `"my-first-note"`.
    pub fn lower_hyphenated(&self) -> String {
        lower_hyphenated(&self.value)
    }
}

/// Lowercases `text` and replaces every run of non-alphanumerics with one hyphen.
pub(crate) fn lower_hyphenated(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_hyphen = false;
    for c in text.chars() {
        if c.is_alphanumeric() {
            if pending_hyphen && !out.is_empty() {
                out.push('-');
            }
            pending_hyphen = false;
            out.extend(c.to_lowercase());
        } else {
            pending_hyphen = true;
        }
    }
    out
}

impl FieldValue for TitleValue {
    fn value(&self) -> &str {
        &self.value
    }

    fn sort_key(&self) -> String {
        common_form(&self.value)
    }
}

/// The klass of a note; names a template that can supply default fields.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KlassValue {
    value: String,
}

impl KlassValue {
    pub fn new(text: &str) -> Self {
        Self {
            value: text.trim().to_string(),
        }
    }

    /// The klass name in common form, used to look up templates.
    pub fn klass_name(&self) -> String {
        common_form(&self.value)
    }
}

impl FieldValue for KlassValue {
    fn value(&self) -> &str {
        &self.value
    }

    fn sort_key(&self) -> String {
        self.value.to_lowercase()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EmailValue {
    value: String,
}

impl EmailValue {
    pub fn new(text: &str) -> Self {
        let trimmed = text.trim();
        let value = trimmed
            .strip_prefix("mailto:")
            .unwrap_or(trimmed)
            .to_string();
        Self { value }
    }

    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.value)
    }
}

impl FieldValue for EmailValue {
    fn value(&self) -> &str {
        &self.value
    }

    fn sort_key(&self) -> String {
        self.value.to_lowercase()
    }
}

/// A phone number; sorts by its digits alone.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PhoneValue {
    value: String,
}

impl PhoneValue {
    pub fn new(text: &str) -> Self {
        Self {
            value: text.trim().to_string(),
        }
    }

    pub fn digits(&self) -> String {
        self.value.chars().filter(|c| c.is_ascii_digit()).collect()
    }
}

impl FieldValue for PhoneValue {
    fn value(&self) -> &str {
        &self.value
    }

    fn sort_key(&self) -> String {
        self.digits()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_value_is_verbatim() {
        let v = StringValue::new("  Mixed Case, punct!  ");
        assert_eq!(v.sort_key(), "  Mixed Case, punct!  ");
        assert_eq!(v.value_to_write(), "  Mixed Case, punct!  ");
        assert!(v.has_data());
        assert!(!StringValue::new("   ").has_data());
    }

    #[test]
    fn test_title_sort_key_ignores_case_and_punctuation() {
        assert_eq!(TitleValue::new("The Road!").sort_key(), "theroad");
        assert_eq!(
            TitleValue::new("the road").sort_key(),
            TitleValue::new("The Road!").sort_key()
        );
    }

    #[test]
    fn test_title_lower_hyphenated() {
        assert_eq!(
            TitleValue::new("  My First -- Note! ").lower_hyphenated(),
            "my-first-note"
        );
        assert_eq!(lower_hyphenated("..."), "");
    }

    #[test]
    fn test_klass_name_is_common_form() {
        assert_eq!(KlassValue::new(" Book Review ").klass_name(), "bookreview");
    }

    #[test]
    fn test_email_strips_mailto() {
        let v = EmailValue::new(" mailto:Ann@Example.com ");
        assert_eq!(v.value(), "Ann@Example.com");
        assert_eq!(v.sort_key(), "ann@example.com");
        assert_eq!(v.mailto(), "mailto:Ann@Example.com");
    }

    #[test]
    fn test_phone_sorts_by_digits() {
        let v = PhoneValue::new("(555) 123-4567");
        assert_eq!(v.sort_key(), "5551234567");
        assert_eq!(v.value_to_display(), "(555) 123-4567");
    }
}
