//! Boolean, integer and rating values.

use super::FieldValue;

const TRUE_WORDS: &[&str] = &["true", "yes", "y", "1", "x", "checked", "on"];

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BooleanValue {
    value: String,
    flag: bool,
}

impl BooleanValue {
    pub fn parse(text: &str) -> Self {
        let value = text.trim().to_string();
        let flag = TRUE_WORDS.contains(&value.to_lowercase().as_str());
        Self { value, flag }
    }

    pub fn is_true(&self) -> bool {
        self.flag
    }
}

impl From<bool> for BooleanValue {
    fn from(flag: bool) -> Self {
        Self {
            value: flag.to_string(),
            flag,
        }
    }
}

impl FieldValue for BooleanValue {
    fn value(&self) -> &str {
        &self.value
    }

    fn sort_key(&self) -> String {
        let key = if self.flag { "1" } else { "0" };
        key.to_string()
    }

    fn value_to_write(&self) -> String {
        self.flag.to_string()
    }
}

/// Digits in `i64::MAX`.
const INT_KEY_WIDTH: usize = 19;

/// A whole number. Text that is not a number is kept and sorts after every
/// number.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IntValue {
    value: String,
    number: Option<i64>,
}

impl IntValue {
    pub fn parse(text: &str) -> Self {
        let value = text.trim().to_string();
        let number = value.replace([',', '_'], "").parse::<i64>().ok();
        Self { value, number }
    }

    pub fn number(&self) -> Option<i64> {
        self.number
    }
}

impl From<i64> for IntValue {
    fn from(n: i64) -> Self {
        Self {
            value: n.to_string(),
            number: Some(n),
        }
    }
}

impl FieldValue for IntValue {
    fn value(&self) -> &str {
        &self.value
    }

    /// Negatives get a `-` prefix and a complemented magnitude so that plain
    /// string order matches numeric order; `-` sorts before digits.
    fn sort_key(&self) -> String {
        match self.number {
            Some(n) if n < 0 => {
                let complement = 10_i128.pow(INT_KEY_WIDTH as u32) - 1 + i128::from(n);
                format!("-{:0width$}", complement, width = INT_KEY_WIDTH)
            }
            Some(n) => format!("{:0width$}", n, width = INT_KEY_WIDTH),
            None => format!("~{}", self.value.to_lowercase()),
        }
    }

    fn value_to_write(&self) -> String {
        match self.number {
            Some(n) => n.to_string(),
            None => self.value.clone(),
        }
    }
}

const MAX_STARS: u8 = 5;

/// A rating from 0 to 5, typed as a digit or as stars (`***`).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RatingValue {
    value: String,
    stars: Option<u8>,
}

impl RatingValue {
    pub fn parse(text: &str) -> Self {
        let value = text.trim().to_string();
        let stars = if !value.is_empty() && value.chars().all(|c| c == '*' || c == '★') {
            u8::try_from(value.chars().count()).ok()
        } else {
            value
                .chars()
                .find(|c| c.is_ascii_digit())
                .and_then(|c| c.to_digit(10))
                .and_then(|d| u8::try_from(d).ok())
        };
        Self {
            value,
            stars: stars.map(|s| s.min(MAX_STARS)),
        }
    }

    pub fn stars(&self) -> Option<u8> {
        self.stars
    }
}

impl FieldValue for RatingValue {
    fn value(&self) -> &str {
        &self.value
    }

    fn sort_key(&self) -> String {
        match self.stars {
            Some(stars) => stars.to_string(),
            None => self.value.to_lowercase(),
        }
    }

    fn value_to_write(&self) -> String {
        match self.stars {
            Some(stars) => stars.to_string(),
            None => self.value.clone(),
        }
    }

    fn value_to_display(&self) -> String {
        match self.stars {
            Some(stars) => "*".repeat(stars as usize),
            None => self.value.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_booleans() {
        assert!(BooleanValue::parse("Yes").is_true());
        assert!(BooleanValue::parse("x").is_true());
        assert!(!BooleanValue::parse("no").is_true());
        assert!(!BooleanValue::parse("").is_true());
        assert_eq!(BooleanValue::parse("Y").value_to_write(), "true");
        assert_eq!(BooleanValue::from(false).sort_key(), "0");
    }

    #[test]
    fn test_integers_sort_numerically() {
        let mut values = vec![
            IntValue::parse("10"),
            IntValue::parse("-3"),
            IntValue::parse("2"),
            IntValue::parse("lots"),
            IntValue::parse("-20"),
            IntValue::parse("1,000"),
        ];
        values.sort_by_key(|v| v.sort_key());
        let written: Vec<String> = values.iter().map(|v| v.value_to_write()).collect();
        assert_eq!(written, vec!["-20", "-3", "2", "10", "1000", "lots"]);
    }

    #[test]
    fn test_integer_keys_cover_the_full_range() {
        let key = |text: &str| IntValue::parse(text).sort_key();
        assert!(key("9999999999") < key("12345678901"));
        assert!(key("-20000000000") < key("-10000000000"));
        assert!(key(&i64::MIN.to_string()) < key(&(i64::MIN + 1).to_string()));
        assert!(key("-1") < key("0"));
        assert!(key(&(i64::MAX - 1).to_string()) < key(&i64::MAX.to_string()));
        assert!(key(&i64::MAX.to_string()) < key("lots"));
        assert_eq!(key("0").len(), key(&i64::MAX.to_string()).len());
    }

    #[test]
    fn test_ratings() {
        assert_eq!(RatingValue::parse("***").stars(), Some(3));
        assert_eq!(RatingValue::parse("4 stars").stars(), Some(4));
        assert_eq!(RatingValue::parse("9").stars(), Some(5));
        assert_eq!(RatingValue::parse("**").value_to_write(), "2");
        assert_eq!(RatingValue::parse("2").value_to_display(), "**");
        assert_eq!(RatingValue::parse("great").stars(), None);
    }
}
