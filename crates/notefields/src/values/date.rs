//! Date values.
//!
//! Dates are kept exactly as typed and parsed leniently for sorting. All of
//! these are understood:
//!
//! | Input | Parsed as |
//! |-------|-----------|
//! | `2024-03-15` | 15 March 2024 |
//! | `03/15/2024`, `3/15/24` | 15 March 2024 |
//! | `15/03/2024` | 15 March 2024 (first number above 12 is the day) |
//! | `March 15, 2024`, `15 Mar 2024`, `Fri, 15th Mar 2024` | 15 March 2024 |
//! | `2024-03`, `March 2024` | March 2024, no day |
//! | `2024` | the year 2024 |
//! | `March 15 - 20, 2024`, `2024-03-15 to 2024-03-20` | a range; the start sorts |
//!
//! Anything without a recognizable year is kept verbatim and sorts by its
//! lowercased text.

use chrono::NaiveDate;

use super::FieldValue;

const MONTH_NAMES: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

const DATE_KEY_WIDTH: usize = 10;

const RANGE_WORDS: &[&str] = &["to", "thru", "through", "until"];

fn month_from_word(word: &str) -> Option<u32> {
    let lower = word.to_lowercase();
    if lower.len() < 3 {
        return None;
    }
    MONTH_NAMES
        .iter()
        .position(|name| name.starts_with(&lower))
        .map(|i| i as u32 + 1)
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Number { value: u32, digits: usize },
    Word(String),
    Range,
}

fn tokenize(text: &str) -> Vec<Token> {
    let chars: Vec<char> = text.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if c.is_ascii_digit() {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
            let digits: String = chars[start..i].iter().collect();
            // Runs too long for a u32 cannot be date parts anyway.
            if let Ok(value) = digits.parse::<u32>() {
                tokens.push(Token::Number {
                    value,
                    digits: digits.len(),
                });
            }
            continue;
        }
        if c.is_alphabetic() {
            let start = i;
            while i < chars.len() && chars[i].is_alphabetic() {
                i += 1;
            }
            let word: String = chars[start..i].iter().collect();
            if RANGE_WORDS.contains(&word.to_lowercase().as_str()) {
                tokens.push(Token::Range);
            } else {
                tokens.push(Token::Word(word));
            }
            continue;
        }
        let spaced = |j: usize| j < chars.len() && chars[j].is_whitespace();
        if (c == '-' || c == '–') && i > 0 && spaced(i - 1) && spaced(i + 1) {
            tokens.push(Token::Range);
        }
        i += 1;
    }
    tokens
}

/// A calendar date where any part may be unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PartialDate {
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub day: Option<u32>,
}

impl PartialDate {
    fn from_tokens(tokens: &[Token]) -> Self {
        let mut date = PartialDate::default();
        let mut pending: Vec<u32> = Vec::new();
        let mut year_first = false;

        for token in tokens {
            match token {
                Token::Word(word) => {
                    if date.month.is_none() {
                        date.month = month_from_word(word);
                    }
                }
                Token::Number { value, digits } => {
                    if (*digits == 4 || *value > 31) && date.year.is_none() {
                        date.year = i32::try_from(*value).ok();
                        year_first = pending.is_empty() && date.month.is_none();
                    } else {
                        pending.push(*value);
                    }
                }
                Token::Range => {}
            }
        }

        if date.month.is_some() {
            date.day = pending.first().copied();
            if date.year.is_none() {
                date.year = pending.get(1).map(|y| expand_year(*y));
            }
        } else if year_first {
            date.month = pending.first().copied();
            date.day = pending.get(1).copied();
        } else if let [a, b, rest @ ..] = pending.as_slice() {
            if *a > 12 {
                date.day = Some(*a);
                date.month = Some(*b);
            } else {
                date.month = Some(*a);
                date.day = Some(*b);
            }
            if date.year.is_none() {
                date.year = rest.first().map(|y| expand_year(*y));
            }
        } else if let [a] = pending.as_slice() {
            if date.year.is_some() {
                date.month = Some(*a);
            }
        }

        date.validate()
    }

    fn validate(mut self) -> Self {
        if !self.month.is_some_and(|m| (1..=12).contains(&m)) {
            self.month = None;
            self.day = None;
        }
        let day_ok = match (self.year, self.month, self.day) {
            (Some(y), Some(m), Some(d)) => NaiveDate::from_ymd_opt(y, m, d).is_some(),
            (_, _, Some(d)) => (1..=31).contains(&d),
            _ => true,
        };
        if !day_ok {
            self.day = None;
        }
        self
    }

    pub fn is_complete(&self) -> bool {
        self.naive_date().is_some()
    }

    pub fn naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year?, self.month?, self.day?)
    }

    /// `YYYY-MM-DD`, with `00` standing in for an unknown month or day.
    pub fn ymd(&self) -> Option<String> {
        let year = self.year?;
        Some(format!(
            "{:04}-{:02}-{:02}",
            year,
            self.month.unwrap_or(0),
            self.day.unwrap_or(0)
        ))
    }
}

fn expand_year(y: u32) -> i32 {
    let y = y as i32;
    if y < 100 {
        2000 + y
    } else {
        y
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DateValue {
    value: String,
    start: PartialDate,
    end: Option<PartialDate>,
}

impl DateValue {
    pub fn parse(text: &str) -> Self {
        let tokens = tokenize(text);
        let (start_tokens, end_tokens) = match tokens.iter().position(|t| *t == Token::Range) {
            Some(i) => (&tokens[..i], Some(&tokens[i + 1..])),
            None => (&tokens[..], None),
        };

        let mut start = PartialDate::from_tokens(start_tokens);
        let mut end = end_tokens.map(|tokens| end_of_range(tokens, &start));

        if let Some(end) = end.as_mut() {
            if start.year.is_none() {
                start.year = end.year;
                start = start.validate();
            }
            if end.year.is_none() {
                end.year = start.year;
            }
        }
        let end = end.filter(|e| e.year.is_some());

        Self {
            value: text.trim().to_string(),
            start,
            end,
        }
    }

    pub fn from_naive(date: NaiveDate) -> Self {
        Self::parse(&date.format("%Y-%m-%d").to_string())
    }

    pub fn start(&self) -> &PartialDate {
        &self.start
    }

    pub fn end(&self) -> Option<&PartialDate> {
        self.end.as_ref()
    }

    pub fn naive_date(&self) -> Option<NaiveDate> {
        self.start.naive_date()
    }

    pub fn year(&self) -> Option<i32> {
        self.start.year
    }
}

/// The end of a range borrows whatever parts it omits from the start
/// (`March 15 - 20`).
fn end_of_range(tokens: &[Token], start: &PartialDate) -> PartialDate {
    let has_month_word = tokens
        .iter()
        .any(|t| matches!(t, Token::Word(w) if month_from_word(w).is_some()));
    let numbers: Vec<&Token> = tokens
        .iter()
        .filter(|t| matches!(t, Token::Number { .. }))
        .collect();

    if !has_month_word && start.month.is_some() {
        if let Some(Token::Number { value, .. }) = numbers.first() {
            if *value <= 31 && numbers.len() <= 2 {
                let year = numbers.get(1).and_then(|t| match t {
                    Token::Number { value, .. } => Some(expand_year(*value)),
                    _ => None,
                });
                return PartialDate {
                    year: year.or(start.year),
                    month: start.month,
                    day: Some(*value),
                }
                .validate();
            }
        }
    }
    PartialDate::from_tokens(tokens)
}

impl FieldValue for DateValue {
    fn value(&self) -> &str {
        &self.value
    }

    /// `YYYY-MM-DD`. A blank date keys as spaces of the same width, so it
    /// sorts first without shifting what follows it in a composite key.
    fn sort_key(&self) -> String {
        if self.value.is_empty() {
            return " ".repeat(DATE_KEY_WIDTH);
        }
        self.start
            .ymd()
            .unwrap_or_else(|| self.value.to_lowercase())
    }
}

impl From<NaiveDate> for DateValue {
    fn from(date: NaiveDate) -> Self {
        DateValue::from_naive(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(text: &str) -> String {
        DateValue::parse(text).sort_key()
    }

    #[test]
    fn test_blank_date_keys_at_full_width() {
        assert_eq!(key(""), "          ");
        assert_eq!(key("   ").len(), key("2024-03-15").len());
        assert!(key("") < key("0001-01-01"));
    }

    #[test]
    fn test_iso_dates() {
        assert_eq!(key("2024-03-15"), "2024-03-15");
        assert_eq!(key("2024-03"), "2024-03-00");
        assert_eq!(key("2024"), "2024-00-00");
    }

    #[test]
    fn test_us_and_european_numeric_dates() {
        assert_eq!(key("03/15/2024"), "2024-03-15");
        assert_eq!(key("3/15/24"), "2024-03-15");
        assert_eq!(key("15/03/2024"), "2024-03-15");
    }

    #[test]
    fn test_written_dates() {
        assert_eq!(key("March 15, 2024"), "2024-03-15");
        assert_eq!(key("15 Mar 2024"), "2024-03-15");
        assert_eq!(key("Fri, 15th Mar 2024"), "2024-03-15");
        assert_eq!(key("Sept 2023"), "2023-09-00");
    }

    #[test]
    fn test_ranges_sort_by_start() {
        let v = DateValue::parse("March 15 - 20, 2024");
        assert_eq!(v.sort_key(), "2024-03-15");
        let end = v.end().unwrap();
        assert_eq!(end.day, Some(20));
        assert_eq!(end.month, Some(3));
        assert_eq!(end.year, Some(2024));

        let v = DateValue::parse("2024-03-15 to 2024-04-02");
        assert_eq!(v.end().unwrap().ymd().as_deref(), Some("2024-04-02"));
    }

    #[test]
    fn test_invalid_day_is_dropped() {
        assert_eq!(key("2023-02-30"), "2023-02-00");
    }

    #[test]
    fn test_unparseable_text_is_kept() {
        let v = DateValue::parse("  Someday ");
        assert_eq!(v.value(), "Someday");
        assert_eq!(v.sort_key(), "someday");
        assert!(v.naive_date().is_none());
    }

    #[test]
    fn test_sort_key_is_stable_under_reparsing() {
        for text in ["March 15, 2024", "3/15/24", "2024", "whenever", "15 - 20 May 2021"] {
            let v = DateValue::parse(text);
            assert_eq!(DateValue::parse(&v.value_to_write()).sort_key(), v.sort_key());
        }
    }

    #[test]
    fn test_from_naive_date() {
        let d = NaiveDate::from_ymd_opt(2021, 7, 4).unwrap();
        let v = DateValue::from(d);
        assert_eq!(v.value(), "2021-07-04");
        assert_eq!(v.naive_date(), Some(d));
        assert_eq!(v.year(), Some(2021));
    }

    #[test]
    fn test_chronological_ordering() {
        let mut dates = vec!["Dec 1, 2023", "2024-01-05", "2023", "5 Jan 2024"];
        dates.sort_by_key(|d| key(d));
        assert_eq!(dates, vec!["2023", "Dec 1, 2023", "2024-01-05", "5 Jan 2024"]);
    }
}
