//! Time-of-day values and the date-time stamps kept in `Date Added` /
//! `Date Modified`.

use chrono::{Local, NaiveDateTime, NaiveTime};

use super::date::DateValue;
use super::FieldValue;

const STAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const STAMP_KEY_WIDTH: usize = 19;

/// A date and time of day, written as `YYYY-MM-DD HH:MM:SS`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DateTimeValue {
    value: String,
    stamp: Option<NaiveDateTime>,
}

impl DateTimeValue {
    pub fn parse(text: &str) -> Self {
        let value = text.trim().to_string();
        let stamp = NaiveDateTime::parse_from_str(&value, STAMP_FORMAT)
            .or_else(|_| NaiveDateTime::parse_from_str(&value, "%Y-%m-%d %H:%M"))
            .ok()
            .or_else(|| {
                DateValue::parse(&value)
                    .naive_date()
                    .and_then(|d| d.and_hms_opt(0, 0, 0))
            });
        Self { value, stamp }
    }

    /// The current local time, truncated to seconds.
    pub fn now() -> Self {
        Self::from(Local::now().naive_local())
    }

    pub fn stamp(&self) -> Option<NaiveDateTime> {
        self.stamp
    }
}

impl From<NaiveDateTime> for DateTimeValue {
    fn from(stamp: NaiveDateTime) -> Self {
        Self::parse(&stamp.format(STAMP_FORMAT).to_string())
    }
}

impl FieldValue for DateTimeValue {
    fn value(&self) -> &str {
        &self.value
    }

    fn sort_key(&self) -> String {
        match self.stamp {
            Some(stamp) => stamp.format(STAMP_FORMAT).to_string(),
            None if self.value.is_empty() => " ".repeat(STAMP_KEY_WIDTH),
            None => self.value.to_lowercase(),
        }
    }

    fn value_to_write(&self) -> String {
        match self.stamp {
            Some(stamp) => stamp.format(STAMP_FORMAT).to_string(),
            None => self.value.clone(),
        }
    }
}

/// A time of day such as `9:30 am` or `14:05`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TimeOfDayValue {
    value: String,
    time: Option<NaiveTime>,
}

impl TimeOfDayValue {
    pub fn parse(text: &str) -> Self {
        let value = text.trim().to_string();
        let time = parse_time_of_day(&value);
        Self { value, time }
    }

    pub fn time(&self) -> Option<NaiveTime> {
        self.time
    }
}

fn parse_time_of_day(text: &str) -> Option<NaiveTime> {
    let lower = text.to_lowercase();
    let numbers: Vec<u32> = lower
        .split(|c: char| !c.is_ascii_digit())
        .filter(|part| !part.is_empty())
        .filter_map(|part| part.parse().ok())
        .collect();
    let (mut hour, minute) = match numbers.as_slice() {
        // "0930" style
        [hm] if *hm >= 100 => (hm / 100, hm % 100),
        [h] => (*h, 0),
        [h, m, ..] => (*h, *m),
        [] => return None,
    };
    let letters: String = lower.chars().filter(|c| c.is_ascii_alphabetic()).collect();
    match letters.as_str() {
        "pm" | "p" if hour < 12 => hour += 12,
        "am" | "a" if hour == 12 => hour = 0,
        _ => {}
    }
    NaiveTime::from_hms_opt(hour, minute, 0)
}

impl FieldValue for TimeOfDayValue {
    fn value(&self) -> &str {
        &self.value
    }

    fn sort_key(&self) -> String {
        match self.time {
            Some(time) => time.format("%H:%M").to_string(),
            None => self.value.to_lowercase(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stamp_round_trips() {
        let v = DateTimeValue::parse("2024-03-15 14:05:09");
        assert!(v.stamp().is_some());
        assert_eq!(v.value_to_write(), "2024-03-15 14:05:09");
        assert_eq!(v.sort_key(), "2024-03-15 14:05:09");
    }

    #[test]
    fn test_blank_stamp_keys_at_full_width() {
        let blank = DateTimeValue::parse("").sort_key();
        let stamped = DateTimeValue::parse("2024-03-15 14:05:09").sort_key();
        assert_eq!(blank.len(), stamped.len());
        assert!(blank < stamped);
    }

    #[test]
    fn test_stamp_accepts_plain_dates() {
        let v = DateTimeValue::parse("March 15, 2024");
        assert_eq!(v.value_to_write(), "2024-03-15 00:00:00");
    }

    #[test]
    fn test_stamp_keeps_unparseable_text() {
        let v = DateTimeValue::parse("yesterday-ish");
        assert!(v.stamp().is_none());
        assert_eq!(v.value_to_write(), "yesterday-ish");
    }

    #[test]
    fn test_now_is_well_formed() {
        let v = DateTimeValue::now();
        assert!(v.stamp().is_some());
        assert_eq!(v.value().len(), 19);
    }

    #[test]
    fn test_times_of_day() {
        assert_eq!(TimeOfDayValue::parse("9:30 am").sort_key(), "09:30");
        assert_eq!(TimeOfDayValue::parse("9:30 PM").sort_key(), "21:30");
        assert_eq!(TimeOfDayValue::parse("12 am").sort_key(), "00:00");
        assert_eq!(TimeOfDayValue::parse("14:05").sort_key(), "14:05");
        assert_eq!(TimeOfDayValue::parse("0930").sort_key(), "09:30");
        assert_eq!(TimeOfDayValue::parse("noonish").sort_key(), "noonish");
        assert!(TimeOfDayValue::parse("25:00").time().is_none());
    }
}
