//! One punctuation-delimited level of a sequence number.

/// How the characters of a segment count.
///
/// Derived from the segment text alone, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberKind {
    /// `0`-`9` only (also reported for an empty segment)
    Digits,
    /// `a`-`z` only
    Lower,
    /// `A`-`Z` only
    Upper,
    /// Digits and letters together, or letters of both cases
    Mixed,
}

/// Advances a single character, reporting whether it wrapped around.
///
/// | input | result |
/// |---|---|
/// | `0`-`8` | next digit |
/// | `9` | `0`, carry |
/// | `a`-`y` / `A`-`Y` | next letter |
/// | `z` / `Z` | `a` / `A`, carry |
/// | anything else | unchanged, no carry |
pub fn increment_char(c: char) -> (char, bool) {
    match c {
        '0'..='8' | 'a'..='y' | 'A'..='Y' => ((c as u8 + 1) as char, false),
        '9' => ('0', true),
        'z' => ('a', true),
        'Z' => ('A', true),
        _ => (c, false),
    }
}

/// The character that starts a new leftmost place after a carry.
fn carry_seed(c: char) -> char {
    if c.is_ascii_lowercase() {
        'a'
    } else if c.is_ascii_uppercase() {
        'A'
    } else {
        '1'
    }
}

/// Increments text as an odometer: rightmost place first, carrying left.
///
/// `"9"` becomes `"10"`, `"z"` becomes `"aa"`, `"Az"` becomes `"Ba"`.
/// Empty text becomes `"1"`. A rightmost character that cannot be
/// incremented leaves the text unchanged.
pub fn increment_text(text: &str) -> String {
    if text.is_empty() {
        return "1".to_string();
    }

    let mut reversed: Vec<char> = Vec::with_capacity(text.len() + 1);
    let mut carry = true;
    let mut leftmost = None;
    for c in text.chars().rev() {
        if carry {
            let (next, carried) = increment_char(c);
            reversed.push(next);
            carry = carried;
        } else {
            reversed.push(c);
        }
        leftmost = Some(c);
    }
    if carry {
        if let Some(c) = leftmost {
            reversed.push(carry_seed(c));
        }
    }
    reversed.into_iter().rev().collect()
}

/// A single level of a sequence, e.g. the `3` in `1.3.2`.
///
/// `start_punct` is the punctuation that opened the segment and `end_punct`
/// the punctuation that closed it; both are empty for an unpunctuated end.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SeqSegment {
    text: String,
    start_punct: String,
    end_punct: String,
}

impl SeqSegment {
    pub fn new(start_punct: &str) -> Self {
        Self {
            text: String::new(),
            start_punct: start_punct.to_string(),
            end_punct: String::new(),
        }
    }

    pub fn with_text(text: &str, start_punct: &str, end_punct: &str) -> Self {
        Self {
            text: text.to_string(),
            start_punct: start_punct.to_string(),
            end_punct: end_punct.to_string(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn start_punct(&self) -> &str {
        &self.start_punct
    }

    pub fn end_punct(&self) -> &str {
        &self.end_punct
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub(crate) fn push(&mut self, c: char) {
        self.text.push(c);
    }

    pub(crate) fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    pub(crate) fn set_end_punct(&mut self, punct: &str) {
        self.end_punct = punct.to_string();
    }

    pub fn number_kind(&self) -> NumberKind {
        let digits = self.text.chars().any(|c| c.is_ascii_digit());
        let lower = self.text.chars().any(|c| c.is_ascii_lowercase());
        let upper = self.text.chars().any(|c| c.is_ascii_uppercase());
        match (digits, lower, upper) {
            (true, false, false) | (false, false, false) => NumberKind::Digits,
            (true, _, _) | (false, true, true) => NumberKind::Mixed,
            (false, true, false) => NumberKind::Lower,
            (false, false, true) => NumberKind::Upper,
        }
    }

    /// `'0'` for numeric segments so that `0` sorts apart from an unused level.
    pub fn pad_char(&self) -> char {
        if self.text.is_empty() {
            return ' ';
        }
        match self.number_kind() {
            NumberKind::Digits | NumberKind::Mixed => '0',
            NumberKind::Lower | NumberKind::Upper => ' ',
        }
    }

    /// Right-aligns the segment in `width` characters.
    pub fn sort_key(&self, width: usize) -> String {
        let text = &self.text;
        let len = text.chars().count();
        let mut key = String::with_capacity(width.max(len));
        for _ in len..width {
            key.push(self.pad_char());
        }
        key.push_str(text);
        key
    }

    pub fn increment(&mut self) {
        self.text = increment_text(&self.text);
    }
}
