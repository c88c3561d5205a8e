//! Author values: one or more people, sorted last name first.
//!
//! Accepted forms for a single author:
//! - `First Last` (`Ursula K. Le Guin` reads as last name `Guin`; prefer the next form)
//! - `Last, First` (`Le Guin, Ursula K.`)
//! - either of the above with a generational suffix (`King, Martin Luther, Jr.`)
//!
//! Several authors are separated by `;`, or by `and` / `&` when no `;` is present.

use super::{FieldValue, MultiValues};

const SUFFIXES: &[&str] = &["jr", "sr", "ii", "iii", "iv", "phd", "md"];

fn is_suffix(word: &str) -> bool {
    let bare: String = word
        .chars()
        .filter(|c| c.is_alphanumeric())
        .collect::<String>()
        .to_lowercase();
    SUFFIXES.contains(&bare.as_str())
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Author {
    original: String,
    first: String,
    last: String,
    suffix: String,
}

impl Author {
    pub fn parse(text: &str) -> Self {
        let original = text.trim().to_string();
        let mut author = Author {
            original: original.clone(),
            ..Default::default()
        };

        if let Some((last, rest)) = original.split_once(',') {
            author.last = last.trim().to_string();
            match rest.split_once(',') {
                Some((first, suffix)) => {
                    author.first = first.trim().to_string();
                    author.suffix = suffix.trim().to_string();
                }
                None if is_suffix(rest.trim()) => author.suffix = rest.trim().to_string(),
                None => author.first = rest.trim().to_string(),
            }
            return author;
        }

        let mut words: Vec<&str> = original.split_whitespace().collect();
        if words.len() > 1 && words.last().is_some_and(|w| is_suffix(w)) {
            author.suffix = words.pop().unwrap_or_default().to_string();
        }
        if let Some(last) = words.pop() {
            author.last = last.trim_end_matches(',').to_string();
        }
        author.first = words.join(" ");
        author
    }

    pub fn first_name(&self) -> &str {
        &self.first
    }

    pub fn last_name(&self) -> &str {
        &self.last
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// `First Last Suffix`, skipping empty parts.
    pub fn complete_name(&self) -> String {
        [self.first.as_str(), self.last.as_str(), self.suffix.as_str()]
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// `Last, First, Suffix`, skipping empty parts.
    pub fn last_name_first(&self) -> String {
        [self.last.as_str(), self.first.as_str(), self.suffix.as_str()]
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn sort_key(&self) -> String {
        format!("{} {}", self.last, self.first).trim().to_lowercase()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AuthorValue {
    value: String,
    authors: Vec<Author>,
}

impl AuthorValue {
    pub const DELIMITER: &'static str = "; ";

    pub fn parse(text: &str) -> Self {
        let pieces: Vec<&str> = if text.contains(';') {
            text.split(';').collect()
        } else {
            split_on_conjunction(text)
        };
        let authors = pieces
            .into_iter()
            .map(str::trim)
            .filter(|piece| !piece.is_empty())
            .map(Author::parse)
            .collect();
        Self {
            value: text.to_string(),
            authors,
        }
    }

    pub fn authors(&self) -> &[Author] {
        &self.authors
    }
}

/// Splits on standalone `and` / `&` words.
fn split_on_conjunction(text: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut start = 0;
    let mut offset = 0;
    for word in text.split_inclusive(char::is_whitespace) {
        let bare = word.trim();
        if bare.eq_ignore_ascii_case("and") || bare == "&" {
            pieces.push(&text[start..offset]);
            start = offset + word.len();
        }
        offset += word.len();
    }
    pieces.push(&text[start..]);
    pieces
}

impl FieldValue for AuthorValue {
    fn value(&self) -> &str {
        &self.value
    }

    fn sort_key(&self) -> String {
        self.authors
            .iter()
            .map(Author::sort_key)
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn value_to_write(&self) -> String {
        self.authors
            .iter()
            .map(|a| a.original.as_str())
            .collect::<Vec<_>>()
            .join(Self::DELIMITER)
    }

    fn value_to_display(&self) -> String {
        let names: Vec<String> = self.authors.iter().map(Author::complete_name).collect();
        match names.split_last() {
            None => String::new(),
            Some((only, [])) => only.clone(),
            Some((last, rest)) => format!("{} and {}", rest.join(", "), last),
        }
    }

    fn has_data(&self) -> bool {
        !self.authors.is_empty()
    }
}

impl MultiValues for AuthorValue {
    fn count(&self) -> usize {
        self.authors.len()
    }

    fn at(&self, index: usize) -> Option<String> {
        self.authors.get(index).map(Author::complete_name)
    }

    fn delimiter(&self) -> &'static str {
        Self::DELIMITER
    }
}
