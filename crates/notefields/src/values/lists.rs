//! Semicolon-delimited lists: index terms and note links.

use super::{FieldValue, MultiValues};

fn split_terms(text: &str) -> Vec<String> {
    text.split(';')
        .map(|term| term.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|term| !term.is_empty())
        .collect()
}

/// Index terms for a back-of-the-book style index.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IndexValue {
    value: String,
    terms: Vec<String>,
}

impl IndexValue {
    pub const DELIMITER: &'static str = "; ";

    pub fn parse(text: &str) -> Self {
        Self {
            value: text.to_string(),
            terms: split_terms(text),
        }
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }
}

impl FieldValue for IndexValue {
    fn value(&self) -> &str {
        &self.value
    }

    fn sort_key(&self) -> String {
        self.value_to_write().to_lowercase()
    }

    fn value_to_write(&self) -> String {
        self.terms.join(Self::DELIMITER)
    }

    fn has_data(&self) -> bool {
        !self.terms.is_empty()
    }
}

impl MultiValues for IndexValue {
    fn count(&self) -> usize {
        self.terms.len()
    }

    fn at(&self, index: usize) -> Option<String> {
        self.terms.get(index).cloned()
    }

    fn delimiter(&self) -> &'static str {
        Self::DELIMITER
    }
}

/// Titles of other notes, typed bare or as `[[wiki links]]`. Used for both
/// outgoing wiki links and the backlinks pointing at a note.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NoteLinksValue {
    value: String,
    titles: Vec<String>,
}

impl NoteLinksValue {
    pub const DELIMITER: &'static str = "; ";

    pub fn parse(text: &str) -> Self {
        let mut titles: Vec<String> = Vec::new();
        for term in split_terms(text) {
            let title = term
                .trim_start_matches("[[")
                .trim_end_matches("]]")
                .trim()
                .to_string();
            if !title.is_empty() && !titles.iter().any(|t| t.eq_ignore_ascii_case(&title)) {
                titles.push(title);
            }
        }
        Self {
            value: text.to_string(),
            titles,
        }
    }

    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    /// Adds `title` unless it is already linked. Returns whether it was added.
    pub fn add(&mut self, title: &str) -> bool {
        let title = title.trim();
        if title.is_empty() || self.titles.iter().any(|t| t.eq_ignore_ascii_case(title)) {
            return false;
        }
        self.titles.push(title.to_string());
        self.value = self.value_to_write();
        true
    }

    pub fn remove(&mut self, title: &str) -> bool {
        let before = self.titles.len();
        self.titles.retain(|t| !t.eq_ignore_ascii_case(title.trim()));
        self.value = self.value_to_write();
        self.titles.len() != before
    }
}

impl FieldValue for NoteLinksValue {
    fn value(&self) -> &str {
        &self.value
    }

    fn sort_key(&self) -> String {
        self.value_to_write().to_lowercase()
    }

    fn value_to_write(&self) -> String {
        self.titles.join(Self::DELIMITER)
    }

    fn value_to_display(&self) -> String {
        self.titles
            .iter()
            .map(|t| format!("[[{}]]", t))
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn has_data(&self) -> bool {
        !self.titles.is_empty()
    }
}

impl MultiValues for NoteLinksValue {
    fn count(&self) -> usize {
        self.titles.len()
    }

    fn at(&self, index: usize) -> Option<String> {
        self.titles.get(index).cloned()
    }

    fn delimiter(&self) -> &'static str {
        Self::DELIMITER
    }
}
