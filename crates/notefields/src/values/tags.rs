//! Tag values.
//!
//! Tags are separated by `,` or `;`. A tag may be hierarchical, with levels
//! separated by `.` or `/` (`project.garden`, `home/kitchen`); levels are
//! always written back with `.`. Duplicate tags (ignoring case) are dropped,
//! first spelling wins.

use super::{FieldValue, MultiValues};

const TAG_SEPARATORS: &[char] = &[',', ';'];
const LEVEL_SEPARATORS: &[char] = &['.', '/'];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    levels: Vec<String>,
}

impl Tag {
    pub fn parse(text: &str) -> Option<Self> {
        let levels: Vec<String> = text
            .split(LEVEL_SEPARATORS)
            .map(|level| level.split_whitespace().collect::<Vec<_>>().join(" "))
            .filter(|level| !level.is_empty())
            .collect();
        (!levels.is_empty()).then_some(Self { levels })
    }

    pub fn levels(&self) -> &[String] {
        &self.levels
    }

    /// True when `other` names this tag or one of its ancestors.
    pub fn starts_with(&self, other: &Tag) -> bool {
        other.levels.len() <= self.levels.len()
            && other
                .levels
                .iter()
                .zip(&self.levels)
                .all(|(a, b)| a.eq_ignore_ascii_case(b))
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.levels.join("."))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TagsValue {
    value: String,
    tags: Vec<Tag>,
}

impl TagsValue {
    pub const DELIMITER: &'static str = ", ";

    pub fn parse(text: &str) -> Self {
        let mut tags: Vec<Tag> = Vec::new();
        for tag in text.split(TAG_SEPARATORS).filter_map(Tag::parse) {
            let key = tag.to_string().to_lowercase();
            if !tags.iter().any(|t| t.to_string().to_lowercase() == key) {
                tags.push(tag);
            }
        }
        Self {
            value: text.to_string(),
            tags,
        }
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// True when any tag is `tag` or lies beneath it.
    pub fn contains(&self, tag: &str) -> bool {
        match Tag::parse(tag) {
            Some(wanted) => self.tags.iter().any(|t| t.starts_with(&wanted)),
            None => false,
        }
    }
}

impl FieldValue for TagsValue {
    fn value(&self) -> &str {
        &self.value
    }

    fn sort_key(&self) -> String {
        self.value_to_write().to_lowercase()
    }

    fn value_to_write(&self) -> String {
        self.tags
            .iter()
            .map(Tag::to_string)
            .collect::<Vec<_>>()
            .join(Self::DELIMITER)
    }

    fn has_data(&self) -> bool {
        !self.tags.is_empty()
    }
}

impl MultiValues for TagsValue {
    fn count(&self) -> usize {
        self.tags.len()
    }

    fn at(&self, index: usize) -> Option<String> {
        self.tags.get(index).map(Tag::to_string)
    }

    fn delimiter(&self) -> &'static str {
        Self::DELIMITER
    }
}
