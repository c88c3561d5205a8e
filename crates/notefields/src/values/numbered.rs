//! Numbered label tables shared by status, rank and level.
//!
//! A table is configured with a string such as
//! `"0 - Idea; 1 - Proposed; 9 - Completed"`. Entries are separated by `;`
//! or `,`; each starts with a number, optionally followed by `-`, then the
//! label. Entries that do not start with a number, carry no label or exceed
//! the table's maximum are skipped, and the rest of the string still applies.

use std::collections::BTreeMap;

use crate::label::common_form;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NumberedLabels {
    entries: BTreeMap<u8, String>,
}

impl NumberedLabels {
    pub fn parse(options: &str, max: u8) -> Self {
        let mut entries = BTreeMap::new();
        for part in options.split([';', ',']) {
            let part = part.trim();
            let digits: String = part.chars().take_while(|c| c.is_ascii_digit()).collect();
            let Ok(number) = digits.parse::<u8>() else {
                continue;
            };
            if number > max {
                continue;
            }
            let label = part[digits.len()..]
                .trim_start_matches(|c: char| c.is_whitespace() || c == '-')
                .trim();
            if !label.is_empty() {
                entries.insert(number, label.to_string());
            }
        }
        Self { entries }
    }

    pub fn label(&self, number: u8) -> Option<&str> {
        self.entries.get(&number).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, &str)> {
        self.entries.iter().map(|(n, l)| (*n, l.as_str()))
    }

    pub fn lowest(&self) -> Option<u8> {
        self.entries.keys().next().copied()
    }

    pub fn highest(&self) -> Option<u8> {
        self.entries.keys().next_back().copied()
    }

    /// Resolves typed text to a table number.
    ///
    /// A leading number wins when the table knows it; otherwise the text is
    /// matched as a common-form prefix of a label (`"in wo"` finds `In Work`).
    pub fn lookup(&self, text: &str) -> Option<u8> {
        let text = text.trim();
        let digits: String = text.chars().take_while(|c| c.is_ascii_digit()).collect();
        if let Ok(number) = digits.parse::<u8>() {
            return self.entries.contains_key(&number).then_some(number);
        }
        let wanted = common_form(text);
        if wanted.is_empty() {
            return None;
        }
        self.entries
            .iter()
            .find(|(_, label)| common_form(label) == wanted)
            .or_else(|| {
                self.entries
                    .iter()
                    .find(|(_, label)| common_form(label).starts_with(&wanted))
            })
            .map(|(n, _)| *n)
    }

    /// Writes the table back in its configuration form.
    pub fn to_config_string(&self) -> String {
        self.iter()
            .map(|(n, label)| format!("{} - {}", n, label))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// A value resolved against a [`NumberedLabels`] table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct Numbered {
    pub(crate) value: String,
    pub(crate) number: Option<u8>,
    pub(crate) label: Option<String>,
}

impl Numbered {
    pub(crate) fn parse(text: &str, labels: &NumberedLabels) -> Self {
        let number = labels.lookup(text);
        Self {
            value: text.trim().to_string(),
            number,
            label: number.and_then(|n| labels.label(n)).map(str::to_string),
        }
    }

    /// A bare number outside any table, e.g. an unconfigured rank of `7`.
    pub(crate) fn parse_loose(text: &str, labels: &NumberedLabels, max: u8) -> Self {
        let resolved = Self::parse(text, labels);
        if resolved.number.is_some() {
            return resolved;
        }
        let trimmed = text.trim();
        let number = trimmed.parse::<u8>().ok().filter(|n| *n <= max);
        Self {
            value: trimmed.to_string(),
            number,
            label: None,
        }
    }

    pub(crate) fn write(&self) -> String {
        match (self.number, &self.label) {
            (Some(n), Some(label)) => format!("{} - {}", n, label),
            (Some(n), None) => n.to_string(),
            _ => self.value.clone(),
        }
    }

    /// Zero-padded number; text that resolved to none sorts after every
    /// number behind a `~`.
    pub(crate) fn sort_key(&self, width: usize) -> String {
        match self.number {
            Some(n) => format!("{:0width$}", n, width = width),
            None => format!("~{}", self.value.to_lowercase()),
        }
    }

    pub(crate) fn display(&self) -> String {
        match &self.label {
            Some(label) => label.clone(),
            None => self.write(),
        }
    }
}
