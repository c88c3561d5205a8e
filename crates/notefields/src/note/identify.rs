//! Note identifiers.
//!
//! A note is identified by its title, optionally combined with an auxiliary
//! field (a date, an author, a work title) so that two notes sharing a title
//! can still be told apart. The collection's [`IdRule`] decides how:
//!
//! | Rule | Display id for title `Notes`, aux `2024` |
//! |------|------------------------------------------|
//! | `title-only` | `Notes` |
//! | `title-before-aux` | `Notes 2024` |
//! | `title-after-aux` | `2024 Notes` |
//! | `aux-only` | `2024` |
//!
//! The unique id is the display id lowercased and hyphenated (`notes-2024`).
//! When a part is empty the other stands alone.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FieldError;
use crate::label::common_form;
use crate::values::lower_hyphenated;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IdRule {
    #[default]
    TitleOnly,
    TitleBeforeAux,
    TitleAfterAux,
    AuxOnly,
}

impl IdRule {
    pub const ALL: [IdRule; 4] = [
        IdRule::TitleOnly,
        IdRule::TitleBeforeAux,
        IdRule::TitleAfterAux,
        IdRule::AuxOnly,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            IdRule::TitleOnly => "title-only",
            IdRule::TitleBeforeAux => "title-before-aux",
            IdRule::TitleAfterAux => "title-after-aux",
            IdRule::AuxOnly => "aux-only",
        }
    }

    /// Whether the auxiliary field takes part in identifiers.
    pub fn uses_aux(&self) -> bool {
        !matches!(self, IdRule::TitleOnly)
    }

    pub fn compose(&self, title: &str, aux: &str) -> Identification {
        let title = title.trim();
        let aux = aux.trim();
        let display = match self {
            IdRule::TitleOnly => title.to_string(),
            IdRule::TitleBeforeAux => join_present(title, aux),
            IdRule::TitleAfterAux => join_present(aux, title),
            IdRule::AuxOnly if aux.is_empty() => title.to_string(),
            IdRule::AuxOnly => aux.to_string(),
        };
        Identification {
            id: lower_hyphenated(&display),
            display,
        }
    }
}

fn join_present(first: &str, second: &str) -> String {
    match (first.is_empty(), second.is_empty()) {
        (true, _) => second.to_string(),
        (_, true) => first.to_string(),
        _ => format!("{} {}", first, second),
    }
}

impl FromStr for IdRule {
    type Err = FieldError;

    /// Accepts the kebab-case name in any case or punctuation
    /// (`"Title Before Aux"` works too).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = common_form(s);
        IdRule::ALL
            .into_iter()
            .find(|rule| common_form(rule.name()) == wanted)
            .ok_or_else(|| FieldError::UnknownIdRule(s.to_string()))
    }
}

impl std::fmt::Display for IdRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The identifiers of one note.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identification {
    /// Lowercase and hyphenated, suitable for file names and links
    pub id: String,
    /// Human readable
    pub display: String,
}
