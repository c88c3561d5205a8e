//! Field labels and their normalized forms.
//!
//! Every field in a note is introduced by a label typed by the user
//! (`"Date Added:"`, `"date-added"`, `"DATEADDED"`). All three name the same
//! field: labels are compared through their *common form*, which is the label
//! lowercased with everything but ASCII letters and digits removed.
//!
//! The *proper form* is what the user typed, trimmed and with inner runs of
//! whitespace collapsed. It is kept only for display and for writing the
//! label back out.
//!
//! ## Rules
//! - The common form must not be empty
//! - The common form must not be a URL scheme (`http`, `https`, `ftp`,
//!   `mailto`), otherwise a line such as `https://example.com` in free text
//!   would be read as a field

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Common forms that can never be used as field labels.
pub const RESERVED_LABELS: &[&str] = &["http", "https", "ftp", "mailto"];

/// Reduces a label to its common form: lowercase ASCII letters and digits only.
///
/// The function is idempotent: `common_form(&common_form(s)) == common_form(s)`.
pub fn common_form(label: &str) -> String {
    label
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Collapses surrounding and repeated inner whitespace.
fn proper_form(label: &str) -> String {
    label.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Checks a label against the naming rules.
///
/// # Examples
/// ```
/// use notefields::label::validate_label;
///
/// assert!(validate_label("Title").is_ok());
/// assert!(validate_label("Date Added").is_ok());
///
/// assert!(validate_label("").is_err());
/// assert!(validate_label("--").is_err());
/// assert!(validate_label("HTTPS").is_err());
/// ```
pub fn validate_label(label: &str) -> Result<(), LabelError> {
    let common = common_form(label);
    if common.is_empty() {
        return Err(LabelError::Empty);
    }
    if RESERVED_LABELS.contains(&common.as_str()) {
        return Err(LabelError::Reserved(common));
    }
    Ok(())
}

/// Error type for label validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelError {
    /// The label has no letters or digits
    Empty,
    /// The label collides with a URL scheme
    Reserved(String),
}

impl std::fmt::Display for LabelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LabelError::Empty => write!(f, "field label must contain a letter or digit"),
            LabelError::Reserved(common) => {
                write!(f, "'{}' is reserved and cannot be a field label", common)
            }
        }
    }
}

impl std::error::Error for LabelError {}

/// A user-supplied field label with its derived forms.
///
/// Equality and hashing use the common form only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldLabel {
    proper: String,
    common: String,
    valid: bool,
}

impl FieldLabel {
    pub fn new(label: &str) -> Self {
        Self {
            proper: proper_form(label),
            common: common_form(label),
            valid: validate_label(label).is_ok(),
        }
    }

    /// The display form, e.g. `"Date Added"`.
    pub fn proper_form(&self) -> &str {
        &self.proper
    }

    /// The lookup key, e.g. `"dateadded"`.
    pub fn common_form(&self) -> &str {
        &self.common
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Replaces the display form without changing identity.
    ///
    /// Used when a field is first registered under a shorthand and the catalog
    /// knows a better spelling (`"dateadded"` becomes `"Date Added"`).
    pub(crate) fn set_proper_form(&mut self, proper: &str) {
        if common_form(proper) == self.common {
            self.proper = proper.to_string();
        }
    }
}

impl PartialEq for FieldLabel {
    fn eq(&self, other: &Self) -> bool {
        self.common == other.common
    }
}

impl Eq for FieldLabel {}

impl Hash for FieldLabel {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.common.hash(state);
    }
}

impl From<&str> for FieldLabel {
    fn from(label: &str) -> Self {
        FieldLabel::new(label)
    }
}

impl std::fmt::Display for FieldLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.proper)
    }
}
