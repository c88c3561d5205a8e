//! Attachment file names.
//!
//! Files attached to a note are named after the note's identifier:
//! `<base> | <suffix>.<ext>`, e.g. `meeting-notes | slides.pdf`. When the
//! note's identifier changes, every attachment is re-based onto the new one.

use serde::{Deserialize, Serialize};

const SEPARATOR: &str = " | ";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachmentName {
    base: String,
    suffix: String,
    ext: String,
}

impl AttachmentName {
    pub fn new(base: &str, suffix: &str, ext: &str) -> Self {
        Self {
            base: base.trim().to_string(),
            suffix: suffix.trim().to_string(),
            ext: ext.trim().trim_start_matches('.').to_string(),
        }
    }

    /// Reads a file name of the form `<base> | <suffix>.<ext>`.
    pub fn parse(file_name: &str) -> Option<Self> {
        let (base, rest) = file_name.split_once(SEPARATOR)?;
        let (suffix, ext) = match rest.rsplit_once('.') {
            Some((suffix, ext)) => (suffix, ext),
            None => (rest, ""),
        };
        Some(Self::new(base, suffix, ext))
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    pub fn ext(&self) -> &str {
        &self.ext
    }

    pub fn rebase(&mut self, base: &str) {
        self.base = base.trim().to_string();
    }
}

impl std::fmt::Display for AttachmentName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.base, SEPARATOR, self.suffix)?;
        if !self.ext.is_empty() {
            write!(f, ".{}", self.ext)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_file_name() {
        let name = AttachmentName::new("meeting-notes", "slides", ".pdf");
        assert_eq!(name.to_string(), "meeting-notes | slides.pdf");
    }

    #[test]
    fn test_parses_file_name() {
        let name = AttachmentName::parse("meeting-notes | slides.v2.pdf").unwrap();
        assert_eq!(name.base(), "meeting-notes");
        assert_eq!(name.suffix(), "slides.v2");
        assert_eq!(name.ext(), "pdf");
        assert!(AttachmentName::parse("plain.pdf").is_none());
    }

    #[test]
    fn test_rebase_keeps_suffix_and_ext() {
        let mut name = AttachmentName::new("old", "photo", "jpg");
        name.rebase("new-title");
        assert_eq!(name.to_string(), "new-title | photo.jpg");
    }

    #[test]
    fn test_no_extension() {
        let name = AttachmentName::parse("note | README").unwrap();
        assert_eq!(name.ext(), "");
        assert_eq!(name.to_string(), "note | README");
    }
}
