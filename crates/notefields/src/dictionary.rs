//! The field dictionary of a collection.
//!
//! The dictionary holds one [`FieldDefinition`] per common form, in the order
//! fields were first seen. It starts unlocked; once locked, new fields are
//! refused so that a collection's schema stays fixed.
//!
//! ## States
//!
//! | State | `add_def` for a new label |
//! |-------|---------------------------|
//! | Unlocked | added |
//! | Locked | refused, except `Date Added` and `Date Modified` |
//!
//! The two stamp fields are maintained by the engine itself, so a locked
//! dictionary still accepts them by unlocking, adding and locking again.
//! Adding a label that is already defined is never an error in either state:
//! the existing definition is returned unchanged.

use log::{debug, warn};

use crate::error::{FieldError, Result};
use crate::field::FieldDefinition;
use crate::label::common_form;

/// Common forms a locked dictionary still accepts.
pub const STAMP_LABELS: &[&str] = &["dateadded", "datemodified"];

#[derive(Debug, Clone, Default)]
pub struct FieldDictionary {
    defs: Vec<FieldDefinition>,
    locked: bool,
}

impl FieldDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a definition, returning the one now stored under its label.
    ///
    /// Returns `None` only when the dictionary is locked and the label is new.
    pub fn add_def(&mut self, def: FieldDefinition) -> Option<&FieldDefinition> {
        self.try_add_def(def).ok()
    }

    pub fn try_add_def(&mut self, def: FieldDefinition) -> Result<&FieldDefinition> {
        if let Some(index) = self.position(def.common_form()) {
            return Ok(&self.defs[index]);
        }

        let index = self.defs.len();
        if self.locked {
            if !STAMP_LABELS.contains(&def.common_form()) {
                warn!(
                    "event=dictionary_rejected label={:?} reason=locked",
                    def.proper_form()
                );
                return Err(FieldError::Locked(def.proper_form().to_string()));
            }
            self.unlock();
            self.push(def);
            self.lock();
        } else {
            self.push(def);
        }
        Ok(&self.defs[index])
    }

    fn push(&mut self, def: FieldDefinition) {
        debug!(
            "event=definition_added label={:?} type={}",
            def.proper_form(),
            def.type_string()
        );
        self.defs.push(def);
    }

    fn position(&self, label: &str) -> Option<usize> {
        let common = common_form(label);
        self.defs.iter().position(|d| d.common_form() == common)
    }

    /// Looks up a definition by any spelling of its label.
    pub fn get_def(&self, label: &str) -> Option<&FieldDefinition> {
        self.position(label).map(|i| &self.defs[i])
    }

    pub(crate) fn get_def_mut(&mut self, label: &str) -> Option<&mut FieldDefinition> {
        let index = self.position(label)?;
        Some(&mut self.defs[index])
    }

    pub fn contains(&self, label: &str) -> bool {
        self.position(label).is_some()
    }

    pub fn lock(&mut self) {
        self.locked = true;
    }

    pub fn unlock(&mut self) {
        self.locked = false;
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldDefinition> {
        self.defs.iter()
    }
}
