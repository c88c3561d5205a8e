//! # Configuration
//!
//! Each collection carries a [`CollectionConfig`], loaded by [`confique`]
//! from a TOML file and `NOTEFIELDS__*` environment variables.
//!
//! ## Resolution Order
//!
//! 1. **Environment variables**: `NOTEFIELDS__SORT_PARM`, `NOTEFIELDS__LOCKED`, etc.
//! 2. **Collection file**: the TOML file handed to [`CollectionConfig::load`].
//! 3. **Compiled defaults**: `#[config(default = ...)]` below.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `title` | `Notes` | Collection title |
//! | `status_config` | `0 - Idea; ... 9 - Completed` | Status table |
//! | `status_done_threshold` | `8` | Statuses at or above this count as done |
//! | `rank_config` | `1 - High; 5 - Medium; 9 - Low` | Rank table |
//! | `level_config` | `1 - Top; 2 - Major; 3 - Minor; 4 - Detail` | Level table |
//! | `sort_parm` | `title` | Sort policy, see [`SortParm`](crate::note::SortParm) |
//! | `sort_descending` | `false` | Reverse the named sort policies |
//! | `sort_fields` | none | Custom policy, e.g. `"priority desc, title"` |
//! | `id_rule` | `title-only` | How note identifiers are built |
//! | `aux_field` | none | Auxiliary identifying field |
//! | `locked` | `false` | Lock the dictionary once initial fields are known |
//!
//! Table strings are applied as far as they are well formed.

use std::path::Path;

use confique::Config;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::values::{
    DEFAULT_DONE_THRESHOLD, DEFAULT_LEVEL_CONFIG, DEFAULT_RANK_CONFIG, DEFAULT_STATUS_CONFIG,
};

/// Configuration for one collection.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CollectionConfig {
    #[config(default = "Notes", env = "NOTEFIELDS__TITLE")]
    pub title: String,

    #[config(
        default = "0 - Idea; 1 - Proposed; 2 - Approved; 3 - Started; 4 - In Work; 8 - Canceled; 9 - Completed",
        env = "NOTEFIELDS__STATUS_CONFIG"
    )]
    pub status_config: String,

    #[config(default = 8, env = "NOTEFIELDS__STATUS_DONE_THRESHOLD")]
    pub status_done_threshold: u8,

    #[config(default = "1 - High; 5 - Medium; 9 - Low", env = "NOTEFIELDS__RANK_CONFIG")]
    pub rank_config: String,

    #[config(
        default = "1 - Top; 2 - Major; 3 - Minor; 4 - Detail",
        env = "NOTEFIELDS__LEVEL_CONFIG"
    )]
    pub level_config: String,

    /// One of the sort policy names, e.g. `seq-plus-title`
    #[config(default = "title", env = "NOTEFIELDS__SORT_PARM")]
    pub sort_parm: String,

    #[config(default = false, env = "NOTEFIELDS__SORT_DESCENDING")]
    pub sort_descending: bool,

    /// Field list for the custom policy: `"priority desc, title"`
    #[config(env = "NOTEFIELDS__SORT_FIELDS")]
    pub sort_fields: Option<String>,

    #[config(default = "title-only", env = "NOTEFIELDS__ID_RULE")]
    pub id_rule: String,

    #[config(env = "NOTEFIELDS__AUX_FIELD")]
    pub aux_field: Option<String>,

    #[config(default = false, env = "NOTEFIELDS__LOCKED")]
    pub locked: bool,
}

impl Default for CollectionConfig {
    fn default() -> Self {
        Self {
            title: "Notes".to_string(),
            status_config: DEFAULT_STATUS_CONFIG.to_string(),
            status_done_threshold: DEFAULT_DONE_THRESHOLD,
            rank_config: DEFAULT_RANK_CONFIG.to_string(),
            level_config: DEFAULT_LEVEL_CONFIG.to_string(),
            sort_parm: "title".to_string(),
            sort_descending: false,
            sort_fields: None,
            id_rule: "title-only".to_string(),
            aux_field: None,
            locked: false,
        }
    }
}

impl CollectionConfig {
    /// Loads from `path` (skipped when missing), under environment overrides.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let config = Self::builder().env().file(path.as_ref()).load()?;
        Ok(config)
    }
}
