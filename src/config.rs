//! Configuration for pharmadex.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{PharmaError, Result};
use crate::interaction::InteractionScan;
use crate::label::projector::{DETAIL_MAX_CHARS, SUMMARY_MAX_CHARS};
use crate::label::query::DEFAULT_LIMIT;

/// Runtime configuration. Every field has a default, so a config file only
/// needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PharmaConfig {
    /// Directory holding persisted state (the medication list).
    pub storage_dir: PathBuf,

    /// Maximum number of label records requested per search.
    pub search_limit: usize,

    /// Character cap for the purpose line of a search result.
    pub summary_max_chars: usize,

    /// Character cap for each detail section.
    pub detail_max_chars: usize,

    /// Direction used when checking pairs against the interaction table.
    pub interaction_scan: InteractionScan,

    /// Replacement synonym table (JSON object).
    pub synonyms_path: Option<PathBuf>,

    /// Replacement interaction table (JSON array).
    pub interactions_path: Option<PathBuf>,

    /// Replacement allergy group table (JSON array).
    pub allergy_groups_path: Option<PathBuf>,

    /// Replacement pill catalog (JSON array).
    pub pills_path: Option<PathBuf>,
}

impl Default for PharmaConfig {
    fn default() -> Self {
        Self {
            storage_dir: PathBuf::from(".pharmadex"),
            search_limit: DEFAULT_LIMIT,
            summary_max_chars: SUMMARY_MAX_CHARS,
            detail_max_chars: DETAIL_MAX_CHARS,
            interaction_scan: InteractionScan::Symmetric,
            synonyms_path: None,
            interactions_path: None,
            allergy_groups_path: None,
            pills_path: None,
        }
    }
}

impl PharmaConfig {
    /// Read a JSON config file. Missing keys take their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            PharmaError::config(format!("Failed to read config '{}': {e}", path.display()))
        })?;
        let config: PharmaConfig = serde_json::from_str(&content).map_err(|e| {
            PharmaError::config(format!("Failed to parse config '{}': {e}", path.display()))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values no operation can work with.
    pub fn validate(&self) -> Result<()> {
        if self.search_limit == 0 {
            return Err(PharmaError::config("search_limit must be positive"));
        }
        if self.summary_max_chars == 0 || self.detail_max_chars == 0 {
            return Err(PharmaError::config("truncation limits must be positive"));
        }
        Ok(())
    }

    /// Set the storage directory.
    pub fn with_storage_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.storage_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Set the search result limit.
    pub fn with_search_limit(mut self, limit: usize) -> Self {
        self.search_limit = limit;
        self
    }

    /// Set the interaction scan direction.
    pub fn with_interaction_scan(mut self, scan: InteractionScan) -> Self {
        self.interaction_scan = scan;
        self
    }

    pub fn with_synonyms_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.synonyms_path = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn with_interactions_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.interactions_path = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn with_allergy_groups_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.allergy_groups_path = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn with_pills_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.pills_path = Some(path.as_ref().to_path_buf());
        self
    }
}
