//! Bilingual synonym table and search-term resolution.
//!
//! The table maps a localized or alias query (for example `"타이레놀"`) to
//! one or more English search terms. Unknown queries pass through as a
//! single literal term.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use ahash::AHashMap;
use log::debug;

use crate::analysis::normalizer::normalize_for_search;
use crate::error::{PharmaError, Result};

/// Static mapping from a normalized query to its canonical search terms.
#[derive(Debug, Clone, Default)]
pub struct SynonymTable {
    entries: AHashMap<String, Vec<String>>,
}

impl SynonymTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a mapping. `terms` is split on whitespace, so `"ibuprofen naproxen"`
    /// yields two search terms. Mappings with no terms are ignored.
    pub fn insert(&mut self, query: &str, terms: &str) {
        let key = normalize_for_search(query);
        let terms: Vec<String> = terms.split_whitespace().map(str::to_string).collect();
        if key.is_empty() || terms.is_empty() {
            return;
        }
        self.entries.insert(key, terms);
    }

    /// Build a table from `(query, terms)` pairs.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut table = Self::new();
        for (query, terms) in pairs {
            table.insert(query, terms);
        }
        table
    }

    /// Load a table from a JSON object of `"query": "term term ..."` entries.
    ///
    /// Entries are applied in key order, so when two keys normalize to the
    /// same query the one sorting last wins.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let raw: BTreeMap<String, String> = serde_json::from_str(&content).map_err(|e| {
            PharmaError::table(format!(
                "Failed to parse synonym table '{}': {e}",
                path.display()
            ))
        })?;
        Ok(Self::from_pairs(
            raw.iter().map(|(k, v)| (k.as_str(), v.as_str())),
        ))
    }

    /// Look up the canonical terms for an already-normalized query.
    pub fn get(&self, normalized_query: &str) -> Option<&[String]> {
        self.entries.get(normalized_query).map(Vec::as_slice)
    }

    /// Number of mappings.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no mappings.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Expand `query` into the ordered search terms to send to the label source.
    ///
    /// The query is normalized with [`normalize_for_search`]. A table hit
    /// returns its mapped terms in order; a miss returns the normalized query
    /// itself. The result is non-empty whenever `query` has a non-blank
    /// character other than `"`.
    pub fn resolve_search_terms(&self, query: &str) -> Vec<String> {
        let normalized = normalize_for_search(query);
        match self.get(&normalized) {
            Some(terms) => {
                debug!("synonym hit: {normalized:?} -> {terms:?}");
                terms.to_vec()
            }
            None => vec![normalized],
        }
    }
}
