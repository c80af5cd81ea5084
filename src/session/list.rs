//! Ordered, deduplicated drug name lists.

use serde::{Deserialize, Serialize};

use crate::error::{PharmaError, Result};

/// An ordered list of drug names with no two equal entries.
///
/// Names are trimmed before insertion; equality is exact after trimming, so
/// `"Aspirin"` and `"aspirin"` may both be present. The matchers compare by
/// position and treat such entries as distinct.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DrugList {
    names: Vec<String>,
}

impl DrugList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from names, dropping blanks and repeats.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Self::new();
        for name in names {
            // Blank entries in restored data are skipped, not fatal.
            let _ = list.add(name.as_ref());
        }
        list
    }

    /// Append `name` unless an equal entry exists.
    ///
    /// Returns `Ok(true)` when added, `Ok(false)` for a duplicate and
    /// [`PharmaError::EmptyInput`] for a blank name.
    pub fn add(&mut self, name: &str) -> Result<bool> {
        let name = name.trim();
        if name.is_empty() {
            return Err(PharmaError::empty_input("drug name"));
        }
        if self.contains(name) {
            return Ok(false);
        }
        self.names.push(name.to_string());
        Ok(true)
    }

    /// Remove and return the entry at `index`.
    pub fn remove_at(&mut self, index: usize) -> Option<String> {
        (index < self.names.len()).then(|| self.names.remove(index))
    }

    /// Remove the entry equal to `name` after trimming.
    pub fn remove(&mut self, name: &str) -> bool {
        let name = name.trim();
        match self.names.iter().position(|n| n == name) {
            Some(index) => {
                self.names.remove(index);
                true
            }
            None => false,
        }
    }

    /// Whether an entry equals `name` after trimming.
    pub fn contains(&self, name: &str) -> bool {
        let name = name.trim();
        self.names.iter().any(|n| n == name)
    }

    /// Entries in insertion order.
    pub fn list(&self) -> &[String] {
        &self.names
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.names.clear();
    }

    /// Replace the contents with `other`'s.
    pub fn replace_with(&mut self, other: &DrugList) {
        self.names.clone_from(&other.names);
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
