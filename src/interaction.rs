//! Pairwise drug interaction matching.
//!
//! The [`InteractionTable`] is an adjacency list keyed by canonical drug
//! name. [`InteractionMatcher::find_interactions`] checks every unordered
//! pair of the caller's drugs against it using the loose
//! [`normalized_contains`] predicate, so partial names such as
//! `"warfarin 5mg"` still hit the `"warfarin"` entry.
//!
//! An empty result only means the table has no entry for the pair. The
//! table is not exhaustive.

use std::fmt;
use std::fs;
use std::path::Path;

use ahash::AHashSet;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::normalizer::{normalize_for_match, normalized_contains};
use crate::error::{PharmaError, Result};

/// Label attached to every finding.
pub const INTERACTION_MARKER: &str = "상호작용 가능";

/// Message shown when no pair matched.
pub const NO_KNOWN_INTERACTION: &str =
    "등록된 데이터에서 알려진 상호작용이 없습니다. 전문가 상담을 권장합니다.";

/// One row of the interaction table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionEntry {
    /// Canonical drug name.
    pub drug: String,
    /// Drugs known to interact with `drug`.
    pub interacts_with: Vec<String>,
}

/// Static adjacency list of known interactions, in table order.
#[derive(Debug, Clone, Default)]
pub struct InteractionTable {
    entries: Vec<NormalizedEntry>,
}

#[derive(Debug, Clone)]
struct NormalizedEntry {
    key: String,
    partners: Vec<String>,
}

impl InteractionTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry. Names are normalized once here.
    pub fn insert<S: AsRef<str>>(&mut self, drug: &str, interacts_with: &[S]) {
        self.entries.push(NormalizedEntry {
            key: normalize_for_match(drug),
            partners: interacts_with
                .iter()
                .map(|p| normalize_for_match(p.as_ref()))
                .filter(|p| !p.is_empty())
                .collect(),
        });
    }

    /// Build a table from deserialized entries.
    pub fn from_entries<I: IntoIterator<Item = InteractionEntry>>(entries: I) -> Self {
        let mut table = Self::new();
        for entry in entries {
            table.insert(&entry.drug, &entry.interacts_with);
        }
        table
    }

    /// Load a table from a JSON array of [`InteractionEntry`].
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let entries: Vec<InteractionEntry> = serde_json::from_str(&content).map_err(|e| {
            PharmaError::table(format!(
                "Failed to parse interaction table '{}': {e}",
                path.display()
            ))
        })?;
        Ok(Self::from_entries(entries))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether some entry has `key_side` as its key and `partner_side` among
    /// its partners. Both arguments must already be normalized.
    fn has_directed(&self, key_side: &str, partner_side: &str) -> bool {
        self.entries.iter().any(|entry| {
            normalized_contains(&entry.key, key_side)
                && entry
                    .partners
                    .iter()
                    .any(|p| normalized_contains(p, partner_side))
        })
    }
}

/// How a pair is checked against the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionScan {
    /// Treat the table as undirected: `(a, b)` hits when either drug is the
    /// key and the other is a partner.
    #[default]
    Symmetric,
    /// Only try the earlier drug of the pair as the key.
    KeyToPartner,
}

/// A possible interaction between two of the caller's drugs.
///
/// `first` precedes `second` in the caller's list; names are kept as entered.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InteractionFinding {
    pub first: String,
    pub second: String,
}

impl fmt::Display for InteractionFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ↔ {}: {}", self.first, self.second, INTERACTION_MARKER)
    }
}

/// Checks a list of drugs against an [`InteractionTable`].
#[derive(Debug, Clone, Copy)]
pub struct InteractionMatcher<'a> {
    table: &'a InteractionTable,
    scan: InteractionScan,
}

impl<'a> InteractionMatcher<'a> {
    /// Create a symmetric matcher over `table`.
    pub fn new(table: &'a InteractionTable) -> Self {
        InteractionMatcher {
            table,
            scan: InteractionScan::Symmetric,
        }
    }

    /// Set the scan direction.
    pub fn with_scan(mut self, scan: InteractionScan) -> Self {
        self.scan = scan;
        self
    }

    /// Find every pair `(drugs[i], drugs[j])`, `i < j`, with a table hit.
    ///
    /// Pairs are taken by position, so repeated names are compared like any
    /// other entry. Findings come back in pair order with exact duplicates
    /// collapsed. The input is never modified.
    pub fn find_interactions<S: AsRef<str>>(&self, drugs: &[S]) -> Vec<InteractionFinding> {
        let normalized: Vec<String> = drugs
            .iter()
            .map(|d| normalize_for_match(d.as_ref()))
            .collect();

        let mut seen = AHashSet::new();
        let mut findings = Vec::new();

        for i in 0..drugs.len() {
            for j in (i + 1)..drugs.len() {
                if !self.pair_matches(&normalized[i], &normalized[j]) {
                    continue;
                }
                let finding = InteractionFinding {
                    first: drugs[i].as_ref().to_string(),
                    second: drugs[j].as_ref().to_string(),
                };
                debug!("interaction hit: {finding}");
                if seen.insert(finding.clone()) {
                    findings.push(finding);
                }
            }
        }

        findings
    }

    fn pair_matches(&self, a: &str, b: &str) -> bool {
        match self.scan {
            InteractionScan::KeyToPartner => self.table.has_directed(a, b),
            InteractionScan::Symmetric => {
                self.table.has_directed(a, b) || self.table.has_directed(b, a)
            }
        }
    }
}

/// Convenience wrapper: symmetric scan of `drugs` against `table`.
pub fn find_interactions<S: AsRef<str>>(
    drugs: &[S],
    table: &InteractionTable,
) -> Vec<InteractionFinding> {
    InteractionMatcher::new(table).find_interactions(drugs)
}
