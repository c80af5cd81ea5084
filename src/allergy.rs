//! Allergy screening of a medication list.
//!
//! Screening is two-tier. A curated [`AllergyGroupTable`] maps a class label
//! (for example `"페니실린"`) to ingredient fragments; when the query names a
//! known class, medications are checked against those fragments. Otherwise
//! the medications are checked against the query text itself.

use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::normalizer::{normalize_for_match, normalized_contains};
use crate::error::{PharmaError, Result};

/// An allergy class and the ingredient fragments that belong to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllergyGroup {
    pub label: String,
    pub ingredients: Vec<String>,
}

/// Ordered list of allergy groups. Lookup returns the first matching label.
#[derive(Debug, Clone, Default)]
pub struct AllergyGroupTable {
    groups: Vec<AllergyGroup>,
}

impl AllergyGroupTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a group.
    pub fn insert<S: AsRef<str>>(&mut self, label: &str, ingredients: &[S]) {
        self.groups.push(AllergyGroup {
            label: label.to_string(),
            ingredients: ingredients
                .iter()
                .map(|i| i.as_ref().to_string())
                .collect(),
        });
    }

    /// Build a table from deserialized groups, keeping their order.
    pub fn from_groups(groups: Vec<AllergyGroup>) -> Self {
        AllergyGroupTable { groups }
    }

    /// Load a table from a JSON array of [`AllergyGroup`].
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let groups: Vec<AllergyGroup> = serde_json::from_str(&content).map_err(|e| {
            PharmaError::table(format!(
                "Failed to parse allergy group table '{}': {e}",
                path.display()
            ))
        })?;
        Ok(Self::from_groups(groups))
    }

    /// First group whose label and `query` contain one another.
    pub fn find_group(&self, query: &str) -> Option<&AllergyGroup> {
        let query = normalize_for_match(query);
        self.groups
            .iter()
            .find(|g| normalized_contains(&normalize_for_match(&g.label), &query))
    }

    /// Group labels in table order.
    pub fn labels(&self) -> Vec<&str> {
        self.groups.iter().map(|g| g.label.as_str()).collect()
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether the table has no groups.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Outcome of [`screen_allergy`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScreenResult {
    /// The query named a known group and these medications contain one of
    /// its ingredients.
    GroupMatch {
        group_label: String,
        matched_medications: Vec<String>,
    },
    /// No group matched, but these medication names overlap the query.
    NameFragmentMatch { matched_medications: Vec<String> },
    /// Nothing in the list overlaps the query.
    NoMatch,
}

impl ScreenResult {
    /// Medications flagged by the screen, empty for [`ScreenResult::NoMatch`].
    pub fn matched_medications(&self) -> &[String] {
        match self {
            ScreenResult::GroupMatch {
                matched_medications,
                ..
            }
            | ScreenResult::NameFragmentMatch {
                matched_medications,
            } => matched_medications,
            ScreenResult::NoMatch => &[],
        }
    }

    /// Whether any medication was flagged.
    pub fn is_match(&self) -> bool {
        !matches!(self, ScreenResult::NoMatch)
    }
}

/// Screen `medications` for overlap with `allergy_query`.
///
/// Medication order is preserved in the result and the input is never
/// modified.
pub fn screen_allergy<S: AsRef<str>>(
    medications: &[S],
    allergy_query: &str,
    groups: &AllergyGroupTable,
) -> ScreenResult {
    let normalized: Vec<(String, &str)> = medications
        .iter()
        .map(|m| (normalize_for_match(m.as_ref()), m.as_ref()))
        .collect();

    if let Some(group) = groups.find_group(allergy_query) {
        let fragments: Vec<String> = group
            .ingredients
            .iter()
            .map(|i| normalize_for_match(i))
            .collect();
        let matched: Vec<String> = normalized
            .iter()
            .filter(|(norm, _)| fragments.iter().any(|f| normalized_contains(norm, f)))
            .map(|(_, original)| original.to_string())
            .collect();

        debug!(
            "allergy group {:?} matched {} medication(s)",
            group.label,
            matched.len()
        );
        return if matched.is_empty() {
            ScreenResult::NoMatch
        } else {
            ScreenResult::GroupMatch {
                group_label: group.label.clone(),
                matched_medications: matched,
            }
        };
    }

    let query = normalize_for_match(allergy_query);
    let matched: Vec<String> = normalized
        .iter()
        .filter(|(norm, _)| normalized_contains(norm, &query))
        .map(|(_, original)| original.to_string())
        .collect();

    debug!(
        "no allergy group for {allergy_query:?}, {} direct name match(es)",
        matched.len()
    );
    if matched.is_empty() {
        ScreenResult::NoMatch
    } else {
        ScreenResult::NameFragmentMatch {
            matched_medications: matched,
        }
    }
}

/// User-facing guidance for a screen result.
pub fn screen_message(
    result: &ScreenResult,
    allergy_query: &str,
    groups: &AllergyGroupTable,
) -> String {
    match result {
        ScreenResult::GroupMatch {
            group_label,
            matched_medications,
        } => format!(
            "⚠️ 알레르기 주의: {}에 {} 계열 성분이 포함될 수 있습니다. 반드시 의사와 상담하세요.",
            matched_medications.join(", "),
            group_label
        ),
        ScreenResult::NameFragmentMatch {
            matched_medications,
        } => format!(
            "⚠️ 알레르기 주의: \"{}\"에 \"{}\" 성분이 포함될 수 있습니다. 의사와 상담하세요.",
            matched_medications.join(", "),
            allergy_query.trim()
        ),
        ScreenResult::NoMatch => {
            let base = "저장된 약 목록에서 해당 알레르기 성분이 발견되지 않았습니다.";
            if groups.find_group(allergy_query).is_some() {
                base.to_string()
            } else {
                format!("{base} 등록된 알레르기 그룹: {}", groups.labels().join(", "))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn groups() -> AllergyGroupTable {
        let mut table = AllergyGroupTable::new();
        table.insert("페니실린", &["아목시실린", "penicillin", "amoxicillin"]);
        table.insert("아스피린", &["아스피린", "aspirin", "salicylate"]);
        table
    }

    #[test]
    fn test_group_match() {
        let result = screen_allergy(&["아목시실린500mg", "타이레놀"], "페니실린", &groups());
        assert_eq!(
            result,
            ScreenResult::GroupMatch {
                group_label: "페니실린".to_string(),
                matched_medications: vec!["아목시실린500mg".to_string()],
            }
        );
    }

    #[test]
    fn test_group_found_but_no_medication_matches() {
        let result = screen_allergy(&["타이레놀"], "페니실린", &groups());
        assert_eq!(result, ScreenResult::NoMatch);
    }

    #[test]
    fn test_group_label_is_matched_loosely() {
        // "Aspirin" ingredient fragments, queried by a partial class label.
        let result = screen_allergy(&["Aspirin Protect 100mg"], "아스피린 계열", &groups());
        assert!(matches!(result, ScreenResult::GroupMatch { .. }));
    }

    #[test]
    fn test_name_fragment_fallback() {
        let result = screen_allergy(&["Ibuprofen 200mg", "Loratadine"], "ibuprofen", &groups());
        assert_eq!(
            result,
            ScreenResult::NameFragmentMatch {
                matched_medications: vec!["Ibuprofen 200mg".to_string()],
            }
        );
    }

    #[test]
    fn test_no_match() {
        let result = screen_allergy(&["Loratadine"], "sulfa", &groups());
        assert_eq!(result, ScreenResult::NoMatch);
        assert!(result.matched_medications().is_empty());
        assert!(!result.is_match());
    }

    #[test]
    fn test_messages() {
        let groups = groups();
        let result = screen_allergy(&["Loratadine"], "sulfa", &groups);
        assert_eq!(
            screen_message(&result, "sulfa", &groups),
            "저장된 약 목록에서 해당 알레르기 성분이 발견되지 않았습니다. \
             등록된 알레르기 그룹: 페니실린, 아스피린"
        );

        let result = screen_allergy(&["아목시실린"], "페니실린", &groups);
        assert!(screen_message(&result, "페니실린", &groups).contains("페니실린 계열"));
    }
}
