//! Projection of label records into display views.
//!
//! Each output field is declared as a fallback chain over [`LabelField`]s.
//! The first present source wins; when none is present the field's sentinel
//! is used. Long text is cut on character boundaries.

use serde::{Deserialize, Serialize};

use crate::label::record::{LabelField, LabelRecord};

/// Default cap for the purpose line of a summary.
pub const SUMMARY_MAX_CHARS: usize = 80;

/// Default cap for each detail section.
pub const DETAIL_MAX_CHARS: usize = 1500;

/// Appended to text that was truncated.
pub const ELLIPSIS: &str = "...";

/// Sentinel for a missing detail section.
pub const NO_INFORMATION: &str = "정보 없음";

/// Sentinel for a missing brand name in the detail view.
pub const UNKNOWN_BRAND: &str = "알 수 없음";

/// Sentinel for a missing name elsewhere.
pub const MISSING_NAME: &str = "-";

/// A titled detail section and the sources it draws from, in order.
#[derive(Debug, Clone, Copy)]
pub struct SectionSpec {
    pub title: &'static str,
    pub chain: &'static [LabelField],
}

/// Sections of the detail view, in display order.
pub const DETAIL_SECTIONS: &[SectionSpec] = &[
    SectionSpec {
        title: "효능·효과",
        chain: &[LabelField::IndicationsAndUsage, LabelField::Purpose],
    },
    SectionSpec {
        title: "용법·용량",
        chain: &[LabelField::DosageAndAdministration],
    },
    SectionSpec {
        title: "주의사항",
        chain: &[LabelField::Warnings, LabelField::Precautions],
    },
    SectionSpec {
        title: "부작용",
        chain: &[LabelField::AdverseReactions],
    },
    SectionSpec {
        title: "금기",
        chain: &[LabelField::Contraindications],
    },
    SectionSpec {
        title: "약물 상호작용",
        chain: &[LabelField::DrugInteractions],
    },
    SectionSpec {
        title: "임신·수유",
        chain: &[LabelField::PregnancyOrBreastFeeding],
    },
];

const SUMMARY_PURPOSE_CHAIN: &[LabelField] =
    &[LabelField::Purpose, LabelField::IndicationsAndUsage];

/// A search-result card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryView {
    pub brand_name: String,
    pub generic_name: String,
    /// Absent when the record has neither a purpose nor indications.
    pub purpose: Option<String>,
}

/// One section of the detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailSection {
    pub title: String,
    pub text: String,
    pub truncated: bool,
}

/// The full label view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailView {
    pub brand_name: String,
    pub generic_name: String,
    pub sections: Vec<DetailSection>,
}

impl DetailView {
    /// Section by title.
    pub fn section(&self, title: &str) -> Option<&DetailSection> {
        self.sections.iter().find(|s| s.title == title)
    }
}

/// Cut `text` to at most `max_chars` characters, appending [`ELLIPSIS`]
/// when anything was removed. Returns the text and whether it was cut.
pub fn truncate_chars(text: &str, max_chars: usize) -> (String, bool) {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => (format!("{}{ELLIPSIS}", &text[..byte_idx]), true),
        None => (text.to_string(), false),
    }
}

/// Builds summary and detail views with configurable length caps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelProjector {
    summary_max_chars: usize,
    detail_max_chars: usize,
}

impl Default for LabelProjector {
    fn default() -> Self {
        LabelProjector {
            summary_max_chars: SUMMARY_MAX_CHARS,
            detail_max_chars: DETAIL_MAX_CHARS,
        }
    }
}

impl LabelProjector {
    /// Create a projector with explicit caps.
    pub fn new(summary_max_chars: usize, detail_max_chars: usize) -> Self {
        LabelProjector {
            summary_max_chars,
            detail_max_chars,
        }
    }

    pub fn project_summary(&self, record: &LabelRecord) -> SummaryView {
        SummaryView {
            brand_name: record
                .field(LabelField::BrandName)
                .unwrap_or(MISSING_NAME)
                .to_string(),
            generic_name: record
                .field(LabelField::GenericName)
                .unwrap_or(MISSING_NAME)
                .to_string(),
            purpose: record
                .first_present(SUMMARY_PURPOSE_CHAIN)
                .map(|text| truncate_chars(text, self.summary_max_chars).0),
        }
    }

    pub fn project_detail(&self, record: &LabelRecord) -> DetailView {
        let sections = DETAIL_SECTIONS
            .iter()
            .map(|spec| {
                let source = record.first_present(spec.chain).unwrap_or(NO_INFORMATION);
                let (text, truncated) = truncate_chars(source, self.detail_max_chars);
                DetailSection {
                    title: spec.title.to_string(),
                    text,
                    truncated,
                }
            })
            .collect();

        DetailView {
            brand_name: record
                .field(LabelField::BrandName)
                .unwrap_or(UNKNOWN_BRAND)
                .to_string(),
            generic_name: record
                .field(LabelField::GenericName)
                .unwrap_or(MISSING_NAME)
                .to_string(),
            sections,
        }
    }
}

/// Summary view with the default caps.
pub fn project_summary(record: &LabelRecord) -> SummaryView {
    LabelProjector::default().project_summary(record)
}

/// Detail view with the default caps.
pub fn project_detail(record: &LabelRecord) -> DetailView {
    LabelProjector::default().project_detail(record)
}
