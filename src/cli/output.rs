//! Output formatting for CLI commands.

use serde::Serialize;

use crate::allergy::ScreenResult;
use crate::cli::args::{OutputFormat, PharmaArgs};
use crate::error::Result;
use crate::interaction::{InteractionFinding, NO_KNOWN_INTERACTION};
use crate::label::projector::{DetailView, SummaryView};
use crate::label::query::NO_SEARCH_RESULTS;
use crate::pill::{NO_MATCHING_PILL, PillRecord};

/// A command result that can be printed for people as well as serialized.
pub trait HumanOutput {
    fn render_human(&self) -> String;
}

/// Resolved search terms.
#[derive(Debug, Serialize)]
pub struct TermsResult {
    pub query: String,
    pub terms: Vec<String>,
}

impl HumanOutput for TermsResult {
    fn render_human(&self) -> String {
        self.terms.join("\n")
    }
}

/// An assembled label query.
#[derive(Debug, Serialize)]
pub struct LabelQueryResult {
    pub terms: Vec<String>,
    pub search: String,
    pub limit: usize,
}

impl HumanOutput for LabelQueryResult {
    fn render_human(&self) -> String {
        format!("search={}\nlimit={}", self.search, self.limit)
    }
}

/// Search result cards.
#[derive(Debug, Serialize)]
pub struct SearchResults {
    pub results: Vec<SummaryView>,
}

impl HumanOutput for SearchResults {
    fn render_human(&self) -> String {
        if self.results.is_empty() {
            return NO_SEARCH_RESULTS.to_string();
        }
        self.results
            .iter()
            .enumerate()
            .map(|(i, card)| {
                let mut out = format!(
                    "[{i}] {}\n    성분: {}",
                    card.brand_name, card.generic_name
                );
                if let Some(purpose) = &card.purpose {
                    out.push_str(&format!("\n    {purpose}"));
                }
                out
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl HumanOutput for DetailView {
    fn render_human(&self) -> String {
        let mut out = format!(
            "기본 정보\n═════════\n상품명: {}\n성분명: {}\n",
            self.brand_name, self.generic_name
        );
        for section in &self.sections {
            out.push_str(&format!("\n{}\n─────────\n{}\n", section.title, section.text));
        }
        out
    }
}

/// Interaction check outcome.
#[derive(Debug, Serialize)]
pub struct InteractionReport {
    pub drugs: Vec<String>,
    pub findings: Vec<InteractionFinding>,
}

impl HumanOutput for InteractionReport {
    fn render_human(&self) -> String {
        if self.findings.is_empty() {
            return NO_KNOWN_INTERACTION.to_string();
        }
        let mut out = String::from("⚠️ 상호작용 주의:");
        for finding in &self.findings {
            out.push_str(&format!("\n• {finding}"));
        }
        out
    }
}

/// Pill identification outcome.
#[derive(Debug, Serialize)]
pub struct PillReport {
    pub matches: Vec<PillRecord>,
}

impl HumanOutput for PillReport {
    fn render_human(&self) -> String {
        if self.matches.is_empty() {
            return NO_MATCHING_PILL.to_string();
        }
        self.matches
            .iter()
            .map(|p| {
                format!(
                    "{}\n    성분: {} | {}\n    모양: {} / 색: {} / 각인: {}",
                    p.name,
                    p.ingredient,
                    p.strength,
                    p.shape.label(),
                    p.color.label(),
                    p.imprint
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Medication list after a `meds` command.
#[derive(Debug, Serialize)]
pub struct MedicationReport {
    pub message: Option<String>,
    pub medications: Vec<String>,
}

impl HumanOutput for MedicationReport {
    fn render_human(&self) -> String {
        let mut lines = Vec::new();
        if let Some(message) = &self.message {
            lines.push(message.clone());
        }
        if self.medications.is_empty() {
            lines.push("(복용 중인 약 없음)".to_string());
        }
        lines.extend(
            self.medications
                .iter()
                .enumerate()
                .map(|(i, m)| format!("{}. {m}", i + 1)),
        );
        lines.join("\n")
    }
}

/// Allergy screen outcome.
#[derive(Debug, Serialize)]
pub struct AllergyReport {
    pub allergy: String,
    pub result: ScreenResult,
    pub message: String,
}

impl HumanOutput for AllergyReport {
    fn render_human(&self) -> String {
        self.message.clone()
    }
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize + HumanOutput>(result: &T, args: &PharmaArgs) -> Result<()> {
    println!("{}", format_result(result, args.output_format)?);
    Ok(())
}

/// Render a result without printing it.
pub fn format_result<T: Serialize + HumanOutput>(
    result: &T,
    format: OutputFormat,
) -> Result<String> {
    Ok(match format {
        OutputFormat::Human => result.render_human(),
        OutputFormat::Json => serde_json::to_string_pretty(result)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pill::{Color, Shape};

    #[test]
    fn test_empty_results_render_guidance() {
        let report = InteractionReport {
            drugs: vec!["a".to_string(), "b".to_string()],
            findings: vec![],
        };
        assert_eq!(report.render_human(), NO_KNOWN_INTERACTION);
        assert_eq!(PillReport { matches: vec![] }.render_human(), NO_MATCHING_PILL);
        assert_eq!(SearchResults { results: vec![] }.render_human(), NO_SEARCH_RESULTS);
    }

    #[test]
    fn test_interaction_report() {
        let report = InteractionReport {
            drugs: vec!["Aspirin".to_string(), "Warfarin".to_string()],
            findings: vec![InteractionFinding {
                first: "Aspirin".to_string(),
                second: "Warfarin".to_string(),
            }],
        };
        assert_eq!(
            report.render_human(),
            "⚠️ 상호작용 주의:\n• Aspirin ↔ Warfarin: 상호작용 가능"
        );
    }

    #[test]
    fn test_pill_report_uses_korean_labels() {
        let report = PillReport {
            matches: vec![PillRecord::new("A", "a", "1mg", Shape::Round, Color::White, "L484")],
        };
        assert!(report.render_human().contains("모양: 원형 / 색: 흰색 / 각인: L484"));
    }

    #[test]
    fn test_json_format() {
        let result = TermsResult {
            query: "타이레놀".to_string(),
            terms: vec!["acetaminophen".to_string()],
        };
        let json = format_result(&result, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["terms"][0], "acetaminophen");
    }
}
