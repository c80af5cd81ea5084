//! Pill identification by appearance.
//!
//! [`filter_pills`] narrows a static catalog by shape, color and imprint.
//! Imprints match loosely: `"484"` finds `"L484"` and `"L 484"` finds
//! `"L484"`. Very short imprint queries therefore match many records.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::analysis::normalizer::{normalize_for_match, normalized_contains};
use crate::error::{PharmaError, Result};

/// Message shown when no record satisfies the filter.
pub const NO_MATCHING_PILL: &str =
    "검색 조건에 맞는 알약이 없습니다. 조건을 완화하거나 다른 각인을 입력해 보세요.";

/// Tablet and capsule outlines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    Round,
    Oval,
    Capsule,
    Rectangle,
    Diamond,
    Hexagon,
    Octagon,
    Triangle,
}

impl Shape {
    /// Korean display label.
    pub fn label(&self) -> &'static str {
        match self {
            Shape::Round => "원형",
            Shape::Oval => "타원형",
            Shape::Capsule => "캡슐형",
            Shape::Rectangle => "사각형",
            Shape::Diamond => "다이아몬드",
            Shape::Hexagon => "육각형",
            Shape::Octagon => "팔각형",
            Shape::Triangle => "삼각형",
        }
    }

    /// Lower-case code used in data files and on the command line.
    pub fn code(&self) -> &'static str {
        match self {
            Shape::Round => "round",
            Shape::Oval => "oval",
            Shape::Capsule => "capsule",
            Shape::Rectangle => "rectangle",
            Shape::Diamond => "diamond",
            Shape::Hexagon => "hexagon",
            Shape::Octagon => "octagon",
            Shape::Triangle => "triangle",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Shape {
    type Err = PharmaError;

    fn from_str(s: &str) -> Result<Self> {
        <Shape as ValueEnum>::from_str(s.trim(), true)
            .map_err(|_| PharmaError::invalid_argument(format!("unknown pill shape: {s}")))
    }
}

/// Tablet and capsule colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Yellow,
    Orange,
    Red,
    Pink,
    Blue,
    Green,
    Brown,
    Gray,
}

impl Color {
    /// Korean display label.
    pub fn label(&self) -> &'static str {
        match self {
            Color::White => "흰색",
            Color::Yellow => "노란색",
            Color::Orange => "주황색",
            Color::Red => "빨간색",
            Color::Pink => "분홍색",
            Color::Blue => "파란색",
            Color::Green => "초록색",
            Color::Brown => "갈색",
            Color::Gray => "회색",
        }
    }

    /// Lower-case code used in data files and on the command line.
    pub fn code(&self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Yellow => "yellow",
            Color::Orange => "orange",
            Color::Red => "red",
            Color::Pink => "pink",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Brown => "brown",
            Color::Gray => "gray",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Color {
    type Err = PharmaError;

    fn from_str(s: &str) -> Result<Self> {
        <Color as ValueEnum>::from_str(s.trim(), true)
            .map_err(|_| PharmaError::invalid_argument(format!("unknown pill color: {s}")))
    }
}

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PillRecord {
    pub name: String,
    pub ingredient: String,
    pub strength: String,
    pub shape: Shape,
    pub color: Color,
    pub imprint: String,
}

impl PillRecord {
    /// Create a new record.
    pub fn new(
        name: &str,
        ingredient: &str,
        strength: &str,
        shape: Shape,
        color: Color,
        imprint: &str,
    ) -> Self {
        PillRecord {
            name: name.to_string(),
            ingredient: ingredient.to_string(),
            strength: strength.to_string(),
            shape,
            color,
            imprint: imprint.to_string(),
        }
    }
}

/// Ordered, read-only pill catalog.
#[derive(Debug, Clone, Default)]
pub struct PillCatalog {
    records: Vec<PillRecord>,
}

impl PillCatalog {
    /// Create a catalog from records, keeping their order.
    pub fn new(records: Vec<PillRecord>) -> Self {
        PillCatalog { records }
    }

    /// Load a catalog from a JSON array of [`PillRecord`].
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let records: Vec<PillRecord> = serde_json::from_str(&content).map_err(|e| {
            PharmaError::table(format!(
                "Failed to parse pill catalog '{}': {e}",
                path.display()
            ))
        })?;
        Ok(Self::new(records))
    }

    /// All records in catalog order.
    pub fn records(&self) -> &[PillRecord] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records matching `query`, in catalog order.
    pub fn filter(&self, query: &PillQuery) -> Vec<&PillRecord> {
        filter_pills(&self.records, query)
    }
}

/// Appearance criteria. Absent fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PillQuery {
    pub shape: Option<Shape>,
    pub color: Option<Color>,
    pub imprint: Option<String>,
}

impl PillQuery {
    /// Create an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Require this shape.
    pub fn with_shape(mut self, shape: Shape) -> Self {
        self.shape = Some(shape);
        self
    }

    /// Require this color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Require an imprint overlapping `imprint`.
    pub fn with_imprint<S: Into<String>>(mut self, imprint: S) -> Self {
        self.imprint = Some(imprint.into());
        self
    }

    /// The imprint criterion, with blank text treated as absent.
    pub fn imprint(&self) -> Option<&str> {
        self.imprint
            .as_deref()
            .map(str::trim)
            .filter(|i| !i.is_empty())
    }

    /// Whether no criterion is set. Callers reject such queries.
    pub fn is_empty(&self) -> bool {
        self.shape.is_none() && self.color.is_none() && self.imprint().is_none()
    }
}

/// Keep the records that satisfy every criterion of `query`.
///
/// Output order follows input order, so filtering a filtered result with
/// the same query returns it unchanged.
///
/// Imprints match when either one contains the other after normalization.
/// A record whose imprint is blank has nothing to compare, so it never
/// matches an imprint query; shape and color queries still find it.
pub fn filter_pills<'a, I>(catalog: I, query: &PillQuery) -> Vec<&'a PillRecord>
where
    I: IntoIterator<Item = &'a PillRecord>,
{
    let imprint = query.imprint().map(normalize_for_match);

    catalog
        .into_iter()
        .filter(|record| query.shape.is_none_or(|s| record.shape == s))
        .filter(|record| query.color.is_none_or(|c| record.color == c))
        .filter(|record| {
            imprint
                .as_deref()
                .is_none_or(|q| normalized_contains(&normalize_for_match(&record.imprint), q))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> PillCatalog {
        let rows = [
            ("타이레놀 500mg", "acetaminophen", "500mg", Shape::Oval, Color::White, "TY500"),
            ("Acetaminophen 500", "acetaminophen", "500mg", Shape::Round, Color::White, "L484"),
            ("Ibuprofen 200", "ibuprofen", "200mg", Shape::Round, Color::Brown, "I-2"),
            ("Amoxicillin 500", "amoxicillin", "500mg", Shape::Capsule, Color::Red, "AMOX 500"),
        ];
        PillCatalog::new(
            rows.into_iter()
                .map(|(name, ingredient, strength, shape, color, imprint)| {
                    PillRecord::new(name, ingredient, strength, shape, color, imprint)
                })
                .collect(),
        )
    }

    #[test]
    fn test_imprint_substring() {
        let catalog = catalog();
        let result = catalog.filter(&PillQuery::new().with_imprint("484"));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].imprint, "L484");
    }

    #[test]
    fn test_imprint_is_case_and_space_insensitive() {
        let catalog = catalog();
        assert_eq!(catalog.filter(&PillQuery::new().with_imprint("l 484")).len(), 1);
        assert_eq!(catalog.filter(&PillQuery::new().with_imprint("amox500")).len(), 1);
        // Query longer than the stored imprint.
        let longer = catalog.filter(&PillQuery::new().with_imprint("L484 XYZ"));
        assert_eq!(longer[0].name, "Acetaminophen 500");
    }

    #[test]
    fn test_shape_with_no_records() {
        let catalog = PillCatalog::new(vec![PillRecord::new(
            "A", "a", "1mg", Shape::Round, Color::White, "L484",
        )]);
        assert!(catalog.filter(&PillQuery::new().with_shape(Shape::Oval)).is_empty());
    }

    #[test]
    fn test_combined_criteria_preserve_order() {
        let catalog = catalog();
        let whites = catalog.filter(&PillQuery::new().with_color(Color::White));
        let names: Vec<&str> = whites.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["타이레놀 500mg", "Acetaminophen 500"]);

        let query = PillQuery::new()
            .with_color(Color::White)
            .with_shape(Shape::Round);
        let round_white = catalog.filter(&query);
        assert_eq!(round_white.len(), 1);
        assert_eq!(round_white[0].name, "Acetaminophen 500");
    }

    #[test]
    fn test_refiltering_is_idempotent() {
        let catalog = catalog();
        let query = PillQuery::new().with_shape(Shape::Round);
        let first = catalog.filter(&query);
        let second = filter_pills(first.iter().copied(), &query);
        assert_eq!(first, second);
    }

    #[test]
    fn test_record_without_imprint() {
        let catalog = PillCatalog::new(vec![
            PillRecord::new("Plain", "plain", "1mg", Shape::Round, Color::White, ""),
            PillRecord::new("Marked", "marked", "1mg", Shape::Round, Color::White, "M1"),
        ]);

        let by_imprint = catalog.filter(&PillQuery::new().with_imprint("M1"));
        assert_eq!(by_imprint.len(), 1);
        assert_eq!(by_imprint[0].name, "Marked");

        let by_shape = catalog.filter(&PillQuery::new().with_shape(Shape::Round));
        assert_eq!(by_shape.len(), 2);
    }

    #[test]
    fn test_blank_imprint_is_absent() {
        let query = PillQuery::new().with_imprint("   ");
        assert!(query.is_empty());
        assert!(PillQuery::new().is_empty());
        assert!(!PillQuery::new().with_color(Color::Red).is_empty());
    }

    #[test]
    fn test_shape_and_color_parsing() {
        assert_eq!("Oval".parse::<Shape>().unwrap(), Shape::Oval);
        assert_eq!(" gray ".parse::<Color>().unwrap(), Color::Gray);
        assert!("square".parse::<Shape>().is_err());
        assert_eq!(Shape::Capsule.label(), "캡슐형");
        assert_eq!(Color::Brown.to_string(), "갈색");
    }

    #[test]
    fn test_record_json_format() {
        let json = r#"{"name":"X","ingredient":"y","strength":"1mg",
                       "shape":"hexagon","color":"blue","imprint":"Z1"}"#;
        let record: PillRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.shape, Shape::Hexagon);
        assert_eq!(record.color, Color::Blue);
    }
}
