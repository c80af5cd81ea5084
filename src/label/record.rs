//! Drug label records as returned by the remote label database.
//!
//! Every field is optional and every present field is a list of text blocks,
//! of which only the first is used. Unknown fields are ignored. A field that
//! holds `null` or a bare string instead of a list is read as empty or as a
//! single block; any other shape is read as empty.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Read a list of text blocks from whatever JSON value is present.
fn text_blocks<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => vec![text],
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(text) => Some(text),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

/// Read the `openfda` block; anything but an object is an empty block.
fn openfda_section<'de, D>(deserializer: D) -> Result<OpenFdaSection, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(if value.is_object() {
        serde_json::from_value(value).unwrap_or_default()
    } else {
        OpenFdaSection::default()
    })
}

/// Product identification block of a label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenFdaSection {
    #[serde(default, deserialize_with = "text_blocks", skip_serializing_if = "Vec::is_empty")]
    pub brand_name: Vec<String>,
    #[serde(default, deserialize_with = "text_blocks", skip_serializing_if = "Vec::is_empty")]
    pub generic_name: Vec<String>,
}

/// A fetched drug label. Any field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelRecord {
    #[serde(default, deserialize_with = "openfda_section")]
    pub openfda: OpenFdaSection,
    #[serde(default, deserialize_with = "text_blocks", skip_serializing_if = "Vec::is_empty")]
    pub purpose: Vec<String>,
    #[serde(default, deserialize_with = "text_blocks", skip_serializing_if = "Vec::is_empty")]
    pub indications_and_usage: Vec<String>,
    #[serde(default, deserialize_with = "text_blocks", skip_serializing_if = "Vec::is_empty")]
    pub dosage_and_administration: Vec<String>,
    #[serde(default, deserialize_with = "text_blocks", skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
    #[serde(default, deserialize_with = "text_blocks", skip_serializing_if = "Vec::is_empty")]
    pub precautions: Vec<String>,
    #[serde(default, deserialize_with = "text_blocks", skip_serializing_if = "Vec::is_empty")]
    pub adverse_reactions: Vec<String>,
    #[serde(default, deserialize_with = "text_blocks", skip_serializing_if = "Vec::is_empty")]
    pub contraindications: Vec<String>,
    #[serde(default, deserialize_with = "text_blocks", skip_serializing_if = "Vec::is_empty")]
    pub drug_interactions: Vec<String>,
    #[serde(default, deserialize_with = "text_blocks", skip_serializing_if = "Vec::is_empty")]
    pub pregnancy_or_breast_feeding: Vec<String>,
}

/// Source fields a fallback chain can consult.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelField {
    BrandName,
    GenericName,
    Purpose,
    IndicationsAndUsage,
    DosageAndAdministration,
    Warnings,
    Precautions,
    AdverseReactions,
    Contraindications,
    DrugInteractions,
    PregnancyOrBreastFeeding,
}

impl LabelRecord {
    /// First non-blank text block of `field`, if any.
    pub fn field(&self, field: LabelField) -> Option<&str> {
        let blocks = match field {
            LabelField::BrandName => &self.openfda.brand_name,
            LabelField::GenericName => &self.openfda.generic_name,
            LabelField::Purpose => &self.purpose,
            LabelField::IndicationsAndUsage => &self.indications_and_usage,
            LabelField::DosageAndAdministration => &self.dosage_and_administration,
            LabelField::Warnings => &self.warnings,
            LabelField::Precautions => &self.precautions,
            LabelField::AdverseReactions => &self.adverse_reactions,
            LabelField::Contraindications => &self.contraindications,
            LabelField::DrugInteractions => &self.drug_interactions,
            LabelField::PregnancyOrBreastFeeding => &self.pregnancy_or_breast_feeding,
        };
        blocks
            .first()
            .map(String::as_str)
            .filter(|text| !text.trim().is_empty())
    }

    /// First present field along `chain`.
    pub fn first_present(&self, chain: &[LabelField]) -> Option<&str> {
        chain.iter().find_map(|&f| self.field(f))
    }
}
