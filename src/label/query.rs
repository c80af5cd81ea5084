//! Search expression assembly and response decoding for the label source.

use log::warn;
use serde::Deserialize;
use serde_json::Value;

use crate::analysis::synonym::SynonymTable;
use crate::error::{PharmaError, Result};
use crate::label::record::LabelRecord;

/// Default number of records requested per search.
pub const DEFAULT_LIMIT: usize = 20;

/// Message shown when a search returns no records.
pub const NO_SEARCH_RESULTS: &str =
    "검색 결과가 없습니다. 다른 검색어로 시도해 보세요 (예: 타이레놀, 이부프로펜, tylenol)";

const OR: &str = "+OR+";

/// A resolved label search: the terms to look for and a result cap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelQuery {
    terms: Vec<String>,
    limit: usize,
}

impl LabelQuery {
    /// Build a query from already-resolved terms. Blank terms are dropped.
    pub fn from_terms<I, S>(terms: I, limit: usize) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let terms: Vec<String> = terms
            .into_iter()
            .map(Into::into)
            .filter(|t: &String| !t.trim().is_empty())
            .collect();
        if terms.is_empty() {
            return Err(PharmaError::empty_input("search query"));
        }
        if limit == 0 {
            return Err(PharmaError::invalid_argument("search limit must be positive"));
        }
        Ok(LabelQuery { terms, limit })
    }

    /// Resolve free text through `synonyms` and build a query.
    pub fn resolve(query: &str, synonyms: &SynonymTable, limit: usize) -> Result<Self> {
        if query.trim().is_empty() {
            return Err(PharmaError::empty_input("search query"));
        }
        Self::from_terms(synonyms.resolve_search_terms(query), limit)
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// `openfda.brand_name:"t"+OR+openfda.generic_name:"t"` for every term,
    /// joined with `+OR+`.
    pub fn search_expression(&self) -> String {
        self.terms
            .iter()
            .flat_map(|t| {
                [
                    format!("openfda.brand_name:\"{t}\""),
                    format!("openfda.generic_name:\"{t}\""),
                ]
            })
            .collect::<Vec<_>>()
            .join(OR)
    }

    /// Request parameters in transmission order. Encoding is left to the
    /// transport.
    pub fn parameters(&self) -> Vec<(&'static str, String)> {
        vec![
            ("search", self.search_expression()),
            ("limit", self.limit.to_string()),
        ]
    }
}

#[derive(Debug, Deserialize)]
struct RawResponse {
    #[serde(default)]
    results: Option<Vec<Value>>,
    #[serde(default)]
    error: Option<RawError>,
}

#[derive(Debug, Deserialize)]
struct RawError {
    #[serde(default)]
    message: Option<String>,
}

/// Decode a response body. An error payload becomes
/// [`PharmaError::ExternalFetch`]; a body without results is an empty list.
///
/// Records are decoded one by one. A result entry that is not a label
/// object becomes an empty record, so one bad entry never hides the others.
pub fn parse_label_response(body: &str) -> Result<Vec<LabelRecord>> {
    let raw: RawResponse = serde_json::from_str(body)?;
    if let Some(error) = raw.error {
        return Err(PharmaError::external_fetch(error.message));
    }
    Ok(raw
        .results
        .unwrap_or_default()
        .into_iter()
        .enumerate()
        .map(|(i, value)| {
            serde_json::from_value(value).unwrap_or_else(|e| {
                warn!("label record #{i} unreadable, using an empty record: {e}");
                LabelRecord::default()
            })
        })
        .collect())
}
