//! Name normalization and the shared fuzzy-match primitive.
//!
//! Two normal forms exist:
//!
//! - [`normalize_for_match`] lower-cases and removes every whitespace
//!   character. Interaction, allergy and imprint comparisons use it.
//! - [`normalize_for_search`] trims, removes double quotes and lower-cases.
//!   Synonym lookups and remote search terms use it.
//!
//! # Examples
//!
//! ```
//! use pharmadex::analysis::normalizer::{bidirectional_contains, normalize_for_match};
//!
//! assert_eq!(normalize_for_match("Amoxicillin 500 mg"), "amoxicillin500mg");
//! assert!(bidirectional_contains("Aspirin", "aspirin protect 100mg"));
//! assert!(bidirectional_contains("aspirin protect 100mg", "Aspirin"));
//! assert!(!bidirectional_contains("ibuprofen", "aspirin"));
//! ```

/// Lower-case `name` and strip all whitespace.
///
/// Idempotent: applying it to its own output returns the same string.
pub fn normalize_for_match(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Trim `query`, drop double-quote characters and lower-case the rest.
pub fn normalize_for_search(query: &str) -> String {
    query.trim().replace('"', "").to_lowercase()
}

/// True when either string contains the other after [`normalize_for_match`].
///
/// Both sides are compared case-insensitively with whitespace removed, so
/// `"Amoxicillin 500mg"` and `"amoxicillin"` match in either argument order.
/// A side that normalizes to the empty string never matches.
pub fn bidirectional_contains(a: &str, b: &str) -> bool {
    let a = normalize_for_match(a);
    let b = normalize_for_match(b);
    normalized_contains(&a, &b)
}

/// [`bidirectional_contains`] for inputs that are already normalized.
///
/// Hot loops normalize each side once and call this per comparison.
pub fn normalized_contains(a: &str, b: &str) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }
    a.contains(b) || b.contains(a)
}
