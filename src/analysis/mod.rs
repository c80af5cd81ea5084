//! Text analysis for drug names.
//!
//! Normalization rules and the bilingual synonym table that every matcher
//! builds on.

pub mod normalizer;
pub mod synonym;

// Re-export commonly used types
pub use normalizer::*;
pub use synonym::*;
