//! # Pharmadex
//!
//! A medication lookup engine over small static reference tables.
//!
//! ## Features
//!
//! - Korean/alias to English search-term resolution
//! - Pairwise interaction checks against an interaction table
//! - Allergy screening of a persisted medication list
//! - Pill identification by shape, color and imprint
//! - Label record projection with fallback chains and safe truncation
//!
//! All matchers are pure functions over immutable tables. Matching is
//! deliberately loose (substring containment in either direction) and the
//! tables are curated, not exhaustive: an empty result is not a clinical
//! all-clear.

pub mod allergy;
pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod interaction;
pub mod label;
pub mod pill;
pub mod session;
pub mod storage;
pub mod tables;

pub mod prelude {
    pub use crate::allergy::{AllergyGroupTable, ScreenResult, screen_allergy};
    pub use crate::analysis::normalizer::{
        bidirectional_contains, normalize_for_match, normalize_for_search,
    };
    pub use crate::analysis::synonym::SynonymTable;
    pub use crate::config::PharmaConfig;
    pub use crate::error::{PharmaError, Result};
    pub use crate::interaction::{
        InteractionFinding, InteractionMatcher, InteractionScan, InteractionTable,
        find_interactions,
    };
    pub use crate::label::{
        DetailView, LabelQuery, LabelRecord, SummaryView, project_detail, project_summary,
    };
    pub use crate::pill::{Color, PillCatalog, PillQuery, PillRecord, Shape, filter_pills};
    pub use crate::session::{DrugList, MedicationList, Session};
    pub use crate::tables::Tables;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
