//! Error types for pharmadex.
//!
//! All fallible operations return [`PharmaError`] through the crate-wide
//! [`Result`] alias. Empty search results and unmatched screens are not
//! errors: they come back as empty collections or
//! [`ScreenResult::NoMatch`](crate::allergy::ScreenResult::NoMatch).
//!
//! # Examples
//!
//! ```
//! use pharmadex::error::{PharmaError, Result};
//!
//! fn lookup(query: &str) -> Result<()> {
//!     if query.trim().is_empty() {
//!         return Err(PharmaError::empty_input("search query"));
//!     }
//!     Ok(())
//! }
//!
//! assert!(lookup("  ").is_err());
//! ```

use std::io;

use thiserror::Error;

/// The main error type for pharmadex operations.
#[derive(Error, Debug)]
pub enum PharmaError {
    /// I/O errors (storage files, table overrides, saved responses)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Blank query, drug name or allergy text
    #[error("Empty input: {0}")]
    EmptyInput(String),

    /// Interaction check requested with too few drugs
    #[error("At least {required} drugs are required, got {given}")]
    TooFewDrugs { required: usize, given: usize },

    /// Remote label source reported a failure
    #[error("External fetch failed: {0}")]
    ExternalFetch(String),

    /// A static table file could not be interpreted
    #[error("Table error: {0}")]
    Table(String),

    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with PharmaError.
pub type Result<T> = std::result::Result<T, PharmaError>;

/// Message used when the remote source fails without saying why.
pub const GENERIC_FETCH_FAILURE: &str = "API 오류";

impl PharmaError {
    /// Create a new empty-input error.
    pub fn empty_input<S: Into<String>>(what: S) -> Self {
        PharmaError::EmptyInput(what.into())
    }

    /// Create a new external fetch error, falling back to a generic message.
    pub fn external_fetch<S: Into<String>>(msg: Option<S>) -> Self {
        let msg = msg
            .map(Into::into)
            .filter(|m: &String| !m.trim().is_empty())
            .unwrap_or_else(|| GENERIC_FETCH_FAILURE.to_string());
        PharmaError::ExternalFetch(msg)
    }

    /// Create a new table error.
    pub fn table<S: Into<String>>(msg: S) -> Self {
        PharmaError::Table(msg.into())
    }

    /// Create a new storage error.
    pub fn storage<S: Into<String>>(msg: S) -> Self {
        PharmaError::Storage(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        PharmaError::Config(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        PharmaError::InvalidArgument(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        PharmaError::Other(msg.into())
    }

    /// Whether the user can fix this by changing their input and retrying.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            PharmaError::EmptyInput(_)
                | PharmaError::TooFewDrugs { .. }
                | PharmaError::InvalidArgument(_)
        )
    }
}
