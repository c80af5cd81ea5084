//! Storage abstraction trait.

use crate::error::{PharmaError, Result};

/// A keyed blob store for persisted state.
///
/// Keys are flat names such as `"myMedications"`; implementations decide
/// how a key maps onto their medium.
pub trait Storage: Send + Sync + std::fmt::Debug {
    /// Read the value under `key`, `None` when absent.
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Replace the value under `key`.
    fn write(&self, key: &str, data: &[u8]) -> Result<()>;

    /// Check whether `key` holds a value.
    fn exists(&self, key: &str) -> bool;

    /// Remove `key`. Removing an absent key succeeds.
    fn delete(&self, key: &str) -> Result<()>;

    /// All keys currently present, sorted.
    fn list_keys(&self) -> Result<Vec<String>>;
}

/// Reject keys that are empty or could escape a storage directory.
pub fn validate_key(key: &str) -> Result<()> {
    if key.is_empty()
        || key.starts_with('.')
        || key.contains(['/', '\\'])
        || key.chars().any(char::is_control)
    {
        return Err(PharmaError::storage(format!("Invalid storage key: {key:?}")));
    }
    Ok(())
}
