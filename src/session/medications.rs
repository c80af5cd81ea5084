//! The persisted "my medications" list.

use std::sync::Arc;

use log::{info, warn};

use crate::error::Result;
use crate::session::list::DrugList;
use crate::storage::Storage;

/// Storage key the medication list lives under.
pub const MEDICATIONS_KEY: &str = "myMedications";

/// A [`DrugList`] that is written back to storage after every change.
///
/// The stored form is a JSON array of strings. A change is applied in
/// memory only once it has been written, so a failed write leaves the list
/// as it was.
#[derive(Debug, Clone)]
pub struct MedicationList {
    list: DrugList,
    storage: Arc<dyn Storage>,
}

impl MedicationList {
    /// Restore the list from `storage`, starting empty when nothing is
    /// stored yet.
    ///
    /// A stored value that is not a JSON string array is logged and
    /// replaced by an empty list on the next write.
    pub fn load(storage: Arc<dyn Storage>) -> Result<Self> {
        let list = match storage.read(MEDICATIONS_KEY)? {
            None => DrugList::new(),
            Some(bytes) => match serde_json::from_slice::<Vec<String>>(&bytes) {
                Ok(names) => DrugList::from_names(names),
                Err(e) => {
                    warn!("ignoring unreadable {MEDICATIONS_KEY}: {e}");
                    DrugList::new()
                }
            },
        };
        info!("restored {} medication(s)", list.len());
        Ok(MedicationList { list, storage })
    }

    /// Add a medication. Returns whether it was new.
    pub fn add(&mut self, name: &str) -> Result<bool> {
        let mut next = self.list.clone();
        let added = next.add(name)?;
        if added {
            self.commit(next)?;
            info!("added medication {:?}", name.trim());
        }
        Ok(added)
    }

    /// Remove the medication at `index`.
    pub fn remove_at(&mut self, index: usize) -> Result<Option<String>> {
        let mut next = self.list.clone();
        let removed = next.remove_at(index);
        if let Some(name) = &removed {
            self.commit(next)?;
            info!("removed medication {name:?}");
        }
        Ok(removed)
    }

    /// Remove a medication by name.
    pub fn remove(&mut self, name: &str) -> Result<bool> {
        let mut next = self.list.clone();
        let removed = next.remove(name);
        if removed {
            self.commit(next)?;
            info!("removed medication {:?}", name.trim());
        }
        Ok(removed)
    }

    /// Remove every medication.
    pub fn clear(&mut self) -> Result<()> {
        self.commit(DrugList::new())
    }

    /// Current medications in insertion order.
    pub fn list(&self) -> &[String] {
        self.list.list()
    }

    /// The underlying list.
    pub fn as_drug_list(&self) -> &DrugList {
        &self.list
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Write `next` to storage, then make it the current list.
    fn commit(&mut self, next: DrugList) -> Result<()> {
        let bytes = serde_json::to_vec(next.list())?;
        self.storage.write(MEDICATIONS_KEY, &bytes)?;
        self.list = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PharmaError;
    use crate::storage::MemoryStorage;

    /// Reads like an empty store and refuses every write.
    #[derive(Debug)]
    struct ReadOnlyStorage;

    impl Storage for ReadOnlyStorage {
        fn read(&self, _key: &str) -> Result<Option<Vec<u8>>> {
            Ok(None)
        }

        fn write(&self, key: &str, _data: &[u8]) -> Result<()> {
            Err(PharmaError::storage(format!("read-only: {key}")))
        }

        fn exists(&self, _key: &str) -> bool {
            false
        }

        fn delete(&self, _key: &str) -> Result<()> {
            Ok(())
        }

        fn list_keys(&self) -> Result<Vec<String>> {
            Ok(Vec::new())
        }
    }

    #[test]
    fn test_failed_write_leaves_list_unchanged() {
        let mut meds = MedicationList {
            list: DrugList::from_names(["a", "b"]),
            storage: Arc::new(ReadOnlyStorage),
        };

        assert!(matches!(meds.add("c"), Err(PharmaError::Storage(_))));
        assert!(meds.remove("a").is_err());
        assert!(meds.remove_at(1).is_err());
        assert!(meds.clear().is_err());
        assert_eq!(meds.list(), ["a", "b"]);

        // Nothing to change means nothing to write.
        assert!(!meds.add("a").unwrap());
        assert!(!meds.remove("zzz").unwrap());
        assert_eq!(meds.remove_at(9).unwrap(), None);
    }

    #[test]
    fn test_persists_every_change() {
        let storage = MemoryStorage::new();
        let mut meds = MedicationList::load(Arc::new(storage.clone())).unwrap();
        assert!(meds.is_empty());

        meds.add("타이레놀").unwrap();
        meds.add("Warfarin").unwrap();
        assert_eq!(
            storage.read(MEDICATIONS_KEY).unwrap().unwrap(),
            r#"["타이레놀","Warfarin"]"#.as_bytes()
        );

        meds.remove_at(0).unwrap();
        let restored = MedicationList::load(Arc::new(storage)).unwrap();
        assert_eq!(restored.list(), ["Warfarin"]);
    }

    #[test]
    fn test_duplicate_add_does_not_write() {
        let storage = MemoryStorage::new();
        let mut meds = MedicationList::load(Arc::new(storage.clone())).unwrap();
        meds.add("a").unwrap();
        storage.delete(MEDICATIONS_KEY).unwrap();

        assert!(!meds.add("a").unwrap());
        assert!(!storage.exists(MEDICATIONS_KEY));
    }

    #[test]
    fn test_corrupt_value_starts_empty() {
        let storage = MemoryStorage::new();
        storage.write(MEDICATIONS_KEY, b"{not json").unwrap();
        let meds = MedicationList::load(Arc::new(storage)).unwrap();
        assert!(meds.is_empty());
    }

    #[test]
    fn test_restored_list_is_deduplicated() {
        let storage = MemoryStorage::new();
        storage
            .write(MEDICATIONS_KEY, br#"["a", " a", "", "b"]"#)
            .unwrap();
        let meds = MedicationList::load(Arc::new(storage)).unwrap();
        assert_eq!(meds.list(), ["a", "b"]);
    }
}
