//! User session state and the operations the UI triggers on it.
//!
//! A [`Session`] owns the persisted medication list and the session-only
//! interaction selection, and routes user actions to the matchers. It does
//! the input checks the matchers leave to their caller: blank text, empty
//! pill queries and interaction checks with fewer than two drugs.

pub mod list;
pub mod medications;

pub use list::*;
pub use medications::*;

use std::sync::Arc;

use log::debug;

use crate::allergy::{ScreenResult, screen_allergy};
use crate::config::PharmaConfig;
use crate::error::{PharmaError, Result};
use crate::interaction::{InteractionFinding, InteractionMatcher, InteractionScan};
use crate::label::projector::LabelProjector;
use crate::label::query::LabelQuery;
use crate::pill::{PillQuery, PillRecord};
use crate::storage::Storage;
use crate::tables::Tables;

/// Minimum number of drugs for an interaction check.
pub const MIN_INTERACTION_DRUGS: usize = 2;

/// Session state bound to a set of reference tables.
#[derive(Debug)]
pub struct Session<'t> {
    tables: &'t Tables,
    scan: InteractionScan,
    search_limit: usize,
    projector: LabelProjector,
    medications: MedicationList,
    selection: DrugList,
}

impl<'t> Session<'t> {
    /// Open a session, restoring the medication list from `storage`.
    pub fn open(
        tables: &'t Tables,
        config: &PharmaConfig,
        storage: Arc<dyn Storage>,
    ) -> Result<Self> {
        Ok(Session {
            tables,
            scan: config.interaction_scan,
            search_limit: config.search_limit,
            projector: LabelProjector::new(config.summary_max_chars, config.detail_max_chars),
            medications: MedicationList::load(storage)?,
            selection: DrugList::new(),
        })
    }

    pub fn tables(&self) -> &'t Tables {
        self.tables
    }

    pub fn projector(&self) -> LabelProjector {
        self.projector
    }

    pub fn medications(&self) -> &MedicationList {
        &self.medications
    }

    pub fn medications_mut(&mut self) -> &mut MedicationList {
        &mut self.medications
    }

    /// Drugs picked for the interaction checker. Not persisted.
    pub fn selection(&self) -> &DrugList {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut DrugList {
        &mut self.selection
    }

    /// Resolve free text into a label query.
    pub fn label_query(&self, query: &str) -> Result<LabelQuery> {
        LabelQuery::resolve(query, &self.tables.synonyms, self.search_limit)
    }

    /// Check the current selection for known interactions.
    pub fn check_interactions(&self) -> Result<Vec<InteractionFinding>> {
        let drugs = self.selection.list();
        if drugs.len() < MIN_INTERACTION_DRUGS {
            return Err(PharmaError::TooFewDrugs {
                required: MIN_INTERACTION_DRUGS,
                given: drugs.len(),
            });
        }
        let findings = InteractionMatcher::new(&self.tables.interactions)
            .with_scan(self.scan)
            .find_interactions(drugs);
        debug!("{} drug(s) checked, {} finding(s)", drugs.len(), findings.len());
        Ok(findings)
    }

    /// Load the medication list into the selection and check it.
    pub fn check_my_interactions(&mut self) -> Result<Vec<InteractionFinding>> {
        self.selection.replace_with(self.medications.as_drug_list());
        self.check_interactions()
    }

    /// Screen the medication list against an allergy.
    pub fn check_allergy(&self, allergy_query: &str) -> Result<ScreenResult> {
        if self.medications.is_empty() {
            return Err(PharmaError::empty_input("medication list"));
        }
        if allergy_query.trim().is_empty() {
            return Err(PharmaError::empty_input("allergy query"));
        }
        Ok(screen_allergy(
            self.medications.list(),
            allergy_query.trim(),
            &self.tables.allergy_groups,
        ))
    }

    /// Filter the pill catalog. At least one criterion must be set.
    pub fn identify_pill(&self, query: &PillQuery) -> Result<Vec<&'t PillRecord>> {
        if query.is_empty() {
            return Err(PharmaError::empty_input("pill shape, color or imprint"));
        }
        Ok(self.tables.pills.filter(query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pill::Shape;
    use crate::storage::MemoryStorage;

    fn session(storage: MemoryStorage) -> Session<'static> {
        Session::open(Tables::builtin(), &PharmaConfig::default(), Arc::new(storage)).unwrap()
    }

    #[test]
    fn test_interaction_check_needs_two_drugs() {
        let mut session = session(MemoryStorage::new());
        session.selection_mut().add("aspirin").unwrap();
        assert!(matches!(
            session.check_interactions(),
            Err(PharmaError::TooFewDrugs { required: 2, given: 1 })
        ));

        session.selection_mut().add("warfarin").unwrap();
        assert_eq!(session.check_interactions().unwrap().len(), 1);
    }

    #[test]
    fn test_check_my_interactions_copies_medications() {
        let mut session = session(MemoryStorage::new());
        session.medications_mut().add("Warfarin 5mg").unwrap();
        session.medications_mut().add("Ibuprofen").unwrap();
        session.selection_mut().add("unrelated").unwrap();

        let findings = session.check_my_interactions().unwrap();
        assert_eq!(session.selection().list(), ["Warfarin 5mg", "Ibuprofen"]);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].to_string(), "Warfarin 5mg ↔ Ibuprofen: 상호작용 가능");
    }

    #[test]
    fn test_allergy_input_checks() {
        let mut session = session(MemoryStorage::new());
        assert!(matches!(
            session.check_allergy("페니실린"),
            Err(PharmaError::EmptyInput(_))
        ));

        session.medications_mut().add("아목시실린500mg").unwrap();
        assert!(matches!(session.check_allergy("  "), Err(PharmaError::EmptyInput(_))));
        assert!(session.check_allergy("페니실린").unwrap().is_match());
    }

    #[test]
    fn test_identify_pill_rejects_empty_query() {
        let session = session(MemoryStorage::new());
        assert!(session.identify_pill(&PillQuery::new()).is_err());
        assert!(!session
            .identify_pill(&PillQuery::new().with_shape(Shape::Capsule))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_selection_is_not_persisted() {
        let storage = MemoryStorage::new();
        let mut first = session(storage.clone());
        first.selection_mut().add("aspirin").unwrap();
        first.medications_mut().add("metformin").unwrap();

        let second = session(storage);
        assert!(second.selection().is_empty());
        assert_eq!(second.medications().list(), ["metformin"]);
    }
}
