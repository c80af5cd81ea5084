//! Static reference tables.
//!
//! [`Tables::builtin`] materializes the compiled-in data once, on first use.
//! [`Tables::load`] starts from the built-ins and swaps in any table for
//! which the configuration names an override file. Tables are never mutated
//! after construction.

mod builtin;

use std::sync::LazyLock;

use log::info;

use crate::allergy::AllergyGroupTable;
use crate::analysis::synonym::SynonymTable;
use crate::config::PharmaConfig;
use crate::error::Result;
use crate::interaction::InteractionTable;
use crate::pill::{PillCatalog, PillRecord};

static BUILTIN: LazyLock<Tables> = LazyLock::new(Tables::from_builtin_data);

/// The four reference tables the matchers run against.
#[derive(Debug, Clone)]
pub struct Tables {
    pub synonyms: SynonymTable,
    pub interactions: InteractionTable,
    pub allergy_groups: AllergyGroupTable,
    pub pills: PillCatalog,
}

impl Tables {
    /// Shared compiled-in tables.
    pub fn builtin() -> &'static Tables {
        &BUILTIN
    }

    /// Built-in tables with configured overrides applied.
    pub fn load(config: &PharmaConfig) -> Result<Tables> {
        let mut tables = Tables::builtin().clone();

        if let Some(path) = &config.synonyms_path {
            tables.synonyms = SynonymTable::load_from_file(path)?;
            info!("loaded {} synonyms from {}", tables.synonyms.len(), path.display());
        }
        if let Some(path) = &config.interactions_path {
            tables.interactions = InteractionTable::load_from_file(path)?;
            info!(
                "loaded {} interaction entries from {}",
                tables.interactions.len(),
                path.display()
            );
        }
        if let Some(path) = &config.allergy_groups_path {
            tables.allergy_groups = AllergyGroupTable::load_from_file(path)?;
            info!(
                "loaded {} allergy groups from {}",
                tables.allergy_groups.len(),
                path.display()
            );
        }
        if let Some(path) = &config.pills_path {
            tables.pills = PillCatalog::load_from_file(path)?;
            info!("loaded {} pill records from {}", tables.pills.len(), path.display());
        }

        Ok(tables)
    }

    fn from_builtin_data() -> Tables {
        let synonyms = SynonymTable::from_pairs(builtin::SYNONYMS.iter().copied());

        let mut interactions = InteractionTable::new();
        for &(drug, partners) in builtin::INTERACTIONS {
            interactions.insert(drug, partners);
        }

        let mut allergy_groups = AllergyGroupTable::new();
        for &(label, ingredients) in builtin::ALLERGY_GROUPS {
            allergy_groups.insert(label, ingredients);
        }

        let pills = PillCatalog::new(
            builtin::PILLS
                .iter()
                .map(|&(name, ingredient, strength, shape, color, imprint)| {
                    PillRecord::new(name, ingredient, strength, shape, color, imprint)
                })
                .collect(),
        );

        Tables {
            synonyms,
            interactions,
            allergy_groups,
            pills,
        }
    }
}
