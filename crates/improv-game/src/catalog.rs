//! Scenario catalog loading and validation.
//!
//! Scenarios are read once at process startup from a JSON file holding an
//! ordered list of `{id, scenario, difficulty}` objects. An unreadable or
//! malformed file degrades to a single built-in scenario so the show can
//! always go on.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::CatalogResult;

/// The built-in premise dealt when the catalog cannot be loaded.
const FALLBACK_TEXT: &str = "You are a barista who has to tell a customer \
that their latte is actually a portal to another dimension.";

/// A single improv scenario prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioRecord {
    /// Unique positive scenario id.
    pub id: u32,
    /// The premise read out to the player.
    #[serde(rename = "scenario")]
    pub text: String,
    /// Difficulty label ("easy", "medium", "hard").
    pub difficulty: String,
}

/// An immutable, validated list of scenarios.
///
/// A catalog is never empty: construction falls back to the built-in
/// scenario when loading fails or validation rejects every entry, so
/// selection can always deal something.
#[derive(Debug, Clone)]
pub struct ScenarioCatalog {
    scenarios: Vec<ScenarioRecord>,
}

impl ScenarioCatalog {
    /// Load a catalog from a JSON file.
    ///
    /// Never fails: an unreadable or malformed file is logged and replaced
    /// by [`ScenarioCatalog::fallback`].
    pub fn load(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(records) => {
                info!(count = records.len(), path = %path.display(), "Loaded scenarios");
                Self::from_records(records)
            }
            Err(err) => {
                warn!(error = %err, path = %path.display(), "Error loading scenarios, using fallback");
                Self::fallback()
            }
        }
    }

    fn try_load(path: &Path) -> CatalogResult<Vec<ScenarioRecord>> {
        let raw = fs::read_to_string(path)?;
        let records = serde_json::from_str(&raw)?;
        Ok(records)
    }

    /// Build a catalog from in-memory records, skipping invalid entries.
    ///
    /// An entry is skipped when its id is zero, its text is empty, or its
    /// id duplicates an earlier entry. Falls back to the built-in scenario
    /// if nothing survives.
    pub fn from_records(records: Vec<ScenarioRecord>) -> Self {
        let mut seen = HashSet::new();
        let mut scenarios = Vec::with_capacity(records.len());

        for record in records {
            if record.id == 0 || record.text.is_empty() {
                warn!(id = record.id, "Skipping malformed scenario entry");
                continue;
            }
            if !seen.insert(record.id) {
                warn!(id = record.id, "Skipping scenario with duplicate id");
                continue;
            }
            scenarios.push(record);
        }

        if scenarios.is_empty() {
            warn!("No valid scenarios, using fallback");
            return Self::fallback();
        }
        Self { scenarios }
    }

    /// The single built-in scenario used when loading fails.
    pub fn fallback() -> Self {
        Self {
            scenarios: vec![ScenarioRecord {
                id: 1,
                text: FALLBACK_TEXT.to_string(),
                difficulty: "medium".to_string(),
            }],
        }
    }

    /// Look up a scenario by id.
    pub fn get(&self, id: u32) -> Option<&ScenarioRecord> {
        self.scenarios.iter().find(|s| s.id == id)
    }

    /// All scenarios, in file order.
    pub fn scenarios(&self) -> &[ScenarioRecord] {
        &self.scenarios
    }

    /// Number of scenarios.
    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    /// Whether the catalog holds no scenarios. Never true for a catalog
    /// built through this module's constructors.
    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }
}
