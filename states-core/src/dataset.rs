//! The in-memory dataset: every state record plus the raw source entries.
//!
//! A `Dataset` is built once per page from `states_data.json` and treated as
//! immutable afterwards. All views look records up by abbreviation.

use crate::error::{LoadError, Result};
use crate::record::StateRecord;
use serde::Deserialize;
use serde_json::Value;
use std::collections::{BTreeSet, HashMap};

#[derive(Deserialize)]
struct DatasetWire {
    states: Vec<StateRecord>,
    sources: Option<Vec<Value>>,
}

/// Loaded states dataset with lookup by abbreviation.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    states: Vec<StateRecord>,
    raw_sources: Vec<Value>,
    by_abbreviation: HashMap<String, usize>,
}

impl Dataset {
    /// Parse a `states_data.json` document.
    ///
    /// The `states` array is required; `sources` may be missing or null.
    pub fn from_json(json: &str) -> Result<Self> {
        let wire: DatasetWire = serde_json::from_str(json)?;
        Self::new(wire.states, wire.sources.unwrap_or_default())
    }

    /// Build a dataset from already-parsed parts, enforcing unique abbreviations.
    pub fn new(states: Vec<StateRecord>, raw_sources: Vec<Value>) -> Result<Self> {
        if states.is_empty() {
            return Err(LoadError::Empty);
        }
        let mut by_abbreviation = HashMap::with_capacity(states.len());
        for (i, state) in states.iter().enumerate() {
            if by_abbreviation.insert(state.abbreviation.clone(), i).is_some() {
                return Err(LoadError::DuplicateAbbreviation(state.abbreviation.clone()));
            }
        }
        log::info!(
            "[States] dataset: loaded {} states and {} source entries",
            states.len(),
            raw_sources.len()
        );
        Ok(Self {
            states,
            raw_sources,
            by_abbreviation,
        })
    }

    /// Find a record by its two-letter abbreviation. Exact match.
    pub fn lookup(&self, abbreviation: &str) -> Option<&StateRecord> {
        self.by_abbreviation
            .get(abbreviation)
            .map(|&i| &self.states[i])
    }

    /// All records in dataset order.
    pub fn states(&self) -> &[StateRecord] {
        &self.states
    }

    /// Source entries as they appear in the document, loosely typed.
    pub fn raw_sources(&self) -> &[Value] {
        &self.raw_sources
    }

    /// Distinct non-empty regions, sorted.
    pub fn regions(&self) -> Vec<String> {
        self.states
            .iter()
            .map(|s| s.region.as_str())
            .filter(|r| !r.is_empty())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(String::from)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
