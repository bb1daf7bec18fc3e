//! Per-page selection state.
//!
//! Each page owns one `SelectionState` and passes it by reference to the
//! view builders. It is mutated only in response to user input and is never
//! persisted.

use crate::metric::Metric;
use states_core::Dataset;

/// One of the two compare positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    A,
    B,
}

impl Slot {
    pub fn other(self) -> Self {
        match self {
            Slot::A => Slot::B,
            Slot::B => Slot::A,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Slot::A => "State A",
            Slot::B => "State B",
        }
    }

    pub fn letter(self) -> &'static str {
        match self {
            Slot::A => "A",
            Slot::B => "B",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Descending,
    Ascending,
}

pub const DEFAULT_COMPARE_A: &str = "CA";
pub const DEFAULT_COMPARE_B: &str = "TX";

#[derive(Debug, Clone, PartialEq)]
pub struct SelectionState {
    pub metric: Metric,
    /// State whose detail panel is open.
    pub active_state: Option<String>,
    pub compare_a: String,
    pub compare_b: String,
    /// Slot the next rankings row click fills.
    pub next_slot: Slot,
    pub sort: SortDirection,
    pub region_filter: Option<String>,
    pub search_query: String,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            metric: Metric::default(),
            active_state: None,
            compare_a: DEFAULT_COMPARE_A.to_string(),
            compare_b: DEFAULT_COMPARE_B.to_string(),
            next_slot: Slot::A,
            sort: SortDirection::default(),
            region_filter: None,
            search_query: String::new(),
        }
    }
}

impl SelectionState {
    pub fn slot(&self, slot: Slot) -> &str {
        match slot {
            Slot::A => &self.compare_a,
            Slot::B => &self.compare_b,
        }
    }

    /// Which slot holds `abbreviation`, A taking precedence.
    pub fn slot_for(&self, abbreviation: &str) -> Option<Slot> {
        if self.compare_a == abbreviation {
            Some(Slot::A)
        } else if self.compare_b == abbreviation {
            Some(Slot::B)
        } else {
            None
        }
    }

    /// Fill the slot under the cursor and advance the cursor.
    ///
    /// An unknown abbreviation changes nothing and returns None.
    pub fn assign_next_slot(&mut self, dataset: &Dataset, abbreviation: &str) -> Option<Slot> {
        dataset.lookup(abbreviation)?;
        let slot = self.next_slot;
        self.write_slot(slot, abbreviation);
        self.next_slot = slot.other();
        Some(slot)
    }

    /// Set a slot directly (the dropdowns). Leaves the cursor alone.
    pub fn set_slot(&mut self, dataset: &Dataset, slot: Slot, abbreviation: &str) -> bool {
        if dataset.lookup(abbreviation).is_none() {
            log::warn!("[States] selection: unknown state {}", abbreviation);
            return false;
        }
        self.write_slot(slot, abbreviation);
        true
    }

    fn write_slot(&mut self, slot: Slot, abbreviation: &str) {
        match slot {
            Slot::A => self.compare_a = abbreviation.to_string(),
            Slot::B => self.compare_b = abbreviation.to_string(),
        }
    }

    /// Hint shown above the compare pane.
    pub fn instruction(&self) -> String {
        format!(
            "Next click sets {} · or use the dropdowns below",
            self.next_slot.label()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sample_dataset;

    #[test]
    fn defaults() {
        let s = SelectionState::default();
        assert_eq!(s.metric, Metric::MedianIncome);
        assert_eq!((s.compare_a.as_str(), s.compare_b.as_str()), ("CA", "TX"));
        assert_eq!(s.next_slot, Slot::A);
        assert_eq!(s.sort, SortDirection::Descending);
        assert!(s.active_state.is_none());
        assert!(s.region_filter.is_none());
        assert!(s.search_query.is_empty());
    }

    #[test]
    fn row_clicks_alternate_between_slots() {
        let dataset = sample_dataset();
        let mut s = SelectionState::default();

        assert_eq!(s.assign_next_slot(&dataset, "NY"), Some(Slot::A));
        assert_eq!((s.compare_a.as_str(), s.next_slot), ("NY", Slot::B));

        assert_eq!(s.assign_next_slot(&dataset, "MS"), Some(Slot::B));
        assert_eq!((s.compare_b.as_str(), s.next_slot), ("MS", Slot::A));

        assert_eq!(s.assign_next_slot(&dataset, "VT"), Some(Slot::A));
        assert_eq!(s.compare_a, "VT");
        assert_eq!(s.compare_b, "MS");
        assert_eq!(s.next_slot, Slot::B);
    }

    #[test]
    fn dropdown_changes_do_not_reset_the_cursor() {
        let dataset = sample_dataset();
        let mut s = SelectionState::default();
        s.assign_next_slot(&dataset, "NY");
        assert_eq!(s.next_slot, Slot::B);

        assert!(s.set_slot(&dataset, Slot::A, "VT"));
        assert!(s.set_slot(&dataset, Slot::B, "CA"));
        assert_eq!(s.next_slot, Slot::B);

        s.assign_next_slot(&dataset, "TX");
        assert_eq!(s.compare_b, "TX");
        assert_eq!(s.compare_a, "VT");
    }

    #[test]
    fn unknown_states_leave_everything_unchanged() {
        let dataset = sample_dataset();
        let mut s = SelectionState::default();
        let before = s.clone();
        assert_eq!(s.assign_next_slot(&dataset, "ZZ"), None);
        assert!(!s.set_slot(&dataset, Slot::B, "ZZ"));
        assert_eq!(s, before);
    }

    #[test]
    fn slot_lookup_prefers_a() {
        let mut s = SelectionState::default();
        s.compare_b = "CA".to_string();
        assert_eq!(s.slot_for("CA"), Some(Slot::A));
        assert_eq!(s.slot_for("NY"), None);
        assert_eq!(s.slot(Slot::B), "CA");
    }

    #[test]
    fn instruction_names_the_next_slot() {
        let dataset = sample_dataset();
        let mut s = SelectionState::default();
        assert_eq!(
            s.instruction(),
            "Next click sets State A · or use the dropdowns below"
        );
        s.assign_next_slot(&dataset, "NY");
        assert!(s.instruction().starts_with("Next click sets State B"));
    }
}
