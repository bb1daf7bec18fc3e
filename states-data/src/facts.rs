//! The fun-facts browser: every fact of every state, filtered by region and
//! a free-text query.

use crate::deep_link::explore_href;
use crate::selection::SelectionState;
use states_core::Dataset;
use url::Url;

pub const EMPTY_MESSAGE: &str = "No facts match your search. Try a different term.";

#[derive(Debug, Clone, PartialEq)]
pub struct FactEntry {
    /// State name.
    pub state: String,
    pub abbreviation: String,
    pub region: String,
    pub text: String,
    pub source: Option<String>,
    /// Slot number 1..=3 within the state.
    pub index: usize,
}

impl FactEntry {
    /// Link to the map page with this state's panel open.
    pub fn href(&self) -> String {
        explore_href(&self.abbreviation)
    }

    /// Host of the source URL without a leading `www.`, or the raw source
    /// when it does not parse as a URL.
    pub fn source_host(&self) -> Option<String> {
        let source = self.source.as_deref()?;
        let host = Url::parse(source)
            .ok()
            .and_then(|u| u.host_str().map(String::from));
        Some(match host {
            Some(host) => host.strip_prefix("www.").unwrap_or(&host).to_string(),
            None => source.to_string(),
        })
    }

    fn matches(&self, region: Option<&str>, query: &str) -> bool {
        if let Some(region) = region {
            if self.region != region {
                return false;
            }
        }
        query.is_empty()
            || self.text.to_lowercase().contains(query)
            || self.state.to_lowercase().contains(query)
            || self.abbreviation.to_lowercase().contains(query)
    }
}

/// Every present fact, flattened in dataset order then slot order.
pub fn all_facts(dataset: &Dataset) -> Vec<FactEntry> {
    dataset
        .states()
        .iter()
        .flat_map(|s| {
            s.facts().map(move |(index, fact)| FactEntry {
                state: s.name.clone(),
                abbreviation: s.abbreviation.clone(),
                region: s.region.clone(),
                text: fact.text.clone(),
                source: fact.source.clone(),
                index,
            })
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct FactsView {
    pub entries: Vec<FactEntry>,
    /// Number of facts before filtering.
    pub total: usize,
    pub count_label: String,
    /// Set when nothing matches.
    pub empty_message: Option<&'static str>,
}

impl FactsView {
    /// Apply the page's region filter and search query.
    ///
    /// The query is trimmed and compared case-insensitively against the
    /// fact text, state name and abbreviation. Both filters must hold.
    pub fn build(dataset: &Dataset, selection: &SelectionState) -> Self {
        let facts = all_facts(dataset);
        let total = facts.len();
        let query = selection.search_query.trim().to_lowercase();
        let region = selection.region_filter.as_deref();

        let entries: Vec<_> = facts
            .into_iter()
            .filter(|f| f.matches(region, &query))
            .collect();

        let count_label = if entries.len() == total {
            format!("{} facts across all 50 states", total)
        } else {
            format!("{} of {} facts", entries.len(), total)
        };
        let empty_message = entries.is_empty().then_some(EMPTY_MESSAGE);

        Self {
            entries,
            total,
            count_label,
            empty_message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sample_dataset;

    const THREE_STATES: &str = r#"{"states":[
        {"name":"Alaska","abbreviation":"AK","region":"West",
         "funFact1":"Alaska has more coastline than all other states combined.",
         "funFact1Source":"https://www.noaa.gov/coast",
         "funFact2":"Juneau cannot be reached by road."},
        {"name":"Maine","abbreviation":"ME","region":"Northeast",
         "funFact1":"Maine is the only state bordering exactly one other state.",
         "funFact3":"Most of the nation's lobster comes from Maine.",
         "funFact3Source":"not a url"},
        {"name":"Kansas","abbreviation":"KS","region":"Midwest",
         "funFact2":"Kansas sits near the geographic center of the contiguous states.",
         "funFact2Source":"https://example.edu/center"}
    ]}"#;

    fn three_states() -> Dataset {
        Dataset::from_json(THREE_STATES).unwrap()
    }

    fn query(region: Option<&str>, search: &str) -> SelectionState {
        SelectionState {
            region_filter: region.map(String::from),
            search_query: search.to_string(),
            ..SelectionState::default()
        }
    }

    fn states(view: &FactsView) -> Vec<(&str, usize)> {
        view.entries
            .iter()
            .map(|f| (f.abbreviation.as_str(), f.index))
            .collect()
    }

    #[test]
    fn flattening_keeps_dataset_and_slot_order() {
        let facts = all_facts(&three_states());
        let order: Vec<_> = facts
            .iter()
            .map(|f| (f.abbreviation.as_str(), f.index))
            .collect();
        assert_eq!(order, vec![("AK", 1), ("AK", 2), ("ME", 1), ("ME", 3), ("KS", 2)]);
    }

    #[test]
    fn no_filter_shows_everything() {
        let view = FactsView::build(&three_states(), &query(None, "   "));
        assert_eq!(view.entries.len(), 5);
        assert_eq!(view.count_label, "5 facts across all 50 states");
        assert!(view.empty_message.is_none());
    }

    #[test]
    fn query_is_trimmed_and_case_insensitive() {
        let dataset = three_states();
        let view = FactsView::build(&dataset, &query(None, "  LOBSTER "));
        assert_eq!(states(&view), vec![("ME", 3)]);
        assert_eq!(view.count_label, "1 of 5 facts");

        // matches the state name and the abbreviation too
        let by_name = FactsView::build(&dataset, &query(None, "kansas"));
        assert_eq!(states(&by_name), vec![("KS", 2)]);
        let by_abbr = FactsView::build(&dataset, &query(None, "ak"));
        assert_eq!(states(&by_abbr), vec![("AK", 1), ("AK", 2)]);
    }

    #[test]
    fn region_and_query_must_both_match() {
        let dataset = three_states();
        let west = FactsView::build(&dataset, &query(Some("West"), ""));
        assert_eq!(states(&west), vec![("AK", 1), ("AK", 2)]);
        assert_eq!(west.count_label, "2 of 5 facts");

        let both = FactsView::build(&dataset, &query(Some("West"), "road"));
        assert_eq!(states(&both), vec![("AK", 2)]);

        let neither = FactsView::build(&dataset, &query(Some("Midwest"), "lobster"));
        assert!(neither.entries.is_empty());
        assert_eq!(neither.count_label, "0 of 5 facts");
        assert_eq!(neither.empty_message, Some(EMPTY_MESSAGE));
    }

    #[test]
    fn source_host_drops_www() {
        let facts = all_facts(&three_states());
        assert_eq!(facts[0].source_host().as_deref(), Some("noaa.gov"));
        assert_eq!(facts[1].source_host(), None);
        assert_eq!(facts[3].source_host().as_deref(), Some("not a url"));
        assert_eq!(facts[4].source_host().as_deref(), Some("example.edu"));
    }

    #[test]
    fn cards_link_to_the_map_page() {
        let facts = all_facts(&three_states());
        assert_eq!(facts[2].href(), "index.html?state=ME");
    }

    #[test]
    fn sample_skips_blank_facts() {
        let facts = all_facts(&sample_dataset());
        // CA 3, MS 2, NY 2, PR 1, TX 3, VT 1
        assert_eq!(facts.len(), 12);
        assert!(facts.iter().all(|f| !f.text.trim().is_empty()));
    }
}
