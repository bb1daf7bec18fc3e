//! The state detail panel: open/close state and the tabbed contents.

use crate::format::{format_optional, format_population, format_signed_percent, MISSING};
use crate::metric::Metric;
use states_core::{CitationKey, Dataset, StateRecord};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PanelTab {
    #[default]
    Overview,
    Economy,
    Health,
    Industries,
    Facts,
}

impl PanelTab {
    pub const ALL: [PanelTab; 5] = [
        PanelTab::Overview,
        PanelTab::Economy,
        PanelTab::Health,
        PanelTab::Industries,
        PanelTab::Facts,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PanelTab::Overview => "Overview",
            PanelTab::Economy => "Economy",
            PanelTab::Health => "Health",
            PanelTab::Industries => "Industries",
            PanelTab::Facts => "Fun Facts",
        }
    }

    /// DOM id suffix of the tab's content block.
    pub fn id(self) -> &'static str {
        match self {
            PanelTab::Overview => "overview",
            PanelTab::Economy => "economy",
            PanelTab::Health => "health",
            PanelTab::Industries => "industry",
            PanelTab::Facts => "facts",
        }
    }
}

/// Which state, if any, the panel is showing and on which tab.
///
/// At most one panel is open at a time; opening again replaces the state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PanelState {
    open: Option<String>,
    tab: PanelTab,
}

impl PanelState {
    pub fn open(&mut self, abbreviation: &str) {
        self.open = Some(abbreviation.to_string());
        self.tab = PanelTab::Overview;
    }

    /// Returns whether the panel was open.
    pub fn close(&mut self) -> bool {
        self.open.take().is_some()
    }

    pub fn select_tab(&mut self, tab: PanelTab) {
        if self.open.is_some() {
            self.tab = tab;
        }
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn abbreviation(&self) -> Option<&str> {
        self.open.as_deref()
    }

    pub fn tab(&self) -> PanelTab {
        self.tab
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatCard {
    pub label: String,
    pub value: String,
    pub cite: Option<CitationKey>,
    /// Small print under the value.
    pub note: Option<String>,
    /// Spans the full grid width.
    pub full: bool,
    pub large: bool,
}

impl StatCard {
    fn plain(label: &str, value: &str) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
            cite: None,
            note: None,
            full: false,
            large: false,
        }
    }

    fn metric(metric: Metric, record: &StateRecord) -> Self {
        let descriptor = metric.descriptor();
        Self {
            label: descriptor.label.to_string(),
            value: descriptor.format_value(metric.value(record)),
            cite: Some(descriptor.cite),
            note: None,
            full: false,
            large: false,
        }
    }

    fn full(mut self) -> Self {
        self.full = true;
        self
    }

    fn large(mut self) -> Self {
        self.large = true;
        self
    }

    fn note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FactCard {
    /// Slot number 1..=3 as stored in the record.
    pub number: usize,
    pub text: String,
    pub source: Option<String>,
}

/// Everything the panel renders for one state.
#[derive(Debug, Clone, PartialEq)]
pub struct StatePanel {
    pub abbreviation: String,
    pub name: String,
    pub capital: String,
    pub region: String,
    pub overview: Vec<StatCard>,
    pub economy: Vec<StatCard>,
    pub health: Vec<StatCard>,
    /// "U.S. Context" cards with the state's rank.
    pub health_context: Vec<StatCard>,
    pub industries: Vec<String>,
    pub employers: Vec<String>,
    pub facts: Vec<FactCard>,
}

const HEALTH_CONTEXT: [Metric; 3] = [
    Metric::LifeExpectancy,
    Metric::ObesityRate,
    Metric::UninsuredRate,
];

/// 1-based rank of `value` among the dataset's non-null values sorted
/// ascending, and the number of values ranked.
pub fn health_rank(dataset: &Dataset, metric: Metric, value: f64) -> Option<(usize, usize)> {
    let mut values = metric.values(dataset.states());
    values.sort_by(f64::total_cmp);
    let rank = values.iter().position(|v| *v >= value)? + 1;
    Some((rank, values.len()))
}

impl StatePanel {
    pub fn build(dataset: &Dataset, record: &StateRecord) -> Self {
        let population = StatCard {
            label: "Population (2024 est.)".to_string(),
            value: format_optional(record.population, format_population),
            cite: Some(CitationKey::Population),
            note: None,
            full: true,
            large: true,
        }
        .note(format!(
            "Annual change: {}",
            format_optional(record.pop_change, format_signed_percent)
        ));

        let overview = vec![
            population,
            StatCard::plain("Capital", &record.capital),
            StatCard::plain("Region", &record.region),
            StatCard::metric(Metric::Gdp, record),
            StatCard::metric(Metric::GdpPerCapita, record),
            StatCard::metric(Metric::MedianIncome, record),
            StatCard::metric(Metric::UnemploymentRate, record),
            StatCard::metric(Metric::LifeExpectancy, record),
            StatCard::metric(Metric::ObesityRate, record),
        ];

        let economy = vec![
            StatCard::metric(Metric::Gdp, record).full().large(),
            StatCard::metric(Metric::GdpPerCapita, record),
            StatCard::metric(Metric::MedianIncome, record),
            StatCard::metric(Metric::UnemploymentRate, record).full(),
        ];

        let health = vec![
            StatCard::metric(Metric::LifeExpectancy, record).large(),
            StatCard::metric(Metric::ObesityRate, record).large(),
            StatCard::metric(Metric::UninsuredRate, record)
                .full()
                .note("Percentage of population without health insurance coverage"),
        ];

        let health_context = HEALTH_CONTEXT
            .iter()
            .map(|&metric| {
                let card = StatCard::metric(metric, record);
                let rank = metric
                    .value(record)
                    .and_then(|v| health_rank(dataset, metric, v));
                match rank {
                    Some((rank, of)) => card.note(format!(
                        "Ranks #{} of {} states ({} is better)",
                        rank,
                        of,
                        metric.polarity().phrase()
                    )),
                    None => card.note(format!("Rank {}", MISSING)),
                }
            })
            .collect();

        let facts = record
            .facts()
            .map(|(number, fact)| FactCard {
                number,
                text: fact.text.clone(),
                source: fact.source.clone(),
            })
            .collect();

        Self {
            abbreviation: record.abbreviation.clone(),
            name: record.name.clone(),
            capital: record.capital.clone(),
            region: record.region.clone(),
            overview,
            economy,
            health,
            health_context,
            industries: record.top_industries.clone(),
            employers: record.major_employers.clone(),
            facts,
        }
    }

    pub fn cards(&self, tab: PanelTab) -> &[StatCard] {
        match tab {
            PanelTab::Overview => &self.overview,
            PanelTab::Economy => &self.economy,
            PanelTab::Health => &self.health,
            PanelTab::Industries | PanelTab::Facts => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sample_dataset;

    #[test]
    fn opening_twice_shows_only_the_second_state() {
        let mut panel = PanelState::default();
        panel.open("CA");
        panel.select_tab(PanelTab::Health);
        panel.open("TX");
        assert!(panel.is_open());
        assert_eq!(panel.abbreviation(), Some("TX"));
        assert_eq!(panel.tab(), PanelTab::Overview);
    }

    #[test]
    fn closing_a_closed_panel_is_a_no_op() {
        let mut panel = PanelState::default();
        assert!(!panel.close());
        assert_eq!(panel, PanelState::default());

        panel.open("NY");
        assert!(panel.close());
        assert!(!panel.close());
        assert!(!panel.is_open());
        assert_eq!(panel.abbreviation(), None);
    }

    #[test]
    fn tabs_only_change_while_open() {
        let mut panel = PanelState::default();
        panel.select_tab(PanelTab::Facts);
        assert_eq!(panel.tab(), PanelTab::Overview);
        panel.open("VT");
        panel.select_tab(PanelTab::Facts);
        assert_eq!(panel.tab(), PanelTab::Facts);
    }

    #[test]
    fn tab_labels_and_ids() {
        let labels: Vec<_> = PanelTab::ALL.iter().map(|t| t.label()).collect();
        assert_eq!(
            labels,
            vec!["Overview", "Economy", "Health", "Industries", "Fun Facts"]
        );
        assert_eq!(PanelTab::Industries.id(), "industry");
    }

    #[test]
    fn overview_cards_carry_citations() {
        let dataset = sample_dataset();
        let panel = StatePanel::build(&dataset, dataset.lookup("CA").unwrap());
        assert_eq!(panel.overview.len(), 9);

        let population = &panel.overview[0];
        assert_eq!(population.value, "39.43M");
        assert_eq!(population.note.as_deref(), Some("Annual change: +0.59%"));
        assert_eq!(population.cite.map(|c| c.citation().id), Some(4));
        assert!(population.full && population.large);

        assert_eq!(panel.overview[1].value, "Sacramento");
        assert!(panel.overview[1].cite.is_none());
        assert_eq!(panel.overview[3].value, "$4.10T");
        assert_eq!(panel.overview[5].cite, Some(CitationKey::Income));
    }

    #[test]
    fn health_context_ranks_ascending_values() {
        let dataset = sample_dataset();
        let panel = StatePanel::build(&dataset, dataset.lookup("MS").unwrap());
        let notes: Vec<_> = panel
            .health_context
            .iter()
            .map(|c| c.note.as_deref().unwrap())
            .collect();
        // life expectancy sorted: 71.9, 76.5, 78.2, 79.0
        assert_eq!(notes[0], "Ranks #1 of 4 states (higher is better)");
        // obesity sorted: 27.7, 28.4, 29.1, 35.5, 40.1
        assert_eq!(notes[1], "Ranks #5 of 5 states (lower is better)");
        assert_eq!(panel.health_context[2].label, "Uninsured Rate");
    }

    #[test]
    fn missing_values_have_no_rank() {
        let dataset = sample_dataset();
        let panel = StatePanel::build(&dataset, dataset.lookup("VT").unwrap());
        assert_eq!(panel.health_context[0].value, "—");
        assert_eq!(panel.health_context[0].note.as_deref(), Some("Rank —"));
        assert_eq!(health_rank(&dataset, Metric::ObesityRate, 28.4), Some((2, 5)));
    }

    #[test]
    fn industries_keep_source_order_and_facts_skip_blanks() {
        let dataset = sample_dataset();
        let ca = StatePanel::build(&dataset, dataset.lookup("CA").unwrap());
        assert_eq!(
            ca.industries,
            vec!["Technology", "Entertainment", "Agriculture", "Tourism"]
        );
        assert_eq!(ca.employers.len(), 3);

        let ny = StatePanel::build(&dataset, dataset.lookup("NY").unwrap());
        let numbers: Vec<_> = ny.facts.iter().map(|f| f.number).collect();
        assert_eq!(numbers, vec![1, 3]);
        assert_eq!(ny.facts[1].source.as_deref(), Some("https://www.esbnyc.com/"));
    }

    #[test]
    fn cards_by_tab() {
        let dataset = sample_dataset();
        let panel = StatePanel::build(&dataset, dataset.lookup("TX").unwrap());
        assert_eq!(panel.cards(PanelTab::Economy).len(), 4);
        assert_eq!(panel.cards(PanelTab::Health).len(), 3);
        assert!(panel.cards(PanelTab::Facts).is_empty());
    }
}
