//! Side-by-side comparison of two states.

use crate::format::{format_optional, format_population};
use crate::metric::Metric;
use states_core::{CitationKey, Dataset, StateRecord};

const ECONOMICS: [Metric; 4] = [
    Metric::Gdp,
    Metric::GdpPerCapita,
    Metric::MedianIncome,
    Metric::UnemploymentRate,
];

const HEALTH_AND_DEMOGRAPHICS: [Metric; 4] = [
    Metric::ObesityRate,
    Metric::UninsuredRate,
    Metric::LifeExpectancy,
    Metric::Population,
];

/// Header card for one side.
#[derive(Debug, Clone, PartialEq)]
pub struct CompareHero {
    pub abbreviation: String,
    pub name: String,
    pub region: String,
    /// e.g. `Pop. 39.43M`
    pub population: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompareBar {
    pub abbreviation: String,
    pub formatted: String,
    /// Width relative to the larger of the two values.
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompareRow {
    pub metric: Metric,
    pub label: &'static str,
    pub cite: CitationKey,
    pub a: CompareBar,
    pub b: CompareBar,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompareGroup {
    pub title: &'static str,
    pub rows: Vec<CompareRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompareView {
    pub a: CompareHero,
    pub b: CompareHero,
    pub groups: Vec<CompareGroup>,
}

impl CompareHero {
    fn new(record: &StateRecord) -> Self {
        Self {
            abbreviation: record.abbreviation.clone(),
            name: record.name.clone(),
            region: record.region.clone(),
            population: format!(
                "Pop. {}",
                format_optional(record.population, format_population)
            ),
        }
    }
}

fn format_metric(metric: Metric, value: Option<f64>) -> String {
    match metric {
        Metric::Population => format_optional(value, format_population),
        _ => metric.descriptor().format_value(value),
    }
}

impl CompareRow {
    fn new(metric: Metric, a: &StateRecord, b: &StateRecord) -> Self {
        let va = metric.value(a);
        let vb = metric.value(b);
        let max = va.unwrap_or(0.0).max(vb.unwrap_or(0.0));
        let percent = |v: Option<f64>| {
            if max > 0.0 {
                v.unwrap_or(0.0) / max * 100.0
            } else {
                0.0
            }
        };
        let descriptor = metric.descriptor();
        Self {
            metric,
            label: descriptor.label,
            cite: descriptor.cite,
            a: CompareBar {
                abbreviation: a.abbreviation.clone(),
                formatted: format_metric(metric, va),
                percent: percent(va),
            },
            b: CompareBar {
                abbreviation: b.abbreviation.clone(),
                formatted: format_metric(metric, vb),
                percent: percent(vb),
            },
        }
    }
}

impl CompareView {
    /// Compare `a` against `b`. None if either abbreviation is unknown.
    pub fn build(dataset: &Dataset, a: &str, b: &str) -> Option<Self> {
        let ra = dataset.lookup(a)?;
        let rb = dataset.lookup(b)?;
        let group = |title, metrics: &[Metric]| CompareGroup {
            title,
            rows: metrics.iter().map(|&m| CompareRow::new(m, ra, rb)).collect(),
        };
        Some(Self {
            a: CompareHero::new(ra),
            b: CompareHero::new(rb),
            groups: vec![
                group("Economics", &ECONOMICS),
                group("Health & Demographics", &HEALTH_AND_DEMOGRAPHICS),
            ],
        })
    }

    pub fn row(&self, metric: Metric) -> Option<&CompareRow> {
        self.groups
            .iter()
            .flat_map(|g| g.rows.iter())
            .find(|r| r.metric == metric)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sample_dataset;

    #[test]
    fn heroes_and_groups() {
        let view = CompareView::build(&sample_dataset(), "CA", "TX").unwrap();
        assert_eq!(view.a.name, "California");
        assert_eq!(view.a.population, "Pop. 39.43M");
        assert_eq!(view.b.region, "South");

        let titles: Vec<_> = view.groups.iter().map(|g| g.title).collect();
        assert_eq!(titles, vec!["Economics", "Health & Demographics"]);
        let health: Vec<_> = view.groups[1].rows.iter().map(|r| r.metric).collect();
        assert_eq!(
            health,
            vec![
                Metric::ObesityRate,
                Metric::UninsuredRate,
                Metric::LifeExpectancy,
                Metric::Population
            ]
        );
    }

    #[test]
    fn larger_value_gets_the_full_bar() {
        let view = CompareView::build(&sample_dataset(), "CA", "TX").unwrap();
        let income = view.row(Metric::MedianIncome).unwrap();
        assert_eq!(income.a.percent, 100.0);
        assert!((income.b.percent - 76292.0 / 96334.0 * 100.0).abs() < 1e-9);
        assert_eq!(income.a.formatted, "$96,334");
        assert_eq!(income.cite, CitationKey::Income);

        let population = view.row(Metric::Population).unwrap();
        assert_eq!(population.b.formatted, "31.29M");
    }

    #[test]
    fn missing_values_count_as_zero() {
        let view = CompareView::build(&sample_dataset(), "PR", "VT").unwrap();
        let gdp = view.row(Metric::Gdp).unwrap();
        assert_eq!(gdp.a.formatted, "—");
        assert_eq!(gdp.a.percent, 0.0);
        assert_eq!(gdp.b.percent, 100.0);
        assert_eq!(view.a.population, "Pop. 3.20M");
    }

    #[test]
    fn both_missing_gives_empty_bars() {
        let view = CompareView::build(&sample_dataset(), "PR", "VT").unwrap();
        let life = view.row(Metric::LifeExpectancy).unwrap();
        assert_eq!((life.a.percent, life.b.percent), (0.0, 0.0));
        assert_eq!(life.b.formatted, "—");
    }

    #[test]
    fn unknown_state_gives_no_view() {
        let dataset = sample_dataset();
        assert!(CompareView::build(&dataset, "CA", "ZZ").is_none());
        assert!(CompareView::build(&dataset, "ZZ", "TX").is_none());
    }

    #[test]
    fn same_state_on_both_sides() {
        let view = CompareView::build(&sample_dataset(), "NY", "NY").unwrap();
        assert!(view
            .groups
            .iter()
            .flat_map(|g| &g.rows)
            .all(|r| r.a.percent == r.b.percent));
    }
}
