//! Ranked bar list for the data page.

use crate::color::extent;
use crate::metric::Metric;
use crate::selection::{SelectionState, Slot, SortDirection};
use states_core::Dataset;

#[derive(Debug, Clone, PartialEq)]
pub struct RankingRow {
    /// 1-based position in the sorted list.
    pub rank: usize,
    pub abbreviation: String,
    pub name: String,
    pub value: f64,
    pub formatted: String,
    /// Bar width in percent; longer always reads as better for the direction.
    pub bar_percent: f64,
    /// Compare slot this state currently occupies.
    pub slot: Option<Slot>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RankingsView {
    pub metric: Metric,
    pub direction: SortDirection,
    pub rows: Vec<RankingRow>,
}

impl RankingsView {
    /// Rank every state with a value for the selected metric.
    pub fn build(dataset: &Dataset, selection: &SelectionState) -> Self {
        let metric = selection.metric;
        let direction = selection.sort;

        let mut ranked: Vec<_> = dataset
            .states()
            .iter()
            .filter_map(|s| metric.value(s).filter(|v| !v.is_nan()).map(|v| (s, v)))
            .collect();
        ranked.sort_by(|(_, a), (_, b)| match direction {
            SortDirection::Descending => b.total_cmp(a),
            SortDirection::Ascending => a.total_cmp(b),
        });

        let (min, max) = extent(ranked.iter().map(|(_, v)| *v)).unwrap_or((0.0, 0.0));
        let range = if max - min == 0.0 { 1.0 } else { max - min };
        let descriptor = metric.descriptor();

        let rows = ranked
            .into_iter()
            .enumerate()
            .map(|(i, (state, value))| {
                let pct = round_tenth((value - min) / range * 100.0);
                let bar_percent = match direction {
                    SortDirection::Descending => pct,
                    SortDirection::Ascending => 100.0 - pct,
                };
                RankingRow {
                    rank: i + 1,
                    abbreviation: state.abbreviation.clone(),
                    name: state.name.clone(),
                    value,
                    formatted: descriptor.format(value),
                    bar_percent,
                    slot: selection.slot_for(&state.abbreviation),
                }
            })
            .collect();

        Self {
            metric,
            direction,
            rows,
        }
    }
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
