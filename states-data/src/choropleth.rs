//! Map fills and legend for the current metric.
//!
//! The map scale is built from states that have a shape on the map; the
//! legend takes its own range over every state in the dataset and samples
//! the map scale across it.

use crate::color::{extent, ColorScale};
use crate::metric::Metric;
use serde::Serialize;
use states_core::{geo, Dataset};

/// Fill used when no state has a value for the metric.
pub const NEUTRAL_FILL: &str = "#d1d5db";

/// Number of gradient stops in the legend bar.
pub const LEGEND_STOPS: usize = 11;

/// Fill color for one map shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShapeFill {
    pub abbreviation: String,
    pub fill: String,
}

/// Everything the map script needs to color the shapes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChoroplethView {
    pub metric: Metric,
    pub fills: Vec<ShapeFill>,
}

/// One stop of the legend gradient.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientStop {
    /// Offset along the bar, in percent.
    pub offset: f64,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendView {
    pub label: &'static str,
    pub low: String,
    pub high: String,
    pub stops: Vec<GradientStop>,
}

/// Color scale over the states that have map geometry.
pub fn map_scale(dataset: &Dataset, metric: Metric) -> Option<ColorScale> {
    let mapped = dataset
        .states()
        .iter()
        .filter(|s| geo::has_geometry(&s.abbreviation));
    ColorScale::build(metric.values(mapped), metric.polarity())
}

impl ChoroplethView {
    /// Fill every mapped state by `metric`.
    ///
    /// A missing value is colored as zero.
    pub fn build(dataset: &Dataset, metric: Metric) -> Self {
        let scale = map_scale(dataset, metric);
        if scale.is_none() {
            log::warn!("[States] choropleth: no values for {}", metric);
        }
        let fills = dataset
            .states()
            .iter()
            .filter(|s| geo::has_geometry(&s.abbreviation))
            .map(|s| ShapeFill {
                abbreviation: s.abbreviation.clone(),
                fill: match &scale {
                    Some(scale) => scale.color(metric.value(s).unwrap_or(0.0)).to_string(),
                    None => NEUTRAL_FILL.to_string(),
                },
            })
            .collect();
        Self { metric, fills }
    }

    pub fn fill_for(&self, abbreviation: &str) -> Option<&str> {
        self.fills
            .iter()
            .find(|f| f.abbreviation == abbreviation)
            .map(|f| f.fill.as_str())
    }
}

impl LegendView {
    /// Legend for `metric`, or None when the dataset has no values for it.
    pub fn build(dataset: &Dataset, metric: Metric) -> Option<Self> {
        let scale = map_scale(dataset, metric)?;
        let (lo, hi) = extent(metric.values(dataset.states()))?;
        let descriptor = metric.descriptor();
        let stops = (0..LEGEND_STOPS)
            .map(|i| {
                let t = i as f64 / (LEGEND_STOPS - 1) as f64;
                GradientStop {
                    offset: t * 100.0,
                    color: scale.color(lo + t * (hi - lo)).to_string(),
                }
            })
            .collect();
        Some(Self {
            label: descriptor.label,
            low: descriptor.format(lo),
            high: descriptor.format(hi),
            stops,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Palette;
    use crate::testing::sample_dataset;

    #[test]
    fn territories_without_geometry_get_no_shape() {
        let view = ChoroplethView::build(&sample_dataset(), Metric::MedianIncome);
        let abbrs: Vec<_> = view.fills.iter().map(|f| f.abbreviation.as_str()).collect();
        assert_eq!(abbrs, vec!["CA", "MS", "NY", "TX", "VT"]);
        assert!(view.fill_for("PR").is_none());
    }

    #[test]
    fn map_range_ignores_unmapped_states() {
        // Puerto Rico's 24,112 would otherwise be the minimum
        let scale = map_scale(&sample_dataset(), Metric::MedianIncome).unwrap();
        assert!((scale.domain().0 - 54203.0 * 0.6).abs() < 1e-9);
    }

    #[test]
    fn missing_value_is_colored_as_zero() {
        let dataset = sample_dataset();
        let view = ChoroplethView::build(&dataset, Metric::LifeExpectancy);
        let scale = map_scale(&dataset, Metric::LifeExpectancy).unwrap();
        assert_eq!(view.fill_for("VT"), Some(scale.color(0.0).to_string().as_str()));
        assert_eq!(
            view.fill_for("VT"),
            Some(Palette::Blues.interpolate(0.0).to_string().as_str())
        );
    }

    #[test]
    fn lower_is_better_fills_worst_state_red() {
        let view = ChoroplethView::build(&sample_dataset(), Metric::ObesityRate);
        assert_eq!(view.fill_for("MS"), Some("rgb(165, 0, 38)"));
        assert_eq!(view.fill_for("CA"), Some("rgb(0, 104, 55)"));
    }

    #[test]
    fn legend_ranges_over_all_states() {
        let legend = LegendView::build(&sample_dataset(), Metric::MedianIncome).unwrap();
        assert_eq!(legend.label, "Median Household Income");
        assert_eq!(legend.low, "$24,112");
        assert_eq!(legend.high, "$96,334");
        assert_eq!(legend.stops.len(), LEGEND_STOPS);
        assert_eq!(legend.stops[0].offset, 0.0);
        assert_eq!(legend.stops[10].offset, 100.0);
        assert_eq!(legend.stops[10].color, "rgb(8, 48, 107)");
    }

    #[test]
    fn fills_serialize_for_the_map_script() {
        let view = ChoroplethView::build(&sample_dataset(), Metric::Gdp);
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["metric"], "gdp");
        assert_eq!(json["fills"][0]["abbreviation"], "CA");
        assert!(json["fills"][0]["fill"].as_str().unwrap().starts_with("rgb("));
    }
}
