//! The metric registry: label, formatter and polarity for every metric.

use crate::format::{
    format_dollars, format_gdp_billions, format_grouped, format_optional, format_percent,
    format_signed_percent, format_years,
};
use serde::Serialize;
use states_core::{CitationKey, StateRecord};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Whether a larger value is the favorable one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    HigherIsBetter,
    LowerIsBetter,
}

impl Polarity {
    /// `"higher"` or `"lower"`, as in "lower is better".
    pub fn phrase(self) -> &'static str {
        match self {
            Polarity::HigherIsBetter => "higher",
            Polarity::LowerIsBetter => "lower",
        }
    }
}

/// A numeric field of `StateRecord`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Metric {
    Gdp,
    GdpPerCapita,
    #[default]
    MedianIncome,
    Population,
    PopChange,
    UnemploymentRate,
    ObesityRate,
    UninsuredRate,
    LifeExpectancy,
}

/// Static description of a metric.
#[derive(Debug)]
pub struct MetricDescriptor {
    pub metric: Metric,
    /// Dataset field name, also used as the `<select>` value.
    pub key: &'static str,
    pub label: &'static str,
    pub polarity: Polarity,
    pub cite: CitationKey,
    formatter: fn(f64) -> String,
}

impl MetricDescriptor {
    pub fn format(&self, value: f64) -> String {
        (self.formatter)(value)
    }

    /// Format a possibly missing value.
    pub fn format_value(&self, value: Option<f64>) -> String {
        format_optional(value, self.formatter)
    }
}

// Declared in `Metric` variant order.
static REGISTRY: [MetricDescriptor; 9] = [
    MetricDescriptor {
        metric: Metric::Gdp,
        key: "gdp",
        label: "Total GDP",
        polarity: Polarity::HigherIsBetter,
        cite: CitationKey::Gdp,
        formatter: format_gdp_billions,
    },
    MetricDescriptor {
        metric: Metric::GdpPerCapita,
        key: "gdpPerCapita",
        label: "GDP Per Capita",
        polarity: Polarity::HigherIsBetter,
        cite: CitationKey::Gdp,
        formatter: format_dollars,
    },
    MetricDescriptor {
        metric: Metric::MedianIncome,
        key: "medianIncome",
        label: "Median Household Income",
        polarity: Polarity::HigherIsBetter,
        cite: CitationKey::Income,
        formatter: format_dollars,
    },
    MetricDescriptor {
        metric: Metric::Population,
        key: "population",
        label: "Population",
        polarity: Polarity::HigherIsBetter,
        cite: CitationKey::Population,
        formatter: format_grouped,
    },
    MetricDescriptor {
        metric: Metric::PopChange,
        key: "popChange",
        label: "Annual Population Change",
        polarity: Polarity::HigherIsBetter,
        cite: CitationKey::Population,
        formatter: format_signed_percent,
    },
    MetricDescriptor {
        metric: Metric::UnemploymentRate,
        key: "unemploymentRate",
        label: "Unemployment Rate",
        polarity: Polarity::LowerIsBetter,
        cite: CitationKey::Unemployment,
        formatter: format_percent,
    },
    MetricDescriptor {
        metric: Metric::ObesityRate,
        key: "obesityRate",
        label: "Adult Obesity Rate",
        polarity: Polarity::LowerIsBetter,
        cite: CitationKey::Obesity,
        formatter: format_percent,
    },
    MetricDescriptor {
        metric: Metric::UninsuredRate,
        key: "uninsuredRate",
        label: "Uninsured Rate",
        polarity: Polarity::LowerIsBetter,
        cite: CitationKey::Uninsured,
        formatter: format_percent,
    },
    MetricDescriptor {
        metric: Metric::LifeExpectancy,
        key: "lifeExpectancy",
        label: "Life Expectancy",
        polarity: Polarity::HigherIsBetter,
        cite: CitationKey::LifeExpectancy,
        formatter: format_years,
    },
];

/// Returned when a key does not name a metric.
#[derive(Error, Debug, PartialEq)]
#[error("Unknown metric: {0}")]
pub struct UnknownMetric(pub String);

impl Metric {
    pub const ALL: [Metric; 9] = [
        Metric::Gdp,
        Metric::GdpPerCapita,
        Metric::MedianIncome,
        Metric::Population,
        Metric::PopChange,
        Metric::UnemploymentRate,
        Metric::ObesityRate,
        Metric::UninsuredRate,
        Metric::LifeExpectancy,
    ];

    /// Metrics offered in the map and rankings selectors, in menu order.
    pub const SELECTABLE: [Metric; 8] = [
        Metric::Gdp,
        Metric::GdpPerCapita,
        Metric::MedianIncome,
        Metric::Population,
        Metric::UnemploymentRate,
        Metric::ObesityRate,
        Metric::UninsuredRate,
        Metric::LifeExpectancy,
    ];

    pub fn descriptor(self) -> &'static MetricDescriptor {
        &REGISTRY[self as usize]
    }

    pub fn key(self) -> &'static str {
        self.descriptor().key
    }

    pub fn label(self) -> &'static str {
        self.descriptor().label
    }

    pub fn polarity(self) -> Polarity {
        self.descriptor().polarity
    }

    /// Read this metric from a record.
    pub fn value(self, record: &StateRecord) -> Option<f64> {
        match self {
            Metric::Gdp => record.gdp,
            Metric::GdpPerCapita => record.gdp_per_capita,
            Metric::MedianIncome => record.median_income,
            Metric::Population => record.population,
            Metric::PopChange => record.pop_change,
            Metric::UnemploymentRate => record.unemployment_rate,
            Metric::ObesityRate => record.obesity_rate,
            Metric::UninsuredRate => record.uninsured_rate,
            Metric::LifeExpectancy => record.life_expectancy,
        }
    }

    /// Non-null values of this metric across `records`, in record order.
    pub fn values<'a>(self, records: impl IntoIterator<Item = &'a StateRecord>) -> Vec<f64> {
        records
            .into_iter()
            .filter_map(|r| self.value(r))
            .filter(|v| !v.is_nan())
            .collect()
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Metric {
    type Err = UnknownMetric;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Metric::ALL
            .iter()
            .copied()
            .find(|m| m.key() == s)
            .ok_or_else(|| UnknownMetric(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sample_dataset;

    #[test]
    fn registry_is_in_variant_order() {
        for metric in Metric::ALL {
            assert_eq!(metric.descriptor().metric, metric);
        }
    }

    #[test]
    fn keys_round_trip_through_from_str() {
        for metric in Metric::ALL {
            assert_eq!(metric.key().parse::<Metric>(), Ok(metric));
            assert_eq!(metric.to_string(), metric.key());
        }
        assert_eq!(
            "gdp_per_capita".parse::<Metric>(),
            Err(UnknownMetric("gdp_per_capita".to_string()))
        );
    }

    #[test]
    fn serde_name_matches_dataset_key() {
        for metric in Metric::ALL {
            let json = serde_json::to_string(&metric).unwrap();
            assert_eq!(json, format!("\"{}\"", metric.key()));
        }
    }

    #[test]
    fn rate_metrics_are_lower_is_better() {
        let lower: Vec<_> = Metric::ALL
            .into_iter()
            .filter(|m| m.polarity() == Polarity::LowerIsBetter)
            .collect();
        assert_eq!(
            lower,
            vec![
                Metric::UnemploymentRate,
                Metric::ObesityRate,
                Metric::UninsuredRate
            ]
        );
        assert_eq!(Polarity::LowerIsBetter.phrase(), "lower");
    }

    #[test]
    fn selectable_excludes_population_change() {
        assert!(!Metric::SELECTABLE.contains(&Metric::PopChange));
        assert_eq!(Metric::SELECTABLE.len(), 8);
    }

    #[test]
    fn formats_follow_units() {
        assert_eq!(Metric::Gdp.descriptor().format(2709.4), "$2.71T");
        assert_eq!(Metric::MedianIncome.descriptor().format(76292.0), "$76,292");
        assert_eq!(Metric::Population.descriptor().format(648493.0), "648,493");
        assert_eq!(Metric::ObesityRate.descriptor().format(40.1), "40.1%");
        assert_eq!(Metric::LifeExpectancy.descriptor().format(71.9), "71.9 yrs");
        assert_eq!(Metric::LifeExpectancy.descriptor().format_value(None), "—");
    }

    #[test]
    fn values_skip_nulls() {
        let dataset = sample_dataset();
        let values = Metric::LifeExpectancy.values(dataset.states());
        // Puerto Rico and Vermont have no life expectancy
        assert_eq!(values, vec![79.0, 71.9, 78.2, 76.5]);
    }
}
