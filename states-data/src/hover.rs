//! The floating info card shown while the pointer is over a state.

use crate::format::{format_optional, format_population};
use crate::metric::Metric;
use rand::seq::SliceRandom;
use rand::Rng;
use states_core::StateRecord;

/// Assumed card size when positioning.
pub const CARD_WIDTH: f64 = 260.0;
pub const CARD_HEIGHT: f64 = 200.0;

const OFFSET_X: f64 = 18.0;
const OFFSET_Y: f64 = 10.0;
const EDGE_MARGIN: f64 = 12.0;

/// Facts longer than this are cut to fit the card.
pub const FACT_PREVIEW_LIMIT: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// Top-left corner of the card for a pointer position.
///
/// The card sits right of the pointer, flips to the left when it would
/// overflow the right edge, and is pulled up to stay above the bottom edge.
pub fn position_card(pointer: Point, viewport: Viewport) -> Point {
    let mut x = pointer.x + OFFSET_X;
    let mut y = pointer.y - OFFSET_Y;
    if x + CARD_WIDTH > viewport.width - EDGE_MARGIN {
        x = pointer.x - CARD_WIDTH - OFFSET_X;
    }
    if y + CARD_HEIGHT > viewport.height - EDGE_MARGIN {
        y = viewport.height - CARD_HEIGHT - EDGE_MARGIN;
    }
    Point { x, y }
}

/// Cut a fact to the preview limit, ending in an ellipsis.
pub fn truncate_fact(text: &str) -> String {
    if text.chars().count() > FACT_PREVIEW_LIMIT {
        let head: String = text.chars().take(FACT_PREVIEW_LIMIT - 3).collect();
        format!("{}…", head)
    } else {
        text.to_string()
    }
}

/// Contents of the hover card.
#[derive(Debug, Clone, PartialEq)]
pub struct HoverCard {
    pub abbreviation: String,
    pub name: String,
    pub region: String,
    pub capital: String,
    pub population: String,
    pub gdp: String,
    pub median_income: String,
    pub life_expectancy: String,
    /// One of the state's facts picked at random, already truncated.
    pub fact: Option<String>,
}

impl HoverCard {
    pub fn build<R: Rng + ?Sized>(record: &StateRecord, rng: &mut R) -> Self {
        let facts: Vec<&str> = record.facts().map(|(_, f)| f.text.as_str()).collect();
        let fact = facts.choose(rng).map(|text| truncate_fact(text));
        let metric_text = |metric: Metric| metric.descriptor().format_value(metric.value(record));

        Self {
            abbreviation: record.abbreviation.clone(),
            name: record.name.clone(),
            region: record.region.clone(),
            capital: record.capital.clone(),
            population: format_optional(record.population, format_population),
            gdp: metric_text(Metric::Gdp),
            median_income: metric_text(Metric::MedianIncome),
            life_expectancy: metric_text(Metric::LifeExpectancy),
            fact,
        }
    }
}
