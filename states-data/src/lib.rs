//! Data processing for the States site.
//!
//! Every builder here is a pure function of the dataset and the page's
//! `SelectionState`, so the views can be tested without a browser:
//! - `metric` / `format`: the metric registry and value formatting
//! - `color`: sequential and diverging color scales
//! - `choropleth` / `hover`: map fills, legend and the hover card
//! - `panel`: the tabbed state detail panel
//! - `rankings` / `compare`: the data page
//! - `facts`: the flattened fun-facts list
//! - `selection` / `explorer`: page state and map interaction
//! - `deep_link`: the `?state=` hand-off between pages

pub mod choropleth;
pub mod color;
pub mod compare;
pub mod deep_link;
pub mod explorer;
pub mod facts;
pub mod format;
pub mod hover;
pub mod metric;
pub mod panel;
pub mod rankings;
pub mod selection;

pub use metric::{Metric, MetricDescriptor, Polarity};
pub use selection::{SelectionState, Slot, SortDirection};
