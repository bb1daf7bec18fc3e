//! Map configuration passed to the D3 script as JSON.

use serde::Serialize;
use states_core::geo;
use std::collections::BTreeMap;

/// Dataset file served next to every page.
pub const DATASET_URL: &str = "states_data.json";

/// us-atlas state boundaries (TopoJSON).
pub const GEOMETRY_URL: &str = "https://cdn.jsdelivr.net/npm/us-atlas@3/states-10m.json";

/// DOM id of the map container.
pub const MAP_CONTAINER_ID: &str = "us-map";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapConfig {
    pub container_id: &'static str,
    pub geometry_url: &'static str,
    pub width: u32,
    pub height: u32,
    pub projection_scale: f64,
    /// Recolor transition in milliseconds.
    pub transition_ms: u32,
    /// Two-digit geometry id to state abbreviation.
    pub codes: BTreeMap<&'static str, &'static str>,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            container_id: MAP_CONTAINER_ID,
            geometry_url: GEOMETRY_URL,
            width: 960,
            height: 600,
            projection_scale: 1300.0,
            transition_ms: 500,
            codes: geo::code_table(),
        }
    }
}

impl MapConfig {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}
