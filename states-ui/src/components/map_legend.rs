//! Gradient legend under the map.

use dioxus::prelude::*;
use states_data::choropleth::LegendView;

#[derive(Props, Clone, PartialEq)]
pub struct MapLegendProps {
    pub legend: LegendView,
}

#[component]
pub fn MapLegend(props: MapLegendProps) -> Element {
    let stops = props
        .legend
        .stops
        .iter()
        .map(|s| format!("{} {:.0}%", s.color, s.offset))
        .collect::<Vec<_>>()
        .join(", ");
    let bar_style = format!(
        "height: 10px; border-radius: 2px; background: linear-gradient(to right, {});",
        stops
    );

    rsx! {
        div {
            class: "map-legend",
            style: "max-width: 320px; margin: 8px 0; font-size: 12px;",
            div {
                style: "font-weight: 600; margin-bottom: 4px;",
                "{props.legend.label}"
            }
            div { style: "{bar_style}" }
            div {
                style: "display: flex; justify-content: space-between; color: #666; margin-top: 2px;",
                span { "{props.legend.low}" }
                span { "{props.legend.high}" }
            }
        }
    }
}
