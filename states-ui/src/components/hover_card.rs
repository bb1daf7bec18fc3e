//! Floating info card that follows the pointer over the map.

use dioxus::prelude::*;
use states_data::explorer::HoverState;

#[derive(Props, Clone, PartialEq)]
pub struct HoverCardViewProps {
    pub hover: HoverState,
}

#[component]
pub fn HoverCardView(props: HoverCardViewProps) -> Element {
    let card = &props.hover.card;
    let style = format!(
        "position: fixed; left: {}px; top: {}px; width: 260px; pointer-events: none; background: #fff; border: 1px solid #ddd; border-radius: 6px; padding: 10px 12px; box-shadow: 0 4px 12px rgba(0,0,0,.15); font-size: 12px; z-index: 20;",
        props.hover.position.x, props.hover.position.y
    );

    rsx! {
        div {
            class: "hover-card",
            style: "{style}",
            div {
                style: "display: flex; align-items: baseline; gap: 8px; margin-bottom: 6px;",
                strong { style: "font-size: 15px;", "{card.name}" }
                span { style: "color: #888;", "{card.abbreviation} · {card.region}" }
            }
            table {
                style: "width: 100%; border-collapse: collapse;",
                tbody {
                    tr { td { "Capital" } td { "{card.capital}" } }
                    tr { td { "Population" } td { "{card.population}" } }
                    tr { td { "GDP" } td { "{card.gdp}" } }
                    tr { td { "Median income" } td { "{card.median_income}" } }
                    tr { td { "Life expectancy" } td { "{card.life_expectancy}" } }
                }
            }
            if let Some(fact) = &card.fact {
                p {
                    class: "hover-fact",
                    style: "margin: 8px 0 0 0; color: #444; font-style: italic;",
                    "{fact}"
                }
            }
            div {
                style: "margin-top: 6px; color: #999; font-size: 11px;",
                "Click for details"
            }
        }
    }
}
