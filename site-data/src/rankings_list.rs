//! Ranked bar list with metric and direction controls.

use dioxus::prelude::*;
use states_core::Dataset;
use states_data::rankings::RankingsView;
use states_data::{SelectionState, Slot, SortDirection};
use states_ui::components::MetricSelector;
use std::rc::Rc;

#[derive(Props, Clone, PartialEq)]
pub struct RankingsListProps {
    pub dataset: Rc<Dataset>,
    pub selection: Signal<SelectionState>,
}

#[component]
pub fn RankingsList(props: RankingsListProps) -> Element {
    let mut selection = props.selection;
    let dataset = props.dataset.clone();
    let view = RankingsView::build(&dataset, &selection.read());
    let current = selection.read().metric;
    let descending = view.direction == SortDirection::Descending;

    rsx! {
        section {
            class: "rankings-pane",
            div {
                style: "display: flex; gap: 12px; align-items: center; margin-bottom: 8px;",
                MetricSelector {
                    value: current,
                    label: "Rank by: ".to_string(),
                    on_change: move |m| selection.write().metric = m,
                }
                button {
                    class: if descending { "sort-btn active" } else { "sort-btn" },
                    onclick: move |_| selection.write().sort = SortDirection::Descending,
                    "Highest first"
                }
                button {
                    class: if descending { "sort-btn" } else { "sort-btn active" },
                    onclick: move |_| selection.write().sort = SortDirection::Ascending,
                    "Lowest first"
                }
            }
            div {
                class: "rankings-table",
                for row in view.rows {
                    {
                        let abbreviation = row.abbreviation.clone();
                        let dataset = dataset.clone();
                        let row_class = match row.slot {
                            Some(Slot::A) => "ranking-row selected-a",
                            Some(Slot::B) => "ranking-row selected-b",
                            None => "ranking-row",
                        };
                        rsx! {
                            div {
                                key: "{row.abbreviation}",
                                class: row_class,
                                style: "display: flex; gap: 8px; align-items: center; padding: 3px 0; cursor: pointer; font-size: 13px;",
                                onclick: move |_| {
                                    selection.write().assign_next_slot(&dataset, &abbreviation);
                                },
                                span { class: "rank-num", style: "width: 24px; text-align: right; color: #888;", "{row.rank}" }
                                span { class: "rank-abbr", style: "width: 28px; font-weight: 700;", "{row.abbreviation}" }
                                span { class: "rank-name", style: "width: 130px;", "{row.name}" }
                                div {
                                    class: "rank-bar-track",
                                    style: "flex: 1; height: 8px; background: #eef2f7; border-radius: 4px;",
                                    div {
                                        class: "rank-bar-fill",
                                        style: "height: 100%; width: {row.bar_percent}%; background: #3b82f6; border-radius: 4px;",
                                    }
                                }
                                span { class: "rank-value", style: "width: 90px; text-align: right;", "{row.formatted}" }
                                if let Some(slot) = row.slot {
                                    span { class: "rank-badge", "{slot.letter()}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
