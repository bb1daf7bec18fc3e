//! Two-state comparison with slot dropdowns.

use dioxus::prelude::*;
use states_core::Dataset;
use states_data::compare::{CompareBar, CompareView};
use states_data::{SelectionState, Slot};
use states_ui::components::Cite;
use std::rc::Rc;

#[derive(Props, Clone, PartialEq)]
pub struct ComparePaneProps {
    pub dataset: Rc<Dataset>,
    pub selection: Signal<SelectionState>,
}

#[component]
pub fn ComparePane(props: ComparePaneProps) -> Element {
    let mut selection = props.selection;
    let dataset = props.dataset.clone();
    let mut shown = use_signal(|| None::<CompareView>);

    // An unknown pair keeps whatever was shown before
    let effect_dataset = dataset.clone();
    use_effect(move || {
        let (a, b) = {
            let s = selection.read();
            (s.compare_a.clone(), s.compare_b.clone())
        };
        if let Some(built) = CompareView::build(&effect_dataset, &a, &b) {
            shown.set(Some(built));
        }
    });

    let states: Vec<(String, String)> = dataset
        .states()
        .iter()
        .map(|s| (s.abbreviation.clone(), s.name.clone()))
        .collect();

    let instruction = selection.read().instruction();
    let current_a = selection.read().compare_a.clone();
    let current_b = selection.read().compare_b.clone();

    let slot_select = move |slot: Slot, current: String, dataset: Rc<Dataset>| {
        let states = states.clone();
        rsx! {
            label {
                style: "font-weight: bold; font-size: 13px;",
                "{slot.label()}: "
                select {
                    onchange: move |evt: Event<FormData>| {
                        selection.write().set_slot(&dataset, slot, &evt.value());
                    },
                    for (abbr, name) in states {
                        option {
                            key: "{abbr}",
                            value: "{abbr}",
                            selected: abbr == current,
                            "{name}"
                        }
                    }
                }
            }
        }
    };

    rsx! {
        section {
            class: "compare-pane",
            p {
                id: "compare-instruction",
                style: "margin: 0 0 8px 0; font-size: 12px; color: #666;",
                "{instruction}"
            }
            div {
                style: "display: flex; gap: 12px; margin-bottom: 12px;",
                {slot_select(Slot::A, current_a, dataset.clone())}
                {slot_select(Slot::B, current_b, dataset.clone())}
            }
            if let Some(view) = shown() {
                div {
                    class: "compare-hero",
                    style: "display: flex; gap: 12px; align-items: center; margin-bottom: 12px;",
                    for (side, hero) in [("side-a", &view.a), ("side-b", &view.b)] {
                        div {
                            key: "{side}",
                            class: "compare-state-card {side}",
                            style: "flex: 1;",
                            div { class: "compare-abbr", style: "font-size: 24px; font-weight: 800;", "{hero.abbreviation}" }
                            div { class: "compare-name", "{hero.name}" }
                            div { class: "compare-region", style: "font-size: 12px; color: #666;", "{hero.region} · {hero.population}" }
                        }
                    }
                }
                div {
                    class: "compare-charts",
                    for group in view.groups.iter() {
                        div {
                            key: "{group.title}",
                            class: "compare-chart-card",
                            style: "margin-bottom: 16px;",
                            div { class: "compare-chart-title", style: "font-weight: 700; margin-bottom: 8px;", "{group.title}" }
                            for row in group.rows.iter() {
                                div {
                                    key: "{row.metric}",
                                    class: "compare-bar-group",
                                    style: "margin-bottom: 10px;",
                                    div {
                                        style: "font-size: 12px; font-weight: 600; margin-bottom: 4px;",
                                        "{row.label}"
                                        Cite { source: row.cite }
                                    }
                                    CompareBarRow { bar: row.a.clone(), fill_class: "fill-a", color: "#3b82f6" }
                                    CompareBarRow { bar: row.b.clone(), fill_class: "fill-b", color: "#f59e0b" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct CompareBarRowProps {
    bar: CompareBar,
    fill_class: &'static str,
    color: &'static str,
}

#[component]
fn CompareBarRow(props: CompareBarRowProps) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 4px;",
            div {
                style: "font-size: 11px; display: flex; justify-content: space-between;",
                span { style: "color: {props.color}; font-weight: 700;", "{props.bar.abbreviation}" }
                span { style: "font-weight: 600;", "{props.bar.formatted}" }
            }
            div {
                class: "compare-bar-track",
                style: "height: 8px; background: #eef2f7; border-radius: 4px;",
                div {
                    class: "compare-bar-fill {props.fill_class}",
                    style: "height: 100%; width: {props.bar.percent}%; background: {props.color}; border-radius: 4px;",
                }
            }
        }
    }
}
