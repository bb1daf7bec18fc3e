//! Slide-in detail panel for one state.

use super::citation::Cite;
use dioxus::prelude::*;
use states_data::panel::{PanelTab, StatCard, StatePanel};

#[derive(Props, Clone, PartialEq)]
pub struct StatePanelViewProps {
    pub panel: StatePanel,
    pub tab: PanelTab,
    pub on_tab: EventHandler<PanelTab>,
    /// Close button and overlay click
    pub on_close: EventHandler<()>,
}

#[component]
pub fn StatePanelView(props: StatePanelViewProps) -> Element {
    let panel = &props.panel;
    let on_tab = props.on_tab;
    let on_close = props.on_close;

    rsx! {
        div {
            class: "panel-overlay visible",
            style: "position: fixed; inset: 0; background: rgba(15,23,42,.35); z-index: 30;",
            onclick: move |_| on_close.call(()),
        }
        aside {
            class: "state-panel open",
            style: "position: fixed; top: 0; right: 0; bottom: 0; width: min(440px, 100vw); overflow-y: auto; background: #fff; z-index: 40; padding: 16px 20px; box-shadow: -4px 0 16px rgba(0,0,0,.15);",
            button {
                class: "panel-close",
                style: "float: right; border: none; background: none; font-size: 20px; cursor: pointer;",
                onclick: move |_| on_close.call(()),
                "×"
            }
            div {
                class: "panel-state-header",
                style: "display: flex; gap: 12px; align-items: center; margin-bottom: 12px;",
                div {
                    class: "panel-state-abbr",
                    style: "font-size: 28px; font-weight: 800; color: #1e3a8a;",
                    "{panel.abbreviation}"
                }
                div {
                    div { style: "font-size: 20px; font-weight: 700;", "{panel.name}" }
                    div {
                        style: "color: #666; font-size: 13px;",
                        "{panel.capital} · {panel.region}"
                    }
                }
            }
            div {
                class: "panel-tabs",
                role: "tablist",
                style: "display: flex; gap: 4px; margin-bottom: 12px; border-bottom: 1px solid #e5e7eb;",
                for tab in PanelTab::ALL {
                    button {
                        key: "{tab.id()}",
                        role: "tab",
                        class: if tab == props.tab { "panel-tab active" } else { "panel-tab" },
                        onclick: move |_| on_tab.call(tab),
                        "{tab.label()}"
                    }
                }
            }
            div {
                id: "tab-{props.tab.id()}",
                class: "panel-tab-content active",
                {match props.tab {
                    PanelTab::Overview | PanelTab::Economy => rsx! {
                        StatGrid { cards: panel.cards(props.tab).to_vec() }
                    },
                    PanelTab::Health => rsx! {
                        StatGrid { cards: panel.health.clone() }
                        div { class: "panel-section-label", "U.S. Context" }
                        StatGrid { cards: panel.health_context.clone() }
                    },
                    PanelTab::Industries => rsx! {
                        div {
                            class: "panel-section-label",
                            "Top Industries"
                            Cite { source: states_core::CitationKey::Industry }
                        }
                        div {
                            class: "industry-tags",
                            for industry in panel.industries.iter() {
                                span { key: "{industry}", class: "industry-tag", "{industry}" }
                            }
                        }
                        div {
                            class: "panel-section-label",
                            "Major Employers"
                            Cite { source: states_core::CitationKey::Industry }
                        }
                        div {
                            class: "employers-list",
                            for employer in panel.employers.iter() {
                                span { key: "{employer}", class: "employer-tag", "{employer}" }
                            }
                        }
                    },
                    PanelTab::Facts => rsx! {
                        div {
                            class: "fun-fact-list",
                            for fact in panel.facts.iter() {
                                div {
                                    key: "{fact.number}",
                                    class: "fun-fact-item",
                                    div { class: "fun-fact-text", "{fact.text}" }
                                    if let Some(source) = &fact.source {
                                        div {
                                            class: "fun-fact-source",
                                            "Source: "
                                            a { href: "{source}", target: "_blank", rel: "noopener", "{source}" }
                                        }
                                    }
                                }
                            }
                        }
                    },
                }}
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct StatGridProps {
    cards: Vec<StatCard>,
}

#[component]
fn StatGrid(props: StatGridProps) -> Element {
    rsx! {
        div {
            class: "stat-grid",
            style: "display: grid; grid-template-columns: 1fr 1fr; gap: 8px; margin-bottom: 12px;",
            for (i, card) in props.cards.iter().enumerate() {
                div {
                    key: "{i}",
                    class: if card.full { "stat-card full" } else { "stat-card" },
                    style: if card.full { "grid-column: 1 / -1;" } else { "" },
                    div {
                        class: "stat-label",
                        style: "font-size: 11px; color: #666;",
                        "{card.label}"
                        if let Some(source) = card.cite {
                            Cite { source: source }
                        }
                    }
                    div {
                        class: if card.large { "stat-value large" } else { "stat-value" },
                        "{card.value}"
                    }
                    if let Some(note) = &card.note {
                        div { class: "stat-source", style: "font-size: 11px; color: #888;", "{note}" }
                    }
                }
            }
        }
    }
}
