//! The States: fun facts page
//!
//! Every present fun fact, flattened across states, filtered by a region chip
//! and a free-text search. Clicking a card opens that state on the map page.

use dioxus::prelude::*;
use states_data::facts::{FactEntry, FactsView};
use states_data::SelectionState;
use states_ui::components::{ErrorDisplay, LoadingSpinner, Page, PageHeader};
use states_ui::dom;
use states_ui::state::AppState;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("states-facts-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let state = use_context_provider(AppState::new);
    let mut selection = use_signal(SelectionState::default);

    // Load the dataset on mount
    use_effect(move || state.load_dataset());

    let body = state.ready().map(|dataset| {
        let regions = dataset.regions();
        let view = FactsView::build(&dataset, &selection.read());
        let active_region = selection.read().region_filter.clone();
        let query = selection.read().search_query.clone();
        (regions, view, active_region, query)
    });

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            PageHeader {
                current: Page::Facts,
                title: "Fun Facts".to_string(),
                subtitle: "Search the oddities and records of every state.".to_string(),
            }

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            } else if (state.loading)() {
                LoadingSpinner {}
            } else if let Some((regions, view, active_region, query)) = body {
                div {
                    style: "display: flex; flex-wrap: wrap; gap: 8px; align-items: center; margin-bottom: 12px;",
                    input {
                        id: "facts-search",
                        r#type: "search",
                        placeholder: "Search facts, states...",
                        value: "{query}",
                        oninput: move |evt: Event<FormData>| selection.write().search_query = evt.value(),
                    }
                    div {
                        id: "facts-region-filters",
                        style: "display: flex; gap: 6px;",
                        button {
                            class: if active_region.is_none() { "region-chip active" } else { "region-chip" },
                            onclick: move |_| selection.write().region_filter = None,
                            "All Regions"
                        }
                        for region in regions {
                            {
                                let chip_class = if active_region.as_deref() == Some(region.as_str()) {
                                    "region-chip active"
                                } else {
                                    "region-chip"
                                };
                                let chosen = region.clone();
                                rsx! {
                                    button {
                                        key: "{region}",
                                        class: chip_class,
                                        onclick: move |_| selection.write().region_filter = Some(chosen.clone()),
                                        "{region}"
                                    }
                                }
                            }
                        }
                    }
                }
                p {
                    id: "facts-count",
                    style: "font-size: 12px; color: #666;",
                    "{view.count_label}"
                }
                if let Some(message) = view.empty_message {
                    div { class: "facts-empty", "{message}" }
                } else {
                    div {
                        id: "facts-grid",
                        style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(280px, 1fr)); gap: 12px;",
                        for entry in view.entries {
                            FactCardView {
                                key: "{entry.abbreviation}-{entry.index}",
                                entry: entry.clone(),
                            }
                        }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct FactCardViewProps {
    entry: FactEntry,
}

#[component]
fn FactCardView(props: FactCardViewProps) -> Element {
    let entry = props.entry;
    let href = entry.href();
    let key_href = href.clone();
    let host = entry.source_host();

    rsx! {
        div {
            class: "fact-card",
            role: "button",
            tabindex: "0",
            aria_label: "{entry.state}: {entry.text}",
            style: "border: 1px solid #e5e7eb; border-radius: 8px; padding: 12px; cursor: pointer;",
            onclick: move |_| dom::navigate(&href),
            onkeydown: move |evt: Event<KeyboardData>| {
                match evt.key() {
                    Key::Enter => dom::navigate(&key_href),
                    Key::Character(c) if c == " " => dom::navigate(&key_href),
                    _ => {}
                }
            },
            div {
                class: "fact-card-header",
                style: "display: flex; gap: 8px; align-items: center;",
                div { class: "fact-card-abbr", style: "font-weight: 800;", "{entry.abbreviation}" }
                div {
                    div { class: "fact-card-state", "{entry.state}" }
                    div { class: "fact-card-region", style: "font-size: 11px; color: #666;", "{entry.region}" }
                }
                span { class: "fact-card-num", style: "margin-left: auto; font-size: 11px;", "Fact {entry.index}" }
            }
            p { class: "fact-card-text", "{entry.text}" }
            div {
                class: "fact-card-footer",
                style: "display: flex; justify-content: space-between; font-size: 11px;",
                if let (Some(url), Some(host)) = (entry.source.clone(), host) {
                    span {
                        class: "fact-card-source",
                        a {
                            href: "{url}",
                            target: "_blank",
                            rel: "noopener",
                            onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                            "{host}"
                        }
                    }
                } else {
                    span {}
                }
                span { class: "fact-card-cta", "View state →" }
            }
        }
    }
}
