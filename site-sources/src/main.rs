//! The States: sources page
//!
//! Lists the fixed citation sources first, then any extra sources from the
//! dataset whose URL is not already cited, grouped by category.

use dioxus::prelude::*;
use states_core::SourceRegistry;
use states_ui::components::{LoadingSpinner, Page, PageHeader};
use states_ui::state::AppState;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("states-sources-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let state = use_context_provider(AppState::new);

    // Load the dataset on mount
    use_effect(move || state.load_dataset());

    let groups = state
        .ready()
        .map(|dataset| SourceRegistry::merge(dataset.raw_sources()).grouped());

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            PageHeader {
                current: Page::Sources,
                title: "Sources".to_string(),
                subtitle: "Where every number on this site comes from.".to_string(),
            }

            if (state.error_msg)().is_some() {
                p {
                    style: "color: #888; text-align: center; padding: 40px 0;",
                    "Could not load sources. Make sure the server is running."
                }
            } else if (state.loading)() {
                LoadingSpinner {}
            } else if let Some(groups) = groups {
                div {
                    id: "sources-list",
                    for group in groups {
                        div {
                            key: "{group.category}",
                            class: "sources-group",
                            style: "margin-bottom: 20px;",
                            div {
                                class: "sources-group-label",
                                style: "font-weight: 700; text-transform: uppercase; font-size: 12px; color: #666;",
                                "{group.category}"
                            }
                            for source in group.records {
                                div {
                                    key: "{source.id}",
                                    class: "source-item",
                                    style: "display: flex; gap: 12px; padding: 6px 0;",
                                    div { class: "source-num", style: "font-weight: 800; width: 24px;", "{source.id}" }
                                    div {
                                        class: "source-info",
                                        div { class: "source-name", "{source.label}" }
                                        div {
                                            class: "source-url",
                                            style: "font-size: 12px;",
                                            a { href: "{source.url}", target: "_blank", rel: "noopener", "{source.url}" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
