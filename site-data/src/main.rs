//! The States: data page (rankings + compare)
//!
//! The left pane ranks every state by the selected metric as a bar list. The
//! right pane compares two states side by side. Clicking a ranking row fills
//! compare slot A, then B, then A again; the dropdowns set a slot directly.
//!
//! Data flow:
//! 1. On mount, `states_data.json` is fetched and parsed into a `Dataset`.
//! 2. The page keeps its own `SelectionState`; rankings and compare views
//!    are rebuilt from `(dataset, selection)` whenever either changes.

mod compare_pane;
mod rankings_list;

use compare_pane::ComparePane;
use dioxus::prelude::*;
use rankings_list::RankingsList;
use states_data::SelectionState;
use states_ui::components::{ErrorDisplay, LoadingSpinner, Page, PageHeader};
use states_ui::state::AppState;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("states-data-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let state = use_context_provider(AppState::new);
    let selection = use_signal(SelectionState::default);

    // Load the dataset on mount
    use_effect(move || state.load_dataset());

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            PageHeader {
                current: Page::Data,
                title: "Rankings & Compare".to_string(),
                subtitle: "Rank all states by one metric, or put two side by side.".to_string(),
            }

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            } else if (state.loading)() {
                LoadingSpinner {}
            } else if let Some(dataset) = state.ready() {
                div {
                    class: "data-layout",
                    style: "display: grid; grid-template-columns: minmax(0, 3fr) minmax(0, 2fr); gap: 24px; align-items: start;",
                    RankingsList { dataset: dataset.clone(), selection: selection }
                    ComparePane { dataset: dataset, selection: selection }
                }
            }
        }
    }
}
