//! The States: map page
//!
//! Colors every state by the selected metric, shows a hover card while the
//! pointer is over a state and opens the tabbed detail panel on click.
//!
//! Data flow:
//! 1. On mount, `states_data.json` is fetched and parsed into a `Dataset`.
//! 2. An `Explorer` is created over the dataset; map events raised in JS are
//!    pushed through an unbounded channel and applied to it by a task.
//! 3. Effects keyed on the selected metric and the open panel drive the D3
//!    map: first render, recolor transitions and the active highlight.
//! 4. A `?state=XX` deep link opens that state's panel once the map has had
//!    time to draw.

use dioxus::prelude::*;
use futures::channel::mpsc;
use futures::StreamExt;
use rand::rngs::StdRng;
use rand::SeedableRng;
use states_data::deep_link::DEEP_LINK_DELAY_MS;
use states_data::explorer::{Explorer, MapEvents};
use states_ui::components::{
    CoverScreen, ErrorDisplay, HoverCardView, LoadingSpinner, MapLegend, MetricSelector, Page,
    PageHeader, StatePanelView,
};
use states_ui::config::{MapConfig, MAP_CONTAINER_ID};
use states_ui::events::{self, MapEvent};
use states_ui::state::AppState;
use states_ui::{dom, js_bridge};

type MapExplorer = Explorer<StdRng>;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("states-explore-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let state = use_context_provider(AppState::new);
    let mut explorer = use_signal(|| None::<MapExplorer>);
    let mut map_drawn = use_signal(|| false);

    // Load the dataset on mount
    use_effect(move || state.load_dataset());

    // JS map callbacks and the Escape key feed one channel, drained here
    use_hook(move || {
        let (tx, mut rx) = mpsc::unbounded::<MapEvent>();
        events::register_map_callbacks(tx.clone());
        events::listen_for_escape(tx);
        spawn(async move {
            while let Some(event) = rx.next().await {
                if let Some(ex) = explorer.write().as_mut() {
                    event.dispatch(ex);
                }
            }
        });
    });

    // Build the explorer once the dataset is in, and honor a deep link
    use_effect(move || {
        let Some(dataset) = state.ready() else {
            return;
        };
        let ex = Explorer::new(dataset, StdRng::seed_from_u64(dom::random_seed()));
        let deep_link = ex.deep_link_target(&dom::location_search());
        explorer.set(Some(ex));
        js_bridge::init_map();

        if let Some(target) = deep_link {
            log::info!("[States] deep link to {}", target);
            spawn(async move {
                dom::sleep_ms(DEEP_LINK_DELAY_MS).await;
                if let Some(ex) = explorer.write().as_mut() {
                    ex.open_state(&target);
                }
            });
        }
    });

    let metric = use_memo(move || explorer.read().as_ref().map(|ex| ex.metric()));
    let active = use_memo(move || {
        explorer
            .read()
            .as_ref()
            .and_then(|ex| ex.panel().abbreviation().map(String::from))
    });
    let hover = use_memo(move || explorer.read().as_ref().and_then(|ex| ex.hover().cloned()));
    let panel = use_memo(move || {
        explorer
            .read()
            .as_ref()
            .and_then(|ex| ex.active_panel().map(|p| (p, ex.panel().tab())))
    });
    let legend = use_memo(move || {
        metric()?;
        explorer.peek().as_ref().and_then(|ex| ex.legend())
    });

    // Draw on the first metric, recolor on every change after that
    use_effect(move || {
        if metric().is_none() {
            return;
        }
        let guard = explorer.peek();
        let Some(ex) = guard.as_ref() else {
            return;
        };
        let config = MapConfig::default();
        let view = ex.choropleth();
        if *map_drawn.peek() {
            js_bridge::recolor_choropleth(&view, config.transition_ms);
        } else {
            js_bridge::render_choropleth(&config, &view);
            map_drawn.set(true);
        }
    });

    // Active outline and scroll lock follow the open panel
    use_effect(move || {
        let active = active();
        js_bridge::highlight_state(active.as_deref());
        dom::set_body_scroll_locked(active.is_some());
    });

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            CoverScreen {}

            PageHeader {
                current: Page::Explore,
                title: "The States".to_string(),
                subtitle: "Hover a state for a summary, click for details.".to_string(),
            }

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            } else if (state.loading)() {
                LoadingSpinner {}
            } else {
                div {
                    style: "margin: 8px 0;",
                    MetricSelector {
                        value: metric().unwrap_or_default(),
                        on_change: move |m| {
                            if let Some(ex) = explorer.write().as_mut() {
                                ex.set_metric(m);
                            }
                        },
                    }
                }

                div {
                    id: MAP_CONTAINER_ID,
                    class: "map-container",
                    style: "width: 100%; max-width: 960px; min-height: 400px;",
                }

                if let Some(legend) = legend() {
                    MapLegend { legend: legend }
                }

                if let Some(hover) = hover() {
                    HoverCardView { hover: hover }
                }

                if let Some((panel, tab)) = panel() {
                    StatePanelView {
                        panel: panel,
                        tab: tab,
                        on_tab: move |t| {
                            if let Some(ex) = explorer.write().as_mut() {
                                ex.on_tab_change(t);
                            }
                        },
                        on_close: move |_| {
                            if let Some(ex) = explorer.write().as_mut() {
                                ex.on_dismiss();
                            }
                        },
                    }
                }
            }
        }
    }
}
