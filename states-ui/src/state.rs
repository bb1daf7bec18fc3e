//! Application state managed via Dioxus context.
//!
//! `AppState` bundles the signals every page shares into a single struct
//! provided via `use_context_provider`. Child components retrieve it with
//! `use_context::<AppState>()`. Page-specific selection lives in each page.

use crate::config::DATASET_URL;
use crate::fetch;
use dioxus::prelude::*;
use states_core::Dataset;
use std::rc::Rc;

/// Shared application state for all States pages.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Loaded dataset (None until the fetch completes)
    pub dataset: Signal<Option<Rc<Dataset>>>,
    /// Whether the page is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            dataset: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
        }
    }

    /// Fetch and parse the dataset, then publish it or the error.
    ///
    /// Call from a mount effect. On failure no dataset is set, so views
    /// that depend on it never render.
    pub fn load_dataset(mut self) {
        spawn(async move {
            match fetch::load_dataset(DATASET_URL).await {
                Ok(dataset) => {
                    self.dataset.set(Some(Rc::new(dataset)));
                }
                Err(e) => {
                    log::error!("[States] failed to load dataset: {}", e);
                    self.error_msg
                        .set(Some(format!("Failed to load state data: {}", e)));
                }
            }
            self.loading.set(false);
        });
    }

    /// The dataset, once loaded without error.
    pub fn ready(&self) -> Option<Rc<Dataset>> {
        if (self.error_msg)().is_some() {
            return None;
        }
        (self.dataset)()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
