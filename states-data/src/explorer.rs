//! Map page controller.
//!
//! The map script reports pointer activity through [`MapEvents`]; the
//! `Explorer` turns those events into hover card, panel and selection
//! state that the page renders.

use crate::choropleth::{ChoroplethView, LegendView};
use crate::deep_link::state_param;
use crate::hover::{position_card, HoverCard, Point, Viewport};
use crate::metric::Metric;
use crate::panel::{PanelState, PanelTab, StatePanel};
use crate::selection::SelectionState;
use rand::Rng;
use states_core::Dataset;
use std::rc::Rc;

/// Interaction events raised by the rendered map and the panel chrome.
pub trait MapEvents {
    fn on_hover_enter(&mut self, abbreviation: &str, pointer: Point, viewport: Viewport);
    fn on_hover_move(&mut self, pointer: Point, viewport: Viewport);
    fn on_hover_leave(&mut self);
    /// A state shape was clicked.
    fn on_select(&mut self, abbreviation: &str);
    fn on_tab_change(&mut self, tab: PanelTab);
    /// Escape key, close button or overlay click.
    fn on_dismiss(&mut self);
}

#[derive(Debug, Clone, PartialEq)]
pub struct HoverState {
    pub card: HoverCard,
    /// Top-left corner of the card.
    pub position: Point,
}

pub struct Explorer<R> {
    dataset: Rc<Dataset>,
    rng: R,
    selection: SelectionState,
    panel: PanelState,
    hover: Option<HoverState>,
}

impl<R: Rng> Explorer<R> {
    pub fn new(dataset: Rc<Dataset>, rng: R) -> Self {
        Self {
            dataset,
            rng,
            selection: SelectionState::default(),
            panel: PanelState::default(),
            hover: None,
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn panel(&self) -> &PanelState {
        &self.panel
    }

    pub fn hover(&self) -> Option<&HoverState> {
        self.hover.as_ref()
    }

    pub fn metric(&self) -> Metric {
        self.selection.metric
    }

    pub fn set_metric(&mut self, metric: Metric) {
        self.selection.metric = metric;
    }

    /// Open the panel for a known state. Unknown abbreviations are ignored.
    pub fn open_state(&mut self, abbreviation: &str) -> bool {
        if self.dataset.lookup(abbreviation).is_none() {
            log::warn!("[States] explorer: no record for {}", abbreviation);
            return false;
        }
        self.panel.open(abbreviation);
        self.selection.active_state = Some(abbreviation.to_string());
        true
    }

    pub fn close_panel(&mut self) -> bool {
        self.selection.active_state = None;
        self.panel.close()
    }

    /// The state named by a `?state=` search string, if it is in the dataset.
    pub fn deep_link_target(&self, search: &str) -> Option<String> {
        state_param(search).filter(|abbr| self.dataset.lookup(abbr).is_some())
    }

    /// Contents of the open panel.
    pub fn active_panel(&self) -> Option<StatePanel> {
        let record = self.dataset.lookup(self.panel.abbreviation()?)?;
        Some(StatePanel::build(&self.dataset, record))
    }

    pub fn choropleth(&self) -> ChoroplethView {
        ChoroplethView::build(&self.dataset, self.selection.metric)
    }

    pub fn legend(&self) -> Option<LegendView> {
        LegendView::build(&self.dataset, self.selection.metric)
    }
}

impl<R: Rng> MapEvents for Explorer<R> {
    fn on_hover_enter(&mut self, abbreviation: &str, pointer: Point, viewport: Viewport) {
        self.hover = self.dataset.lookup(abbreviation).map(|record| HoverState {
            card: HoverCard::build(record, &mut self.rng),
            position: position_card(pointer, viewport),
        });
    }

    fn on_hover_move(&mut self, pointer: Point, viewport: Viewport) {
        if let Some(hover) = self.hover.as_mut() {
            hover.position = position_card(pointer, viewport);
        }
    }

    fn on_hover_leave(&mut self) {
        self.hover = None;
    }

    fn on_select(&mut self, abbreviation: &str) {
        self.open_state(abbreviation);
    }

    fn on_tab_change(&mut self, tab: PanelTab) {
        self.panel.select_tab(tab);
    }

    fn on_dismiss(&mut self) {
        self.close_panel();
    }
}
