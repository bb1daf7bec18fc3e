//! Reusable Dioxus RSX components for the States pages.

mod citation;
mod cover_screen;
mod error_display;
mod hover_card;
mod loading_spinner;
mod map_legend;
mod metric_selector;
mod page_header;
mod state_panel;

pub use citation::Cite;
pub use cover_screen::CoverScreen;
pub use error_display::ErrorDisplay;
pub use hover_card::HoverCardView;
pub use loading_spinner::LoadingSpinner;
pub use map_legend::MapLegend;
pub use metric_selector::MetricSelector;
pub use page_header::{Page, PageHeader};
pub use state_panel::StatePanelView;
