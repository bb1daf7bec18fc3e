//! Map events raised in JS and delivered to Rust.
//!
//! The D3 script and the global key listener call small `window.__states*`
//! callbacks. Those callbacks only push a `MapEvent` into an unbounded
//! channel; the page drains the channel from a Dioxus task and applies each
//! event to its `Explorer`.

use futures::channel::mpsc::UnboundedSender;
use states_data::explorer::MapEvents;
use states_data::hover::{Point, Viewport};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[derive(Debug, Clone, PartialEq)]
pub enum MapEvent {
    HoverEnter {
        abbreviation: String,
        pointer: Point,
        viewport: Viewport,
    },
    HoverMove {
        pointer: Point,
        viewport: Viewport,
    },
    HoverLeave,
    Select(String),
    Dismiss,
}

impl MapEvent {
    pub fn dispatch(self, target: &mut impl MapEvents) {
        match self {
            MapEvent::HoverEnter {
                abbreviation,
                pointer,
                viewport,
            } => target.on_hover_enter(&abbreviation, pointer, viewport),
            MapEvent::HoverMove { pointer, viewport } => target.on_hover_move(pointer, viewport),
            MapEvent::HoverLeave => target.on_hover_leave(),
            MapEvent::Select(abbreviation) => target.on_select(&abbreviation),
            MapEvent::Dismiss => target.on_dismiss(),
        }
    }
}

fn send(tx: &UnboundedSender<MapEvent>, event: MapEvent) {
    if tx.unbounded_send(event).is_err() {
        log::warn!("[States] map event dropped: receiver closed");
    }
}

fn set_window_callback(name: &str, callback: &JsValue) {
    if let Some(window) = web_sys::window() {
        let _ = js_sys::Reflect::set(&window, &JsValue::from_str(name), callback);
    }
}

/// Install the `window.__states*` callbacks the map script calls.
///
/// The closures live for the rest of the page.
pub fn register_map_callbacks(tx: UnboundedSender<MapEvent>) {
    let enter_tx = tx.clone();
    let enter = Closure::wrap(Box::new(
        move |abbreviation: String, x: f64, y: f64, width: f64, height: f64| {
            send(
                &enter_tx,
                MapEvent::HoverEnter {
                    abbreviation,
                    pointer: Point { x, y },
                    viewport: Viewport { width, height },
                },
            );
        },
    ) as Box<dyn FnMut(String, f64, f64, f64, f64)>);
    set_window_callback("__statesHoverEnter", enter.as_ref());
    enter.forget();

    let move_tx = tx.clone();
    let hover_move = Closure::wrap(Box::new(move |x: f64, y: f64, width: f64, height: f64| {
        send(
            &move_tx,
            MapEvent::HoverMove {
                pointer: Point { x, y },
                viewport: Viewport { width, height },
            },
        );
    }) as Box<dyn FnMut(f64, f64, f64, f64)>);
    set_window_callback("__statesHoverMove", hover_move.as_ref());
    hover_move.forget();

    let leave_tx = tx.clone();
    let leave = Closure::wrap(Box::new(move || {
        send(&leave_tx, MapEvent::HoverLeave);
    }) as Box<dyn FnMut()>);
    set_window_callback("__statesHoverLeave", leave.as_ref());
    leave.forget();

    let select = Closure::wrap(Box::new(move |abbreviation: String| {
        send(&tx, MapEvent::Select(abbreviation));
    }) as Box<dyn FnMut(String)>);
    set_window_callback("__statesSelect", select.as_ref());
    select.forget();
}

/// Send `Dismiss` whenever Escape is pressed anywhere on the page.
pub fn listen_for_escape(tx: UnboundedSender<MapEvent>) {
    let closure = Closure::wrap(Box::new(move |event: web_sys::KeyboardEvent| {
        if event.key() == "Escape" {
            send(&tx, MapEvent::Dismiss);
        }
    }) as Box<dyn FnMut(web_sys::KeyboardEvent)>);

    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        let _ = document
            .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

#[cfg(test)]
mod tests {
    use super::*;
    use states_data::panel::PanelTab;

    #[derive(Default)]
    struct Recorder(Vec<String>);

    impl MapEvents for Recorder {
        fn on_hover_enter(&mut self, abbreviation: &str, pointer: Point, _: Viewport) {
            self.0.push(format!("enter {} {}", abbreviation, pointer.x));
        }
        fn on_hover_move(&mut self, pointer: Point, _: Viewport) {
            self.0.push(format!("move {}", pointer.y));
        }
        fn on_hover_leave(&mut self) {
            self.0.push("leave".to_string());
        }
        fn on_select(&mut self, abbreviation: &str) {
            self.0.push(format!("select {}", abbreviation));
        }
        fn on_tab_change(&mut self, tab: PanelTab) {
            self.0.push(format!("tab {}", tab.id()));
        }
        fn on_dismiss(&mut self) {
            self.0.push("dismiss".to_string());
        }
    }

    #[test]
    fn events_dispatch_to_the_matching_handler() {
        let viewport = Viewport {
            width: 800.0,
            height: 600.0,
        };
        let mut recorder = Recorder::default();
        let events = vec![
            MapEvent::HoverEnter {
                abbreviation: "CA".to_string(),
                pointer: Point { x: 5.0, y: 6.0 },
                viewport,
            },
            MapEvent::HoverMove {
                pointer: Point { x: 7.0, y: 8.0 },
                viewport,
            },
            MapEvent::HoverLeave,
            MapEvent::Select("TX".to_string()),
            MapEvent::Dismiss,
        ];
        for event in events {
            event.dispatch(&mut recorder);
        }
        assert_eq!(
            recorder.0,
            vec!["enter CA 5", "move 8", "leave", "select TX", "dismiss"]
        );
    }
}
