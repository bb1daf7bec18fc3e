//! Shared Dioxus components and D3.js bridge for the States site pages.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the D3.js map via `js_sys::eval()`
//! - `events`: map events forwarded from JS into a Rust channel
//! - `fetch`: loading `states_data.json`
//! - `dom`: small browser helpers (scroll lock, session storage, timers)
//! - `config`: the map configuration handed to D3
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (selectors, panel, legend, etc.)

pub mod components;
pub mod config;
pub mod dom;
pub mod events;
pub mod fetch;
pub mod js_bridge;
pub mod state;
