//! Intro screen shown once per browser session.

use crate::dom;
use dioxus::prelude::*;

#[component]
pub fn CoverScreen() -> Element {
    let mut visible = use_signal(|| !dom::cover_dismissed());

    if !visible() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "cover-screen",
            style: "position: fixed; inset: 0; z-index: 50; display: flex; flex-direction: column; align-items: center; justify-content: center; background: #0f172a; color: #f8fafc; text-align: center;",
            h1 { style: "font-size: 40px; margin: 0 0 8px 0;", "The States" }
            p {
                style: "max-width: 420px; color: #cbd5e1;",
                "Economy, health and a few surprises for every U.S. state. Hover the map for a summary, click a state for the full picture."
            }
            button {
                style: "margin-top: 16px; padding: 10px 24px; font-size: 15px; border: none; border-radius: 6px; cursor: pointer;",
                onclick: move |_| {
                    dom::dismiss_cover();
                    visible.set(false);
                },
                "Explore the map"
            }
        }
    }
}
