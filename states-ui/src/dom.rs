//! Small browser helpers used by the pages.

use js_sys::Promise;
use wasm_bindgen_futures::JsFuture;

/// Session storage key set once the cover screen has been dismissed.
pub const COVER_DISMISSED_KEY: &str = "cover-dismissed";

/// `location.search` of the current page, or an empty string.
pub fn location_search() -> String {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

pub fn navigate(href: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().set_href(href) {
            log::warn!("[States] navigation to {} failed: {:?}", href, e);
        }
    }
}

/// Suspend or restore page scrolling behind the detail panel.
pub fn set_body_scroll_locked(locked: bool) {
    let body = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body());
    if let Some(body) = body {
        let value = if locked { "hidden" } else { "" };
        let _ = body.style().set_property("overflow", value);
    }
}

fn session_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.session_storage().ok()?
}

pub fn cover_dismissed() -> bool {
    session_storage()
        .and_then(|s| s.get_item(COVER_DISMISSED_KEY).ok().flatten())
        .is_some()
}

pub fn dismiss_cover() {
    if let Some(storage) = session_storage() {
        let _ = storage.set_item(COVER_DISMISSED_KEY, "1");
    }
}

/// Resolve after `ms` milliseconds.
pub async fn sleep_ms(ms: u32) {
    let promise = Promise::new(&mut |resolve, _reject| {
        if let Some(window) = web_sys::window() {
            let _ = window
                .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms as i32);
        }
    });
    let _ = JsFuture::from(promise).await;
}

/// A uniform seed from `Math.random()`.
pub fn random_seed() -> u64 {
    (js_sys::Math::random() * u64::MAX as f64) as u64
}
