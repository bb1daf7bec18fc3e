//! Fetching the dataset over HTTP from the page's origin.

use anyhow::{anyhow, bail, Context};
use states_core::{Dataset, LoadError};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

fn js_error(value: JsValue) -> anyhow::Error {
    anyhow!("{:?}", value)
}

/// GET `url` and return the body as text.
pub async fn fetch_text(url: &str) -> anyhow::Result<String> {
    let window = web_sys::window().ok_or_else(|| anyhow!("no window"))?;
    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(js_error)
        .with_context(|| format!("request to {} failed", url))?;
    let response: Response = response.dyn_into().map_err(js_error)?;
    if !response.ok() {
        bail!("{} returned HTTP {}", url, response.status());
    }
    let body = JsFuture::from(response.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    body.as_string()
        .ok_or_else(|| anyhow!("{} did not return text", url))
}

/// Fetch and parse `states_data.json`.
///
/// Transport failures become `LoadError::Fetch`; everything else is the
/// dataset's own validation.
pub async fn load_dataset(url: &str) -> states_core::Result<Dataset> {
    let body = fetch_text(url)
        .await
        .map_err(|e| LoadError::Fetch(format!("{:#}", e)))?;
    log::info!("[States] fetched {} ({} bytes)", url, body.len());
    Dataset::from_json(&body)
}
