//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The D3 map lives in `assets/js/choropleth.js`, embedded at compile time
//! and evaluated as globals (no ES modules) once D3 and topojson-client are
//! available. This module serializes map data and calls those globals.

use crate::config::MapConfig;
use states_data::choropleth::ChoroplethView;

static CHOROPLETH_JS: &str = include_str!("../assets/js/choropleth.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('States JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Escape a JSON document for embedding in a single-quoted JS string.
fn escape(json: &str) -> String {
    json.replace('\\', "\\\\").replace('\'', "\\'").replace('\n', "")
}

/// Initialize the map script with a wait-for-D3 polling loop.
///
/// The script defines `renderStatesMap`, `recolorStatesMap` and
/// `highlightStatesMap` with `function` declarations. They are evaluated at
/// global scope via indirect eval once D3 and topojson are ready, and then
/// promoted to `window.*`.
pub fn init_map() {
    let store_js = format!(
        "window.__statesMapScript = {};",
        serde_json::to_string(CHOROPLETH_JS).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            if (window.__statesMapReady || window.__statesMapWaiting) return;
            window.__statesMapWaiting = true;
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined' && typeof topojson !== 'undefined') {
                    clearInterval(waitForD3);
                    (0, eval)(window.__statesMapScript);
                    delete window.__statesMapScript;
                    if (typeof renderStatesMap !== 'undefined') window.renderStatesMap = renderStatesMap;
                    if (typeof recolorStatesMap !== 'undefined') window.recolorStatesMap = recolorStatesMap;
                    if (typeof highlightStatesMap !== 'undefined') window.highlightStatesMap = highlightStatesMap;
                    window.__statesMapReady = true;
                    console.log('States map initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Draw the map and color it for the first time.
///
/// Polls until the script is ready and the container exists.
pub fn render_choropleth(config: &MapConfig, view: &ChoroplethView) {
    let config_json = escape(&config.to_json());
    let fills_json = escape(&serde_json::to_string(&view.fills).unwrap_or_default());
    let container_id = config.container_id;
    log::info!(
        "[States] rendering map for {} ({} shapes)",
        view.metric,
        view.fills.len()
    );
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__statesMapReady &&
                    typeof window.renderStatesMap !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.renderStatesMap('{config_json}', '{fills_json}');
                    }} catch(e) {{ console.error('[States] renderStatesMap error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Transition the existing shapes to new fills. Geometry is not rebuilt.
pub fn recolor_choropleth(view: &ChoroplethView, transition_ms: u32) {
    let fills_json = escape(&serde_json::to_string(&view.fills).unwrap_or_default());
    call_js(&format!(
        "if (window.recolorStatesMap) window.recolorStatesMap('{}', {});",
        fills_json, transition_ms
    ));
}

/// Mark one state as active, or clear the mark with `None`.
pub fn highlight_state(abbreviation: Option<&str>) {
    let arg = serde_json::to_string(&abbreviation).unwrap_or_else(|_| "null".to_string());
    call_js(&format!(
        "if (window.highlightStatesMap) window.highlightStatesMap({});",
        arg
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_keeps_json_inside_single_quotes() {
        assert_eq!(escape(r#"{"name":"Hawai'i"}"#), r#"{"name":"Hawai\'i"}"#);
        assert_eq!(escape("[1,\n2]"), "[1,2]");
        assert_eq!(escape(r#""a\"b""#), r#""a\\"b""#);
    }
}
