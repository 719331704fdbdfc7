//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! D3.js chart functions are split across `assets/js/*.js` and loaded at
//! runtime. They are evaluated as globals (no ES modules) and exposed via
//! `window.*`. This module provides safe Rust wrappers that serialize data
//! and call those globals, plus the reverse seam: a `wasm_bindgen` closure
//! the map JS invokes when a country is clicked.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

// Embed all D3 chart JS files at compile time
static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static CHOROPLETH_MAP_JS: &str = include_str!("../assets/js/choropleth-map.js");
static PIE_CHART_JS: &str = include_str!("../assets/js/pie-chart.js");
static HISTOGRAM_JS: &str = include_str!("../assets/js/histogram.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('GCA JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize chart scripts with a wait-for-D3 polling loop.
///
/// The chart JS files define functions like `renderChoroplethMap(...)` via
/// `function` declarations. To ensure they become globally accessible
/// (not block-scoped inside the setInterval callback), we evaluate them
/// at global scope via indirect eval once D3 is ready, and then explicitly
/// promote each function to `window.*`.
pub fn init_charts() {
    let all_js = [TOOLTIP_JS, CHOROPLETH_MAP_JS, PIE_CHART_JS, HISTOGRAM_JS].join("\n");

    // Store the scripts on window so the polling callback can eval them
    // at global scope (not block-scoped inside setInterval).
    let store_js = format!(
        "window.__gcaChartScripts = {};",
        serde_json::to_string(&all_js).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined') {
                    clearInterval(waitForD3);
                    // Eval at global scope via indirect eval
                    (0, eval)(window.__gcaChartScripts);
                    delete window.__gcaChartScripts;
                    // Promote function declarations to window explicitly
                    if (typeof renderChoroplethMap !== 'undefined') window.renderChoroplethMap = renderChoroplethMap;
                    if (typeof renderPieChart !== 'undefined') window.renderPieChart = renderPieChart;
                    if (typeof renderHistogram !== 'undefined') window.renderHistogram = renderHistogram;
                    if (typeof highlightHistogramYear !== 'undefined') window.highlightHistogramYear = highlightHistogramYear;
                    if (typeof initTooltip !== 'undefined') window.initTooltip = initTooltip;
                    if (typeof showTooltip !== 'undefined') window.showTooltip = showTooltip;
                    if (typeof hideTooltip !== 'undefined') window.hideTooltip = hideTooltip;
                    window.__gcaChartsReady = true;
                    console.log('GCA charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Store the world-boundaries GeoJSON document once for the map to use.
///
/// The document is opaque to Rust beyond startup validation; D3 owns the
/// projection math.
pub fn set_world_geometry(geojson: &str) {
    let store_js = format!(
        "window.__gcaWorldGeo = JSON.parse({});",
        serde_json::to_string(geojson).unwrap_or_default()
    );
    call_js(&store_js);
}

/// Register the map's click handler.
///
/// The choropleth JS calls `window.__gcaOnCountryClick(code)` with the
/// clicked feature's numeric id. The callback runs on the UI thread and
/// is the only path by which the rendering layer reaches back into the
/// shared state.
pub fn on_country_click(callback: impl FnMut(Option<i64>) + 'static) {
    let mut callback = callback;
    let closure = Closure::wrap(Box::new(move |code: JsValue| {
        callback(code.as_f64().map(|c| c as i64));
    }) as Box<dyn FnMut(JsValue)>);

    if let Some(window) = web_sys::window() {
        let _ = js_sys::Reflect::set(
            &window,
            &JsValue::from_str("__gcaOnCountryClick"),
            closure.as_ref().unchecked_ref(),
        );
    }
    // The handler lives for the whole app lifetime
    closure.forget();
}

/// Render the choropleth world map for one year.
///
/// Uses a polling loop to wait for D3.js to load, chart scripts to
/// initialize, the geometry to be stored, and the container DOM element
/// to exist before rendering.
pub fn render_choropleth_map(container_id: &str, data_json: &str, config_json: &str) {
    let escaped_data = data_json.replace('\'', "\\'").replace('\n', "");
    let escaped_config = config_json.replace('\'', "\\'").replace('\n', "");
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__gcaChartsReady &&
                    typeof window.renderChoroplethMap !== 'undefined' &&
                    window.__gcaWorldGeo &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.renderChoroplethMap('{container_id}', '{escaped_data}', '{escaped_config}');
                    }} catch(e) {{ console.error('[GCA] renderChoroplethMap error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Render the continent/country pie chart for one year.
///
/// Uses a polling loop to wait for D3.js to load, chart scripts to
/// initialize, and the container DOM element to exist before rendering.
pub fn render_pie_chart(container_id: &str, data_json: &str, config_json: &str) {
    let escaped_data = data_json.replace('\'', "\\'").replace('\n', "");
    let escaped_config = config_json.replace('\'', "\\'").replace('\n', "");
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__gcaChartsReady &&
                    typeof window.renderPieChart !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.renderPieChart('{container_id}', '{escaped_data}', '{escaped_config}');
                    }} catch(e) {{ console.error('[GCA] renderPieChart error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Render the per-country annual histogram.
///
/// Uses a polling loop to wait for D3.js to load, chart scripts to
/// initialize, and the container DOM element to exist before rendering.
pub fn render_histogram(container_id: &str, data_json: &str, config_json: &str) {
    let escaped_data = data_json.replace('\'', "\\'").replace('\n', "");
    let escaped_config = config_json.replace('\'', "\\'").replace('\n', "");
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__gcaChartsReady &&
                    typeof window.renderHistogram !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.renderHistogram('{container_id}', '{escaped_data}', '{escaped_config}');
                    }} catch(e) {{ console.error('[GCA] renderHistogram error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Recolor the histogram's bars so the given year stands out.
///
/// Cheap path for year changes: no data rebinding, just a fill update.
pub fn highlight_histogram_year(container_id: &str, year: i32) {
    call_js(&format!(
        "if (window.highlightHistogramYear) window.highlightHistogramYear('{container_id}', {year});",
    ));
}
