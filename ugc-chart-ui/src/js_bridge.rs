//! Typed wrappers around JS interop via `js_sys::eval()` and `web_sys`.
//!
//! ApexCharts is loaded from a CDN script tag and used as the global
//! `ApexCharts`. Chart instances are kept on `window.__ugcCharts` keyed by
//! container id so later renders update the existing chart in place.

use js_sys::Promise;
use ugc_data::LoadError;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortSignal, Request, RequestInit, Response};

/// ApexCharts bundle served from a CDN.
pub const APEXCHARTS_SRC: &str = "https://cdn.jsdelivr.net/npm/apexcharts@3.54.1/dist/apexcharts.min.js";

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('UGC JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Render (or update) the line chart in `container_id`.
///
/// `options_json` and `series_json` must be JSON produced by
/// `ugc_data::options::chart_payload`; they are spliced in as JS literals.
/// Every render carries the full state, including `null` x-axis bounds for
/// an unclipped range.
/// The latest payload per container is parked on `window.__ugcPending` and a
/// single polling loop waits for ApexCharts and the container DOM element.
pub fn render_apex_chart(container_id: &str, options_json: &str, series_json: &str) {
    call_js(&format!(
        r#"
        (function() {{
            var id = '{container_id}';
            window.__ugcCharts = window.__ugcCharts || {{}};
            window.__ugcPending = window.__ugcPending || {{}};
            window.__ugcPolling = window.__ugcPolling || {{}};
            window.__ugcPending[id] = {{ options: {options_json}, series: {series_json} }};
            if (window.__ugcPolling[id]) {{ return; }}
            window.__ugcPolling[id] = setInterval(function() {{
                var el = document.getElementById(id);
                if (typeof window.ApexCharts === 'undefined' || !el) {{ return; }}
                clearInterval(window.__ugcPolling[id]);
                delete window.__ugcPolling[id];
                var payload = window.__ugcPending[id];
                delete window.__ugcPending[id];
                if (!payload) {{ return; }}
                // null bounds become present-but-undefined keys so the merge
                // in updateOptions drops an earlier clip
                var xaxis = payload.options.xaxis || {{}};
                ['min', 'max'].forEach(function(k) {{
                    if (xaxis[k] === null) {{ xaxis[k] = undefined; }}
                }});
                try {{
                    var chart = window.__ugcCharts[id];
                    if (chart) {{
                        chart.updateOptions(payload.options, false, false);
                        chart.updateSeries(payload.series);
                    }} else {{
                        var opts = Object.assign({{}}, payload.options, {{ series: payload.series }});
                        chart = new window.ApexCharts(el, opts);
                        window.__ugcCharts[id] = chart;
                        chart.render();
                    }}
                }} catch(e) {{ console.error('[UGC] render error:', e); }}
            }}, 50);
        }})();
        "#,
    ));
}

/// Destroy the chart in the given container and drop any pending render.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        r#"
        var id = '{container_id}';
        if (window.__ugcPolling && window.__ugcPolling[id]) {{
            clearInterval(window.__ugcPolling[id]);
            delete window.__ugcPolling[id];
        }}
        if (window.__ugcPending) {{ delete window.__ugcPending[id]; }}
        if (window.__ugcCharts && window.__ugcCharts[id]) {{
            window.__ugcCharts[id].destroy();
            delete window.__ugcCharts[id];
        }}
        "#,
    ));
}

/// GET `url` and return the body as text.
///
/// Aborting `signal` rejects the pending request with
/// [`LoadError::Network`].
pub async fn fetch_text(url: &str, signal: &AbortSignal) -> Result<String, LoadError> {
    let window = web_sys::window().ok_or_else(|| LoadError::Network("no window".to_string()))?;

    let init = RequestInit::new();
    init.set_method("GET");
    init.set_signal(Some(signal));
    let request = Request::new_with_str_and_init(url, &init).map_err(network_error)?;

    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(network_error)?;
    let response: Response = response.dyn_into().map_err(network_error)?;
    if !response.ok() {
        return Err(LoadError::Status(response.status()));
    }

    let text: Promise = response.text().map_err(body_error)?;
    let body = JsFuture::from(text).await.map_err(body_error)?;
    body.as_string()
        .ok_or_else(|| LoadError::Body("response text was not a string".to_string()))
}

fn network_error(err: JsValue) -> LoadError {
    LoadError::Network(js_error_message(&err))
}

fn body_error(err: JsValue) -> LoadError {
    LoadError::Body(js_error_message(&err))
}

fn js_error_message(err: &JsValue) -> String {
    err.as_string()
        .or_else(|| {
            err.dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{:?}", err))
}
