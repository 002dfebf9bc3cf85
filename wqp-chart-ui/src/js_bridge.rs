//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The map and chart functions live in `assets/js/station-map.js`. They are
//! evaluated as globals (no ES modules) once Leaflet, Leaflet.markercluster
//! and Plotly have loaded, and exposed via `window.*`. Calls made before
//! that poll until both the scripts and their container element exist.

use crate::plot::{scatter_figure, MapEvent};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsValue;
use wqp_core::{Series, Station};

static STATION_MAP_JS: &str = include_str!("../assets/js/station-map.js");

/// Global the JS side calls with a JSON-encoded [`MapEvent`].
pub const EVENT_HOOK: &str = "__wqpEvent";

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('WQP JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Quote `text` as a JS string literal.
fn js_string(text: &str) -> String {
    serde_json::to_string(text).unwrap_or_else(|_| "''".to_string())
}

/// Evaluate the map/chart scripts once their libraries are present. Call once at startup.
pub fn init_scripts() {
    let store_js = format!("window.__wqpScripts = {};", js_string(STATION_MAP_JS));
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            var waitForLibs = setInterval(function() {
                if (typeof L !== 'undefined' &&
                    typeof L.markerClusterGroup !== 'undefined' &&
                    typeof Plotly !== 'undefined') {
                    clearInterval(waitForLibs);
                    (0, eval)(window.__wqpScripts);
                    delete window.__wqpScripts;
                    window.initStationMap = initStationMap;
                    window.addStationMarkers = addStationMarkers;
                    window.renderScatter = renderScatter;
                    window.destroyScatter = destroyScatter;
                    window.__wqpReady = true;
                    console.log('WQP map scripts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Run `body` once the scripts are ready and `#container_id` exists.
fn when_ready(container_id: &str, extra_check: &str, body: &str) {
    let id = js_string(container_id);
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__wqpReady && document.getElementById({id}){extra_check}) {{
                    clearInterval(poll);
                    try {{ {body} }} catch(e) {{ console.error('[WQP] bridge error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Create the Leaflet map and marker cluster group inside `container_id`.
pub fn init_map(container_id: &str, lat: f64, lng: f64, zoom: u8) {
    let id = js_string(container_id);
    when_ready(
        container_id,
        "",
        &format!("window.initStationMap({id}, {lat}, {lng}, {zoom});"),
    );
}

/// Add one clustered marker per station. Clicking one raises
/// [`MapEvent::StationClicked`].
pub fn add_station_markers(container_id: &str, stations: &[Station]) {
    if stations.is_empty() {
        return;
    }
    let json = match serde_json::to_string(stations) {
        Ok(json) => json,
        Err(e) => {
            log::error!("failed to encode stations: {}", e);
            return;
        }
    };
    when_ready(
        container_id,
        " && window.__wqpCluster",
        &format!("window.addStationMarkers({});", js_string(&json)),
    );
}

/// Draw `series` into `container_id`, replacing any previous plot.
pub fn render_scatter(container_id: &str, series: &Series) {
    let figure = scatter_figure(series).to_string();
    let id = js_string(container_id);
    when_ready(
        container_id,
        "",
        &format!("window.renderScatter({id}, {});", js_string(&figure)),
    );
}

pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "if (window.destroyScatter) window.destroyScatter({});",
        js_string(container_id)
    ));
}

/// Install `handler` as the receiver of every map event.
///
/// The closure is leaked to keep it alive for the page lifetime, so call
/// this once.
pub fn set_event_handler(mut handler: impl FnMut(MapEvent) + 'static) {
    let callback = Closure::wrap(Box::new(move |payload: String| {
        if let Some(event) = MapEvent::parse(&payload) {
            handler(event);
        }
    }) as Box<dyn FnMut(String)>);

    match web_sys::window() {
        Some(window) => {
            if let Err(e) = js_sys::Reflect::set(
                &window,
                &JsValue::from_str(EVENT_HOOK),
                callback.as_ref(),
            ) {
                log::error!("failed to install map event hook: {:?}", e);
            }
        }
        None => log::error!("no window to install map event hook on"),
    }
    callback.forget();
}
