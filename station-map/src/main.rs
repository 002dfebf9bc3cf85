//! Water Quality Station Map
//!
//! Shows every monitoring station as a clustered Leaflet marker. Clicking a
//! marker opens a popup with pollutant and matrix inputs and a Plotly
//! scatter of the station's measurements; clicking the map closes it.
//!
//! Data flow:
//! 1. `index.html` loads Leaflet, Leaflet.markercluster and Plotly.
//! 2. On mount the bridge scripts are evaluated, the map is created and the
//!    JS event hook is installed (once, for the page lifetime).
//! 3. The query controller loads `/stations` from the page origin and a
//!    marker is added per station.
//! 4. Marker and map clicks arrive on a coroutine channel and are routed to
//!    the controller, which writes the popup and chart signals.

use dioxus::prelude::*;
use futures::StreamExt;
use wqp_chart_ui::components::{ErrorDisplay, LoadingSpinner, StationPopup};
use wqp_chart_ui::js_bridge;
use wqp_chart_ui::plot::MapEvent;
use wqp_chart_ui::render::{web_controller, WebController};
use wqp_chart_ui::state::AppState;
use wqp_core::client::DEFAULT_BASE_URL;

/// Map container DOM element ID used by Leaflet to render into.
const MAP_ID: &str = "wqp-station-map";

/// Central California.
const MAP_CENTER: (f64, f64) = (37.17, -119.45);
const MAP_ZOOM: u8 = 7;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("station-map-root"))
        .launch(App);
}

/// The data endpoint is served from the same origin as the page.
fn page_origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}

#[component]
fn App() -> Element {
    let state = use_context_provider(AppState::new);

    let setup_error = use_hook(move || match web_controller(state, &page_origin()) {
        Ok(controller) => {
            provide_context(controller);
            None
        }
        Err(e) => {
            log::error!("{}", e);
            Some(e)
        }
    });

    rsx! {
        div {
            style: "position: relative; width: 100%; height: 100vh; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",
            if let Some(message) = setup_error {
                ErrorDisplay { message }
            } else {
                StationMap {}
            }
        }
    }
}

#[component]
fn StationMap() -> Element {
    let mut state = use_context::<AppState>();
    let controller = use_context::<WebController>();

    let events = use_coroutine({
        let controller = controller.clone();
        move |mut rx: UnboundedReceiver<MapEvent>| {
            let controller = controller.clone();
            async move {
                while let Some(event) = rx.next().await {
                    match event {
                        MapEvent::StationClicked { code } => {
                            let controller = controller.clone();
                            spawn(async move { controller.station_clicked(&code).await });
                        }
                        MapEvent::MapClicked => controller.close(),
                    }
                }
            }
        }
    });

    use_hook(move || {
        js_bridge::init_scripts();
        js_bridge::set_event_handler(move |event| events.send(event));
        js_bridge::init_map(MAP_ID, MAP_CENTER.0, MAP_CENTER.1, MAP_ZOOM);

        spawn(async move {
            let fresh = controller.load_stations().await;
            js_bridge::add_station_markers(MAP_ID, &fresh);
            if controller.stations().is_empty() {
                state
                    .error_msg
                    .set(Some("No stations could be loaded".to_string()));
            }
            state.loading.set(false);
        });
    });

    rsx! {
        div {
            id: "{MAP_ID}",
            style: "width: 100%; height: 100%;",
        }
        if (state.loading)() {
            div {
                style: "position: absolute; top: 12px; left: 50%; transform: translateX(-50%); z-index: 1000; background: white; border-radius: 4px;",
                LoadingSpinner { message: "Loading stations...".to_string() }
            }
        }
        if let Some(err) = (state.error_msg)() {
            ErrorDisplay { message: err }
        }
        StationPopup {}
    }
}
