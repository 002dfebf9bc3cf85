//! Popup for the selected station: title, filter inputs and chart.

use crate::components::{ChartContainer, FilterInput};
use crate::render::WebController;
use crate::state::AppState;
use dioxus::prelude::*;
use wqp_core::Axis;

pub const CHART_ID: &str = "wqp-station-chart";

#[component]
pub fn StationPopup() -> Element {
    let state = use_context::<AppState>();
    let controller = use_context::<WebController>();

    let Some(code) = (state.popup_station)() else {
        return rsx! {};
    };

    rsx! {
        div {
            style: "position: absolute; right: 16px; top: 16px; z-index: 1000; width: min(560px, calc(100% - 32px)); padding: 12px 16px; background: white; border-radius: 6px; box-shadow: 0 2px 12px rgba(0,0,0,0.3);",
            div {
                style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 8px;",
                h3 { style: "margin: 0; font-size: 16px;", "{code}" }
                button {
                    title: "Close",
                    style: "border: none; background: none; font-size: 20px; cursor: pointer;",
                    onclick: move |_| controller.close(),
                    "\u{00d7}"
                }
            }
            div {
                style: "display: flex; gap: 12px; margin-bottom: 8px;",
                FilterInput { axis: Axis::Pollutant, label: "Pollutant".to_string() }
                FilterInput { axis: Axis::Matrix, label: "Matrix".to_string() }
            }
            ChartContainer { id: CHART_ID.to_string() }
        }
    }
}
