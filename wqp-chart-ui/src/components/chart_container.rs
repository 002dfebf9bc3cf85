//! Plotly chart container driven by `AppState::series`.

use crate::js_bridge;
use crate::state::AppState;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id Plotly renders into
    pub id: String,
    #[props(default = 320)]
    pub min_height: u32,
}

/// Redraws the scatter whenever the controller hands over a new series.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let state = use_context::<AppState>();
    let chart_id = props.id.clone();

    use_effect(move || match &*state.series.read() {
        Some(series) => js_bridge::render_scatter(&chart_id, series),
        None => js_bridge::destroy_chart(&chart_id),
    });

    let loading = state.series.read().is_none();
    let failure = (state.chart_error)();
    let style = format!(
        "min-height: {}px; position: relative; width: 100%;",
        props.min_height
    );

    rsx! {
        div {
            style: "{style}",
            if let Some(message) = failure {
                div {
                    role: "alert",
                    style: "position: absolute; top: 8px; left: 8px; right: 8px; z-index: 1; padding: 6px 10px; background: #FFEBEE; color: #C62828; border-radius: 4px; font-size: 13px;",
                    "Could not load data ({message}). Select the station or a filter again to retry."
                }
            } else if loading {
                div {
                    style: "position: absolute; top: 50%; left: 50%; transform: translate(-50%, -50%); color: #666;",
                    "Loading chart..."
                }
            }
            div {
                id: "{props.id}",
                style: "width: 100%; height: {props.min_height}px;",
            }
        }
    }
}
