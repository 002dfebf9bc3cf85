//! Payloads exchanged with the JS side.

use serde::Deserialize;
use serde_json::{json, Value};
use wqp_core::{Series, NO_DATA_LABEL};
use wqp_utils::dates::format_timestamp;

/// Marker colour of the scatter trace.
pub const MARKER_COLOR: &str = "#1f77b4";

/// Events raised by the Leaflet map.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MapEvent {
    StationClicked { code: String },
    MapClicked,
}

impl MapEvent {
    pub fn parse(payload: &str) -> Option<MapEvent> {
        match serde_json::from_str(payload) {
            Ok(event) => Some(event),
            Err(e) => {
                log::warn!("ignoring map event {}: {}", payload, e);
                None
            }
        }
    }
}

/// Plotly figure (`{data, layout}`) for `series`: open circle markers, a y
/// axis starting at zero titled with the axis label, and a centred
/// annotation when there is nothing to plot.
pub fn scatter_figure(series: &Series) -> Value {
    let x: Vec<String> = series
        .points
        .iter()
        .map(|p| format_timestamp(&p.timestamp))
        .collect();
    let y: Vec<f64> = series.points.iter().map(|p| p.result).collect();

    let trace = json!({
        "type": "scatter",
        "mode": "markers",
        "x": x,
        "y": y,
        "marker": {
            "symbol": "circle-open",
            "size": 8,
            "color": MARKER_COLOR,
        },
        "hovertemplate": "%{x}<br>%{y}<extra></extra>",
    });

    let mut layout = json!({
        "margin": { "l": 60, "r": 20, "t": 20, "b": 50 },
        "xaxis": { "type": "date" },
        "yaxis": {
            "title": { "text": series.axis_label },
            "rangemode": "tozero",
        },
        "showlegend": false,
    });

    if series.is_empty() {
        layout["annotations"] = json!([{
            "text": NO_DATA_LABEL,
            "xref": "paper",
            "yref": "paper",
            "x": 0.5,
            "y": 0.5,
            "showarrow": false,
            "font": { "size": 16, "color": "#888" },
        }]);
        layout["xaxis"]["visible"] = json!(false);
    }

    json!({ "data": [trace], "layout": layout })
}
