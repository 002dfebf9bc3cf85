//! Signal-backed collaborators for the query controller.
//!
//! Neither touches the DOM: they write signals and the components react.

use crate::state::AppState;
use dioxus::prelude::*;
use wqp_controller::{ChartRenderer, PopupView, QueryController};
use wqp_core::client::{ClientConfig, HttpEndpoint};
use wqp_core::{FetchError, Series};

pub type WebController = QueryController<HttpEndpoint, SignalChart, SignalPopup>;

pub struct SignalChart {
    state: AppState,
}

impl ChartRenderer for SignalChart {
    fn render_series(&self, series: &Series) {
        let mut state = self.state;
        state.chart_error.set(None);
        state.series.set(Some(series.clone()));
    }

    fn fetch_failed(&self, error: &FetchError) {
        let mut state = self.state;
        state.chart_error.set(Some(error.to_string()));
    }
}

pub struct SignalPopup {
    state: AppState,
}

impl PopupView for SignalPopup {
    fn open(&self, station_code: &str) {
        let mut state = self.state;
        state.popup_station.set(Some(station_code.to_string()));
        state.series.set(None);
        state.chart_error.set(None);
        state.menu.set(None);
    }

    fn close(&self) {
        let mut state = self.state;
        state.popup_station.set(None);
        state.series.set(None);
        state.chart_error.set(None);
        state.menu.set(None);
    }

    fn show_filters(&self, pollutant: Option<&str>, matrix: Option<&str>) {
        let mut state = self.state;
        state.pollutant_input.set(pollutant.unwrap_or_default().to_string());
        state.matrix_input.set(matrix.unwrap_or_default().to_string());
    }
}

/// Build the controller against the endpoint at `base_url`.
pub fn web_controller(state: AppState, base_url: &str) -> Result<WebController, String> {
    let endpoint = HttpEndpoint::new(&ClientConfig::with_base_url(base_url))
        .map_err(|e| format!("Failed to create data client: {}", e))?;
    Ok(QueryController::new(
        endpoint,
        SignalChart { state },
        SignalPopup { state },
    ))
}
