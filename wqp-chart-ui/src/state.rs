//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use wqp_core::{Axis, MenuEntries, Series};

/// The dropdown currently shown under one of the filter inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct OpenMenu {
    pub axis: Axis,
    pub entries: MenuEntries,
}

/// Shared application state for the station map.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Whether the station list is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Code of the station whose popup is open
    pub popup_station: Signal<Option<String>>,
    /// Text of the pollutant input
    pub pollutant_input: Signal<String>,
    /// Text of the matrix input
    pub matrix_input: Signal<String>,
    /// Last series handed to the chart; `None` while the first fetch is pending
    pub series: Signal<Option<Series>>,
    /// Last fetch failure for the open popup, cleared by the next render
    pub chart_error: Signal<Option<String>>,
    pub menu: Signal<Option<OpenMenu>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            popup_station: Signal::new(None),
            pollutant_input: Signal::new(String::new()),
            matrix_input: Signal::new(String::new()),
            series: Signal::new(None),
            chart_error: Signal::new(None),
            menu: Signal::new(None),
        }
    }

    pub fn input(&self, axis: Axis) -> Signal<String> {
        match axis {
            Axis::Pollutant => self.pollutant_input,
            Axis::Matrix => self.matrix_input,
        }
    }
}
