//! Dioxus components and Leaflet/Plotly bridge for the station map.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the map and chart JS via `js_sys::eval()`,
//!   plus the one-time JS to Rust event hook
//! - `plot`: Plotly figure and map event payloads (plain serde, testable natively)
//! - `state`: Reactive AppState with Dioxus Signals
//! - `render`: signal-backed chart and popup for the query controller
//! - `components`: the popup, filter inputs and chart container

pub mod components;
pub mod js_bridge;
pub mod plot;
pub mod render;
pub mod state;
