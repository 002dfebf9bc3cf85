//! Dioxus RSX components for the station map.

mod chart_container;
mod error_display;
mod filter_input;
mod loading_spinner;
mod station_popup;

pub use chart_container::ChartContainer;
pub use error_display::ErrorDisplay;
pub use filter_input::FilterInput;
pub use loading_spinner::LoadingSpinner;
pub use station_popup::StationPopup;
