//! Core types and data endpoint access for water quality station data.
//!
//! - `station` / `measurement`: wire types of the data endpoint
//! - `series`: measurements to chart series, dominant pollutant
//! - `menu`: distinct values and dropdown filtering
//! - `selection`: the station/pollutant/matrix selection
//! - `endpoint`: the `DataEndpoint` trait
//! - `client` (feature `api`): `reqwest` implementation of `DataEndpoint`

#[cfg(feature = "api")]
pub mod client;
pub mod endpoint;
pub mod error;
pub mod measurement;
pub mod menu;
pub mod selection;
pub mod series;
pub mod station;

pub use endpoint::{DataEndpoint, SeriesQuery};
pub use error::FetchError;
pub use measurement::{Measurement, DEFAULT_MATRIX};
pub use menu::{distinct_values, filter_menu, MenuEntries, NO_RESULTS_TEXT};
pub use selection::{Axis, SelectionState};
pub use series::{dominant_pollutant, Series, SeriesPoint, NO_DATA_LABEL};
pub use station::Station;
