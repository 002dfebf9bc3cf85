//! The read-only data endpoint the controller queries.

use crate::error::Result;
use crate::measurement::{Measurement, DEFAULT_MATRIX};
use crate::station::Station;

/// Parameters of a `/station-data` fetch.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SeriesQuery {
    pub code: String,
    /// Empty means every pollutant
    pub pollutant: String,
    pub matrix: String,
}

impl SeriesQuery {
    /// Every pollutant of `code` in the default matrix.
    pub fn unfiltered(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            pollutant: String::new(),
            matrix: DEFAULT_MATRIX.to_string(),
        }
    }

    pub fn new(code: impl Into<String>, pollutant: impl Into<String>, matrix: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            pollutant: pollutant.into(),
            matrix: matrix.into(),
        }
    }

    /// Query string pairs in the order the endpoint documents them.
    pub fn params(&self) -> [(&'static str, &str); 3] {
        [
            ("code", self.code.as_str()),
            ("pollutant", self.pollutant.as_str()),
            ("matrix", self.matrix.as_str()),
        ]
    }
}

/// A source of stations and measurements.
///
/// Every method resolves to `Ok(vec![])` when there is simply no data, and
/// to an error only for network or decoding failures. Futures are not
/// required to be `Send`; callers run them on a single-threaded executor.
#[allow(async_fn_in_trait)]
pub trait DataEndpoint {
    /// `GET /stations`
    async fn stations(&self) -> Result<Vec<Station>>;

    /// `GET /station-data?code=&pollutant=&matrix=`, ordered by date/time ascending
    async fn station_data(&self, query: &SeriesQuery) -> Result<Vec<Measurement>>;

    /// `GET /unique-pollutants?code=[&matrix=]`
    async fn unique_pollutants(&self, code: &str, matrix: Option<&str>) -> Result<Vec<String>>;

    /// `GET /unique-matrices?code=[&pollutant=]`
    async fn unique_matrices(&self, code: &str, pollutant: Option<&str>) -> Result<Vec<String>>;
}
