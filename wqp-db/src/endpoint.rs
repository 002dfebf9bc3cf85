//! [`DataEndpoint`] over the in-memory database.

use crate::Database;
use wqp_core::error::Result;
use wqp_core::{DataEndpoint, FetchError, Measurement, SeriesQuery, Station};

// A failed query is the local equivalent of a request that never completed.
fn unavailable(err: anyhow::Error) -> FetchError {
    FetchError::NetworkFailure(format!("database: {}", err))
}

impl DataEndpoint for Database {
    async fn stations(&self) -> Result<Vec<Station>> {
        self.query_stations().map_err(unavailable)
    }

    async fn station_data(&self, query: &SeriesQuery) -> Result<Vec<Measurement>> {
        self.query_station_data(query).map_err(unavailable)
    }

    async fn unique_pollutants(&self, code: &str, matrix: Option<&str>) -> Result<Vec<String>> {
        self.query_unique_pollutants(code, matrix).map_err(unavailable)
    }

    async fn unique_matrices(&self, code: &str, pollutant: Option<&str>) -> Result<Vec<String>> {
        self.query_unique_matrices(code, pollutant).map_err(unavailable)
    }
}
