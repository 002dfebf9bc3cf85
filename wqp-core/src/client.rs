//! HTTP implementation of [`DataEndpoint`] backed by `reqwest`.
//!
//! Works natively and on `wasm32` (where reqwest delegates to `fetch`).

use crate::endpoint::{DataEndpoint, SeriesQuery};
use crate::error::{FetchError, Result};
use crate::measurement::Measurement;
use crate::menu::parse_value_list;
use crate::station::Station;
use std::time::Duration;

/// Base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Connection settings for [`HttpEndpoint`].
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Scheme, host and optional path prefix, e.g. `https://waterplots.com`
    pub base_url: String,
    /// Whole-request timeout. Ignored on wasm32, where the browser owns timeouts.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone)]
pub struct HttpEndpoint {
    client: reqwest::Client,
    base_url: String,
}

fn network(err: reqwest::Error) -> FetchError {
    FetchError::NetworkFailure(err.to_string())
}

impl HttpEndpoint {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let builder = reqwest::Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(config.timeout);
        let client = builder.build().map_err(network)?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Absolute URL of an endpoint path such as `/stations`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_body(&self, path: &str, params: &[(&str, &str)]) -> Result<String> {
        let url = self.url(path);
        log::debug!("GET {} {:?}", url, params);
        let response = self
            .client
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(network)?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::NetworkFailure(format!(
                "{} returned {}",
                path, status
            )));
        }
        response.text().await.map_err(network)
    }
}

impl DataEndpoint for HttpEndpoint {
    async fn stations(&self) -> Result<Vec<Station>> {
        let body = self.get_body("/stations", &[]).await?;
        Ok(Station::parse_station_list(&body)?)
    }

    async fn station_data(&self, query: &SeriesQuery) -> Result<Vec<Measurement>> {
        let body = self.get_body("/station-data", &query.params()).await?;
        Ok(Measurement::parse_measurement_list(&body)?)
    }

    async fn unique_pollutants(&self, code: &str, matrix: Option<&str>) -> Result<Vec<String>> {
        let mut params = vec![("code", code)];
        if let Some(matrix) = matrix {
            params.push(("matrix", matrix));
        }
        let body = self.get_body("/unique-pollutants", &params).await?;
        Ok(parse_value_list(&body)?)
    }

    async fn unique_matrices(&self, code: &str, pollutant: Option<&str>) -> Result<Vec<String>> {
        let mut params = vec![("code", code)];
        if let Some(pollutant) = pollutant {
            params.push(("pollutant", pollutant));
        }
        let body = self.get_body("/unique-matrices", &params).await?;
        Ok(parse_value_list(&body)?)
    }
}
