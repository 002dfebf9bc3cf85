//! Where the CLI reads station data from: the HTTP endpoint or a local CSV directory.

use clap::Args;
use std::path::PathBuf;
use std::time::Duration;
use wqp_core::client::{ClientConfig, HttpEndpoint, DEFAULT_BASE_URL};
use wqp_core::error::Result;
use wqp_core::{DataEndpoint, Measurement, SeriesQuery, Station};
use wqp_db::Database;

#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Base URL of the data endpoint
    #[arg(long, global = true, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Request timeout in seconds
    #[arg(long, global = true, default_value_t = 30)]
    pub timeout_secs: u64,

    /// Read stations.csv and results.csv from this directory instead of the endpoint
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,
}

impl SourceArgs {
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.base_url.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}

pub enum Source {
    Http(HttpEndpoint),
    Local(Database),
}

impl Source {
    pub fn open(args: &SourceArgs) -> anyhow::Result<Self> {
        match &args.data_dir {
            Some(dir) => {
                log::info!("Using local data in {}", dir.display());
                Ok(Source::Local(Database::open_dir(dir)?))
            }
            None => {
                log::info!("Using endpoint {}", args.base_url);
                Ok(Source::Http(HttpEndpoint::new(&args.client_config())?))
            }
        }
    }
}

impl DataEndpoint for Source {
    async fn stations(&self) -> Result<Vec<Station>> {
        match self {
            Source::Http(http) => http.stations().await,
            Source::Local(db) => db.stations().await,
        }
    }

    async fn station_data(&self, query: &SeriesQuery) -> Result<Vec<Measurement>> {
        match self {
            Source::Http(http) => http.station_data(query).await,
            Source::Local(db) => db.station_data(query).await,
        }
    }

    async fn unique_pollutants(&self, code: &str, matrix: Option<&str>) -> Result<Vec<String>> {
        match self {
            Source::Http(http) => http.unique_pollutants(code, matrix).await,
            Source::Local(db) => db.unique_pollutants(code, matrix).await,
        }
    }

    async fn unique_matrices(&self, code: &str, pollutant: Option<&str>) -> Result<Vec<String>> {
        match self {
            Source::Http(http) => http.unique_matrices(code, pollutant).await,
            Source::Local(db) => db.unique_matrices(code, pollutant).await,
        }
    }
}
