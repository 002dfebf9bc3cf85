use serde::{Deserialize, Serialize};

/// A fixed-location monitoring station.
///
/// Stations are loaded once from the `/stations` list and never change
/// for the lifetime of a session.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Station {
    /// Unique station identifier (e.g., "S1")
    #[serde(alias = "station_code")]
    pub code: String,
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
}

impl Station {
    pub fn new(code: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            code: code.into(),
            latitude,
            longitude,
        }
    }

    /// Parse a `/stations` response body.
    ///
    /// A `null` body is an empty list. Codes are trimmed; entries with a
    /// blank code cannot be selected and are dropped.
    pub fn parse_station_list(body: &str) -> Result<Vec<Station>, serde_json::Error> {
        let stations: Option<Vec<Station>> = serde_json::from_str(body)?;
        let stations = stations.unwrap_or_default();
        let total = stations.len();
        let stations: Vec<Station> = stations
            .into_iter()
            .map(|mut s| {
                s.code = s.code.trim().to_string();
                s
            })
            .filter(|s| !s.code.is_empty())
            .collect();
        if stations.len() < total {
            log::warn!(
                "dropped {} stations without a code",
                total - stations.len()
            );
        }
        Ok(stations)
    }
}
