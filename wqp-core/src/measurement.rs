use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use wqp_utils::dates;

/// Matrix used when the user has not picked one.
pub const DEFAULT_MATRIX: &str = "samplewater";

fn default_matrix() -> String {
    DEFAULT_MATRIX.to_string()
}

/// A single measurement result from a station.
///
/// Measurements are created fresh on every fetch and replaced wholesale by
/// the next one; they are never merged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// Row id assigned by the backend, when it sends one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Station code, when the backend echoes it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Sampling project, when the backend sends one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    /// Measured substance
    pub pollutant: String,
    /// Sampled medium
    #[serde(default = "default_matrix")]
    pub matrix: String,
    /// Sample date, "YYYY-MM-DD"
    pub date: String,
    /// Sample time of day, "HH:MM:SS"
    #[serde(default)]
    pub time: String,
    pub result: f64,
    #[serde(default)]
    pub unit: String,
}

impl Measurement {
    pub fn new(
        pollutant: impl Into<String>,
        matrix: impl Into<String>,
        date: impl Into<String>,
        time: impl Into<String>,
        result: f64,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            code: None,
            project: None,
            pollutant: pollutant.into(),
            matrix: matrix.into(),
            date: date.into(),
            time: time.into(),
            result,
            unit: unit.into(),
        }
    }

    /// The sample date and time combined into one timestamp.
    pub fn timestamp(&self) -> anyhow::Result<NaiveDateTime> {
        dates::parse_timestamp(&self.date, &self.time)
    }

    /// Parse a `/station-data` response body. A `null` body is an empty list.
    pub fn parse_measurement_list(body: &str) -> Result<Vec<Measurement>, serde_json::Error> {
        let rows: Option<Vec<Measurement>> = serde_json::from_str(body)?;
        Ok(rows.unwrap_or_default())
    }
}
