use crate::measurement::DEFAULT_MATRIX;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two filter inputs in the station popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Pollutant,
    Matrix,
}

impl Axis {
    /// The axis the other input filters.
    pub fn other(self) -> Axis {
        match self {
            Axis::Pollutant => Axis::Matrix,
            Axis::Matrix => Axis::Pollutant,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Pollutant => write!(f, "pollutant"),
            Axis::Matrix => write!(f, "matrix"),
        }
    }
}

/// The station and filters the user is currently looking at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionState {
    pub station_code: Option<String>,
    pub pollutant: Option<String>,
    pub matrix: String,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            station_code: None,
            pollutant: None,
            matrix: DEFAULT_MATRIX.to_string(),
        }
    }
}

impl SelectionState {
    /// Fresh state for a newly selected station: pollutant cleared, matrix defaulted.
    pub fn for_station(code: impl Into<String>) -> Self {
        Self {
            station_code: Some(code.into()),
            ..Self::default()
        }
    }

    /// Current value of one axis. The pollutant axis is `None` until chosen.
    pub fn value(&self, axis: Axis) -> Option<&str> {
        match axis {
            Axis::Pollutant => self.pollutant.as_deref(),
            Axis::Matrix => Some(self.matrix.as_str()),
        }
    }

    /// Apply a filter edit; `None` keeps the current value of that axis.
    pub fn update(&mut self, pollutant: Option<String>, matrix: Option<String>) {
        if let Some(pollutant) = pollutant {
            self.pollutant = Some(pollutant);
        }
        if let Some(matrix) = matrix {
            self.matrix = matrix;
        }
    }
}
