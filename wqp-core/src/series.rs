//! Turning fetched measurements into chart-ready series.

use crate::measurement::Measurement;
use chrono::NaiveDateTime;
use serde::Serialize;
use std::collections::HashMap;

/// Axis label shown when a selection has no measurements.
pub const NO_DATA_LABEL: &str = "No Data Available";

/// One plotted point. Serializes as `{"timestamp": "2020-01-02T10:15:00", "result": 3.5}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub timestamp: NaiveDateTime,
    pub result: f64,
}

/// Ordered (timestamp, result) pairs for one station/pollutant/matrix selection.
///
/// Point order is the response order of the fetch it was built from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub points: Vec<SeriesPoint>,
    pub axis_label: String,
}

impl Series {
    /// The placeholder series for "no data for this filter".
    pub fn no_data() -> Self {
        Self {
            points: Vec::new(),
            axis_label: NO_DATA_LABEL.to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Build a series from measurements, keeping their order.
    ///
    /// Rows without a parseable timestamp are skipped. The axis label is the
    /// unit of the first plotted row, or its pollutant when the unit is blank.
    /// Returns the no-data placeholder when nothing is left to plot.
    pub fn from_measurements<'a, I>(rows: I) -> Self
    where
        I: IntoIterator<Item = &'a Measurement>,
    {
        let mut points = Vec::new();
        let mut axis_label: Option<String> = None;
        for row in rows {
            let timestamp = match row.timestamp() {
                Ok(ts) => ts,
                Err(e) => {
                    log::warn!(
                        "skipping {} row dated '{} {}': {}",
                        row.pollutant,
                        row.date,
                        row.time,
                        e
                    );
                    continue;
                }
            };
            if axis_label.is_none() {
                axis_label = Some(axis_label_for(row));
            }
            points.push(SeriesPoint {
                timestamp,
                result: row.result,
            });
        }
        match axis_label {
            Some(axis_label) => Self { points, axis_label },
            None => Self::no_data(),
        }
    }

    /// Build a series from only the rows measuring `pollutant`.
    pub fn for_pollutant(rows: &[Measurement], pollutant: &str) -> Self {
        Self::from_measurements(rows.iter().filter(|m| m.pollutant == pollutant))
    }
}

fn axis_label_for(row: &Measurement) -> String {
    let unit = row.unit.trim();
    if unit.is_empty() {
        row.pollutant.clone()
    } else {
        unit.to_string()
    }
}

/// The pollutant occurring most often in `rows`.
///
/// Ties go to the pollutant encountered first. Blank pollutant values are
/// not candidates; returns `None` when no row names a pollutant.
pub fn dominant_pollutant(rows: &[Measurement]) -> Option<&str> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    for row in rows {
        let pollutant = row.pollutant.as_str();
        if pollutant.trim().is_empty() {
            continue;
        }
        match index.get(pollutant) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(pollutant, counts.len());
                counts.push((pollutant, 1));
            }
        }
    }
    let mut best: Option<(&str, usize)> = None;
    for (pollutant, count) in counts {
        match best {
            Some((_, best_count)) if count <= best_count => {}
            _ => best = Some((pollutant, count)),
        }
    }
    best.map(|(pollutant, _)| pollutant)
}
