//! Terminal renderings of what the browser app would draw.

use std::cell::RefCell;
use std::io::Write;
use wqp_controller::{ChartRenderer, PopupView};
use wqp_core::{FetchError, MenuEntries, Series, Station, NO_RESULTS_TEXT};
use wqp_utils::dates::format_timestamp;

/// Keeps the last rendered series, or the last fetch failure, so the command
/// can print the outcome once the controller has finished.
#[derive(Default)]
pub struct CapturedChart {
    last: RefCell<Option<Series>>,
    failure: RefCell<Option<String>>,
}

impl CapturedChart {
    pub fn last(&self) -> Option<Series> {
        self.last.borrow().clone()
    }

    pub fn failure(&self) -> Option<String> {
        self.failure.borrow().clone()
    }

    /// Forget everything captured so far.
    pub fn clear(&self) {
        self.last.borrow_mut().take();
        self.failure.borrow_mut().take();
    }
}

impl ChartRenderer for CapturedChart {
    fn render_series(&self, series: &Series) {
        log::debug!(
            "render '{}' with {} points",
            series.axis_label,
            series.points.len()
        );
        *self.last.borrow_mut() = Some(series.clone());
    }

    fn fetch_failed(&self, error: &FetchError) {
        *self.failure.borrow_mut() = Some(error.to_string());
    }
}

/// Popup stand-in that only logs what a user would see.
#[derive(Default)]
pub struct LoggedPopup;

impl PopupView for LoggedPopup {
    fn open(&self, station_code: &str) {
        log::info!("popup open: {}", station_code);
    }

    fn close(&self) {
        log::info!("popup closed");
    }

    fn show_filters(&self, pollutant: Option<&str>, matrix: Option<&str>) {
        log::info!(
            "filters: pollutant='{}' matrix='{}'",
            pollutant.unwrap_or(""),
            matrix.unwrap_or("")
        );
    }
}

pub fn write_stations<W: Write>(out: W, stations: &[Station]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(out);
    for station in stations {
        wtr.serialize(station)?;
    }
    wtr.flush()?;
    Ok(())
}

/// `# label` comment line, then `timestamp,result` rows. An empty series
/// prints only the comment line.
pub fn write_series<W: Write>(mut out: W, series: &Series) -> anyhow::Result<()> {
    writeln!(out, "# {}", series.axis_label)?;
    if series.is_empty() {
        return Ok(());
    }
    let mut wtr = csv::Writer::from_writer(out);
    wtr.write_record(["timestamp", "result"])?;
    for point in &series.points {
        wtr.write_record([format_timestamp(&point.timestamp), point.result.to_string()])?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_menu<W: Write>(mut out: W, entries: &MenuEntries) -> anyhow::Result<()> {
    match entries {
        MenuEntries::Items(items) => {
            for item in items {
                writeln!(out, "{}", item)?;
            }
        }
        MenuEntries::NoResults => writeln!(out, "{}", NO_RESULTS_TEXT)?,
    }
    Ok(())
}
