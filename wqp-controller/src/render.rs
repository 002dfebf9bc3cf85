//! Collaborators the controller drives but does not implement.

use wqp_core::{FetchError, Series};

/// Draws the scatter chart inside the station popup.
pub trait ChartRenderer {
    /// Replace whatever is drawn with `series`, labelling the y axis with
    /// `series.axis_label`.
    fn render_series(&self, series: &Series);

    /// Show the "No Data Available" placeholder.
    fn render_no_data(&self) {
        self.render_series(&Series::no_data());
    }

    /// The fetch for the current selection failed. Whatever is drawn stays;
    /// this only tells the user a retry is needed.
    fn fetch_failed(&self, _error: &FetchError) {}
}

/// The popup panel around the chart: title and the two filter inputs.
pub trait PopupView {
    fn open(&self, station_code: &str);

    fn close(&self);

    /// Set the pollutant and matrix input text. `None` leaves the input blank.
    fn show_filters(&self, pollutant: Option<&str>, matrix: Option<&str>);
}
