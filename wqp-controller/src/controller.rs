//! The query controller: owns the selection, issues fetches, feeds the chart.
//!
//! All state lives behind `Rc<RefCell<_>>` and is only touched on one
//! thread. Borrows are never held across an `.await` or while calling into
//! a collaborator, so overlapping calls (a second filter edit while the
//! first fetch is still in flight) are fine. What keeps them consistent is
//! the [`FetchSequence`]: a response only renders if its ticket is still
//! the latest one issued.

use crate::markers::MarkerRegistry;
use crate::render::{ChartRenderer, PopupView};
use crate::sequence::{FetchSequence, Ticket};
use std::cell::RefCell;
use std::rc::Rc;
use wqp_core::{
    distinct_values, dominant_pollutant, filter_menu, Axis, DataEndpoint, FetchError,
    MenuEntries, SelectionState, SeriesQuery, Series, Station,
};

/// Whether the station popup is showing.
///
/// `Closed -> Open` only through [`QueryController::select_station`];
/// a filter edit is an `Open -> Open` self-transition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PopupState {
    #[default]
    Closed,
    Open { station_code: String },
}

#[derive(Debug, Default)]
struct Inner {
    selection: SelectionState,
    popup: PopupState,
    markers: MarkerRegistry,
    /// Bumped on every station switch and close.
    session: u64,
}

/// Keeps station, pollutant, matrix and chart consistent with each other.
///
/// Cheap to clone; clones share the same state.
pub struct QueryController<E, C, P> {
    endpoint: Rc<E>,
    chart: Rc<C>,
    view: Rc<P>,
    inner: Rc<RefCell<Inner>>,
    sequence: Rc<FetchSequence>,
}

impl<E, C, P> Clone for QueryController<E, C, P> {
    fn clone(&self) -> Self {
        Self {
            endpoint: Rc::clone(&self.endpoint),
            chart: Rc::clone(&self.chart),
            view: Rc::clone(&self.view),
            inner: Rc::clone(&self.inner),
            sequence: Rc::clone(&self.sequence),
        }
    }
}

impl<E, C, P> QueryController<E, C, P>
where
    E: DataEndpoint,
    C: ChartRenderer,
    P: PopupView,
{
    pub fn new(endpoint: E, chart: C, view: P) -> Self {
        Self {
            endpoint: Rc::new(endpoint),
            chart: Rc::new(chart),
            view: Rc::new(view),
            inner: Rc::new(RefCell::new(Inner::default())),
            sequence: Rc::new(FetchSequence::default()),
        }
    }

    pub fn endpoint(&self) -> &E {
        &self.endpoint
    }

    pub fn chart(&self) -> &C {
        &self.chart
    }

    pub fn view(&self) -> &P {
        &self.view
    }

    /// A snapshot of the current selection.
    pub fn selection(&self) -> SelectionState {
        self.inner.borrow().selection.clone()
    }

    pub fn popup_state(&self) -> PopupState {
        self.inner.borrow().popup.clone()
    }

    /// Every station with a registered marker, in registration order.
    pub fn stations(&self) -> Vec<Station> {
        self.inner.borrow().markers.stations().to_vec()
    }

    /// Fetch the station list and register a click handler per new station.
    ///
    /// Returns only the stations registered by this call, so the caller adds
    /// each marker once. A failed fetch is logged and returns nothing.
    pub async fn load_stations(&self) -> Vec<Station> {
        let stations = match self.endpoint.stations().await {
            Ok(stations) => stations,
            Err(e) => {
                log::error!("failed to load stations: {}", e);
                return Vec::new();
            }
        };
        let mut inner = self.inner.borrow_mut();
        let fresh: Vec<Station> = stations
            .into_iter()
            .filter(|s| inner.markers.register(s.clone()))
            .collect();
        log::info!(
            "registered {} new stations ({} total)",
            fresh.len(),
            inner.markers.len()
        );
        fresh
    }

    /// Route a marker click to [`select_station`](Self::select_station).
    pub async fn station_clicked(&self, code: &str) {
        let station = self.inner.borrow().markers.get(code).cloned();
        match station {
            Some(station) => self.select_station(&station).await,
            None => log::warn!("click on unregistered station {}", code),
        }
    }

    /// Open the popup for `station` with fresh filters and load its default series.
    ///
    /// Any fetch still in flight for the previous selection is orphaned.
    pub async fn select_station(&self, station: &Station) {
        let code = station.code.trim();
        if code.is_empty() {
            log::warn!("ignoring selection of a station without a code");
            return;
        }
        let selection = SelectionState::for_station(code);
        let matrix = selection.matrix.clone();
        {
            let mut inner = self.inner.borrow_mut();
            inner.selection = selection;
            inner.popup = PopupState::Open {
                station_code: code.to_string(),
            };
            inner.session += 1;
        }
        self.sequence.invalidate();
        log::info!("selected station {}", code);
        self.view.open(code);
        self.view.show_filters(None, Some(matrix.as_str()));
        self.load_default_series(code).await;
    }

    /// Fetch every pollutant of `code` in the default matrix and pick the
    /// dominant pollutant as the selection.
    ///
    /// The chart shows the fetched rows of that pollutant. An empty result
    /// shows the no-data placeholder with both inputs blank. Failures are
    /// logged and reported through [`ChartRenderer::fetch_failed`]; what is
    /// drawn stays as it was.
    pub async fn load_default_series(&self, code: &str) {
        let query = SeriesQuery::unfiltered(code);
        let ticket = self.sequence.issue();
        let result = self.endpoint.station_data(&query).await;
        if !self.accepts(ticket, &query) {
            return;
        }
        let rows = match result {
            Ok(rows) => rows,
            Err(e) => {
                log::error!("failed to load default series for {}: {}", code, e);
                self.chart.fetch_failed(&e);
                return;
            }
        };
        if rows.is_empty() {
            log::info!("no data for station {} in {}", code, query.matrix);
            self.inner.borrow_mut().selection.pollutant = None;
            self.view.show_filters(None, None);
            self.chart.render_no_data();
            return;
        }

        let pollutant = dominant_pollutant(&rows).map(str::to_string);
        let matrix = {
            let mut inner = self.inner.borrow_mut();
            inner.selection.pollutant = pollutant.clone();
            inner.selection.matrix.clone()
        };
        let series = match pollutant.as_deref() {
            Some(p) => Series::for_pollutant(&rows, p),
            None => Series::from_measurements(&rows),
        };
        log::info!(
            "default series for {}: {} ({} points)",
            code,
            pollutant.as_deref().unwrap_or("-"),
            series.points.len()
        );
        self.view.show_filters(pollutant.as_deref(), Some(matrix.as_str()));
        self.chart.render_series(&series);
    }

    /// Change one or both filters and re-fetch the series from the endpoint.
    ///
    /// `None` keeps the current value of that axis. Ignored while the popup
    /// is closed.
    pub async fn apply_filter(&self, pollutant: Option<String>, matrix: Option<String>) {
        let (query, selection) = {
            let mut inner = self.inner.borrow_mut();
            let code = match &inner.popup {
                PopupState::Open { station_code } => station_code.clone(),
                PopupState::Closed => {
                    log::warn!("filter change with no station selected");
                    return;
                }
            };
            inner.selection.update(pollutant, matrix);
            let selection = inner.selection.clone();
            let query = SeriesQuery::new(
                code,
                selection.pollutant.clone().unwrap_or_default(),
                selection.matrix.clone(),
            );
            (query, selection)
        };
        self.view
            .show_filters(selection.pollutant.as_deref(), Some(selection.matrix.as_str()));

        let ticket = self.sequence.issue();
        let result = self.endpoint.station_data(&query).await;
        if !self.accepts(ticket, &query) {
            return;
        }
        match result {
            Ok(rows) if rows.is_empty() => {
                log::info!(
                    "no data for {} / '{}' / {}",
                    query.code,
                    query.pollutant,
                    query.matrix
                );
                self.chart.render_no_data();
            }
            Ok(rows) => {
                let series = Series::from_measurements(&rows);
                if series.is_empty() {
                    self.chart.render_no_data();
                } else {
                    self.chart.render_series(&series);
                }
            }
            Err(e) => {
                log::error!(
                    "failed to fetch {} / '{}' / {}: {}",
                    query.code,
                    query.pollutant,
                    query.matrix,
                    e
                );
                self.chart.fetch_failed(&e);
            }
        }
    }

    /// Distinct values of `axis` at station `code`, optionally constrained
    /// by the other axis. Blank and duplicate values are removed.
    pub async fn list_distinct_values(
        &self,
        axis: Axis,
        code: &str,
        other: Option<&str>,
    ) -> Result<Vec<String>, FetchError> {
        let values = match axis {
            Axis::Pollutant => self.endpoint.unique_pollutants(code, other).await?,
            Axis::Matrix => self.endpoint.unique_matrices(code, other).await?,
        };
        Ok(distinct_values(values))
    }

    /// Dropdown entries for `axis` in the open popup, filtered by `query`.
    ///
    /// Returns `None` when the popup is closed, the fetch fails, or the
    /// station changed while the values were loading.
    pub async fn menu_options(&self, axis: Axis, query: &str) -> Option<MenuEntries> {
        let (code, other, session) = {
            let inner = self.inner.borrow();
            let code = match &inner.popup {
                PopupState::Open { station_code } => station_code.clone(),
                PopupState::Closed => return None,
            };
            let other = inner.selection.value(axis.other()).map(str::to_string);
            (code, other, inner.session)
        };
        let result = self.list_distinct_values(axis, &code, other.as_deref()).await;
        if self.inner.borrow().session != session {
            log::debug!("dropping {} menu for {}: station changed", axis, code);
            return None;
        }
        match result {
            Ok(values) => Some(filter_menu(query, &values)),
            Err(e) => {
                log::error!("failed to list {} values for {}: {}", axis, code, e);
                None
            }
        }
    }

    /// Close the popup, clear the selection and orphan in-flight fetches.
    pub fn close(&self) {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.popup == PopupState::Closed {
                return;
            }
            inner.popup = PopupState::Closed;
            inner.selection = SelectionState::default();
            inner.session += 1;
        }
        self.sequence.invalidate();
        log::info!("popup closed");
        self.view.close();
    }

    fn accepts(&self, ticket: Ticket, query: &SeriesQuery) -> bool {
        if self.sequence.is_current(ticket) {
            return true;
        }
        log::debug!(
            "discarding stale response for {} / '{}' / {}",
            query.code,
            query.pollutant,
            query.matrix
        );
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{measurement, FakeEndpoint, RecordingChart, RecordingView, ViewEvent};
    use tokio::sync::oneshot;
    use tokio::task::yield_now;
    use wqp_core::{Measurement, DEFAULT_MATRIX, NO_DATA_LABEL};

    type Controller = QueryController<FakeEndpoint, RecordingChart, RecordingView>;

    fn controller(endpoint: FakeEndpoint) -> Controller {
        QueryController::new(endpoint, RecordingChart::default(), RecordingView::default())
    }

    fn s1_rows() -> Vec<Measurement> {
        vec![
            measurement("O3", "2020-01-01", 0.5, "ppm"),
            measurement("PM2.5", "2020-01-02", 12.0, "ug/m3"),
            measurement("PM2.5", "2020-01-03", 14.0, "ug/m3"),
        ]
    }

    fn fixture() -> FakeEndpoint {
        let mut endpoint = FakeEndpoint::default();
        endpoint.stations = vec![Station::new("S1", 37.0, -121.0), Station::new("S2", 38.0, -122.0)];
        endpoint.insert(SeriesQuery::unfiltered("S1"), s1_rows());
        endpoint.insert(
            SeriesQuery::unfiltered("S2"),
            vec![
                measurement("Zinc", "2021-02-01", 3.0, "ug/L"),
                measurement("Zinc", "2021-03-01", 4.0, "ug/L"),
            ],
        );
        endpoint.insert(
            SeriesQuery::new("S1", "O3", DEFAULT_MATRIX),
            vec![measurement("O3", "2020-01-01", 0.5, "ppm")],
        );
        endpoint
            .pollutants
            .insert("S1".to_string(), vec!["PM2.5".into(), "O3".into(), "".into(), "O3".into(), "NO2".into()]);
        endpoint
            .matrices
            .insert("S1".to_string(), vec![DEFAULT_MATRIX.into(), "air".into()]);
        endpoint
    }

    #[tokio::test]
    async fn default_series_selects_most_frequent_pollutant() {
        let ctl = controller(fixture());
        ctl.select_station(&Station::new("S1", 37.0, -121.0)).await;

        let selection = ctl.selection();
        assert_eq!(selection.station_code.as_deref(), Some("S1"));
        assert_eq!(selection.pollutant.as_deref(), Some("PM2.5"));
        assert_eq!(selection.matrix, DEFAULT_MATRIX);

        let renders = ctl.chart().renders();
        assert_eq!(renders.len(), 1);
        assert_eq!(renders[0].axis_label, "ug/m3");
        let results: Vec<f64> = renders[0].points.iter().map(|p| p.result).collect();
        assert_eq!(results, vec![12.0, 14.0]);

        assert_eq!(
            ctl.view().events(),
            vec![
                ViewEvent::Open("S1".to_string()),
                ViewEvent::Filters(None, Some(DEFAULT_MATRIX.to_string())),
                ViewEvent::Filters(Some("PM2.5".to_string()), Some(DEFAULT_MATRIX.to_string())),
            ]
        );
        assert_eq!(ctl.endpoint().requests(), vec![SeriesQuery::unfiltered("S1")]);
    }

    #[tokio::test]
    async fn empty_default_series_renders_placeholder_with_blank_inputs() {
        let mut endpoint = fixture();
        endpoint.stations.push(Station::new("S9", 36.0, -120.0));
        let ctl = controller(endpoint);
        ctl.select_station(&Station::new("S9", 36.0, -120.0)).await;

        assert_eq!(ctl.selection().pollutant, None);
        let renders = ctl.chart().renders();
        assert_eq!(renders.len(), 1);
        assert!(renders[0].points.is_empty());
        assert_eq!(renders[0].axis_label, NO_DATA_LABEL);
        assert_eq!(ctl.view().events().last(), Some(&ViewEvent::Filters(None, None)));
    }

    #[tokio::test]
    async fn empty_filter_result_keeps_user_inputs() {
        let ctl = controller(fixture());
        ctl.select_station(&Station::new("S2", 38.0, -122.0)).await;
        ctl.apply_filter(Some("NO2".to_string()), Some("air".to_string()))
            .await;

        let renders = ctl.chart().renders();
        let last = renders.last().unwrap();
        assert!(last.points.is_empty());
        assert_eq!(last.axis_label, NO_DATA_LABEL);

        let selection = ctl.selection();
        assert_eq!(selection.pollutant.as_deref(), Some("NO2"));
        assert_eq!(selection.matrix, "air");
        assert_eq!(
            ctl.view().events().last(),
            Some(&ViewEvent::Filters(Some("NO2".to_string()), Some("air".to_string())))
        );
        assert_eq!(
            ctl.endpoint().requests().last(),
            Some(&SeriesQuery::new("S2", "NO2", "air"))
        );
    }

    #[tokio::test]
    async fn filter_keeps_unspecified_axis() {
        let ctl = controller(fixture());
        ctl.select_station(&Station::new("S1", 37.0, -121.0)).await;
        ctl.apply_filter(Some("O3".to_string()), None).await;

        assert_eq!(
            ctl.endpoint().requests().last(),
            Some(&SeriesQuery::new("S1", "O3", DEFAULT_MATRIX))
        );
        let renders = ctl.chart().renders();
        assert_eq!(renders.last().unwrap().axis_label, "ppm");
    }

    #[tokio::test]
    async fn switching_station_resets_filters() {
        let ctl = controller(fixture());
        ctl.select_station(&Station::new("S1", 37.0, -121.0)).await;
        ctl.apply_filter(Some("O3".to_string()), Some("air".to_string()))
            .await;
        ctl.select_station(&Station::new("S2", 38.0, -122.0)).await;

        let selection = ctl.selection();
        assert_eq!(selection.station_code.as_deref(), Some("S2"));
        assert_eq!(selection.pollutant.as_deref(), Some("Zinc"));
        assert_eq!(selection.matrix, DEFAULT_MATRIX);
        assert_eq!(
            ctl.popup_state(),
            PopupState::Open {
                station_code: "S2".to_string()
            }
        );
    }

    #[tokio::test]
    async fn fetch_failure_leaves_chart_untouched() {
        let ctl = controller(fixture());
        ctl.select_station(&Station::new("S1", 37.0, -121.0)).await;
        ctl.endpoint().fail_with(FetchError::NetworkFailure("connection refused".into()));
        ctl.apply_filter(Some("O3".to_string()), None).await;
        ctl.endpoint()
            .fail_with(FetchError::MalformedResponse("expected value".into()));
        ctl.select_station(&Station::new("S2", 38.0, -122.0)).await;

        assert_eq!(ctl.chart().renders().len(), 1);
        assert_eq!(ctl.chart().renders()[0].axis_label, "ug/m3");
        assert_eq!(
            ctl.chart().failures(),
            vec![
                FetchError::NetworkFailure("connection refused".into()),
                FetchError::MalformedResponse("expected value".into()),
            ]
        );
    }

    #[tokio::test]
    async fn stale_failure_is_not_reported() {
        let ctl = controller(fixture());
        ctl.select_station(&Station::new("S1", 37.0, -121.0)).await;

        let (tx, rx) = oneshot::channel();
        ctl.endpoint().gate(rx);
        let slow = ctl.apply_filter(Some("O3".to_string()), None);
        let close = async {
            while ctl.endpoint().in_flight() < 1 {
                yield_now().await;
            }
            ctl.close();
            tx.send(Err(FetchError::NetworkFailure("reset".into())))
                .unwrap();
        };
        tokio::join!(slow, close);

        assert!(ctl.chart().failures().is_empty());
    }

    #[tokio::test]
    async fn later_fetch_wins_when_it_arrives_first() {
        let ctl = controller(fixture());
        ctl.select_station(&Station::new("S1", 37.0, -121.0)).await;
        let baseline = ctl.chart().renders().len();

        let (tx_a, rx_a) = oneshot::channel();
        let (tx_b, rx_b) = oneshot::channel();
        ctl.endpoint().gate(rx_a);
        ctl.endpoint().gate(rx_b);

        let first = ctl.apply_filter(Some("O3".to_string()), None);
        let second = ctl.apply_filter(Some("PM2.5".to_string()), None);
        let driver = async {
            while ctl.endpoint().in_flight() < 2 {
                yield_now().await;
            }
            tx_b.send(Ok(vec![measurement("PM2.5", "2020-01-02", 12.0, "ug/m3")]))
                .unwrap();
            while ctl.chart().renders().len() == baseline {
                yield_now().await;
            }
            tx_a.send(Ok(vec![measurement("O3", "2020-01-01", 0.5, "ppm")]))
                .unwrap();
        };
        tokio::join!(first, second, driver);

        let renders = ctl.chart().renders();
        assert_eq!(renders.len(), baseline + 1);
        assert_eq!(renders.last().unwrap().axis_label, "ug/m3");
        assert_eq!(ctl.selection().pollutant.as_deref(), Some("PM2.5"));
    }

    #[tokio::test]
    async fn station_switch_orphans_in_flight_filter() {
        let ctl = controller(fixture());
        ctl.select_station(&Station::new("S1", 37.0, -121.0)).await;

        let (tx, rx) = oneshot::channel();
        ctl.endpoint().gate(rx);
        let slow = ctl.apply_filter(Some("O3".to_string()), None);
        let switch = async {
            while ctl.endpoint().in_flight() < 1 {
                yield_now().await;
            }
            ctl.select_station(&Station::new("S2", 38.0, -122.0)).await;
            tx.send(Ok(vec![measurement("O3", "2020-01-01", 0.5, "ppm")]))
                .unwrap();
        };
        tokio::join!(slow, switch);

        let renders = ctl.chart().renders();
        assert_eq!(renders.last().unwrap().axis_label, "ug/L");
        assert_eq!(ctl.selection().pollutant.as_deref(), Some("Zinc"));
    }

    #[tokio::test]
    async fn close_discards_pending_response() {
        let ctl = controller(fixture());
        ctl.select_station(&Station::new("S1", 37.0, -121.0)).await;
        let baseline = ctl.chart().renders().len();

        let (tx, rx) = oneshot::channel();
        ctl.endpoint().gate(rx);
        let slow = ctl.apply_filter(Some("O3".to_string()), None);
        let close = async {
            while ctl.endpoint().in_flight() < 1 {
                yield_now().await;
            }
            ctl.close();
            tx.send(Ok(vec![measurement("O3", "2020-01-01", 0.5, "ppm")]))
                .unwrap();
        };
        tokio::join!(slow, close);

        assert_eq!(ctl.chart().renders().len(), baseline);
        assert_eq!(ctl.popup_state(), PopupState::Closed);
        assert_eq!(ctl.selection(), SelectionState::default());
        assert_eq!(ctl.view().events().last(), Some(&ViewEvent::Close));
    }

    #[tokio::test]
    async fn filter_while_closed_is_ignored() {
        let ctl = controller(fixture());
        assert_eq!(ctl.popup_state(), PopupState::Closed);
        ctl.apply_filter(Some("O3".to_string()), None).await;
        assert!(ctl.endpoint().requests().is_empty());
        assert!(ctl.chart().renders().is_empty());
    }

    #[tokio::test]
    async fn load_stations_registers_once() {
        let ctl = controller(fixture());
        let first = ctl.load_stations().await;
        let second = ctl.load_stations().await;
        assert_eq!(first.len(), 2);
        assert!(second.is_empty());
        assert_eq!(ctl.stations().len(), 2);
    }

    #[tokio::test]
    async fn station_click_routes_registered_codes_only() {
        let ctl = controller(fixture());
        ctl.station_clicked("S1").await;
        assert_eq!(ctl.popup_state(), PopupState::Closed);

        ctl.load_stations().await;
        ctl.station_clicked("S1").await;
        assert_eq!(
            ctl.popup_state(),
            PopupState::Open {
                station_code: "S1".to_string()
            }
        );
    }

    #[tokio::test]
    async fn distinct_values_are_clean_and_ordered() {
        let ctl = controller(fixture());
        let values = ctl
            .list_distinct_values(Axis::Pollutant, "S1", None)
            .await
            .unwrap();
        assert_eq!(values, vec!["PM2.5", "O3", "NO2"]);
        let values = ctl
            .list_distinct_values(Axis::Matrix, "S1", Some("O3"))
            .await
            .unwrap();
        assert_eq!(values, vec![DEFAULT_MATRIX, "air"]);
        assert_eq!(
            ctl.endpoint().value_requests(),
            vec![
                (Axis::Pollutant, "S1".to_string(), None),
                (Axis::Matrix, "S1".to_string(), Some("O3".to_string())),
            ]
        );
    }

    #[tokio::test]
    async fn menu_options_filter_by_typed_text() {
        let ctl = controller(fixture());
        assert_eq!(ctl.menu_options(Axis::Pollutant, "").await, None);

        ctl.select_station(&Station::new("S1", 37.0, -121.0)).await;
        let entries = ctl.menu_options(Axis::Pollutant, "o").await.unwrap();
        assert_eq!(entries, MenuEntries::Items(vec!["O3".to_string(), "NO2".to_string()]));
        let entries = ctl.menu_options(Axis::Pollutant, "lead").await.unwrap();
        assert_eq!(entries, MenuEntries::NoResults);

        // pollutant values are constrained by the current matrix
        assert_eq!(
            ctl.endpoint().value_requests().last(),
            Some(&(Axis::Pollutant, "S1".to_string(), Some(DEFAULT_MATRIX.to_string())))
        );
    }

    #[tokio::test]
    async fn menu_answer_after_station_switch_is_dropped() {
        let ctl = controller(fixture());
        ctl.select_station(&Station::new("S1", 37.0, -121.0)).await;

        let (tx, rx) = oneshot::channel();
        ctl.endpoint().gate_values(rx);
        let menu = ctl.menu_options(Axis::Pollutant, "");
        let switch = async {
            while ctl.endpoint().in_flight() < 1 {
                yield_now().await;
            }
            ctl.select_station(&Station::new("S2", 38.0, -122.0)).await;
            tx.send(Ok(vec!["PM2.5".to_string(), "O3".to_string()]))
                .unwrap();
        };
        let (entries, ()) = tokio::join!(menu, switch);

        assert_eq!(entries, None);
        assert_eq!(ctl.selection().station_code.as_deref(), Some("S2"));
    }

    #[tokio::test]
    async fn menu_answer_after_close_is_dropped() {
        let ctl = controller(fixture());
        ctl.select_station(&Station::new("S1", 37.0, -121.0)).await;

        let (tx, rx) = oneshot::channel();
        ctl.endpoint().gate_values(rx);
        let menu = ctl.menu_options(Axis::Matrix, "air");
        let close = async {
            while ctl.endpoint().in_flight() < 1 {
                yield_now().await;
            }
            ctl.close();
            tx.send(Ok(vec!["air".to_string()])).unwrap();
        };
        let (entries, ()) = tokio::join!(menu, close);

        assert_eq!(entries, None);
        assert_eq!(ctl.popup_state(), PopupState::Closed);
    }

    #[tokio::test]
    async fn padded_station_codes_open_trimmed() {
        let mut endpoint = fixture();
        endpoint.stations = vec![Station::new(" S1 ", 37.0, -121.0)];
        let ctl = controller(endpoint);
        ctl.load_stations().await;
        ctl.station_clicked("S1").await;

        assert_eq!(
            ctl.popup_state(),
            PopupState::Open {
                station_code: "S1".to_string()
            }
        );
        assert_eq!(ctl.endpoint().requests(), vec![SeriesQuery::unfiltered("S1")]);
    }

    #[tokio::test]
    async fn menu_options_failure_is_none() {
        let ctl = controller(fixture());
        ctl.select_station(&Station::new("S1", 37.0, -121.0)).await;
        ctl.endpoint().fail_with(FetchError::NetworkFailure("timeout".into()));
        assert_eq!(ctl.menu_options(Axis::Matrix, "").await, None);
    }
}
