//! In-memory collaborators for controller tests.

use crate::render::{ChartRenderer, PopupView};
use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};
use tokio::sync::oneshot;
use wqp_core::error::Result;
use wqp_core::{
    Axis, DataEndpoint, FetchError, Measurement, Series, SeriesQuery, Station, DEFAULT_MATRIX,
};

pub fn measurement(pollutant: &str, date: &str, result: f64, unit: &str) -> Measurement {
    Measurement::new(pollutant, DEFAULT_MATRIX, date, "12:00:00", result, unit)
}

type Gate = oneshot::Receiver<Result<Vec<Measurement>>>;
type ValueGate = oneshot::Receiver<Result<Vec<String>>>;

/// Answers from fixed tables. Queued failures and gates apply to the next
/// call in FIFO order.
#[derive(Default)]
pub struct FakeEndpoint {
    pub stations: Vec<Station>,
    pub series: HashMap<SeriesQuery, Vec<Measurement>>,
    pub pollutants: HashMap<String, Vec<String>>,
    pub matrices: HashMap<String, Vec<String>>,
    failures: RefCell<VecDeque<FetchError>>,
    gates: RefCell<VecDeque<Gate>>,
    value_gates: RefCell<VecDeque<ValueGate>>,
    requests: RefCell<Vec<SeriesQuery>>,
    value_requests: RefCell<Vec<(Axis, String, Option<String>)>>,
    in_flight: Cell<usize>,
}

impl FakeEndpoint {
    pub fn insert(&mut self, query: SeriesQuery, rows: Vec<Measurement>) {
        self.series.insert(query, rows);
    }

    pub fn fail_with(&self, err: FetchError) {
        self.failures.borrow_mut().push_back(err);
    }

    /// Hold the next `station_data` call until a value is sent on the paired sender.
    pub fn gate(&self, rx: Gate) {
        self.gates.borrow_mut().push_back(rx);
    }

    /// Hold the next `unique_pollutants`/`unique_matrices` call the same way.
    pub fn gate_values(&self, rx: ValueGate) {
        self.value_gates.borrow_mut().push_back(rx);
    }

    /// Gated calls that have started and not yet been released.
    pub fn in_flight(&self) -> usize {
        self.in_flight.get()
    }

    pub fn requests(&self) -> Vec<SeriesQuery> {
        self.requests.borrow().clone()
    }

    pub fn value_requests(&self) -> Vec<(Axis, String, Option<String>)> {
        self.value_requests.borrow().clone()
    }

    fn next_failure(&self) -> Option<FetchError> {
        self.failures.borrow_mut().pop_front()
    }

    async fn values(&self, axis: Axis, code: &str, other: Option<&str>) -> Result<Vec<String>> {
        self.value_requests
            .borrow_mut()
            .push((axis, code.to_string(), other.map(str::to_string)));
        let gate = self.value_gates.borrow_mut().pop_front();
        if let Some(rx) = gate {
            self.in_flight.set(self.in_flight.get() + 1);
            let released = rx.await;
            self.in_flight.set(self.in_flight.get() - 1);
            return released.unwrap_or_else(|_| Err(FetchError::NetworkFailure("gate dropped".into())));
        }
        if let Some(err) = self.next_failure() {
            return Err(err);
        }
        let table = match axis {
            Axis::Pollutant => &self.pollutants,
            Axis::Matrix => &self.matrices,
        };
        Ok(table.get(code).cloned().unwrap_or_default())
    }
}

impl DataEndpoint for FakeEndpoint {
    async fn stations(&self) -> Result<Vec<Station>> {
        match self.next_failure() {
            Some(err) => Err(err),
            None => Ok(self.stations.clone()),
        }
    }

    async fn station_data(&self, query: &SeriesQuery) -> Result<Vec<Measurement>> {
        self.requests.borrow_mut().push(query.clone());
        let gate = self.gates.borrow_mut().pop_front();
        if let Some(rx) = gate {
            self.in_flight.set(self.in_flight.get() + 1);
            let released = rx.await;
            self.in_flight.set(self.in_flight.get() - 1);
            return released.unwrap_or_else(|_| Err(FetchError::NetworkFailure("gate dropped".into())));
        }
        if let Some(err) = self.next_failure() {
            return Err(err);
        }
        Ok(self.series.get(query).cloned().unwrap_or_default())
    }

    async fn unique_pollutants(&self, code: &str, matrix: Option<&str>) -> Result<Vec<String>> {
        self.values(Axis::Pollutant, code, matrix).await
    }

    async fn unique_matrices(&self, code: &str, pollutant: Option<&str>) -> Result<Vec<String>> {
        self.values(Axis::Matrix, code, pollutant).await
    }
}

#[derive(Default)]
pub struct RecordingChart {
    renders: RefCell<Vec<Series>>,
    failures: RefCell<Vec<FetchError>>,
}

impl RecordingChart {
    pub fn renders(&self) -> Vec<Series> {
        self.renders.borrow().clone()
    }

    pub fn failures(&self) -> Vec<FetchError> {
        self.failures.borrow().clone()
    }
}

impl ChartRenderer for RecordingChart {
    fn render_series(&self, series: &Series) {
        self.renders.borrow_mut().push(series.clone());
    }

    fn fetch_failed(&self, error: &FetchError) {
        self.failures.borrow_mut().push(error.clone());
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    Open(String),
    Close,
    Filters(Option<String>, Option<String>),
}

#[derive(Default)]
pub struct RecordingView {
    events: RefCell<Vec<ViewEvent>>,
}

impl RecordingView {
    pub fn events(&self) -> Vec<ViewEvent> {
        self.events.borrow().clone()
    }
}

impl PopupView for RecordingView {
    fn open(&self, station_code: &str) {
        self.events
            .borrow_mut()
            .push(ViewEvent::Open(station_code.to_string()));
    }

    fn close(&self) {
        self.events.borrow_mut().push(ViewEvent::Close);
    }

    fn show_filters(&self, pollutant: Option<&str>, matrix: Option<&str>) {
        self.events.borrow_mut().push(ViewEvent::Filters(
            pollutant.map(str::to_string),
            matrix.map(str::to_string),
        ));
    }
}
