use std::collections::HashMap;
use wqp_core::Station;

/// Stations whose map marker already has a click handler.
///
/// Registration is idempotent: reloading the station list never attaches
/// a second handler to the same marker. Codes are keyed trimmed, so a
/// station registers and looks up under the same code it is queried with.
#[derive(Debug, Default)]
pub struct MarkerRegistry {
    stations: Vec<Station>,
    by_code: HashMap<String, usize>,
}

impl MarkerRegistry {
    /// Returns `true` if `station` was not registered before.
    pub fn register(&mut self, mut station: Station) -> bool {
        station.code = station.code.trim().to_string();
        if self.by_code.contains_key(&station.code) {
            return false;
        }
        self.by_code.insert(station.code.clone(), self.stations.len());
        self.stations.push(station);
        true
    }

    pub fn get(&self, code: &str) -> Option<&Station> {
        self.by_code.get(code.trim()).map(|&i| &self.stations[i])
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}
