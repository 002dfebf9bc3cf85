//! CSV data loading functions for populating the in-memory SQLite database.
//!
//! # CSV Formats
//!
//! - **Stations** (has headers): `code,latitude,longitude`
//! - **Results** (has headers): `matrix,project,code,pollutant,date,time,result,unit`

use crate::Database;
use rusqlite::params;
use std::path::Path;

/// File name of the station list inside a data directory.
pub const STATIONS_FILE: &str = "stations.csv";
/// File name of the measurement results inside a data directory.
pub const RESULTS_FILE: &str = "results.csv";

impl Database {
    /// Load station metadata from CSV string.
    ///
    /// Rows with a blank code or missing coordinates cannot be placed on the
    /// map and are skipped.
    ///
    /// # Example CSV
    /// ```text
    /// code,latitude,longitude
    /// 204SAR010,37.497,-121.936
    /// ```
    pub fn load_stations(&self, csv_data: &str) -> anyhow::Result<()> {
        let conn = self.conn.borrow();
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(csv_data.as_bytes());

        let mut count = 0u32;
        let mut skipped = 0u32;
        for result in rdr.records() {
            let r = result?;
            let code = r.get(0).unwrap_or("").trim();
            let latitude: Option<f64> = r.get(1).and_then(|s| s.trim().parse().ok());
            let longitude: Option<f64> = r.get(2).and_then(|s| s.trim().parse().ok());
            let (latitude, longitude) = match (latitude, longitude) {
                (Some(lat), Some(lon)) if !code.is_empty() => (lat, lon),
                _ => {
                    skipped += 1;
                    continue;
                }
            };

            conn.execute(
                "INSERT OR REPLACE INTO stations (code, latitude, longitude)
                 VALUES (?1, ?2, ?3)",
                params![code, latitude, longitude],
            )?;
            count += 1;
        }
        log::info!("loader: loaded {} stations, skipped {}", count, skipped);
        Ok(())
    }

    /// Load measurement results from CSV string.
    ///
    /// Rows keep their file order (the `id` column). Rows with a
    /// non-numeric result or without a station code or date are skipped.
    ///
    /// # Example CSV
    /// ```text
    /// matrix,project,code,pollutant,date,time,result,unit
    /// samplewater,SWAMP,204SAR010,Nitrate as N,2019-06-04,10:30:00,0.42,mg/L
    /// ```
    pub fn load_results(&self, csv_data: &str) -> anyhow::Result<()> {
        let conn = self.conn.borrow();
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(csv_data.as_bytes());

        let mut count = 0u32;
        let mut skipped = 0u32;
        for result in rdr.records() {
            let r = result?;
            let matrix = r.get(0).unwrap_or("").trim();
            let project = r.get(1).map(str::trim).filter(|s| !s.is_empty());
            let code = r.get(2).unwrap_or("").trim();
            let pollutant = r.get(3).unwrap_or("").trim();
            let date = r.get(4).unwrap_or("").trim();
            let time = r.get(5).unwrap_or("").trim();
            let unit = r.get(7).unwrap_or("").trim();

            let value: f64 = match r.get(6).unwrap_or("").trim().parse::<f64>() {
                Ok(v) => v,
                Err(_) => {
                    skipped += 1;
                    continue;
                }
            };

            if code.is_empty() || date.is_empty() {
                skipped += 1;
                continue;
            }

            conn.execute(
                "INSERT INTO results (matrix, project, code, pollutant, date, time, result, unit)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                params![matrix, project, code, pollutant, date, time, value, unit],
            )?;
            count += 1;
        }
        log::info!("loader: loaded {} results, skipped {}", count, skipped);
        Ok(())
    }

    /// Create a database from `stations.csv` and `results.csv` in `dir`.
    pub fn open_dir(dir: &Path) -> anyhow::Result<Self> {
        let db = Self::new()?;
        let stations = std::fs::read_to_string(dir.join(STATIONS_FILE))?;
        db.load_stations(&stations)?;
        let results = std::fs::read_to_string(dir.join(RESULTS_FILE))?;
        db.load_results(&results)?;
        Ok(db)
    }
}

#[cfg(test)]
mod tests {
    use crate::Database;

    const STATIONS: &str = "code,latitude,longitude\n\
        S1,37.5,-121.9\n\
        S2,,-120.0\n\
        ,38.0,-122.0\n\
        S3,36.1,-119.2\n";

    const RESULTS: &str = "matrix,project,code,pollutant,date,time,result,unit\n\
        samplewater,SWAMP,S1,Zinc,2020-01-02,10:00:00,3.5,ug/L\n\
        samplewater,,S1,Lead,2020-01-03,10:00:00,ND,ug/L\n\
        sediment,SWAMP,S1,Lead,2020-01-04,,1.25,mg/kg\n\
        samplewater,SWAMP,,Lead,2020-01-04,,1.0,ug/L\n";

    #[test]
    fn load_stations_skips_incomplete_rows() {
        let db = Database::new().unwrap();
        db.load_stations(STATIONS).unwrap();
        let codes: Vec<String> = db
            .query_stations()
            .unwrap()
            .into_iter()
            .map(|s| s.code)
            .collect();
        assert_eq!(codes, vec!["S1", "S3"]);
    }

    #[test]
    fn load_results_skips_non_numeric_and_orphans() {
        let db = Database::new().unwrap();
        db.load_results(RESULTS).unwrap();
        assert_eq!(db.count_results().unwrap(), 2);
    }

    #[test]
    fn load_results_keeps_blank_project_as_null() {
        let db = Database::new().unwrap();
        db.load_results(
            "matrix,project,code,pollutant,date,time,result,unit\n\
             samplewater,,S1,Zinc,2020-01-02,10:00:00,3.5,ug/L\n",
        )
        .unwrap();
        let rows = db
            .query_station_data(&wqp_core::SeriesQuery::new("S1", "", "samplewater"))
            .unwrap();
        assert_eq!(rows[0].project, None);
    }

    #[test]
    fn open_dir_reads_both_files() {
        let dir = std::env::temp_dir().join(format!("wqp-db-test-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(super::STATIONS_FILE), STATIONS).unwrap();
        std::fs::write(dir.join(super::RESULTS_FILE), RESULTS).unwrap();
        let db = Database::open_dir(&dir).unwrap();
        assert_eq!(db.query_stations().unwrap().len(), 2);
        assert_eq!(db.count_results().unwrap(), 2);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn open_dir_fails_without_files() {
        let dir = std::env::temp_dir().join("wqp-db-test-missing-dir");
        assert!(Database::open_dir(&dir).is_err());
    }
}
