//! Typed query methods mirroring the data endpoint.

use crate::Database;
use rusqlite::params;
use wqp_core::{distinct_values, Measurement, SeriesQuery, Station};

impl Database {
    /// All stations, in load order.
    pub fn query_stations(&self) -> anyhow::Result<Vec<Station>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT code, latitude, longitude FROM stations
             ORDER BY rowid",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(Station {
                    code: row.get(0)?,
                    latitude: row.get(1)?,
                    longitude: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!("query: query_stations returned {} records", rows.len());
        Ok(rows)
    }

    /// Measurements for one station and matrix, ordered by date then time.
    ///
    /// An empty `pollutant` matches every pollutant.
    pub fn query_station_data(&self, query: &SeriesQuery) -> anyhow::Result<Vec<Measurement>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT id, matrix, project, code, pollutant, date, time, result, unit
             FROM results
             WHERE code = ?1 AND (?2 = '' OR pollutant = ?2) AND matrix = ?3
             ORDER BY date, time, id",
        )?;
        let rows = stmt
            .query_map(params![query.code, query.pollutant, query.matrix], |row| {
                Ok(Measurement {
                    id: row.get(0)?,
                    matrix: row.get(1)?,
                    project: row.get(2)?,
                    code: row.get(3)?,
                    pollutant: row.get(4)?,
                    date: row.get(5)?,
                    time: row.get(6)?,
                    result: row.get(7)?,
                    unit: row.get(8)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!(
            "query: query_station_data({}, '{}', {}) returned {} records",
            query.code,
            query.pollutant,
            query.matrix,
            rows.len()
        );
        Ok(rows)
    }

    /// Distinct pollutants measured at a station, in first-loaded order,
    /// optionally restricted to one matrix.
    pub fn query_unique_pollutants(
        &self,
        code: &str,
        matrix: Option<&str>,
    ) -> anyhow::Result<Vec<String>> {
        self.distinct_column("pollutant", "matrix", code, matrix)
    }

    /// Distinct matrices sampled at a station, in first-loaded order,
    /// optionally restricted to one pollutant.
    pub fn query_unique_matrices(
        &self,
        code: &str,
        pollutant: Option<&str>,
    ) -> anyhow::Result<Vec<String>> {
        self.distinct_column("matrix", "pollutant", code, pollutant)
    }

    /// Number of loaded result rows.
    pub fn count_results(&self) -> anyhow::Result<usize> {
        let conn = self.conn.borrow();
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM results", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    // `column` and `filter_column` are only ever the fixed names above.
    fn distinct_column(
        &self,
        column: &str,
        filter_column: &str,
        code: &str,
        filter: Option<&str>,
    ) -> anyhow::Result<Vec<String>> {
        let conn = self.conn.borrow();
        let sql = format!(
            "SELECT {column} FROM results
             WHERE code = ?1 AND (?2 IS NULL OR {filter_column} = ?2)
             GROUP BY {column}
             ORDER BY MIN(id)"
        );
        let mut stmt = conn.prepare(&sql)?;
        let values = stmt
            .query_map(params![code, filter], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        let values = distinct_values(values);
        log::debug!(
            "query: distinct {} for {} returned {} values",
            column,
            code,
            values.len()
        );
        Ok(values)
    }
}
