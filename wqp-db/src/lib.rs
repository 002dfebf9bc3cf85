//! In-memory SQLite database of stations and measurement results.
//!
//! Answers the same four questions as the HTTP data endpoint (`/stations`,
//! `/station-data`, `/unique-pollutants`, `/unique-matrices`) from CSV data
//! loaded at startup, so the controller can run offline and in tests.
//!
//! # Usage
//!
//! ```rust
//! use wqp_db::Database;
//!
//! let db = Database::new().unwrap();
//! db.load_stations("code,latitude,longitude\nS1,37.5,-121.9\n").unwrap();
//! db.load_results(
//!     "matrix,project,code,pollutant,date,time,result,unit\n\
//!      samplewater,SWAMP,S1,Zinc,2020-01-02,10:00:00,3.5,ug/L\n",
//! )
//! .unwrap();
//!
//! let stations = db.query_stations().unwrap();
//! assert_eq!(stations.len(), 1);
//! ```
//!
//! # Tables
//!
//! See [`schema::create_schema`] for the full SQL schema.

mod endpoint;
mod loader;
mod queries;
pub mod schema;

use rusqlite::Connection;
use std::cell::RefCell;
use std::rc::Rc;

/// In-memory SQLite database of stations and results.
///
/// Cheaply cloneable (via `Rc`) and meant for a single thread, like the
/// controller that queries it.
#[derive(Clone)]
pub struct Database {
    conn: Rc<RefCell<Connection>>,
}

impl Database {
    /// Create a new in-memory database with the full schema applied.
    ///
    /// The database is empty after creation; use the `load_*` methods
    /// to populate it with CSV data.
    pub fn new() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Rc::new(RefCell::new(conn)),
        })
    }
}
