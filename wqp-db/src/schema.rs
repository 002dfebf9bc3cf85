//! SQL schema definitions for the in-memory SQLite database.

/// Returns the full SQL schema as a single batch string.
///
/// - `stations` - Station code and coordinates
/// - `results` - One measurement result per row, in load order (`id`)
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS stations (
        code TEXT PRIMARY KEY,
        latitude REAL NOT NULL,
        longitude REAL NOT NULL
    );

    CREATE TABLE IF NOT EXISTS results (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        matrix TEXT NOT NULL,
        project TEXT,
        code TEXT NOT NULL,
        pollutant TEXT NOT NULL,
        date TEXT NOT NULL,
        time TEXT NOT NULL DEFAULT '',
        result REAL NOT NULL,
        unit TEXT NOT NULL DEFAULT ''
    );
    CREATE INDEX IF NOT EXISTS idx_results_code ON results(code);
    CREATE INDEX IF NOT EXISTS idx_results_selection ON results(code, matrix, pollutant);
    "#
}
