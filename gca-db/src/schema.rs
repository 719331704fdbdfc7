//! SQL schema definitions for the in-memory SQLite database.
//!
//! Contains the CREATE TABLE statement for the emissions table.
//! The schema is applied as a single batch when the database is initialized.

/// Returns the full SQL schema as a single batch string.
///
/// This creates the following table:
///
/// - `emissions` - One row per (country, year) observation: country metadata
///   plus the two selectable metrics. Either metric may be NULL, which the
///   charts render as "no data" rather than treating as an error.
///
/// Year extents, per-year maxima, and continent shares are derived on-the-fly
/// via SQL `MIN`/`MAX`/`GROUP BY` queries against this base table.
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS emissions (
        country_code INTEGER NOT NULL,
        country TEXT NOT NULL,
        continent TEXT,
        region TEXT,
        year INTEGER NOT NULL,
        emissions REAL,
        emissions_per_capita REAL,
        PRIMARY KEY (country_code, year)
    );
    CREATE INDEX IF NOT EXISTS idx_emissions_year ON emissions(year);
    CREATE INDEX IF NOT EXISTS idx_emissions_country ON emissions(country_code);

    "#
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn schema_is_valid_sql() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema())
            .expect("Schema SQL should be valid");
    }

    #[test]
    fn schema_creates_emissions_table() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema()).unwrap();

        let count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name='emissions'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(count, 1, "Table 'emissions' should exist");
    }

    #[test]
    fn schema_creates_indexes() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema()).unwrap();

        let expected_indexes = ["idx_emissions_year", "idx_emissions_country"];

        for idx in &expected_indexes {
            let count: i64 = conn
                .query_row(
                    &format!(
                        "SELECT COUNT(*) FROM sqlite_master WHERE type='index' AND name='{}'",
                        idx
                    ),
                    [],
                    |row| row.get(0),
                )
                .unwrap();
            assert_eq!(count, 1, "Index '{}' should exist", idx);
        }
    }

    #[test]
    fn schema_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema()).unwrap();
        // Applying schema a second time should not fail due to IF NOT EXISTS.
        conn.execute_batch(create_schema())
            .expect("Applying schema twice should succeed due to IF NOT EXISTS");
    }
}
