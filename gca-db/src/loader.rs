//! CSV data loading for populating the in-memory SQLite database.
//!
//! The emissions CSV is parsed from a string slice (typically embedded via
//! `include_str!` in the consuming crate) and inserted row by row.
//!
//! # CSV Format
//!
//! With headers: `Continent,Region,Country,Country Code,Year,Emissions,Emissions Per Capita`
//!
//! A non-numeric or empty metric field is stored as NULL ("no data"); rows
//! without a usable country code or year are skipped entirely.

use crate::Database;
use rusqlite::params;

impl Database {
    /// Load emission observations from CSV string.
    ///
    /// # Example CSV
    /// ```text
    /// Continent,Region,Country,Country Code,Year,Emissions,Emissions Per Capita
    /// Americas,Northern America,United States,840,2010,5433057,17.5
    /// Europe,Western Europe,Germany,276,2010,745384,9.1
    /// ```
    pub fn load_emissions(&self, csv_data: &str) -> anyhow::Result<()> {
        let conn = self.conn.borrow();
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(csv_data.as_bytes());

        let mut count = 0u32;
        let mut skipped = 0u32;
        for result in rdr.records() {
            let r = result?;
            let continent = r.get(0).unwrap_or("").trim();
            let region = r.get(1).unwrap_or("").trim();
            let country = r.get(2).unwrap_or("").trim();
            let code: Option<i64> = r.get(3).and_then(|s| s.trim().parse().ok());
            let year: Option<i64> = r.get(4).and_then(|s| s.trim().parse().ok());
            // Missing metric values become NULL, not errors
            let emissions: Option<f64> = r.get(5).and_then(|s| s.trim().parse().ok());
            let per_capita: Option<f64> = r.get(6).and_then(|s| s.trim().parse().ok());

            let (Some(code), Some(year)) = (code, year) else {
                skipped += 1;
                continue;
            };
            if country.is_empty() {
                skipped += 1;
                continue;
            }

            conn.execute(
                "INSERT OR REPLACE INTO emissions
                 (country_code, country, continent, region, year, emissions, emissions_per_capita)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    code,
                    country,
                    if continent.is_empty() { None } else { Some(continent) },
                    if region.is_empty() { None } else { Some(region) },
                    year,
                    emissions,
                    per_capita
                ],
            )?;
            count += 1;
        }
        log::info!(
            "[GCA Debug] loader: Loaded {} emission rows, skipped {} invalid",
            count,
            skipped
        );
        Ok(())
    }
}
