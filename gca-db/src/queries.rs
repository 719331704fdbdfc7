//! Typed query methods for retrieving emissions data from the database.
//!
//! All queries return typed structs from [`crate::models`] that can be
//! serialized to JSON for consumption by D3.js chart components. Queries
//! are pure reads: repeated calls with the same arguments against the same
//! data return identical results, which keeps redraws idempotent.

use crate::metric::Metric;
use crate::models::{CountryInfo, CountryYearValue, TrendPoint};
use crate::Database;
use rusqlite::params;

impl Database {
    /// Get the dataset's year extent as `(min_year, max_year)`.
    ///
    /// Fails if the dataset is empty; the dashboard treats that the same
    /// way as a parse failure and shows the startup error message.
    pub fn query_year_extent(&self) -> anyhow::Result<(i32, i32)> {
        let conn = self.conn.borrow();
        let (min, max): (Option<i32>, Option<i32>) = conn.query_row(
            "SELECT MIN(year), MAX(year) FROM emissions",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )?;
        match (min, max) {
            (Some(min), Some(max)) => Ok((min, max)),
            _ => anyhow::bail!("emissions dataset is empty"),
        }
    }

    /// Get every country's values for a single year (map and pie data).
    ///
    /// Returns exactly the countries that have a row for the given year,
    /// ordered by country code. Countries absent from the result fall
    /// through to the map's placeholder color.
    pub fn query_year_values(&self, year: i32) -> anyhow::Result<Vec<CountryYearValue>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT country_code, country, continent, emissions, emissions_per_capita
             FROM emissions
             WHERE year = ?1
             ORDER BY country_code",
        )?;
        let rows = stmt
            .query_map(params![year], |row| {
                Ok(CountryYearValue {
                    code: row.get(0)?,
                    country: row.get(1)?,
                    continent: row.get(2)?,
                    emissions: row.get(3)?,
                    emissions_per_capita: row.get(4)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "[GCA Debug] query: query_year_values({}) returned {} countries",
            year,
            rows.len()
        );
        Ok(rows)
    }

    /// Get the maximum value of a metric across all countries for a year.
    ///
    /// This bounds the map color scale's domain. Returns None when no
    /// country has a value for that metric in that year.
    pub fn query_metric_max(&self, year: i32, metric: Metric) -> anyhow::Result<Option<f64>> {
        let conn = self.conn.borrow();
        // metric.column() is a static identifier, not user input
        let sql = format!(
            "SELECT MAX({}) FROM emissions WHERE year = ?1",
            metric.column()
        );
        let max: Option<f64> = conn.query_row(&sql, params![year], |row| row.get(0))?;
        Ok(max)
    }

    /// Get a single country's full annual trend (histogram bar data).
    ///
    /// Ordered chronologically. Empty when the code matches no rows.
    pub fn query_country_trend(&self, code: i64) -> anyhow::Result<Vec<TrendPoint>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT year, emissions, emissions_per_capita
             FROM emissions
             WHERE country_code = ?1
             ORDER BY year",
        )?;
        let rows = stmt
            .query_map(params![code], |row| {
                Ok(TrendPoint {
                    year: row.get(0)?,
                    emissions: row.get(1)?,
                    emissions_per_capita: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "[GCA Debug] query: query_country_trend({}) returned {} years",
            code,
            rows.len()
        );
        Ok(rows)
    }

    /// Get the maximum value of a metric across a single country's trend.
    ///
    /// This bounds the histogram's y-axis domain.
    pub fn query_trend_max(&self, code: i64, metric: Metric) -> anyhow::Result<Option<f64>> {
        let conn = self.conn.borrow();
        let sql = format!(
            "SELECT MAX({}) FROM emissions WHERE country_code = ?1",
            metric.column()
        );
        let max: Option<f64> = conn.query_row(&sql, params![code], |row| row.get(0))?;
        Ok(max)
    }

    /// Get a country's metadata for chart titles, if it exists at all.
    pub fn query_country_info(&self, code: i64) -> anyhow::Result<Option<CountryInfo>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT country_code, country, continent
             FROM emissions
             WHERE country_code = ?1
             LIMIT 1",
        )?;
        let mut rows = stmt.query_map(params![code], |row| {
            Ok(CountryInfo {
                code: row.get(0)?,
                country: row.get(1)?,
                continent: row.get(2)?,
            })
        })?;
        Ok(rows.next().transpose()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_db() -> Database {
        let db = Database::new().unwrap();
        let csv = "\
Continent,Region,Country,Country Code,Year,Emissions,Emissions Per Capita
Americas,Northern America,United States,840,2010,5433057,17.5
Americas,Northern America,United States,840,2011,5301000,17.0
Europe,Western Europe,Germany,276,2010,745384,9.1
Asia,Eastern Asia,China,156,2011,9019518,6.7
Oceania,Polynesia,Tuvalu,798,2010,,
";
        db.load_emissions(csv).unwrap();
        db
    }

    #[test]
    fn year_extent_spans_dataset() {
        let db = seeded_db();
        assert_eq!(db.query_year_extent().unwrap(), (2010, 2011));
    }

    #[test]
    fn year_extent_fails_on_empty_dataset() {
        let db = Database::new().unwrap();
        assert!(db.query_year_extent().is_err());
    }

    #[test]
    fn year_values_contain_exactly_that_years_countries() {
        let db = seeded_db();

        let rows = db.query_year_values(2010).unwrap();
        let codes: Vec<i64> = rows.iter().map(|r| r.code).collect();
        assert_eq!(codes, vec![276, 798, 840], "2010 has Germany, Tuvalu, US");

        let rows = db.query_year_values(2011).unwrap();
        let codes: Vec<i64> = rows.iter().map(|r| r.code).collect();
        assert_eq!(codes, vec![156, 840], "2011 has China and US only");

        assert!(
            db.query_year_values(1999).unwrap().is_empty(),
            "Absent years yield no countries"
        );
    }

    #[test]
    fn year_values_preserve_missing_metrics() {
        let db = seeded_db();
        let rows = db.query_year_values(2010).unwrap();
        let tuvalu = rows.iter().find(|r| r.code == 798).unwrap();
        assert!(tuvalu.emissions.is_none());
        assert!(tuvalu.emissions_per_capita.is_none());
    }

    #[test]
    fn metric_max_follows_selected_metric() {
        let db = seeded_db();

        let max = db.query_metric_max(2010, Metric::Emissions).unwrap();
        assert_eq!(max, Some(5433057.0), "US dominates total emissions in 2010");

        let max = db
            .query_metric_max(2010, Metric::EmissionsPerCapita)
            .unwrap();
        assert_eq!(max, Some(17.5), "Per-capita max differs from total max");

        let max = db.query_metric_max(1999, Metric::Emissions).unwrap();
        assert!(max.is_none(), "No data for that year means no domain max");
    }

    #[test]
    fn country_trend_is_chronological() {
        let db = seeded_db();
        let trend = db.query_country_trend(840).unwrap();
        let years: Vec<i32> = trend.iter().map(|p| p.year).collect();
        assert_eq!(years, vec![2010, 2011]);
    }

    #[test]
    fn country_trend_empty_for_unknown_code() {
        let db = seeded_db();
        assert!(db.query_country_trend(999).unwrap().is_empty());
    }

    #[test]
    fn trend_max_follows_selected_metric() {
        let db = seeded_db();
        assert_eq!(
            db.query_trend_max(840, Metric::Emissions).unwrap(),
            Some(5433057.0)
        );
        assert_eq!(
            db.query_trend_max(840, Metric::EmissionsPerCapita).unwrap(),
            Some(17.5)
        );
    }

    #[test]
    fn country_info_lookup() {
        let db = seeded_db();
        let info = db.query_country_info(276).unwrap().unwrap();
        assert_eq!(info.country, "Germany");
        assert_eq!(info.continent.as_deref(), Some("Europe"));
        assert!(db.query_country_info(999).unwrap().is_none());
    }

    #[test]
    fn repeated_queries_are_idempotent() {
        let db = seeded_db();
        let first = db.query_year_values(2010).unwrap();
        let second = db.query_year_values(2010).unwrap();
        assert_eq!(first, second, "Same year, same data, same rows");

        let first = db.query_country_trend(840).unwrap();
        let second = db.query_country_trend(840).unwrap();
        assert_eq!(first, second);
    }
}
