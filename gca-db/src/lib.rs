//! In-memory SQLite database layer for CO2 emissions data.
//!
//! This crate provides a shared database abstraction that loads the
//! emissions CSV into an in-memory SQLite database and exposes typed query
//! methods for consumption by the Dioxus/D3.js dashboard compiled to WASM.
//!
//! # Architecture
//!
//! - `Rc<RefCell<Connection>>` wrapper for interior mutability in single-threaded WASM
//! - In-memory SQLite via `rusqlite` (compiles to WASM via `wasm32-unknown-unknown`)
//! - CSV data loaded via `include_str!` at compile time in the consuming crate
//! - Typed query methods returning serializable structs for JSON export to D3.js
//!
//! # Usage
//!
//! ```rust
//! use gca_db::Database;
//!
//! let db = Database::new().unwrap();
//!
//! // Load CSV data (typically via include_str! in the consuming crate)
//! db.load_emissions("Continent,Region,Country,Country Code,Year,Emissions,Emissions Per Capita\nEurope,Western Europe,Germany,276,2010,745384,9.1\n").unwrap();
//!
//! // Query typed results
//! let (min_year, max_year) = db.query_year_extent().unwrap();
//! let year_values = db.query_year_values(min_year).unwrap();
//! ```
//!
//! # Tables
//!
//! See [`schema::create_schema`]. A single `emissions` table keyed
//! `(country_code, year)`; year extents, per-year maxima, and country
//! trends are derived via SQL aggregate queries.

pub mod schema;
mod loader;
mod queries;
pub mod metric;
pub mod models;

pub use metric::Metric;

use rusqlite::Connection;
use std::cell::RefCell;
use std::rc::Rc;

/// In-memory SQLite database wrapping the emissions dataset.
///
/// This struct is cheaply cloneable (via `Rc`) and suitable for sharing
/// across Dioxus components in a single-threaded WASM environment.
///
/// # Example
///
/// ```rust
/// use gca_db::Database;
///
/// let db = Database::new().unwrap();
/// db.load_emissions("Continent,Region,Country,Country Code,Year,Emissions,Emissions Per Capita\nEurope,Western Europe,Germany,276,2010,745384,9.1\n").unwrap();
/// let rows = db.query_year_values(2010).unwrap();
/// assert_eq!(rows.len(), 1);
/// ```
#[derive(Clone)]
pub struct Database {
    pub(crate) conn: Rc<RefCell<Connection>>,
}

impl Database {
    /// Create a new in-memory database with the schema applied.
    ///
    /// The database is empty after creation; use [`Database::load_emissions`]
    /// to populate it with CSV data.
    pub fn new() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Rc::new(RefCell::new(conn)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_creates_successfully() {
        let db = Database::new();
        assert!(db.is_ok(), "Database should create without errors");
    }

    #[test]
    fn database_is_cloneable() {
        let db = Database::new().unwrap();
        let db2 = db.clone();
        // Both should reference the same underlying connection
        db.load_emissions(
            "Continent,Region,Country,Country Code,Year,Emissions,Emissions Per Capita\nEurope,Western Europe,Germany,276,2010,745384,9.1\n",
        )
        .unwrap();
        let rows = db2.query_year_values(2010).unwrap();
        assert_eq!(rows.len(), 1, "Clone should see same data via shared Rc");
    }

    #[test]
    fn database_starts_empty() {
        let db = Database::new().unwrap();
        let rows = db.query_year_values(2010).unwrap();
        assert!(rows.is_empty(), "New database should have no emissions");
    }
}
