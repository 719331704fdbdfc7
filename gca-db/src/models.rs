//! Query result model structs for emissions data.
//!
//! All structs derive `Serialize` so they can be passed to D3.js as JSON
//! from the Dioxus WASM frontend.

use serde::Serialize;

/// One country's values for a single year (map and pie chart data).
///
/// Either metric may be `None` when the source data had no usable number
/// for that field; the charts render those as "no data" placeholders.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CountryYearValue {
    /// Numeric country code, matching the GeoJSON feature id.
    pub code: i64,
    pub country: String,
    /// Continent name, or None for territories without one in the source.
    pub continent: Option<String>,
    pub emissions: Option<f64>,
    pub emissions_per_capita: Option<f64>,
}

/// One year of a single country's trend (histogram bar data).
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TrendPoint {
    pub year: i32,
    pub emissions: Option<f64>,
    pub emissions_per_capita: Option<f64>,
}

/// Country metadata for chart titles.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CountryInfo {
    pub code: i64,
    pub country: String,
    pub continent: Option<String>,
}
