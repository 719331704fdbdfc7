//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.
//!
//! The signals have a single writer each (the app coordinator or the input
//! component that owns the control); the chart draw functions only read
//! plain value snapshots taken from them.

use dioxus::prelude::*;
use gca_db::{Database, Metric};

/// Shared selection state for the emissions dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Database instance (None until loaded)
    pub db: Signal<Option<Database>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Currently selected year
    pub selected_year: Signal<i32>,
    /// First year in the dataset
    pub min_year: Signal<i32>,
    /// Last year in the dataset
    pub max_year: Signal<i32>,
    /// Currently selected emission metric
    pub selected_metric: Signal<Metric>,
    /// Country selected by clicking the map, if any
    pub selected_country: Signal<Option<i64>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    ///
    /// The year bounds are placeholders until the dataset's extent is
    /// queried at load time.
    pub fn new() -> Self {
        Self {
            db: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            selected_year: Signal::new(0),
            min_year: Signal::new(0),
            max_year: Signal::new(0),
            selected_metric: Signal::new(Metric::default()),
            selected_country: Signal::new(None),
        }
    }
}
