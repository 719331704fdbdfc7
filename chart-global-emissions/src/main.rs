//! Global CO2 Emissions Dashboard
//!
//! An interactive dataset explorer with three linked panels:
//! - A choropleth world map colored by the selected metric and year
//! - A pie chart of each country's share of total emissions, by continent
//! - A histogram of one country's annual trend (click a country to select)
//!
//! Shared selection state (year, metric, selected country) lives in
//! `AppState` signals; each input control writes one signal and the chart
//! effects below re-run only when a signal they read changes. Changing the
//! year redraws the map and pie but only re-highlights the histogram's
//! active bar.
//!
//! Data flow:
//! 1. `build.rs` copies `emissions.csv` and `world-countries.geo.json`
//!    into `OUT_DIR`.
//! 2. `include_str!` embeds both into the WASM binary.
//! 3. On mount, the CSV is loaded into an in-memory SQLite database and
//!    the GeoJSON is validated and handed to the D3 bridge.
//! 4. Effects query typed rows and render via `js_bridge`.

use dioxus::prelude::*;
use gca_chart_ui::components::{
    ChartContainer, ChartHeader, ErrorDisplay, LoadingSpinner, MetricSelector, YearSlider,
};
use gca_chart_ui::js_bridge;
use gca_chart_ui::state::AppState;
use gca_db::{Database, Metric};

/// Yearly emission values per country.
const EMISSIONS_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/emissions.csv"));
/// World country boundaries, feature id = country code.
const WORLD_GEOJSON: &str = include_str!(concat!(env!("OUT_DIR"), "/world-countries.geo.json"));

/// Chart container DOM element IDs used by D3.js to render into.
const MAP_CHART_ID: &str = "emissions-map-chart";
const PIE_CHART_ID: &str = "emissions-pie-chart";
const TREND_CHART_ID: &str = "emissions-trend-chart";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("global-emissions-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Initialize database and geometry on mount
    use_effect(move || {
        if let Err(e) = serde_json::from_str::<serde_json::Value>(WORLD_GEOJSON) {
            log::error!("Failed to parse world geometry: {}", e);
            state
                .error_msg
                .set(Some(format!("Failed to parse world geometry: {}", e)));
            state.loading.set(false);
            return;
        }

        match Database::new() {
            Ok(db) => {
                if let Err(e) = db.load_emissions(EMISSIONS_CSV) {
                    log::error!("Failed to load emissions: {}", e);
                    state
                        .error_msg
                        .set(Some(format!("Failed to load emission data: {}", e)));
                    state.loading.set(false);
                    return;
                }

                match db.query_year_extent() {
                    Ok((min_year, max_year)) => {
                        state.min_year.set(min_year);
                        state.max_year.set(max_year);
                        state.selected_year.set(min_year);
                    }
                    Err(e) => {
                        log::error!("Dataset has no years: {}", e);
                        state
                            .error_msg
                            .set(Some(format!("Emission data is empty: {}", e)));
                        state.loading.set(false);
                        return;
                    }
                }

                state.db.set(Some(db));
                state.loading.set(false);
            }
            Err(e) => {
                state
                    .error_msg
                    .set(Some(format!("Database initialization failed: {}", e)));
                state.loading.set(false);
            }
        }
    });

    // One-time bridge setup once data is ready: chart scripts, geometry,
    // and the map click handler that toggles the selected country.
    use_effect(move || {
        if (state.loading)() || (state.error_msg)().is_some() {
            return;
        }
        js_bridge::init_charts();
        js_bridge::set_world_geometry(WORLD_GEOJSON);
        js_bridge::on_country_click(move |code| {
            state.selected_country.set(code);
        });
    });

    // Map + pie redraw on year or metric change. The selected country only
    // affects the map's active outline, so it is peeked, not subscribed.
    use_effect(move || {
        if (state.loading)() || (state.error_msg)().is_some() {
            return;
        }
        let db = match &*state.db.read() {
            Some(db) => db.clone(),
            None => return,
        };
        let year = (state.selected_year)();
        let metric = (state.selected_metric)();
        let selected = *state.selected_country.peek();

        draw_map(&db, year, metric, selected);
        draw_pie(&db, year, metric);
    });

    // Histogram redraw on country or metric change.
    use_effect(move || {
        if (state.loading)() || (state.error_msg)().is_some() {
            return;
        }
        let db = match &*state.db.read() {
            Some(db) => db.clone(),
            None => return,
        };
        let country = (state.selected_country)();
        let metric = (state.selected_metric)();
        let min_year = *state.min_year.peek();
        let max_year = *state.max_year.peek();
        let selected_year = *state.selected_year.peek();

        draw_trend(&db, country, metric, min_year, max_year, selected_year);
    });

    // Year change only re-highlights the histogram's active bar.
    use_effect(move || {
        let year = (state.selected_year)();
        if (state.loading)() {
            return;
        }
        js_bridge::highlight_histogram_year(TREND_CHART_ID, year);
    });

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            ChartHeader {
                title: "Global CO2 Emissions".to_string(),
                unit_description: "thousand metric tons (total) or metric tons (per capita)".to_string(),
            }

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            } else if (state.loading)() {
                LoadingSpinner {}
            } else {
                div {
                    style: "display: flex; gap: 16px; flex-wrap: wrap; align-items: center;",
                    YearSlider {}
                    MetricSelector {}
                }

                div {
                    style: "display: flex; gap: 16px; flex-wrap: wrap;",

                    div {
                        style: "flex: 1 1 480px;",
                        ChartContainer {
                            id: MAP_CHART_ID.to_string(),
                            loading: false,
                            min_height: 440,
                        }
                    }

                    div {
                        style: "flex: 1 1 400px;",
                        ChartContainer {
                            id: PIE_CHART_ID.to_string(),
                            loading: false,
                            min_height: 300,
                        }
                        ChartContainer {
                            id: TREND_CHART_ID.to_string(),
                            loading: false,
                            min_height: 300,
                        }
                    }
                }

                div {
                    style: "margin-top: 12px; padding: 8px 12px; background: #F5F5F5; border-radius: 4px; font-size: 12px; color: #616161; border: 1px solid #E0E0E0;",
                    "Click a country on the map to see its annual trend. Countries shown in grey have no data for the selected year."
                }
            }
        }
    }
}

/// Render the choropleth map for one year and metric.
fn draw_map(db: &Database, year: i32, metric: Metric, selected: Option<i64>) {
    let rows = match db.query_year_values(year) {
        Ok(r) => r,
        Err(e) => {
            log::warn!("No map data for {}: {}", year, e);
            return;
        }
    };
    let domain_max = db
        .query_metric_max(year, metric)
        .unwrap_or(None)
        .unwrap_or(0.0);

    let data_json = serde_json::to_string(&rows).unwrap_or_default();
    let config_json = serde_json::to_string(&serde_json::json!({
        "metric": metric.column(),
        "metricLabel": metric.label(),
        "units": metric.units(),
        "domainMax": domain_max,
        "selectedCode": selected,
        "title": format!("Carbon dioxide {}, {}", metric.title_fragment(), year),
        "height": 430,
    }))
    .unwrap_or_default();

    js_bridge::render_choropleth_map(MAP_CHART_ID, &data_json, &config_json);
}

/// Render the pie chart of emission shares for one year.
fn draw_pie(db: &Database, year: i32, metric: Metric) {
    let rows = match db.query_year_values(year) {
        Ok(r) => r,
        Err(e) => {
            log::warn!("No pie data for {}: {}", year, e);
            return;
        }
    };

    let data_json = serde_json::to_string(&rows).unwrap_or_default();
    let config_json = serde_json::to_string(&serde_json::json!({
        "metric": metric.column(),
        "metricLabel": metric.label(),
        "units": metric.units(),
        "title": format!("Total emissions by continent and region, {}", year),
        "height": 300,
    }))
    .unwrap_or_default();

    js_bridge::render_pie_chart(PIE_CHART_ID, &data_json, &config_json);
}

/// Render the annual trend histogram for the selected country.
///
/// With no selection the bars animate out and the title reverts to the
/// default prompt. The selected year travels in the config so entering
/// bars get the highlight fill in the same data join; the separate
/// `highlight_histogram_year` call only serves later year changes.
fn draw_trend(
    db: &Database,
    country: Option<i64>,
    metric: Metric,
    min_year: i32,
    max_year: i32,
    selected_year: i32,
) {
    let (rows, title, domain_max) = match country {
        Some(code) => {
            let rows = match db.query_country_trend(code) {
                Ok(r) => r,
                Err(e) => {
                    log::warn!("No trend data for {}: {}", code, e);
                    return;
                }
            };
            let name = db
                .query_country_info(code)
                .unwrap_or(None)
                .map(|info| info.country)
                .unwrap_or_else(|| "No data".to_string());
            let domain_max = db
                .query_trend_max(code, metric)
                .unwrap_or(None)
                .unwrap_or(0.0);
            (rows, format!("Carbon dioxide emissions, {}", name), domain_max)
        }
        None => (
            Vec::new(),
            "Click on a country to see annual trends".to_string(),
            0.0,
        ),
    };

    let data_json = serde_json::to_string(&rows).unwrap_or_default();
    let config_json =
        trend_chart_config(metric, domain_max, min_year, max_year, selected_year, &title);

    js_bridge::render_histogram(TREND_CHART_ID, &data_json, &config_json);
}

/// Build the histogram's config JSON.
///
/// A single-year dataset would give the x-scale a zero-span domain and
/// degenerate bar widths, so the upper bound is clamped to at least one
/// year above the lower bound.
fn trend_chart_config(
    metric: Metric,
    domain_max: f64,
    min_year: i32,
    max_year: i32,
    selected_year: i32,
    title: &str,
) -> String {
    let max_year = max_year.max(min_year + 1);
    serde_json::to_string(&serde_json::json!({
        "metric": metric.column(),
        "metricLabel": metric.label(),
        "units": metric.units(),
        "axisLabel": format!("CO2 emissions, {}", metric.axis_units()),
        "domainMax": domain_max,
        "minYear": min_year,
        "maxYear": max_year,
        "selectedYear": selected_year,
        "title": title,
        "height": 300,
    }))
    .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trend_config_carries_selected_year() {
        // Fresh country selections render with the selected year's bar
        // already highlighted; the year must be part of the render config,
        // not a separate later call.
        let config = trend_chart_config(Metric::Emissions, 100.0, 2008, 2012, 2010, "Germany");
        let parsed: serde_json::Value = serde_json::from_str(&config).unwrap();
        assert_eq!(parsed["selectedYear"], 2010);
        assert_eq!(parsed["minYear"], 2008);
        assert_eq!(parsed["maxYear"], 2012);
    }

    #[test]
    fn trend_config_clamps_single_year_domain() {
        let config = trend_chart_config(Metric::Emissions, 100.0, 2010, 2010, 2010, "Germany");
        let parsed: serde_json::Value = serde_json::from_str(&config).unwrap();
        assert_eq!(
            parsed["maxYear"], 2011,
            "Zero-span year domains would degenerate the bar width"
        );
    }

    #[test]
    fn trend_config_tracks_metric() {
        let config =
            trend_chart_config(Metric::EmissionsPerCapita, 17.5, 2008, 2012, 2008, "United States");
        let parsed: serde_json::Value = serde_json::from_str(&config).unwrap();
        assert_eq!(parsed["metric"], "emissions_per_capita");
        assert_eq!(parsed["axisLabel"], "CO2 emissions, metric tons per capita");
    }
}
