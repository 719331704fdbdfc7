//! The user-selectable emission metric.
//!
//! The dashboard exposes two numeric observation fields: total emissions
//! (thousand metric tons) and emissions per capita (metric tons). Every
//! chart derives its labels, units, and SQL column from this enum so the
//! views cannot drift out of sync with the selector.

/// One of the two selectable emission metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    /// Total CO2 emissions, thousand metric tons.
    Emissions,
    /// CO2 emissions per capita, metric tons.
    EmissionsPerCapita,
}

impl Metric {
    /// Parse the metric from the selector's option value.
    ///
    /// Returns None for unknown values; callers keep the previous metric.
    pub fn from_input(value: &str) -> Option<Self> {
        match value {
            "emissions" => Some(Metric::Emissions),
            "emissions_per_capita" => Some(Metric::EmissionsPerCapita),
            _ => None,
        }
    }

    /// The selector option value for this metric.
    pub fn as_input(&self) -> &'static str {
        match self {
            Metric::Emissions => "emissions",
            Metric::EmissionsPerCapita => "emissions_per_capita",
        }
    }

    /// The SQL column holding this metric in the `emissions` table.
    pub fn column(&self) -> &'static str {
        match self {
            Metric::Emissions => "emissions",
            Metric::EmissionsPerCapita => "emissions_per_capita",
        }
    }

    /// Short label used in tooltips ("Emissions" / "Emissions per capita").
    pub fn label(&self) -> &'static str {
        match self {
            Metric::Emissions => "Emissions",
            Metric::EmissionsPerCapita => "Emissions per capita",
        }
    }

    /// Title fragment used in chart headings.
    pub fn title_fragment(&self) -> &'static str {
        match self {
            Metric::Emissions => "emissions",
            Metric::EmissionsPerCapita => "emissions per capita",
        }
    }

    /// Unit string appended to formatted tooltip values.
    pub fn units(&self) -> &'static str {
        match self {
            Metric::Emissions => "thousand metric tons",
            Metric::EmissionsPerCapita => "metric tons",
        }
    }

    /// Unit string for the histogram's y-axis label.
    pub fn axis_units(&self) -> &'static str {
        match self {
            Metric::Emissions => "thousand metric tons",
            Metric::EmissionsPerCapita => "metric tons per capita",
        }
    }
}

impl Default for Metric {
    fn default() -> Self {
        Metric::Emissions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_input_roundtrips() {
        for metric in [Metric::Emissions, Metric::EmissionsPerCapita] {
            assert_eq!(Metric::from_input(metric.as_input()), Some(metric));
        }
    }

    #[test]
    fn from_input_rejects_unknown() {
        assert_eq!(Metric::from_input("population"), None);
        assert_eq!(Metric::from_input(""), None);
    }

    #[test]
    fn default_is_total_emissions() {
        assert_eq!(Metric::default(), Metric::Emissions);
    }

    #[test]
    fn units_distinguish_metrics() {
        assert_eq!(Metric::Emissions.units(), "thousand metric tons");
        assert_eq!(Metric::EmissionsPerCapita.units(), "metric tons");
    }

    #[test]
    fn axis_units_spell_out_per_capita() {
        assert_eq!(
            Metric::EmissionsPerCapita.axis_units(),
            "metric tons per capita"
        );
    }

    #[test]
    fn column_names_match_schema() {
        // Guard against typos: the column strings are interpolated into SQL.
        assert_eq!(Metric::Emissions.column(), "emissions");
        assert_eq!(Metric::EmissionsPerCapita.column(), "emissions_per_capita");
    }
}
