//! Dropdown selector for choosing the emission metric.

use crate::state::AppState;
use dioxus::prelude::*;
use gca_db::Metric;

/// Metric dropdown selector.
/// Updates selected_metric on change; unknown option values are ignored.
#[component]
pub fn MetricSelector() -> Element {
    let mut state = use_context::<AppState>();
    let selected = (state.selected_metric)();

    let on_change = move |evt: Event<FormData>| {
        if let Some(metric) = Metric::from_input(&evt.value()) {
            state.selected_metric.set(metric);
        }
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "metric-select",
                style: "font-weight: bold; margin-right: 8px;",
                "Metric: "
            }
            select {
                id: "metric-select",
                onchange: on_change,
                for metric in [Metric::Emissions, Metric::EmissionsPerCapita] {
                    option {
                        value: metric.as_input(),
                        selected: metric == selected,
                        {metric.label()}
                    }
                }
            }
        }
    }
}
