//! Year range slider with a live label.

use crate::state::AppState;
use dioxus::prelude::*;

/// Range input bound to the selected year.
/// Bounds come from the dataset's year extent computed at load time.
#[component]
pub fn YearSlider() -> Element {
    let mut state = use_context::<AppState>();
    let min = (state.min_year)();
    let max = (state.max_year)();
    let selected = (state.selected_year)();

    let on_input = move |evt: Event<FormData>| {
        if let Ok(year) = evt.value().parse::<i32>() {
            state.selected_year.set(year);
        }
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 12px; align-items: center;",
            label {
                r#for: "year-range",
                style: "font-weight: bold;",
                "Year: "
            }
            input {
                id: "year-range",
                r#type: "range",
                min: "{min}",
                max: "{max}",
                value: "{selected}",
                style: "flex: 1; max-width: 360px;",
                oninput: on_input,
            }
            span {
                style: "min-width: 48px; font-variant-numeric: tabular-nums;",
                "{selected}"
            }
        }
    }
}
