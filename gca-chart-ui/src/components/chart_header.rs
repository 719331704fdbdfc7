//! Dashboard header component with title and unit explanation.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    /// Dashboard title
    pub title: String,
    /// Unit explanation (e.g., "thousand metric tons")
    #[props(default = String::new())]
    pub unit_description: String,
}

/// Header showing title and optional unit description.
#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 8px;",
            h3 {
                style: "margin: 0 0 4px 0; font-size: 16px;",
                "{props.title}"
            }
            if !props.unit_description.is_empty() {
                p {
                    style: "margin: 0; font-size: 12px; color: #666;",
                    "Values: {props.unit_description}"
                }
            }
        }
    }
}
