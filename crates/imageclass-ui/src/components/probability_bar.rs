//! Probability Bar Components
//!
//! One row per label: name, a bar proportional to the score and the score
//! with one decimal place.

use dioxus::prelude::*;
use imageclass_core::ProbabilityRow;

/// Properties for the ProbabilityBar component
#[derive(Clone, PartialEq, Props)]
pub struct ProbabilityBarProps {
    /// The row to draw
    pub row: ProbabilityRow,
    /// Highlight the winning row
    #[props(default = false)]
    pub top: bool,
}

/// A single labelled bar
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     ProbabilityBar { row: ProbabilityRow::new("cat", 72.3), top: true }
/// }
/// ```
#[component]
pub fn ProbabilityBar(props: ProbabilityBarProps) -> Element {
    let width = props.row.bar_width();
    let value = props.row.value_text();

    rsx! {
        div { class: if props.top { "prob-item prob-item--top" } else { "prob-item" },
            div { class: "prob-label", "{props.row.label}" }
            div { class: "prob-bar-container",
                div {
                    class: "prob-bar",
                    style: "width: {width};",
                    role: "meter",
                    "aria-valuemin": "0",
                    "aria-valuemax": "100",
                    "aria-valuenow": "{props.row.score}",
                }
            }
            div { class: "prob-value", "{value}" }
        }
    }
}

/// Properties for the ProbabilityList component
#[derive(Clone, PartialEq, Props)]
pub struct ProbabilityListProps {
    /// Rows, already sorted by descending score
    pub rows: Vec<ProbabilityRow>,
}

/// The whole probability list, in the order given
#[component]
pub fn ProbabilityList(props: ProbabilityListProps) -> Element {
    rsx! {
        div { id: "prob-list", class: "prob-list",
            for (index, row) in props.rows.iter().enumerate() {
                ProbabilityBar {
                    key: "{row.label}",
                    row: row.clone(),
                    top: index == 0,
                }
            }
        }
    }
}
