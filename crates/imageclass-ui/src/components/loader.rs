//! Loader Component
//!
//! Spinner shown inside the predict button while a request is in flight.

use dioxus::prelude::*;

#[component]
pub fn Loader() -> Element {
    rsx! {
        span {
            class: "loader",
            role: "status",
            "aria-label": "Classifying",
        }
    }
}
