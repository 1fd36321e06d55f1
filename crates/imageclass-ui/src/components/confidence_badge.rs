//! Confidence Badge Component
//!
//! Pill next to the predicted label, e.g. "72.30% Confidence".

use dioxus::prelude::*;

/// Properties for the ConfidenceBadge component
#[derive(Clone, PartialEq, Props)]
pub struct ConfidenceBadgeProps {
    /// Full badge text
    pub text: String,
}

/// Displays the service's confidence string
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     ConfidenceBadge { text: view.confidence_badge.clone() }
/// }
/// ```
#[component]
pub fn ConfidenceBadge(props: ConfidenceBadgeProps) -> Element {
    rsx! {
        span { id: "confidence-badge", class: "confidence-badge", "{props.text}" }
    }
}
