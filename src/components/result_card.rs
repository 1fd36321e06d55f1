//! Result Card
//!
//! Predicted label, confidence badge and the sorted probability bars.

use std::rc::Rc;

use dioxus::prelude::*;
use imageclass_core::{should_scroll_into_view, ResultView};
use imageclass_ui::{ConfidenceBadge, ProbabilityList};

/// Rendered only while a result is shown; mounting it is "result displayed".
#[component]
pub fn ResultCard(view: ResultView) -> Element {
    rsx! {
        section {
            id: "result-card",
            class: "result-card",
            onmounted: move |evt: MountedEvent| {
                let element = evt.data();
                spawn(async move {
                    scroll_if_narrow(element).await;
                });
            },

            div { class: "result-header",
                span { class: "result-caption", "Prediction" }
                h2 { id: "prediction-text", class: "prediction-text", "{view.prediction}" }
                ConfidenceBadge { text: view.confidence_badge.clone() }
            }

            h3 { class: "section-header", "All probabilities" }
            ProbabilityList { rows: view.rows.clone() }
        }
    }
}

/// On narrow windows the card may be below the fold; bring it into view.
async fn scroll_if_narrow(element: Rc<MountedData>) {
    let desktop = dioxus::desktop::window();
    let width = desktop
        .window
        .inner_size()
        .to_logical::<f64>(desktop.window.scale_factor())
        .width;

    if should_scroll_into_view(width) {
        if let Err(e) = element.scroll_to(ScrollBehavior::Smooth).await {
            tracing::debug!("Could not scroll result into view: {:?}", e);
        }
    }
}
