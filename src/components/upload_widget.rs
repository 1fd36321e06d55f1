//! Upload Widget
//!
//! Drop/select area (or preview), the predict button and the result card.
//! State lives in `imageclass_core::UploadWidget`; this component only
//! forwards events to it and renders what it reports.

use dioxus::prelude::*;
use imageclass_core::{PredictionClient, PredictionResponse};
use imageclass_ui::{Button, ButtonVariant};

use crate::components::alert::show_alert;
use crate::components::images::{DropZone, ImagePreview};
use crate::components::ResultCard;
use crate::context::{use_prediction_client, use_widget};

#[component]
pub fn UploadWidgetView() -> Element {
    let client = use_prediction_client();
    let mut widget = use_widget();

    let predict = move |_| {
        let client = client.clone();
        spawn(async move {
            // No file, or a request already running
            let Some(ticket) = widget.write().begin_prediction() else {
                return;
            };

            let outcome = client
                .predict(ticket.file())
                .await
                .and_then(PredictionResponse::into_result);

            // Always runs: re-enables predict and hides the loader
            let alert = widget.write().finish_prediction(ticket, outcome);
            if let Some(alert) = alert {
                show_alert(alert).await;
            }
        });
    };

    let state = widget.read();
    let selected = state.selected().cloned();
    let predict_enabled = state.predict_enabled();
    let loading = state.is_loading();
    let result = state.result_view();
    drop(state);

    rsx! {
        section { class: "upload-card",
            if let Some(file) = selected {
                ImagePreview { file }
            } else {
                DropZone {}
            }

            Button {
                id: "predict-btn".to_string(),
                class: "predict-btn".to_string(),
                variant: ButtonVariant::Primary,
                disabled: !predict_enabled,
                loading,
                onclick: predict,
                "Classify Image"
            }
        }

        if let Some(view) = result {
            ResultCard { view }
        }
    }
}
