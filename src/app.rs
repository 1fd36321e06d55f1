use dioxus::prelude::*;
use imageclass_core::UploadWidget;

use crate::components::UploadWidgetView;
use crate::context::use_prediction_client;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles and the widget state, then renders the single
/// upload widget.
#[component]
pub fn App() -> Element {
    let client = use_prediction_client();

    // Widget state shared by the drop area, preview, button and result card
    let widget: Signal<UploadWidget> = use_signal(UploadWidget::new);
    use_context_provider(|| widget);

    let endpoint = client.config().predict_url().to_string();

    rsx! {
        style { {GLOBAL_STYLES} }
        main { class: "container",
            header { class: "app-header",
                h1 { class: "page-title", "Image Classifier" }
                p { class: "tagline", "Drop an image to see what the model thinks it is" }
            }

            UploadWidgetView {}

            footer { class: "app-footer",
                span { class: "endpoint", title: "Prediction endpoint", "{endpoint}" }
            }
        }
    }
}
