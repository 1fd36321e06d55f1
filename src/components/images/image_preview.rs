//! Image Preview
//!
//! Shows the selected image in place of the drop area, with a button to
//! remove it.

use dioxus::prelude::*;
use imageclass_core::SelectedFile;
use imageclass_ui::RemoveButton;

use crate::context::use_widget;

/// Preview of the selected file
///
/// Re-renders only when the file changes, so the data URI is not rebuilt
/// while a prediction runs.
#[component]
pub fn ImagePreview(
    /// The selected image
    file: SelectedFile,
) -> Element {
    let mut widget = use_widget();

    let name = file.name().to_string();
    let data_uri = file.preview_data_uri();
    let caption = match file.dimensions() {
        Some((w, h)) => format!("{} · {}×{}", name, w, h),
        None => name.clone(),
    };

    rsx! {
        div { id: "image-preview", class: "image-preview active",
            img {
                id: "preview-img",
                class: "preview-img",
                src: "{data_uri}",
                alt: "{name}",
            }
            RemoveButton {
                onclick: move |_| widget.write().remove_file(),
            }
            p { class: "preview-caption", "{caption}" }
        }
    }
}
