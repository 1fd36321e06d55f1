//! Drop Zone Component
//!
//! Drag an image onto the area, or click it to open the file picker.

use std::io;
use std::path::Path;
use std::sync::Arc;

use dioxus::html::{FileEngine, HasFileData};
use dioxus::prelude::*;
use imageclass_core::file::IMAGE_EXTENSIONS;
use imageclass_core::{ClassifyError, ClassifyResult, SelectedFile, UploadWidget};
use rfd::FileDialog;

use super::apply_selection;
use crate::context::use_widget;

/// Drop/select area shown while no file is selected
///
/// # Examples
///
/// ```rust
/// rsx! {
///     if widget.read().drop_area_visible() {
///         DropZone {}
///     }
/// }
/// ```
#[component]
pub fn DropZone() -> Element {
    let widget = use_widget();
    let dragover = widget.read().is_dragover();

    let pick_file = move |_| {
        spawn(async move {
            // Open file picker (blocking, but in spawn so UI stays responsive)
            let picked = tokio::task::spawn_blocking(move || {
                FileDialog::new()
                    .add_filter("images", IMAGE_EXTENSIONS)
                    .set_title("Select Image")
                    .pick_file()
            })
            .await;

            match picked {
                Ok(Some(path)) => {
                    let loaded = SelectedFile::load(&path).await.map(Some);
                    apply_selection(widget, loaded).await;
                }
                Ok(None) => {
                    // User cancelled
                }
                Err(e) => {
                    tracing::error!("File picker error: {:?}", e);
                }
            }
        });
    };

    let on_drop = move |evt: DragEvent| {
        evt.prevent_default();
        evt.stop_propagation();
        highlight(widget, false);

        if let Some(engine) = evt.files() {
            spawn(async move {
                let loaded = read_first_dropped(engine).await;
                apply_selection(widget, loaded).await;
            });
        }
    };

    rsx! {
        div {
            id: "upload-area",
            class: if dragover { "upload-area dragover" } else { "upload-area" },
            onclick: pick_file,
            ondragenter: move |evt: DragEvent| {
                evt.prevent_default();
                evt.stop_propagation();
                highlight(widget, true);
            },
            ondragover: move |evt: DragEvent| {
                evt.prevent_default();
                evt.stop_propagation();
                highlight(widget, true);
            },
            ondragleave: move |evt: DragEvent| {
                evt.prevent_default();
                evt.stop_propagation();
                highlight(widget, false);
            },
            ondrop: on_drop,

            div { class: "upload-icon", "🖼️" }
            p { class: "upload-title", "Drag & drop an image here" }
            p { class: "upload-hint", "or click to browse" }
        }
    }
}

/// Only writes on change; dragover fires continuously while hovering.
fn highlight(mut widget: Signal<UploadWidget>, on: bool) {
    if widget.read().is_dragover() != on {
        widget.write().set_dragover(on);
    }
}

/// Read the first dropped file; later ones are ignored.
async fn read_first_dropped(engine: Arc<dyn FileEngine>) -> ClassifyResult<Option<SelectedFile>> {
    let Some(path) = engine.files().into_iter().next() else {
        return Ok(None);
    };

    let name = Path::new(&path)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("upload")
        .to_string();

    match engine.read_file(&path).await {
        Some(bytes) => Ok(Some(SelectedFile::from_bytes(name, bytes))),
        None => Err(ClassifyError::Io(io::Error::other(format!(
            "could not read dropped file {path}"
        )))),
    }
}
