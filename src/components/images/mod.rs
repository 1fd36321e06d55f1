//! Image selection components
//!
//! Drop/select area and the preview that replaces it once a file is chosen.

mod drop_zone;
mod image_preview;

pub use drop_zone::DropZone;
pub use image_preview::ImagePreview;

use dioxus::prelude::*;
use imageclass_core::{ClassifyResult, SelectedFile, UploadWidget};

use crate::components::alert::show_alert;

/// Hand a freshly read file (if any) to the widget, alerting on rejection.
pub(crate) async fn apply_selection(
    mut widget: Signal<UploadWidget>,
    loaded: ClassifyResult<Option<SelectedFile>>,
) {
    let outcome = loaded.and_then(|file| widget.write().select_first(file));

    if let Err(e) = outcome {
        show_alert(e.alert()).await;
    }
}
