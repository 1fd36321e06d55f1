//! Native alert dialogs
//!
//! Selection and prediction failures are reported with a blocking message
//! box, run off the UI thread so the window keeps repainting.

use imageclass_core::Alert;
use rfd::{MessageButtons, MessageDialog, MessageLevel};

/// Show `alert` and wait until the user dismisses it.
pub async fn show_alert(alert: Alert) {
    tracing::warn!("Alert ({:?}): {}", alert.kind, alert.message);

    let shown = tokio::task::spawn_blocking(move || {
        MessageDialog::new()
            .set_level(MessageLevel::Warning)
            .set_title(alert.title())
            .set_description(alert.message)
            .set_buttons(MessageButtons::Ok)
            .show()
    })
    .await;

    if let Err(e) = shown {
        tracing::error!("Alert dialog error: {:?}", e);
    }
}
