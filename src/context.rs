//! Widget context for imageclass.
//!
//! Provides the prediction client and the widget state to all components
//! via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In main, before launch
//! dioxus::LaunchBuilder::desktop().with_context(client).launch(App);
//!
//! // In App component
//! let widget = use_signal(UploadWidget::new);
//! use_context_provider(|| widget);
//!
//! // In child components
//! let client = use_prediction_client();
//! let widget = use_widget();
//! ```

use std::sync::Arc;

use dioxus::prelude::*;
use imageclass_core::{HttpPredictionClient, UploadWidget};

/// Shared client type for context.
///
/// Built once in `main` from the validated configuration; the base URL
/// never changes while the window is open.
pub type SharedClient = Arc<HttpPredictionClient>;

/// Hook to access the prediction client from context.
pub fn use_prediction_client() -> SharedClient {
    use_context::<SharedClient>()
}

/// Hook to access the widget state.
///
/// Returns a Signal so components re-render when the state changes.
///
/// # Example
///
/// ```ignore
/// let mut widget = use_widget();
///
/// if widget.read().predict_enabled() {
///     let ticket = widget.write().begin_prediction();
/// }
/// ```
pub fn use_widget() -> Signal<UploadWidget> {
    use_context::<Signal<UploadWidget>>()
}
