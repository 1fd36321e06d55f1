//! imageclass Core Library
//!
//! Everything behind the image classification widget that does not need a
//! window: the selected file, the prediction client, the wire format and the
//! widget state machine.
//!
//! ## Overview
//!
//! The user selects (or drops) one image. The widget previews it and, on
//! request, uploads it as a multipart `POST {api_url}/predict`. The service
//! answers with a label, a confidence string and per-label probabilities,
//! which are rendered as bars sorted by score.
//!
//! ## Quick Start
//!
//! ```ignore
//! use imageclass_core::{ClientConfig, HttpPredictionClient, SelectedFile, UploadWidget};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = HttpPredictionClient::new(ClientConfig::new("http://localhost:5000")?)?;
//!     let mut widget = UploadWidget::new();
//!
//!     widget.select_file(SelectedFile::load("cat.jpg").await?)?;
//!     if let Some(alert) = widget.predict(&client).await {
//!         eprintln!("{}", alert.message);
//!     }
//!
//!     if let Some(view) = widget.result_view() {
//!         for row in view.rows {
//!             println!("{} {}", row.label, row.value_text());
//!         }
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod file;
pub mod logging;
pub mod types;
pub mod widget;

// Re-exports
pub use client::{HttpPredictionClient, PredictionClient};
pub use config::{ClientConfig, DEFAULT_API_URL};
pub use error::{Alert, AlertKind, ClassifyError, ClassifyResult};
pub use file::SelectedFile;
pub use types::{
    should_scroll_into_view, PredictionResponse, PredictionResult, ProbabilityRow, ResultView,
};
pub use widget::{PredictionTicket, UploadWidget, WidgetPhase};
