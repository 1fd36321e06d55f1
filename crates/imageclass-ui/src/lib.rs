//! imageclass UI Components
//!
//! Presentation-only Dioxus components used by the upload widget. None of
//! them hold state beyond what their props give them; the widget state lives
//! in `imageclass_core::UploadWidget`.
//!
//! ## Class names
//!
//! Every component renders stable CSS class names (`btn-primary`,
//! `prob-item`, `confidence-badge`, `loader`) so the desktop app's
//! stylesheet can target them.

pub mod components;

pub use components::*;
