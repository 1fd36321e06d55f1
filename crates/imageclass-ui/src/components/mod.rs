//! Reusable UI components for the classifier widget

mod button;
mod confidence_badge;
mod loader;
mod probability_bar;

pub use button::*;
pub use confidence_badge::*;
pub use loader::*;
pub use probability_bar::*;
