//! Theme for the classifier window.

mod styles;

pub use styles::GLOBAL_STYLES;
