//! Theme: palette constants and the embedded global stylesheet.

pub mod colors;
mod styles;

pub use styles::GLOBAL_STYLES;
