//! Utility functions and helpers

pub mod logging;
pub mod display;
pub mod units;

pub use logging::*;
pub use display::*;
pub use units::*;
