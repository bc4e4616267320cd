//! CLI library components for the number plotter.

pub mod input;
pub mod logging;
