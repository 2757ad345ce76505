//! NeuroNudge Plots - Q-value diagnostics for simulation results
//!
//! Reads the per-strategy results written by the NeuroNudge simulation
//! engine and renders one figure per learner: smoothed Q-values for each
//! difficulty level next to a scatter of the levels actually attempted.
//!
//! # Architecture
//!
//! - `types`: difficulty order, strategies and the results file model
//! - `analysis`: per-learner reshaping and moving-average smoothing
//! - `render`: plotters figures and the image viewer hand-off
//! - `report`: load → reshape → render for one strategy
//! - `repl`: the interactive selection loop
//! - `cli`: arguments and TOML configuration

pub mod errors;
pub mod types;
pub mod analysis;
pub mod render;
pub mod report;
pub mod repl;
pub mod cli;

// Re-export commonly used types
pub use errors::{PlotError, Result};
pub use report::{ReportGenerator, ReportSummary};
pub use types::{DifficultyLevel, Strategy};
