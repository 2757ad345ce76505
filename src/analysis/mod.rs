//! Reshaping and smoothing of simulation results

pub mod progress;
pub mod smoothing;

pub use progress::{LearnerProgress, ProgressTable};
pub use smoothing::{moving_average, smoothed_len, DEFAULT_WINDOW};
