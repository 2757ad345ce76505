//! Error types for NeuroNudge Plots
//!
//! Every failure past input validation is fatal for the report loop, so the
//! variants carry enough context to explain what went wrong on exit.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for report generation
#[derive(Error, Debug)]
pub enum PlotError {
    /// Result file for a strategy does not exist
    #[error("Simulation results not found at {}", path.display())]
    ResultsNotFound { path: PathBuf },

    /// Observation for a learner outside the configured roster
    #[error("Unknown learner ID: {0}")]
    UnknownLearner(String),

    /// Difficulty name outside the fixed order
    #[error("Unknown difficulty level: {0}")]
    UnknownDifficulty(String),

    /// Strategy identifier outside 1..=4
    #[error("Unknown strategy: {0}")]
    UnknownStrategy(String),

    /// Chart drawing or PNG encoding failed
    #[error("Render error: {0}")]
    Render(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Console input errors
    #[error("Input error: {0}")]
    Input(String),

    /// JSON parsing errors
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for report operations
pub type Result<T> = std::result::Result<T, PlotError>;

impl From<anyhow::Error> for PlotError {
    fn from(err: anyhow::Error) -> Self {
        PlotError::Input(err.to_string())
    }
}
