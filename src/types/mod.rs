//! Type definitions module
//!
//! Domain vocabulary shared by loading, reshaping and rendering.

pub mod difficulty;
pub mod results;
pub mod strategy;

// Re-export commonly used types
pub use difficulty::{encode_ranks, DifficultyLevel};
pub use results::{Iteration, LearnerObservation, SimulationResults};
pub use strategy::Strategy;

/// Learner identifiers the simulation engine produces
pub const DEFAULT_LEARNERS: [&str; 6] = [
    "Learner 1",
    "Learner 2",
    "Learner 3",
    "Learner 4",
    "Learner 5",
    "Learner 6",
];
