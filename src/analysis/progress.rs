//! Reshape simulation results into per-learner series
//!
//! Each learner gets one Q-value series per difficulty level and one
//! series of attempted levels, both in iteration order.

use std::collections::BTreeMap;

use crate::analysis::smoothing::moving_average;
use crate::errors::{PlotError, Result};
use crate::types::{encode_ranks, DifficultyLevel, SimulationResults};

/// Q-value history and attempted levels for one learner
#[derive(Debug, Clone, PartialEq)]
pub struct LearnerProgress {
    learner_id: String,
    q_values: BTreeMap<DifficultyLevel, Vec<f64>>,
    attempted: Vec<DifficultyLevel>,
}

impl LearnerProgress {
    /// Empty progress with a series slot for every level
    pub fn new(learner_id: impl Into<String>) -> Self {
        Self {
            learner_id: learner_id.into(),
            q_values: DifficultyLevel::ALL
                .iter()
                .map(|&level| (level, Vec::new()))
                .collect(),
            attempted: Vec::new(),
        }
    }

    pub fn learner_id(&self) -> &str {
        &self.learner_id
    }

    /// Raw Q-values observed for `level`
    pub fn series(&self, level: DifficultyLevel) -> &[f64] {
        self.q_values
            .get(&level)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Q-values for `level` after a moving average of `window`
    pub fn smoothed(&self, level: DifficultyLevel, window: usize) -> Vec<f64> {
        moving_average(self.series(level), window)
    }

    /// Levels attempted, one per observation
    pub fn attempted(&self) -> &[DifficultyLevel] {
        &self.attempted
    }

    /// Attempted levels encoded as ranks in the fixed order
    pub fn attempted_ranks(&self) -> Vec<usize> {
        encode_ranks(&self.attempted)
    }

    /// Number of observations recorded for this learner
    pub fn observation_count(&self) -> usize {
        self.attempted.len()
    }

    fn record(&mut self, attempted: DifficultyLevel, values: &BTreeMap<String, f64>) -> Result<()> {
        self.attempted.push(attempted);
        for (name, &q_value) in values {
            let level: DifficultyLevel = name.parse()?;
            self.q_values.entry(level).or_default().push(q_value);
        }
        Ok(())
    }
}

/// Progress for every learner on the roster, in roster order
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressTable {
    learners: Vec<LearnerProgress>,
}

impl ProgressTable {
    /// Reshape `results` for the learners in `roster`
    ///
    /// Learners on the roster with no observations keep empty series.
    /// An observation for a learner not on the roster, or naming an unknown
    /// difficulty level, is an error.
    pub fn from_results<S: AsRef<str>>(results: &SimulationResults, roster: &[S]) -> Result<Self> {
        let mut learners: Vec<LearnerProgress> = roster
            .iter()
            .map(|id| LearnerProgress::new(id.as_ref()))
            .collect();

        for iteration in &results.iterations {
            for observation in &iteration.values {
                let progress = learners
                    .iter_mut()
                    .find(|p| p.learner_id == observation.learner_id)
                    .ok_or_else(|| PlotError::UnknownLearner(observation.learner_id.clone()))?;

                let attempted: DifficultyLevel = observation.difficulty_level.parse()?;
                progress.record(attempted, &observation.values)?;
            }
        }

        Ok(Self { learners })
    }

    pub fn learners(&self) -> &[LearnerProgress] {
        &self.learners
    }

    pub fn get(&self, learner_id: &str) -> Option<&LearnerProgress> {
        self.learners.iter().find(|p| p.learner_id == learner_id)
    }

    pub fn len(&self) -> usize {
        self.learners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.learners.is_empty()
    }
}
