//! Serde model of the simulation results file
//!
//! Shape written by the engine:
//!
//! ```json
//! { "iterations": [
//!     { "iteration": 1,
//!       "values": [
//!         { "learner_id": "Learner 1",
//!           "difficulty_level": "VeryEasy",
//!           "values": { "VeryEasy": 0.1, "Easy": 0.0, ... } } ] } ] }
//! ```
//!
//! Names stay as strings here; they are checked against the fixed
//! difficulty order when the data is reshaped.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::errors::{PlotError, Result};

/// Whole results document for one strategy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationResults {
    pub iterations: Vec<Iteration>,
}

/// One simulation step across all learners
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Iteration {
    /// 1-based step number written by the engine
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iteration: Option<u32>,
    pub values: Vec<LearnerObservation>,
}

/// A learner's Q-table snapshot after one step
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearnerObservation {
    pub learner_id: String,
    /// Level attempted in this step
    pub difficulty_level: String,
    /// Q-value per difficulty level name
    pub values: BTreeMap<String, f64>,
}

impl SimulationResults {
    /// Load a results document from disk
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(PlotError::ResultsNotFound {
                path: path.to_path_buf(),
            });
        }

        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Parse a results document
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn iteration_count(&self) -> usize {
        self.iterations.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SAMPLE: &str = r#"{
        "iterations": [
            {
                "iteration": 1,
                "values": [
                    {
                        "learner_id": "Learner 1",
                        "difficulty_level": "VeryEasy",
                        "values": { "VeryEasy": 0.25, "Easy": 0.0 }
                    }
                ]
            },
            {
                "values": []
            }
        ]
    }"#;

    #[test]
    fn test_parse_sample() {
        let results = SimulationResults::from_json(SAMPLE).unwrap();
        assert_eq!(results.iteration_count(), 2);
        assert_eq!(results.iterations[0].iteration, Some(1));
        assert_eq!(results.iterations[1].iteration, None);

        let observation = &results.iterations[0].values[0];
        assert_eq!(observation.learner_id, "Learner 1");
        assert_eq!(observation.difficulty_level, "VeryEasy");
        assert_eq!(observation.values["VeryEasy"], 0.25);
    }

    #[test]
    fn test_missing_iterations_key() {
        let err = SimulationResults::from_json(r#"{"runs": []}"#).unwrap_err();
        assert!(matches!(err, PlotError::Json(_)));
    }

    #[test]
    fn test_malformed_json() {
        assert!(SimulationResults::from_json("{ not json").is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("strategy_1_simulation_results.json");

        let err = SimulationResults::load(&path).unwrap_err();
        assert!(matches!(err, PlotError::ResultsNotFound { .. }));
    }

    #[test]
    fn test_load_from_disk() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("results.json");
        std::fs::write(&path, SAMPLE).unwrap();

        let results = SimulationResults::load(&path).unwrap();
        assert_eq!(results.iteration_count(), 2);
    }
}
