//! Simulation strategies and where their results live

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::errors::PlotError;

/// Q-learning strategy a result file was produced with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Strategy 1: plain Q-learning
    BaseQLearning,
    /// Strategy 2: Q-learning with mastery thresholds
    MasteryThresholds,
    /// Strategy 3: decaying Q-values for reinforcement
    DecayingQValues,
    /// Strategy 4: decaying Q-values plus ASD trait sensitivity
    TraitSensitivity,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::BaseQLearning,
        Strategy::MasteryThresholds,
        Strategy::DecayingQValues,
        Strategy::TraitSensitivity,
    ];

    /// Console token and file-name identifier (1..=4)
    pub fn id(self) -> u8 {
        match self {
            Strategy::BaseQLearning => 1,
            Strategy::MasteryThresholds => 2,
            Strategy::DecayingQValues => 3,
            Strategy::TraitSensitivity => 4,
        }
    }

    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.id() == id)
    }

    /// Human-readable name
    pub fn label(self) -> &'static str {
        match self {
            Strategy::BaseQLearning => "Base Q-learning",
            Strategy::MasteryThresholds => "Mastery thresholds",
            Strategy::DecayingQValues => "Decaying Q-values",
            Strategy::TraitSensitivity => "ASD trait sensitivity",
        }
    }

    /// File name the simulation engine writes for this strategy
    pub fn results_file_name(self) -> String {
        format!("strategy_{}_simulation_results.json", self.id())
    }

    /// Full path of the results file under `input_dir`
    pub fn results_path(self, input_dir: &Path) -> PathBuf {
        input_dir.join(self.results_file_name())
    }

    /// Output image file name for one learner
    pub fn image_file_name(self, learner_id: &str) -> String {
        format!("{}_progress_strategy_{}.png", learner_id, self.id())
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for Strategy {
    type Err = PlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Strategy::BaseQLearning),
            "2" => Ok(Strategy::MasteryThresholds),
            "3" => Ok(Strategy::DecayingQValues),
            "4" => Ok(Strategy::TraitSensitivity),
            _ => Err(PlotError::UnknownStrategy(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_results_paths_are_templated() {
        let dir = Path::new("./engine");
        assert_eq!(
            Strategy::BaseQLearning.results_path(dir),
            PathBuf::from("./engine/strategy_1_simulation_results.json")
        );
        assert_eq!(
            Strategy::TraitSensitivity.results_path(dir),
            PathBuf::from("./engine/strategy_4_simulation_results.json")
        );
    }

    #[test]
    fn test_results_paths_are_distinct() {
        let dir = Path::new("./engine");
        let paths: HashSet<PathBuf> = Strategy::ALL.iter().map(|s| s.results_path(dir)).collect();
        assert_eq!(paths.len(), 4);
    }

    #[test]
    fn test_image_file_name() {
        assert_eq!(
            Strategy::DecayingQValues.image_file_name("Learner 2"),
            "Learner 2_progress_strategy_3.png"
        );
    }

    #[test]
    fn test_parse_tokens() {
        for (token, expected) in ["1", "2", "3", "4"].iter().zip(Strategy::ALL) {
            assert_eq!(token.parse::<Strategy>().unwrap(), expected);
        }
        assert!("0".parse::<Strategy>().is_err());
        assert!("5".parse::<Strategy>().is_err());
        assert!("one".parse::<Strategy>().is_err());
        assert!("01".parse::<Strategy>().is_err());
        assert_eq!(" 2 ".parse::<Strategy>().unwrap(), Strategy::MasteryThresholds);
    }

    #[test]
    fn test_display_is_id() {
        assert_eq!(Strategy::MasteryThresholds.to_string(), "2");
    }
}
