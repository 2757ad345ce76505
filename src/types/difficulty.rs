//! Difficulty levels and their rank encoding
//!
//! The eight levels are ordered from easiest to hardest. The position in
//! that order is both the chart row and the numeric encoding used for the
//! attempted-difficulty scatter.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::PlotError;

/// A qualitative tier of lesson difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DifficultyLevel {
    VeryEasy,
    Easy,
    Medium,
    Hard,
    VeryHard,
    Expert,
    Master,
    Grandmaster,
}

impl DifficultyLevel {
    /// All levels, easiest first
    pub const ALL: [DifficultyLevel; 8] = [
        DifficultyLevel::VeryEasy,
        DifficultyLevel::Easy,
        DifficultyLevel::Medium,
        DifficultyLevel::Hard,
        DifficultyLevel::VeryHard,
        DifficultyLevel::Expert,
        DifficultyLevel::Master,
        DifficultyLevel::Grandmaster,
    ];

    /// Number of levels in the fixed order
    pub const COUNT: usize = Self::ALL.len();

    /// Position in the fixed order (VeryEasy = 0, Grandmaster = 7)
    pub fn rank(self) -> usize {
        self as usize
    }

    /// Inverse of [`rank`](Self::rank)
    pub fn from_rank(rank: usize) -> Option<Self> {
        Self::ALL.get(rank).copied()
    }

    /// Name as written by the simulation engine
    pub fn as_str(self) -> &'static str {
        match self {
            DifficultyLevel::VeryEasy => "VeryEasy",
            DifficultyLevel::Easy => "Easy",
            DifficultyLevel::Medium => "Medium",
            DifficultyLevel::Hard => "Hard",
            DifficultyLevel::VeryHard => "VeryHard",
            DifficultyLevel::Expert => "Expert",
            DifficultyLevel::Master => "Master",
            DifficultyLevel::Grandmaster => "Grandmaster",
        }
    }
}

impl fmt::Display for DifficultyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DifficultyLevel {
    type Err = PlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| PlotError::UnknownDifficulty(s.to_string()))
    }
}

/// Encode a sequence of attempted levels as ranks
pub fn encode_ranks(levels: &[DifficultyLevel]) -> Vec<usize> {
    levels.iter().map(|level| level.rank()).collect()
}
