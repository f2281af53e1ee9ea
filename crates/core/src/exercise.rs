//! Exercise measurement types.
//!
//! An exercise log entry is ephemeral: the catalog entry, a measured value
//! and a difficulty are fed straight to the reward calculator, and only the
//! resulting stat/XP deltas persist (on the user record).

use serde::{Deserialize, Serialize};

/// How an exercise's performance is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Measurement {
    /// Repetitions
    Reps,
    /// Minutes spent
    Duration,
    /// Kilograms moved
    Weight,
    /// Pages read
    Pages,
}

impl Measurement {
    /// Unit suffix for display.
    pub fn unit(&self) -> &'static str {
        match self {
            Measurement::Reps => "reps",
            Measurement::Duration => "minutes",
            Measurement::Weight => "kg",
            Measurement::Pages => "pages",
        }
    }
}

/// Self-reported difficulty of a logged exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// 0.8x rewards
    Easy,
    /// 1.0x rewards
    Normal,
    /// 1.3x rewards
    Hard,
    /// 1.5x rewards
    Extreme,
}

impl Difficulty {
    /// Reward multiplier for this difficulty.
    pub fn multiplier(&self) -> f64 {
        match self {
            Difficulty::Easy => 0.8,
            Difficulty::Normal => 1.0,
            Difficulty::Hard => 1.3,
            Difficulty::Extreme => 1.5,
        }
    }
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "normal" => Ok(Difficulty::Normal),
            "hard" => Ok(Difficulty::Hard),
            "extreme" => Ok(Difficulty::Extreme),
            other => Err(format!("unknown difficulty: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_multipliers() {
        assert_eq!(Difficulty::Easy.multiplier(), 0.8);
        assert_eq!(Difficulty::Normal.multiplier(), 1.0);
        assert_eq!(Difficulty::Hard.multiplier(), 1.3);
        assert_eq!(Difficulty::Extreme.multiplier(), 1.5);
    }

    #[test]
    fn test_difficulty_parses_case_insensitive() {
        assert_eq!("HARD".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert!("brutal".parse::<Difficulty>().is_err());
    }
}
