//! Difficulty levels for the computer opponent.

use serde::{Deserialize, Serialize};

/// How often the computer plays its best move.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Difficulty {
    /// Best move half the time, otherwise any legal move.
    #[default]
    Easy,
    /// Best move nine times in ten.
    Medium,
    /// Always the best move.
    Hard,
}

impl Difficulty {
    /// Probability of taking the minimax-optimal move.
    pub fn optimal_probability(self) -> f64 {
        match self {
            Difficulty::Easy => 0.50,
            Difficulty::Medium => 0.90,
            Difficulty::Hard => 1.0,
        }
    }

    /// Returns true if this level never consults the random source.
    pub fn is_deterministic(self) -> bool {
        self == Difficulty::Hard
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("hard".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert_eq!("Medium".parse::<Difficulty>().unwrap(), Difficulty::Medium);
        assert!("impossible".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_probabilities_increase_with_level() {
        let probs: Vec<f64> = Difficulty::iter().map(|d| d.optimal_probability()).collect();
        assert_eq!(probs, vec![0.50, 0.90, 1.0]);
        assert_eq!(Difficulty::default(), Difficulty::Easy);
    }
}
