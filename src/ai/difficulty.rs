use std::fmt;
use std::str::FromStr;

use crate::error::ParseDifficultyError;

use super::heuristic::{HeuristicMover, HeuristicWeights};
use super::mover::Mover;
use super::random::RandomMover;
use super::tactical::TacticalMover;

/// CPU strength tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Build the mover for this tier. `seed` makes its random choices
    /// reproducible.
    pub fn mover(self, seed: Option<u64>, weights: &HeuristicWeights) -> Box<dyn Mover> {
        let rng = RandomMover::from_seed(seed);
        match self {
            Difficulty::Easy => Box::new(rng),
            Difficulty::Medium => Box::new(TacticalMover::with_fallback(rng)),
            Difficulty::Hard => Box::new(HeuristicMover::with_weights(weights.clone(), rng)),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" | "1" => Ok(Difficulty::Easy),
            "medium" | "2" => Ok(Difficulty::Medium),
            "hard" | "3" => Ok(Difficulty::Hard),
            _ => Err(ParseDifficultyError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_and_menu_numbers() {
        assert_eq!("easy".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert_eq!("Medium".parse::<Difficulty>(), Ok(Difficulty::Medium));
        assert_eq!("3".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert_eq!(
            "expert".parse::<Difficulty>(),
            Err(ParseDifficultyError("expert".to_string()))
        );
    }

    #[test]
    fn display_roundtrips() {
        for difficulty in Difficulty::ALL {
            assert_eq!(difficulty.to_string().parse::<Difficulty>(), Ok(difficulty));
        }
    }

    #[test]
    fn builds_matching_mover() {
        let weights = HeuristicWeights::default();
        assert_eq!(Difficulty::Easy.mover(Some(1), &weights).name(), "Random");
        assert_eq!(Difficulty::Medium.mover(Some(1), &weights).name(), "Tactical");
        assert_eq!(Difficulty::Hard.mover(None, &weights).name(), "Heuristic");
    }
}
