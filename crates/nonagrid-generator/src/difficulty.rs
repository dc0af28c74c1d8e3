//! Difficulty levels and their removal/hint profiles.

use std::str::FromStr;

use derive_more::{Display, Error};

/// A named difficulty level.
///
/// Each level maps to a fixed [`DifficultyProfile`] controlling how many
/// cells are removed from the solution and how many hints the player may
/// take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Difficulty {
    /// 41 givens, 5 hints.
    #[display("easy")]
    Easy,
    /// 31 givens, 3 hints.
    #[display("medium")]
    Medium,
    /// 23 givens, 2 hints.
    #[display("hard")]
    Hard,
    /// 17 givens, 1 hint.
    #[display("expert")]
    Expert,
}

/// Removal count and hint budget for a difficulty level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifficultyProfile {
    /// Number of solution cells cleared when deriving the puzzle. Always
    /// less than 81, so at least one clue remains.
    pub cells_to_remove: usize,
    /// Maximum number of hints the player may take.
    pub max_hints: u32,
}

impl Difficulty {
    /// All difficulty levels, easiest first.
    pub const ALL: [Self; 4] = [Self::Easy, Self::Medium, Self::Hard, Self::Expert];

    /// Returns the removal/hint profile for this level.
    #[must_use]
    pub const fn profile(self) -> DifficultyProfile {
        match self {
            Self::Easy => DifficultyProfile {
                cells_to_remove: 40,
                max_hints: 5,
            },
            Self::Medium => DifficultyProfile {
                cells_to_remove: 50,
                max_hints: 3,
            },
            Self::Hard => DifficultyProfile {
                cells_to_remove: 58,
                max_hints: 2,
            },
            Self::Expert => DifficultyProfile {
                cells_to_remove: 64,
                max_hints: 1,
            },
        }
    }
}

/// Error returned when parsing a [`Difficulty`] from a string fails.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("unknown difficulty {_0:?}")]
pub struct ParseDifficultyError(#[error(not(source))] String);

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            "expert" => Ok(Self::Expert),
            _ => Err(ParseDifficultyError(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profiles_leave_at_least_one_clue() {
        for difficulty in Difficulty::ALL {
            let profile = difficulty.profile();
            assert!(profile.cells_to_remove < 81);
            assert!(profile.max_hints > 0);
        }
    }

    #[test]
    fn test_harder_levels_remove_more_and_hint_less() {
        for pair in Difficulty::ALL.windows(2) {
            assert!(pair[0].profile().cells_to_remove < pair[1].profile().cells_to_remove);
            assert!(pair[0].profile().max_hints > pair[1].profile().max_hints);
        }
    }

    #[test]
    fn test_display_parse_round_trip() {
        for difficulty in Difficulty::ALL {
            let name = difficulty.to_string();
            assert_eq!(name.parse::<Difficulty>(), Ok(difficulty));
        }
        assert!(matches!(
            "nightmare".parse::<Difficulty>(),
            Err(ParseDifficultyError(_))
        ));
    }
}
