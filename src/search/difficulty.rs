//! Difficulty levels and the search/evaluation weights they select.

use std::fmt;
use std::str::FromStr;

use crate::chess_errors::ChessError;

/// Search depth plus the two evaluation weights that shape computer play.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultyProfile {
    /// Plies searched from the root, root move included.
    pub depth: u8,
    /// Weight of center occupation and king-proximity terms.
    pub aggressiveness: f64,
    /// Weight of the uniform evaluation noise.
    pub randomness: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard];

    pub const fn profile(self) -> DifficultyProfile {
        match self {
            Difficulty::Easy => DifficultyProfile {
                depth: 2,
                aggressiveness: 0.3,
                randomness: 0.2,
            },
            Difficulty::Normal => DifficultyProfile {
                depth: 3,
                aggressiveness: 0.6,
                randomness: 0.1,
            },
            Difficulty::Hard => DifficultyProfile {
                depth: 4,
                aggressiveness: 0.9,
                randomness: 0.05,
            },
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
        };
        f.write_str(name)
    }
}

impl FromStr for Difficulty {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "normal" => Ok(Difficulty::Normal),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ChessError::UnknownDifficulty(s.to_owned())),
        }
    }
}
