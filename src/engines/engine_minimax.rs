//! Difficulty-driven minimax engine.
//!
//! Wraps the alpha-beta search and the weighted evaluator. Options:
//! `Difficulty` (easy/normal/hard), `Seed` (u64, reproducible noise) and
//! `Jitter` (`on`/`off`).

use tracing::debug;

use crate::chess_errors::{ChessError, ChessResult};
use crate::engines::engine_trait::Engine;
use crate::game_state::chess_types::*;
use crate::search::board_scoring::{Evaluator, JitterMode};
use crate::search::difficulty::Difficulty;
use crate::search::minimax::{SearchResult, Searcher};

pub struct MinimaxEngine {
    difficulty: Difficulty,
    jitter: JitterMode,
    evaluator: Evaluator,
}

impl MinimaxEngine {
    pub fn new(difficulty: Difficulty, jitter: JitterMode) -> Self {
        Self {
            difficulty,
            jitter,
            evaluator: Evaluator::new(jitter),
        }
    }

    #[inline]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[inline]
    pub fn jitter(&self) -> JitterMode {
        self.jitter
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    pub fn set_jitter(&mut self, jitter: JitterMode) {
        self.jitter = jitter;
        self.evaluator = Evaluator::new(jitter);
    }
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new(Difficulty::default(), JitterMode::default())
    }
}

fn parse_switch(name: &str, value: &str) -> ChessResult<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "on" | "true" | "1" => Ok(true),
        "off" | "false" | "0" => Ok(false),
        _ => Err(ChessError::UnknownOption(format!("{name}={value}"))),
    }
}

impl Engine for MinimaxEngine {
    fn name(&self) -> &str {
        "DuelChess Minimax"
    }

    fn new_game(&mut self) {
        // Reseed so a seeded engine replays the same game after a reset.
        self.evaluator = Evaluator::new(self.jitter);
    }

    fn set_option(&mut self, name: &str, value: &str) -> ChessResult<()> {
        match name.trim().to_ascii_lowercase().as_str() {
            "difficulty" => self.set_difficulty(value.parse()?),
            "seed" => {
                let seed = value
                    .trim()
                    .parse::<u64>()
                    .map_err(|_| ChessError::UnknownOption(format!("{name}={value}")))?;
                self.set_jitter(JitterMode::Seeded(seed));
            }
            "jitter" => {
                let mode = if parse_switch(name, value)? {
                    JitterMode::Entropy
                } else {
                    JitterMode::Disabled
                };
                self.set_jitter(mode);
            }
            _ => return Err(ChessError::UnknownOption(name.to_owned())),
        }
        debug!(option = name, value, "engine option set");
        Ok(())
    }

    fn choose_move(&mut self, game_state: &mut GameState, color: Color) -> SearchResult {
        let profile = self.difficulty.profile();
        Searcher::new(&mut self.evaluator, profile).choose_move(game_state, color)
    }
}
