//! Captured pieces and accumulated capture points for both sides.
//!
//! Entries are indexed by the capturing color: `captured(Color::Light)` lists
//! the black pieces white has taken. Both the lists and the scores only grow
//! during a game.

use crate::game_state::chess_rules::capture_value;
use crate::game_state::chess_types::*;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scoreboard {
    captured: [Vec<PieceKind>; 2],
    scores: [u32; 2],
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `capturer` took a piece of kind `kind`.
    pub fn record_capture(&mut self, capturer: Color, kind: PieceKind) {
        self.captured[capturer.index()].push(kind);
        self.scores[capturer.index()] += capture_value(kind);
    }

    #[inline]
    pub fn captured(&self, capturer: Color) -> &[PieceKind] {
        &self.captured[capturer.index()]
    }

    #[inline]
    pub fn score(&self, capturer: Color) -> u32 {
        self.scores[capturer.index()]
    }

    /// White points minus black points.
    pub fn material_advantage(&self) -> i64 {
        i64::from(self.score(Color::Light)) - i64::from(self.score(Color::Dark))
    }
}
