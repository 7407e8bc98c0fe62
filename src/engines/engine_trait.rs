//! Engine abstraction for the computer player.
//!
//! The controller only talks to this trait, so alternative strategies can be
//! plugged in and configured at runtime through named options.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;
use crate::search::minimax::SearchResult;

pub trait Engine: Send {
    fn name(&self) -> &str;

    /// Forget anything carried over from a previous game.
    fn new_game(&mut self) {}

    fn set_option(&mut self, name: &str, _value: &str) -> ChessResult<()> {
        Err(ChessError::UnknownOption(name.to_owned()))
    }

    /// Pick a move for `color`. The state is probed during the search and
    /// handed back unchanged.
    fn choose_move(&mut self, game_state: &mut GameState, color: Color) -> SearchResult;
}
