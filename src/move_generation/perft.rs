//! Node counting over the move generator.
//!
//! Walks the full pseudo-legal tree with make/unmake on a single state, which
//! doubles as a stress test of the revert discipline.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::legal_move_generator::legal_moves;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub castles: usize,
    pub checks: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.castles += rhs.castles;
        self.checks += rhs.checks;
    }
}

/// Count leaf positions `depth` plies below the current one, `color` moving first.
pub fn perft(game_state: &mut GameState, color: Color, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for mv in legal_moves(game_state, color) {
        let Some(undo) = game_state.make_move(&mv) else {
            continue;
        };

        if depth == 1 {
            total.nodes += 1;
            if undo.captured_piece.is_some() {
                total.captures += 1;
            }
            if mv.is_castle {
                total.castles += 1;
            }
            if is_in_check(game_state, color.opposite()) {
                total.checks += 1;
            }
        } else {
            total.merge(perft(game_state, color.opposite(), depth - 1));
        }

        game_state.unmake_move(undo);
    }
    total
}
