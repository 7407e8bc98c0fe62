//! Move enumeration for one color.
//!
//! Moves come out in row-major origin order, and for each origin in row-major
//! destination order. Search breaks score ties by this order, so it is part of
//! the contract.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_validator::describe_legal_move;

/// Every pseudo-legal move of `color`, recomputed on each call.
///
/// The state is borrowed mutably for castling probes and comes back unchanged.
pub fn legal_moves(game_state: &mut GameState, color: Color) -> Vec<ChessMove> {
    let mut moves = Vec::with_capacity(48);

    for from in Square::all() {
        if !game_state.board.holds_color(from, color) {
            continue;
        }
        for to in Square::all() {
            if let Some(mv) = describe_legal_move(game_state, from, to) {
                moves.push(mv);
            }
        }
    }

    moves
}

/// Moves of the piece on `from`, for destination highlighting.
pub fn legal_moves_from(game_state: &mut GameState, from: Square) -> Vec<ChessMove> {
    Square::all()
        .filter_map(|to| describe_legal_move(game_state, from, to))
        .collect()
}
