//! Check, checkmate and stalemate detection.
//!
//! Attack tests reuse the pseudo-legal move rules: a king is in check when an
//! enemy piece could move onto its square. Escape tests simulate each
//! candidate move on the live state and revert it.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_validator::{describe_legal_move, is_legal_move};

#[inline]
pub fn king_square(game_state: &GameState, color: Color) -> Option<Square> {
    game_state.board.find_king(color)
}

/// True when some piece of the opposite color can move onto `color`'s king.
/// A side without a king is never in check.
pub fn is_in_check(game_state: &mut GameState, color: Color) -> bool {
    let Some(king_sq) = king_square(game_state, color) else {
        return false;
    };
    is_square_attacked(game_state, king_sq, color.opposite())
}

/// True when a piece of `attacker_color` can move onto `square`.
///
/// Pawns only attack occupied squares, so probing an empty square misses pawn
/// coverage; stand a piece there first when that matters.
pub fn is_square_attacked(game_state: &mut GameState, square: Square, attacker_color: Color) -> bool {
    for from in Square::all() {
        if !game_state.board.holds_color(from, attacker_color) {
            continue;
        }
        if is_legal_move(game_state, from, square) {
            return true;
        }
    }
    false
}

/// True when `color` is in check and no move of `color` lifts it.
pub fn is_checkmate(game_state: &mut GameState, color: Color) -> bool {
    is_in_check(game_state, color) && !has_escape(game_state, color)
}

/// True when `color` is not in check but every move it has leaves its own
/// king attacked.
pub fn is_stalemate(game_state: &mut GameState, color: Color) -> bool {
    !is_in_check(game_state, color) && !has_escape(game_state, color)
}

/// True when `color` has a move after which its king is not attacked.
///
/// Visits every own piece and every destination square, so this is only
/// called at turn boundaries, never inside search.
pub fn has_escape(game_state: &mut GameState, color: Color) -> bool {
    for from in Square::all() {
        if !game_state.board.holds_color(from, color) {
            continue;
        }
        for to in Square::all() {
            let Some(mv) = describe_legal_move(game_state, from, to) else {
                continue;
            };
            let Some(undo) = game_state.make_move(&mv) else {
                continue;
            };
            let still_in_check = is_in_check(game_state, color);
            game_state.unmake_move(undo);

            if !still_in_check {
                return true;
            }
        }
    }
    false
}
