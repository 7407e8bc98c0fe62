use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::is_path_clear;

#[inline]
pub fn is_valid_rook_move(board: &BoardState, from: Square, to: Square) -> bool {
    (from.row() == to.row() || from.col() == to.col()) && is_path_clear(board, from, to)
}
