use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{deltas, is_path_clear};

#[inline]
pub fn is_valid_bishop_move(board: &BoardState, from: Square, to: Square) -> bool {
    let (d_row, d_col) = deltas(from, to);
    d_row.abs() == d_col.abs() && is_path_clear(board, from, to)
}
