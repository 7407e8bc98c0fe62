use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::deltas;

/// Knight jumps ignore everything in between.
#[inline]
pub fn is_valid_knight_move(from: Square, to: Square) -> bool {
    let (d_row, d_col) = deltas(from, to);
    matches!((d_row.abs(), d_col.abs()), (1, 2) | (2, 1))
}
