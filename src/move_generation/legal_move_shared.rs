use crate::game_state::chess_types::*;

/// Signed `(row, col)` displacement from `from` to `to`.
#[inline]
pub fn deltas(from: Square, to: Square) -> (i8, i8) {
    (
        to.row() as i8 - from.row() as i8,
        to.col() as i8 - from.col() as i8,
    )
}

/// True when every square strictly between `from` and `to` is empty.
///
/// Walks one step at a time along the sign of each delta, so callers must only
/// pass pairs on a shared rank, file or diagonal.
pub fn is_path_clear(board: &BoardState, from: Square, to: Square) -> bool {
    let (d_row, d_col) = deltas(from, to);
    let step_row = d_row.signum();
    let step_col = d_col.signum();

    let mut current = from.offset(step_row, step_col);
    while let Some(sq) = current {
        if sq == to {
            return true;
        }
        if !board.is_empty(sq) {
            return false;
        }
        current = sq.offset(step_row, step_col);
    }
    true
}
