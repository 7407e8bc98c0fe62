use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::deltas;

/// Pawn rules: one step forward onto an empty square, two steps from the
/// starting row across two empty squares, or one diagonal step forward onto
/// an enemy piece. No en passant and no promotion.
pub fn is_valid_pawn_move(board: &BoardState, color: Color, from: Square, to: Square) -> bool {
    let forward = color.forward();
    let (d_row, d_col) = deltas(from, to);

    if d_col == 0 && d_row == forward {
        return board.is_empty(to);
    }

    if d_col == 0 && d_row == 2 * forward && from.row() == color.pawn_row() {
        let Some(between) = from.offset(forward, 0) else {
            return false;
        };
        return board.is_empty(between) && board.is_empty(to);
    }

    if d_col.abs() == 1 && d_row == forward {
        return matches!(board.get(to), Some(target) if target.color != color);
    }

    false
}

#[cfg(test)]
mod tests {
    use super::is_valid_pawn_move;
    use crate::game_state::chess_types::*;

    fn sq(row: i32, col: i32) -> Square {
        Square::new(row, col).expect("test square should be on the board")
    }

    #[test]
    fn double_step_only_from_starting_row_and_unblocked() {
        let game = GameState::new_game();
        assert!(is_valid_pawn_move(&game.board, Color::Light, sq(6, 4), sq(4, 4)));
        assert!(is_valid_pawn_move(&game.board, Color::Dark, sq(1, 2), sq(3, 2)));

        let blocked = GameState::from_fen("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1")
            .expect("FEN should parse");
        assert!(!is_valid_pawn_move(&blocked.board, Color::Light, sq(6, 4), sq(4, 4)));
        assert!(!is_valid_pawn_move(&blocked.board, Color::Light, sq(6, 4), sq(5, 4)));

        let advanced = GameState::from_fen("4k3/8/8/8/8/4P3/8/4K3 w - - 0 1")
            .expect("FEN should parse");
        assert!(!is_valid_pawn_move(&advanced.board, Color::Light, sq(5, 4), sq(3, 4)));
    }

    #[test]
    fn diagonal_requires_enemy_piece() {
        let game = GameState::from_fen("4k3/8/8/8/3p4/4P3/8/4K3 w - - 0 1")
            .expect("FEN should parse");
        assert!(is_valid_pawn_move(&game.board, Color::Light, sq(5, 4), sq(4, 3)));
        assert!(!is_valid_pawn_move(&game.board, Color::Light, sq(5, 4), sq(4, 5)));
        assert!(!is_valid_pawn_move(&game.board, Color::Light, sq(5, 4), sq(6, 3)), "never backwards");
    }
}
