use crate::game_state::chess_types::*;
use crate::move_generation::legal_moves_bishop::is_valid_bishop_move;
use crate::move_generation::legal_moves_rook::is_valid_rook_move;

#[inline]
pub fn is_valid_queen_move(board: &BoardState, from: Square, to: Square) -> bool {
    is_valid_rook_move(board, from, to) || is_valid_bishop_move(board, from, to)
}

#[cfg(test)]
mod tests {
    use super::is_valid_queen_move;
    use crate::game_state::chess_types::*;

    #[test]
    fn queen_combines_rook_and_bishop_lines() {
        let game = GameState::from_fen("4k3/8/8/8/3Q4/8/8/4K3 w - - 0 1")
            .expect("FEN should parse");
        let d4 = Square::new(4, 3).expect("d4");
        let reachable = Square::all()
            .filter(|to| *to != d4 && is_valid_queen_move(&game.board, d4, *to))
            .count();
        assert_eq!(reachable, 27);
        assert!(!is_valid_queen_move(&game.board, d4, Square::new(2, 4).expect("e6")));
    }
}
