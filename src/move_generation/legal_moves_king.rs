//! King steps and castling.
//!
//! A one-square step is accepted unconditionally. Castling is the only king
//! move that consults check detection: the king may not be in check, and the
//! square it passes over is probed by standing the king on it and restoring
//! the board afterwards.

use crate::game_state::chess_rules::KING_HOME_COL;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::legal_move_shared::deltas;

pub fn is_valid_king_move(game_state: &mut GameState, color: Color, from: Square, to: Square) -> bool {
    let (d_row, d_col) = deltas(from, to);
    if d_row.abs() <= 1 && d_col.abs() <= 1 {
        return true;
    }
    if d_row == 0 && d_col.abs() == 2 {
        return is_valid_castle(game_state, color, from, to);
    }
    false
}

/// Side of the castle a two-column king move on the home row would perform.
#[inline]
pub fn castle_side_for(color: Color, from: Square, to: Square) -> Option<CastleSide> {
    if from.row() != color.home_row() || to.row() != from.row() || from.col() != KING_HOME_COL {
        return None;
    }
    match to.col() as i8 - from.col() as i8 {
        2 => Some(CastleSide::Kingside),
        -2 => Some(CastleSide::Queenside),
        _ => None,
    }
}

fn is_valid_castle(game_state: &mut GameState, color: Color, from: Square, to: Square) -> bool {
    let Some(side) = castle_side_for(color, from, to) else {
        return false;
    };
    if !game_state.castling_rights.allows(color, side) {
        return false;
    }

    let row = i32::from(from.row());
    let Some(rook_sq) = Square::try_new(row, i32::from(side.rook_col())) else {
        return false;
    };
    if game_state.board.get(rook_sq) != Some(Piece::new(PieceKind::Rook, color)) {
        return false;
    }

    // Every square between king and rook, destination included, must be empty.
    let mut col = i32::from(from.col()) + i32::from(side.direction());
    while col != i32::from(side.rook_col()) {
        match Square::try_new(row, col) {
            Some(sq) if game_state.board.is_empty(sq) => {}
            _ => return false,
        }
        col += i32::from(side.direction());
    }

    if is_in_check(game_state, color) {
        return false;
    }

    let Some(crossed) = from.offset(0, side.direction()) else {
        return false;
    };
    !is_attacked_with_king_on(game_state, color, from, crossed)
}

/// Stand `color`'s king from `from` on `probe`, test for check, and put it back.
fn is_attacked_with_king_on(
    game_state: &mut GameState,
    color: Color,
    from: Square,
    probe: Square,
) -> bool {
    let king = game_state.board.take(from);
    let displaced = game_state.board.get(probe);
    game_state.board.set(probe, king);

    let attacked = is_in_check(game_state, color);

    game_state.board.set(probe, displaced);
    game_state.board.set(from, king);
    attacked
}

#[cfg(test)]
mod tests {
    use super::is_valid_king_move;
    use crate::game_state::chess_types::*;

    fn sq(row: i32, col: i32) -> Square {
        Square::new(row, col).expect("test square should be on the board")
    }

    fn castle_kingside(fen: &str) -> bool {
        let mut game = GameState::from_fen(fen).expect("FEN should parse");
        let before = game.clone();
        let legal = is_valid_king_move(&mut game, Color::Light, sq(7, 4), sq(7, 6));
        assert_eq!(game, before, "castling probe must restore the board");
        legal
    }

    #[test]
    fn white_kingside_castle_when_clear_and_safe() {
        assert!(castle_kingside("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1"));
    }

    #[test]
    fn castle_requires_right() {
        assert!(!castle_kingside("r3k2r/8/8/8/8/8/8/R3K2R w Qkq - 0 1"));
    }

    #[test]
    fn castle_requires_empty_path() {
        assert!(!castle_kingside("r3k2r/8/8/8/8/8/8/R3KN1R w KQkq - 0 1"));
        assert!(!castle_kingside("r3k2r/8/8/8/8/8/8/R3K1NR w KQkq - 0 1"));
    }

    #[test]
    fn castle_forbidden_out_of_check() {
        assert!(!castle_kingside("r3k2r/8/8/8/8/8/4r3/R3K2R w KQ - 0 1"));
    }

    #[test]
    fn castle_forbidden_through_attacked_square() {
        // Black rook on f8 covers f1.
        assert!(!castle_kingside("4kr2/8/8/8/8/8/8/R3K2R w KQ - 0 1"));
    }

    #[test]
    fn castle_requires_rook_in_corner() {
        assert!(!castle_kingside("4k3/8/8/8/8/8/8/R3K3 w KQ - 0 1"));
    }

    #[test]
    fn queenside_castle_for_black() {
        let mut game = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1")
            .expect("FEN should parse");
        assert!(is_valid_king_move(&mut game, Color::Dark, sq(0, 4), sq(0, 2)));
        game.board.set(sq(0, 1), Some(Piece::new(PieceKind::Knight, Color::Dark)));
        assert!(
            !is_valid_king_move(&mut game, Color::Dark, sq(0, 4), sq(0, 2)),
            "b8 must be empty too"
        );
    }

    #[test]
    fn single_steps_are_unconditional() {
        let mut game = GameState::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1")
            .expect("FEN should parse");
        assert!(is_valid_king_move(&mut game, Color::Light, sq(7, 4), sq(6, 5)));
        assert!(!is_valid_king_move(&mut game, Color::Light, sq(7, 4), sq(5, 4)));
    }
}
