//! Canonical chess-rule constants.
//!
//! Static rule literals: the starting position and the capture values used by
//! the scoreboard.

use crate::game_state::chess_types::PieceKind;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str =
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Column the king starts on.
pub const KING_HOME_COL: u8 = 4;

/// Points credited to the capturing side. Kings are worth nothing since a
/// game ends before one can be taken.
#[inline]
pub const fn capture_value(kind: PieceKind) -> u32 {
    match kind {
        PieceKind::Pawn => 1,
        PieceKind::Knight => 3,
        PieceKind::Bishop => 3,
        PieceKind::Rook => 5,
        PieceKind::Queen => 9,
        PieceKind::King => 0,
    }
}
