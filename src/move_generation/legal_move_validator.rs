//! Per-move legality dispatcher.
//!
//! Judges moves as pseudo-legal: the moving piece's own rules and board
//! occupancy decide, without asking whether the mover's king is left attacked.
//! Castling is the exception and is checked in full by the king rules.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_moves_bishop::is_valid_bishop_move;
use crate::move_generation::legal_moves_king::{castle_side_for, is_valid_king_move};
use crate::move_generation::legal_moves_knight::is_valid_knight_move;
use crate::move_generation::legal_moves_pawn::is_valid_pawn_move;
use crate::move_generation::legal_moves_queen::is_valid_queen_move;
use crate::move_generation::legal_moves_rook::is_valid_rook_move;

/// True when the piece on `from` may move to `to`.
///
/// Takes the state mutably because castling probes the crossed square; the
/// state is always restored before returning.
pub fn is_legal_move(game_state: &mut GameState, from: Square, to: Square) -> bool {
    let Some(piece) = game_state.board.get(from) else {
        return false;
    };
    if let Some(target) = game_state.board.get(to) {
        if target.color == piece.color {
            return false;
        }
    }

    match piece.kind {
        PieceKind::Pawn => is_valid_pawn_move(&game_state.board, piece.color, from, to),
        PieceKind::Knight => is_valid_knight_move(from, to),
        PieceKind::Bishop => is_valid_bishop_move(&game_state.board, from, to),
        PieceKind::Rook => is_valid_rook_move(&game_state.board, from, to),
        PieceKind::Queen => is_valid_queen_move(&game_state.board, from, to),
        PieceKind::King => is_valid_king_move(game_state, piece.color, from, to),
    }
}

/// Describe the move `from -> to` if it is legal.
pub fn describe_legal_move(game_state: &mut GameState, from: Square, to: Square) -> Option<ChessMove> {
    if !is_legal_move(game_state, from, to) {
        return None;
    }
    let piece = game_state.board.get(from)?;
    let is_castle =
        piece.kind == PieceKind::King && castle_side_for(piece.color, from, to).is_some();
    Some(ChessMove {
        from,
        to,
        moving_kind: piece.kind,
        is_castle,
    })
}
