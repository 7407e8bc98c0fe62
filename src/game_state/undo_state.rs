use crate::game_state::chess_types::*;

/// Single undo record for `make_move` / `unmake_move`.
#[derive(Debug, Clone, Copy)]
pub struct UndoState {
    pub mv: ChessMove,
    pub moved_piece: Piece,
    pub captured_piece: Option<Piece>,
    /// Rook origin and destination when the move was a castle.
    pub castle_rook: Option<(Square, Square)>,
    pub prev_castling_rights: CastlingRights,
}
