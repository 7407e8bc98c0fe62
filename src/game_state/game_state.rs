//! Authoritative game state and the apply-then-revert move protocol.
//!
//! `GameState` aggregates the board, side to move, castling rights, the
//! capture scoreboard and the terminal annotation. `make_move` / `unmake_move`
//! touch only the board and castling rights, which lets search and check
//! detection explore lines on the live state and restore it exactly.

use crate::chess_errors::ChessResult;
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::*;
use crate::game_state::scoreboard::Scoreboard;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

/// Check annotation on top of whichever color is to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    #[default]
    Ongoing,
    Check,
    Checkmate,
    Stalemate,
}

impl GameStatus {
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: BoardState,
    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    pub scoreboard: Scoreboard,
    pub status: GameStatus,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            board: BoardState::empty(),
            side_to_move: Color::Light,
            castling_rights: CastlingRights::NONE,
            scoreboard: Scoreboard::new(),
            status: GameStatus::Ongoing,
        }
    }
}

impl GameState {
    /// Empty board, white to move, no castling rights.
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Standard starting layout, white to move, every castling right enabled.
    pub fn new_game() -> Self {
        Self {
            board: BoardState::starting_position(),
            castling_rights: CastlingRights::all(),
            ..Self::default()
        }
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn starting_fen() -> &'static str {
        STARTING_POSITION_FEN
    }

    /// Apply `mv` to the board and castling rights.
    ///
    /// Relocates the rook on a castle and revokes rights when a king moves or
    /// a rook leaves the a- or h-file. Returns `None` without touching anything when
    /// the origin square is empty. Every returned record must be handed back
    /// to [`GameState::unmake_move`] in reverse order.
    pub fn make_move(&mut self, mv: &ChessMove) -> Option<UndoState> {
        let moved_piece = self.board.take(mv.from)?;
        let captured_piece = self.board.get(mv.to);
        let prev_castling_rights = self.castling_rights;

        let castle_rook = mv.castle_side().and_then(|side| {
            let row = i32::from(mv.from.row());
            let rook_from = Square::try_new(row, i32::from(side.rook_col()))?;
            let rook_to = Square::try_new(row, i32::from(side.rook_target_col()))?;
            let rook = self.board.take(rook_from)?;
            self.board.set(rook_to, Some(rook));
            Some((rook_from, rook_to))
        });

        self.board.set(mv.to, Some(moved_piece));
        self.update_castling_rights(moved_piece, mv.from);

        Some(UndoState {
            mv: *mv,
            moved_piece,
            captured_piece,
            castle_rook,
            prev_castling_rights,
        })
    }

    /// Revert a record produced by [`GameState::make_move`].
    pub fn unmake_move(&mut self, undo: UndoState) {
        self.board.set(undo.mv.to, undo.captured_piece);
        self.board.set(undo.mv.from, Some(undo.moved_piece));

        if let Some((rook_from, rook_to)) = undo.castle_rook {
            let rook = self.board.take(rook_to);
            self.board.set(rook_from, rook);
        }

        self.castling_rights = undo.prev_castling_rights;
    }

    fn update_castling_rights(&mut self, moved_piece: Piece, from: Square) {
        let color = moved_piece.color;
        match moved_piece.kind {
            PieceKind::King => self.castling_rights.revoke_all(color),
            // Any rook leaving the a- or h-file gives up that side.
            PieceKind::Rook => {
                if from.col() == CastleSide::Kingside.rook_col() {
                    self.castling_rights.revoke(color, CastleSide::Kingside);
                } else if from.col() == CastleSide::Queenside.rook_col() {
                    self.castling_rights.revoke(color, CastleSide::Queenside);
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::GameState;
    use crate::game_state::chess_types::*;

    fn sq(row: i32, col: i32) -> Square {
        Square::new(row, col).expect("test square should be on the board")
    }

    #[test]
    fn make_and_unmake_restore_capture() {
        let mut game = GameState::from_fen("4k3/8/8/3p4/4P3/8/8/4K3 w - - 0 1")
            .expect("FEN should parse");
        let before = game.clone();

        let mv = ChessMove {
            from: sq(4, 4),
            to: sq(3, 3),
            moving_kind: PieceKind::Pawn,
            is_castle: false,
        };
        let undo = game.make_move(&mv).expect("origin holds a pawn");
        assert_eq!(
            undo.captured_piece,
            Some(Piece::new(PieceKind::Pawn, Color::Dark))
        );
        assert_eq!(
            game.board.get(sq(3, 3)),
            Some(Piece::new(PieceKind::Pawn, Color::Light))
        );

        game.unmake_move(undo);
        assert_eq!(game, before);
    }

    #[test]
    fn castle_moves_rook_and_revokes_rights_until_reverted() {
        let mut game = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1")
            .expect("FEN should parse");
        let before = game.clone();

        let mv = ChessMove {
            from: sq(7, 4),
            to: sq(7, 6),
            moving_kind: PieceKind::King,
            is_castle: true,
        };
        let undo = game.make_move(&mv).expect("origin holds the king");

        assert_eq!(
            game.board.get(sq(7, 5)),
            Some(Piece::new(PieceKind::Rook, Color::Light))
        );
        assert!(game.board.is_empty(sq(7, 7)));
        assert!(!game.castling_rights.allows(Color::Light, CastleSide::Kingside));
        assert!(!game.castling_rights.allows(Color::Light, CastleSide::Queenside));
        assert!(game.castling_rights.allows(Color::Dark, CastleSide::Kingside));

        game.unmake_move(undo);
        assert_eq!(game, before);
    }

    #[test]
    fn moving_home_rook_revokes_only_its_side() {
        let mut game = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1")
            .expect("FEN should parse");
        let mv = ChessMove {
            from: sq(0, 0),
            to: sq(3, 0),
            moving_kind: PieceKind::Rook,
            is_castle: false,
        };
        game.make_move(&mv).expect("origin holds a rook");
        assert!(!game.castling_rights.allows(Color::Dark, CastleSide::Queenside));
        assert!(game.castling_rights.allows(Color::Dark, CastleSide::Kingside));
    }

    #[test]
    fn rook_leaving_its_file_off_the_home_row_revokes_that_side() {
        let mut game = GameState::from_fen("4k3/8/8/8/7R/8/8/4K2R w K - 0 1")
            .expect("FEN should parse");
        let mv = ChessMove {
            from: sq(4, 7),
            to: sq(4, 6),
            moving_kind: PieceKind::Rook,
            is_castle: false,
        };
        let undo = game.make_move(&mv).expect("origin holds a rook");
        assert!(!game.castling_rights.allows(Color::Light, CastleSide::Kingside));

        game.unmake_move(undo);
        assert!(game.castling_rights.allows(Color::Light, CastleSide::Kingside));
    }

    #[test]
    fn make_move_from_empty_square_changes_nothing() {
        let mut game = GameState::new_game();
        let before = game.clone();
        let mv = ChessMove {
            from: sq(4, 4),
            to: sq(3, 4),
            moving_kind: PieceKind::Pawn,
            is_castle: false,
        };
        assert!(game.make_move(&mv).is_none());
        assert_eq!(game, before);
    }
}
