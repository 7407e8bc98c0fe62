//! Mailbox board: 64 optional pieces in row-major order.
//!
//! Search and check detection mutate one shared board in place and restore it
//! before returning, so reads and writes here are plain array accesses.

use crate::game_state::chess_types::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardState {
    squares: [Option<Piece>; 64],
}

impl Default for BoardState {
    fn default() -> Self {
        Self::empty()
    }
}

impl BoardState {
    #[inline]
    pub const fn empty() -> Self {
        Self {
            squares: [None; 64],
        }
    }

    /// Standard starting layout.
    pub fn starting_position() -> Self {
        const BACK_RANK: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        let mut board = Self::empty();
        for color in [Color::Light, Color::Dark] {
            for (col, kind) in BACK_RANK.iter().enumerate() {
                let back = Square::from_index(color.home_row() as usize * 8 + col);
                let pawn = Square::from_index(color.pawn_row() as usize * 8 + col);
                board.set(back, Some(Piece::new(*kind, color)));
                board.set(pawn, Some(Piece::new(PieceKind::Pawn, color)));
            }
        }
        board
    }

    #[inline]
    pub fn get(&self, square: Square) -> Option<Piece> {
        self.squares[square.index()]
    }

    #[inline]
    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square.index()] = piece;
    }

    /// Remove and return the piece on `square`.
    #[inline]
    pub fn take(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.index()].take()
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.squares[square.index()].is_none()
    }

    /// Occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter_map(|(idx, slot)| slot.map(|piece| (Square::from_index(idx), piece)))
    }

    /// True when `square` holds a piece of `color`.
    #[inline]
    pub fn holds_color(&self, square: Square, color: Color) -> bool {
        matches!(self.squares[square.index()], Some(piece) if piece.color == color)
    }

    /// First king of `color` in row-major order.
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|(_, piece)| piece.kind == PieceKind::King && piece.color == color)
            .map(|(sq, _)| sq)
    }
}

#[cfg(test)]
mod tests {
    use super::BoardState;
    use crate::game_state::chess_types::*;

    #[test]
    fn starting_position_has_thirty_two_pieces() {
        let board = BoardState::starting_position();
        assert_eq!(board.pieces().count(), 32);
        assert_eq!(
            board.find_king(Color::Light),
            Square::try_new(7, 4),
            "white king starts on e1"
        );
        assert_eq!(board.find_king(Color::Dark), Square::try_new(0, 4));
        let d8 = Square::try_new(0, 3).expect("d8 is on the board");
        assert_eq!(board.get(d8), Some(Piece::new(PieceKind::Queen, Color::Dark)));
    }

    #[test]
    fn take_clears_the_square() {
        let mut board = BoardState::starting_position();
        let e2 = Square::try_new(6, 4).expect("e2 is on the board");
        let pawn = board.take(e2);
        assert_eq!(pawn, Some(Piece::new(PieceKind::Pawn, Color::Light)));
        assert!(board.is_empty(e2));
    }
}
