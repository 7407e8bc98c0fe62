//! Core value types shared by every subsystem: colors, piece kinds, squares,
//! castling rights and move descriptions.
//!
//! Board coordinates follow screen order: row 0 is black's back rank and row 7
//! is white's back rank, columns run from the a-file (0) to the h-file (7).

use std::fmt;

use crate::chess_errors::{ChessError, ChessResult};
use crate::utils::algebraic::square_to_algebraic;

pub use crate::game_state::board_state::BoardState;
pub use crate::game_state::game_state::{GameState, GameStatus};
pub use crate::game_state::undo_state::UndoState;

/// Side color. `Light` is white and moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::Light => 0,
            Color::Dark => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// Row delta of a forward pawn step.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::Light => -1,
            Color::Dark => 1,
        }
    }

    /// Row holding this color's king and rooks at the start of the game.
    #[inline]
    pub const fn home_row(self) -> u8 {
        match self {
            Color::Light => 7,
            Color::Dark => 0,
        }
    }

    /// Row holding this color's pawns at the start of the game.
    #[inline]
    pub const fn pawn_row(self) -> u8 {
        match self {
            Color::Light => 6,
            Color::Dark => 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Light => write!(f, "white"),
            Color::Dark => write!(f, "black"),
        }
    }
}

/// Piece kind (color is carried separately in [`Piece`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }
}

/// A board coordinate. Both fields are always in `0..=7`; the only ways to
/// build one check the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Build a square from untrusted coordinates.
    pub fn new(row: i32, col: i32) -> ChessResult<Self> {
        Self::try_new(row, col).ok_or(ChessError::SquareOutOfRange { row, col })
    }

    #[inline]
    pub fn try_new(row: i32, col: i32) -> Option<Self> {
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Square for a `0..64` index in row-major order.
    #[inline]
    pub const fn from_index(index: usize) -> Self {
        debug_assert!(index < 64, "square index out of range");
        Self {
            row: ((index / 8) % 8) as u8,
            col: (index % 8) as u8,
        }
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.row as usize * 8 + self.col as usize
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Square displaced by `(d_row, d_col)`, or `None` when it leaves the board.
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        Self::try_new(
            i32::from(self.row) + i32::from(d_row),
            i32::from(self.col) + i32::from(d_col),
        )
    }

    /// Every square in row-major order (a8, b8, ..., h1).
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square::from_index)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&square_to_algebraic(*self))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    Kingside,
    Queenside,
}

impl CastleSide {
    /// Column of the rook that takes part in this castle.
    #[inline]
    pub const fn rook_col(self) -> u8 {
        match self {
            CastleSide::Kingside => 7,
            CastleSide::Queenside => 0,
        }
    }

    /// Column the rook lands on.
    #[inline]
    pub const fn rook_target_col(self) -> u8 {
        match self {
            CastleSide::Kingside => 5,
            CastleSide::Queenside => 3,
        }
    }

    /// Column step from the king toward this side's rook.
    #[inline]
    pub const fn direction(self) -> i8 {
        match self {
            CastleSide::Kingside => 1,
            CastleSide::Queenside => -1,
        }
    }
}

pub const CASTLE_LIGHT_KINGSIDE: u8 = 1 << 0;
pub const CASTLE_LIGHT_QUEENSIDE: u8 = 1 << 1;
pub const CASTLE_DARK_KINGSIDE: u8 = 1 << 2;
pub const CASTLE_DARK_QUEENSIDE: u8 = 1 << 3;

/// Per-color castling permissions packed in a bitmask.
///
/// Rights are only ever revoked during a game. The one place that grants
/// them is position setup ([`CastlingRights::all`] and the FEN parser).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CastlingRights(u8);

impl CastlingRights {
    pub const NONE: Self = Self(0);

    #[inline]
    pub const fn all() -> Self {
        Self(
            CASTLE_LIGHT_KINGSIDE
                | CASTLE_LIGHT_QUEENSIDE
                | CASTLE_DARK_KINGSIDE
                | CASTLE_DARK_QUEENSIDE,
        )
    }

    #[inline]
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & 0x0f)
    }

    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[inline]
    const fn flag(color: Color, side: CastleSide) -> u8 {
        match (color, side) {
            (Color::Light, CastleSide::Kingside) => CASTLE_LIGHT_KINGSIDE,
            (Color::Light, CastleSide::Queenside) => CASTLE_LIGHT_QUEENSIDE,
            (Color::Dark, CastleSide::Kingside) => CASTLE_DARK_KINGSIDE,
            (Color::Dark, CastleSide::Queenside) => CASTLE_DARK_QUEENSIDE,
        }
    }

    #[inline]
    pub const fn allows(self, color: Color, side: CastleSide) -> bool {
        self.0 & Self::flag(color, side) != 0
    }

    #[inline]
    pub fn revoke(&mut self, color: Color, side: CastleSide) {
        self.0 &= !Self::flag(color, side);
    }

    #[inline]
    pub fn revoke_all(&mut self, color: Color) {
        self.revoke(color, CastleSide::Kingside);
        self.revoke(color, CastleSide::Queenside);
    }
}

/// A move as produced by the generator. Derived on demand, never stored in
/// the game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChessMove {
    pub from: Square,
    pub to: Square,
    pub moving_kind: PieceKind,
    pub is_castle: bool,
}

impl ChessMove {
    /// Side of a castling move, `None` for every other move.
    #[inline]
    pub fn castle_side(&self) -> Option<CastleSide> {
        if !self.is_castle {
            return None;
        }
        if self.to.col() > self.from.col() {
            Some(CastleSide::Kingside)
        } else {
            Some(CastleSide::Queenside)
        }
    }
}

impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}
