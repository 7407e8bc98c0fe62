//! Pluggable board evaluation interfaces and the difficulty-weighted evaluator.
//!
//! Search stays modular by delegating static position scoring to
//! [`PositionScorer`]. Scores are from white's point of view: positive favors
//! white, negative favors black.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_in_check;
use crate::search::difficulty::DifficultyProfile;

pub trait PositionScorer {
    /// White-minus-black score of the position.
    ///
    /// Takes the state mutably so check detection can probe it; implementations
    /// must leave it unchanged.
    fn score(&mut self, game_state: &mut GameState, profile: &DifficultyProfile) -> f64;
}

/// Source of the evaluation noise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JitterMode {
    /// No noise; evaluation is a pure function of the position.
    Disabled,
    /// Reproducible noise from a fixed seed.
    Seeded(u64),
    /// Noise seeded from the operating system.
    #[default]
    Entropy,
}

pub const POSITIONAL_WEIGHT: f64 = 0.5;
pub const CENTER_BONUS: f64 = 50.0;
pub const PROXIMITY_UNIT: f64 = 10.0;
pub const CHECK_PENALTY: i32 = 500;
pub const JITTER_SPAN: f64 = 50.0;

#[inline]
pub const fn material_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 100,
        PieceKind::Knight => 320,
        PieceKind::Bishop => 330,
        PieceKind::Rook => 500,
        PieceKind::Queen => 900,
        PieceKind::King => 20000,
    }
}

// Piece-square tables from white's side of the board: row 0 is the far rank.
// Black reads them with the rows mirrored.

const PAWN_TABLE: [[i32; 8]; 8] = [
    [0, 0, 0, 0, 0, 0, 0, 0],
    [50, 50, 50, 50, 50, 50, 50, 50],
    [10, 10, 20, 30, 30, 20, 10, 10],
    [5, 5, 10, 25, 25, 10, 5, 5],
    [0, 0, 0, 20, 20, 0, 0, 0],
    [5, -5, -10, 0, 0, -10, -5, 5],
    [5, 10, 10, -20, -20, 10, 10, 5],
    [0, 0, 0, 0, 0, 0, 0, 0],
];

const KNIGHT_TABLE: [[i32; 8]; 8] = [
    [-50, -40, -30, -30, -30, -30, -40, -50],
    [-40, -20, 0, 0, 0, 0, -20, -40],
    [-30, 0, 10, 15, 15, 10, 0, -30],
    [-30, 5, 15, 20, 20, 15, 5, -30],
    [-30, 0, 15, 20, 20, 15, 0, -30],
    [-30, 5, 10, 15, 15, 10, 5, -30],
    [-40, -20, 0, 5, 5, 0, -20, -40],
    [-50, -40, -30, -30, -30, -30, -40, -50],
];

const BISHOP_TABLE: [[i32; 8]; 8] = [
    [-20, -10, -10, -10, -10, -10, -10, -20],
    [-10, 0, 0, 0, 0, 0, 0, -10],
    [-10, 0, 5, 10, 10, 5, 0, -10],
    [-10, 5, 5, 10, 10, 5, 5, -10],
    [-10, 0, 10, 10, 10, 10, 0, -10],
    [-10, 10, 10, 10, 10, 10, 10, -10],
    [-10, 5, 0, 0, 0, 0, 5, -10],
    [-20, -10, -10, -10, -10, -10, -10, -20],
];

const ROOK_TABLE: [[i32; 8]; 8] = [
    [0, 0, 0, 0, 0, 0, 0, 0],
    [5, 10, 10, 10, 10, 10, 10, 5],
    [-5, 0, 0, 0, 0, 0, 0, -5],
    [-5, 0, 0, 0, 0, 0, 0, -5],
    [-5, 0, 0, 0, 0, 0, 0, -5],
    [-5, 0, 0, 0, 0, 0, 0, -5],
    [-5, 0, 0, 0, 0, 0, 0, -5],
    [0, 0, 0, 5, 5, 0, 0, 0],
];

const QUEEN_TABLE: [[i32; 8]; 8] = [
    [-20, -10, -10, -5, -5, -10, -10, -20],
    [-10, 0, 0, 0, 0, 0, 0, -10],
    [-10, 0, 5, 5, 5, 5, 0, -10],
    [-5, 0, 5, 5, 5, 5, 0, -5],
    [0, 0, 5, 5, 5, 5, 0, -5],
    [-10, 5, 5, 5, 5, 5, 0, -10],
    [-10, 0, 5, 0, 0, 0, 0, -10],
    [-20, -10, -10, -5, -5, -10, -10, -20],
];

const KING_TABLE: [[i32; 8]; 8] = [
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-20, -30, -30, -40, -40, -30, -30, -20],
    [-10, -20, -20, -20, -20, -20, -20, -10],
    [20, 20, 0, 0, 0, 0, 20, 20],
    [20, 30, 10, 0, 0, 10, 30, 20],
];

/// Piece-square bonus for `piece` standing on `square`, before sign and weight.
pub fn piece_square_bonus(piece: Piece, square: Square) -> i32 {
    let row = match piece.color {
        Color::Light => square.row() as usize,
        Color::Dark => 7 - square.row() as usize,
    };
    let col = square.col() as usize;
    let table = match piece.kind {
        PieceKind::Pawn => &PAWN_TABLE,
        PieceKind::Knight => &KNIGHT_TABLE,
        PieceKind::Bishop => &BISHOP_TABLE,
        PieceKind::Rook => &ROOK_TABLE,
        PieceKind::Queen => &QUEEN_TABLE,
        PieceKind::King => &KING_TABLE,
    };
    table[row][col]
}

#[inline]
fn is_center(square: Square) -> bool {
    matches!(square.row(), 3 | 4) && matches!(square.col(), 3 | 4)
}

#[inline]
fn chebyshev(a: Square, b: Square) -> i32 {
    let d_row = (i32::from(a.row()) - i32::from(b.row())).abs();
    let d_col = (i32::from(a.col()) - i32::from(b.col())).abs();
    d_row.max(d_col)
}

/// Unweighted white-minus-black sums of each evaluation term.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScoreBreakdown {
    pub material: i32,
    pub positional: i32,
    pub center: f64,
    pub attack: f64,
}

impl ScoreBreakdown {
    /// Weighted total before noise.
    #[inline]
    pub fn total(&self, profile: &DifficultyProfile) -> f64 {
        f64::from(self.material)
            + f64::from(self.positional) * POSITIONAL_WEIGHT
            + self.center * profile.aggressiveness
            + self.attack * profile.aggressiveness
    }
}

/// Sum every term over the board. The state is only probed for check.
pub fn score_breakdown(game_state: &mut GameState) -> ScoreBreakdown {
    let in_check = [
        is_in_check(game_state, Color::Light),
        is_in_check(game_state, Color::Dark),
    ];
    let kings = [
        game_state.board.find_king(Color::Light),
        game_state.board.find_king(Color::Dark),
    ];

    let mut out = ScoreBreakdown::default();
    for (square, piece) in game_state.board.pieces() {
        let sign = match piece.color {
            Color::Light => 1,
            Color::Dark => -1,
        };

        out.material += sign * material_value(piece.kind);

        let mut bonus = piece_square_bonus(piece, square);
        if piece.kind == PieceKind::King && in_check[piece.color.index()] {
            bonus -= CHECK_PENALTY;
        }
        out.positional += sign * bonus;

        if is_center(square) {
            out.center += f64::from(sign) * CENTER_BONUS;
        }

        if let Some(enemy_king) = kings[piece.color.opposite().index()] {
            let closeness = 8 - chebyshev(square, enemy_king);
            out.attack += f64::from(sign * closeness) * PROXIMITY_UNIT;
        }
    }
    out
}

/// Difficulty-weighted evaluator with optional uniform noise.
#[derive(Debug, Clone)]
pub struct Evaluator {
    rng: Option<StdRng>,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(JitterMode::default())
    }
}

impl Evaluator {
    pub fn new(mode: JitterMode) -> Self {
        let rng = match mode {
            JitterMode::Disabled => None,
            JitterMode::Seeded(seed) => Some(StdRng::seed_from_u64(seed)),
            JitterMode::Entropy => Some(StdRng::from_os_rng()),
        };
        Self { rng }
    }

    #[inline]
    pub fn deterministic() -> Self {
        Self::new(JitterMode::Disabled)
    }

    #[inline]
    pub fn has_jitter(&self) -> bool {
        self.rng.is_some()
    }

    pub fn evaluate(&mut self, game_state: &mut GameState, profile: &DifficultyProfile) -> f64 {
        let base = score_breakdown(game_state).total(profile);
        base + self.jitter(profile)
    }

    fn jitter(&mut self, profile: &DifficultyProfile) -> f64 {
        match self.rng.as_mut() {
            Some(rng) => (rng.random::<f64>() - 0.5) * JITTER_SPAN * profile.randomness,
            None => 0.0,
        }
    }
}

impl PositionScorer for Evaluator {
    #[inline]
    fn score(&mut self, game_state: &mut GameState, profile: &DifficultyProfile) -> f64 {
        self.evaluate(game_state, profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::difficulty::Difficulty;

    #[test]
    fn start_position_is_balanced() {
        let mut game = GameState::new_game();
        let mut evaluator = Evaluator::deterministic();
        for level in Difficulty::ALL {
            let score = evaluator.evaluate(&mut game, &level.profile());
            assert!(score.abs() < 1e-9, "{level}: expected 0, got {score}");
        }
    }

    #[test]
    fn extra_queen_favors_its_owner() {
        let profile = Difficulty::Normal.profile();
        let mut evaluator = Evaluator::deterministic();

        let mut white_up = GameState::from_fen("4k3/8/8/8/8/8/8/3QK3 w - - 0 1")
            .expect("FEN should parse");
        let mut black_up = GameState::from_fen("3qk3/8/8/8/8/8/8/4K3 w - - 0 1")
            .expect("FEN should parse");

        let white_score = evaluator.evaluate(&mut white_up, &profile);
        let black_score = evaluator.evaluate(&mut black_up, &profile);
        assert!(white_score > 800.0, "got {white_score}");
        assert!(black_score < -800.0, "got {black_score}");
        assert!((white_score + black_score).abs() < 1e-9, "mirror positions cancel");
    }

    #[test]
    fn side_in_check_is_penalized() {
        let mut checked = GameState::from_fen("4k3/8/8/8/8/8/4r3/4K3 w - - 0 1")
            .expect("FEN should parse");
        let mut quiet = GameState::from_fen("4k3/8/8/8/8/8/r7/4K3 w - - 0 1")
            .expect("FEN should parse");

        let checked_terms = score_breakdown(&mut checked);
        let quiet_terms = score_breakdown(&mut quiet);
        let rook_shift = piece_square_bonus(
            Piece::new(PieceKind::Rook, Color::Dark),
            Square::new(6, 4).expect("e2"),
        ) - piece_square_bonus(
            Piece::new(PieceKind::Rook, Color::Dark),
            Square::new(6, 0).expect("a2"),
        );
        assert_eq!(
            checked_terms.positional,
            quiet_terms.positional + rook_shift * -1 - CHECK_PENALTY
        );
    }

    #[test]
    fn black_tables_are_mirrored() {
        let e2 = Square::new(6, 4).expect("e2");
        let e7 = Square::new(1, 4).expect("e7");
        assert_eq!(
            piece_square_bonus(Piece::new(PieceKind::Pawn, Color::Light), e2),
            piece_square_bonus(Piece::new(PieceKind::Pawn, Color::Dark), e7)
        );
    }

    #[test]
    fn seeded_jitter_is_reproducible_and_bounded() {
        let profile = Difficulty::Easy.profile();
        let mut game = GameState::new_game();
        let mut a = Evaluator::new(JitterMode::Seeded(7));
        let mut b = Evaluator::new(JitterMode::Seeded(7));
        for _ in 0..16 {
            let x = a.evaluate(&mut game, &profile);
            let y = b.evaluate(&mut game, &profile);
            assert_eq!(x, y);
            assert!(x.abs() <= JITTER_SPAN * profile.randomness / 2.0);
        }
        assert!(a.has_jitter());
        assert!(!Evaluator::deterministic().has_jitter());
    }
}
