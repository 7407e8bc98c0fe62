//! The single path through which moves change a game.
//!
//! Human and computer moves both go through [`accept_move`]. A rejected move
//! leaves the state untouched; an accepted one updates the board, the capture
//! scoreboard, castling rights, the side to move and the check annotation.

use tracing::debug;

use crate::game::game_events::GameEvent;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::{has_escape, is_in_check};
use crate::move_generation::legal_move_validator::describe_legal_move;

/// What happened to a proposed move.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MoveOutcome {
    pub applied: bool,
    pub mv: Option<ChessMove>,
    pub mover: Option<Color>,
    pub captured: Option<PieceKind>,
    pub is_castle: bool,
    /// The side now to move is in check.
    pub check: bool,
    pub checkmate: bool,
    pub stalemate: bool,
    /// Events for listeners, in the order they happened.
    pub events: Vec<GameEvent>,
    /// Computer answer played right after this move, if any.
    pub reply: Option<Box<MoveOutcome>>,
}

impl MoveOutcome {
    #[inline]
    pub fn rejected() -> Self {
        Self::default()
    }
}

/// Apply `from -> to` for the side to move if the rules allow it.
///
/// Rejects moves once the game is over, moves of the piece not on move and
/// anything the validator refuses. Taking a king ends the game as if it were
/// mate, since pseudo-legal play can leave a king en prise.
pub fn accept_move(game_state: &mut GameState, from: Square, to: Square) -> MoveOutcome {
    if game_state.status.is_terminal() {
        debug!(%from, %to, status = ?game_state.status, "move rejected: game is over");
        return MoveOutcome::rejected();
    }

    let mover = game_state.side_to_move;
    if !game_state.board.holds_color(from, mover) {
        debug!(%from, %to, %mover, "move rejected: no piece of the side to move");
        return MoveOutcome::rejected();
    }

    let Some(mv) = describe_legal_move(game_state, from, to) else {
        debug!(%from, %to, "move rejected: illegal");
        return MoveOutcome::rejected();
    };

    let captured = game_state.board.get(to).map(|piece| piece.kind);
    if game_state.make_move(&mv).is_none() {
        return MoveOutcome::rejected();
    }

    let mut events = vec![GameEvent::PieceMoved { color: mover, mv }];
    if let Some(kind) = captured {
        game_state.scoreboard.record_capture(mover, kind);
        events.push(GameEvent::PieceCaptured {
            by: mover,
            kind,
            on: to,
        });
        events.push(GameEvent::ScoreUpdated(game_state.scoreboard.clone()));
    }
    if let Some(side) = mv.castle_side() {
        events.push(GameEvent::CastlePerformed { color: mover, side });
    }

    let next = mover.opposite();
    game_state.side_to_move = next;

    let king_taken = captured == Some(PieceKind::King);
    let check = !king_taken && is_in_check(game_state, next);
    let escapes = !king_taken && has_escape(game_state, next);
    let checkmate = king_taken || (check && !escapes);
    let stalemate = !king_taken && !check && !escapes;

    game_state.status = if checkmate {
        GameStatus::Checkmate
    } else if stalemate {
        GameStatus::Stalemate
    } else if check {
        GameStatus::Check
    } else {
        GameStatus::Ongoing
    };
    events.push(GameEvent::StatusChanged {
        color: next,
        status: game_state.status,
    });

    debug!(%mover, %mv, ?captured, status = ?game_state.status, "move accepted");

    MoveOutcome {
        applied: true,
        mv: Some(mv),
        mover: Some(mover),
        captured,
        is_castle: mv.is_castle,
        check,
        checkmate,
        stalemate,
        events,
        reply: None,
    }
}

/// [`accept_move`] for raw `(row, col)` coordinates; off-board input is
/// rejected without touching the state.
pub fn accept_move_at(game_state: &mut GameState, from: (i32, i32), to: (i32, i32)) -> MoveOutcome {
    match (Square::new(from.0, from.1), Square::new(to.0, to.1)) {
        (Ok(from), Ok(to)) => accept_move(game_state, from, to),
        (Err(err), _) | (_, Err(err)) => {
            debug!(%err, "move rejected");
            MoveOutcome::rejected()
        }
    }
}
