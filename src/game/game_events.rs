//! Notifications emitted after each accepted move.
//!
//! The core knows nothing about presentation; front ends subscribe a
//! [`GameEventListener`] and redraw from the events they receive.

use std::cell::RefCell;
use std::rc::Rc;

use crate::game_state::chess_types::*;
use crate::game_state::scoreboard::Scoreboard;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    PieceMoved {
        color: Color,
        mv: ChessMove,
    },
    PieceCaptured {
        by: Color,
        kind: PieceKind,
        on: Square,
    },
    CastlePerformed {
        color: Color,
        side: CastleSide,
    },
    /// Status of `color`, the side now to move.
    StatusChanged {
        color: Color,
        status: GameStatus,
    },
    ScoreUpdated(Scoreboard),
    GameReset,
}

pub trait GameEventListener {
    fn on_event(&mut self, event: &GameEvent);
}

impl<L: GameEventListener> GameEventListener for Rc<RefCell<L>> {
    fn on_event(&mut self, event: &GameEvent) {
        self.borrow_mut().on_event(event);
    }
}

/// Listener that keeps every event in arrival order.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Hand back everything recorded so far and start over.
    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

impl GameEventListener for EventLog {
    fn on_event(&mut self, event: &GameEvent) {
        self.events.push(event.clone());
    }
}
