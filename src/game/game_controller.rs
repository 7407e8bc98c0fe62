//! Turn orchestration between a human player and the computer.
//!
//! The controller owns the game state, forwards accepted-move events to its
//! listeners and, whenever the computer is to move, asks the engine for a move
//! and plays it through the same acceptance path a human move takes.

use tracing::{debug, info, trace, warn};

use crate::chess_errors::ChessResult;
use crate::engines::engine_minimax::MinimaxEngine;
use crate::engines::engine_trait::Engine;
use crate::game::accept_move::{accept_move, MoveOutcome};
use crate::game::game_config::GameConfig;
use crate::game::game_events::{GameEvent, GameEventListener};
use crate::game_state::chess_types::*;
use crate::game_state::scoreboard::Scoreboard;
use crate::move_generation::legal_move_generator::{legal_moves, legal_moves_from};
use crate::search::difficulty::Difficulty;
use crate::utils::render_game_state::render_game_state;

pub struct GameController {
    game_state: GameState,
    config: GameConfig,
    engine: Box<dyn Engine>,
    listeners: Vec<Box<dyn GameEventListener>>,
}

impl GameController {
    /// Fresh game driven by the minimax engine configured from `config`.
    pub fn new(config: GameConfig) -> Self {
        let engine = MinimaxEngine::new(config.difficulty, config.jitter);
        Self::with_engine(config, Box::new(engine))
    }

    pub fn with_engine(config: GameConfig, engine: Box<dyn Engine>) -> Self {
        Self {
            game_state: GameState::new_game(),
            config,
            engine,
            listeners: Vec::new(),
        }
    }

    #[inline]
    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    #[inline]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.game_state.status
    }

    #[inline]
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.game_state.scoreboard
    }

    pub fn engine_name(&self) -> &str {
        self.engine.name()
    }

    pub fn add_listener(&mut self, listener: Box<dyn GameEventListener>) {
        self.listeners.push(listener);
    }

    /// Every move of the side to move.
    pub fn legal_moves(&mut self) -> Vec<ChessMove> {
        let color = self.game_state.side_to_move;
        legal_moves(&mut self.game_state, color)
    }

    /// Destinations of the piece on `from`, for highlighting.
    pub fn legal_moves_from(&mut self, from: Square) -> Vec<ChessMove> {
        legal_moves_from(&mut self.game_state, from)
    }

    /// Human move request. Refused while the computer is to move; otherwise
    /// the computer's answer, if any, is played before returning.
    pub fn accept_move(&mut self, from: Square, to: Square) -> MoveOutcome {
        if self.config.is_computer(self.game_state.side_to_move) {
            warn!(%from, %to, "move rejected: computer is to move");
            return MoveOutcome::rejected();
        }
        self.execute_move(from, to)
    }

    /// Human move request from raw `(row, col)` coordinates.
    pub fn accept_move_at(&mut self, from: (i32, i32), to: (i32, i32)) -> MoveOutcome {
        match (Square::new(from.0, from.1), Square::new(to.0, to.1)) {
            (Ok(from), Ok(to)) => self.accept_move(from, to),
            (Err(err), _) | (_, Err(err)) => {
                warn!(%err, "move rejected");
                MoveOutcome::rejected()
            }
        }
    }

    /// Let the engine move if it is its turn and the game is still running.
    ///
    /// Returns `None` when it is not the computer's turn, when the game is
    /// over, or when the engine finds no move at all.
    pub fn play_computer_turn(&mut self) -> Option<MoveOutcome> {
        let color = self.game_state.side_to_move;
        if self.game_state.status.is_terminal() || !self.config.is_computer(color) {
            return None;
        }

        let result = self.engine.choose_move(&mut self.game_state, color);
        let Some(mv) = result.best_move else {
            warn!(%color, "computer has no move available");
            return None;
        };
        info!(
            %color,
            %mv,
            score = result.best_score,
            nodes = result.nodes,
            depth = result.depth,
            "computer move chosen"
        );

        Some(self.execute_move(mv.from, mv.to))
    }

    /// Start over from the standard layout. Plays the computer's opening move
    /// when it has white.
    pub fn reset(&mut self) -> Option<MoveOutcome> {
        self.game_state = GameState::new_game();
        self.engine.new_game();
        self.emit(&[GameEvent::GameReset]);
        debug!("game reset");
        self.play_computer_turn()
    }

    /// Change the computer's strength. Starts a new game.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) -> ChessResult<Option<MoveOutcome>> {
        self.engine
            .set_option("Difficulty", &difficulty.to_string())?;
        self.config.difficulty = difficulty;
        Ok(self.reset())
    }

    /// Forward a named option to the engine. `Difficulty` goes through
    /// [`GameController::set_difficulty`], so it also starts a new game.
    pub fn set_engine_option(&mut self, name: &str, value: &str) -> ChessResult<()> {
        if name.trim().eq_ignore_ascii_case("difficulty") {
            let difficulty: Difficulty = value.parse()?;
            self.set_difficulty(difficulty)?;
            return Ok(());
        }
        self.engine.set_option(name, value)
    }

    pub fn render(&self) -> String {
        render_game_state(&self.game_state)
    }

    fn execute_move(&mut self, from: Square, to: Square) -> MoveOutcome {
        let mut outcome = accept_move(&mut self.game_state, from, to);
        if !outcome.applied {
            return outcome;
        }

        self.emit(&outcome.events);
        if tracing::enabled!(tracing::Level::TRACE) {
            trace!("\n{}", render_game_state(&self.game_state));
        }

        outcome.reply = self.play_computer_turn().map(Box::new);
        outcome
    }

    fn emit(&mut self, events: &[GameEvent]) {
        for listener in &mut self.listeners {
            for event in events {
                listener.on_event(event);
            }
        }
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::GameController;
    use crate::game::game_config::GameConfig;
    use crate::game::game_events::{EventLog, GameEvent};
    use crate::game_state::chess_types::*;
    use crate::search::board_scoring::JitterMode;
    use crate::search::difficulty::Difficulty;
    use crate::utils::algebraic::algebraic_to_square;

    fn sq(name: &str) -> Square {
        algebraic_to_square(name).expect("square name should parse")
    }

    fn quiet_config() -> GameConfig {
        GameConfig::default()
            .with_difficulty(Difficulty::Easy)
            .with_jitter(JitterMode::Disabled)
    }

    #[test]
    fn computer_answers_a_human_move() {
        let mut controller = GameController::new(quiet_config());
        let log = Rc::new(RefCell::new(EventLog::new()));
        controller.add_listener(Box::new(Rc::clone(&log)));

        let outcome = controller.accept_move(sq("e2"), sq("e4"));
        assert!(outcome.applied);

        let reply = outcome.reply.expect("computer should answer");
        assert!(reply.applied);
        assert_eq!(reply.mover, Some(Color::Dark));
        assert!(reply.reply.is_none());
        assert_eq!(controller.game_state().side_to_move, Color::Light);

        let moved: Vec<Color> = log
            .borrow()
            .events()
            .iter()
            .filter_map(|event| match event {
                GameEvent::PieceMoved { color, .. } => Some(*color),
                _ => None,
            })
            .collect();
        assert_eq!(moved, vec![Color::Light, Color::Dark]);
    }

    #[test]
    fn human_cannot_move_for_the_computer() {
        let config = quiet_config().with_computer_color(Some(Color::Light));
        let mut controller = GameController::new(config);
        let before = controller.game_state().clone();

        assert!(!controller.accept_move(sq("e2"), sq("e4")).applied);
        assert_eq!(controller.game_state(), &before);
    }

    #[test]
    fn computer_opens_as_white_after_reset() {
        let config = quiet_config().with_computer_color(Some(Color::Light));
        let mut controller = GameController::new(config);

        let opening = controller.reset().expect("computer plays white");
        assert!(opening.applied);
        assert_eq!(opening.mover, Some(Color::Light));
        assert_eq!(controller.game_state().side_to_move, Color::Dark);

        assert!(controller.accept_move(sq("e7"), sq("e5")).applied);
    }

    #[test]
    fn two_player_games_alternate_without_replies() {
        let mut controller = GameController::new(GameConfig::two_players());

        let first = controller.accept_move(sq("e2"), sq("e4"));
        assert!(first.applied && first.reply.is_none());
        assert!(!controller.accept_move(sq("d2"), sq("d4")).applied);
        assert!(controller.accept_move(sq("e7"), sq("e5")).applied);
        assert_eq!(controller.legal_moves().len(), 29);
    }

    #[test]
    fn difficulty_change_resets_the_game() {
        let mut controller = GameController::new(quiet_config());
        assert!(controller.accept_move(sq("d2"), sq("d4")).applied);

        let opening = controller
            .set_difficulty(Difficulty::Hard)
            .expect("difficulty should apply");
        assert!(opening.is_none());
        assert_eq!(controller.config().difficulty, Difficulty::Hard);
        assert_eq!(controller.game_state(), &GameState::new_game());
    }

    #[test]
    fn off_board_request_is_rejected() {
        let mut controller = GameController::new(GameConfig::two_players());
        assert!(!controller.accept_move_at((6, 4), (6, 9)).applied);
        assert!(controller.accept_move_at((6, 4), (4, 4)).applied);
        assert_eq!(controller.legal_moves_from(sq("g8")).len(), 2);
    }

    #[test]
    fn difficulty_option_syncs_config_and_resets() {
        let mut controller = GameController::new(quiet_config());
        assert!(controller.accept_move(sq("e2"), sq("e4")).applied);

        controller
            .set_engine_option("Difficulty", "hard")
            .expect("difficulty option");
        assert_eq!(controller.config().difficulty, Difficulty::Hard);
        assert_eq!(controller.game_state(), &GameState::new_game());

        assert!(controller.set_engine_option("difficulty", "brutal").is_err());
        assert_eq!(controller.config().difficulty, Difficulty::Hard);
    }

    #[test]
    fn engine_options_pass_through() {
        let mut controller = GameController::new(quiet_config());
        controller
            .set_engine_option("Seed", "11")
            .expect("seed option");
        assert!(controller.set_engine_option("Ponder", "true").is_err());
        assert!(!controller.engine_name().is_empty());
    }
}
