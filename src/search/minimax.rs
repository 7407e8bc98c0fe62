//! Fixed-depth minimax with alpha-beta pruning.
//!
//! White maximizes and black minimizes the white-positive score. Every node
//! applies its moves to the one shared state and reverts them before
//! returning, so the caller gets its position back exactly. Moves are visited
//! in generator order and ties keep the first move found, which makes the
//! chosen move reproducible whenever the scorer is.

use tracing::{debug, trace};

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_generator::legal_moves;
use crate::search::board_scoring::{Evaluator, PositionScorer};
use crate::search::difficulty::DifficultyProfile;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SearchResult {
    pub best_move: Option<ChessMove>,
    pub best_score: f64,
    pub depth: u8,
    pub nodes: u64,
}

pub struct Searcher<'a, S: PositionScorer> {
    scorer: &'a mut S,
    profile: DifficultyProfile,
    nodes: u64,
}

impl<'a, S: PositionScorer> Searcher<'a, S> {
    pub fn new(scorer: &'a mut S, profile: DifficultyProfile) -> Self {
        Self {
            scorer,
            profile,
            nodes: 0,
        }
    }

    /// Positions visited so far, leaves included.
    #[inline]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Minimax value of `game_state` searched `depth` plies deep.
    ///
    /// `maximizing` selects the side to move: white when true. A node whose
    /// side has no move at all is scored statically.
    pub fn minimax(
        &mut self,
        game_state: &mut GameState,
        depth: u8,
        maximizing: bool,
        mut alpha: f64,
        mut beta: f64,
    ) -> f64 {
        self.nodes += 1;

        if depth == 0 {
            return self.scorer.score(game_state, &self.profile);
        }

        let color = if maximizing { Color::Light } else { Color::Dark };
        let moves = legal_moves(game_state, color);
        if moves.is_empty() {
            return self.scorer.score(game_state, &self.profile);
        }

        let mut best = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };

        for mv in moves {
            let Some(undo) = game_state.make_move(&mv) else {
                continue;
            };
            let score = self.minimax(game_state, depth - 1, !maximizing, alpha, beta);
            game_state.unmake_move(undo);

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }
            if beta <= alpha {
                break;
            }
        }

        best
    }

    /// Best move for `color` at the profile's depth.
    ///
    /// Each root move is searched with a fresh window one ply shallower from
    /// the opponent's side. `best_move` is `None` only when `color` has no move.
    pub fn choose_move(&mut self, game_state: &mut GameState, color: Color) -> SearchResult {
        let depth = self.profile.depth.max(1);
        let reply_maximizing = color.opposite() == Color::Light;
        let start_nodes = self.nodes;

        let mut best: Option<(ChessMove, f64)> = None;
        for mv in legal_moves(game_state, color) {
            let Some(undo) = game_state.make_move(&mv) else {
                continue;
            };
            let score = self.minimax(
                game_state,
                depth - 1,
                reply_maximizing,
                f64::NEG_INFINITY,
                f64::INFINITY,
            );
            game_state.unmake_move(undo);
            trace!(%mv, score, "root move scored");

            let improves = match best {
                None => true,
                Some((_, best_score)) => match color {
                    Color::Light => score > best_score,
                    Color::Dark => score < best_score,
                },
            };
            if improves {
                best = Some((mv, score));
            }
        }

        let nodes = self.nodes - start_nodes;
        match best {
            Some((mv, score)) => {
                debug!(%color, %mv, score, depth, nodes, "search finished");
                SearchResult {
                    best_move: Some(mv),
                    best_score: score,
                    depth,
                    nodes,
                }
            }
            None => SearchResult {
                best_move: None,
                best_score: self.scorer.score(game_state, &self.profile),
                depth,
                nodes,
            },
        }
    }
}

/// Search `color`'s best move on `game_state` with `scorer` and `profile`.
pub fn choose_move<S: PositionScorer>(
    game_state: &mut GameState,
    color: Color,
    scorer: &mut S,
    profile: &DifficultyProfile,
) -> SearchResult {
    Searcher::new(scorer, *profile).choose_move(game_state, color)
}

/// Computer move for `color` under `profile`, with entropy-seeded noise.
pub fn choose_computer_move(
    game_state: &mut GameState,
    color: Color,
    profile: &DifficultyProfile,
) -> Option<ChessMove> {
    let mut evaluator = Evaluator::default();
    choose_move(game_state, color, &mut evaluator, profile).best_move
}
