//! Perfect-play move selection for tic-tac-toe.
//!
//! The search scores every legal continuation to full depth. The side to
//! move at the root is the maximizer: a win for it scores `10 - depth`, a
//! loss `depth - 10`, a draw `0`, so faster wins and slower losses rank
//! higher. The root's own placement sits at depth 0.
//!
//! Hypothetical placements are made on the board being searched and undone
//! by a [`Placement`] guard, so the board always comes back unchanged.

use super::rules::{check_winner, is_full, is_winner};
use super::{Board, Move, Player, Position, Square};
use serde::{Deserialize, Serialize};
use std::ops::{Deref, DerefMut};
use tracing::{debug, instrument};

/// Score of a win found at depth 0.
pub const WIN_SCORE: i32 = 10;

/// How the game tree is explored.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum SearchStrategy {
    /// Plain minimax over every continuation.
    #[default]
    Exhaustive,
    /// Minimax with alpha-beta cutoffs. Picks the same move as `Exhaustive`.
    AlphaBeta,
}

/// Scores a position from the maximizer's point of view.
///
/// Returns `None` while the game is still undecided.
pub fn evaluate(board: &Board, depth: i32, maximizer: Player) -> Option<i32> {
    if is_winner(board, maximizer) {
        Some(WIN_SCORE - depth)
    } else if is_winner(board, maximizer.opponent()) {
        Some(depth - WIN_SCORE)
    } else if is_full(board) {
        Some(0)
    } else {
        None
    }
}

/// A mark placed for the duration of one search branch.
///
/// Dropping the guard empties the square again.
struct Placement<'a> {
    board: &'a mut Board,
    position: Position,
}

impl<'a> Placement<'a> {
    fn new(board: &'a mut Board, position: Position, player: Player) -> Self {
        debug_assert!(board.is_empty(position));
        board.set(position, Square::Occupied(player));
        Self { board, position }
    }
}

impl Deref for Placement<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Placement<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Placement<'_> {
    fn drop(&mut self) {
        self.board.clear(self.position);
    }
}

fn mover(maximizing: bool, maximizer: Player) -> Player {
    if maximizing {
        maximizer
    } else {
        maximizer.opponent()
    }
}

fn minimax(board: &mut Board, depth: i32, maximizing: bool, maximizer: Player) -> i32 {
    if let Some(score) = evaluate(board, depth, maximizer) {
        return score;
    }

    let player = mover(maximizing, maximizer);
    let mut best = if maximizing { i32::MIN } else { i32::MAX };
    for pos in Position::ALL {
        if !board.is_empty(pos) {
            continue;
        }
        let mut placed = Placement::new(board, pos, player);
        let score = minimax(&mut placed, depth + 1, !maximizing, maximizer);
        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }
    best
}

fn alpha_beta(
    board: &mut Board,
    depth: i32,
    maximizing: bool,
    maximizer: Player,
    mut alpha: i32,
    mut beta: i32,
) -> i32 {
    if let Some(score) = evaluate(board, depth, maximizer) {
        return score;
    }

    let player = mover(maximizing, maximizer);
    let mut best = if maximizing { i32::MIN } else { i32::MAX };
    for pos in Position::ALL {
        if !board.is_empty(pos) {
            continue;
        }
        let mut placed = Placement::new(board, pos, player);
        let score = alpha_beta(&mut placed, depth + 1, !maximizing, maximizer, alpha, beta);
        if maximizing {
            best = best.max(score);
            alpha = alpha.max(best);
        } else {
            best = best.min(score);
            beta = beta.min(best);
        }
        if alpha >= beta {
            break;
        }
    }
    best
}

fn is_terminal(board: &Board) -> bool {
    check_winner(board).is_some() || is_full(board)
}

/// Root score of every legal move for `side`, in row-major order.
///
/// Empty for a finished game.
#[instrument(skip(board), fields(board = %board, side = %side))]
pub fn score_moves(board: &Board, side: Player) -> Vec<(Move, i32)> {
    if is_terminal(board) {
        return Vec::new();
    }

    let mut scratch = board.clone();
    let mut scores = Vec::with_capacity(9);
    for pos in Position::ALL {
        if !scratch.is_empty(pos) {
            continue;
        }
        let mut placed = Placement::new(&mut scratch, pos, side);
        let score = minimax(&mut placed, 0, false, side);
        scores.push((Move::new(side, pos), score));
    }
    scores
}

/// Finds the optimal move for `side`, searching on the given board in place.
///
/// The board is mutated during the search and restored before returning.
/// Ties go to the first move in row-major order. Returns `None` when the
/// board already has a winner or no empty square.
#[instrument(skip(board), fields(board = %board, side = %side, strategy = %strategy))]
pub fn best_move_in_place(
    board: &mut Board,
    side: Player,
    strategy: SearchStrategy,
) -> Option<Move> {
    if is_terminal(board) {
        debug!("Board is terminal, no move");
        return None;
    }

    let mut best: Option<(Position, i32)> = None;
    for pos in Position::ALL {
        if !board.is_empty(pos) {
            continue;
        }
        let best_score = best.map_or(i32::MIN, |(_, score)| score);
        let mut placed = Placement::new(board, pos, side);
        let score = match strategy {
            SearchStrategy::Exhaustive => minimax(&mut placed, 0, false, side),
            // Children that cannot beat the current best fail low and are skipped.
            SearchStrategy::AlphaBeta => {
                alpha_beta(&mut placed, 0, false, side, best_score, i32::MAX)
            }
        };
        if score > best_score {
            best = Some((pos, score));
        }
    }

    best.map(|(pos, score)| {
        debug!(position = %pos, score, "Selected move");
        Move::new(side, pos)
    })
}

/// Finds the optimal move for `side` with an exhaustive search.
pub fn best_move(board: &Board, side: Player) -> Option<Move> {
    best_move_with(board, side, SearchStrategy::Exhaustive)
}

/// Finds the optimal move for `side` with the chosen strategy.
pub fn best_move_with(board: &Board, side: Player, strategy: SearchStrategy) -> Option<Move> {
    let mut scratch = board.clone();
    best_move_in_place(&mut scratch, side, strategy)
}
