//! Turn bookkeeping for a single game of tic-tac-toe.
//!
//! The game tracks whose turn it is and refuses moves once a result is
//! known. Move choice lives elsewhere: humans through the console, the
//! engine through [`super::minimax`].

use super::action::{Move, MoveError};
use super::position::Position;
use super::rules;
use super::types::{Board, GameStatus, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Tic-tac-toe game: board, side to move, status and history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    to_move: Player,
    status: GameStatus,
    history: Vec<Move>,
}

impl Game {
    /// Creates a new game with X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns a reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the moves played so far.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Places the current player's mark at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] once the game is decided and
    /// [`MoveError::SquareOccupied`] for a taken square. The game is left
    /// unchanged on error.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn play(&mut self, pos: Position) -> Result<GameStatus, MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameOver);
        }

        let mov = Move::new(self.to_move, pos);
        self.board.place(mov)?;
        self.history.push(mov);
        self.status = rules::status(&self.board);
        if !self.status.is_over() {
            self.to_move = self.to_move.opponent();
        }

        debug!(status = ?self.status, "Move applied");
        Ok(self.status)
    }

    /// Clears the board for a fresh game with X to move.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
