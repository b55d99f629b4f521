//! Core domain types for tic-tac-toe.

use super::action::{Move, MoveError};
use super::position::Position;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Board symbol for this player's mark.
    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position without validation.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Empties the square at the given position.
    pub fn clear(&mut self, pos: Position) {
        self.set(pos, Square::Empty);
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Empty positions in row-major order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.is_empty(*pos))
    }

    /// Number of occupied squares.
    pub fn marks_placed(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Applies a validated move.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::SquareOccupied`] if the target square is taken.
    #[instrument(skip(self), fields(position = %mov.position, player = %mov.player))]
    pub fn place(&mut self, mov: Move) -> Result<(), MoveError> {
        if !self.is_empty(mov.position) {
            return Err(MoveError::SquareOccupied(mov.position));
        }
        self.set(mov.position, Square::Occupied(mov.player));
        Ok(())
    }

    /// Formats the board as a human-readable grid with numbered empty squares.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => (pos + 1).to_string(),
                    Square::Occupied(player) => player.symbol().to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Compact form: three rows of `X`, `O` or `.` separated by `/`.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (idx, square) in self.squares.iter().enumerate() {
            if idx > 0 && idx % 3 == 0 {
                write!(f, "/")?;
            }
            let c = match square {
                Square::Empty => '.',
                Square::Occupied(player) => player.symbol(),
            };
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

/// Parses nine cells of `X`, `O` or `.`/`-`/`_`; whitespace, `|` and `/` are ignored.
impl FromStr for Board {
    type Err = MoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Board::new();
        let mut count = 0;
        for c in s.chars() {
            let square = match c.to_ascii_uppercase() {
                'X' => Square::Occupied(Player::X),
                'O' => Square::Occupied(Player::O),
                '.' | '-' | '_' => Square::Empty,
                c if c.is_whitespace() || c == '|' || c == '/' => continue,
                other => return Err(MoveError::Unparseable(format!("unexpected cell '{other}'"))),
            };
            if count == 9 {
                return Err(MoveError::Unparseable("more than nine cells".to_string()));
            }
            board.squares[count] = square;
            count += 1;
        }
        if count != 9 {
            return Err(MoveError::Unparseable(format!(
                "expected nine cells, found {count}"
            )));
        }
        Ok(board)
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// True once the game has a winner or is drawn.
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }
}
