//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating game state
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so the search engine and the game loop share them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{check_winner, is_winner};

use super::{Board, GameStatus};

/// Classifies the board as in progress, won, or drawn.
pub fn status(board: &Board) -> GameStatus {
    if let Some(winner) = check_winner(board) {
        GameStatus::Won(winner)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::super::Player;
    use super::*;

    #[test]
    fn test_status_variants() {
        assert_eq!(status(&Board::new()), GameStatus::InProgress);
        assert_eq!(
            status(&"OOO/XX./X..".parse().unwrap()),
            GameStatus::Won(Player::O)
        );
        assert_eq!(status(&"XOX/OXX/OXO".parse().unwrap()), GameStatus::Draw);
    }
}
