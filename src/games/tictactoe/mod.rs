//! Tic-tac-toe: board model, rules, and a perfect-play search engine.

mod action;
mod game;
pub mod minimax;
mod position;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use game::Game;
pub use minimax::{
    SearchStrategy, WIN_SCORE, best_move, best_move_in_place, best_move_with, evaluate,
    score_moves,
};
pub use position::Position;
pub use rules::{check_winner, is_draw, is_full, is_winner, status};
pub use types::{Board, GameStatus, Player, Square};
