//! Strictly Grids - decision engines for two small grid games
//!
//! This library provides the computer player's logic for a human-versus-
//! computer tic-tac-toe game and a maze race.
//!
//! # Architecture
//!
//! - **Tic-tac-toe**: board model, win/draw rules, and a full-depth minimax
//!   search that always finds a perfect move
//! - **Maze**: perfect maze generation plus greedy and wall-following
//!   navigation heuristics
//! - **Config**: TOML session settings
//! - **Play**: console game loops that drive the engines
//!
//! # Example
//!
//! ```
//! use strictly_grids::{Board, Player, Position, best_move, generate, greedy_step};
//!
//! let board = Board::new();
//! let mov = best_move(&board, Player::X).unwrap();
//! assert_eq!(mov.position, Position::TopLeft);
//!
//! let maze = generate(15, 11, Some(42)).unwrap();
//! let next = greedy_step(&maze, maze.start(), maze.goal()).unwrap();
//! assert!(maze.is_traversable(next));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
pub mod play;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig, MazeConfig, TicTacToeConfig};

// Crate-level exports - Tic-tac-toe
pub use games::tictactoe::{
    Board, Game, GameStatus, Move, MoveError, Player, Position, SearchStrategy, Square,
    WIN_SCORE, best_move, best_move_in_place, best_move_with, check_winner, evaluate, is_draw,
    is_full, is_winner, score_moves, status,
};

// Crate-level exports - Maze
pub use games::maze::{
    Coord, Direction, GreedyNavigator, Heuristic, MIN_DIMENSION, Maze, MazeError, Navigator,
    Tile, WallFollowerNavigator, generate, generate_with_rng, greedy_step, validate_dimensions,
    wall_follower_step,
};
