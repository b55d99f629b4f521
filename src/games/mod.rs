//! Game engines.

pub mod maze;
pub mod tictactoe;
