//! Maze error types.

use super::types::Coord;

/// Error raised by maze generation, parsing or navigation.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MazeError {
    /// Dimensions must be odd and leave room for distinct start and goal cells.
    #[display(
        "Invalid maze dimensions {}x{}: both must be odd, at least 3, and not both 3",
        width,
        height
    )]
    InvalidDimensions {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },

    /// The navigator has no traversable neighbor to move to.
    #[display("No available move from {}", _0)]
    NoAvailableMove(#[error(not(source))] Coord),

    /// Maze text or tiles could not be turned into a maze.
    #[display("Malformed maze: {}", _0)]
    Parse(#[error(not(source))] String),
}
