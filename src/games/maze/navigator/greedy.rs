//! Greedy Manhattan-distance navigation.

use super::super::error::MazeError;
use super::super::types::{Coord, Maze};
use tracing::{instrument, trace};

/// Moves to the traversable neighbor closest to `goal` by Manhattan distance.
///
/// Neighbors are scanned Up, Right, Down, Left and the first one at the
/// minimum distance wins.
///
/// This is a purely local rule. It never plans around walls, so in a maze
/// with branches it can walk into a dead end that points at the goal and
/// then shuttle back and forth at its mouth forever. It is not a shortest
/// path search.
///
/// # Errors
///
/// Returns [`MazeError::NoAvailableMove`] if `position` has no traversable
/// neighbor.
#[instrument(level = "trace", skip(maze))]
pub fn step(maze: &Maze, position: Coord, goal: Coord) -> Result<Coord, MazeError> {
    let next = maze
        .neighbors(position)
        .map(|(_, cell)| cell)
        .min_by_key(|cell| cell.manhattan(goal))
        .ok_or(MazeError::NoAvailableMove(position))?;
    trace!(%next, distance = next.manhattan(goal), "Greedy step");
    Ok(next)
}
