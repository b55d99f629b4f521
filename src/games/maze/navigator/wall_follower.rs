//! Left-hand wall following.

use super::super::types::{Coord, Direction, Maze};
use tracing::{instrument, trace};

/// Quarter turns from the current facing, tried in order: left, forward,
/// right, back.
const TURN_PRIORITY: [usize; 4] = [3, 0, 1, 2];

/// Takes one step by the left-hand rule.
///
/// Tries the cell to the agent's left, then ahead, then right, then behind,
/// relative to `facing`. Returns the first traversable one together with
/// the direction moved, which becomes the new facing. A fully enclosed
/// agent gets `(position, facing)` back unchanged.
///
/// In a perfect maze this traces the outline of the corridor tree, passing
/// through every cell and returning to the start after two steps per
/// corridor segment, so the goal is always reached.
#[instrument(level = "trace", skip(maze))]
pub fn step(maze: &Maze, position: Coord, facing: Direction) -> (Coord, Direction) {
    let (next, heading) = TURN_PRIORITY
        .iter()
        .map(|&turns| facing.turn(turns))
        .find_map(|dir| maze.step(position, dir).map(|cell| (cell, dir)))
        .unwrap_or((position, facing));
    trace!(%next, %heading, "Wall-follower step");
    (next, heading)
}
