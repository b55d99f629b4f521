//! Maze navigation heuristics for the computer-controlled racer.
//!
//! Each heuristic is a pure step function. The [`Navigator`] trait wraps
//! them behind one interface so a game loop can drive whichever heuristic
//! was chosen without caring which state it threads between turns.

pub mod greedy;
pub mod wall_follower;

use super::error::MazeError;
use super::types::{Coord, Direction, Maze};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Something that picks the next cell for an agent in a maze.
pub trait Navigator {
    /// Short name for logs and prompts.
    fn name(&self) -> &str;

    /// Chooses the next cell from `from`.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::NoAvailableMove`] when the agent cannot move.
    fn next_step(&mut self, maze: &Maze, from: Coord) -> Result<Coord, MazeError>;
}

/// Which heuristic drives the computer racer.
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
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Heuristic {
    /// Step to the neighbor closest to the goal.
    #[default]
    Greedy,
    /// Keep the left hand on the wall.
    WallFollower,
}

impl Heuristic {
    /// Builds a navigator for this heuristic.
    ///
    /// `initial_facing` only matters for the wall follower.
    pub fn navigator(self, initial_facing: Direction) -> Box<dyn Navigator> {
        match self {
            Heuristic::Greedy => Box::new(GreedyNavigator),
            Heuristic::WallFollower => Box::new(WallFollowerNavigator::new(initial_facing)),
        }
    }
}

/// Greedy Manhattan-distance navigator heading for the maze's goal.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyNavigator;

impl Navigator for GreedyNavigator {
    fn name(&self) -> &str {
        "greedy"
    }

    #[instrument(skip(self, maze))]
    fn next_step(&mut self, maze: &Maze, from: Coord) -> Result<Coord, MazeError> {
        greedy::step(maze, from, maze.goal())
    }
}

/// Left-hand wall follower that remembers its facing between steps.
#[derive(Debug, Clone, Copy)]
pub struct WallFollowerNavigator {
    facing: Direction,
}

impl WallFollowerNavigator {
    /// Facing assumed when nothing else is known.
    pub const DEFAULT_FACING: Direction = Direction::Right;

    /// Creates a follower facing `facing`.
    pub fn new(facing: Direction) -> Self {
        Self { facing }
    }

    /// Current facing.
    pub fn facing(&self) -> Direction {
        self.facing
    }
}

impl Default for WallFollowerNavigator {
    fn default() -> Self {
        Self::new(Self::DEFAULT_FACING)
    }
}

impl Navigator for WallFollowerNavigator {
    fn name(&self) -> &str {
        "wall-follower"
    }

    #[instrument(skip(self, maze), fields(facing = %self.facing))]
    fn next_step(&mut self, maze: &Maze, from: Coord) -> Result<Coord, MazeError> {
        let (next, facing) = wall_follower::step(maze, from, self.facing);
        if next == from {
            debug!("Wall follower is boxed in");
            return Err(MazeError::NoAvailableMove(from));
        }
        self.facing = facing;
        Ok(next)
    }
}
