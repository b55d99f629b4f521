//! Maze race: perfect maze generation and navigation heuristics.

mod error;
pub mod generator;
pub mod navigator;
mod types;

pub use error::MazeError;
pub use generator::{MIN_DIMENSION, generate, generate_with_rng, validate_dimensions};
pub use navigator::{
    GreedyNavigator, Heuristic, Navigator, WallFollowerNavigator, greedy::step as greedy_step,
    wall_follower::step as wall_follower_step,
};
pub use types::{Coord, Direction, Maze, Tile};
