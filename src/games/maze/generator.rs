//! Perfect maze generation by randomized depth-first carving.
//!
//! Cells live on odd coordinates and the even rows/columns between them
//! start out as walls. Carving begins at `(1, 1)`; each visited cell tries
//! the four directions in a freshly shuffled order and, for every cell two
//! steps away that is still solid, knocks out the wall in between and
//! descends into it. Every cell is entered exactly once, so the corridors
//! form a spanning tree: one simple path between any two open cells.
//!
//! The depth-first walk keeps its frames on an explicit stack so corridor
//! length is not bounded by the call stack.

use super::error::MazeError;
use super::types::{Coord, Direction, Maze, Tile};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, instrument};

/// Smallest accepted width or height.
pub const MIN_DIMENSION: usize = 3;

/// Checks that a `width` x `height` grid can hold a perfect maze with
/// distinct start and goal cells.
///
/// # Errors
///
/// Returns [`MazeError::InvalidDimensions`] for even sizes, sizes below
/// [`MIN_DIMENSION`], or a 3x3 grid whose only cell would be both start
/// and goal.
pub fn validate_dimensions(width: usize, height: usize) -> Result<(), MazeError> {
    let odd_and_large = |n: usize| n >= MIN_DIMENSION && n % 2 == 1;
    if !odd_and_large(width) || !odd_and_large(height) || (width, height) == (3, 3) {
        return Err(MazeError::InvalidDimensions { width, height });
    }
    Ok(())
}

/// A cell being carved and the directions it has left to try.
struct Frame {
    cell: Coord,
    directions: [Direction; 4],
    next: usize,
}

impl Frame {
    fn enter<R: Rng + ?Sized>(cell: Coord, rng: &mut R) -> Self {
        let mut directions = Direction::ALL;
        directions.shuffle(rng);
        Self {
            cell,
            directions,
            next: 0,
        }
    }
}

/// Generates a maze from the given randomness source.
///
/// Start is `(1, 1)` and goal is `(width - 2, height - 2)`.
///
/// # Errors
///
/// See [`validate_dimensions`].
#[instrument(skip(rng))]
pub fn generate_with_rng<R: Rng + ?Sized>(
    width: usize,
    height: usize,
    rng: &mut R,
) -> Result<Maze, MazeError> {
    validate_dimensions(width, height)?;

    let mut tiles = vec![Tile::Wall; width * height];
    let index = |c: Coord| c.y * width + c.x;

    let origin = Coord::new(1, 1);
    tiles[index(origin)] = Tile::Open;
    let mut stack = vec![Frame::enter(origin, rng)];
    let mut carved = 1usize;

    while let Some(frame) = stack.last_mut() {
        let Some(dir) = frame.directions.get(frame.next).copied() else {
            stack.pop();
            continue;
        };
        frame.next += 1;
        let cell = frame.cell;

        let (Some(between), Some(target)) = (cell.offset(dir, 1), cell.offset(dir, 2)) else {
            continue;
        };
        if target.x >= width || target.y >= height || tiles[index(target)] != Tile::Wall {
            continue;
        }

        tiles[index(between)] = Tile::Open;
        tiles[index(target)] = Tile::Open;
        carved += 1;
        stack.push(Frame::enter(target, rng));
    }

    let goal = Coord::new(width - 2, height - 2);
    tiles[index(origin)] = Tile::Start;
    tiles[index(goal)] = Tile::Goal;
    debug!(cells = carved, "Carving finished");

    Maze::from_tiles(width, height, tiles)
}

/// Generates a maze, deterministic when `seed` is given.
///
/// Without a seed the generator draws from OS entropy.
///
/// # Errors
///
/// See [`validate_dimensions`].
#[instrument]
pub fn generate(width: usize, height: usize, seed: Option<u64>) -> Result<Maze, MazeError> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let maze = generate_with_rng(width, height, &mut rng)?;
    info!(width, height, ?seed, "Maze generated");
    Ok(maze)
}
