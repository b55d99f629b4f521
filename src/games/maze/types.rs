//! Grid model for mazes: tiles, coordinates and facing directions.

use super::error::MazeError;
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Contents of one maze cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tile {
    /// Impassable.
    Wall,
    /// Corridor.
    Open,
    /// Where both racers begin.
    Start,
    /// Cell to reach.
    Goal,
}

impl Tile {
    /// Open, Start and Goal can all be walked on.
    pub fn is_traversable(self) -> bool {
        !matches!(self, Tile::Wall)
    }

    /// Character used in the text form of a maze.
    pub fn symbol(self) -> char {
        match self {
            Tile::Wall => '#',
            Tile::Open => '.',
            Tile::Start => 'S',
            Tile::Goal => 'G',
        }
    }
}

/// Column/row coordinate inside a maze.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, new,
)]
pub struct Coord {
    /// Column, growing rightwards.
    pub x: usize,
    /// Row, growing downwards.
    pub y: usize,
}

impl Coord {
    /// Sum of absolute coordinate differences.
    pub fn manhattan(self, other: Coord) -> usize {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// Neighbor `steps` cells away in `dir`, or `None` below zero.
    pub fn offset(self, dir: Direction, steps: usize) -> Option<Coord> {
        let (dx, dy) = dir.delta();
        let x = self.x.checked_add_signed(dx * steps as isize)?;
        let y = self.y.checked_add_signed(dy * steps as isize)?;
        Some(Coord { x, y })
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Compass direction, cyclic in the order Up, Right, Down, Left.
#[derive(
    Debug,
    Clone,
    Copy,
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
pub enum Direction {
    /// Towards row 0.
    Up,
    /// Towards higher columns.
    Right,
    /// Towards higher rows.
    Down,
    /// Towards column 0.
    Left,
}

impl Direction {
    /// All directions in scan order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Unit step as `(dx, dy)`.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
        }
    }

    /// Rotates clockwise by `quarter_turns` 90° steps.
    pub fn turn(self, quarter_turns: usize) -> Direction {
        Self::ALL[(self as usize + quarter_turns) % 4]
    }

    /// Direction after a left turn.
    pub fn left(self) -> Direction {
        self.turn(3)
    }

    /// Direction after a right turn.
    pub fn right(self) -> Direction {
        self.turn(1)
    }

    /// Opposite direction.
    pub fn reverse(self) -> Direction {
        self.turn(2)
    }
}

/// Rectangular maze with exactly one start and one goal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct Maze {
    /// Number of columns.
    #[getter(copy)]
    width: usize,
    /// Number of rows.
    #[getter(copy)]
    height: usize,
    /// Row-major tiles.
    #[getter(skip)]
    tiles: Vec<Tile>,
    /// Start cell.
    #[getter(copy)]
    start: Coord,
    /// Goal cell.
    #[getter(copy)]
    goal: Coord,
}

impl Maze {
    /// Builds a maze from row-major tiles, locating start and goal.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::Parse`] if the tile count does not match the
    /// dimensions or start/goal are missing or repeated.
    pub fn from_tiles(width: usize, height: usize, tiles: Vec<Tile>) -> Result<Self, MazeError> {
        if width == 0 || height == 0 || tiles.len() != width * height {
            return Err(MazeError::Parse(format!(
                "{} tiles do not fill a {width}x{height} grid",
                tiles.len()
            )));
        }
        let start = Self::find_unique(&tiles, width, Tile::Start)?;
        let goal = Self::find_unique(&tiles, width, Tile::Goal)?;
        Ok(Self {
            width,
            height,
            tiles,
            start,
            goal,
        })
    }

    fn find_unique(tiles: &[Tile], width: usize, wanted: Tile) -> Result<Coord, MazeError> {
        let mut found = tiles
            .iter()
            .enumerate()
            .filter(|(_, tile)| **tile == wanted)
            .map(|(idx, _)| Coord::new(idx % width, idx / width));
        match (found.next(), found.next()) {
            (Some(coord), None) => Ok(coord),
            (None, _) => Err(MazeError::Parse(format!("no '{}' cell", wanted.symbol()))),
            (Some(_), Some(_)) => Err(MazeError::Parse(format!(
                "more than one '{}' cell",
                wanted.symbol()
            ))),
        }
    }

    /// True if `coord` lies inside the grid.
    pub fn contains(&self, coord: Coord) -> bool {
        coord.x < self.width && coord.y < self.height
    }

    /// Tile at `coord`, or `None` outside the grid.
    pub fn get(&self, coord: Coord) -> Option<Tile> {
        self.contains(coord)
            .then(|| self.tiles[coord.y * self.width + coord.x])
    }

    /// True for in-bounds Open/Start/Goal cells.
    pub fn is_traversable(&self, coord: Coord) -> bool {
        self.get(coord).is_some_and(Tile::is_traversable)
    }

    /// One step from `from` in `dir` if that cell can be walked on.
    pub fn step(&self, from: Coord, dir: Direction) -> Option<Coord> {
        from.offset(dir, 1).filter(|c| self.is_traversable(*c))
    }

    /// Traversable neighbors of `from` in Up, Right, Down, Left order.
    pub fn neighbors(&self, from: Coord) -> impl Iterator<Item = (Direction, Coord)> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |dir| self.step(from, dir).map(|c| (dir, c)))
    }

    /// Every traversable cell in row-major order.
    pub fn traversable_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.tiles
            .iter()
            .enumerate()
            .filter(|(_, tile)| tile.is_traversable())
            .map(|(idx, _)| Coord::new(idx % self.width, idx / self.width))
    }
}

/// One row per line using `#`, `.`, `S` and `G`.
impl std::fmt::Display for Maze {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (y, row) in self.tiles.chunks(self.width).enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for tile in row {
                write!(f, "{}", tile.symbol())?;
            }
        }
        Ok(())
    }
}

/// Reads the text form; a space also counts as an open cell.
impl FromStr for Maze {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .lines()
            .map(|line| line.trim_end_matches('\r'))
            .filter(|line| !line.trim().is_empty())
            .collect();
        let width = rows.first().map_or(0, |row| row.chars().count());
        let mut tiles = Vec::with_capacity(width * rows.len());
        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() != width {
                return Err(MazeError::Parse(format!(
                    "row {y} has {} cells, expected {width}",
                    row.chars().count()
                )));
            }
            for c in row.chars() {
                tiles.push(match c {
                    '#' => Tile::Wall,
                    '.' | ' ' => Tile::Open,
                    'S' => Tile::Start,
                    'G' => Tile::Goal,
                    other => return Err(MazeError::Parse(format!("unexpected cell '{other}'"))),
                });
            }
        }
        Maze::from_tiles(width, rows.len(), tiles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = "\
#####
#S..#
###.#
#G..#
#####";

    #[test]
    fn test_parse_and_display() {
        let maze: Maze = SMALL.parse().unwrap();
        assert_eq!(maze.width(), 5);
        assert_eq!(maze.height(), 5);
        assert_eq!(maze.start(), Coord::new(1, 1));
        assert_eq!(maze.goal(), Coord::new(1, 3));
        assert_eq!(maze.to_string(), SMALL);
    }

    #[test]
    fn test_parse_rejects_missing_goal() {
        let err = "###\n#S#\n###".parse::<Maze>().unwrap_err();
        assert!(err.to_string().contains("'G'"));
    }

    #[test]
    fn test_parse_rejects_ragged_rows() {
        assert!("#####\n#S.G\n#####".parse::<Maze>().is_err());
    }

    #[test]
    fn test_neighbors_scan_order() {
        let maze: Maze = SMALL.parse().unwrap();
        let around: Vec<_> = maze.neighbors(Coord::new(3, 2)).collect();
        assert_eq!(
            around,
            vec![
                (Direction::Up, Coord::new(3, 1)),
                (Direction::Down, Coord::new(3, 3))
            ]
        );
    }

    #[test]
    fn test_out_of_bounds_is_not_traversable() {
        let maze: Maze = SMALL.parse().unwrap();
        assert!(!maze.is_traversable(Coord::new(5, 1)));
        assert_eq!(maze.step(Coord::new(0, 0), Direction::Up), None);
    }

    #[test]
    fn test_direction_turns() {
        assert_eq!(Direction::Up.left(), Direction::Left);
        assert_eq!(Direction::Up.right(), Direction::Right);
        assert_eq!(Direction::Left.right(), Direction::Up);
        assert_eq!(Direction::Down.reverse(), Direction::Up);
        assert_eq!(Direction::Right.turn(4), Direction::Right);
        assert_eq!("wall".parse::<Direction>().ok(), None);
        assert_eq!("Right".parse::<Direction>().ok(), Some(Direction::Right));
    }

    #[test]
    fn test_manhattan() {
        assert_eq!(Coord::new(1, 1).manhattan(Coord::new(4, 3)), 5);
        assert_eq!(Coord::new(4, 3).manhattan(Coord::new(1, 1)), 5);
    }
}
