//! Tests for maze generation.

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::{HashSet, VecDeque};
use strictly_grids::{Coord, Direction, Maze, MazeError, Tile, generate, generate_with_rng};

/// Cells reachable from `from` by breadth-first flood fill.
fn flood_fill(maze: &Maze, from: Coord) -> HashSet<Coord> {
    let mut seen = HashSet::from([from]);
    let mut queue = VecDeque::from([from]);
    while let Some(cell) = queue.pop_front() {
        for (_, next) in maze.neighbors(cell) {
            if seen.insert(next) {
                queue.push_back(next);
            }
        }
    }
    seen
}

/// Number of simple paths between two cells, by exhaustive DFS.
fn count_simple_paths(maze: &Maze, at: Coord, to: Coord, visited: &mut HashSet<Coord>) -> usize {
    if at == to {
        return 1;
    }
    let mut paths = 0;
    for (_, next) in maze.neighbors(at) {
        if visited.insert(next) {
            paths += count_simple_paths(maze, next, to, visited);
            visited.remove(&next);
        }
    }
    paths
}

#[test]
fn test_same_seed_produces_identical_maze() {
    let a = generate(15, 11, Some(2024)).unwrap();
    let b = generate(15, 11, Some(2024)).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.to_string(), b.to_string());
}

#[test]
fn test_seed_matches_explicit_rng() {
    let seeded = generate(21, 15, Some(5)).unwrap();
    let mut rng = StdRng::seed_from_u64(5);
    let explicit = generate_with_rng(21, 15, &mut rng).unwrap();
    assert_eq!(seeded, explicit);
}

#[test]
fn test_flood_fill_reaches_every_open_cell() {
    for seed in 0..20 {
        let maze = generate(15, 11, Some(seed)).unwrap();
        let reached = flood_fill(&maze, maze.start());
        let open: HashSet<Coord> = maze.traversable_cells().collect();
        assert_eq!(reached, open, "seed {seed}");
        assert!(reached.contains(&maze.goal()));
    }
}

#[test]
fn test_unique_path_between_start_and_goal() {
    for seed in 0..10 {
        let maze = generate(11, 9, Some(seed)).unwrap();
        let mut visited = HashSet::from([maze.start()]);
        assert_eq!(
            count_simple_paths(&maze, maze.start(), maze.goal(), &mut visited),
            1,
            "seed {seed}"
        );
    }
}

#[test]
fn test_corridors_form_a_tree() {
    for (width, height, seed) in [(5, 5, 1), (15, 11, 2), (31, 21, 3), (41, 5, 4)] {
        let maze = generate(width, height, Some(seed)).unwrap();
        let cells = maze.traversable_cells().count();
        let edges: usize = maze
            .traversable_cells()
            .map(|c| {
                [Direction::Right, Direction::Down]
                    .into_iter()
                    .filter(|d| maze.step(c, *d).is_some())
                    .count()
            })
            .sum();
        assert_eq!(edges + 1, cells, "{width}x{height}");
        // Cells on a (width/2) x (height/2) lattice plus one wall per tree edge.
        assert_eq!(cells, 2 * (width / 2) * (height / 2) - 1);
    }
}

#[test]
fn test_large_maze_does_not_overflow_the_stack() {
    let maze = generate(401, 401, Some(8)).unwrap();
    assert_eq!(maze.get(maze.goal()), Some(Tile::Goal));
    assert_eq!(flood_fill(&maze, maze.start()).len(), maze.traversable_cells().count());
}

#[test]
fn test_invalid_dimensions() {
    assert_eq!(
        generate(16, 11, None),
        Err(MazeError::InvalidDimensions {
            width: 16,
            height: 11
        })
    );
    assert!(matches!(
        generate(3, 3, None),
        Err(MazeError::InvalidDimensions { .. })
    ));
    assert!(generate(3, 5, None).is_ok());
}

#[test]
fn test_text_form_parses_back() {
    let maze = generate(15, 11, Some(77)).unwrap();
    let parsed: Maze = maze.to_string().parse().unwrap();
    assert_eq!(parsed, maze);
}
