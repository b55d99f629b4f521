//! Tests for loading session configuration.

use std::io::Write;
use strictly_grids::{Direction, GameConfig, Heuristic, Player, SearchStrategy};

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[tictactoe]
human = "O"
strategy = "alpha-beta"
ai_delay_ms = 0

[maze]
width = 21
height = 13
heuristic = "wall-follower"
initial_facing = "down"
seed = 42
"#
    )
    .unwrap();

    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(config.tictactoe().human(), Player::O);
    assert_eq!(config.tictactoe().strategy(), SearchStrategy::AlphaBeta);
    assert_eq!(config.tictactoe().ai_delay_ms(), 0);
    assert_eq!(config.maze().width(), 21);
    assert_eq!(config.maze().height(), 13);
    assert_eq!(config.maze().heuristic(), Heuristic::WallFollower);
    assert_eq!(config.maze().initial_facing(), Direction::Down);
    assert_eq!(config.maze().seed(), Some(42));
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = GameConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
}

#[test]
fn test_load_without_path_gives_defaults() {
    assert_eq!(GameConfig::load(None).unwrap(), GameConfig::default());
}

#[test]
fn test_invalid_dimensions_rejected_on_load() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[maze]\nwidth = 3\nheight = 3").unwrap();
    assert!(GameConfig::from_file(file.path()).is_err());
}
