//! Session configuration for the console games.

use crate::games::maze::{self, Direction, Heuristic};
use crate::games::tictactoe::{Player, SearchStrategy};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for both games, loaded from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Tic-tac-toe settings.
    tictactoe: TicTacToeConfig,

    /// Maze race settings.
    maze: MazeConfig,
}

/// Tic-tac-toe session settings.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct TicTacToeConfig {
    /// Mark played by the human. X always moves first.
    #[getter(copy)]
    human: Player,

    /// Search used by the computer player.
    #[getter(copy)]
    strategy: SearchStrategy,

    /// Pause before the computer's reply, in milliseconds.
    #[getter(copy)]
    ai_delay_ms: u64,
}

impl Default for TicTacToeConfig {
    fn default() -> Self {
        Self {
            human: Player::X,
            strategy: SearchStrategy::default(),
            ai_delay_ms: default_ai_delay_ms(),
        }
    }
}

/// Maze race settings.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct MazeConfig {
    /// Maze width in cells, odd.
    #[getter(copy)]
    width: usize,

    /// Maze height in cells, odd.
    #[getter(copy)]
    height: usize,

    /// Heuristic for the computer racer.
    #[getter(copy)]
    heuristic: Heuristic,

    /// Starting facing for the wall follower.
    #[getter(copy)]
    initial_facing: Direction,

    /// Fixed seed for reproducible mazes.
    #[getter(copy)]
    seed: Option<u64>,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            width: 15,
            height: 11,
            heuristic: Heuristic::default(),
            initial_facing: Direction::Right,
            seed: None,
        }
    }
}

#[instrument]
fn default_ai_delay_ms() -> u64 {
    500
}

impl MazeConfig {
    /// Overrides the maze dimensions.
    pub fn with_dimensions(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Overrides the heuristic.
    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    /// Overrides the seed.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }
}

impl TicTacToeConfig {
    /// Overrides the human's mark.
    pub fn with_human(mut self, human: Player) -> Self {
        self.human = human;
        self
    }

    /// Overrides the reply delay.
    pub fn with_ai_delay_ms(mut self, ai_delay_ms: u64) -> Self {
        self.ai_delay_ms = ai_delay_ms;
        self
    }
}

impl GameConfig {
    /// Parses configuration from TOML text and validates it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for malformed TOML or unusable maze dimensions.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(
            maze_width = config.maze.width,
            maze_height = config.maze.height,
            heuristic = %config.maze.heuristic,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads `path` if given, otherwise returns defaults.
    ///
    /// # Errors
    ///
    /// See [`GameConfig::from_file`].
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Checks that the maze section describes a buildable maze.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] wrapping the dimension problem.
    pub fn validate(&self) -> Result<(), ConfigError> {
        maze::validate_dimensions(self.maze.width, self.maze.height)
            .map_err(|e| ConfigError::new(e.to_string()))
    }

    /// Replaces the tic-tac-toe section.
    pub fn with_tictactoe(mut self, tictactoe: TicTacToeConfig) -> Self {
        self.tictactoe = tictactoe;
        self
    }

    /// Replaces the maze section.
    pub fn with_maze(mut self, maze: MazeConfig) -> Self {
        self.maze = maze;
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
