//! Command-line interface for strictly_grids.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strictly_grids::{Heuristic, Player};

/// Strictly Grids - play tic-tac-toe or race through a maze against the computer
#[derive(Parser, Debug)]
#[command(name = "strictly_grids")]
#[command(about = "Perfect-play tic-tac-toe and maze racing", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play tic-tac-toe against the minimax engine
    Tictactoe {
        /// Let the computer take X and move first
        #[arg(long)]
        ai_first: bool,
    },

    /// Race the computer through a generated maze
    Maze {
        /// Maze width (odd)
        #[arg(long)]
        width: Option<usize>,

        /// Maze height (odd)
        #[arg(long)]
        height: Option<usize>,

        /// Seed for a reproducible maze
        #[arg(long)]
        seed: Option<u64>,

        /// Navigation heuristic for the computer (greedy or wall-follower)
        #[arg(long)]
        heuristic: Option<Heuristic>,
    },

    /// Print a generated maze
    Generate {
        /// Maze width (odd)
        #[arg(long, default_value = "15")]
        width: usize,

        /// Maze height (odd)
        #[arg(long, default_value = "11")]
        height: usize,

        /// Seed for a reproducible maze
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print the engine's move for a board
    BestMove {
        /// Board as nine cells of X, O or '.', e.g. "X.O/.X./..."
        #[arg(long)]
        board: String,

        /// Side to move
        #[arg(long)]
        side: Player,
    },
}
