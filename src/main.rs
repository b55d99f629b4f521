//! Strictly Grids - Unified CLI
//!
//! Console front end for the tic-tac-toe engine and the maze race.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::io;
use strictly_grids::{Board, GameConfig, best_move_with, generate, play};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = GameConfig::load(cli.config.as_deref()).context("Failed to load config")?;
    debug!(?config, "Configuration resolved");

    match cli.command {
        Command::Tictactoe { ai_first } => run_tictactoe(config, ai_first),
        Command::Maze {
            width,
            height,
            seed,
            heuristic,
        } => run_maze(config, width, height, seed, heuristic),
        Command::Generate {
            width,
            height,
            seed,
        } => run_generate(width, height, seed),
        Command::BestMove { board, side } => run_best_move(&config, &board, side),
    }
}

/// Play tic-tac-toe on stdin/stdout
#[instrument(skip(config))]
fn run_tictactoe(config: GameConfig, ai_first: bool) -> Result<()> {
    let mut settings = config.tictactoe().clone();
    if ai_first {
        settings = settings.with_human(strictly_grids::Player::O);
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let status = play::tictactoe::run(&settings, stdin.lock(), &mut stdout)?;
    info!(?status, "Tic-tac-toe finished");
    Ok(())
}

/// Race through a maze on stdin/stdout
#[instrument(skip(config))]
fn run_maze(
    config: GameConfig,
    width: Option<usize>,
    height: Option<usize>,
    seed: Option<u64>,
    heuristic: Option<strictly_grids::Heuristic>,
) -> Result<()> {
    let base = config.maze().clone();
    let mut settings = base
        .clone()
        .with_dimensions(width.unwrap_or(base.width()), height.unwrap_or(base.height()))
        .with_seed(seed.or(base.seed()));
    if let Some(heuristic) = heuristic {
        settings = settings.with_heuristic(heuristic);
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let outcome = play::maze::run(&settings, stdin.lock(), &mut stdout)?;
    info!(%outcome, "Maze race finished");
    Ok(())
}

/// Print a maze
#[instrument]
fn run_generate(width: usize, height: usize, seed: Option<u64>) -> Result<()> {
    let maze = generate(width, height, seed)?;
    println!("{maze}");
    Ok(())
}

/// Print the engine's reply for a board
#[instrument(skip(config))]
fn run_best_move(config: &GameConfig, board: &str, side: strictly_grids::Player) -> Result<()> {
    let board: Board = board.parse().context("Failed to parse board")?;
    match best_move_with(&board, side, config.tictactoe().strategy()) {
        Some(mov) => println!("{} {} {}", mov.row(), mov.col(), mov.position),
        None => println!("none"),
    }
    Ok(())
}
