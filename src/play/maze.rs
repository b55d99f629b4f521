//! Human versus navigator maze race on the console.

use super::prompt_line;
use crate::config::MazeConfig;
use crate::games::maze::{Coord, Direction, Maze, generate};
use anyhow::{Result, bail};
use std::io::{BufRead, Write};
use tracing::{info, instrument, warn};

/// How a race ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum RaceOutcome {
    /// The human reached the goal first.
    HumanWins,
    /// The computer reached the goal first.
    ComputerWins,
    /// The human gave up.
    Quit,
}

/// Draws the maze with `P` for the human, `A` for the computer and `*`
/// where both stand.
pub fn render(maze: &Maze, human: Coord, computer: Coord) -> String {
    let mut rows: Vec<Vec<char>> = maze
        .to_string()
        .lines()
        .map(|line| line.chars().collect())
        .collect();
    if human == computer {
        rows[human.y][human.x] = '*';
    } else {
        rows[human.y][human.x] = 'P';
        rows[computer.y][computer.x] = 'A';
    }
    rows.into_iter()
        .map(|row| row.into_iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Reads a W/A/S/D key as a direction.
pub fn parse_key(key: &str) -> Option<Direction> {
    match key.to_ascii_uppercase().as_str() {
        "W" => Some(Direction::Up),
        "A" => Some(Direction::Left),
        "S" => Some(Direction::Down),
        "D" => Some(Direction::Right),
        _ => None,
    }
}

/// Generates a maze from `config` and races the human against it.
///
/// # Errors
///
/// Fails on bad maze dimensions, closed input, or unwritable output.
#[instrument(skip_all, fields(width = config.width(), height = config.height(), heuristic = %config.heuristic()))]
pub fn run<R: BufRead, W: Write>(
    config: &MazeConfig,
    input: R,
    output: &mut W,
) -> Result<RaceOutcome> {
    let maze = generate(config.width(), config.height(), config.seed())?;
    race(&maze, config, input, output)
}

/// Races on an existing maze.
///
/// # Errors
///
/// Fails on closed input or unwritable output.
#[instrument(skip_all, fields(heuristic = %config.heuristic()))]
pub fn race<R: BufRead, W: Write>(
    maze: &Maze,
    config: &MazeConfig,
    mut input: R,
    output: &mut W,
) -> Result<RaceOutcome> {
    let goal = maze.goal();
    let mut human = maze.start();
    let mut computer = maze.start();
    let mut navigator = config.heuristic().navigator(config.initial_facing());
    info!(navigator = navigator.name(), "Race started");

    writeln!(output, "Computer plays {}.", navigator.name())?;
    writeln!(output, "{}\n", render(maze, human, computer))?;
    loop {
        let Some(line) = prompt_line(&mut input, output, "Move (WASD, Q to quit): ")? else {
            bail!("Input closed before the race finished");
        };
        if line.eq_ignore_ascii_case("q") {
            return Ok(RaceOutcome::Quit);
        }
        let Some(dir) = parse_key(&line) else {
            writeln!(output, "Invalid move.")?;
            continue;
        };

        match maze.step(human, dir) {
            Some(next) => human = next,
            None => writeln!(output, "Blocked!")?,
        }
        if human == goal {
            writeln!(output, "{}\n", render(maze, human, computer))?;
            writeln!(output, "You win!")?;
            return Ok(RaceOutcome::HumanWins);
        }

        match navigator.next_step(maze, computer) {
            Ok(next) => computer = next,
            Err(e) => {
                warn!(error = %e, "Computer cannot move");
                writeln!(output, "Computer is stuck.")?;
            }
        }
        if computer == goal {
            writeln!(output, "{}\n", render(maze, human, computer))?;
            writeln!(output, "Computer wins!")?;
            return Ok(RaceOutcome::ComputerWins);
        }

        writeln!(output, "{}\n", render(maze, human, computer))?;
    }
}
