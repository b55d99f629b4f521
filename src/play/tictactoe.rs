//! Human versus engine tic-tac-toe on the console.

use super::{pace, prompt_line};
use crate::config::TicTacToeConfig;
use crate::games::tictactoe::{Game, GameStatus, Position, best_move_with};
use anyhow::{Context, Result, bail};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};

/// Plays one game and returns how it ended.
///
/// # Errors
///
/// Fails if input runs out before the game is decided or output cannot
/// be written.
#[instrument(skip_all, fields(human = %config.human(), strategy = %config.strategy()))]
pub fn run<R: BufRead, W: Write>(
    config: &TicTacToeConfig,
    mut input: R,
    output: &mut W,
) -> Result<GameStatus> {
    let human = config.human();
    let computer = human.opponent();
    let mut game = Game::new();
    info!("Starting tic-tac-toe");

    writeln!(output, "You are {human}. X moves first.")?;
    loop {
        writeln!(output, "\n{}\n", game.board().display())?;

        match game.status() {
            GameStatus::Won(winner) if winner == human => {
                writeln!(output, "You win!")?;
                return Ok(game.status());
            }
            GameStatus::Won(_) => {
                writeln!(output, "Computer wins!")?;
                return Ok(game.status());
            }
            GameStatus::Draw => {
                writeln!(output, "Draw!")?;
                return Ok(game.status());
            }
            GameStatus::InProgress => {}
        }

        if game.to_move() == human {
            let Some(line) = prompt_line(&mut input, output, "Your move (1-9 or square name): ")?
            else {
                bail!("Input closed before the game finished");
            };
            let Some(pos) = Position::from_label_or_number(&line) else {
                writeln!(output, "Invalid square: {line}")?;
                continue;
            };
            if let Err(e) = game.play(pos) {
                debug!(error = %e, "Rejected human move");
                writeln!(output, "{e}")?;
            }
        } else {
            pace(config.ai_delay_ms());
            let mov = best_move_with(game.board(), computer, config.strategy())
                .context("Engine found no move on an unfinished board")?;
            game.play(mov.position)?;
            writeln!(output, "Computer plays {}", mov.position)?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Player;
    use std::io::Cursor;

    fn quick(human: Player) -> TicTacToeConfig {
        TicTacToeConfig::default()
            .with_human(human)
            .with_ai_delay_ms(0)
    }

    #[test]
    fn test_engine_never_loses_to_scripted_human() {
        for human in [Player::X, Player::O] {
            let script = "1\n2\n3\n4\n5\n6\n7\n8\n9\n";
            let mut out = Vec::new();
            let status = run(&quick(human), Cursor::new(script), &mut out).unwrap();
            assert_ne!(status, GameStatus::Won(human));
        }
    }

    #[test]
    fn test_invalid_input_is_reported() {
        let script = "banana\n0\n1\n2\n3\n4\n5\n6\n7\n8\n9\n";
        let mut out = Vec::new();
        run(&quick(Player::X), Cursor::new(script), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Invalid square: banana"));
        assert!(text.contains("Invalid square: 0"));
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let mut out = Vec::new();
        assert!(run(&quick(Player::X), Cursor::new("5\n"), &mut out).is_err());
    }
}
