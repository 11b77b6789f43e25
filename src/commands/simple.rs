//! Simple line-mode game
//!
//! Text-based game on any reader/writer pair, without the TUI

use crate::game::{GameSession, GameStats, GameStatus, MAX_ATTEMPTS};
use crate::output::formatters::{colored_turn, letter_board_line, share_grid};
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Play games on `input`/`output` until the player quits or input ends
///
/// Returns the tally of games finished during the run.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<R, I, W>(
    game: &mut GameSession<'_, R>,
    mut input: I,
    mut out: W,
) -> io::Result<GameStats>
where
    R: Rng,
    I: BufRead,
    W: Write,
{
    let mut stats = GameStats::default();

    writeln!(out, "\n╔══════════════════════════════════════════════╗")?;
    writeln!(out, "║               Wordle - Line Mode             ║")?;
    writeln!(out, "╚══════════════════════════════════════════════╝\n")?;
    writeln!(
        out,
        "Guess the five-letter word in {MAX_ATTEMPTS} tries. 🟩 right spot, 🟨 wrong spot, ⬜ not in the word."
    )?;
    writeln!(out, "Commands: 'new' for a new word, 'quit' to exit\n")?;

    loop {
        let turn = game.attempts_used() + 1;
        let Some(line) = prompt(&mut input, &mut out, &format!("Guess {turn}/{MAX_ATTEMPTS}"))?
        else {
            return Ok(stats);
        };

        match line.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                writeln!(out, "\n👋 Thanks for playing!\n")?;
                return Ok(stats);
            }
            "new" | "n" => {
                game.restart();
                writeln!(out, "\n🔄 New game started!\n")?;
                continue;
            }
            _ => {}
        }

        if let Err(e) = game.submit(&line) {
            writeln!(out, "{} {e}\n", "❌".red())?;
            continue;
        }

        for turn in game.turns() {
            writeln!(out, "  {}", colored_turn(turn))?;
        }
        writeln!(out, "\n  {}\n", letter_board_line(game.letters()))?;

        if !game.is_over() {
            continue;
        }

        stats.record(game);
        print_outcome(game, &stats, &mut out)?;

        let again = prompt(&mut input, &mut out, "Play again? (yes/no)")?;
        if matches!(again.as_deref().map(str::to_lowercase).as_deref(), Some("yes" | "y")) {
            game.restart();
            writeln!(out, "\n🔄 New game started!\n")?;
        } else {
            writeln!(out, "\n👋 Thanks for playing!\n")?;
            return Ok(stats);
        }
    }
}

fn print_outcome<R, W: Write>(
    game: &GameSession<'_, R>,
    stats: &GameStats,
    out: &mut W,
) -> io::Result<()> {
    let used = game.attempts_used();

    match game.status() {
        GameStatus::Won => {
            let noun = if used == 1 { "guess" } else { "guesses" };
            writeln!(
                out,
                "{}",
                format!("🎉 Solved in {used} {noun}!").bright_green().bold()
            )?;
        }
        GameStatus::Lost => {
            let answer = game.revealed_secret().map_or("", |w| w.text());
            writeln!(
                out,
                "{} {}",
                "Maximum number of guesses reached. The answer was:".red(),
                answer.to_uppercase().bright_white().bold()
            )?;
        }
        GameStatus::AwaitingGuess => return Ok(()),
    }

    writeln!(out, "\n{}\n", share_grid(game.turns()))?;
    writeln!(
        out,
        "Games: {} | Win rate: {:.0}%\n",
        stats.games_played,
        stats.win_rate()
    )?;
    Ok(())
}

/// Prompt and read one trimmed line; `None` at end of input
fn prompt<I: BufRead, W: Write>(input: &mut I, out: &mut W, text: &str) -> io::Result<Option<String>> {
    write!(out, "{text}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}
