//! Wordle Clone - CLI
//!
//! Play in a TUI (default) or line mode, or score and analyze guesses.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Builder;
use log::LevelFilter;
use std::io;
use std::path::{Path, PathBuf};
use wordle_clone::{
    commands::{analyze_guess, check_guess, run_simple},
    game::GameSession,
    output::{print_analysis_result, print_check_result},
    wordlists::{ListKind, WordSource, loader::lines_or_embedded},
};

#[derive(Parser)]
#[command(
    name = "wordle_clone",
    about = "Guess the five-letter word in six tries",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Answer list file (one word per line); defaults to the built-in list
    #[arg(long, global = true, value_name = "PATH")]
    answers: Option<PathBuf>,

    /// Extra allowed guesses file (one word per line); defaults to the built-in list
    #[arg(long, global = true, value_name = "PATH")]
    allowed: Option<PathBuf>,

    /// Seed for secret selection, for reproducible games
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI game (default)
    Play,

    /// Line-mode game on stdin/stdout
    Simple,

    /// Show the feedback a guess gets against a secret
    Check {
        /// The secret word
        secret: String,

        /// The guess to score
        guess: String,
    },

    /// Show how a guess splits the answer list
    Analyze {
        /// Guess to analyze
        guess: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Play);

    // Log lines would tear the alternate screen, so the TUI only logs errors
    let level = match (&command, cli.verbose) {
        (Commands::Play, _) => LevelFilter::Error,
        (_, 0) => LevelFilter::Warn,
        (_, 1) => LevelFilter::Info,
        (_, 2) => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    init_log(level);

    let answers = cli.answers.as_deref();
    let allowed = cli.allowed.as_deref();

    match command {
        Commands::Play => run_play_command(&load_source(answers, allowed)?, cli.seed),
        Commands::Simple => run_simple_command(&load_source(answers, allowed)?, cli.seed),
        Commands::Check { secret, guess } => {
            let result = check_guess(&secret, &guess)?;
            print_check_result(&result);
            Ok(())
        }
        Commands::Analyze { guess } => {
            let result = analyze_guess(&guess, &load_source(answers, allowed)?)?;
            print_analysis_result(&result);
            Ok(())
        }
    }
}

/// Install the logger; `RUST_LOG` overrides the verbosity flag
fn init_log(level: LevelFilter) {
    let filters = std::env::var("RUST_LOG").ok();
    log_builder(level, filters.as_deref()).init();
}

fn log_builder(level: LevelFilter, filters: Option<&str>) -> Builder {
    let mut builder = Builder::new();
    builder.filter_level(level).format_timestamp(None);
    if let Some(filters) = filters {
        builder.parse_filters(filters);
    }
    builder
}

/// Build the word source from the `--answers`/`--allowed` files or the built-in lists
fn load_source(answers: Option<&Path>, allowed: Option<&Path>) -> Result<WordSource> {
    let answers = lines_or_embedded(ListKind::Answers, answers)?;
    let allowed = lines_or_embedded(ListKind::Allowed, allowed)?;

    WordSource::load(answers, allowed).context("cannot start a game")
}

fn new_game(source: &WordSource, seed: Option<u64>) -> GameSession<'_> {
    match seed {
        Some(seed) => GameSession::seeded(source, seed),
        None => GameSession::from_os_rng(source),
    }
}

fn run_play_command(source: &WordSource, seed: Option<u64>) -> Result<()> {
    use wordle_clone::interactive::{App, run_tui};

    let app = App::new(new_game(source, seed));
    let stats = run_tui(app)?;

    if stats.games_played > 0 {
        println!(
            "Played {} | Won {} | Win rate {:.0}%",
            stats.games_played,
            stats.games_won,
            stats.win_rate()
        );
    }
    Ok(())
}

fn run_simple_command(source: &WordSource, seed: Option<u64>) -> Result<()> {
    let mut game = new_game(source, seed);
    run_simple(&mut game, io::stdin().lock(), io::stdout().lock())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_sets_the_level() {
        let logger = log_builder(LevelFilter::Info, None).build();
        assert_eq!(logger.filter(), LevelFilter::Info);
    }

    #[test]
    fn rust_log_filters_override_verbosity() {
        let logger = log_builder(LevelFilter::Error, Some("debug")).build();
        assert_eq!(logger.filter(), LevelFilter::Debug);
    }
}
