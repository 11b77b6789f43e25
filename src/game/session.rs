//! A single game: secret, accepted guesses and the win/loss state machine

use super::letters::LetterBoard;
use crate::core::{Feedback, WORD_LEN, Word};
use crate::wordlists::WordSource;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use thiserror::Error;

/// Accepted guesses per game
pub const MAX_ATTEMPTS: usize = 6;

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    AwaitingGuess,
    Won,
    Lost,
}

impl GameStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::AwaitingGuess)
    }

    const fn closed_reason(self) -> &'static str {
        match self {
            Self::AwaitingGuess => "The game is still in progress.",
            Self::Won => "You already guessed the word.",
            Self::Lost => "Maximum number of guesses reached.",
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AwaitingGuess => write!(f, "in progress"),
            Self::Won => write!(f, "won"),
            Self::Lost => write!(f, "lost"),
        }
    }
}

/// Why a submitted guess was rejected
///
/// None of these consume an attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("Guess must be exactly {WORD_LEN} characters long.")]
    WrongLength(usize),
    #[error("Guess must only contain letters.")]
    NotAlphabetic,
    #[error("Guess must be in the list of allowed guesses.")]
    NotAllowed(String),
    #[error("{}", .0.closed_reason())]
    GameOver(GameStatus),
}

/// One accepted guess and its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    guess: Word,
    feedback: Feedback,
}

impl Turn {
    #[must_use]
    pub const fn guess(&self) -> &Word {
        &self.guess
    }

    #[must_use]
    pub const fn feedback(&self) -> Feedback {
        self.feedback
    }
}

/// Game state driven by explicit `submit` and `restart` calls
///
/// The random source is injected so tests can seed it; it is only used to
/// draw secrets.
#[derive(Debug)]
pub struct GameSession<'a, R = StdRng> {
    source: &'a WordSource,
    rng: R,
    secret: &'a Word,
    turns: Vec<Turn>,
    status: GameStatus,
    letters: LetterBoard,
}

impl<'a> GameSession<'a, StdRng> {
    /// Start a game whose secrets follow a fixed seed
    #[must_use]
    pub fn seeded(source: &'a WordSource, seed: u64) -> Self {
        Self::new(source, StdRng::seed_from_u64(seed))
    }

    /// Start a game seeded from the operating system
    #[must_use]
    pub fn from_os_rng(source: &'a WordSource) -> Self {
        Self::new(source, StdRng::from_os_rng())
    }
}

impl<'a, R: Rng> GameSession<'a, R> {
    /// Start a game, drawing the first secret from `source` with `rng`
    pub fn new(source: &'a WordSource, mut rng: R) -> Self {
        let secret = source.pick_secret(&mut rng);
        info!("new game started");

        Self {
            source,
            rng,
            secret,
            turns: Vec::with_capacity(MAX_ATTEMPTS),
            status: GameStatus::AwaitingGuess,
            letters: LetterBoard::new(),
        }
    }

    /// Submit a raw guess
    ///
    /// Surrounding whitespace is ignored and the guess is matched in any case.
    ///
    /// # Errors
    ///
    /// Returns [`GuessError`] without touching the game state if the game is
    /// already over, or the guess is not five letters from the allowed set.
    pub fn submit(&mut self, raw: &str) -> Result<Feedback, GuessError> {
        if self.status.is_over() {
            debug!("rejected guess: game already {}", self.status);
            return Err(GuessError::GameOver(self.status));
        }

        let guess = self.validate(raw.trim()).inspect_err(|e| {
            debug!("rejected guess {raw:?}: {e}");
        })?;

        let feedback = Feedback::calculate(&guess, self.secret);
        self.letters.record(&guess, feedback);
        self.turns.push(Turn { guess, feedback });

        let attempt = self.turns.len();
        debug!("guess {attempt}/{MAX_ATTEMPTS}: {feedback}");

        if feedback.is_solved() {
            self.status = GameStatus::Won;
            info!("game won in {attempt} guesses");
        } else if attempt >= MAX_ATTEMPTS {
            self.status = GameStatus::Lost;
            info!("game lost");
        }

        Ok(feedback)
    }

    fn validate(&self, candidate: &str) -> Result<Word, GuessError> {
        let len = candidate.chars().count();
        if len != WORD_LEN {
            return Err(GuessError::WrongLength(len));
        }

        if !candidate.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(GuessError::NotAlphabetic);
        }

        if !self.source.is_allowed_guess(candidate) {
            return Err(GuessError::NotAllowed(candidate.to_lowercase()));
        }

        Word::new(candidate).map_err(|_| GuessError::NotAlphabetic)
    }

    /// Begin a fresh game with a newly drawn secret
    ///
    /// The new secret may equal the old one.
    pub fn restart(&mut self) {
        let source = self.source;
        self.secret = source.pick_secret(&mut self.rng);
        self.turns.clear();
        self.letters.reset();
        self.status = GameStatus::AwaitingGuess;
        info!("game restarted");
    }
}

impl<'a, R> GameSession<'a, R> {
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// The current secret
    ///
    /// Front-ends should only show it once [`is_over`](Self::is_over) is true.
    #[must_use]
    pub const fn secret(&self) -> &'a Word {
        self.secret
    }

    /// The secret, once the game has been won or lost
    #[must_use]
    pub const fn revealed_secret(&self) -> Option<&'a Word> {
        if self.status.is_over() {
            Some(self.secret)
        } else {
            None
        }
    }

    /// Accepted guesses in order
    #[must_use]
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    #[must_use]
    pub fn attempts_used(&self) -> usize {
        self.turns.len()
    }

    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        MAX_ATTEMPTS - self.turns.len()
    }

    #[must_use]
    pub const fn letters(&self) -> &LetterBoard {
        &self.letters
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterState;
    use crate::game::LetterHint;

    fn source() -> WordSource {
        WordSource::load(
            ["alloy"],
            [
                "lolly", "crane", "slate", "robot", "floor", "speed", "erase", "geese",
            ],
        )
        .unwrap()
    }

    #[test]
    fn new_game_awaits_guess() {
        let source = source();
        let game = GameSession::seeded(&source, 1);

        assert_eq!(game.status(), GameStatus::AwaitingGuess);
        assert_eq!(game.attempts_used(), 0);
        assert_eq!(game.attempts_remaining(), MAX_ATTEMPTS);
        assert_eq!(game.secret().text(), "alloy");
        assert!(game.turns().is_empty());
        assert_eq!(game.revealed_secret(), None);
    }

    #[test]
    fn accepted_guess_is_recorded() {
        let source = source();
        let mut game = GameSession::seeded(&source, 1);

        let feedback = game.submit("lolly").unwrap();

        assert_eq!(feedback.to_string(), "YYG-G");
        assert_eq!(game.attempts_used(), 1);
        assert_eq!(game.turns()[0].guess().text(), "lolly");
        assert_eq!(game.turns()[0].feedback(), feedback);
        assert_eq!(game.status(), GameStatus::AwaitingGuess);
        assert_eq!(game.letters().hint(b'l'), LetterHint::Placed);
    }

    #[test]
    fn guess_is_trimmed_and_case_insensitive() {
        let source = source();
        let mut game = GameSession::seeded(&source, 1);

        let feedback = game.submit("  CrAnE\n").unwrap();
        assert_eq!(feedback.count(LetterState::Misplaced), 1);
        assert_eq!(game.turns()[0].guess().text(), "crane");
    }

    #[test]
    fn invalid_guesses_do_not_consume_attempts() {
        let source = source();
        let mut game = GameSession::seeded(&source, 1);

        assert_eq!(game.submit("lol"), Err(GuessError::WrongLength(3)));
        assert_eq!(game.submit("lollys"), Err(GuessError::WrongLength(6)));
        assert_eq!(game.submit("l0lly"), Err(GuessError::NotAlphabetic));
        assert_eq!(game.submit("lo ly"), Err(GuessError::NotAlphabetic));
        assert_eq!(
            game.submit("ZZZZZ"),
            Err(GuessError::NotAllowed("zzzzz".to_string()))
        );

        assert_eq!(game.attempts_used(), 0);
        assert_eq!(game.status(), GameStatus::AwaitingGuess);
        assert_eq!(game.letters(), &LetterBoard::new());
    }

    #[test]
    fn error_messages_read_as_prompts() {
        assert_eq!(
            GuessError::WrongLength(3).to_string(),
            "Guess must be exactly 5 characters long."
        );
        assert_eq!(
            GuessError::GameOver(GameStatus::Lost).to_string(),
            "Maximum number of guesses reached."
        );
    }

    #[test]
    fn solving_wins_and_blocks_further_guesses() {
        let source = source();
        let mut game = GameSession::seeded(&source, 1);

        game.submit("crane").unwrap();
        let feedback = game.submit("alloy").unwrap();

        assert!(feedback.is_solved());
        assert_eq!(game.status(), GameStatus::Won);
        assert!(game.is_over());
        assert_eq!(
            game.submit("lolly"),
            Err(GuessError::GameOver(GameStatus::Won))
        );
        assert_eq!(game.attempts_used(), 2);
    }

    #[test]
    fn win_on_last_attempt_is_a_win() {
        let source = source();
        let mut game = GameSession::seeded(&source, 1);

        for guess in ["crane", "slate", "robot", "floor", "speed"] {
            game.submit(guess).unwrap();
        }
        game.submit("alloy").unwrap();

        assert_eq!(game.status(), GameStatus::Won);
    }

    #[test]
    fn six_misses_lose_and_seventh_is_rejected() {
        let source = source();
        let mut game = GameSession::seeded(&source, 1);

        for (i, guess) in ["crane", "slate", "robot", "floor", "speed", "erase"]
            .iter()
            .enumerate()
        {
            assert_eq!(game.status(), GameStatus::AwaitingGuess);
            game.submit(guess).unwrap();
            assert_eq!(game.attempts_used(), i + 1);
        }

        assert_eq!(game.status(), GameStatus::Lost);
        assert_eq!(game.attempts_remaining(), 0);
        assert_eq!(game.revealed_secret().map(Word::text), Some("alloy"));
        assert_eq!(
            game.submit("alloy"),
            Err(GuessError::GameOver(GameStatus::Lost))
        );
        assert_eq!(game.attempts_used(), MAX_ATTEMPTS);
    }

    #[test]
    fn repeated_guesses_each_cost_an_attempt() {
        let source = source();
        let mut game = GameSession::seeded(&source, 1);

        for _ in 0..MAX_ATTEMPTS {
            game.submit("lolly").unwrap();
        }
        assert_eq!(game.status(), GameStatus::Lost);
    }

    #[test]
    fn restart_clears_state() {
        let source = source();
        let mut game = GameSession::seeded(&source, 1);

        for guess in ["crane", "slate", "robot", "floor", "speed", "erase"] {
            game.submit(guess).unwrap();
        }
        game.restart();

        assert_eq!(game.status(), GameStatus::AwaitingGuess);
        assert_eq!(game.attempts_used(), 0);
        assert!(game.turns().is_empty());
        assert_eq!(game.letters(), &LetterBoard::new());
        // Single-answer source: the redraw legitimately repeats the secret
        assert_eq!(game.secret().text(), "alloy");
        assert!(game.submit("alloy").unwrap().is_solved());
    }

    #[test]
    fn restart_draws_from_answer_set() {
        let source = WordSource::load(["alloy", "crane", "slate"], ["lolly"]).unwrap();
        let mut game = GameSession::seeded(&source, 99);
        let mut seen = std::collections::HashSet::new();

        for _ in 0..60 {
            assert!(source.answers().contains(game.secret()));
            seen.insert(game.secret().text().to_string());
            game.restart();
        }

        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn same_seed_same_secrets() {
        let source = WordSource::embedded().unwrap();
        let secrets = |seed| {
            let mut game = GameSession::seeded(&source, seed);
            let mut out = Vec::new();
            for _ in 0..5 {
                out.push(game.secret().text().to_string());
                game.restart();
            }
            out
        };

        assert_eq!(secrets(5), secrets(5));
    }
}
