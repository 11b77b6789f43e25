//! In-memory tally of finished games for the current run

use super::session::{GameSession, GameStatus, MAX_ATTEMPTS};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GameStats {
    pub games_played: usize,
    pub games_won: usize,
    /// Wins by number of guesses; index 0 is a one-guess win
    pub guess_distribution: [usize; MAX_ATTEMPTS],
}

impl GameStats {
    /// Count a session if it has finished; in-progress sessions are ignored
    pub fn record<R>(&mut self, session: &GameSession<'_, R>) {
        match session.status() {
            GameStatus::AwaitingGuess => {}
            GameStatus::Lost => self.games_played += 1,
            GameStatus::Won => {
                self.games_played += 1;
                self.games_won += 1;
                if let Some(slot) = session
                    .attempts_used()
                    .checked_sub(1)
                    .and_then(|i| self.guess_distribution.get_mut(i))
                {
                    *slot += 1;
                }
            }
        }
    }

    /// Percentage of finished games won
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.games_won as f64 / self.games_played as f64 * 100.0
        }
    }
}
