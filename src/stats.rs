//! Win/loss statistics across games

use crate::game::MAX_ATTEMPTS;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub current_streak: usize,
    pub max_streak: usize,
    /// Index 1..=6: wins in that many guesses; index 0: losses
    pub guess_distribution: [usize; MAX_ATTEMPTS + 1],
}

impl Statistics {
    pub fn record_win(&mut self, attempts: usize) {
        self.total_games += 1;
        self.games_won += 1;
        self.current_streak += 1;
        self.max_streak = self.max_streak.max(self.current_streak);
        if (1..=MAX_ATTEMPTS).contains(&attempts) {
            self.guess_distribution[attempts] += 1;
        }
    }

    pub fn record_loss(&mut self) {
        self.total_games += 1;
        self.current_streak = 0;
        self.guess_distribution[0] += 1;
    }

    /// Percentage of games won, 0 when nothing was played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }

    /// Mean number of guesses over won games
    #[must_use]
    pub fn average_guesses(&self) -> Option<f64> {
        if self.games_won == 0 {
            return None;
        }
        let total: usize = self
            .guess_distribution
            .iter()
            .enumerate()
            .skip(1)
            .map(|(guesses, count)| guesses * count)
            .sum();
        Some(total as f64 / self.games_won as f64)
    }
}
