//! Session status and the score/attempts tracker.

use serde::{Deserialize, Serialize};

/// Where the session is in its lifecycle. `Won` and `Lost` are terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    #[must_use]
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Running score and remaining attempts.
///
/// Score may go negative. Attempts go to -1 on the mismatch that loses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    score: i64,
    attempts_remaining: i32,
}

impl Scoreboard {
    /// Fresh scoreboard: zero points, full attempts.
    #[must_use]
    pub fn new(max_attempts: i32) -> Self {
        Self {
            score: 0,
            attempts_remaining: max_attempts,
        }
    }

    #[must_use]
    pub fn score(&self) -> i64 {
        self.score
    }

    #[must_use]
    pub fn attempts_remaining(&self) -> i32 {
        self.attempts_remaining
    }

    /// No attempts left to spend?
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.attempts_remaining < 0
    }

    /// Credit a matched pair.
    pub fn award(&mut self, points: i64) {
        self.score += points;
    }

    /// Charge a mismatched pair: points and one attempt.
    pub fn penalize(&mut self, points: i64) {
        self.score -= points;
        self.attempts_remaining -= 1;
    }
}
