//! Game configuration.
//!
//! Hosts configure a session at startup:
//! - `PhaseTiming`: how long the board shows cards (opening reveal, peek)
//! - `GameConfig`: round size, attempts, scoring and timing combined
//!
//! All durations are counted in clock ticks. The host delivers one tick per
//! second, so the defaults read as seconds.

use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};

/// Default number of pairs dealt per round.
pub const DEFAULT_PAIRS_PER_ROUND: usize = 6;

/// Default number of mismatches allowed before the next one loses.
pub const DEFAULT_MAX_ATTEMPTS: i32 = 4;

/// Default points awarded for a matched pair.
pub const DEFAULT_MATCH_AWARD: i64 = 75;

/// Default points deducted for a mismatched pair.
pub const DEFAULT_MISMATCH_PENALTY: i64 = 15;

/// Default length of the opening reveal, in ticks.
pub const DEFAULT_OPENING_TICKS: u32 = 5;

/// Default length of the mismatch peek, in ticks.
pub const DEFAULT_PEEK_TICKS: u32 = 3;

/// Smallest round the board can deal.
pub const MIN_PAIRS_PER_ROUND: usize = 2;

/// Board phase durations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseTiming {
    /// Ticks every card stays face up after the deal.
    pub opening_ticks: u32,

    /// Ticks a selected pair stays face up before unmatched cards hide.
    pub peek_ticks: u32,
}

impl PhaseTiming {
    /// Create timing, clamping both durations to at least one tick.
    #[must_use]
    pub fn new(opening_ticks: u32, peek_ticks: u32) -> Self {
        Self {
            opening_ticks: opening_ticks.max(1),
            peek_ticks: peek_ticks.max(1),
        }
    }
}

impl Default for PhaseTiming {
    fn default() -> Self {
        Self {
            opening_ticks: DEFAULT_OPENING_TICKS,
            peek_ticks: DEFAULT_PEEK_TICKS,
        }
    }
}

/// Complete session configuration.
///
/// ```
/// use memory_match::core::GameConfig;
///
/// let config = GameConfig::default()
///     .with_pairs_per_round(8)
///     .with_max_attempts(6);
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.cards_per_round(), 16);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Pairs dealt per round (cards = 2x).
    pub pairs_per_round: usize,

    /// Attempts granted at round start.
    pub max_attempts: i32,

    /// Points added per matched pair.
    pub match_award: i64,

    /// Points subtracted per mismatched pair.
    pub mismatch_penalty: i64,

    /// Board phase durations.
    pub timing: PhaseTiming,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            pairs_per_round: DEFAULT_PAIRS_PER_ROUND,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            match_award: DEFAULT_MATCH_AWARD,
            mismatch_penalty: DEFAULT_MISMATCH_PENALTY,
            timing: PhaseTiming::default(),
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of pairs per round.
    #[must_use]
    pub fn with_pairs_per_round(mut self, pairs: usize) -> Self {
        self.pairs_per_round = pairs;
        self
    }

    /// Set the starting attempts.
    #[must_use]
    pub fn with_max_attempts(mut self, attempts: i32) -> Self {
        self.max_attempts = attempts;
        self
    }

    /// Set the match award and mismatch penalty.
    #[must_use]
    pub fn with_scoring(mut self, match_award: i64, mismatch_penalty: i64) -> Self {
        self.match_award = match_award;
        self.mismatch_penalty = mismatch_penalty;
        self
    }

    /// Set the board phase durations.
    #[must_use]
    pub fn with_timing(mut self, timing: PhaseTiming) -> Self {
        self.timing = timing;
        self
    }

    /// Set the opening reveal length (at least one tick).
    #[must_use]
    pub fn with_opening_ticks(mut self, ticks: u32) -> Self {
        self.timing.opening_ticks = ticks.max(1);
        self
    }

    /// Set the peek length (at least one tick).
    #[must_use]
    pub fn with_peek_ticks(mut self, ticks: u32) -> Self {
        self.timing.peek_ticks = ticks.max(1);
        self
    }

    /// Cards dealt per round.
    #[must_use]
    pub fn cards_per_round(&self) -> usize {
        self.pairs_per_round * 2
    }

    /// Check the configuration can drive a session.
    pub fn validate(&self) -> Result<()> {
        if self.pairs_per_round < MIN_PAIRS_PER_ROUND {
            return Err(GameError::InvalidConfig("pairs_per_round must be at least 2"));
        }
        if u32::try_from(self.pairs_per_round).is_err() {
            return Err(GameError::InvalidConfig("pairs_per_round does not fit a pair id"));
        }
        if self.max_attempts < 0 {
            return Err(GameError::InvalidConfig("max_attempts must not be negative"));
        }
        if self.match_award < 0 || self.mismatch_penalty < 0 {
            return Err(GameError::InvalidConfig("scoring values must not be negative"));
        }
        if self.timing.opening_ticks == 0 || self.timing.peek_ticks == 0 {
            return Err(GameError::InvalidConfig("phase durations must be at least one tick"));
        }
        Ok(())
    }
}
