//! The board: one dealt round of cards.
//!
//! - [`Board`]: cards, selection gate, pair evaluation
//! - [`Phase`]: opening reveal / peek countdowns driven by clock ticks

mod phase;
mod round;

pub use phase::{Phase, PhaseCompletion};
pub use round::{Board, MatchOutcome, SelectOutcome};
