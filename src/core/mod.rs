//! Core building blocks: identifiers, RNG, configuration, elapsed time.
//!
//! Nothing here knows about cards or rules; the board and session are
//! assembled from these pieces.

pub mod entity;
pub mod rng;
pub mod config;
pub mod timer;

pub use entity::{EntityId, PairId, RoundId};
pub use rng::{GameRng, GameRngState};
pub use config::{GameConfig, PhaseTiming};
pub use timer::RoundTimer;
