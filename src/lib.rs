//! # memory-match
//!
//! State machine for a single-player memory matching card game.
//!
//! ## Design Principles
//!
//! 1. **Host-Driven**: The crate never sleeps or spawns timers. The host
//!    delivers player clicks and one tick per second, serially, and
//!    renders from events or snapshots.
//!
//! 2. **Deterministic**: Every shuffle comes from a seeded `GameRng`, so a
//!    seed plus a click/tick sequence replays a game exactly.
//!
//! 3. **Out-of-turn input is a no-op**: Clicking while a peek is showing,
//!    clicking a matched card or ticking a finished game changes nothing.
//!
//! ## Architecture
//!
//! - **Phase countdowns**: The opening reveal and the post-pair peek are
//!   tick counters on the board, not callbacks.
//!
//! - **Round generations**: Each dealt round carries a `RoundId`; ticks
//!   addressed to an old round are discarded.
//!
//! - **Persistent card sequence**: Snapshots clone in O(1) via `im-rs`.
//!
//! ## Modules
//!
//! - `core`: Entity/pair/round IDs, RNG, configuration, round timer
//! - `cards`: Card state, image catalog and categories
//! - `board`: One dealt round, selection gate and phase countdowns
//! - `events`: Change notifications for the presentation layer
//! - `session`: Scoring, attempts, win/loss and restart
//! - `error`: Error types

pub mod core;
pub mod cards;
pub mod board;
pub mod events;
pub mod session;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    EntityId, PairId, RoundId,
    GameRng, GameRngState,
    GameConfig, PhaseTiming,
    RoundTimer,
};

pub use crate::cards::{AssetProvider, Card, Category, ImageCatalog, ImageId};

pub use crate::board::{Board, MatchOutcome, Phase, PhaseCompletion, SelectOutcome};

pub use crate::events::{EventQueue, GameEvent};

pub use crate::session::{ClickOutcome, GameSession, GameStatus, Scoreboard, SessionSnapshot};

pub use crate::error::{GameError, Result, RoundError};
