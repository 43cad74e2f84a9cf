//! Observable state changes.
//!
//! The core never calls into audio or rendering. Every change a
//! presentation layer could react to is recorded as a `GameEvent`:
//! card flips, match outcomes (the correct/incorrect sound cues),
//! score/attempt/timer updates and the final status.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::cards::Category;
use crate::core::{EntityId, RoundId};
use crate::session::GameStatus;

/// Something the presentation layer may want to react to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new round was dealt, face up for the opening reveal.
    RoundStarted {
        round: RoundId,
        category: Category,
        cards: usize,
        /// True when this replaced a round already in play.
        restart: bool,
    },

    /// A card was turned face up by the player.
    CardRevealed(EntityId),

    /// A card was turned face down at the end of a phase.
    CardHidden(EntityId),

    /// The selected pair matched.
    PairMatched(EntityId, EntityId),

    /// The selected pair did not match; both flash until hidden.
    PairMismatched(EntityId, EntityId),

    /// An unmatched card was exposed after the game was lost.
    CardExposed(EntityId),

    /// The board accepts selections again.
    SelectionEnabled,

    ScoreChanged(i64),

    AttemptsChanged(i32),

    ElapsedChanged(Duration),

    StatusChanged(GameStatus),
}

impl GameEvent {
    /// The card this event is about, for per-card events.
    #[must_use]
    pub fn card(&self) -> Option<EntityId> {
        match self {
            GameEvent::CardRevealed(entity)
            | GameEvent::CardHidden(entity)
            | GameEvent::CardExposed(entity) => Some(*entity),
            _ => None,
        }
    }

    /// Is this a match outcome (a cue for the correct/incorrect sound)?
    #[must_use]
    pub fn is_match_outcome(&self) -> bool {
        matches!(self, GameEvent::PairMatched(..) | GameEvent::PairMismatched(..))
    }
}
