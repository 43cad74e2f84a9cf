//! Identifiers for cards and rounds.
//!
//! A dealt round has two kinds of card identity:
//!
//! - `EntityId`: unique per card, assigned in creation order and stable
//!   across the shuffle. This is what the presentation layer hands back
//!   when the player clicks a card.
//! - `PairId`: the match key. Exactly two cards of a round share one.
//!
//! ## Layout
//!
//! Cards are created pairwise from the image list, so for image `i`:
//!
//! - `PairId(i)`
//! - `EntityId(2 * i)` and `EntityId(2 * i + 1)`
//!
//! ```
//! use memory_match::core::{EntityId, PairId};
//!
//! let (a, b) = EntityId::pair_members(PairId::new(2));
//! assert_eq!(a, EntityId(4));
//! assert_eq!(b, EntityId(5));
//! assert_eq!(a.pair(), PairId::new(2));
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a card within a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u32);

impl EntityId {
    /// The two entities dealt for a pair.
    #[must_use]
    pub const fn pair_members(pair: PairId) -> (Self, Self) {
        (Self(pair.0 * 2), Self(pair.0 * 2 + 1))
    }

    /// The pair this entity was dealt for.
    #[must_use]
    pub const fn pair(self) -> PairId {
        PairId(self.0 / 2)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for EntityId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}

/// Match key shared by the two cards of a pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PairId(pub u32);

impl PairId {
    /// Create a new pair ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for PairId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Pair({})", self.0)
    }
}

/// Generation counter for dealt rounds.
///
/// Every `start`/`restart` deals a new round with the next id. Ticks
/// addressed to an older round are stale and get discarded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RoundId(pub u64);

impl RoundId {
    /// The id of the round dealt after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for RoundId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Round({})", self.0)
    }
}
