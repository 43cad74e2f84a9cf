//! Immutable view of a session for rendering.
//!
//! A snapshot clones in O(1) (the card sequence is an `im::Vector`), so
//! a presentation layer can keep the previous one and diff against it.

use std::time::Duration;

use im::Vector;
use serde::{Deserialize, Serialize};

use super::status::GameStatus;
use crate::board::Phase;
use crate::cards::{Card, Category};
use crate::core::{EntityId, RoundId};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub round: RoundId,
    pub category: Category,
    pub status: GameStatus,
    pub score: i64,
    pub attempts_remaining: i32,
    pub elapsed: Duration,
    pub can_select: bool,
    pub phase: Phase,
    pub cards: Vector<Card>,
}

impl SessionSnapshot {
    /// Cards whose face is visible.
    pub fn face_up(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.cards.iter().filter(|card| card.is_face_up()).map(Card::entity)
    }

    /// Cards that differ from `previous`, by board position.
    ///
    /// Returns every position when the round changed.
    #[must_use]
    pub fn changed_cards(&self, previous: &SessionSnapshot) -> Vec<usize> {
        if self.round != previous.round || self.cards.len() != previous.cards.len() {
            return (0..self.cards.len()).collect();
        }
        self.cards
            .iter()
            .zip(previous.cards.iter())
            .enumerate()
            .filter(|(_, (now, before))| now != before)
            .map(|(index, _)| index)
            .collect()
    }
}
