//! A single card on the board.
//!
//! `Card` tracks the face-up/matched/failed state the presentation layer
//! renders. The flags obey:
//!
//! - `matched` is terminal: nothing clears it.
//! - `failed_flash` is only cleared by `close_reveal`.
//! - A card is selectable iff it is neither matched nor revealed.

use serde::{Deserialize, Serialize};

use super::catalog::ImageId;
use crate::core::{EntityId, PairId};

/// A card dealt into a round.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    entity: EntityId,
    pair: PairId,
    image: ImageId,
    revealed: bool,
    matched: bool,
    failed_flash: bool,
}

impl Card {
    /// Create a face-down card.
    #[must_use]
    pub fn new(entity: EntityId, pair: PairId, image: ImageId) -> Self {
        Self {
            entity,
            pair,
            image,
            revealed: false,
            matched: false,
            failed_flash: false,
        }
    }

    #[must_use]
    pub fn entity(&self) -> EntityId {
        self.entity
    }

    /// Match key shared with exactly one other card.
    #[must_use]
    pub fn pair(&self) -> PairId {
        self.pair
    }

    #[must_use]
    pub fn image(&self) -> &ImageId {
        &self.image
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.matched
    }

    #[must_use]
    pub fn is_failed_flash(&self) -> bool {
        self.failed_flash
    }

    /// Can the player pick this card?
    #[must_use]
    pub fn is_selectable(&self) -> bool {
        !self.matched && !self.revealed
    }

    /// Is the face visible? Matched cards stay face up for good.
    #[must_use]
    pub fn is_face_up(&self) -> bool {
        self.matched || self.revealed
    }

    /// Turn the card face up. No-op once matched.
    pub fn reveal(&mut self) {
        if !self.matched {
            self.revealed = true;
        }
    }

    /// Turn the card face down and clear the failure flash.
    pub fn close_reveal(&mut self) {
        self.revealed = false;
        self.failed_flash = false;
    }

    pub fn mark_matched(&mut self) {
        self.matched = true;
    }

    pub fn mark_failed_flash(&mut self) {
        self.failed_flash = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_card() -> Card {
        Card::new(EntityId(4), PairId::new(2), ImageId::new("animals/cat.jpg"))
    }

    #[test]
    fn test_new_card_is_face_down() {
        let card = test_card();

        assert_eq!(card.entity(), EntityId(4));
        assert_eq!(card.pair(), PairId::new(2));
        assert_eq!(card.image().as_str(), "animals/cat.jpg");
        assert!(!card.is_revealed());
        assert!(!card.is_matched());
        assert!(!card.is_failed_flash());
        assert!(card.is_selectable());
    }

    #[test]
    fn test_reveal_makes_unselectable() {
        let mut card = test_card();
        card.reveal();

        assert!(card.is_revealed());
        assert!(card.is_face_up());
        assert!(!card.is_selectable());
    }

    #[test]
    fn test_reveal_is_noop_when_matched() {
        let mut card = test_card();
        card.mark_matched();
        card.reveal();

        assert!(!card.is_revealed());
        assert!(card.is_face_up());
        assert!(!card.is_selectable());
    }

    #[test]
    fn test_close_reveal_clears_failed_flash() {
        let mut card = test_card();
        card.reveal();
        card.mark_failed_flash();
        assert!(card.is_failed_flash());

        card.close_reveal();

        assert!(!card.is_revealed());
        assert!(!card.is_failed_flash());
        assert!(card.is_selectable());
    }

    #[test]
    fn test_close_reveal_is_idempotent() {
        let mut once = test_card();
        once.reveal();
        once.mark_failed_flash();
        once.close_reveal();

        let mut twice = once.clone();
        twice.close_reveal();

        assert_eq!(once, twice);
    }

    #[test]
    fn test_mark_matched_is_idempotent_and_terminal() {
        let mut once = test_card();
        once.mark_matched();

        let mut twice = once.clone();
        twice.mark_matched();
        assert_eq!(once, twice);

        twice.close_reveal();
        assert!(twice.is_matched());
    }

    #[test]
    fn test_card_serialization() {
        let mut card = test_card();
        card.reveal();
        card.mark_failed_flash();

        let json = serde_json::to_string(&card).unwrap();
        let deserialized: Card = serde_json::from_str(&json).unwrap();

        assert_eq!(card, deserialized);
    }
}
