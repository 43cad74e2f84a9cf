//! The dealt round: cards, selection and phase orchestration.
//!
//! `Board` owns the shuffled cards of one round. It gates selection while a
//! timed display is running, evaluates a selected pair, and hides unmatched
//! cards when the opening reveal or a peek runs out.
//!
//! Evaluation is eager (the caller scores on the second pick) and hiding is
//! lazy (the peek countdown decides when unmatched cards turn back over).

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::phase::{Phase, PhaseCompletion};
use crate::cards::{Card, ImageId};
use crate::core::config::MIN_PAIRS_PER_ROUND;
use crate::core::{EntityId, GameRng, PairId, PhaseTiming, RoundId};
use crate::error::{Result, RoundError};
use crate::events::{EventQueue, GameEvent};

/// What a selection did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectOutcome {
    /// Out of turn, unknown card, or card not selectable. Nothing changed.
    Ignored,
    /// First card of a pair is now face up.
    FirstSelected(EntityId),
    /// Second card is face up; the pair awaits evaluation and the peek runs.
    PairSelected(EntityId),
}

impl SelectOutcome {
    #[must_use]
    pub const fn is_ignored(self) -> bool {
        matches!(self, SelectOutcome::Ignored)
    }
}

/// Result of comparing a selected pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchOutcome {
    Matched,
    Mismatched,
}

/// Cards of one round plus selection state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Board {
    round: RoundId,
    timing: PhaseTiming,
    cards: Vector<Card>,
    /// Indices into `cards` awaiting evaluation, in pick order.
    pending: SmallVec<[usize; 2]>,
    can_select: bool,
    phase: Phase,
    #[serde(skip)]
    events: EventQueue,
}

impl Board {
    /// Deal a round: two cards per image, shuffled, all face up, opening
    /// reveal started.
    ///
    /// Pair ids follow image order (`images[i]` → `PairId(i)`). Phase
    /// durations are clamped to at least one tick.
    pub fn create_round(
        images: &[ImageId],
        timing: PhaseTiming,
        round: RoundId,
        rng: &mut GameRng,
    ) -> Result<Self> {
        validate_images(images)?;
        let timing = PhaseTiming::new(timing.opening_ticks, timing.peek_ticks);

        let mut cards = Vec::with_capacity(images.len() * 2);
        for (raw, image) in (0u32..).zip(images) {
            let pair = PairId::new(raw);
            let (first, second) = EntityId::pair_members(pair);
            cards.push(Card::new(first, pair, image.clone()));
            cards.push(Card::new(second, pair, image.clone()));
        }

        rng.shuffle(&mut cards);
        for card in &mut cards {
            card.reveal();
        }

        log::debug!(
            "{} dealt: {} cards, opening reveal for {} ticks",
            round,
            cards.len(),
            timing.opening_ticks
        );

        Ok(Self {
            round,
            timing,
            cards: Vector::from(cards),
            pending: SmallVec::new(),
            can_select: false,
            phase: Phase::Opening {
                remaining: timing.opening_ticks,
            },
            events: EventQueue::new(),
        })
    }

    // === Accessors ===

    #[must_use]
    pub fn round(&self) -> RoundId {
        self.round
    }

    #[must_use]
    pub fn timing(&self) -> PhaseTiming {
        self.timing
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Does the board accept a selection right now?
    #[must_use]
    pub fn can_select(&self) -> bool {
        self.can_select
    }

    /// Cards in board order (row-major for the presentation grid).
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// O(1) copy of the card sequence.
    #[must_use]
    pub fn cards_snapshot(&self) -> Vector<Card> {
        self.cards.clone()
    }

    /// Number of cards on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn card(&self, entity: EntityId) -> Option<&Card> {
        self.index_of(entity).and_then(|index| self.cards.get(index))
    }

    #[must_use]
    pub fn card_at(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Board position of a card.
    #[must_use]
    pub fn index_of(&self, entity: EntityId) -> Option<usize> {
        self.cards.iter().position(|card| card.entity() == entity)
    }

    #[must_use]
    pub fn first_selected(&self) -> Option<EntityId> {
        self.pending_entity(0)
    }

    #[must_use]
    pub fn second_selected(&self) -> Option<EntityId> {
        self.pending_entity(1)
    }

    /// Is a selected pair waiting for `evaluate_selection`?
    #[must_use]
    pub fn has_pending_pair(&self) -> bool {
        self.pending.len() == 2
    }

    #[must_use]
    pub fn all_matched(&self) -> bool {
        self.cards.iter().all(Card::is_matched)
    }

    /// Number of pairs matched so far.
    #[must_use]
    pub fn matched_pairs(&self) -> usize {
        self.cards.iter().filter(|card| card.is_matched()).count() / 2
    }

    // === Player input ===

    /// Turn a card face up as part of the current pair.
    pub fn select_card(&mut self, entity: EntityId) -> SelectOutcome {
        if !self.can_select || self.pending.len() >= 2 {
            log::trace!("{} ignored: selection closed", entity);
            return SelectOutcome::Ignored;
        }

        let Some(index) = self.index_of(entity) else {
            log::trace!("{} ignored: not on this board", entity);
            return SelectOutcome::Ignored;
        };

        let Some(card) = self.cards.get_mut(index) else {
            return SelectOutcome::Ignored;
        };
        if !card.is_selectable() {
            log::trace!("{} ignored: not selectable", entity);
            return SelectOutcome::Ignored;
        }

        card.reveal();
        self.events.push(GameEvent::CardRevealed(entity));
        self.pending.push(index);

        if self.pending.len() == 1 {
            SelectOutcome::FirstSelected(entity)
        } else {
            self.can_select = false;
            self.phase = Phase::Peek {
                remaining: self.timing.peek_ticks,
            };
            SelectOutcome::PairSelected(entity)
        }
    }

    /// Compare the selected pair and mark both cards.
    ///
    /// Returns `None` unless exactly two cards are pending. Selection stays
    /// closed until the peek runs out.
    pub fn evaluate_selection(&mut self) -> Option<MatchOutcome> {
        if self.pending.len() != 2 {
            return None;
        }
        let (first, second) = (self.pending[0], self.pending[1]);
        let a = self.cards.get(first)?.clone();
        let b = self.cards.get(second)?.clone();

        let outcome = if a.pair() == b.pair() {
            for index in [first, second] {
                if let Some(card) = self.cards.get_mut(index) {
                    card.mark_matched();
                }
            }
            self.events.push(GameEvent::PairMatched(a.entity(), b.entity()));
            MatchOutcome::Matched
        } else {
            for index in [first, second] {
                if let Some(card) = self.cards.get_mut(index) {
                    card.mark_failed_flash();
                }
            }
            self.events.push(GameEvent::PairMismatched(a.entity(), b.entity()));
            MatchOutcome::Mismatched
        };

        log::debug!("{} / {}: {:?}", a.entity(), b.entity(), outcome);
        self.pending.clear();
        self.can_select = false;
        Some(outcome)
    }

    // === Clock ===

    /// Advance the running phase by one tick.
    pub fn tick(&mut self) -> Option<PhaseCompletion> {
        let completion = self.phase.tick()?;

        if completion == PhaseCompletion::PeekClosed && !self.pending.is_empty() {
            log::warn!(
                "{}: peek ended with {} unevaluated selection(s), discarding",
                self.round,
                self.pending.len()
            );
            self.pending.clear();
        }

        self.hide_unmatched();
        self.can_select = true;
        self.events.push(GameEvent::SelectionEnabled);
        log::trace!("{}: {:?}", self.round, completion);
        Some(completion)
    }

    // === Game over ===

    /// Expose every unmatched card for good (the loss display).
    pub fn reveal_all_unmatched(&mut self) {
        self.halt();
        for card in self.cards.iter_mut().filter(|card| !card.is_matched()) {
            card.mark_failed_flash();
            card.reveal();
            self.events.push(GameEvent::CardExposed(card.entity()));
        }
    }

    /// Stop all countdowns and close selection. Later ticks do nothing.
    pub fn halt(&mut self) {
        self.phase = Phase::Halted;
        self.can_select = false;
        self.pending.clear();
    }

    /// Take the events recorded since the last drain.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain()
    }

    pub(crate) fn events_mut(&mut self) -> &mut EventQueue {
        &mut self.events
    }

    fn hide_unmatched(&mut self) {
        for card in self.cards.iter_mut().filter(|card| !card.is_matched()) {
            if card.is_revealed() || card.is_failed_flash() {
                card.close_reveal();
                self.events.push(GameEvent::CardHidden(card.entity()));
            }
        }
    }

    fn pending_entity(&self, slot: usize) -> Option<EntityId> {
        self.pending
            .get(slot)
            .and_then(|&index| self.cards.get(index))
            .map(Card::entity)
    }
}

fn validate_images(images: &[ImageId]) -> Result<()> {
    if images.is_empty() {
        return Err(RoundError::Empty.into());
    }
    if images.len() < MIN_PAIRS_PER_ROUND {
        return Err(RoundError::TooFewImages {
            found: images.len(),
            required: MIN_PAIRS_PER_ROUND,
        }
        .into());
    }

    let mut seen = FxHashSet::default();
    for image in images {
        if !seen.insert(image) {
            return Err(RoundError::DuplicateImage(image.clone()).into());
        }
    }
    Ok(())
}
