//! Buffered event delivery.
//!
//! Events accumulate in the order the state changed and are drained by
//! the host between input/clock callbacks.

use serde::{Deserialize, Serialize};

use super::event::GameEvent;

/// FIFO buffer of pending events.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventQueue {
    pending: Vec<GameEvent>,
}

impl EventQueue {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an event.
    ///
    /// A timer update directly following another timer update replaces it,
    /// so an undrained queue grows only with real state changes.
    pub fn push(&mut self, event: GameEvent) {
        if let GameEvent::ElapsedChanged(elapsed) = event {
            if let Some(GameEvent::ElapsedChanged(last)) = self.pending.last_mut() {
                *last = elapsed;
                return;
            }
        }
        self.pending.push(event);
    }

    /// Move every event out of `other`, keeping order.
    pub fn append(&mut self, other: &mut EventQueue) {
        self.pending.append(&mut other.pending);
    }

    /// Take all pending events.
    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.pending)
    }

    /// Drop all pending events.
    pub fn clear(&mut self) {
        self.pending.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Iterate over pending events without draining.
    pub fn iter(&self) -> impl Iterator<Item = &GameEvent> {
        self.pending.iter()
    }
}
