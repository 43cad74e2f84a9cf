//! Board phases.
//!
//! The two timed displays are countdowns advanced by the external clock:
//!
//! ```text
//! deal ──► Opening(n) ──tick×n──► Idle ──2nd pick──► Peek(m) ──tick×m──► Idle
//!                                   ▲                                     │
//!                                   └─────────────────────────────────────┘
//! any ──► Halted   (game over; ticks ignored)
//! ```

use serde::{Deserialize, Serialize};

/// Where the board is in its reveal/hide cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// All cards face up for memorizing; `remaining` ticks left.
    Opening { remaining: u32 },

    /// Waiting for the player.
    #[default]
    Idle,

    /// A selected pair is on display; `remaining` ticks left.
    Peek { remaining: u32 },

    /// The game ended; no countdown will ever complete.
    Halted,
}

/// A countdown that just ran out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PhaseCompletion {
    OpeningClosed,
    PeekClosed,
}

impl Phase {
    /// Is a timed display in progress?
    #[must_use]
    pub const fn is_counting(self) -> bool {
        matches!(self, Phase::Opening { .. } | Phase::Peek { .. })
    }

    #[must_use]
    pub const fn is_halted(self) -> bool {
        matches!(self, Phase::Halted)
    }

    /// Advance by one tick, returning the completion if it ran out.
    pub fn tick(&mut self) -> Option<PhaseCompletion> {
        let (remaining, completion) = match self {
            Phase::Opening { remaining } => (remaining, PhaseCompletion::OpeningClosed),
            Phase::Peek { remaining } => (remaining, PhaseCompletion::PeekClosed),
            Phase::Idle | Phase::Halted => return None,
        };

        *remaining = remaining.saturating_sub(1);
        if *remaining == 0 {
            *self = Phase::Idle;
            Some(completion)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        let mut phase = Phase::default();
        assert_eq!(phase, Phase::Idle);
        assert!(!phase.is_counting());
        assert_eq!(phase.tick(), None);
    }

    #[test]
    fn test_opening_counts_down() {
        let mut phase = Phase::Opening { remaining: 3 };

        assert_eq!(phase.tick(), None);
        assert_eq!(phase.tick(), None);
        assert_eq!(phase, Phase::Opening { remaining: 1 });
        assert_eq!(phase.tick(), Some(PhaseCompletion::OpeningClosed));
        assert_eq!(phase, Phase::Idle);
    }

    #[test]
    fn test_peek_completes_once() {
        let mut phase = Phase::Peek { remaining: 1 };

        assert_eq!(phase.tick(), Some(PhaseCompletion::PeekClosed));
        assert_eq!(phase.tick(), None);
        assert!(!phase.is_counting());
    }

    #[test]
    fn test_halted_ignores_ticks() {
        let mut phase = Phase::Halted;

        for _ in 0..10 {
            assert_eq!(phase.tick(), None);
        }
        assert!(phase.is_halted());
    }

    #[test]
    fn test_zero_remaining_completes_on_next_tick() {
        let mut phase = Phase::Opening { remaining: 0 };
        assert_eq!(phase.tick(), Some(PhaseCompletion::OpeningClosed));
    }
}
