//! The game session: board + scoring + attempts + win/loss.
//!
//! `GameSession` is the single entry point for the host. It receives
//! player clicks (`on_card_clicked`) and clock ticks (`tick`), both
//! delivered serially, and never blocks.
//!
//! ## Click flow
//!
//! 1. Ignore the click if the game is over or the board is not accepting
//!    selections.
//! 2. Select the card on the board.
//! 3. On the second card of a pair, evaluate immediately and score.
//! 4. Check the end condition: exhausted attempts lose (checked first),
//!    all pairs matched wins.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::snapshot::SessionSnapshot;
use super::status::{GameStatus, Scoreboard};
use crate::board::{Board, MatchOutcome, PhaseCompletion, SelectOutcome};
use crate::cards::{AssetProvider, Category};
use crate::core::{EntityId, GameConfig, GameRng, RoundId, RoundTimer};
use crate::error::{Result, RoundError};
use crate::events::{EventQueue, GameEvent};

/// What a click did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClickOutcome {
    /// Game over, board busy, or card not selectable.
    Ignored,
    /// First card of a pair turned face up.
    Revealed,
    /// Second card completed a matching pair.
    Matched,
    /// Second card completed a mismatched pair.
    Mismatched,
}

impl From<MatchOutcome> for ClickOutcome {
    fn from(outcome: MatchOutcome) -> Self {
        match outcome {
            MatchOutcome::Matched => ClickOutcome::Matched,
            MatchOutcome::Mismatched => ClickOutcome::Mismatched,
        }
    }
}

/// A single-player game over rounds dealt from an asset provider.
#[derive(Clone, Debug)]
pub struct GameSession<A> {
    config: GameConfig,
    assets: A,
    category: Category,
    rng: GameRng,
    board: Board,
    scoreboard: Scoreboard,
    timer: RoundTimer,
    status: GameStatus,
    events: EventQueue,
}

impl<A: AssetProvider> GameSession<A> {
    /// Validate the configuration, deal the first round and start the
    /// timer.
    pub fn new(config: GameConfig, assets: A, category: Category, seed: u64) -> Result<Self> {
        config.validate()?;

        let mut rng = GameRng::new(seed);
        let board = deal(&config, &assets, category, RoundId(1), &mut rng)?;

        let mut session = Self {
            scoreboard: Scoreboard::new(config.max_attempts),
            config,
            assets,
            category,
            rng,
            board,
            timer: RoundTimer::new(),
            status: GameStatus::InProgress,
            events: EventQueue::new(),
        };
        session.begin_round(false);
        Ok(session)
    }

    /// Deal a fresh round from `category` and reset score, attempts, status
    /// and timer.
    ///
    /// If the round cannot be dealt the current game is left untouched.
    pub fn start(&mut self, category: Category) -> Result<()> {
        let round = self.board.round().next();
        let board = deal(&self.config, &self.assets, category, round, &mut self.rng)?;

        let previous = self.status;
        self.board = board;
        self.category = category;
        self.scoreboard = Scoreboard::new(self.config.max_attempts);
        self.status = GameStatus::InProgress;
        self.begin_round(true);

        if previous != GameStatus::InProgress {
            self.events.push(GameEvent::StatusChanged(GameStatus::InProgress));
        }
        Ok(())
    }

    /// Deal a fresh round from the current category.
    pub fn restart(&mut self) -> Result<()> {
        self.start(self.category)
    }

    /// Handle a click on a card.
    pub fn on_card_clicked(&mut self, entity: EntityId) -> ClickOutcome {
        if self.status.is_finished() {
            log::trace!("{} ignored: game is {:?}", entity, self.status);
            return ClickOutcome::Ignored;
        }
        if !self.board.can_select() {
            log::trace!("{} ignored: board busy", entity);
            return ClickOutcome::Ignored;
        }

        let outcome = match self.board.select_card(entity) {
            SelectOutcome::Ignored => ClickOutcome::Ignored,
            SelectOutcome::FirstSelected(_) => ClickOutcome::Revealed,
            SelectOutcome::PairSelected(_) => {
                match self.board.evaluate_selection() {
                    Some(result) => {
                        self.collect_board_events();
                        self.apply_outcome(result);
                        ClickOutcome::from(result)
                    }
                    None => ClickOutcome::Revealed,
                }
            }
        };

        self.collect_board_events();
        self.check_end_condition();
        outcome
    }

    /// Advance the clock by one second.
    ///
    /// Ticks after the game ends do nothing.
    pub fn tick(&mut self) -> Option<PhaseCompletion> {
        if self.status.is_finished() {
            return None;
        }

        if let Some(elapsed) = self.timer.tick() {
            self.events.push(GameEvent::ElapsedChanged(elapsed));
        }
        let completion = self.board.tick();
        self.collect_board_events();
        completion
    }

    /// Advance the clock for a specific round.
    ///
    /// Hosts that schedule ticks per round use this so a tick scheduled
    /// before a restart cannot touch the new round.
    pub fn tick_round(&mut self, round: RoundId) -> Option<PhaseCompletion> {
        if round != self.board.round() {
            log::trace!("stale tick for {} discarded (current {})", round, self.board.round());
            return None;
        }
        self.tick()
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn score(&self) -> i64 {
        self.scoreboard.score()
    }

    #[must_use]
    pub fn attempts_remaining(&self) -> i32 {
        self.scoreboard.attempts_remaining()
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.timer.elapsed()
    }

    #[must_use]
    pub fn is_timer_running(&self) -> bool {
        self.timer.is_running()
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn round(&self) -> RoundId {
        self.board.round()
    }

    #[must_use]
    pub fn can_select(&self) -> bool {
        !self.status.is_finished() && self.board.can_select()
    }

    /// Take the events recorded since the last drain.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain()
    }

    /// Immutable view for rendering.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            round: self.board.round(),
            category: self.category,
            status: self.status,
            score: self.scoreboard.score(),
            attempts_remaining: self.scoreboard.attempts_remaining(),
            elapsed: self.timer.elapsed(),
            can_select: self.can_select(),
            phase: self.board.phase(),
            cards: self.board.cards_snapshot(),
        }
    }

    // === Internals ===

    fn begin_round(&mut self, restart: bool) {
        self.timer.reset();
        self.timer.start();
        self.events.clear();

        log::debug!(
            "{} started: {} with {} cards (restart: {})",
            self.board.round(),
            self.category,
            self.board.len(),
            restart
        );

        self.events.push(GameEvent::RoundStarted {
            round: self.board.round(),
            category: self.category,
            cards: self.board.len(),
            restart,
        });
        self.events.push(GameEvent::ScoreChanged(self.scoreboard.score()));
        self.events.push(GameEvent::AttemptsChanged(self.scoreboard.attempts_remaining()));
        self.events.push(GameEvent::ElapsedChanged(self.timer.elapsed()));
    }

    fn apply_outcome(&mut self, outcome: MatchOutcome) {
        match outcome {
            MatchOutcome::Matched => {
                self.scoreboard.award(self.config.match_award);
            }
            MatchOutcome::Mismatched => {
                self.scoreboard.penalize(self.config.mismatch_penalty);
                self.events.push(GameEvent::AttemptsChanged(self.scoreboard.attempts_remaining()));
            }
        }
        self.events.push(GameEvent::ScoreChanged(self.scoreboard.score()));
    }

    fn check_end_condition(&mut self) {
        if self.status.is_finished() {
            return;
        }

        if self.scoreboard.is_exhausted() {
            self.finish(GameStatus::Lost);
            self.board.reveal_all_unmatched();
        } else if self.board.all_matched() {
            self.finish(GameStatus::Won);
            self.board.halt();
        } else {
            return;
        }
        self.collect_board_events();
        self.events.push(GameEvent::StatusChanged(self.status));
    }

    fn finish(&mut self, status: GameStatus) {
        self.status = status;
        self.timer.stop();
        log::debug!(
            "{} {:?}: score {}, attempts {}, {:?}",
            self.board.round(),
            status,
            self.scoreboard.score(),
            self.scoreboard.attempts_remaining(),
            self.timer.elapsed()
        );
    }

    fn collect_board_events(&mut self) {
        let board_events = self.board.events_mut();
        self.events.append(board_events);
    }
}

/// Deal a round from the first `pairs_per_round` images of `category`.
fn deal<A: AssetProvider>(
    config: &GameConfig,
    assets: &A,
    category: Category,
    round: RoundId,
    rng: &mut GameRng,
) -> Result<Board> {
    let mut images = assets.images(category);
    if images.len() < config.pairs_per_round {
        log::warn!(
            "{} has {} images, a round needs {}",
            category,
            images.len(),
            config.pairs_per_round
        );
        return Err(RoundError::CategoryShortfall {
            category,
            found: images.len(),
            required: config.pairs_per_round,
        }
        .into());
    }
    images.truncate(config.pairs_per_round);

    let mut round_rng = rng.fork();
    Board::create_round(&images, config.timing, round, &mut round_rng)
}
