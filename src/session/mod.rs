//! The playable game: rounds, scoring, attempts and the end condition.
//!
//! ## Key Components
//!
//! - [`GameSession`]: owns the board, score, attempts and round timer
//! - [`GameStatus`]: in progress, won or lost
//! - [`Scoreboard`]: running score and remaining attempts
//! - [`SessionSnapshot`]: read-only view for rendering
//!
//! ## Example Usage
//!
//! ```
//! use memory_match::cards::{Category, ImageCatalog};
//! use memory_match::core::{GameConfig, EntityId};
//! use memory_match::session::{ClickOutcome, GameSession};
//!
//! let mut session = GameSession::new(
//!     GameConfig::default(),
//!     ImageCatalog::placeholder(6),
//!     Category::Cars,
//!     7,
//! )
//! .unwrap();
//!
//! // Everything is face up for the opening reveal.
//! assert_eq!(session.on_card_clicked(EntityId(0)), ClickOutcome::Ignored);
//! for _ in 0..5 {
//!     session.tick();
//! }
//!
//! assert_eq!(session.on_card_clicked(EntityId(0)), ClickOutcome::Revealed);
//! assert_eq!(session.on_card_clicked(EntityId(1)), ClickOutcome::Matched);
//! assert_eq!(session.score(), 75);
//! ```

mod game;
mod snapshot;
mod status;

pub use game::{ClickOutcome, GameSession};
pub use snapshot::SessionSnapshot;
pub use status::{GameStatus, Scoreboard};
