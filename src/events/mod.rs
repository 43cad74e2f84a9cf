//! Change notification for the presentation layer.
//!
//! ## Key Components
//!
//! - [`GameEvent`]: one observable change (card flipped, score changed, ...)
//! - [`EventQueue`]: ordered buffer the session fills and the host drains
//!
//! ## Example Usage
//!
//! ```
//! use memory_match::cards::{Category, ImageCatalog};
//! use memory_match::core::GameConfig;
//! use memory_match::events::GameEvent;
//! use memory_match::session::GameSession;
//!
//! let mut session = GameSession::new(
//!     GameConfig::default(),
//!     ImageCatalog::placeholder(6),
//!     Category::Animals,
//!     42,
//! )
//! .unwrap();
//!
//! let events = session.drain_events();
//! assert!(matches!(events[0], GameEvent::RoundStarted { cards: 12, .. }));
//! ```

mod event;
mod queue;

pub use event::GameEvent;
pub use queue::EventQueue;
