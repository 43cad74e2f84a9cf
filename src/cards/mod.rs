//! Cards and the images they are dealt from.
//!
//! - `Card`: per-card visibility/match state
//! - `ImageId`, `Category`: what a card shows
//! - `AssetProvider`, `ImageCatalog`: where the images come from

pub mod card;
pub mod catalog;

pub use card::Card;
pub use catalog::{AssetProvider, Category, ImageCatalog, ImageId};
