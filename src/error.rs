//! Error types.
//!
//! Only round construction and configuration can fail. Everything else a
//! caller can do out of turn (clicking a matched card, clicking while a
//! peek is showing, ticking a finished game) is a silent no-op reported
//! through the outcome enums instead.

use thiserror::Error;

use crate::cards::{Category, ImageId};

/// Why a round could not be dealt.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RoundError {
    #[error("no images supplied")]
    Empty,
    #[error("a round needs at least {required} images, got {found}")]
    TooFewImages { found: usize, required: usize },
    #[error("image {0} supplied more than once")]
    DuplicateImage(ImageId),
    #[error("category {category} has {found} images, {required} required")]
    CategoryShortfall {
        category: Category,
        found: usize,
        required: usize,
    },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("invalid round: {0}")]
    InvalidRound(#[from] RoundError),
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
}

pub type Result<T> = std::result::Result<T, GameError>;
