//! Error types for card and deck operations.
//!
//! The `Display` text of every variant is part of the observable contract and
//! must not change.

use thiserror::Error;

/// Errors that can occur when constructing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// No color was given.
    #[error("color must be specified")]
    MissingColor,
    /// The color is not one of the known colors.
    #[error("color must be a Color value")]
    InvalidColor,
    /// No value was given.
    #[error("value must be specified")]
    MissingValue,
    /// The value is not an integer.
    #[error("value must be an integer value")]
    NonIntegerValue,
    /// The value is zero or negative.
    #[error("value must be greater than zero")]
    NonPositiveValue,
}

/// Errors that can occur when constructing a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// No card list was given.
    #[error("cards must be specified")]
    MissingCards,
    /// The input is not a list.
    #[error("cards must be a list")]
    NotAList,
    /// The card list is empty.
    #[error("the list of cards cannot be empty")]
    EmptyCards,
    /// An element of the list is not a card.
    #[error("the list of cards must contain only Card objects")]
    NotACard,
}

/// Errors that can occur when dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// No card count was given.
    #[error("number of cards must be specified")]
    MissingCount,
    /// The count is not an integer.
    #[error("number of cards must be an integer value")]
    NonIntegerCount,
    /// The count is zero or negative.
    #[error("number of cards must be greater than zero")]
    NonPositiveCount,
    /// Not enough cards left in the deck.
    #[error("number of cards is greater than the size of the deck")]
    NotEnoughCards,
}

/// Errors that can occur when sorting by color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SortError {
    /// No color list was given.
    #[error("color list must be specified")]
    MissingColors,
    /// The input is not a list.
    #[error("color list must be a list")]
    NotAList,
    /// The color list is empty.
    #[error("color list cannot be empty")]
    EmptyColors,
    /// An element of the list is not a color.
    #[error("the list of colors must contain only Color values")]
    NotAColor,
}
