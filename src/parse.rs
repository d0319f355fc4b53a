//! Textual input for cards, card lists, color lists and deal counts.
//!
//! The typed API cannot be handed a missing color or a non-integer value; this
//! module accepts loosely-typed text (command lines, fixtures) and reports
//! those conditions with the same errors.
//!
//! Notation:
//!
//! - color: `green`, `yellow` or `red`, optionally written `Colors.red`
//! - card: `<color>:<value>`, e.g. `red:5`
//! - list: `[item, item, ...]`

use alloc::vec::Vec;
use core::str::FromStr;

use crate::card::{Card, Color};
use crate::error::{CardError, DealError, DeckError, SortError};

const COLOR_PREFIX: &str = "Colors.";

/// Why an input is not a non-empty list.
enum ListError {
    Missing,
    NotAList,
    Empty,
}

/// Splits `[a, b, c]` into its trimmed items.
fn list_items(input: &str) -> Result<Vec<&str>, ListError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ListError::Missing);
    }

    let inner = input
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or(ListError::NotAList)?
        .trim();
    if inner.is_empty() {
        return Err(ListError::Empty);
    }

    Ok(inner.split(',').map(str::trim).collect())
}

/// An integer read from text of any magnitude.
enum Integer {
    /// Zero or negative.
    NonPositive,
    /// Positive; `None` when it does not fit a `u64`.
    Positive(Option<u64>),
}

/// Reads `[+-]?digits`, returning `None` for anything else.
fn parse_integer(text: &str) -> Option<Integer> {
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let magnitude = digits.trim_start_matches('0');
    if negative || magnitude.is_empty() {
        return Some(Integer::NonPositive);
    }

    Some(Integer::Positive(magnitude.parse().ok()))
}

fn non_blank(input: Option<&str>) -> Option<&str> {
    input.map(str::trim).filter(|s| !s.is_empty())
}

impl FromStr for Color {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(CardError::MissingColor);
        }

        let name = s.strip_prefix(COLOR_PREFIX).unwrap_or(s);
        Self::ALL
            .into_iter()
            .find(|color| color.name().eq_ignore_ascii_case(name))
            .ok_or(CardError::InvalidColor)
    }
}

impl Card {
    /// Creates a card from optional textual fields.
    ///
    /// # Errors
    ///
    /// Checks, in order, that the color is present and known and that the
    /// value is present, an integer, and greater than zero. Values that do not
    /// fit a `u32` are reported as [`CardError::NonIntegerValue`].
    ///
    /// # Example
    ///
    /// ```
    /// use colordeck::{Card, CardError};
    ///
    /// assert_eq!(Card::from_fields(None, Some("1")), Err(CardError::MissingColor));
    /// assert_eq!(Card::from_fields(Some("red"), Some("one")), Err(CardError::NonIntegerValue));
    /// assert_eq!(Card::from_fields(Some("red"), Some("5")).unwrap().score(), 15);
    /// ```
    pub fn from_fields(color: Option<&str>, value: Option<&str>) -> Result<Self, CardError> {
        let color: Color = non_blank(color).ok_or(CardError::MissingColor)?.parse()?;
        let value = non_blank(value).ok_or(CardError::MissingValue)?;
        let value = match parse_integer(value).ok_or(CardError::NonIntegerValue)? {
            Integer::NonPositive => return Err(CardError::NonPositiveValue),
            Integer::Positive(value) => value
                .and_then(|value| u32::try_from(value).ok())
                .ok_or(CardError::NonIntegerValue)?,
        };

        Self::new(color, value)
    }
}

impl FromStr for Card {
    type Err = CardError;

    /// Parses `<color>:<value>`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some((color, value)) => Self::from_fields(Some(color), Some(value)),
            None => Self::from_fields(Some(s), None),
        }
    }
}

/// Parses a card list such as `[red:1, green:2]`.
///
/// # Errors
///
/// Returns [`DeckError::MissingCards`] for blank input,
/// [`DeckError::NotAList`] without brackets, [`DeckError::EmptyCards`] for
/// `[]`, and [`DeckError::NotACard`] if any item is not a valid card.
pub fn parse_card_list(input: &str) -> Result<Vec<Card>, DeckError> {
    let items = list_items(input).map_err(|err| match err {
        ListError::Missing => DeckError::MissingCards,
        ListError::NotAList => DeckError::NotAList,
        ListError::Empty => DeckError::EmptyCards,
    })?;

    items
        .into_iter()
        .map(|item| item.parse::<Card>().map_err(|_| DeckError::NotACard))
        .collect()
}

/// Parses a color list such as `[yellow, green]`.
///
/// # Errors
///
/// Returns [`SortError::MissingColors`] for blank input,
/// [`SortError::NotAList`] without brackets, [`SortError::EmptyColors`] for
/// `[]`, and [`SortError::NotAColor`] if any item is not a color.
pub fn parse_color_list(input: &str) -> Result<Vec<Color>, SortError> {
    let items = list_items(input).map_err(|err| match err {
        ListError::Missing => SortError::MissingColors,
        ListError::NotAList => SortError::NotAList,
        ListError::Empty => SortError::EmptyColors,
    })?;

    items
        .into_iter()
        .map(|item| item.parse::<Color>().map_err(|_| SortError::NotAColor))
        .collect()
}

/// Parses a deal count such as `3`.
///
/// # Errors
///
/// Returns [`DealError::MissingCount`] for blank input,
/// [`DealError::NonIntegerCount`] if it is not an integer, and
/// [`DealError::NonPositiveCount`] if it is not greater than zero. Counts too
/// large for a `usize` are reported as [`DealError::NotEnoughCards`].
pub fn parse_deal_count(input: &str) -> Result<usize, DealError> {
    let count = non_blank(Some(input)).ok_or(DealError::MissingCount)?;
    match parse_integer(count).ok_or(DealError::NonIntegerCount)? {
        Integer::NonPositive => Err(DealError::NonPositiveCount),
        // Larger than any deck this platform can hold.
        Integer::Positive(count) => count
            .and_then(|count| usize::try_from(count).ok())
            .ok_or(DealError::NotEnoughCards),
    }
}
