//! Card types.

use core::fmt;
use core::sync::atomic::{AtomicUsize, Ordering};

use crate::error::CardError;

/// Next card identity to hand out.
static NEXT_CARD_ID: AtomicUsize = AtomicUsize::new(0);

/// Card color.
///
/// The discriminant is the scoring multiplier of the color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    /// Green, multiplier 1.
    Green = 1,
    /// Yellow, multiplier 2.
    Yellow = 2,
    /// Red, multiplier 3.
    Red = 3,
}

impl Color {
    /// All colors in declaration order.
    pub const ALL: [Self; 3] = [Self::Green, Self::Yellow, Self::Red];

    /// Returns the scoring multiplier of the color.
    #[must_use]
    pub const fn multiplier(self) -> u32 {
        self as u32
    }

    /// Returns the bare lowercase name of the color.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Red => "red",
        }
    }
}

/// Renders the qualified enumeration name, e.g. `Colors.green`.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Colors.{}", self.name())
    }
}

/// Identity of a card.
///
/// Every call to [`Card::new`] yields a fresh identity, so two cards with the
/// same color and value are still distinct. Copies of a card share its
/// identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardId(usize);

impl CardId {
    fn next() -> Self {
        Self(NEXT_CARD_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw identity number.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }
}

/// A playing card with a color and a positive value.
///
/// Equality compares identity; use [`Card::same_face`] to compare color and
/// value only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    id: CardId,
    color: Color,
    value: u32,
}

impl Card {
    /// Creates a new card.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::NonPositiveValue`] if `value` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use colordeck::{Card, CardError, Color};
    ///
    /// let card = Card::new(Color::Red, 5).unwrap();
    /// assert_eq!(card.score(), 15);
    /// assert_eq!(Card::new(Color::Red, 0), Err(CardError::NonPositiveValue));
    /// ```
    pub fn new(color: Color, value: u32) -> Result<Self, CardError> {
        if value == 0 {
            return Err(CardError::NonPositiveValue);
        }

        Ok(Self {
            id: CardId::next(),
            color,
            value,
        })
    }

    /// Returns the identity of the card.
    #[must_use]
    pub const fn id(&self) -> CardId {
        self.id
    }

    /// Returns the color of the card.
    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    /// Returns the value of the card.
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.value
    }

    /// Returns the score of the card: color multiplier times value.
    #[must_use]
    pub const fn score(&self) -> u64 {
        self.color.multiplier() as u64 * self.value as u64
    }

    /// Returns whether both cards have the same color and value.
    #[must_use]
    pub fn same_face(&self, other: &Self) -> bool {
        self.color == other.color && self.value == other.value
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "color:{}, value: {}", self.color, self.value)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn new_stores_fields() {
        let card = Card::new(Color::Red, 5).unwrap();
        assert_eq!(card.color(), Color::Red);
        assert_eq!(card.value(), 5);
    }

    #[test]
    fn zero_value_is_rejected() {
        assert_eq!(
            Card::new(Color::Green, 0).unwrap_err(),
            CardError::NonPositiveValue
        );
    }

    #[test]
    fn score_uses_multiplier() {
        assert_eq!(Card::new(Color::Green, 7).unwrap().score(), 7);
        assert_eq!(Card::new(Color::Yellow, 7).unwrap().score(), 14);
        assert_eq!(Card::new(Color::Red, 5).unwrap().score(), 15);
        assert_eq!(
            Card::new(Color::Red, u32::MAX).unwrap().score(),
            3 * u64::from(u32::MAX)
        );
    }

    #[test]
    fn display_includes_qualified_color() {
        let card = Card::new(Color::Green, 10).unwrap();
        assert_eq!(card.to_string(), "color:Colors.green, value: 10");
    }

    #[test]
    fn identity_is_distinct_per_construction() {
        let a = Card::new(Color::Yellow, 3).unwrap();
        let b = Card::new(Color::Yellow, 3).unwrap();
        let copy = a;

        assert_ne!(a, b);
        assert!(a.same_face(&b));
        assert_eq!(a, copy);
    }
}
