//! Standard deck configuration.

use alloc::vec::Vec;

use crate::card::{Card, Color};
use crate::deck::Deck;
use crate::error::DeckError;

/// Configuration for a standard deck: every listed color paired with every
/// value from 1 to `max_value`.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use colordeck::{Color, DeckOptions};
///
/// let deck = DeckOptions::default()
///     .with_colors(&[Color::Red, Color::Green])
///     .with_max_value(5)
///     .with_seed(3)
///     .build()
///     .unwrap();
/// assert_eq!(deck.len(), 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckOptions {
    /// Colors in the deck, in construction order.
    pub colors: Vec<Color>,
    /// Highest card value.
    pub max_value: u32,
    /// Whether each color runs from `max_value` down to 1 instead of up.
    pub descending: bool,
    /// Seed for the deck's shuffle generator; `None` leaves the deck
    /// unseeded (see [`Deck::unseeded`]).
    pub seed: Option<u64>,
}

impl Default for DeckOptions {
    fn default() -> Self {
        Self {
            colors: Color::ALL.to_vec(),
            max_value: 10,
            descending: true,
            seed: None,
        }
    }
}

impl DeckOptions {
    /// Sets the colors.
    ///
    /// # Example
    ///
    /// ```
    /// use colordeck::{Color, DeckOptions};
    ///
    /// let options = DeckOptions::default().with_colors(&[Color::Yellow]);
    /// assert_eq!(options.colors, vec![Color::Yellow]);
    /// ```
    #[must_use]
    pub fn with_colors(mut self, colors: &[Color]) -> Self {
        self.colors = colors.to_vec();
        self
    }

    /// Sets the highest card value.
    #[must_use]
    pub const fn with_max_value(mut self, max_value: u32) -> Self {
        self.max_value = max_value;
        self
    }

    /// Sets whether values run downward within each color.
    #[must_use]
    pub const fn with_descending(mut self, descending: bool) -> Self {
        self.descending = descending;
        self
    }

    /// Sets the shuffle seed.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds the cards described by the options, color by color.
    #[must_use]
    pub fn cards(&self) -> Vec<Card> {
        let mut cards = Vec::with_capacity(self.colors.len() * self.max_value as usize);

        // Values start at 1, so `Card::new` never rejects them.
        for &color in &self.colors {
            if self.descending {
                cards.extend((1..=self.max_value).rev().flat_map(|value| Card::new(color, value)));
            } else {
                cards.extend((1..=self.max_value).flat_map(|value| Card::new(color, value)));
            }
        }

        cards
    }

    /// Builds the deck described by the options.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::EmptyCards`] if there are no colors or
    /// `max_value` is zero.
    pub fn build(&self) -> Result<Deck, DeckError> {
        let cards = self.cards();
        match self.seed {
            Some(seed) => Deck::new(cards, seed),
            None => Deck::unseeded(cards),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_deck_matches_walkthrough() {
        let cards = DeckOptions::default().cards();
        assert_eq!(cards.len(), 30);
        assert_eq!((cards[0].color(), cards[0].value()), (Color::Green, 10));
        assert_eq!((cards[9].color(), cards[9].value()), (Color::Green, 1));
        assert_eq!((cards[10].color(), cards[10].value()), (Color::Yellow, 10));
        assert_eq!((cards[29].color(), cards[29].value()), (Color::Red, 1));
    }

    #[test]
    fn ascending_order() {
        let cards = DeckOptions::default()
            .with_colors(&[Color::Red])
            .with_max_value(3)
            .with_descending(false)
            .cards();
        let values: Vec<u32> = cards.iter().map(Card::value).collect();
        assert_eq!(values, [1, 2, 3]);
    }

    #[test]
    fn empty_options_fail_to_build() {
        assert_eq!(
            DeckOptions::default().with_colors(&[]).build().unwrap_err(),
            DeckError::EmptyCards
        );
        assert_eq!(
            DeckOptions::default().with_max_value(0).build().unwrap_err(),
            DeckError::EmptyCards
        );
    }

    #[test]
    fn seed_is_applied() {
        let mut a = DeckOptions::default().with_seed(5).build().unwrap();
        let mut b = DeckOptions::default().with_seed(5).build().unwrap();
        a.shuffle();
        b.shuffle();
        let faces = |deck: &Deck| -> Vec<(Color, u32)> {
            deck.cards().iter().map(|c| (c.color(), c.value())).collect()
        };
        assert_eq!(faces(&a), faces(&b));
    }

    #[test]
    fn unseeded_decks_shuffle_independently() {
        let mut a = DeckOptions::default().build().unwrap();
        let mut b = DeckOptions::default().build().unwrap();
        assert_eq!(DeckOptions::default().seed, None);

        a.shuffle();
        b.shuffle();
        let faces = |deck: &Deck| -> Vec<(Color, u32)> {
            deck.cards().iter().map(|c| (c.color(), c.value())).collect()
        };
        assert_ne!(faces(&a), faces(&b));
    }
}
