use alloc::vec::Vec;

use crate::card::{Card, Color};
use crate::error::SortError;
use crate::parse;

use super::Deck;

impl Deck {
    /// Returns the cards of the listed colors, grouped by color in the given
    /// order and sorted by ascending value within each group.
    ///
    /// Cards whose color is not listed are left out. Cards of equal value keep
    /// their deck order. The deck itself is not reordered.
    ///
    /// # Errors
    ///
    /// Returns [`SortError::EmptyColors`] if `colors` is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use colordeck::{Color, DeckOptions};
    ///
    /// let deck = DeckOptions::default().build().unwrap();
    /// let sorted = deck.sort_cards(&[Color::Yellow, Color::Green]).unwrap();
    /// assert_eq!(sorted.len(), 20);
    /// assert_eq!(sorted[0].color(), Color::Yellow);
    /// assert_eq!(sorted[0].value(), 1);
    /// ```
    pub fn sort_cards(&self, colors: &[Color]) -> Result<Vec<Card>, SortError> {
        if colors.is_empty() {
            return Err(SortError::EmptyColors);
        }

        let mut sorted: Vec<Card> = Vec::with_capacity(self.cards.len());
        for &color in colors {
            let start = sorted.len();
            sorted.extend(self.cards.iter().filter(|card| card.color() == color).copied());
            sorted[start..].sort_by_key(Card::value);
        }

        Ok(sorted)
    }

    /// Sorts by a textual color list such as `[yellow, green]`.
    ///
    /// # Errors
    ///
    /// Returns a [`SortError`] if the input is not a non-empty list of colors.
    pub fn sort_cards_str(&self, colors: &str) -> Result<Vec<Card>, SortError> {
        self.sort_cards(&parse::parse_color_list(colors)?)
    }
}
