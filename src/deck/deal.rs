use alloc::vec::Vec;

use crate::card::Card;
use crate::error::DealError;
use crate::parse;

use super::Deck;

impl Deck {
    /// Deals `count` cards from the top of the deck, removing them.
    ///
    /// The cards are returned in deck order. Dealing every remaining card
    /// empties the deck.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::NonPositiveCount`] if `count` is zero, or
    /// [`DealError::NotEnoughCards`] if fewer than `count` cards remain. The
    /// deck is unchanged on error.
    ///
    /// # Example
    ///
    /// ```
    /// use colordeck::DeckOptions;
    ///
    /// let mut deck = DeckOptions::default().build().unwrap();
    /// let top = deck.cards()[..5].to_vec();
    /// assert_eq!(deck.deal(5).unwrap(), top);
    /// assert_eq!(deck.len(), 25);
    /// ```
    pub fn deal(&mut self, count: usize) -> Result<Vec<Card>, DealError> {
        if count == 0 {
            return Err(DealError::NonPositiveCount);
        }
        if count > self.cards.len() {
            return Err(DealError::NotEnoughCards);
        }

        let dealt: Vec<Card> = self.cards.drain(..count).collect();
        tracing::debug!(dealt = count, remaining = self.cards.len(), "cards dealt");

        Ok(dealt)
    }

    /// Deals the top card of the deck.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::NotEnoughCards`] if the deck is empty.
    pub fn deal_one(&mut self) -> Result<Card, DealError> {
        if self.cards.is_empty() {
            return Err(DealError::NotEnoughCards);
        }

        let card = self.cards.remove(0);
        tracing::debug!(dealt = 1, remaining = self.cards.len(), "cards dealt");

        Ok(card)
    }

    /// Deals a textual card count such as `"3"`.
    ///
    /// # Errors
    ///
    /// Returns a [`DealError`] if the count is blank, not an integer, not
    /// positive, or larger than the deck.
    pub fn deal_str(&mut self, count: &str) -> Result<Vec<Card>, DealError> {
        self.deal(parse::parse_deal_count(count)?)
    }
}
