//! Deck of cards and its operations.

use core::fmt;
#[cfg(not(feature = "std"))]
use core::sync::atomic::{AtomicUsize, Ordering};

use alloc::vec::Vec;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::error::DeckError;
use crate::parse;

mod deal;
mod game;
mod sort;

pub use game::GAME_CARDS;

/// Seed source for unseeded decks when no OS entropy is available.
#[cfg(not(feature = "std"))]
static NEXT_UNSEEDED: AtomicUsize = AtomicUsize::new(0);

/// An ordered deck of cards.
///
/// The front of the sequence is the top of the deck. Each deck owns its own
/// seeded random number generator, so two decks built with the same cards and
/// seed shuffle identically while decks never share random state.
///
/// A deck is not synchronized; mutating operations take `&mut self`.
///
/// Cloning copies the generator state as well, so a clone replays the
/// original's future shuffles.
#[derive(Clone)]
pub struct Deck {
    /// Cards in the deck, top first.
    cards: Vec<Card>,
    /// Random number generator used for shuffling.
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates a deck that takes ownership of `cards`.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::EmptyCards`] if `cards` is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use colordeck::{Card, Color, Deck};
    ///
    /// let cards = vec![Card::new(Color::Red, 1).unwrap(), Card::new(Color::Green, 2).unwrap()];
    /// let deck = Deck::new(cards, 42).unwrap();
    /// assert_eq!(deck.len(), 2);
    /// ```
    pub fn new(cards: Vec<Card>, seed: u64) -> Result<Self, DeckError> {
        if cards.is_empty() {
            return Err(DeckError::EmptyCards);
        }

        tracing::trace!(cards = cards.len(), seed, "deck created");

        Ok(Self {
            cards,
            rng: ChaCha8Rng::seed_from_u64(seed),
        })
    }

    /// Creates a deck that takes ownership of `cards` without a caller seed.
    ///
    /// With the `std` feature the generator is seeded from OS entropy, so
    /// every deck shuffles independently. Without `std` each deck draws a
    /// distinct seed from a process-wide counter: decks differ from each other
    /// but the sequence repeats between runs.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::EmptyCards`] if `cards` is empty.
    ///
    /// # Panics
    ///
    /// Panics if the OS entropy source fails.
    pub fn unseeded(cards: Vec<Card>) -> Result<Self, DeckError> {
        if cards.is_empty() {
            return Err(DeckError::EmptyCards);
        }

        #[cfg(feature = "std")]
        let rng = ChaCha8Rng::from_os_rng();
        #[cfg(not(feature = "std"))]
        let rng = ChaCha8Rng::seed_from_u64(NEXT_UNSEEDED.fetch_add(1, Ordering::Relaxed) as u64);

        tracing::trace!(cards = cards.len(), "unseeded deck created");

        Ok(Self { cards, rng })
    }

    /// Creates a deck holding a copy of `cards`.
    ///
    /// Later changes to the caller's slice do not affect the deck.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::EmptyCards`] if `cards` is empty.
    pub fn from_slice(cards: &[Card], seed: u64) -> Result<Self, DeckError> {
        Self::new(cards.to_vec(), seed)
    }

    /// Creates a deck from a textual card list such as `[red:1, green:2]`.
    ///
    /// # Errors
    ///
    /// Returns a [`DeckError`] describing why the input is not a non-empty
    /// list of cards.
    ///
    /// # Example
    ///
    /// ```
    /// use colordeck::{Deck, DeckError};
    ///
    /// let deck = Deck::parse("[red:1, green:2]", 7).unwrap();
    /// assert_eq!(deck.len(), 2);
    /// assert_eq!(Deck::parse("[]", 7).unwrap_err(), DeckError::EmptyCards);
    /// ```
    pub fn parse(input: &str, seed: u64) -> Result<Self, DeckError> {
        Self::new(parse::parse_card_list(input)?, seed)
    }

    /// Returns the cards in the deck, top first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether every card has been dealt.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Shuffles the deck in place.
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
        tracing::debug!(cards = self.cards.len(), "deck shuffled");
    }
}

impl fmt::Debug for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deck")
            .field("cards", &self.cards)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;
    use crate::card::Color;

    fn cards() -> Vec<Card> {
        Color::ALL
            .iter()
            .flat_map(|&color| (1..=10).rev().map(move |value| Card::new(color, value)))
            .collect::<Result<_, _>>()
            .unwrap()
    }

    #[test]
    fn new_rejects_empty() {
        assert_eq!(Deck::new(Vec::new(), 1).unwrap_err(), DeckError::EmptyCards);
        assert_eq!(Deck::from_slice(&[], 1).unwrap_err(), DeckError::EmptyCards);
    }

    #[test]
    fn from_slice_copies_input() {
        let mut source = cards();
        let deck = Deck::from_slice(&source, 1).unwrap();
        assert_eq!(deck.cards(), source.as_slice());

        source.remove(0);
        assert_ne!(deck.cards(), source.as_slice());
        assert_eq!(source.len(), deck.len() - 1);
    }

    #[test]
    fn shuffle_keeps_cards() {
        let original = cards();
        let mut deck = Deck::new(original.clone(), 3).unwrap();
        deck.shuffle();

        assert_eq!(deck.len(), original.len());
        for card in &original {
            assert!(deck.cards().contains(card));
        }
    }

    #[test]
    fn same_seed_shuffles_identically() {
        let original = cards();
        let mut a = Deck::new(original.clone(), 11).unwrap();
        let mut b = Deck::new(original, 11).unwrap();
        a.shuffle();
        b.shuffle();
        assert_eq!(a.cards(), b.cards());
    }

    #[test]
    fn unseeded_rejects_empty() {
        assert_eq!(Deck::unseeded(Vec::new()).unwrap_err(), DeckError::EmptyCards);
    }

    #[test]
    fn unseeded_decks_are_independent() {
        let original = cards();
        let mut a = Deck::unseeded(original.clone()).unwrap();
        let mut b = Deck::unseeded(original).unwrap();
        a.shuffle();
        b.shuffle();
        assert_ne!(a.cards(), b.cards());
    }

    #[test]
    fn clone_replays_shuffles() {
        let mut deck = Deck::new(cards(), 21).unwrap();
        let mut copy = deck.clone();
        deck.shuffle();
        copy.shuffle();
        assert_eq!(deck.cards(), copy.cards());
    }

    #[test]
    fn single_card_deck_shuffles() {
        let card = Card::new(Color::Red, 1).unwrap();
        let mut deck = Deck::new(vec![card], 0).unwrap();
        deck.shuffle();
        assert_eq!(deck.cards(), &[card]);
    }
}
