use crate::error::DealError;
use crate::hand::Hand;
use crate::result::GameResult;

use super::Deck;

/// Rounds dealt in a game; each round deals one card to each player.
const ROUNDS: usize = 3;

/// Number of cards a game removes from the deck.
pub const GAME_CARDS: usize = ROUNDS * 2;

impl Deck {
    /// Plays a two-player game.
    ///
    /// Each of three rounds deals the top card to player 1 and then the next
    /// card to player 2. The player whose hand scores higher wins; equal
    /// scores tie.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::NotEnoughCards`] if fewer than [`GAME_CARDS`]
    /// cards remain. No card is dealt in that case.
    ///
    /// # Example
    ///
    /// ```
    /// use colordeck::{DeckOptions, Winner};
    ///
    /// let mut deck = DeckOptions::default().with_seed(9).build().unwrap();
    /// deck.shuffle();
    /// let result = deck.play_game().unwrap();
    /// assert_eq!(result.player1.len(), 3);
    /// assert_eq!(result.winner, Winner::from_scores(result.player1_score(), result.player2_score()));
    /// ```
    pub fn play_game(&mut self) -> Result<GameResult, DealError> {
        if self.cards.len() < GAME_CARDS {
            return Err(DealError::NotEnoughCards);
        }

        let mut player1 = Hand::new();
        let mut player2 = Hand::new();
        for _ in 0..ROUNDS {
            player1.add_card(self.deal_one()?);
            player2.add_card(self.deal_one()?);
        }

        let result = GameResult::new(player1, player2);
        tracing::debug!(
            player1 = result.player1_score(),
            player2 = result.player2_score(),
            winner = result.winner.label(),
            "game played"
        );

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;
    use crate::card::{Card, Color};
    use crate::result::Winner;

    fn deck_of(faces: &[(Color, u32)]) -> Deck {
        let cards = faces
            .iter()
            .map(|&(color, value)| Card::new(color, value))
            .collect::<Result<Vec<_>, _>>()
            .unwrap();
        Deck::new(cards, 0).unwrap()
    }

    #[test]
    fn deals_alternately() {
        let mut deck = deck_of(&[
            (Color::Green, 1),
            (Color::Green, 2),
            (Color::Green, 3),
            (Color::Green, 4),
            (Color::Green, 5),
            (Color::Green, 6),
            (Color::Green, 7),
        ]);
        let order = deck.cards().to_vec();

        let result = deck.play_game().unwrap();
        assert_eq!(result.player1.cards(), &[order[0], order[2], order[4]]);
        assert_eq!(result.player2.cards(), &[order[1], order[3], order[5]]);
        assert_eq!(deck.cards(), &[order[6]]);
        assert_eq!(result.player1_score(), 9);
        assert_eq!(result.player2_score(), 12);
        assert_eq!(result.winner, Winner::Player2);
    }

    #[test]
    fn player1_wins_on_higher_score() {
        let mut deck = deck_of(&[
            (Color::Red, 4),
            (Color::Green, 4),
            (Color::Red, 1),
            (Color::Yellow, 1),
            (Color::Green, 1),
            (Color::Green, 1),
        ]);

        let result = deck.play_game().unwrap();
        assert_eq!(result.player1_score(), 16);
        assert_eq!(result.player2_score(), 7);
        assert_eq!(result.winner, Winner::Player1);
        assert!(deck.is_empty());
    }

    #[test]
    fn equal_scores_tie() {
        let mut deck = deck_of(&[
            (Color::Red, 2),
            (Color::Yellow, 3),
            (Color::Green, 1),
            (Color::Green, 1),
            (Color::Yellow, 1),
            (Color::Green, 2),
        ]);

        let result = deck.play_game().unwrap();
        assert_eq!(result.player1_score(), result.player2_score());
        assert_eq!(result.winner, Winner::Tie);
    }

    #[test]
    fn short_deck_fails_without_dealing() {
        let mut deck = deck_of(&[
            (Color::Red, 1),
            (Color::Red, 2),
            (Color::Red, 3),
            (Color::Red, 4),
            (Color::Red, 5),
        ]);

        assert_eq!(deck.play_game().unwrap_err(), DealError::NotEnoughCards);
        assert_eq!(deck.len(), 5);
    }
}
