//! Game result types.

use core::cmp::Ordering;
use core::fmt;

use crate::hand::Hand;

/// Outcome of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Winner {
    /// Player 1 scored strictly more.
    Player1,
    /// Player 2 scored strictly more.
    Player2,
    /// Both players scored the same.
    Tie,
}

impl Winner {
    /// Determines the winner from the two hand scores.
    #[must_use]
    pub fn from_scores(player1: u64, player2: u64) -> Self {
        match player1.cmp(&player2) {
            Ordering::Greater => Self::Player1,
            Ordering::Less => Self::Player2,
            Ordering::Equal => Self::Tie,
        }
    }

    /// Returns the label of the outcome.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Player1 => "Player 1",
            Self::Player2 => "Player 2",
            Self::Tie => "Tie",
        }
    }
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of a two-player game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameResult {
    /// Player 1's hand.
    pub player1: Hand,
    /// Player 2's hand.
    pub player2: Hand,
    /// The winner.
    pub winner: Winner,
}

impl GameResult {
    /// Builds the result from both hands, scoring them to pick the winner.
    #[must_use]
    pub fn new(player1: Hand, player2: Hand) -> Self {
        let winner = Winner::from_scores(player1.score(), player2.score());
        Self {
            player1,
            player2,
            winner,
        }
    }

    /// Returns player 1's score.
    #[must_use]
    pub fn player1_score(&self) -> u64 {
        self.player1.score()
    }

    /// Returns player 2's score.
    #[must_use]
    pub fn player2_score(&self) -> u64 {
        self.player2.score()
    }
}
