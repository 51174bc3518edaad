//! Error types for the cribbage engine
//!
//! Each concern gets its own enum so callers can tell bad input (a card token
//! that does not parse) apart from bad combinatorics (a hand of the wrong size,
//! a distribution too small to summarise).

use crate::card::Card;
use std::fmt;

/// Precondition violations raised by the scorer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoringError {
    /// The hand did not contain exactly `expected` cards
    HandSize { expected: usize, got: usize },
    /// The starter card is also one of the hand cards
    StarterInHand(Card),
    /// The same card appears twice in the hand
    DuplicateCard(Card),
}

impl fmt::Display for ScoringError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ScoringError::HandSize { expected, got } => {
                write!(f, "hand must hold {} cards, got {}", expected, got)
            }
            ScoringError::StarterInHand(card) => {
                write!(f, "starter {} is already in the hand", card)
            }
            ScoringError::DuplicateCard(card) => write!(f, "card {} appears more than once", card),
        }
    }
}

impl std::error::Error for ScoringError {}

/// Raised when a score distribution cannot be summarised
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsError {
    /// The distribution is empty
    NoSamples,
    /// Sample standard deviation needs at least two points
    SingleSample,
}

impl fmt::Display for StatsError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            StatsError::NoSamples => write!(f, "no samples to summarise"),
            StatsError::SingleSample => {
                write!(f, "sample standard deviation needs at least two samples")
            }
        }
    }
}

impl std::error::Error for StatsError {}

/// Card token lookup failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseCardError {
    Empty,
    Rank(String),
    Suit(String),
}

impl fmt::Display for ParseCardError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParseCardError::Empty => write!(f, "empty card token"),
            ParseCardError::Rank(token) => write!(f, "unknown rank '{}'", token),
            ParseCardError::Suit(token) => write!(f, "unknown suit '{}'", token),
        }
    }
}

impl std::error::Error for ParseCardError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};

    #[test]
    fn test_messages_name_the_card() {
        let card = Card::new(Rank::Jack, Suit::Spade);
        assert_eq!(
            ScoringError::StarterInHand(card).to_string(),
            "starter JS is already in the hand"
        );
        assert_eq!(
            ScoringError::HandSize { expected: 4, got: 3 }.to_string(),
            "hand must hold 4 cards, got 3"
        );
    }
}
