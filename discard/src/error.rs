//! Errors raised while evaluating discard options

use cribbage_engine::{Card, ScoringError, StatsError};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvaluationError {
    /// Keeping `got` cards leaves nothing the scorer can score
    KeptHandSize { expected: usize, got: usize },
    /// Discard size must be at least 1, at most a full crib, and below the hand size
    DiscardSize { discard: usize, hand: usize },
    /// The initial hand repeats a card
    DuplicateCard(Card),
    /// The worker pool could not be built
    ThreadPool(String),
    Scoring(ScoringError),
    Stats(StatsError),
}

impl fmt::Display for EvaluationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EvaluationError::KeptHandSize { expected, got } => {
                write!(f, "discarding leaves {} cards in hand, expected {}", got, expected)
            }
            EvaluationError::DiscardSize { discard, hand } => {
                write!(f, "cannot discard {} cards from a hand of {}", discard, hand)
            }
            EvaluationError::DuplicateCard(card) => {
                write!(f, "card {} appears more than once", card)
            }
            EvaluationError::ThreadPool(msg) => write!(f, "failed to build worker pool: {}", msg),
            EvaluationError::Scoring(e) => write!(f, "scoring failed: {}", e),
            EvaluationError::Stats(e) => write!(f, "statistics failed: {}", e),
        }
    }
}

impl std::error::Error for EvaluationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EvaluationError::Scoring(e) => Some(e),
            EvaluationError::Stats(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ScoringError> for EvaluationError {
    fn from(err: ScoringError) -> Self {
        EvaluationError::Scoring(err)
    }
}

impl From<StatsError> for EvaluationError {
    fn from(err: StatsError) -> Self {
        EvaluationError::Stats(err)
    }
}

impl From<rayon::ThreadPoolBuildError> for EvaluationError {
    fn from(err: rayon::ThreadPoolBuildError) -> Self {
        EvaluationError::ThreadPool(err.to_string())
    }
}
