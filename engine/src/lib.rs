//! cribbage Engine - Card model, hand scoring and score statistics
//!
//! This crate contains the pure core of the discard solver: the card and deck
//! types, the scorer for a 4-card hand plus starter, and the reductions that
//! turn score distributions into summary statistics.
//!
//! The engine has no I/O and no logging; everything here is safe to call from
//! many threads at once.

pub mod card;
pub mod error;
pub mod score;
pub mod stats;

pub use card::{all_cards, Card, Rank, Suit};
pub use error::{ParseCardError, ScoringError, StatsError};
pub use score::{score, HandScorer, Score, ShowScorer, HAND_SIZE};
pub use stats::{ScoreDistribution, ScoringStats};
