//! Hand scoring for the show
//!
//! A 4-card hand plus the starter is scored as the sum of five independent
//! components: fifteens, runs, pairs, flush and nobs. Fifteens and runs are
//! found by walking the 32 subsets of the 5 cards as bit masks, so scoring
//! never allocates.

use crate::card::{Card, Rank};
use crate::error::ScoringError;
use serde::Serialize;

/// Number of cards in a scoring hand (the starter is extra)
pub const HAND_SIZE: usize = 4;

/// Per-component points of a scored hand
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Score {
    pub fifteens: u32,
    pub runs: u32,
    pub pairs: u32,
    pub flush: u32,
    pub nobs: u32,
}

impl Score {
    pub fn total(&self) -> u32 {
        self.fifteens + self.runs + self.pairs + self.flush + self.nobs
    }
}

/// Hand scorer trait
///
/// Implementations must be pure: the enumeration engine calls them from many
/// worker threads at once.
pub trait HandScorer {
    /// Score `hand` (exactly 4 cards) against `starter`, by component
    fn breakdown(&self, hand: &[Card], starter: Card) -> Result<Score, ScoringError>;

    /// Total points of `hand` against `starter`
    fn score(&self, hand: &[Card], starter: Card) -> Result<u32, ScoringError> {
        self.breakdown(hand, starter).map(|score| score.total())
    }
}

/// Scorer for the standard rules of the show
#[derive(Debug, Clone, Copy)]
pub struct ShowScorer;

impl ShowScorer {
    pub fn new() -> Self {
        ShowScorer
    }
}

impl Default for ShowScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl HandScorer for ShowScorer {
    fn breakdown(&self, hand: &[Card], starter: Card) -> Result<Score, ScoringError> {
        let hand = validate(hand, starter)?;
        let cards = [hand[0], hand[1], hand[2], hand[3], starter];
        let ranks = cards.map(|card| card.rank().value());
        let points = cards.map(|card| card.rank().points());

        Ok(Score {
            fifteens: rules::fifteens(points),
            runs: rules::runs(ranks),
            pairs: rules::pairs(ranks),
            flush: rules::flush(&hand, starter),
            nobs: rules::nobs(&hand, starter),
        })
    }
}

/// Score a 4-card hand against a starter with the standard rules
pub fn score(hand: &[Card], starter: Card) -> Result<u32, ScoringError> {
    ShowScorer.score(hand, starter)
}

/// Check the hand size and that all five cards are distinct
fn validate(hand: &[Card], starter: Card) -> Result<[Card; HAND_SIZE], ScoringError> {
    let cards: [Card; HAND_SIZE] = hand.try_into().map_err(|_| ScoringError::HandSize {
        expected: HAND_SIZE,
        got: hand.len(),
    })?;
    let mut seen = starter.mask();
    for card in cards {
        if card == starter {
            return Err(ScoringError::StarterInHand(starter));
        }
        if seen & card.mask() != 0 {
            return Err(ScoringError::DuplicateCard(card));
        }
        seen |= card.mask();
    }
    Ok(cards)
}

/// Benchmark helper for CLI
///
/// Scores `sample_size` pseudo-random hands and returns (scores_per_sec, duration_ms)
pub fn benchmark_throughput(sample_size: usize) -> Result<(f64, u64), ScoringError> {
    use std::time::Instant;

    let scorer = ShowScorer::new();

    let mut seed: u64 = 12345;
    let lcg_next = |s: &mut u64| {
        *s = s.wrapping_mul(1103515245).wrapping_add(12345) & 0x7fffffff;
        (*s % 52) as u8
    };

    let mut samples = Vec::with_capacity(sample_size);
    while samples.len() < sample_size {
        let mut picked = 0u64;
        let mut cards = Vec::with_capacity(5);
        while cards.len() < 5 {
            let index = lcg_next(&mut seed);
            if picked & (1 << index) == 0 {
                picked |= 1 << index;
                cards.extend(Card::from_index(index));
            }
        }
        samples.push(([cards[0], cards[1], cards[2], cards[3]], cards[4]));
    }

    let start = Instant::now();
    let mut total = 0u64;
    for (hand, starter) in &samples {
        total += u64::from(scorer.score(hand, *starter)?);
    }
    let duration = start.elapsed();
    std::hint::black_box(total);

    let scores_per_sec = sample_size as f64 / duration.as_secs_f64();
    Ok((scores_per_sec, duration.as_millis() as u64))
}

mod rules {
    //! Individual scoring components over the five cards (hand + starter)
    //!
    //! Subsets are bit masks over positions 0-4.

    use super::{Card, Rank, HAND_SIZE};

    fn subsets(size: u32) -> impl Iterator<Item = u32> {
        (0u32..32).filter(move |mask| mask.count_ones() == size)
    }

    fn members(mask: u32) -> impl Iterator<Item = usize> {
        (0..5).filter(move |&i| mask & (1u32 << i) != 0)
    }

    /// 2 points for every subset of two or more cards whose points sum to 15
    pub(crate) fn fifteens(points: [u8; 5]) -> u32 {
        let hits = (2..=5)
            .flat_map(subsets)
            .filter(|&mask| members(mask).map(|i| points[i] as u32).sum::<u32>() == 15)
            .count();
        2 * hits as u32
    }

    /// Distinct ranks spanning exactly `len - 1`
    pub(crate) fn is_run(ranks: &[u8; 5], mask: u32) -> bool {
        let mut seen = 0u16;
        let mut lo = u8::MAX;
        let mut hi = 0u8;
        for i in members(mask) {
            let bit = 1u16 << ranks[i];
            if seen & bit != 0 {
                return false;
            }
            seen |= bit;
            lo = lo.min(ranks[i]);
            hi = hi.max(ranks[i]);
        }
        u32::from(hi - lo) + 1 == mask.count_ones()
    }

    /// Longest runs only: a 5-run scores 5; otherwise every 4-run scores 4;
    /// 3-runs are only counted when no 4-run exists.
    pub(crate) fn runs(ranks: [u8; 5]) -> u32 {
        if is_run(&ranks, 0b11111) {
            return 5;
        }
        for len in [4, 3] {
            let found = subsets(len).filter(|&mask| is_run(&ranks, mask)).count() as u32;
            if found > 0 {
                return found * len;
            }
        }
        0
    }

    /// 2 points per pair of equal ranks
    pub(crate) fn pairs(ranks: [u8; 5]) -> u32 {
        let mut points = 0;
        for i in 0..5 {
            for j in (i + 1)..5 {
                if ranks[i] == ranks[j] {
                    points += 2;
                }
            }
        }
        points
    }

    /// 4 for a one-suit hand, 5 if the starter matches too
    pub(crate) fn flush(hand: &[Card; HAND_SIZE], starter: Card) -> u32 {
        let suit = hand[0].suit();
        if hand.iter().any(|card| card.suit() != suit) {
            return 0;
        }
        if starter.suit() == suit {
            5
        } else {
            4
        }
    }

    /// 1 for holding the Jack of the starter's suit
    pub(crate) fn nobs(hand: &[Card; HAND_SIZE], starter: Card) -> u32 {
        let nobs = hand
            .iter()
            .any(|card| card.rank() == Rank::Jack && card.suit() == starter.suit());
        u32::from(nobs)
    }
}
