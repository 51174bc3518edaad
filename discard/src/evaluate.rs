//! Discard evaluation: exhaustive hand and crib score distributions
//!
//! Each discard option is evaluated independently against the cards the
//! player cannot see. Options are fanned out over a Rayon pool; the only data
//! they share (the initial hand and the deck) is read-only, so no locking is
//! needed. Results come back in no particular order and ranking sorts them
//! explicitly.

use crate::config::EvaluationConfig;
use crate::error::EvaluationError;
use crate::partition::{choose, partitions, DiscardOption};
use cribbage_engine::card::{all_cards, format_cards, mask_of};
use cribbage_engine::{
    Card, HandScorer, ScoreDistribution, ScoringStats, ShowScorer, HAND_SIZE,
};
use itertools::Itertools;
use rayon::prelude::*;
use serde::Serialize;
use std::time::Instant;

/// Summary of one discard option
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiscardEvaluation {
    pub discard: DiscardOption,
    /// Kept hand against every unseen starter
    pub hand_stats: ScoringStats,
    /// Crib against every unseen completion and starter
    pub crib_stats: ScoringStats,
}

impl DiscardEvaluation {
    pub fn kept(&self) -> &[Card] {
        &self.discard.kept
    }

    pub fn discarded(&self) -> &[Card] {
        &self.discard.discarded
    }
}

/// Evaluate every `discard_size`-card discard of `hand` with the standard scorer
pub fn evaluate(
    hand: &[Card],
    discard_size: usize,
) -> Result<Vec<DiscardEvaluation>, EvaluationError> {
    let config = EvaluationConfig::default().with_discard_size(discard_size);
    evaluate_with(&ShowScorer::new(), hand, &config)
}

/// Evaluate every discard option of `hand` under `config`
///
/// The first failing option aborts the query.
pub fn evaluate_with<S>(
    scorer: &S,
    hand: &[Card],
    config: &EvaluationConfig,
) -> Result<Vec<DiscardEvaluation>, EvaluationError>
where
    S: HandScorer + Sync,
{
    validate(hand, config.discard_size)?;

    let start = Instant::now();
    let unseen = unseen_cards(hand);
    let options = partitions(hand, config.discard_size);
    log::info!(
        "{:<32}{:<32}",
        "evaluating discards",
        format!("{} ({} options)", format_cards(hand, false), options.len())
    );

    let run = || {
        options
            .into_par_iter()
            .map(|option| evaluate_option(scorer, option, &unseen))
            .collect::<Result<Vec<_>, _>>()
    };
    let evaluations = match config.threads {
        Some(threads) => rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()?
            .install(run),
        None => run(),
    }?;

    log::info!(
        "{:<32}{:<32}",
        "evaluated discards",
        format!("{} options in {:.2?}", evaluations.len(), start.elapsed())
    );
    Ok(evaluations)
}

fn validate(hand: &[Card], discard_size: usize) -> Result<(), EvaluationError> {
    let mut seen = 0u64;
    for &card in hand {
        if seen & card.mask() != 0 {
            return Err(EvaluationError::DuplicateCard(card));
        }
        seen |= card.mask();
    }
    if discard_size == 0 || discard_size > HAND_SIZE || discard_size >= hand.len() {
        return Err(EvaluationError::DiscardSize {
            discard: discard_size,
            hand: hand.len(),
        });
    }
    let kept = hand.len() - discard_size;
    if kept != HAND_SIZE {
        return Err(EvaluationError::KeptHandSize {
            expected: HAND_SIZE,
            got: kept,
        });
    }
    Ok(())
}

/// Deck order, minus the initial hand
fn unseen_cards(hand: &[Card]) -> Vec<Card> {
    let held = mask_of(hand);
    all_cards()
        .iter()
        .copied()
        .filter(|card| held & card.mask() == 0)
        .collect()
}

fn evaluate_option<S: HandScorer>(
    scorer: &S,
    option: DiscardOption,
    unseen: &[Card],
) -> Result<DiscardEvaluation, EvaluationError> {
    let hand = hand_distribution(scorer, &option.kept, unseen)?;
    let crib = crib_distribution(scorer, &option.discarded, unseen)?;
    let evaluation = DiscardEvaluation {
        hand_stats: ScoringStats::from_distribution(&hand)?,
        crib_stats: ScoringStats::from_distribution(&crib)?,
        discard: option,
    };
    log::debug!(
        "keep {{{}}} discard {{{}}}: hand {} median {} range {}-{}, crib {} median {} range {}-{}",
        format_cards(evaluation.kept(), false),
        format_cards(evaluation.discarded(), false),
        evaluation.hand_stats,
        evaluation.hand_stats.median,
        evaluation.hand_stats.min,
        evaluation.hand_stats.max,
        evaluation.crib_stats,
        evaluation.crib_stats.median,
        evaluation.crib_stats.min,
        evaluation.crib_stats.max,
    );
    Ok(evaluation)
}

/// Score of `kept` against every unseen starter
pub(crate) fn hand_distribution<S: HandScorer>(
    scorer: &S,
    kept: &[Card],
    unseen: &[Card],
) -> Result<ScoreDistribution, EvaluationError> {
    let distribution = unseen
        .iter()
        .map(|&starter| scorer.score(kept, starter))
        .collect::<Result<ScoreDistribution, _>>()?;
    Ok(distribution)
}

/// Score of the crib over every way to complete it from the unseen cards
///
/// The crib holds the player's discards plus `4 - d` unknown cards, scored
/// with one more unknown starter. Every `(5 - d)`-combination of unseen cards
/// is drawn and each member takes a turn as the starter.
pub(crate) fn crib_distribution<S: HandScorer>(
    scorer: &S,
    discarded: &[Card],
    unseen: &[Card],
) -> Result<ScoreDistribution, EvaluationError> {
    let draw = HAND_SIZE + 1 - discarded.len();
    let mut distribution = ScoreDistribution::with_capacity(choose(unseen.len(), draw) * draw);
    let mut crib = Vec::with_capacity(HAND_SIZE);
    for drawn in unseen.iter().copied().combinations(draw) {
        for (s, &starter) in drawn.iter().enumerate() {
            crib.clear();
            crib.extend_from_slice(discarded);
            crib.extend(
                drawn
                    .iter()
                    .enumerate()
                    .filter(|&(i, _)| i != s)
                    .map(|(_, &card)| card),
            );
            distribution.push(scorer.score(&crib, starter)?);
        }
    }
    Ok(distribution)
}
