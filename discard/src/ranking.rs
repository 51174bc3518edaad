//! Ranking discard evaluations by a scalar key
//!
//! Selections are "top N plus ties": whatever scores at least as well as the
//! N-th best entry is returned, so a cutoff never splits a tie.

use crate::evaluate::DiscardEvaluation;

/// Named ranking keys. Higher is always better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RankingKey {
    HandMean,
    HandMedian,
    HandMin,
    /// Hand plus crib, for the dealer
    OwnCrib,
    /// Hand minus crib, for the pone
    OpponentCrib,
    LeastCrib,
    MostCrib,
}

impl RankingKey {
    pub const ALL: [RankingKey; 7] = [
        RankingKey::HandMean,
        RankingKey::HandMedian,
        RankingKey::HandMin,
        RankingKey::OwnCrib,
        RankingKey::OpponentCrib,
        RankingKey::LeastCrib,
        RankingKey::MostCrib,
    ];

    pub fn key(self, evaluation: &DiscardEvaluation) -> f64 {
        let hand = &evaluation.hand_stats;
        let crib = &evaluation.crib_stats;
        match self {
            RankingKey::HandMean => hand.mean,
            RankingKey::HandMedian => hand.median,
            RankingKey::HandMin => hand.min as f64,
            RankingKey::OwnCrib => hand.mean + crib.mean,
            RankingKey::OpponentCrib => hand.mean - crib.mean,
            RankingKey::LeastCrib => -crib.mean,
            RankingKey::MostCrib => crib.mean,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RankingKey::HandMean => "highest hand EU (mean)",
            RankingKey::HandMedian => "highest hand EU (median)",
            RankingKey::HandMin => "highest minimum hand score",
            RankingKey::OwnCrib => "best overall EU (hand + crib)",
            RankingKey::OpponentCrib => "best overall EU (hand - crib)",
            RankingKey::LeastCrib => "least crib EU",
            RankingKey::MostCrib => "most crib EU",
        }
    }
}

/// Evaluations ordered by descending key; equal keys keep their input order
pub fn sort_by_key<F>(evaluations: &[DiscardEvaluation], key: F) -> Vec<&DiscardEvaluation>
where
    F: Fn(&DiscardEvaluation) -> f64,
{
    let mut sorted: Vec<&DiscardEvaluation> = evaluations.iter().collect();
    sorted.sort_by(|a, b| key(*b).total_cmp(&key(*a)));
    sorted
}

/// The best `n` evaluations by `key`, plus anything tied with the n-th
///
/// `n` is clamped to the number of evaluations; `n == 0` selects nothing.
pub fn top_with_ties<F>(
    evaluations: &[DiscardEvaluation],
    key: F,
    n: usize,
) -> Vec<&DiscardEvaluation>
where
    F: Fn(&DiscardEvaluation) -> f64,
{
    let n = n.min(evaluations.len());
    if n == 0 {
        return Vec::new();
    }
    let sorted = sort_by_key(evaluations, &key);
    let threshold = key(sorted[n - 1]);
    sorted.into_iter().take_while(|e| key(*e) >= threshold).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::partition::DiscardOption;
    use cribbage_engine::{ScoreDistribution, ScoringStats};

    fn stats(scores: &[u32]) -> ScoringStats {
        ScoringStats::from_distribution(&ScoreDistribution::from(scores.to_vec())).unwrap()
    }

    /// Evaluation tagged by its kept card so tests can tell entries apart
    fn evaluation(tag: &str, hand: &[u32], crib: &[u32]) -> DiscardEvaluation {
        DiscardEvaluation {
            discard: DiscardOption {
                kept: vec![tag.parse().unwrap()],
                discarded: vec![],
            },
            hand_stats: stats(hand),
            crib_stats: stats(crib),
        }
    }

    fn tags(selected: &[&DiscardEvaluation]) -> Vec<String> {
        selected.iter().map(|e| e.kept()[0].to_string()).collect()
    }

    fn sample() -> Vec<DiscardEvaluation> {
        vec![
            evaluation("AC", &[2, 4], &[4, 6]),  // hand 3, crib 5
            evaluation("2C", &[6, 8], &[0, 2]),  // hand 7, crib 1
            evaluation("3C", &[4, 4], &[8, 10]), // hand 4, crib 9
            evaluation("4C", &[6, 8], &[2, 4]),  // hand 7, crib 3
            evaluation("5C", &[0, 12], &[2, 2]), // hand 6, crib 2
        ]
    }

    #[test]
    fn test_sort_descending_and_stable() {
        let evaluations = sample();
        let sorted = sort_by_key(&evaluations, |e| RankingKey::HandMean.key(e));
        assert_eq!(tags(&sorted), ["2C", "4C", "5C", "3C", "AC"]);
    }

    #[test]
    fn test_top_one_returns_all_maxima() {
        let evaluations = sample();
        let top = top_with_ties(&evaluations, |e| RankingKey::HandMean.key(e), 1);
        assert_eq!(tags(&top), ["2C", "4C"]);
    }

    #[test]
    fn test_top_one_unique_maximum() {
        let evaluations = sample();
        let top = top_with_ties(&evaluations, |e| RankingKey::OwnCrib.key(e), 1);
        // 4 + 9 = 13 beats 3 + 5, 7 + 1, 7 + 3, 6 + 2
        assert_eq!(tags(&top), ["3C"]);
    }

    #[test]
    fn test_ties_extend_past_n() {
        let evaluations = sample();
        // hand minimum: AC 2, 2C 6, 3C 4, 4C 6, 5C 0
        let top = top_with_ties(&evaluations, |e| RankingKey::HandMin.key(e), 2);
        assert_eq!(tags(&top), ["2C", "4C"]);
        let top = top_with_ties(&evaluations, |e| RankingKey::HandMin.key(e), 3);
        assert_eq!(tags(&top), ["2C", "4C", "3C"]);
    }

    #[test]
    fn test_n_is_clamped() {
        let evaluations = sample();
        assert_eq!(top_with_ties(&evaluations, |e| RankingKey::MostCrib.key(e), 50).len(), 5);
        assert!(top_with_ties(&evaluations, |e| RankingKey::MostCrib.key(e), 0).is_empty());
        assert!(top_with_ties(&[], |e| RankingKey::MostCrib.key(e), 3).is_empty());
    }

    #[test]
    fn test_crib_keys() {
        let evaluations = sample();
        let least = top_with_ties(&evaluations, |e| RankingKey::LeastCrib.key(e), 1);
        assert_eq!(tags(&least), ["2C"]);
        let most = top_with_ties(&evaluations, |e| RankingKey::MostCrib.key(e), 1);
        assert_eq!(tags(&most), ["3C"]);
        let pone = top_with_ties(&evaluations, |e| RankingKey::OpponentCrib.key(e), 1);
        // 7 - 1 = 6
        assert_eq!(tags(&pone), ["2C"]);
    }

    #[test]
    fn test_median_key() {
        let evaluations = sample();
        let sorted = sort_by_key(&evaluations, |e| RankingKey::HandMedian.key(e));
        assert_eq!(RankingKey::HandMedian.key(sorted[0]), 7.0);
        assert_eq!(RankingKey::ALL.len(), 7);
    }
}
