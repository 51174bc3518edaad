//! Plain-text rendering of evaluation results

use cribbage_discard::{top_with_ties, DiscardEvaluation, RankingKey};
use cribbage_engine::card::format_cards;
use cribbage_engine::{Card, Score, ScoringStats};
use std::fmt::Write;

/// One "top N plus ties" table per ranking key
pub fn rankings(evaluations: &[DiscardEvaluation], top: usize, symbols: bool) -> String {
    let mut out = String::new();
    for key in RankingKey::ALL {
        let _ = writeln!(out, "Top {} {}", top.min(evaluations.len()), key.label());
        for (i, evaluation) in top_with_ties(evaluations, |e| key.key(e), top).iter().enumerate() {
            let _ = writeln!(
                out,
                "  {:2}: discard: {{{}}}: EU: {:.2} (keep: {{{}}})",
                i + 1,
                format_cards(evaluation.discarded(), symbols),
                key.key(evaluation),
                format_cards(evaluation.kept(), symbols),
            );
        }
    }
    out
}

/// Hand and crib score histograms of every option, best hand mean first
pub fn histograms(evaluations: &[DiscardEvaluation], symbols: bool) -> String {
    let mut out = String::new();
    let sorted = cribbage_discard::sort_by_key(evaluations, |e| RankingKey::HandMean.key(e));
    for evaluation in sorted {
        let _ = writeln!(
            out,
            "keep {{{}}} discard {{{}}}",
            format_cards(evaluation.kept(), symbols),
            format_cards(evaluation.discarded(), symbols),
        );
        let _ = writeln!(out, "  hand {}", histogram_line(&evaluation.hand_stats));
        let _ = writeln!(out, "  crib {}", histogram_line(&evaluation.crib_stats));
    }
    out
}

fn histogram_line(stats: &ScoringStats) -> String {
    let counts = stats
        .counts
        .iter()
        .enumerate()
        .filter(|&(_, &count)| count > 0)
        .map(|(score, count)| format!("{}:{}", score, count))
        .collect::<Vec<_>>()
        .join(" ");
    format!(
        "{} median {} range {}-{} | {}",
        stats, stats.median, stats.min, stats.max, counts
    )
}

/// Component table for a single scored hand
pub fn breakdown(hand: &[Card], starter: Card, score: &Score, symbols: bool) -> String {
    let starter = if symbols { starter.symbol() } else { starter.to_string() };
    let mut out = String::new();
    let _ = writeln!(out, "hand {{{}}} starter {}", format_cards(hand, symbols), starter);
    for (name, points) in [
        ("fifteens", score.fifteens),
        ("runs", score.runs),
        ("pairs", score.pairs),
        ("flush", score.flush),
        ("nobs", score.nobs),
        ("total", score.total()),
    ] {
        let _ = writeln!(out, "  {:<10}{:>3}", name, points);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use cribbage_engine::{HandScorer, ShowScorer};

    fn cards(tokens: &[&str]) -> Vec<Card> {
        tokens.iter().map(|t| t.parse().unwrap()).collect()
    }

    #[test]
    fn test_breakdown_table() {
        let hand = cards(&["JS", "5H", "XC", "5S"]);
        let starter: Card = "4S".parse().unwrap();
        let score = ShowScorer.breakdown(&hand, starter).unwrap();
        let text = breakdown(&hand, starter, &score, false);
        assert!(text.starts_with("hand {5H, 5S, XC, JS} starter 4S"), "{}", text);
        assert!(text.contains("  fifteens    8\n"));
        assert!(text.contains("  total      11\n"));
    }

    #[test]
    fn test_rankings_has_a_table_per_key() {
        let hand = cards(&["5D", "9C", "XS", "JC", "QC", "KS"]);
        let evaluations = cribbage_discard::evaluate(&hand, 2).unwrap();
        let text = rankings(&evaluations, 3, true);
        assert_eq!(text.matches("Top 3 ").count(), RankingKey::ALL.len());
        assert!(text.contains("discard: {"));
        assert!(text.contains('♣'));
    }
}
