//! Discard partitions of an initial hand

use cribbage_engine::Card;
use itertools::Itertools;
use serde::Serialize;

/// One way of splitting the initial hand into kept and discarded cards
///
/// Both halves are sorted; together they are exactly the initial hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiscardOption {
    pub kept: Vec<Card>,
    pub discarded: Vec<Card>,
}

/// Every `discard_size`-card discard of `hand`, each exactly once
///
/// Callers must not read meaning into the order of the result.
pub fn partitions(hand: &[Card], discard_size: usize) -> Vec<DiscardOption> {
    (0..hand.len())
        .combinations(discard_size)
        .map(|indices| {
            let mut discarded: Vec<Card> = indices.iter().map(|&i| hand[i]).collect();
            let mut kept: Vec<Card> = hand
                .iter()
                .enumerate()
                .filter(|(i, _)| !indices.contains(i))
                .map(|(_, &card)| card)
                .collect();
            discarded.sort();
            kept.sort();
            DiscardOption { kept, discarded }
        })
        .collect()
}

/// n choose k
pub fn choose(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    (0..k).fold(1usize, |acc, i| acc * (n - i) / (i + 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cribbage_engine::card::mask_of;

    fn hand(tokens: &[&str]) -> Vec<Card> {
        tokens.iter().map(|t| t.parse().unwrap()).collect()
    }

    #[test]
    fn test_six_card_hand_has_fifteen_partitions() {
        let cards = hand(&["5D", "9C", "XS", "JC", "QC", "KS"]);
        let options = partitions(&cards, 2);
        assert_eq!(options.len(), 15);

        let full = mask_of(&cards);
        for option in &options {
            assert_eq!(option.kept.len(), 4);
            assert_eq!(option.discarded.len(), 2);
            let (kept, discarded) = (mask_of(&option.kept), mask_of(&option.discarded));
            assert_eq!(kept & discarded, 0, "halves must be disjoint");
            assert_eq!(kept | discarded, full, "halves must cover the hand");
        }

        let mut discards: Vec<u64> = options.iter().map(|o| mask_of(&o.discarded)).collect();
        discards.sort();
        discards.dedup();
        assert_eq!(discards.len(), 15, "each discard should appear once");
    }

    #[test]
    fn test_partition_counts() {
        let cards = hand(&["AC", "2C", "3C", "4C", "5C"]);
        assert_eq!(partitions(&cards, 1).len(), 5);
        assert_eq!(partitions(&cards, 3).len(), 10);
    }

    #[test]
    fn test_choose() {
        assert_eq!(choose(6, 2), 15);
        assert_eq!(choose(46, 3), 15_180);
        assert_eq!(choose(47, 4), 178_365);
        assert_eq!(choose(3, 5), 0);
        assert_eq!(choose(5, 0), 1);
    }
}
