//! Card definitions for the cribbage engine
//!
//! Cards are plain `Copy` values ordered by rank, then suit. That is also the
//! order of the deck returned by [`all_cards`], so a card's position in the
//! deck doubles as its dense index (0-51).

use crate::error::ParseCardError;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Card rank, Ace low (Ace = 1 ... King = 13)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    Ace = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Ordinal value 1-13
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Value used when counting fifteens: face value capped at 10
    pub fn points(self) -> u8 {
        self.value().min(10)
    }

    /// Single-character token (ten is `X`)
    pub fn token(self) -> char {
        match self {
            Rank::Ace => 'A',
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'X',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
        }
    }
}

/// Free-function form of [`Rank::points`]
pub fn rank_points(rank: Rank) -> u8 {
    rank.points()
}

impl FromStr for Rank {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" | "1" => Ok(Rank::Ace),
            "2" => Ok(Rank::Two),
            "3" => Ok(Rank::Three),
            "4" => Ok(Rank::Four),
            "5" => Ok(Rank::Five),
            "6" => Ok(Rank::Six),
            "7" => Ok(Rank::Seven),
            "8" => Ok(Rank::Eight),
            "9" => Ok(Rank::Nine),
            "X" | "T" | "10" => Ok(Rank::Ten),
            "J" => Ok(Rank::Jack),
            "Q" => Ok(Rank::Queen),
            "K" => Ok(Rank::King),
            _ => Err(ParseCardError::Rank(s.to_string())),
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// Card suit in canonical order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    Club = 0,
    Diamond = 1,
    Heart = 2,
    Spade = 3,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Club, Suit::Diamond, Suit::Heart, Suit::Spade];

    pub fn token(self) -> char {
        match self {
            Suit::Club => 'C',
            Suit::Diamond => 'D',
            Suit::Heart => 'H',
            Suit::Spade => 'S',
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Suit::Club => '♣',
            Suit::Diamond => '♦',
            Suit::Heart => '♥',
            Suit::Spade => '♠',
        }
    }
}

impl FromStr for Suit {
    type Err = ParseCardError;

    /// Accepts the initial letter, the suit symbol, or the full name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // some terminals append a variation selector to the symbol
        let token = s.trim().trim_end_matches('\u{fe0f}').to_uppercase();
        match token.as_str() {
            "C" | "♣" | "♧" | "CLUB" | "CLUBS" => Ok(Suit::Club),
            "D" | "♦" | "♢" | "DIAMOND" | "DIAMONDS" => Ok(Suit::Diamond),
            "H" | "♥" | "♡" | "HEART" | "HEARTS" => Ok(Suit::Heart),
            "S" | "♠" | "♤" | "SPADE" | "SPADES" => Ok(Suit::Spade),
            _ => Err(ParseCardError::Suit(s.to_string())),
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// A playing card
///
/// Field order matters: the derived `Ord` compares rank first, then suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Card { rank, suit }
    }

    pub fn rank(self) -> Rank {
        self.rank
    }

    pub fn suit(self) -> Suit {
        self.suit
    }

    /// Position in the rank-major deck (0-51)
    pub fn index(self) -> u8 {
        (self.rank.value() - 1) * 4 + self.suit as u8
    }

    /// Inverse of [`Card::index`]; `None` outside 0-51
    pub fn from_index(index: u8) -> Option<Self> {
        if index >= 52 {
            return None;
        }
        Some(Card {
            rank: Rank::ALL[(index / 4) as usize],
            suit: Suit::ALL[(index % 4) as usize],
        })
    }

    /// One bit per card, keyed by index
    pub fn mask(self) -> u64 {
        1u64 << self.index()
    }

    /// Render with the suit symbol instead of its letter, e.g. `X♠`
    pub fn symbol(self) -> String {
        format!("{}{}", self.rank.token(), self.suit.symbol())
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parse a `<rank><suit>` token such as `5H`, `xs`, `10♦` or `Qclubs`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        if token.is_empty() {
            return Err(ParseCardError::Empty);
        }
        let (rank, suit) = if token.starts_with("10") {
            token.split_at(2)
        } else {
            let first = token.chars().next().map_or(0, char::len_utf8);
            token.split_at(first)
        };
        if suit.is_empty() {
            return Err(ParseCardError::Suit(String::new()));
        }
        Ok(Card::new(rank.parse()?, suit.parse()?))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl Serialize for Card {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

static DECK: OnceLock<[Card; 52]> = OnceLock::new();

/// The full 52-card deck in rank-major order (all four Aces, then all Twos, ...)
///
/// Built once on first use and shared read-only afterwards.
pub fn all_cards() -> &'static [Card; 52] {
    DECK.get_or_init(|| {
        let mut deck = [Card::new(Rank::Ace, Suit::Club); 52];
        let cards = Rank::ALL
            .iter()
            .flat_map(|&rank| Suit::ALL.iter().map(move |&suit| Card::new(rank, suit)));
        for (slot, card) in deck.iter_mut().zip(cards) {
            *slot = card;
        }
        deck
    })
}

/// Combined bit mask of a set of cards
pub fn mask_of(cards: &[Card]) -> u64 {
    cards.iter().fold(0u64, |mask, card| mask | card.mask())
}

/// Sorted, comma-separated rendering of a set of cards
pub fn format_cards(cards: &[Card], symbols: bool) -> String {
    let mut sorted = cards.to_vec();
    sorted.sort();
    sorted
        .iter()
        .map(|&card| if symbols { card.symbol() } else { card.to_string() })
        .collect::<Vec<_>>()
        .join(", ")
}
