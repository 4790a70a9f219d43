use core::fmt;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A card symbol. Suits are not modeled in this game, so a rank is the whole
/// identity of a card; the discriminant is the order index used for every
/// strength comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Rank {
    Three = 0,
    Four = 1,
    Five = 2,
    Six = 3,
    Seven = 4,
    Eight = 5,
    Nine = 6,
    Ten = 7,
    Jack = 8,
    Queen = 9,
    King = 10,
    Ace = 11,
    Two = 12,
    BlackJoker = 13,
    RedJoker = 14,
}

impl Rank {
    pub const ORDERED: [Rank; 15] = [
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
        Rank::Ace,
        Rank::Two,
        Rank::BlackJoker,
        Rank::RedJoker,
    ];

    /// Ranks allowed in straight-type shapes, lowest to highest. "2" and the
    /// jokers never take part in a run.
    pub const STRAIGHT_SPAN: [Rank; 12] = [
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
        Rank::Ace,
    ];

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Rank::Three),
            1 => Some(Rank::Four),
            2 => Some(Rank::Five),
            3 => Some(Rank::Six),
            4 => Some(Rank::Seven),
            5 => Some(Rank::Eight),
            6 => Some(Rank::Nine),
            7 => Some(Rank::Ten),
            8 => Some(Rank::Jack),
            9 => Some(Rank::Queen),
            10 => Some(Rank::King),
            11 => Some(Rank::Ace),
            12 => Some(Rank::Two),
            13 => Some(Rank::BlackJoker),
            14 => Some(Rank::RedJoker),
            _ => None,
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn is_joker(self) -> bool {
        matches!(self, Rank::BlackJoker | Rank::RedJoker)
    }

    pub const fn is_straight_eligible(self) -> bool {
        !matches!(self, Rank::Two | Rank::BlackJoker | Rank::RedJoker)
    }

    /// Copies of this rank in a full 54-card deck.
    pub const fn copies_in_deck(self) -> u8 {
        if self.is_joker() { 1 } else { 4 }
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::BlackJoker => "B",
            Rank::RedJoker => "R",
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "3" => Some(Rank::Three),
            "4" => Some(Rank::Four),
            "5" => Some(Rank::Five),
            "6" => Some(Rank::Six),
            "7" => Some(Rank::Seven),
            "8" => Some(Rank::Eight),
            "9" => Some(Rank::Nine),
            "10" => Some(Rank::Ten),
            "J" => Some(Rank::Jack),
            "Q" => Some(Rank::Queen),
            "K" => Some(Rank::King),
            "A" => Some(Rank::Ace),
            "2" => Some(Rank::Two),
            "B" => Some(Rank::BlackJoker),
            "R" => Some(Rank::RedJoker),
            _ => None,
        }
    }
}

/// A token outside the 15-symbol rank domain reached the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidCard {
    pub symbol: String,
}

impl InvalidCard {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
        }
    }
}

impl fmt::Display for InvalidCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid card symbol `{}`", self.symbol)
    }
}

impl std::error::Error for InvalidCard {}

impl FromStr for Rank {
    type Err = InvalidCard;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Rank::from_symbol(value).ok_or_else(|| InvalidCard::new(value))
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::{InvalidCard, Rank};

    #[test]
    fn order_follows_declared_sequence() {
        for pair in Rank::ORDERED.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        assert_eq!(Rank::Three.index(), 0);
        assert_eq!(Rank::RedJoker.index(), 14);
    }

    #[test]
    fn from_index_roundtrips() {
        for (index, rank) in Rank::ORDERED.iter().enumerate() {
            assert_eq!(Rank::from_index(index), Some(*rank));
            assert_eq!(rank.index(), index);
        }
        assert_eq!(Rank::from_index(15), None);
    }

    #[test]
    fn straight_span_excludes_two_and_jokers() {
        assert!(!Rank::Two.is_straight_eligible());
        assert!(!Rank::BlackJoker.is_straight_eligible());
        assert!(!Rank::RedJoker.is_straight_eligible());
        for rank in Rank::STRAIGHT_SPAN {
            assert!(rank.is_straight_eligible());
        }
    }

    #[test]
    fn symbols_parse_back() {
        for rank in Rank::ORDERED {
            assert_eq!(rank.symbol().parse::<Rank>(), Ok(rank));
        }
    }

    #[test]
    fn unknown_symbol_is_invalid_card() {
        assert_eq!("X".parse::<Rank>(), Err(InvalidCard::new("X")));
        assert_eq!("joker".parse::<Rank>(), Err(InvalidCard::new("joker")));
    }

    #[test]
    fn deck_copies_per_rank() {
        assert_eq!(Rank::Three.copies_in_deck(), 4);
        assert_eq!(Rank::Two.copies_in_deck(), 4);
        assert_eq!(Rank::BlackJoker.copies_in_deck(), 1);
        assert_eq!(Rank::RedJoker.copies_in_deck(), 1);
    }
}
