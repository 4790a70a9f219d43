use crate::model::rank::Rank;
use crate::rules::classify::classify;
use core::fmt;

/// The 14 legal combination shapes plus the explicit rejection tag. A card
/// group classifies to exactly one variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComboKind {
    Single,
    SequenceOfSingles,
    Pair,
    SequenceOfPairs,
    Triplet,
    TripletWithSingle,
    TripletWithPair,
    SequenceOfTriplets,
    SequenceOfTripletsWithSingles,
    SequenceOfTripletsWithPairs,
    QuadWithTwoSingles,
    QuadWithTwoPairs,
    Bomb,
    Rocket,
    Invalid,
}

impl ComboKind {
    /// The playable shapes in their fixed declared order. The bot's
    /// fresh-round scan walks this list front to back, so the order is part
    /// of observable play.
    pub const PLAYABLE: [ComboKind; 14] = [
        ComboKind::Single,
        ComboKind::SequenceOfSingles,
        ComboKind::Pair,
        ComboKind::SequenceOfPairs,
        ComboKind::Triplet,
        ComboKind::TripletWithSingle,
        ComboKind::TripletWithPair,
        ComboKind::SequenceOfTriplets,
        ComboKind::SequenceOfTripletsWithSingles,
        ComboKind::SequenceOfTripletsWithPairs,
        ComboKind::QuadWithTwoSingles,
        ComboKind::QuadWithTwoPairs,
        ComboKind::Bomb,
        ComboKind::Rocket,
    ];

    pub const fn is_valid(self) -> bool {
        !matches!(self, ComboKind::Invalid)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            ComboKind::Single => "single",
            ComboKind::SequenceOfSingles => "sequence of singles",
            ComboKind::Pair => "pair",
            ComboKind::SequenceOfPairs => "sequence of pairs",
            ComboKind::Triplet => "triplet",
            ComboKind::TripletWithSingle => "triplet with single",
            ComboKind::TripletWithPair => "triplet with pair",
            ComboKind::SequenceOfTriplets => "sequence of triplets",
            ComboKind::SequenceOfTripletsWithSingles => "sequence of triplets with singles",
            ComboKind::SequenceOfTripletsWithPairs => "sequence of triplets with pairs",
            ComboKind::QuadWithTwoSingles => "quad with two singles",
            ComboKind::QuadWithTwoPairs => "quad with two pairs",
            ComboKind::Bomb => "bomb",
            ComboKind::Rocket => "rocket",
            ComboKind::Invalid => "invalid combo",
        }
    }
}

impl fmt::Display for ComboKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A group of cards submitted as one playable unit, stored sorted with its
/// classification cached at construction. Combos are ephemeral values: built
/// by the generator or an input parser, judged, then discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combo {
    cards: Vec<Rank>,
    kind: ComboKind,
}

impl Combo {
    /// Classify `cards` and capture them in canonical (ascending) order.
    /// Malformed shapes are represented, not rejected: the combo simply
    /// carries `ComboKind::Invalid`.
    pub fn from_cards(cards: &[Rank]) -> Self {
        let mut cards = cards.to_vec();
        cards.sort();
        let kind = classify(&cards);
        Self { cards, kind }
    }

    pub fn cards(&self) -> &[Rank] {
        &self.cards
    }

    pub const fn kind(&self) -> ComboKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl fmt::Display for Combo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cards = self
            .cards
            .iter()
            .map(|rank| rank.symbol())
            .collect::<Vec<_>>()
            .join(" ");
        f.write_str(&cards)
    }
}

#[cfg(test)]
mod tests {
    use super::{Combo, ComboKind};
    use crate::model::rank::Rank;

    #[test]
    fn from_cards_sorts_and_classifies() {
        let combo = Combo::from_cards(&[Rank::Four, Rank::Three, Rank::Three, Rank::Three]);
        assert_eq!(
            combo.cards(),
            &[Rank::Three, Rank::Three, Rank::Three, Rank::Four]
        );
        assert_eq!(combo.kind(), ComboKind::TripletWithSingle);
    }

    #[test]
    fn malformed_groups_carry_invalid_kind() {
        let combo = Combo::from_cards(&[Rank::Three, Rank::Five]);
        assert_eq!(combo.kind(), ComboKind::Invalid);
        assert!(!combo.kind().is_valid());
    }

    #[test]
    fn playable_list_has_no_invalid_entry() {
        assert_eq!(ComboKind::PLAYABLE.len(), 14);
        assert!(ComboKind::PLAYABLE.iter().all(|kind| kind.is_valid()));
    }

    #[test]
    fn display_uses_game_names() {
        assert_eq!(
            ComboKind::SequenceOfTripletsWithPairs.to_string(),
            "sequence of triplets with pairs"
        );
        assert_eq!(Combo::from_cards(&[Rank::Ten]).to_string(), "10");
    }
}
