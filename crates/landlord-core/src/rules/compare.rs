use crate::model::combo::{Combo, ComboKind};
use crate::model::rank::Rank;

/// Strength of a classified combo: the order index of its representative
/// rank, with a sentinel above every rank reserved for the rocket. Only
/// meaningful between combos of identical kind and cardinality; the wildcard
/// precedence in [`beats`] is decided before strength is ever consulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ComboStrength(u8);

impl ComboStrength {
    /// Only one rocket exists per deck, so any value above the rank range
    /// works as its strength.
    pub const ROCKET: ComboStrength = ComboStrength(Rank::ORDERED.len() as u8);

    const fn of_rank(rank: Rank) -> Self {
        ComboStrength(rank.index() as u8)
    }
}

/// Representative-rank strength of a combo, `None` exactly when the combo is
/// unclassifiable.
pub fn strength(combo: &Combo) -> Option<ComboStrength> {
    let cards = combo.cards();
    match combo.kind() {
        ComboKind::Invalid => None,
        ComboKind::Rocket => Some(ComboStrength::ROCKET),
        // Uniform shapes: cards are sorted, so the first card is the repeated
        // rank or the low end of the run.
        ComboKind::Single
        | ComboKind::Pair
        | ComboKind::Triplet
        | ComboKind::Bomb
        | ComboKind::SequenceOfSingles
        | ComboKind::SequenceOfPairs
        | ComboKind::SequenceOfTriplets => cards.first().copied().map(ComboStrength::of_rank),
        ComboKind::TripletWithSingle
        | ComboKind::TripletWithPair
        | ComboKind::SequenceOfTripletsWithSingles
        | ComboKind::SequenceOfTripletsWithPairs => {
            lowest_rank_with_count(cards, 3).map(ComboStrength::of_rank)
        }
        ComboKind::QuadWithTwoSingles | ComboKind::QuadWithTwoPairs => {
            lowest_rank_with_count(cards, 4).map(ComboStrength::of_rank)
        }
    }
}

/// Whether `candidate` may legally be played on top of `previous`.
/// `previous` of `None` means a fresh round, where any valid combo plays.
pub fn beats(previous: Option<&Combo>, candidate: &Combo) -> bool {
    if !candidate.kind().is_valid() {
        return false;
    }
    let Some(previous) = previous else {
        return true;
    };
    if previous.kind() == ComboKind::Rocket {
        return false;
    }
    if candidate.kind() == ComboKind::Rocket {
        return true;
    }
    if candidate.kind() == ComboKind::Bomb {
        if previous.kind() != ComboKind::Bomb {
            return true;
        }
        return strength(candidate) > strength(previous);
    }
    if candidate.kind() == previous.kind() && candidate.len() == previous.len() {
        strength(candidate) > strength(previous)
    } else {
        false
    }
}

fn lowest_rank_with_count(cards: &[Rank], wanted: usize) -> Option<Rank> {
    let mut counts = [0usize; 15];
    for &card in cards {
        counts[card.index()] += 1;
    }
    Rank::ORDERED
        .iter()
        .copied()
        .find(|rank| counts[rank.index()] == wanted)
}
