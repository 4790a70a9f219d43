use crate::model::combo::ComboKind;
use crate::model::rank::Rank;

const SEQUENCE_OF_SINGLES_MIN: usize = 5;
const SEQUENCE_OF_PAIRS_MIN: usize = 3;
const SEQUENCE_OF_TRIPLETS_MIN: usize = 2;

/// Shape signature of a card group: the ranks appearing exactly once, twice,
/// three times and four times, each list ascending. Any rank repeated more
/// than four times makes the group unrepresentable as a legal shape, so the
/// signature is `None`.
struct Signature {
    singles: Vec<Rank>,
    pairs: Vec<Rank>,
    triplets: Vec<Rank>,
    quads: Vec<Rank>,
}

impl Signature {
    fn of(cards: &[Rank]) -> Option<Self> {
        let mut counts = [0usize; 15];
        for &card in cards {
            counts[card.index()] += 1;
        }
        let mut signature = Signature {
            singles: Vec::new(),
            pairs: Vec::new(),
            triplets: Vec::new(),
            quads: Vec::new(),
        };
        for rank in Rank::ORDERED {
            match counts[rank.index()] {
                0 => {}
                1 => signature.singles.push(rank),
                2 => signature.pairs.push(rank),
                3 => signature.triplets.push(rank),
                4 => signature.quads.push(rank),
                _ => return None,
            }
        }
        Some(signature)
    }
}

/// Classify a card group into exactly one `ComboKind`. Total over any input
/// (the empty group and every malformed shape yield `Invalid`) and
/// permutation-invariant: the decision depends only on the count signature,
/// never on input order or on the order the cases are tested in.
pub fn classify(cards: &[Rank]) -> ComboKind {
    let Some(signature) = Signature::of(cards) else {
        return ComboKind::Invalid;
    };
    let Signature {
        singles,
        pairs,
        triplets,
        quads,
    } = &signature;

    // One arm per shape, keyed by how many ranks occur exactly 4/3/2/1
    // times. The tuple patterns partition the signature space, so no two
    // arms can match the same input.
    match (quads.len(), triplets.len(), pairs.len(), singles.len()) {
        (0, 0, 0, 1) => ComboKind::Single,
        (0, 0, 1, 0) => ComboKind::Pair,
        (0, 1, 0, 0) => ComboKind::Triplet,
        (1, 0, 0, 0) => ComboKind::Bomb,
        (0, 0, 0, 2) if is_joker_pair(singles) => ComboKind::Rocket,
        (0, 1, 0, 1) => ComboKind::TripletWithSingle,
        (0, 1, 1, 0) => ComboKind::TripletWithPair,
        (0, 0, 0, n) if n >= SEQUENCE_OF_SINGLES_MIN && is_straight_run(singles) => {
            ComboKind::SequenceOfSingles
        }
        (0, 0, n, 0) if n >= SEQUENCE_OF_PAIRS_MIN && is_straight_run(pairs) => {
            ComboKind::SequenceOfPairs
        }
        (0, n, 0, 0) if n >= SEQUENCE_OF_TRIPLETS_MIN && is_straight_run(triplets) => {
            ComboKind::SequenceOfTriplets
        }
        (0, t, 0, s)
            if t >= SEQUENCE_OF_TRIPLETS_MIN
                && s == t
                && is_plane_run(triplets)
                && !has_both_jokers(singles) =>
        {
            ComboKind::SequenceOfTripletsWithSingles
        }
        (0, t, p, 0) if t >= SEQUENCE_OF_TRIPLETS_MIN && p == t && is_plane_run(triplets) => {
            ComboKind::SequenceOfTripletsWithPairs
        }
        (1, 0, 0, 2) if !has_both_jokers(singles) => ComboKind::QuadWithTwoSingles,
        (1, 0, 2, 0) => ComboKind::QuadWithTwoPairs,
        _ => ComboKind::Invalid,
    }
}

/// An unbroken ascending run of straight-eligible ranks. `ranks` is sorted.
fn is_straight_run(ranks: &[Rank]) -> bool {
    ranks.iter().all(|rank| rank.is_straight_eligible()) && is_adjacent(ranks)
}

/// Run check for the triplet base of a winged sequence: "2" may never anchor
/// a triplet run, but adjacency is judged over the full rank order.
fn is_plane_run(ranks: &[Rank]) -> bool {
    !ranks.contains(&Rank::Two) && is_adjacent(ranks)
}

fn is_adjacent(ranks: &[Rank]) -> bool {
    ranks
        .windows(2)
        .all(|pair| pair[1].index() == pair[0].index() + 1)
}

fn is_joker_pair(ranks: &[Rank]) -> bool {
    ranks == [Rank::BlackJoker, Rank::RedJoker]
}

fn has_both_jokers(ranks: &[Rank]) -> bool {
    ranks.contains(&Rank::BlackJoker) && ranks.contains(&Rank::RedJoker)
}

#[cfg(test)]
mod tests {
    use super::classify;
    use crate::model::combo::ComboKind;
    use crate::model::rank::Rank::*;

    #[test]
    fn empty_group_is_invalid() {
        assert_eq!(classify(&[]), ComboKind::Invalid);
    }

    #[test]
    fn singles_pairs_triplets_bombs() {
        assert_eq!(classify(&[Seven]), ComboKind::Single);
        assert_eq!(classify(&[RedJoker]), ComboKind::Single);
        assert_eq!(classify(&[Seven, Seven]), ComboKind::Pair);
        assert_eq!(classify(&[Seven, Seven, Seven]), ComboKind::Triplet);
        assert_eq!(classify(&[Seven, Seven, Seven, Seven]), ComboKind::Bomb);
    }

    #[test]
    fn rocket_is_exactly_both_jokers() {
        assert_eq!(classify(&[BlackJoker, RedJoker]), ComboKind::Rocket);
        assert_eq!(classify(&[RedJoker, BlackJoker]), ComboKind::Rocket);
        assert_eq!(classify(&[BlackJoker, Two]), ComboKind::Invalid);
    }

    #[test]
    fn triplet_attachments() {
        assert_eq!(
            classify(&[Nine, Nine, Nine, Two]),
            ComboKind::TripletWithSingle
        );
        assert_eq!(
            classify(&[Nine, Nine, Nine, Two, Two]),
            ComboKind::TripletWithPair
        );
        // two attachments on one triplet is not a shape
        assert_eq!(
            classify(&[Nine, Nine, Nine, Two, Three]),
            ComboKind::Invalid
        );
    }

    #[test]
    fn sequences_of_singles() {
        assert_eq!(
            classify(&[Five, Six, Seven, Eight, Nine]),
            ComboKind::SequenceOfSingles
        );
        assert_eq!(
            classify(&[Ten, Jack, Queen, King, Ace]),
            ComboKind::SequenceOfSingles
        );
        // too short
        assert_eq!(classify(&[Five, Six, Seven, Eight]), ComboKind::Invalid);
        // broken run
        assert_eq!(
            classify(&[Five, Six, Seven, Eight, Ten]),
            ComboKind::Invalid
        );
        // "2" never joins a run
        assert_eq!(classify(&[Jack, Queen, King, Ace, Two]), ComboKind::Invalid);
    }

    #[test]
    fn sequences_of_pairs_and_triplets() {
        assert_eq!(
            classify(&[Three, Three, Four, Four, Five, Five]),
            ComboKind::SequenceOfPairs
        );
        assert_eq!(
            classify(&[Three, Three, Four, Four]),
            ComboKind::Invalid,
            "two pairs are below the three-pair minimum"
        );
        assert_eq!(
            classify(&[King, King, King, Ace, Ace, Ace]),
            ComboKind::SequenceOfTriplets
        );
        assert_eq!(
            classify(&[Ace, Ace, Ace, Two, Two, Two]),
            ComboKind::Invalid,
            "a triplet run may not include 2"
        );
    }

    #[test]
    fn winged_sequences() {
        assert_eq!(
            classify(&[Three, Three, Three, Four, Four, Four, Nine, Jack]),
            ComboKind::SequenceOfTripletsWithSingles
        );
        assert_eq!(
            classify(&[Three, Three, Three, Four, Four, Four, Nine, Nine, Jack, Jack]),
            ComboKind::SequenceOfTripletsWithPairs
        );
        // wing count must equal triplet count
        assert_eq!(
            classify(&[Three, Three, Three, Four, Four, Four, Nine]),
            ComboKind::Invalid
        );
        // both jokers may not ride along as singles
        assert_eq!(
            classify(&[Three, Three, Three, Four, Four, Four, BlackJoker, RedJoker]),
            ComboKind::Invalid
        );
        // mixed single and pair wings are not a shape
        assert_eq!(
            classify(&[Three, Three, Three, Four, Four, Four, Nine, Jack, Jack]),
            ComboKind::Invalid
        );
    }

    #[test]
    fn quads_with_attachments() {
        assert_eq!(
            classify(&[Six, Six, Six, Six, Three, King]),
            ComboKind::QuadWithTwoSingles
        );
        assert_eq!(
            classify(&[Six, Six, Six, Six, BlackJoker, RedJoker]),
            ComboKind::Invalid,
            "both jokers may not serve as the two singles"
        );
        assert_eq!(
            classify(&[Six, Six, Six, Six, Three, Three, King, King]),
            ComboKind::QuadWithTwoPairs
        );
        // a quad plus one pair is not a shape
        assert_eq!(
            classify(&[Six, Six, Six, Six, Three, Three]),
            ComboKind::Invalid
        );
    }

    #[test]
    fn overstuffed_rank_never_classifies() {
        // five copies of one rank cannot occur in legal play; the classifier
        // must not mistake the remainder for a straight
        assert_eq!(
            classify(&[Three, Three, Three, Three, Three, Four, Five, Six, Seven, Eight]),
            ComboKind::Invalid
        );
    }

    #[test]
    fn classification_is_permutation_invariant() {
        let forward = [Five, Six, Seven, Eight, Nine];
        let shuffled = [Nine, Five, Eight, Six, Seven];
        assert_eq!(classify(&forward), classify(&shuffled));

        let forward = [Six, Six, Six, Six, Three, King];
        let shuffled = [King, Six, Three, Six, Six, Six];
        assert_eq!(classify(&forward), classify(&shuffled));
    }
}
