//! Enumerates every combo of a requested shape latent in a hand.
//!
//! Fixed shapes are a linear scan over the rank table. Sequence shapes slide
//! windows over the 12-rank straight span. Attachment shapes multiply a base
//! scan by an n-choose-k enumeration over the remaining ranks, so their cost
//! is combinatorial in the number of distinct ranks held; a real hand caps n
//! at 15 and k at a handful, which keeps the output small, but callers
//! feeding synthetic hands should expect binomial growth.

use crate::model::combo::{Combo, ComboKind};
use crate::model::hand::Hand;
use crate::model::rank::Rank;

const SEQUENCE_OF_SINGLES_MIN: usize = 5;
const SEQUENCE_OF_PAIRS_MIN: usize = 3;
const SEQUENCE_OF_TRIPLETS_MIN: usize = 2;

/// Every distinct combo of `kind` obtainable from the hand's current counts,
/// ordered ascending by base representative rank, then by construction order
/// (longer runs and later attachment combinations after shorter and earlier
/// ones). The hand is never mutated; `Invalid` yields nothing.
pub fn generate(hand: &Hand, kind: ComboKind) -> Vec<Combo> {
    let combos = match kind {
        ComboKind::Single => uniform(hand, 1),
        ComboKind::Pair => uniform(hand, 2),
        ComboKind::Triplet => uniform(hand, 3),
        ComboKind::Bomb => uniform(hand, 4),
        ComboKind::Rocket => rocket(hand),
        ComboKind::SequenceOfSingles => sequences(hand, 1, SEQUENCE_OF_SINGLES_MIN),
        ComboKind::SequenceOfPairs => sequences(hand, 2, SEQUENCE_OF_PAIRS_MIN),
        ComboKind::SequenceOfTriplets => sequences(hand, 3, SEQUENCE_OF_TRIPLETS_MIN),
        ComboKind::TripletWithSingle => triplet_with_attachment(hand, 1),
        ComboKind::TripletWithPair => triplet_with_attachment(hand, 2),
        ComboKind::SequenceOfTripletsWithSingles => winged_sequences(hand, 1),
        ComboKind::SequenceOfTripletsWithPairs => winged_sequences(hand, 2),
        ComboKind::QuadWithTwoSingles => quad_with_attachments(hand, 1),
        ComboKind::QuadWithTwoPairs => quad_with_attachments(hand, 2),
        ComboKind::Invalid => Vec::new(),
    };
    debug_assert!(combos.iter().all(|combo| combo.kind() == kind));
    combos
}

/// Shapes made of one rank repeated `copies` times.
fn uniform(hand: &Hand, copies: u8) -> Vec<Combo> {
    hand.ranks_with_at_least(copies)
        .into_iter()
        .map(|rank| Combo::from_cards(&vec![rank; copies as usize]))
        .collect()
}

fn rocket(hand: &Hand) -> Vec<Combo> {
    if hand.count(Rank::BlackJoker) >= 1 && hand.count(Rank::RedJoker) >= 1 {
        vec![Combo::from_cards(&[Rank::BlackJoker, Rank::RedJoker])]
    } else {
        Vec::new()
    }
}

/// Run windows over the straight span whose every rank the hand holds with
/// at least `copies` occurrences. Windows come out ascending by start rank,
/// then by length, which fixes the generator's output order.
fn run_windows(hand: &Hand, copies: u8, min_len: usize) -> Vec<Vec<Rank>> {
    let span = Rank::STRAIGHT_SPAN;
    let eligible: Vec<bool> = span
        .iter()
        .map(|&rank| hand.count(rank) >= copies)
        .collect();

    let mut windows = Vec::new();
    for start in 0..span.len() {
        let max_len = eligible[start..]
            .iter()
            .take_while(|&&available| available)
            .count();
        for len in min_len..=max_len {
            windows.push(span[start..start + len].to_vec());
        }
    }
    windows
}

fn sequences(hand: &Hand, copies: u8, min_len: usize) -> Vec<Combo> {
    run_windows(hand, copies, min_len)
        .into_iter()
        .map(|window| {
            let mut cards = Vec::with_capacity(window.len() * copies as usize);
            for rank in window {
                for _ in 0..copies {
                    cards.push(rank);
                }
            }
            Combo::from_cards(&cards)
        })
        .collect()
}

fn triplet_with_attachment(hand: &Hand, attach_copies: u8) -> Vec<Combo> {
    let mut combos = Vec::new();
    for base in hand.ranks_with_at_least(3) {
        for attachment in hand.ranks_with_at_least(attach_copies) {
            if attachment == base {
                continue;
            }
            let mut cards = vec![base; 3];
            cards.extend(std::iter::repeat_n(attachment, attach_copies as usize));
            combos.push(Combo::from_cards(&cards));
        }
    }
    combos
}

fn quad_with_attachments(hand: &Hand, attach_copies: u8) -> Vec<Combo> {
    let mut combos = Vec::new();
    for base in hand.ranks_with_at_least(4) {
        let pool: Vec<Rank> = hand
            .ranks_with_at_least(attach_copies)
            .into_iter()
            .filter(|&rank| rank != base)
            .collect();
        for attachment in combinations(&pool, 2) {
            if attach_copies == 1 && has_both_jokers(&attachment) {
                continue;
            }
            let mut cards = vec![base; 4];
            for rank in attachment {
                cards.extend(std::iter::repeat_n(rank, attach_copies as usize));
            }
            combos.push(Combo::from_cards(&cards));
        }
    }
    combos
}

fn winged_sequences(hand: &Hand, attach_copies: u8) -> Vec<Combo> {
    let mut combos = Vec::new();
    for base in run_windows(hand, 3, SEQUENCE_OF_TRIPLETS_MIN) {
        let pool: Vec<Rank> = hand
            .ranks_with_at_least(attach_copies)
            .into_iter()
            .filter(|rank| !base.contains(rank))
            .collect();
        for attachment in combinations(&pool, base.len()) {
            if attach_copies == 1 && has_both_jokers(&attachment) {
                continue;
            }
            let mut cards = Vec::with_capacity(base.len() * (3 + attach_copies as usize));
            for &rank in &base {
                cards.extend(std::iter::repeat_n(rank, 3));
            }
            for rank in attachment {
                cards.extend(std::iter::repeat_n(rank, attach_copies as usize));
            }
            combos.push(Combo::from_cards(&cards));
        }
    }
    combos
}

/// All k-element subsets of `pool` in lexicographic order over pool
/// positions. Cost is n choose k; pools here are at most the 15 ranks.
fn combinations(pool: &[Rank], k: usize) -> Vec<Vec<Rank>> {
    if k == 0 || pool.len() < k {
        return Vec::new();
    }
    let n = pool.len();
    let mut indices: Vec<usize> = (0..k).collect();
    let mut out = Vec::new();
    loop {
        out.push(indices.iter().map(|&i| pool[i]).collect());
        let Some(pivot) = (0..k).rev().find(|&i| indices[i] < i + n - k) else {
            return out;
        };
        indices[pivot] += 1;
        for i in pivot + 1..k {
            indices[i] = indices[i - 1] + 1;
        }
    }
}

fn has_both_jokers(ranks: &[Rank]) -> bool {
    ranks.contains(&Rank::BlackJoker) && ranks.contains(&Rank::RedJoker)
}
