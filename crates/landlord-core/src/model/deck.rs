use crate::model::hand::Hand;
use crate::model::rank::Rank;
use crate::model::seat::Seat;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

pub const DECK_SIZE: usize = 54;
pub const DEALT_HAND_SIZE: usize = 17;
pub const KITTY_SIZE: usize = 3;

/// The fixed 54-card multiset: four copies of each non-joker rank plus one of
/// each joker.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Rank>,
}

/// Result of dealing: three 17-card hands indexed by seat, plus the kitty the
/// landlord absorbs before play begins.
#[derive(Debug, Clone)]
pub struct Deal {
    pub hands: [Hand; 3],
    pub kitty: [Rank; KITTY_SIZE],
}

impl Deck {
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for rank in Rank::ORDERED {
            for _ in 0..rank.copies_in_deck() {
                cards.push(rank);
            }
        }
        Self { cards }
    }

    pub fn shuffled<R: rand::Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::standard();
        deck.shuffle_in_place(rng);
        deck
    }

    pub fn shuffled_with_seed(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::shuffled(&mut rng)
    }

    pub fn shuffle_in_place<R: rand::Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    pub fn cards(&self) -> &[Rank] {
        &self.cards
    }

    /// Deal from the top: one card to each seat in turn for 17 rounds, the
    /// final three cards forming the kitty.
    pub fn deal(&self) -> Deal {
        let mut hands = [Hand::new(), Hand::new(), Hand::new()];
        for (index, &card) in self.cards[..DECK_SIZE - KITTY_SIZE].iter().enumerate() {
            let seat = Seat::from_index(index % 3).expect("seat index in range");
            hands[seat.index()].add(card);
        }
        let mut kitty = [Rank::Three; KITTY_SIZE];
        for (slot, &card) in kitty.iter_mut().zip(&self.cards[DECK_SIZE - KITTY_SIZE..]) {
            *slot = card;
        }
        Deal { hands, kitty }
    }
}

#[cfg(test)]
mod tests {
    use super::{DECK_SIZE, DEALT_HAND_SIZE, Deck};
    use crate::model::rank::Rank;
    use crate::model::seat::Seat;

    #[test]
    fn standard_deck_has_54_cards() {
        let deck = Deck::standard();
        assert_eq!(deck.cards().len(), DECK_SIZE);
        let jokers = deck.cards().iter().filter(|rank| rank.is_joker()).count();
        assert_eq!(jokers, 2);
        let threes = deck
            .cards()
            .iter()
            .filter(|&&rank| rank == Rank::Three)
            .count();
        assert_eq!(threes, 4);
    }

    #[test]
    fn shuffle_with_seed_is_deterministic() {
        let deck_a = Deck::shuffled_with_seed(42);
        let deck_b = Deck::shuffled_with_seed(42);
        assert_eq!(deck_a.cards(), deck_b.cards());
    }

    #[test]
    fn shuffle_with_different_seeds_differs() {
        let deck_a = Deck::shuffled_with_seed(1);
        let deck_b = Deck::shuffled_with_seed(2);
        assert_ne!(deck_a.cards(), deck_b.cards());
    }

    #[test]
    fn deal_distributes_seventeen_cards_and_a_kitty() {
        let deal = Deck::shuffled_with_seed(7).deal();
        for seat in Seat::LOOP {
            assert_eq!(deal.hands[seat.index()].len(), DEALT_HAND_SIZE);
        }
        let total: usize = deal
            .hands
            .iter()
            .map(|hand| hand.len())
            .sum::<usize>()
            + deal.kitty.len();
        assert_eq!(total, DECK_SIZE);
    }
}
