use crate::model::combo::Combo;
use crate::model::deck::Deck;
use crate::model::hand::{Hand, HandError};
use crate::model::rank::Rank;
use crate::model::seat::Seat;
use crate::rules::compare::beats;
use core::fmt;

/// Table state of one game: the three hands, whose turn it is, the combo
/// currently to beat, and the winner once a hand empties. Hands are mutated
/// only through [`RoundState::play`]; classification, comparison and
/// generation never touch them.
#[derive(Debug, Clone)]
pub struct RoundState {
    hands: [Hand; 3],
    turn: Seat,
    table: Option<TablePlay>,
    passes: u8,
    winner: Option<Seat>,
}

/// The combo currently owning the table, with the seat that played it.
#[derive(Debug, Clone)]
pub struct TablePlay {
    pub seat: Seat,
    pub combo: Combo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    Played,
    /// The play emptied the seat's hand; the game is over.
    Won(Seat),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassOutcome {
    Passed,
    /// Both opponents passed; the table is cleared and `leader` opens a
    /// fresh round.
    RoundReset { leader: Seat },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayError {
    GameOver,
    OutOfTurn { expected: Seat, actual: Seat },
    MissingCards(Vec<Rank>),
    InvalidCombo,
    DoesNotBeat,
    PassOnFreshRound,
}

impl fmt::Display for PlayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayError::GameOver => write!(f, "the game is already over"),
            PlayError::OutOfTurn { expected, actual } => {
                write!(f, "expected {expected} to act but got {actual}")
            }
            PlayError::MissingCards(missing) => {
                let cards = missing
                    .iter()
                    .map(|rank| rank.symbol())
                    .collect::<Vec<_>>()
                    .join(" ");
                write!(f, "hand does not hold: {cards}")
            }
            PlayError::InvalidCombo => write!(f, "cards do not form a valid combo"),
            PlayError::DoesNotBeat => write!(f, "combo does not beat the table"),
            PlayError::PassOnFreshRound => write!(f, "cannot pass when opening a round"),
        }
    }
}

impl std::error::Error for PlayError {}

impl RoundState {
    /// Deal a game from a deck: three 17-card hands, the kitty absorbed by
    /// the landlord, who then leads the first round with a 20-card hand.
    pub fn deal(deck: &Deck) -> Self {
        let deal = deck.deal();
        let mut hands = deal.hands;
        for card in deal.kitty {
            hands[Seat::Landlord.index()].add(card);
        }
        Self::from_hands(hands, Seat::Landlord)
    }

    /// Build a round from explicit hands. Test seam, also used by snapshot
    /// restore.
    pub fn from_hands(hands: [Hand; 3], leader: Seat) -> Self {
        Self {
            hands,
            turn: leader,
            table: None,
            passes: 0,
            winner: None,
        }
    }

    pub fn hand(&self, seat: Seat) -> &Hand {
        &self.hands[seat.index()]
    }

    pub fn turn(&self) -> Seat {
        self.turn
    }

    pub fn table(&self) -> Option<&TablePlay> {
        self.table.as_ref()
    }

    /// The combo a candidate play must beat, if any.
    pub fn combo_to_beat(&self) -> Option<&Combo> {
        self.table.as_ref().map(|play| &play.combo)
    }

    pub fn is_fresh_round(&self) -> bool {
        self.table.is_none()
    }

    pub fn winner(&self) -> Option<Seat> {
        self.winner
    }

    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Submit `cards` for `seat`. Validation order mirrors the reference
    /// game's prompt loop: turn, card availability, shape, beat relation.
    /// On success the cards leave the hand, the table updates, and the turn
    /// advances unless the play won the game.
    pub fn play(&mut self, seat: Seat, cards: &[Rank]) -> Result<PlayOutcome, PlayError> {
        if self.winner.is_some() {
            return Err(PlayError::GameOver);
        }
        if seat != self.turn {
            return Err(PlayError::OutOfTurn {
                expected: self.turn,
                actual: seat,
            });
        }

        let missing = self.hands[seat.index()].missing_for(cards);
        if !missing.is_empty() {
            return Err(PlayError::MissingCards(missing));
        }

        let combo = Combo::from_cards(cards);
        if !combo.kind().is_valid() {
            return Err(PlayError::InvalidCombo);
        }
        if !beats(self.combo_to_beat(), &combo) {
            return Err(PlayError::DoesNotBeat);
        }

        match self.hands[seat.index()].remove_all(cards) {
            Ok(()) => {}
            Err(HandError::InsufficientCards { missing }) => {
                return Err(PlayError::MissingCards(missing));
            }
        }

        self.table = Some(TablePlay { seat, combo });
        self.passes = 0;

        if self.hands[seat.index()].is_empty() {
            self.winner = Some(seat);
            return Ok(PlayOutcome::Won(seat));
        }

        self.turn = self.turn.next();
        Ok(PlayOutcome::Played)
    }

    /// Decline to play. Two consecutive passes clear the table and hand the
    /// lead back to the last seat that played.
    pub fn pass(&mut self, seat: Seat) -> Result<PassOutcome, PlayError> {
        if self.winner.is_some() {
            return Err(PlayError::GameOver);
        }
        if seat != self.turn {
            return Err(PlayError::OutOfTurn {
                expected: self.turn,
                actual: seat,
            });
        }
        if self.table.is_none() {
            return Err(PlayError::PassOnFreshRound);
        }

        self.passes += 1;
        self.turn = self.turn.next();

        if self.passes == 2 {
            let leader = self.turn;
            self.table = None;
            self.passes = 0;
            Ok(PassOutcome::RoundReset { leader })
        } else {
            Ok(PassOutcome::Passed)
        }
    }

    pub(crate) fn snapshot_parts(&self) -> (&[Hand; 3], Seat, Option<&TablePlay>, u8, Option<Seat>) {
        (
            &self.hands,
            self.turn,
            self.table.as_ref(),
            self.passes,
            self.winner,
        )
    }

    pub(crate) fn from_snapshot_parts(
        hands: [Hand; 3],
        turn: Seat,
        table: Option<TablePlay>,
        passes: u8,
        winner: Option<Seat>,
    ) -> Self {
        Self {
            hands,
            turn,
            table,
            passes,
            winner,
        }
    }
}
