mod greedy;

pub use greedy::GreedyPolicy;

use landlord_core::model::combo::Combo;
use landlord_core::model::hand::Hand;
use landlord_core::model::seat::Seat;
use core::fmt;

/// A decision produced by a policy: put a combo on the table or pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Move {
    Play(Combo),
    Pass,
}

impl Move {
    pub const fn is_pass(&self) -> bool {
        matches!(self, Move::Pass)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Play(combo) => write!(f, "{combo} ({})", combo.kind()),
            Move::Pass => f.write_str("pass"),
        }
    }
}

/// Context provided to policies for decision-making. `previous` is the combo
/// currently owning the table; `None` means the seat opens a fresh round.
pub struct PolicyContext<'a> {
    pub seat: Seat,
    pub hand: &'a Hand,
    pub previous: Option<&'a Combo>,
}

/// Decision seam for automated players. The greedy reference policy is the
/// only implementation today; smarter searchers can slot in behind the same
/// trait.
pub trait Policy: Send {
    fn choose_move(&mut self, ctx: &PolicyContext) -> Move;
}
