use super::round::{RoundState, TablePlay};
use crate::model::combo::Combo;
use crate::model::hand::Hand;
use crate::model::rank::Rank;
use crate::model::seat::Seat;
use serde::{Deserialize, Serialize};

/// JSON-serializable capture of a round in progress. Hands and the table
/// combo are stored as plain rank lists; the combo is reclassified on
/// restore, so a snapshot can never smuggle in a stale classification.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoundSnapshot {
    pub hands: [Vec<Rank>; 3],
    pub turn: Seat,
    pub table: Option<TableSnapshot>,
    pub passes: u8,
    pub winner: Option<Seat>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TableSnapshot {
    pub seat: Seat,
    pub cards: Vec<Rank>,
}

impl RoundSnapshot {
    pub fn capture(round: &RoundState) -> Self {
        let (hands, turn, table, passes, winner) = round.snapshot_parts();
        RoundSnapshot {
            hands: [hands[0].cards(), hands[1].cards(), hands[2].cards()],
            turn,
            table: table.map(|play| TableSnapshot {
                seat: play.seat,
                cards: play.combo.cards().to_vec(),
            }),
            passes,
            winner,
        }
    }

    pub fn restore(self) -> RoundState {
        let hands = [
            Hand::from_cards(&self.hands[0]),
            Hand::from_cards(&self.hands[1]),
            Hand::from_cards(&self.hands[2]),
        ];
        let table = self.table.map(|table| TablePlay {
            seat: table.seat,
            combo: Combo::from_cards(&table.cards),
        });
        RoundState::from_snapshot_parts(hands, self.turn, table, self.passes, self.winner)
    }

    pub fn to_json(round: &RoundState) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&Self::capture(round))
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
