use core::fmt;
use serde::{Deserialize, Serialize};

/// The three player positions. The landlord leads the first round; the first
/// peasant sits after the landlord in turn order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Seat {
    Landlord = 0,
    FirstPeasant = 1,
    SecondPeasant = 2,
}

impl Seat {
    pub const LOOP: [Seat; 3] = [Seat::Landlord, Seat::FirstPeasant, Seat::SecondPeasant];

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Seat::Landlord),
            1 => Some(Seat::FirstPeasant),
            2 => Some(Seat::SecondPeasant),
            _ => None,
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn next(self) -> Seat {
        match self {
            Seat::Landlord => Seat::FirstPeasant,
            Seat::FirstPeasant => Seat::SecondPeasant,
            Seat::SecondPeasant => Seat::Landlord,
        }
    }

    pub const fn is_peasant(self) -> bool {
        !matches!(self, Seat::Landlord)
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Seat::Landlord => "Landlord",
            Seat::FirstPeasant => "First Peasant",
            Seat::SecondPeasant => "Second Peasant",
        };
        f.write_str(label)
    }
}
