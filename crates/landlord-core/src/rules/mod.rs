pub mod classify;
pub mod compare;
pub mod generate;

pub use classify::classify;
pub use compare::{ComboStrength, beats, strength};
pub use generate::generate;
