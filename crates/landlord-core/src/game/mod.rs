pub mod round;
pub mod serialization;
