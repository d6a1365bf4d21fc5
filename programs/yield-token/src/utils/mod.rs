pub mod escrow;
pub mod math;
pub mod settlement;
pub mod time;
