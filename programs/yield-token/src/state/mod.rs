pub mod allowance;
pub mod holding;
pub mod ledger;
pub mod lock;
pub mod vesting;

pub use allowance::*;
pub use holding::*;
pub use ledger::*;
pub use lock::*;
pub use vesting::*;
