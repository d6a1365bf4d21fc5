pub mod initialize_ledger;
pub mod open_holding;
pub mod transfer;
pub mod approve;
pub mod transfer_from;
pub mod distribute_yield;
pub mod claim_yield_for;
pub mod set_distribution_authority;
pub mod ledger_quotes;

pub mod initialize_vesting;
pub mod add_token_grant;
pub mod remove_token_grant;
pub mod claim_vested_tokens;
pub mod collect_initially_claimable_amount;
pub mod collect_vesting_yield;
pub mod claim_vesting;
pub mod vesting_quotes;

pub mod initialize_lock_vault;
pub mod create_lock;
pub mod claim_lock;
pub mod update_lock_expiry;
pub mod update_min_lock_duration;
pub mod update_min_lock_amount;
pub mod collect_lock_yield;
pub mod get_user_lock_info;

pub use initialize_ledger::*;
pub use open_holding::*;
pub use transfer::*;
pub use approve::*;
pub use transfer_from::*;
pub use distribute_yield::*;
pub use claim_yield_for::*;
pub use set_distribution_authority::*;
pub use ledger_quotes::*;

pub use initialize_vesting::*;
pub use add_token_grant::*;
pub use remove_token_grant::*;
pub use claim_vested_tokens::*;
pub use collect_initially_claimable_amount::*;
pub use collect_vesting_yield::*;
pub use claim_vesting::*;
pub use vesting_quotes::*;

pub use initialize_lock_vault::*;
pub use create_lock::*;
pub use claim_lock::*;
pub use update_lock_expiry::*;
pub use update_min_lock_duration::*;
pub use update_min_lock_amount::*;
pub use collect_lock_yield::*;
pub use get_user_lock_info::*;
