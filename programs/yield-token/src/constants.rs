//! Program-wide constants.

use anchor_lang::prelude::*;

/// Fixed-point scale of the global yield index.
pub const INDEX_SCALE: u128 = 1_000_000_000_000_000_000;

/// Owner key of the sink holding yield that has not been distributed yet.
/// Nobody can sign for it; it only moves through `distribute_yield`.
pub const UNDISTRIBUTED_YIELD_ACCOUNT: Pubkey = Pubkey::new_from_array([
    0xd0, 0xd1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, //
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1,
]);

/// Owner key of the sink holding distributed yield nobody has claimed yet.
pub const UNCLAIMED_YIELD_ACCOUNT: Pubkey = Pubkey::new_from_array([
    0xd0, 0xd1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, //
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2,
]);

/// Max owners excluded from yield for the lifetime of the ledger
/// (in addition to the two reserve sinks).
pub const MAX_PERMANENT_EXCLUSIONS: usize = 8;

/// Max holdings excluded from a single distribution.
pub const MAX_DISTRIBUTION_EXCLUSIONS: usize = 16;

/// Vesting month length: 365 days / 12.
pub const SECONDS_PER_MONTH: i64 = 2_628_000;

/// Seconds per day (UTC).
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Minimum lock duration a fresh vault starts with.
pub const DEFAULT_MIN_LOCK_DURATION: i64 = 90 * SECONDS_PER_DAY;

pub const LEDGER_SEED: &[u8] = b"ledger";
pub const HOLDING_SEED: &[u8] = b"holding";
pub const ALLOWANCE_SEED: &[u8] = b"allowance";
pub const VESTING_SEED: &[u8] = b"vesting";
pub const LOCK_VAULT_SEED: &[u8] = b"lock_vault";
pub const LOCK_SEED: &[u8] = b"lock";

/// True for the two reserve sink owners.
pub fn is_reserve(owner: &Pubkey) -> bool {
    *owner == UNDISTRIBUTED_YIELD_ACCOUNT || *owner == UNCLAIMED_YIELD_ACCOUNT
}
