//! Yield-bearing token ledger with vesting grants and time locks.
//!
//! Yield is spread over holders through a global index; each holding settles
//! lazily against it. Vesting grants and time locks keep their principal in
//! escrow holdings that earn yield like any other balance.

use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

#[cfg(test)]
pub mod test;

pub use instructions::*;
pub use state::*;

declare_id!("EAVsMhn8baoFx7LWqVAeTt94ADMXoZLrzuiTgkP2jvjC");

#[program]
pub mod yield_token {
    use super::*;

    // ---- ledger ----

    pub fn initialize_ledger(
        ctx: Context<InitializeLedger>,
        total_supply: u64,
        undistributed_yield: u64,
        permanent_exclusions: Vec<Pubkey>,
    ) -> Result<()> {
        instructions::initialize_ledger(ctx, total_supply, undistributed_yield, permanent_exclusions)
    }

    pub fn open_holding(ctx: Context<OpenHolding>, owner: Pubkey) -> Result<()> {
        instructions::open_holding(ctx, owner)
    }

    pub fn transfer(ctx: Context<TransferTokens>, amount: u64) -> Result<()> {
        instructions::transfer(ctx, amount)
    }

    pub fn approve(ctx: Context<Approve>, spender: Pubkey, amount: u64) -> Result<()> {
        instructions::approve(ctx, spender, amount)
    }

    pub fn transfer_from(ctx: Context<TransferFrom>, amount: u64) -> Result<()> {
        instructions::transfer_from(ctx, amount)
    }

    pub fn distribute_yield<'info>(
        ctx: Context<'_, '_, 'info, 'info, DistributeYield<'info>>,
        amount: u64,
        excluded: Vec<Pubkey>,
    ) -> Result<()> {
        instructions::distribute_yield(ctx, amount, excluded)
    }

    pub fn claim_yield_for(ctx: Context<ClaimYieldFor>) -> Result<()> {
        instructions::claim_yield_for(ctx)
    }

    pub fn set_distribution_authority(
        ctx: Context<SetDistributionAuthority>,
        new_authority: Pubkey,
    ) -> Result<()> {
        instructions::set_distribution_authority(ctx, new_authority)
    }

    pub fn balance_of(ctx: Context<HoldingQuote>) -> Result<u64> {
        instructions::balance_of(ctx)
    }

    pub fn unclaimed_yield_of(ctx: Context<HoldingQuote>) -> Result<u64> {
        instructions::unclaimed_yield_of(ctx)
    }

    // ---- vesting ----

    pub fn initialize_vesting(ctx: Context<InitializeVesting>, beneficiary: Pubkey) -> Result<()> {
        instructions::initialize_vesting(ctx, beneficiary)
    }

    pub fn add_token_grant(
        ctx: Context<AddTokenGrant>,
        start_time: i64,
        amount: u64,
        duration_months: u16,
        cliff_months: u16,
        initially_claimable_amount: u64,
    ) -> Result<()> {
        instructions::add_token_grant(
            ctx,
            start_time,
            amount,
            duration_months,
            cliff_months,
            initially_claimable_amount,
        )
    }

    pub fn remove_token_grant(ctx: Context<RemoveTokenGrant>) -> Result<()> {
        instructions::remove_token_grant(ctx)
    }

    pub fn claim_vested_tokens(ctx: Context<ClaimGrant>) -> Result<()> {
        instructions::claim_vested_tokens(ctx)
    }

    pub fn collect_initially_claimable_amount(ctx: Context<ClaimGrant>) -> Result<()> {
        instructions::collect_initially_claimable_amount(ctx)
    }

    pub fn collect_vesting_yield(ctx: Context<ClaimVesting>) -> Result<()> {
        instructions::collect_vesting_yield(ctx)
    }

    pub fn claim_vesting(ctx: Context<ClaimVesting>) -> Result<()> {
        instructions::claim_vesting(ctx)
    }

    pub fn calculate_grant_claim(ctx: Context<VestingQuote>) -> Result<GrantClaim> {
        instructions::calculate_grant_claim(ctx)
    }

    pub fn get_claimable_amount(ctx: Context<VestingQuote>) -> Result<u64> {
        instructions::get_claimable_amount(ctx)
    }

    pub fn token_grant(ctx: Context<VestingQuote>) -> Result<Option<TokenGrant>> {
        instructions::token_grant(ctx)
    }

    // ---- time lock ----

    pub fn initialize_lock_vault(
        ctx: Context<InitializeLockVault>,
        min_lock_amount: u64,
        min_lock_duration: i64,
    ) -> Result<()> {
        instructions::initialize_lock_vault(ctx, min_lock_amount, min_lock_duration)
    }

    pub fn create_lock(ctx: Context<CreateLock>, amount: u64, expiry_time: i64) -> Result<()> {
        instructions::create_lock(ctx, amount, expiry_time)
    }

    pub fn claim_lock(ctx: Context<ClaimLock>) -> Result<()> {
        instructions::claim_lock(ctx)
    }

    pub fn update_lock_expiry(ctx: Context<UpdateLockExpiry>, new_expiry_time: i64) -> Result<()> {
        instructions::update_lock_expiry(ctx, new_expiry_time)
    }

    pub fn update_min_lock_duration(ctx: Context<UpdateLockConfig>, seconds: i64) -> Result<()> {
        instructions::update_min_lock_duration(ctx, seconds)
    }

    pub fn update_min_lock_amount(ctx: Context<UpdateLockConfig>, amount: u64) -> Result<()> {
        instructions::update_min_lock_amount(ctx, amount)
    }

    pub fn collect_lock_yield(ctx: Context<CollectLockYield>) -> Result<()> {
        instructions::collect_lock_yield(ctx)
    }

    pub fn get_user_lock_info(ctx: Context<GetUserLockInfo>, user: Pubkey) -> Result<LockInfo> {
        instructions::get_user_lock_info(ctx, user)
    }
}
