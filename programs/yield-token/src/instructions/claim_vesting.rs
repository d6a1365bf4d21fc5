use anchor_lang::prelude::*;

use crate::constants::{HOLDING_SEED, LEDGER_SEED, UNCLAIMED_YIELD_ACCOUNT, VESTING_SEED};
use crate::error::YieldTokenError;
use crate::state::{Holding, Ledger, TokenVesting};
use crate::utils::escrow;

/// Pays everything available now: vested units, the initial tranche once
/// started, and the yield earned by the escrow.
pub fn claim_vesting(mut ctx: Context<ClaimVesting>) -> Result<()> {
    let accounts = &mut ctx.accounts;
    require_keys_eq!(
        accounts.beneficiary.key(),
        accounts.vesting.beneficiary,
        YieldTokenError::UnauthorizedBeneficiary
    );
    let now = Clock::get()?.unix_timestamp;
    let payout = escrow::claim_all(
        &mut accounts.ledger,
        &mut accounts.vesting,
        &mut accounts.escrow,
        &mut accounts.unclaimed_holding,
        &mut accounts.beneficiary_holding,
        now,
    )?;

    emit!(TokensClaimed {
        beneficiary: accounts.vesting.beneficiary,
        vested_amount: payout.vested,
        initial_amount: payout.initial,
        yield_amount: payout.yield_amount,
    });
    Ok(())
}

/// Beneficiary-signed access to a grant's escrow and the unclaimed sink.
#[derive(Accounts)]
pub struct ClaimVesting<'info> {
    #[account(mut, seeds = [LEDGER_SEED], bump = ledger.bump)]
    pub ledger: Account<'info, Ledger>,

    #[account(
        mut,
        seeds = [
            VESTING_SEED,
            vesting.grantor.as_ref(),
            beneficiary.key().as_ref()
        ],
        bump = vesting.bump
    )]
    pub vesting: Account<'info, TokenVesting>,

    #[account(
        mut,
        seeds = [HOLDING_SEED, vesting.key().as_ref()],
        bump = escrow.bump
    )]
    pub escrow: Account<'info, Holding>,

    #[account(
        mut,
        seeds = [HOLDING_SEED, beneficiary.key().as_ref()],
        bump = beneficiary_holding.bump
    )]
    pub beneficiary_holding: Account<'info, Holding>,

    #[account(
        mut,
        seeds = [HOLDING_SEED, UNCLAIMED_YIELD_ACCOUNT.as_ref()],
        bump = unclaimed_holding.bump
    )]
    pub unclaimed_holding: Account<'info, Holding>,

    pub beneficiary: Signer<'info>,
}

#[event]
pub struct TokensClaimed {
    pub beneficiary: Pubkey,
    pub vested_amount: u64,
    pub initial_amount: u64,
    pub yield_amount: u64,
}
