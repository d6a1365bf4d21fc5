use anchor_lang::prelude::*;

use crate::constants::{HOLDING_SEED, LEDGER_SEED, VESTING_SEED};
use crate::error::YieldTokenError;
use crate::state::{Holding, Ledger, TokenVesting};
use crate::utils::escrow;

pub fn claim_vested_tokens(mut ctx: Context<ClaimGrant>) -> Result<()> {
    let accounts = &mut ctx.accounts;
    require_keys_eq!(
        accounts.beneficiary.key(),
        accounts.vesting.beneficiary,
        YieldTokenError::UnauthorizedBeneficiary
    );
    let now = Clock::get()?.unix_timestamp;
    let amount = escrow::claim_vested(
        &mut accounts.ledger,
        &mut accounts.vesting,
        &mut accounts.escrow,
        &mut accounts.beneficiary_holding,
        now,
    )?;
    let grant = accounts.vesting.grant.unwrap_or_default();

    emit!(GrantTokensClaimed {
        beneficiary: accounts.vesting.beneficiary,
        amount,
        months_claimed: grant.months_claimed,
        total_claimed: grant.total_claimed,
    });
    Ok(())
}

/// Beneficiary-signed access to a grant's escrow.
#[derive(Accounts)]
pub struct ClaimGrant<'info> {
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

    pub beneficiary: Signer<'info>,
}

#[event]
pub struct GrantTokensClaimed {
    pub beneficiary: Pubkey,
    pub amount: u64,
    pub months_claimed: u16,
    pub total_claimed: u64,
}
