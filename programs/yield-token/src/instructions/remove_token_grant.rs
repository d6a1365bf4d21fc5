use anchor_lang::prelude::*;

use crate::constants::{HOLDING_SEED, LEDGER_SEED, UNCLAIMED_YIELD_ACCOUNT, VESTING_SEED};
use crate::error::YieldTokenError;
use crate::state::{Holding, Ledger, TokenVesting};
use crate::utils::escrow;

/// Pays out whatever the beneficiary is owed, returns unvested principal to
/// the grantor and frees the grant slot.
pub fn remove_token_grant(mut ctx: Context<RemoveTokenGrant>) -> Result<()> {
    let accounts = &mut ctx.accounts;
    require_keys_eq!(
        accounts.grantor.key(),
        accounts.vesting.grantor,
        YieldTokenError::UnauthorizedGrantor
    );
    let now = Clock::get()?.unix_timestamp;
    let removal = escrow::remove_grant(
        &mut accounts.ledger,
        &mut accounts.vesting,
        &mut accounts.escrow,
        &mut accounts.unclaimed_holding,
        &mut accounts.beneficiary_holding,
        &mut accounts.grantor_holding,
        now,
    )?;

    emit!(GrantRemoved {
        beneficiary: accounts.vesting.beneficiary,
        amount_vested: removal.amount_vested,
        amount_not_vested: removal.amount_not_vested,
        yield_paid: removal.yield_paid,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct RemoveTokenGrant<'info> {
    #[account(mut, seeds = [LEDGER_SEED], bump = ledger.bump)]
    pub ledger: Account<'info, Ledger>,

    #[account(
        mut,
        seeds = [
            VESTING_SEED,
            vesting.grantor.as_ref(),
            vesting.beneficiary.as_ref()
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
        seeds = [HOLDING_SEED, vesting.beneficiary.as_ref()],
        bump = beneficiary_holding.bump
    )]
    pub beneficiary_holding: Account<'info, Holding>,

    #[account(
        mut,
        seeds = [HOLDING_SEED, grantor.key().as_ref()],
        bump = grantor_holding.bump
    )]
    pub grantor_holding: Account<'info, Holding>,

    #[account(
        mut,
        seeds = [HOLDING_SEED, UNCLAIMED_YIELD_ACCOUNT.as_ref()],
        bump = unclaimed_holding.bump
    )]
    pub unclaimed_holding: Account<'info, Holding>,

    pub grantor: Signer<'info>,
}

#[event]
pub struct GrantRemoved {
    pub beneficiary: Pubkey,
    pub amount_vested: u64,
    pub amount_not_vested: u64,
    pub yield_paid: u64,
}
