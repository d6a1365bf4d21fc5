use anchor_lang::prelude::*;

use crate::constants::{HOLDING_SEED, LEDGER_SEED, VESTING_SEED};
use crate::error::YieldTokenError;
use crate::state::{Holding, Ledger, TokenVesting};
use crate::utils::escrow;

pub fn add_token_grant(
    mut ctx: Context<AddTokenGrant>,
    start_time: i64,
    amount: u64,
    duration_months: u16,
    cliff_months: u16,
    initially_claimable_amount: u64,
) -> Result<()> {
    let accounts = &mut ctx.accounts;
    require_keys_eq!(
        accounts.grantor.key(),
        accounts.vesting.grantor,
        YieldTokenError::UnauthorizedGrantor
    );

    let now = Clock::get()?.unix_timestamp;
    let grant = escrow::add_grant(
        &mut accounts.ledger,
        &mut accounts.vesting,
        &mut accounts.grantor_holding,
        &mut accounts.escrow,
        now,
        start_time,
        amount,
        duration_months,
        cliff_months,
        initially_claimable_amount,
    )?;

    emit!(GrantAdded {
        beneficiary: accounts.vesting.beneficiary,
        start_time: grant.start_time,
        amount,
        duration_months,
        cliff_months,
        initially_claimable_amount,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct AddTokenGrant<'info> {
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
        seeds = [HOLDING_SEED, grantor.key().as_ref()],
        bump = grantor_holding.bump
    )]
    pub grantor_holding: Account<'info, Holding>,

    pub grantor: Signer<'info>,
}

#[event]
pub struct GrantAdded {
    pub beneficiary: Pubkey,
    pub start_time: i64,
    pub amount: u64,
    pub duration_months: u16,
    pub cliff_months: u16,
    pub initially_claimable_amount: u64,
}
