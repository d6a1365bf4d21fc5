use anchor_lang::prelude::*;

use crate::constants::{is_reserve, HOLDING_SEED, LEDGER_SEED, VESTING_SEED};
use crate::error::YieldTokenError;
use crate::state::{Holding, Ledger, TokenVesting};
use crate::utils::settlement;

pub fn initialize_vesting(ctx: Context<InitializeVesting>, beneficiary: Pubkey) -> Result<()> {
    require!(beneficiary != Pubkey::default(), YieldTokenError::InvalidPubkey);
    require!(!is_reserve(&beneficiary), YieldTokenError::ReservedAccount);
    require_keys_neq!(
        beneficiary,
        ctx.accounts.grantor.key(),
        YieldTokenError::InvalidPubkey
    );

    let vesting_key = ctx.accounts.vesting.key();
    let vesting = &mut ctx.accounts.vesting;
    vesting.grantor = ctx.accounts.grantor.key();
    vesting.beneficiary = beneficiary;
    vesting.grant = None;
    vesting.bump = ctx.bumps.vesting;

    // the escrow holding may already have been opened by anyone
    settlement::adopt_escrow(
        &ctx.accounts.ledger,
        &mut ctx.accounts.escrow,
        vesting_key,
        ctx.bumps.escrow,
    );

    emit!(VestingInitialized {
        vesting: vesting_key,
        grantor: ctx.accounts.grantor.key(),
        beneficiary,
    });
    Ok(())
}

#[derive(Accounts)]
#[instruction(beneficiary: Pubkey)]
pub struct InitializeVesting<'info> {
    #[account(seeds = [LEDGER_SEED], bump = ledger.bump)]
    pub ledger: Account<'info, Ledger>,

    #[account(
        init,
        payer = grantor,
        space = 8 + TokenVesting::SIZE,
        seeds = [VESTING_SEED, grantor.key().as_ref(), beneficiary.as_ref()],
        bump
    )]
    pub vesting: Account<'info, TokenVesting>,

    #[account(
        init_if_needed,
        payer = grantor,
        space = 8 + Holding::SIZE,
        seeds = [HOLDING_SEED, vesting.key().as_ref()],
        bump
    )]
    pub escrow: Account<'info, Holding>,

    #[account(mut)]
    pub grantor: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct VestingInitialized {
    pub vesting: Pubkey,
    pub grantor: Pubkey,
    pub beneficiary: Pubkey,
}
