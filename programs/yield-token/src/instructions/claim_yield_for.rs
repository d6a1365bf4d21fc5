use anchor_lang::prelude::*;

use crate::constants::{HOLDING_SEED, LEDGER_SEED, UNCLAIMED_YIELD_ACCOUNT};
use crate::state::{Holding, Ledger};
use crate::utils::settlement;

/// Anyone may pay out a holding's yield; it only ever grows the target.
/// Escrow holdings are refused: their yield goes to the beneficiary.
pub fn claim_yield_for(mut ctx: Context<ClaimYieldFor>) -> Result<()> {
    let accounts = &mut ctx.accounts;
    let amount = settlement::claim_yield(
        &mut accounts.ledger,
        &mut accounts.holding,
        &mut accounts.unclaimed_holding,
    )?;

    msg!("claim_yield_for: owner={} amount={}", accounts.holding.owner, amount);
    emit!(YieldClaimed {
        owner: accounts.holding.owner,
        amount,
        global_index: accounts.ledger.global_index,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct ClaimYieldFor<'info> {
    #[account(mut, seeds = [LEDGER_SEED], bump = ledger.bump)]
    pub ledger: Account<'info, Ledger>,

    #[account(
        mut,
        seeds = [HOLDING_SEED, holding.owner.as_ref()],
        bump = holding.bump
    )]
    pub holding: Account<'info, Holding>,

    #[account(
        mut,
        seeds = [HOLDING_SEED, UNCLAIMED_YIELD_ACCOUNT.as_ref()],
        bump = unclaimed_holding.bump
    )]
    pub unclaimed_holding: Account<'info, Holding>,
}

#[event]
pub struct YieldClaimed {
    pub owner: Pubkey,
    pub amount: u64,
    pub global_index: u128,
}
