use anchor_lang::prelude::*;

use crate::constants::{HOLDING_SEED, LEDGER_SEED, LOCK_SEED, UNCLAIMED_YIELD_ACCOUNT};
use crate::state::{Holding, Ledger, UserLock};
use crate::utils::escrow;

pub fn collect_lock_yield(mut ctx: Context<CollectLockYield>) -> Result<()> {
    let accounts = &mut ctx.accounts;
    let amount = escrow::collect_yield(
        &mut accounts.ledger,
        &mut accounts.escrow,
        &mut accounts.unclaimed_holding,
        &mut accounts.user_holding,
    )?;

    msg!("collect_lock_yield: user={} amount={}", accounts.user.key(), amount);
    emit!(LockYieldCollected {
        user: accounts.user.key(),
        amount,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct CollectLockYield<'info> {
    #[account(mut, seeds = [LEDGER_SEED], bump = ledger.bump)]
    pub ledger: Account<'info, Ledger>,

    #[account(seeds = [LOCK_SEED, user.key().as_ref()], bump = user_lock.bump)]
    pub user_lock: Account<'info, UserLock>,

    #[account(
        mut,
        seeds = [HOLDING_SEED, user_lock.key().as_ref()],
        bump = escrow.bump
    )]
    pub escrow: Account<'info, Holding>,

    #[account(
        mut,
        seeds = [HOLDING_SEED, user.key().as_ref()],
        bump = user_holding.bump
    )]
    pub user_holding: Account<'info, Holding>,

    #[account(
        mut,
        seeds = [HOLDING_SEED, UNCLAIMED_YIELD_ACCOUNT.as_ref()],
        bump = unclaimed_holding.bump
    )]
    pub unclaimed_holding: Account<'info, Holding>,

    pub user: Signer<'info>,
}

#[event]
pub struct LockYieldCollected {
    pub user: Pubkey,
    pub amount: u64,
}
