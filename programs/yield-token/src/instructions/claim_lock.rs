use anchor_lang::prelude::*;

use crate::constants::{HOLDING_SEED, LEDGER_SEED, LOCK_SEED, LOCK_VAULT_SEED};
use crate::state::{Holding, Ledger, LockVault, UserLock};
use crate::utils::escrow;

pub fn claim_lock(mut ctx: Context<ClaimLock>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let accounts = &mut ctx.accounts;

    let amount = escrow::release_lock(
        &mut accounts.ledger,
        &mut accounts.vault,
        &mut accounts.user_lock,
        &mut accounts.escrow,
        &mut accounts.user_holding,
        now,
    )?;

    emit!(LockClaimed {
        user: accounts.user.key(),
        amount,
    });
    Ok(())
}

/// User-signed access to their lock slot and its escrow.
#[derive(Accounts)]
pub struct ClaimLock<'info> {
    #[account(mut, seeds = [LEDGER_SEED], bump = ledger.bump)]
    pub ledger: Account<'info, Ledger>,

    #[account(mut, seeds = [LOCK_VAULT_SEED], bump = vault.bump)]
    pub vault: Account<'info, LockVault>,

    #[account(
        mut,
        seeds = [LOCK_SEED, user.key().as_ref()],
        bump = user_lock.bump
    )]
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

    pub user: Signer<'info>,
}

#[event]
pub struct LockClaimed {
    pub user: Pubkey,
    pub amount: u64,
}
