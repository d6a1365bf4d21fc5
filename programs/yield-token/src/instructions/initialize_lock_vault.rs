use anchor_lang::prelude::*;

use crate::constants::{DEFAULT_MIN_LOCK_DURATION, LOCK_VAULT_SEED};
use crate::error::YieldTokenError;
use crate::state::LockVault;

/// `min_lock_duration == 0` selects the default of 90 days.
pub fn initialize_lock_vault(
    ctx: Context<InitializeLockVault>,
    min_lock_amount: u64,
    min_lock_duration: i64,
) -> Result<()> {
    require!(min_lock_duration >= 0, YieldTokenError::InvalidTimestamp);
    let min_lock_duration = if min_lock_duration == 0 {
        DEFAULT_MIN_LOCK_DURATION
    } else {
        min_lock_duration
    };

    let vault = &mut ctx.accounts.vault;
    vault.operator = ctx.accounts.operator.key();
    vault.min_lock_amount = min_lock_amount;
    vault.min_lock_duration = min_lock_duration;
    vault.total_locked = 0;
    vault.bump = ctx.bumps.vault;

    emit!(LockConfigUpdated {
        operator: vault.operator,
        min_lock_amount,
        min_lock_duration,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct InitializeLockVault<'info> {
    #[account(
        init,
        payer = operator,
        space = 8 + LockVault::SIZE,
        seeds = [LOCK_VAULT_SEED],
        bump
    )]
    pub vault: Account<'info, LockVault>,

    #[account(mut)]
    pub operator: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct LockConfigUpdated {
    pub operator: Pubkey,
    pub min_lock_amount: u64,
    pub min_lock_duration: i64,
}
