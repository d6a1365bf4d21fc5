use anchor_lang::prelude::*;

use crate::constants::{LOCK_SEED, LOCK_VAULT_SEED};
use crate::state::{LockVault, UserLock};
use crate::utils::escrow;

/// Extension only: the new expiry must clear the old one by the minimum
/// lock duration.
pub fn update_lock_expiry(mut ctx: Context<UpdateLockExpiry>, new_expiry_time: i64) -> Result<()> {
    let accounts = &mut ctx.accounts;
    let old_expiry_time =
        escrow::extend_lock(&accounts.vault, &mut accounts.user_lock, new_expiry_time)?;

    emit!(LockExpiryUpdated {
        user: accounts.user_lock.user,
        old_expiry_time,
        new_expiry_time,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct UpdateLockExpiry<'info> {
    #[account(seeds = [LOCK_VAULT_SEED], bump = vault.bump)]
    pub vault: Account<'info, LockVault>,

    #[account(
        mut,
        seeds = [LOCK_SEED, user.key().as_ref()],
        bump = user_lock.bump
    )]
    pub user_lock: Account<'info, UserLock>,

    pub user: Signer<'info>,
}

#[event]
pub struct LockExpiryUpdated {
    pub user: Pubkey,
    pub old_expiry_time: i64,
    pub new_expiry_time: i64,
}
