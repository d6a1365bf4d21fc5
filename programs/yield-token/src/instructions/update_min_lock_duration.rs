use anchor_lang::prelude::*;

use crate::constants::LOCK_VAULT_SEED;
use crate::error::YieldTokenError;
use crate::instructions::LockConfigUpdated;
use crate::state::LockVault;

pub fn update_min_lock_duration(ctx: Context<UpdateLockConfig>, seconds: i64) -> Result<()> {
    require!(seconds > 0, YieldTokenError::InvalidTimestamp);

    let vault = &mut ctx.accounts.vault;
    require_keys_eq!(
        ctx.accounts.operator.key(),
        vault.operator,
        YieldTokenError::UnauthorizedOperator
    );
    vault.min_lock_duration = seconds;

    emit!(LockConfigUpdated {
        operator: vault.operator,
        min_lock_amount: vault.min_lock_amount,
        min_lock_duration: seconds,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct UpdateLockConfig<'info> {
    #[account(mut, seeds = [LOCK_VAULT_SEED], bump = vault.bump)]
    pub vault: Account<'info, LockVault>,

    pub operator: Signer<'info>,
}
