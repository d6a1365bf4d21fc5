use anchor_lang::prelude::*;

use crate::error::YieldTokenError;
use crate::instructions::{LockConfigUpdated, UpdateLockConfig};

pub fn update_min_lock_amount(ctx: Context<UpdateLockConfig>, amount: u64) -> Result<()> {
    let vault = &mut ctx.accounts.vault;
    require_keys_eq!(
        ctx.accounts.operator.key(),
        vault.operator,
        YieldTokenError::UnauthorizedOperator
    );
    vault.min_lock_amount = amount;

    emit!(LockConfigUpdated {
        operator: vault.operator,
        min_lock_amount: amount,
        min_lock_duration: vault.min_lock_duration,
    });
    Ok(())
}
