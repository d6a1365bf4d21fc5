use anchor_lang::prelude::*;

use crate::error::YieldTokenError;
use crate::instructions::ClaimVesting;
use crate::utils::escrow;

pub fn collect_vesting_yield(mut ctx: Context<ClaimVesting>) -> Result<()> {
    let accounts = &mut ctx.accounts;
    require_keys_eq!(
        accounts.beneficiary.key(),
        accounts.vesting.beneficiary,
        YieldTokenError::UnauthorizedBeneficiary
    );

    let amount = escrow::collect_yield(
        &mut accounts.ledger,
        &mut accounts.escrow,
        &mut accounts.unclaimed_holding,
        &mut accounts.beneficiary_holding,
    )?;

    msg!("collect_vesting_yield: beneficiary={} amount={}", accounts.vesting.beneficiary, amount);
    emit!(YieldCollected {
        beneficiary: accounts.vesting.beneficiary,
        amount,
    });
    Ok(())
}

#[event]
pub struct YieldCollected {
    pub beneficiary: Pubkey,
    pub amount: u64,
}
