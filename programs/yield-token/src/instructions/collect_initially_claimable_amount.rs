use anchor_lang::prelude::*;

use crate::error::YieldTokenError;
use crate::instructions::ClaimGrant;
use crate::utils::escrow;

pub fn collect_initially_claimable_amount(mut ctx: Context<ClaimGrant>) -> Result<()> {
    let accounts = &mut ctx.accounts;
    require_keys_eq!(
        accounts.beneficiary.key(),
        accounts.vesting.beneficiary,
        YieldTokenError::UnauthorizedBeneficiary
    );
    let now = Clock::get()?.unix_timestamp;
    let amount = escrow::collect_initial(
        &mut accounts.ledger,
        &mut accounts.vesting,
        &mut accounts.escrow,
        &mut accounts.beneficiary_holding,
        now,
    )?;

    emit!(InitialGrantTokensClaimed {
        beneficiary: accounts.vesting.beneficiary,
        amount,
    });
    Ok(())
}

#[event]
pub struct InitialGrantTokensClaimed {
    pub beneficiary: Pubkey,
    pub amount: u64,
}
