use anchor_lang::prelude::*;

use crate::constants::{ALLOWANCE_SEED, HOLDING_SEED, LEDGER_SEED};
use crate::error::YieldTokenError;
use crate::state::{Allowance, Holding, Ledger};
use crate::utils::settlement;

pub fn transfer_from(mut ctx: Context<TransferFrom>, amount: u64) -> Result<()> {
    require!(amount > 0, YieldTokenError::InvalidAmount);
    require!(
        ctx.accounts.allowance.amount >= amount,
        YieldTokenError::InsufficientAllowance
    );

    let accounts = &mut ctx.accounts;
    settlement::transfer(&mut accounts.ledger, &mut accounts.from, &mut accounts.to, amount)?;
    accounts.allowance.spend(amount)?;

    emit!(TransferredFrom {
        spender: accounts.spender.key(),
        from: accounts.from.owner,
        to: accounts.to.owner,
        amount,
        remaining_allowance: accounts.allowance.amount,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct TransferFrom<'info> {
    #[account(mut, seeds = [LEDGER_SEED], bump = ledger.bump)]
    pub ledger: Account<'info, Ledger>,

    #[account(
        mut,
        seeds = [HOLDING_SEED, from.owner.as_ref()],
        bump = from.bump
    )]
    pub from: Account<'info, Holding>,

    #[account(
        mut,
        seeds = [HOLDING_SEED, to.owner.as_ref()],
        bump = to.bump
    )]
    pub to: Account<'info, Holding>,

    #[account(
        mut,
        seeds = [ALLOWANCE_SEED, from.owner.as_ref(), spender.key().as_ref()],
        bump = allowance.bump
    )]
    pub allowance: Account<'info, Allowance>,

    pub spender: Signer<'info>,
}

#[event]
pub struct TransferredFrom {
    pub spender: Pubkey,
    pub from: Pubkey,
    pub to: Pubkey,
    pub amount: u64,
    pub remaining_allowance: u64,
}
