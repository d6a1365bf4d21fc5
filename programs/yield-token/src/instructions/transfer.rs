use anchor_lang::prelude::*;

use crate::constants::{HOLDING_SEED, LEDGER_SEED};
use crate::error::YieldTokenError;
use crate::state::{Holding, Ledger};
use crate::utils::settlement;

pub fn transfer(mut ctx: Context<TransferTokens>, amount: u64) -> Result<()> {
    require!(amount > 0, YieldTokenError::InvalidAmount);

    let accounts = &mut ctx.accounts;
    settlement::transfer(&mut accounts.ledger, &mut accounts.from, &mut accounts.to, amount)?;

    emit!(Transferred {
        from: accounts.from.owner,
        to: accounts.to.owner,
        amount,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct TransferTokens<'info> {
    #[account(mut, seeds = [LEDGER_SEED], bump = ledger.bump)]
    pub ledger: Account<'info, Ledger>,

    #[account(
        mut,
        seeds = [HOLDING_SEED, owner.key().as_ref()],
        bump = from.bump
    )]
    pub from: Account<'info, Holding>,

    #[account(
        mut,
        seeds = [HOLDING_SEED, to.owner.as_ref()],
        bump = to.bump
    )]
    pub to: Account<'info, Holding>,

    pub owner: Signer<'info>,
}

#[event]
pub struct Transferred {
    pub from: Pubkey,
    pub to: Pubkey,
    pub amount: u64,
}
