use anchor_lang::prelude::*;

use crate::constants::{HOLDING_SEED, LEDGER_SEED};
use crate::state::{Holding, Ledger};

pub fn balance_of(ctx: Context<HoldingQuote>) -> Result<u64> {
    let quote = build_quote(&ctx.accounts.ledger, &ctx.accounts.holding)?;
    let balance = quote.balance;
    emit!(quote);
    Ok(balance)
}

pub fn unclaimed_yield_of(ctx: Context<HoldingQuote>) -> Result<u64> {
    let quote = build_quote(&ctx.accounts.ledger, &ctx.accounts.holding)?;
    let unclaimed = quote.unclaimed_yield;
    emit!(quote);
    Ok(unclaimed)
}

fn build_quote(ledger: &Ledger, holding: &Holding) -> Result<BalanceQuote> {
    Ok(BalanceQuote {
        owner: holding.owner,
        balance: holding.balance,
        unclaimed_yield: holding.pending_yield(ledger.global_index)?,
        global_index: ledger.global_index,
    })
}

#[derive(Accounts)]
pub struct HoldingQuote<'info> {
    #[account(seeds = [LEDGER_SEED], bump = ledger.bump)]
    pub ledger: Account<'info, Ledger>,

    #[account(seeds = [HOLDING_SEED, holding.owner.as_ref()], bump = holding.bump)]
    pub holding: Account<'info, Holding>,
}

#[event]
pub struct BalanceQuote {
    pub owner: Pubkey,
    pub balance: u64,
    pub unclaimed_yield: u64,
    pub global_index: u128,
}
