use anchor_lang::prelude::*;

use crate::constants::{HOLDING_SEED, LEDGER_SEED};
use crate::error::YieldTokenError;
use crate::state::{Holding, Ledger};

pub fn open_holding(ctx: Context<OpenHolding>, owner: Pubkey) -> Result<()> {
    require!(owner != Pubkey::default(), YieldTokenError::InvalidPubkey);

    let ledger = &ctx.accounts.ledger;
    let exempt = ledger.is_yield_exempt(&owner);
    ctx.accounts.holding.set_inner(Holding::new(
        owner,
        ledger.global_index,
        exempt,
        ctx.bumps.holding,
    ));

    emit!(HoldingOpened {
        owner,
        yield_exempt: exempt,
        settled_index: ledger.global_index,
    });
    Ok(())
}

#[derive(Accounts)]
#[instruction(owner: Pubkey)]
pub struct OpenHolding<'info> {
    #[account(seeds = [LEDGER_SEED], bump = ledger.bump)]
    pub ledger: Account<'info, Ledger>,

    #[account(
        init,
        payer = payer,
        space = 8 + Holding::SIZE,
        seeds = [HOLDING_SEED, owner.as_ref()],
        bump
    )]
    pub holding: Account<'info, Holding>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct HoldingOpened {
    pub owner: Pubkey,
    pub yield_exempt: bool,
    pub settled_index: u128,
}
