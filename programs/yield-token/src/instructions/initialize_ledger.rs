use anchor_lang::prelude::*;

use crate::constants::{
    HOLDING_SEED, LEDGER_SEED, UNCLAIMED_YIELD_ACCOUNT, UNDISTRIBUTED_YIELD_ACCOUNT,
};
use crate::error::YieldTokenError;
use crate::state::{validate_exclusions, Holding, Ledger};

pub fn initialize_ledger(
    ctx: Context<InitializeLedger>,
    total_supply: u64,
    undistributed_yield: u64,
    permanent_exclusions: Vec<Pubkey>,
) -> Result<()> {
    require!(total_supply > 0, YieldTokenError::InvalidAmount);
    require!(
        undistributed_yield <= total_supply,
        YieldTokenError::InvalidAmount
    );
    validate_exclusions(&permanent_exclusions)?;

    let holder = ctx.accounts.initial_holder.key();
    require!(holder != Pubkey::default(), YieldTokenError::InvalidPubkey);
    require!(
        holder != UNDISTRIBUTED_YIELD_ACCOUNT && holder != UNCLAIMED_YIELD_ACCOUNT,
        YieldTokenError::ReservedAccount
    );

    let circulating = total_supply - undistributed_yield;

    let ledger = &mut ctx.accounts.ledger;
    ledger.authority = ctx.accounts.authority.key();
    ledger.total_supply = total_supply;
    ledger.global_index = 0;
    ledger.total_distributed = 0;
    ledger.distribution_count = 0;
    ledger.permanent_exclusions = permanent_exclusions;
    ledger.bump = ctx.bumps.ledger;

    let holder_exempt = ledger.is_yield_exempt(&holder);
    ledger.exempt_supply = if holder_exempt {
        total_supply
    } else {
        undistributed_yield
    };

    let mut undistributed = Holding::new(
        UNDISTRIBUTED_YIELD_ACCOUNT,
        0,
        true,
        ctx.bumps.undistributed_holding,
    );
    undistributed.balance = undistributed_yield;
    ctx.accounts.undistributed_holding.set_inner(undistributed);

    ctx.accounts.unclaimed_holding.set_inner(Holding::new(
        UNCLAIMED_YIELD_ACCOUNT,
        0,
        true,
        ctx.bumps.unclaimed_holding,
    ));

    let mut initial = Holding::new(holder, 0, holder_exempt, ctx.bumps.holder_holding);
    initial.balance = circulating;
    ctx.accounts.holder_holding.set_inner(initial);

    emit!(LedgerInitialized {
        authority: ctx.accounts.authority.key(),
        initial_holder: holder,
        total_supply,
        undistributed_yield,
        permanent_exclusions: ctx.accounts.ledger.permanent_exclusions.clone(),
    });

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeLedger<'info> {
    #[account(
        init,
        payer = authority,
        space = 8 + Ledger::SIZE,
        seeds = [LEDGER_SEED],
        bump
    )]
    pub ledger: Account<'info, Ledger>,

    #[account(
        init,
        payer = authority,
        space = 8 + Holding::SIZE,
        seeds = [HOLDING_SEED, UNDISTRIBUTED_YIELD_ACCOUNT.as_ref()],
        bump
    )]
    pub undistributed_holding: Account<'info, Holding>,

    #[account(
        init,
        payer = authority,
        space = 8 + Holding::SIZE,
        seeds = [HOLDING_SEED, UNCLAIMED_YIELD_ACCOUNT.as_ref()],
        bump
    )]
    pub unclaimed_holding: Account<'info, Holding>,

    /// CHECK: any address may receive the circulating supply.
    pub initial_holder: UncheckedAccount<'info>,

    #[account(
        init,
        payer = authority,
        space = 8 + Holding::SIZE,
        seeds = [HOLDING_SEED, initial_holder.key().as_ref()],
        bump
    )]
    pub holder_holding: Account<'info, Holding>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct LedgerInitialized {
    pub authority: Pubkey,
    pub initial_holder: Pubkey,
    pub total_supply: u64,
    pub undistributed_yield: u64,
    pub permanent_exclusions: Vec<Pubkey>,
}
