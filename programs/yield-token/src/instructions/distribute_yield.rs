use anchor_lang::prelude::*;

use crate::constants::{
    HOLDING_SEED, LEDGER_SEED, MAX_DISTRIBUTION_EXCLUSIONS, UNCLAIMED_YIELD_ACCOUNT,
    UNDISTRIBUTED_YIELD_ACCOUNT,
};
use crate::error::YieldTokenError;
use crate::state::{Holding, Ledger};
use crate::utils::settlement;

/// Remaining accounts: one writable holding per `excluded` owner, same order.
pub fn distribute_yield<'info>(
    mut ctx: Context<'_, '_, 'info, 'info, DistributeYield<'info>>,
    amount: u64,
    excluded: Vec<Pubkey>,
) -> Result<()> {
    require_keys_eq!(
        ctx.accounts.authority.key(),
        ctx.accounts.ledger.authority,
        YieldTokenError::UnauthorizedAuthority
    );
    require!(
        excluded.len() <= MAX_DISTRIBUTION_EXCLUSIONS,
        YieldTokenError::TooManyExclusions
    );
    require!(
        excluded.len() == ctx.remaining_accounts.len(),
        YieldTokenError::InvalidExclusionList
    );

    let mut holdings: Vec<Account<'info, Holding>> = Vec::with_capacity(excluded.len());
    for (owner, info) in excluded.iter().zip(ctx.remaining_accounts.iter()) {
        require!(info.is_writable, YieldTokenError::InvalidExclusionList);
        let holding: Account<'info, Holding> = Account::try_from(info)?;
        require_keys_eq!(holding.owner, *owner, YieldTokenError::InvalidHolding);
        holdings.push(holding);
    }

    let accounts = &mut ctx.accounts;
    let outcome = {
        let mut refs: Vec<&mut Holding> = holdings.iter_mut().map(|h| &mut **h).collect();
        settlement::distribute(
            &mut accounts.ledger,
            &mut accounts.undistributed_holding,
            &mut accounts.unclaimed_holding,
            &mut refs,
            amount,
        )?
    };

    // remaining accounts are not persisted by the framework
    for holding in &holdings {
        holding.exit(ctx.program_id)?;
    }

    emit!(YieldDistributed {
        amount,
        excluded,
        eligible_supply: outcome.eligible_supply,
        index_delta: outcome.index_delta,
        global_index: outcome.global_index,
        undistributed_remaining: accounts.undistributed_holding.balance,
        unclaimed_total: accounts.unclaimed_holding.balance,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct DistributeYield<'info> {
    #[account(mut, seeds = [LEDGER_SEED], bump = ledger.bump)]
    pub ledger: Account<'info, Ledger>,

    #[account(
        mut,
        seeds = [HOLDING_SEED, UNDISTRIBUTED_YIELD_ACCOUNT.as_ref()],
        bump = undistributed_holding.bump
    )]
    pub undistributed_holding: Account<'info, Holding>,

    #[account(
        mut,
        seeds = [HOLDING_SEED, UNCLAIMED_YIELD_ACCOUNT.as_ref()],
        bump = unclaimed_holding.bump
    )]
    pub unclaimed_holding: Account<'info, Holding>,

    pub authority: Signer<'info>,
}

#[event]
pub struct YieldDistributed {
    pub amount: u64,
    pub excluded: Vec<Pubkey>,
    pub eligible_supply: u64,
    pub index_delta: u128,
    pub global_index: u128,
    pub undistributed_remaining: u64,
    pub unclaimed_total: u64,
}
