use anchor_lang::prelude::*;

use crate::constants::{is_reserve, LEDGER_SEED};
use crate::error::YieldTokenError;
use crate::state::Ledger;

pub fn set_distribution_authority(
    ctx: Context<SetDistributionAuthority>,
    new_authority: Pubkey,
) -> Result<()> {
    require!(new_authority != Pubkey::default(), YieldTokenError::InvalidPubkey);
    require!(!is_reserve(&new_authority), YieldTokenError::ReservedAccount);

    let ledger_key = ctx.accounts.ledger.key();
    let ledger = &mut ctx.accounts.ledger;
    require_keys_eq!(
        ctx.accounts.authority.key(),
        ledger.authority,
        YieldTokenError::UnauthorizedAuthority
    );
    require_keys_neq!(new_authority, ledger_key, YieldTokenError::InvalidPubkey);

    let old = ledger.authority;
    ledger.authority = new_authority;

    emit!(DistributionAuthoritySet {
        old_authority: old,
        new_authority,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct SetDistributionAuthority<'info> {
    #[account(mut, seeds = [LEDGER_SEED], bump = ledger.bump)]
    pub ledger: Account<'info, Ledger>,

    pub authority: Signer<'info>,
}

#[event]
pub struct DistributionAuthoritySet {
    pub old_authority: Pubkey,
    pub new_authority: Pubkey,
}
