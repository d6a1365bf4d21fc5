use anchor_lang::prelude::*;

use crate::constants::VESTING_SEED;
use crate::error::YieldTokenError;
use crate::state::{TokenGrant, TokenVesting};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct GrantClaim {
    pub months_vested: u16,
    pub amount: u64,
}

pub fn calculate_grant_claim(ctx: Context<VestingQuote>) -> Result<GrantClaim> {
    let vesting = &ctx.accounts.vesting;
    let grant = vesting.grant.ok_or(YieldTokenError::NoGrant)?;
    let now = Clock::get()?.unix_timestamp;

    let quote = grant_quote(vesting.beneficiary, &grant, now)?;
    let claim = GrantClaim {
        months_vested: quote.months_vested,
        amount: quote.vested_claimable,
    };
    emit!(quote);
    Ok(claim)
}

/// Vested units plus the collectable tranche; yield is reported by the ledger.
pub fn get_claimable_amount(ctx: Context<VestingQuote>) -> Result<u64> {
    let vesting = &ctx.accounts.vesting;
    let Some(grant) = vesting.grant else {
        return Ok(0);
    };
    let now = Clock::get()?.unix_timestamp;

    let quote = grant_quote(vesting.beneficiary, &grant, now)?;
    let claimable = quote.claimable_amount;
    emit!(quote);
    Ok(claimable)
}

pub fn token_grant(ctx: Context<VestingQuote>) -> Result<Option<TokenGrant>> {
    Ok(ctx.accounts.vesting.grant)
}

fn grant_quote(
    beneficiary: Pubkey,
    grant: &TokenGrant,
    now: i64,
) -> std::result::Result<GrantQuote, YieldTokenError> {
    let (months_vested, vested_claimable) = grant.calculate_claim(now)?;
    Ok(GrantQuote {
        beneficiary,
        months_vested,
        vested_claimable,
        initial_claimable: grant.collectable_initial(now).unwrap_or(0),
        claimable_amount: grant.claimable_amount(now)?,
        total_claimed: grant.total_claimed,
        total_amount: grant.total_amount,
    })
}

#[derive(Accounts)]
pub struct VestingQuote<'info> {
    #[account(
        seeds = [
            VESTING_SEED,
            vesting.grantor.as_ref(),
            vesting.beneficiary.as_ref()
        ],
        bump = vesting.bump
    )]
    pub vesting: Account<'info, TokenVesting>,
}

#[event]
pub struct GrantQuote {
    pub beneficiary: Pubkey,
    pub months_vested: u16,
    pub vested_claimable: u64,
    pub initial_claimable: u64,
    /// `vested_claimable + initial_claimable`, as returned by
    /// `get_claimable_amount`.
    pub claimable_amount: u64,
    pub total_claimed: u64,
    pub total_amount: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SECONDS_PER_MONTH;

    const START: i64 = 1_767_225_600;

    #[test]
    fn quote_total_matches_its_parts() {
        let beneficiary = Pubkey::new_unique();
        let grant = TokenGrant::new(START, 1_000, 10, 2, 100).unwrap();
        let now = START + 3 * SECONDS_PER_MONTH;

        let quote = grant_quote(beneficiary, &grant, now).unwrap();
        assert_eq!(quote.months_vested, 3);
        assert_eq!(quote.vested_claimable, 270);
        assert_eq!(quote.initial_claimable, 100);
        assert_eq!(quote.claimable_amount, 370);
        assert_eq!(quote.claimable_amount, grant.claimable_amount(now).unwrap());
    }

    #[test]
    fn quote_before_start_is_empty() {
        let grant = TokenGrant::new(START, 1_000, 10, 2, 100).unwrap();
        let quote = grant_quote(Pubkey::new_unique(), &grant, START - 1).unwrap();
        assert_eq!(quote.vested_claimable, 0);
        assert_eq!(quote.initial_claimable, 0);
        assert_eq!(quote.claimable_amount, 0);
    }
}
