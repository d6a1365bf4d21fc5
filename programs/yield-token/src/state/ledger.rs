use anchor_lang::prelude::*;

use crate::constants::{is_reserve, MAX_PERMANENT_EXCLUSIONS};
use crate::error::YieldTokenError;

/// Global distribution state PDA.
#[account]
#[derive(Debug, Default)]
pub struct Ledger {
    /// May call `distribute_yield` and hand the role over.
    pub authority: Pubkey,
    /// Fixed at initialization; conserved by every instruction.
    pub total_supply: u64,
    /// Sum of balances held by yield-exempt holdings (reserves included).
    pub exempt_supply: u64,
    /// Cumulative yield per unit of eligible supply, scaled by INDEX_SCALE.
    pub global_index: u128,
    pub total_distributed: u64,
    pub distribution_count: u64,
    /// Owners excluded from yield for the lifetime of the ledger.
    pub permanent_exclusions: Vec<Pubkey>,
    pub bump: u8,
}

impl Ledger {
    pub const SIZE: usize =
        32 + // authority
        8 +  // total_supply
        8 +  // exempt_supply
        16 + // global_index
        8 +  // total_distributed
        8 +  // distribution_count
        4 + 32 * MAX_PERMANENT_EXCLUSIONS + // permanent_exclusions
        1;   // bump

    pub fn is_yield_exempt(&self, owner: &Pubkey) -> bool {
        is_reserve(owner) || self.permanent_exclusions.contains(owner)
    }

    /// Supply a distribution is spread over once `excluded_balance`
    /// (per-call exclusions that are not exempt already) is taken out.
    pub fn eligible_supply(&self, excluded_balance: u64) -> std::result::Result<u64, YieldTokenError> {
        self.total_supply
            .checked_sub(self.exempt_supply)
            .and_then(|s| s.checked_sub(excluded_balance))
            .ok_or(YieldTokenError::ArithmeticOverflow)
    }

    /// Adjust `exempt_supply` for `amount` moving between holdings with the
    /// given exemption flags.
    pub fn apply_exempt_move(
        &mut self,
        from_exempt: bool,
        to_exempt: bool,
        amount: u64,
    ) -> std::result::Result<(), YieldTokenError> {
        self.exempt_supply = match (from_exempt, to_exempt) {
            (true, false) => self.exempt_supply.checked_sub(amount),
            (false, true) => self.exempt_supply.checked_add(amount),
            _ => Some(self.exempt_supply),
        }
        .ok_or(YieldTokenError::ArithmeticOverflow)?;
        Ok(())
    }
}

/// Validate a permanent exclusion list: bounded, no default key, no duplicates.
pub fn validate_exclusions(list: &[Pubkey]) -> std::result::Result<(), YieldTokenError> {
    if list.len() > MAX_PERMANENT_EXCLUSIONS {
        return Err(YieldTokenError::TooManyExclusions);
    }
    for (i, key) in list.iter().enumerate() {
        if *key == Pubkey::default() {
            return Err(YieldTokenError::InvalidPubkey);
        }
        if list[..i].contains(key) {
            return Err(YieldTokenError::InvalidExclusionList);
        }
    }
    Ok(())
}
