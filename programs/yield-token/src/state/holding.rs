use anchor_lang::prelude::*;

use crate::error::YieldTokenError;
use crate::utils::math;

/// Balance record of one owner (wallet, reserve sink or escrow PDA).
#[account]
#[derive(Debug, Default)]
pub struct Holding {
    pub owner: Pubkey,
    /// Transferable token units.
    pub balance: u64,
    /// Global index at the last settlement.
    pub settled_index: u128,
    /// Yield crystallized by settlement and not claimed yet.
    pub accrued_yield: u64,
    /// Reserve sinks and permanently excluded owners never earn yield.
    pub yield_exempt: bool,
    /// Owned by a vesting instance or a user lock. Its yield belongs to the
    /// beneficiary and is only paid out by forwarding.
    pub escrow: bool,
    pub bump: u8,
}

impl Holding {
    pub const SIZE: usize =
        32 + // owner
        8 +  // balance
        16 + // settled_index
        8 +  // accrued_yield
        1 +  // yield_exempt
        1 +  // escrow
        1;   // bump

    pub fn new(owner: Pubkey, global_index: u128, yield_exempt: bool, bump: u8) -> Self {
        Self {
            owner,
            balance: 0,
            settled_index: global_index,
            accrued_yield: 0,
            yield_exempt,
            escrow: false,
            bump,
        }
    }

    /// Yield owed at `global_index`: crystallized plus not yet settled.
    pub fn pending_yield(&self, global_index: u128) -> std::result::Result<u64, YieldTokenError> {
        if self.yield_exempt {
            return Ok(0);
        }
        let delta = global_index
            .checked_sub(self.settled_index)
            .ok_or(YieldTokenError::ArithmeticOverflow)?;
        math::yield_for(self.balance, delta)?
            .checked_add(self.accrued_yield)
            .ok_or(YieldTokenError::ArithmeticOverflow)
    }

    /// Freeze earned yield at `global_index` and checkpoint the index.
    /// Returns the total now held in `accrued_yield`.
    pub fn settle(&mut self, global_index: u128) -> std::result::Result<u64, YieldTokenError> {
        let owed = self.pending_yield(global_index)?;
        self.accrued_yield = owed;
        self.settled_index = global_index;
        Ok(owed)
    }

    pub fn credit(&mut self, amount: u64) -> std::result::Result<(), YieldTokenError> {
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(YieldTokenError::ArithmeticOverflow)?;
        Ok(())
    }

    pub fn debit(&mut self, amount: u64) -> std::result::Result<(), YieldTokenError> {
        self.balance = self
            .balance
            .checked_sub(amount)
            .ok_or(YieldTokenError::InsufficientBalance)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::INDEX_SCALE;

    fn holding(balance: u64, settled_index: u128) -> Holding {
        Holding {
            owner: Pubkey::new_unique(),
            balance,
            settled_index,
            ..Default::default()
        }
    }

    #[test]
    fn pending_tracks_index_movement() {
        let h = holding(1_000, INDEX_SCALE);
        assert_eq!(h.pending_yield(INDEX_SCALE).unwrap(), 0);
        // index grew by 0.25 per unit
        assert_eq!(h.pending_yield(INDEX_SCALE + INDEX_SCALE / 4).unwrap(), 250);
    }

    #[test]
    fn settle_keeps_earned_yield_after_balance_change() {
        let mut h = holding(1_000, 0);
        assert_eq!(h.settle(INDEX_SCALE / 2).unwrap(), 500);
        h.debit(1_000).unwrap();
        assert_eq!(h.pending_yield(INDEX_SCALE).unwrap(), 500);
        assert_eq!(h.settled_index, INDEX_SCALE / 2);
    }

    #[test]
    fn exempt_holding_never_earns() {
        let mut h = holding(1_000, 0);
        h.yield_exempt = true;
        assert_eq!(h.pending_yield(INDEX_SCALE * 3).unwrap(), 0);
    }

    #[test]
    fn index_behind_checkpoint_is_rejected() {
        let h = holding(1, 10);
        assert!(matches!(
            h.pending_yield(9),
            Err(YieldTokenError::ArithmeticOverflow)
        ));
    }

    #[test]
    fn debit_below_zero_fails() {
        let mut h = holding(5, 0);
        assert!(matches!(h.debit(6), Err(YieldTokenError::InsufficientBalance)));
        assert_eq!(h.balance, 5);
    }
}
