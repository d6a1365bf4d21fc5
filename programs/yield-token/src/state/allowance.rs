use anchor_lang::prelude::*;

use crate::error::YieldTokenError;

/// Amount `spender` may move out of `owner`'s holding.
#[account]
#[derive(Debug, Default)]
pub struct Allowance {
    pub owner: Pubkey,
    pub spender: Pubkey,
    pub amount: u64,
    pub bump: u8,
}

impl Allowance {
    pub const SIZE: usize = 32 + 32 + 8 + 1;

    pub fn spend(&mut self, amount: u64) -> std::result::Result<(), YieldTokenError> {
        self.amount = self
            .amount
            .checked_sub(amount)
            .ok_or(YieldTokenError::InsufficientAllowance)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spend_within_allowance() {
        let mut a = Allowance {
            amount: 10,
            ..Default::default()
        };
        a.spend(4).unwrap();
        assert_eq!(a.amount, 6);
        assert!(matches!(a.spend(7), Err(YieldTokenError::InsufficientAllowance)));
        assert_eq!(a.amount, 6);
    }
}
