use anchor_lang::prelude::*;

use crate::error::YieldTokenError;
use crate::utils::{math, time};

/// Vesting instance of one beneficiary. Escrowed tokens sit in the holding
/// owned by this account's address.
#[account]
#[derive(Debug, Default)]
pub struct TokenVesting {
    /// Funds grants and may remove them.
    pub grantor: Pubkey,
    pub beneficiary: Pubkey,
    /// `None` until a grant is added, and again after removal.
    pub grant: Option<TokenGrant>,
    pub bump: u8,
}

impl TokenVesting {
    pub const SIZE: usize =
        32 + // grantor
        32 + // beneficiary
        1 + TokenGrant::SIZE + // grant
        1;   // bump
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TokenGrant {
    pub start_time: i64,
    pub total_amount: u64,
    pub duration_months: u16,
    pub cliff_months: u16,
    /// Tranche collectable from `start_time`, outside the monthly schedule.
    pub initially_claimable_amount: u64,
    pub months_claimed: u16,
    /// Vested-schedule units paid out (tranche not included).
    pub total_claimed: u64,
    pub initial_claimed: bool,
}

impl TokenGrant {
    pub const SIZE: usize =
        8 + // start_time
        8 + // total_amount
        2 + // duration_months
        2 + // cliff_months
        8 + // initially_claimable_amount
        2 + // months_claimed
        8 + // total_claimed
        1;  // initial_claimed

    pub fn new(
        start_time: i64,
        total_amount: u64,
        duration_months: u16,
        cliff_months: u16,
        initially_claimable_amount: u64,
    ) -> std::result::Result<Self, YieldTokenError> {
        if cliff_months == 0 || cliff_months > duration_months {
            return Err(YieldTokenError::InvalidCliff);
        }
        if total_amount == 0 || duration_months == 0 {
            return Err(YieldTokenError::InvalidAmount);
        }
        if initially_claimable_amount >= total_amount {
            return Err(YieldTokenError::InvalidInitialClaimable);
        }
        Ok(Self {
            start_time,
            total_amount,
            duration_months,
            cliff_months,
            initially_claimable_amount,
            months_claimed: 0,
            total_claimed: 0,
            // an empty tranche has nothing left to collect
            initial_claimed: initially_claimable_amount == 0,
        })
    }

    /// Units vesting month by month.
    pub fn principal(&self) -> u64 {
        self.total_amount - self.initially_claimable_amount
    }

    /// Returns (months vested, vested units) at `now`.
    pub fn vested(&self, now: i64) -> std::result::Result<(u16, u64), YieldTokenError> {
        let months =
            time::vested_months(now, self.start_time, self.duration_months, self.cliff_months)?;
        let amount = if months >= self.duration_months {
            self.principal()
        } else {
            math::mul_div_u64(self.principal(), months as u64, self.duration_months as u64)?
        };
        Ok((months, amount))
    }

    /// Returns (months vested, vested units not claimed yet) at `now`.
    pub fn calculate_claim(&self, now: i64) -> std::result::Result<(u16, u64), YieldTokenError> {
        let (months, vested) = self.vested(now)?;
        let claimable = vested
            .checked_sub(self.total_claimed)
            .ok_or(YieldTokenError::ArithmeticOverflow)?;
        Ok((months, claimable))
    }

    pub fn record_vested_claim(
        &mut self,
        months: u16,
        amount: u64,
    ) -> std::result::Result<(), YieldTokenError> {
        self.total_claimed = self
            .total_claimed
            .checked_add(amount)
            .ok_or(YieldTokenError::ArithmeticOverflow)?;
        self.months_claimed = months;
        Ok(())
    }

    /// Tranche units not collected yet.
    pub fn outstanding_initial(&self) -> u64 {
        if self.initial_claimed {
            0
        } else {
            self.initially_claimable_amount
        }
    }

    /// Tranche collectable at `now`, or why it is not.
    pub fn collectable_initial(&self, now: i64) -> std::result::Result<u64, YieldTokenError> {
        if self.initial_claimed {
            return Err(YieldTokenError::AlreadyCollected);
        }
        if now < self.start_time {
            return Err(YieldTokenError::NotYetStarted);
        }
        Ok(self.initially_claimable_amount)
    }

    /// Claimable at `now` without yield: vested units plus the tranche if it
    /// can be collected.
    pub fn claimable_amount(&self, now: i64) -> std::result::Result<u64, YieldTokenError> {
        let (_, vested) = self.calculate_claim(now)?;
        let initial = self.collectable_initial(now).unwrap_or(0);
        vested
            .checked_add(initial)
            .ok_or(YieldTokenError::ArithmeticOverflow)
    }

    /// Principal still held in escrow.
    pub fn escrowed(&self) -> u64 {
        self.principal() - self.total_claimed + self.outstanding_initial()
    }

    /// Split of the escrowed principal on removal at `now`:
    /// (to beneficiary, back to grantor).
    pub fn removal_split(&self, now: i64) -> std::result::Result<(u64, u64), YieldTokenError> {
        let (_, vested) = self.calculate_claim(now)?;
        let to_beneficiary = vested
            .checked_add(self.outstanding_initial())
            .ok_or(YieldTokenError::ArithmeticOverflow)?;
        let to_grantor = self
            .escrowed()
            .checked_sub(to_beneficiary)
            .ok_or(YieldTokenError::ArithmeticOverflow)?;
        Ok((to_beneficiary, to_grantor))
    }

    pub fn is_fully_claimed(&self) -> bool {
        self.total_claimed == self.principal() && self.initial_claimed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SECONDS_PER_MONTH;

    const START: i64 = 1_767_225_600;

    fn at(months: i64) -> i64 {
        START + months * SECONDS_PER_MONTH
    }

    #[test]
    fn grant_validation_order() {
        assert!(matches!(
            TokenGrant::new(START, 1200, 24, 0, 0),
            Err(YieldTokenError::InvalidCliff)
        ));
        assert!(matches!(
            TokenGrant::new(START, 1200, 24, 25, 0),
            Err(YieldTokenError::InvalidCliff)
        ));
        assert!(matches!(
            TokenGrant::new(START, 0, 24, 6, 0),
            Err(YieldTokenError::InvalidAmount)
        ));
        assert!(matches!(
            TokenGrant::new(START, 1200, 24, 6, 1200),
            Err(YieldTokenError::InvalidInitialClaimable)
        ));
        assert!(TokenGrant::new(START, 1200, 24, 6, 1199).is_ok());
    }

    #[test]
    fn nothing_before_cliff() {
        let g = TokenGrant::new(START, 1200, 24, 6, 0).unwrap();
        assert_eq!(g.calculate_claim(at(5)).unwrap(), (0, 0));
        assert_eq!(g.calculate_claim(at(6)).unwrap(), (6, 300));
    }

    #[test]
    fn claimed_units_are_subtracted() {
        let mut g = TokenGrant::new(START, 1200, 24, 6, 0).unwrap();
        g.record_vested_claim(6, 300).unwrap();
        assert_eq!(g.calculate_claim(at(7)).unwrap(), (7, 50));
        assert_eq!(g.months_claimed, 6);
    }

    #[test]
    fn full_vest_pays_exact_principal() {
        // 1000 / 7 leaves a remainder every month
        let mut g = TokenGrant::new(START, 1000, 7, 1, 0).unwrap();
        let (m, a) = g.calculate_claim(at(3)).unwrap();
        g.record_vested_claim(m, a).unwrap();
        let (m, a) = g.calculate_claim(at(7)).unwrap();
        g.record_vested_claim(m, a).unwrap();
        assert_eq!(g.total_claimed, 1000);
        assert_eq!(g.calculate_claim(at(40)).unwrap(), (7, 0));
    }

    #[test]
    fn tranche_rules() {
        let g = TokenGrant::new(START, 1000, 10, 1, 100).unwrap();
        assert_eq!(g.principal(), 900);
        assert!(matches!(
            g.collectable_initial(START - 1),
            Err(YieldTokenError::NotYetStarted)
        ));
        assert_eq!(g.collectable_initial(START).unwrap(), 100);
        assert_eq!(g.claimable_amount(START).unwrap(), 100);
        assert_eq!(g.claimable_amount(at(1)).unwrap(), 190);

        let mut g = g;
        g.initial_claimed = true;
        assert!(matches!(
            g.collectable_initial(at(1)),
            Err(YieldTokenError::AlreadyCollected)
        ));
        assert_eq!(g.claimable_amount(at(1)).unwrap(), 90);
    }

    #[test]
    fn empty_tranche_counts_as_collected() {
        let g = TokenGrant::new(START, 1000, 10, 1, 0).unwrap();
        assert!(g.initial_claimed);
        assert!(matches!(
            g.collectable_initial(START),
            Err(YieldTokenError::AlreadyCollected)
        ));
    }

    #[test]
    fn removal_split_conserves_escrow() {
        let mut g = TokenGrant::new(START, 1200, 12, 3, 120).unwrap();
        g.record_vested_claim(3, 270).unwrap();
        let (to_beneficiary, to_grantor) = g.removal_split(at(4)).unwrap();
        // vested 1080 * 4 / 12 = 360, 90 unclaimed, plus the tranche
        assert_eq!(to_beneficiary, 90 + 120);
        assert_eq!(to_beneficiary + to_grantor, g.escrowed());
        assert_eq!(g.escrowed(), 1200 - 270);
    }

    #[test]
    fn removal_before_start_still_pays_tranche() {
        let g = TokenGrant::new(at(2), 500, 5, 1, 50).unwrap();
        assert_eq!(g.removal_split(START).unwrap(), (50, 450));
    }
}
