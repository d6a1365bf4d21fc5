use anchor_lang::prelude::*;

use crate::error::YieldTokenError;

/// Shared time-lock configuration.
#[account]
#[derive(Debug, Default)]
pub struct LockVault {
    /// May change the minimums below.
    pub operator: Pubkey,
    pub min_lock_amount: u64,
    /// Seconds.
    pub min_lock_duration: i64,
    /// Units currently held across all unclaimed locks.
    pub total_locked: u64,
    pub bump: u8,
}

impl LockVault {
    pub const SIZE: usize =
        32 + // operator
        8 +  // min_lock_amount
        8 +  // min_lock_duration
        8 +  // total_locked
        1;   // bump

    /// Checks a new lock of `amount` expiring at `expiry_time`.
    pub fn check_new_lock(
        &self,
        existing: &UserLock,
        amount: u64,
        expiry_time: i64,
        now: i64,
    ) -> std::result::Result<(), YieldTokenError> {
        if existing.has_lock() {
            return Err(YieldTokenError::AlreadyLocked);
        }
        if expiry_time == 0 {
            return Err(YieldTokenError::ZeroExpiry);
        }
        let lead = expiry_time
            .checked_sub(now)
            .ok_or(YieldTokenError::ArithmeticOverflow)?;
        if lead < self.min_lock_duration {
            return Err(YieldTokenError::ExpiryTooSoon);
        }
        if amount < self.min_lock_amount || amount == 0 {
            return Err(YieldTokenError::AmountTooLow);
        }
        Ok(())
    }

    /// Checks an extension of `lock` to `new_expiry`.
    pub fn check_new_expiry(
        &self,
        lock: &UserLock,
        new_expiry: i64,
    ) -> std::result::Result<(), YieldTokenError> {
        if lock.amount == 0 {
            return Err(YieldTokenError::NoLock);
        }
        if lock.claimed {
            return Err(YieldTokenError::AlreadyClaimed);
        }
        let floor = lock
            .expiry_time
            .checked_add(self.min_lock_duration)
            .ok_or(YieldTokenError::ArithmeticOverflow)?;
        if new_expiry < floor {
            return Err(YieldTokenError::ExpiryTooSoon);
        }
        Ok(())
    }
}

/// Single lock slot of one user; the escrowed units sit in the holding owned
/// by this account's address.
#[account]
#[derive(Debug, Default)]
pub struct UserLock {
    pub user: Pubkey,
    pub amount: u64,
    pub start_time: i64,
    pub expiry_time: i64,
    pub claimed: bool,
    pub bump: u8,
}

impl UserLock {
    pub const SIZE: usize =
        32 + // user
        8 +  // amount
        8 +  // start_time
        8 +  // expiry_time
        1 +  // claimed
        1;   // bump

    pub fn has_lock(&self) -> bool {
        self.amount > 0 && !self.claimed
    }

    pub fn arm(&mut self, amount: u64, start_time: i64, expiry_time: i64) {
        self.amount = amount;
        self.start_time = start_time;
        self.expiry_time = expiry_time;
        self.claimed = false;
    }

    /// Marks the lock claimed and returns the released units.
    pub fn release(&mut self, now: i64) -> std::result::Result<u64, YieldTokenError> {
        if self.amount == 0 {
            return Err(YieldTokenError::NoLock);
        }
        if now < self.expiry_time {
            return Err(YieldTokenError::NotExpired);
        }
        if self.claimed {
            return Err(YieldTokenError::AlreadyClaimed);
        }
        self.claimed = true;
        Ok(self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DEFAULT_MIN_LOCK_DURATION, SECONDS_PER_DAY};

    const NOW: i64 = 1_767_225_600;

    fn vault() -> LockVault {
        LockVault {
            min_lock_amount: 100,
            min_lock_duration: DEFAULT_MIN_LOCK_DURATION,
            ..Default::default()
        }
    }

    #[test]
    fn new_lock_checks_in_order() {
        let v = vault();
        let mut active = UserLock::default();
        active.arm(500, NOW, NOW + DEFAULT_MIN_LOCK_DURATION);
        let expiry = NOW + 91 * SECONDS_PER_DAY;

        assert!(matches!(
            v.check_new_lock(&active, 0, 0, NOW),
            Err(YieldTokenError::AlreadyLocked)
        ));
        let free = UserLock::default();
        assert!(matches!(
            v.check_new_lock(&free, 1000, 0, NOW),
            Err(YieldTokenError::ZeroExpiry)
        ));
        assert!(matches!(
            v.check_new_lock(&free, 1000, NOW + DEFAULT_MIN_LOCK_DURATION - 1, NOW),
            Err(YieldTokenError::ExpiryTooSoon)
        ));
        assert!(matches!(
            v.check_new_lock(&free, 99, expiry, NOW),
            Err(YieldTokenError::AmountTooLow)
        ));
        assert!(v.check_new_lock(&free, 1000, expiry, NOW).is_ok());
    }

    #[test]
    fn release_once_after_expiry() {
        let mut lock = UserLock::default();
        assert!(matches!(lock.release(NOW), Err(YieldTokenError::NoLock)));

        lock.arm(1000, NOW, NOW + 10);
        assert!(matches!(lock.release(NOW + 9), Err(YieldTokenError::NotExpired)));
        assert_eq!(lock.release(NOW + 10).unwrap(), 1000);
        assert!(!lock.has_lock());
        assert!(matches!(
            lock.release(NOW + 11),
            Err(YieldTokenError::AlreadyClaimed)
        ));
    }

    #[test]
    fn claimed_slot_can_be_rearmed() {
        let v = vault();
        let mut lock = UserLock::default();
        lock.arm(1000, NOW, NOW + 10);
        lock.release(NOW + 10).unwrap();
        let later = NOW + 20;
        assert!(v
            .check_new_lock(&lock, 1000, later + DEFAULT_MIN_LOCK_DURATION, later)
            .is_ok());
    }

    #[test]
    fn expiry_extension_rules() {
        let v = vault();
        let mut lock = UserLock::default();
        assert!(matches!(
            v.check_new_expiry(&lock, NOW),
            Err(YieldTokenError::NoLock)
        ));
        lock.arm(1000, NOW, NOW + DEFAULT_MIN_LOCK_DURATION);
        let old = lock.expiry_time;
        assert!(matches!(
            v.check_new_expiry(&lock, old + DEFAULT_MIN_LOCK_DURATION - 1),
            Err(YieldTokenError::ExpiryTooSoon)
        ));
        assert!(v.check_new_expiry(&lock, old + DEFAULT_MIN_LOCK_DURATION).is_ok());
        lock.release(old).unwrap();
        assert!(matches!(
            v.check_new_expiry(&lock, old * 2),
            Err(YieldTokenError::AlreadyClaimed)
        ));
    }
}
