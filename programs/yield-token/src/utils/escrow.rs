//! Vesting and lock flows over their escrow holdings. Handlers check
//! signers and accounts, then call into these.

use crate::error::YieldTokenError;
use crate::state::{Holding, Ledger, LockVault, TokenGrant, TokenVesting, UserLock};
use crate::utils::{settlement, time};

type Res<T> = std::result::Result<T, YieldTokenError>;

/// What `claim_all` paid to the beneficiary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VestingPayout {
    pub vested: u64,
    pub initial: u64,
    pub yield_amount: u64,
}

/// How `remove_grant` split the escrow.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GrantRemoval {
    pub amount_vested: u64,
    pub amount_not_vested: u64,
    pub yield_paid: u64,
}

/// Creates the grant and moves `amount` from the grantor into escrow.
#[allow(clippy::too_many_arguments)]
pub fn add_grant(
    ledger: &mut Ledger,
    vesting: &mut TokenVesting,
    grantor_holding: &mut Holding,
    escrow: &mut Holding,
    now: i64,
    start_time: i64,
    amount: u64,
    duration_months: u16,
    cliff_months: u16,
    initially_claimable_amount: u64,
) -> Res<TokenGrant> {
    if vesting.grant.is_some() {
        return Err(YieldTokenError::GrantExists);
    }
    let start_time = time::resolve_start(start_time, now)?;
    let grant = TokenGrant::new(
        start_time,
        amount,
        duration_months,
        cliff_months,
        initially_claimable_amount,
    )?;
    settlement::transfer_balance(ledger, grantor_holding, escrow, amount)?;
    vesting.grant = Some(grant);
    Ok(grant)
}

/// Pays the vested units not claimed yet.
pub fn claim_vested(
    ledger: &mut Ledger,
    vesting: &mut TokenVesting,
    escrow: &mut Holding,
    beneficiary: &mut Holding,
    now: i64,
) -> Res<u64> {
    let mut grant = vesting.grant.ok_or(YieldTokenError::ZeroVested)?;
    let (months_vested, amount) = grant.calculate_claim(now)?;
    if amount == 0 {
        return Err(YieldTokenError::ZeroVested);
    }
    grant.record_vested_claim(months_vested, amount)?;
    settlement::transfer_balance(ledger, escrow, beneficiary, amount)?;
    vesting.grant = Some(grant);
    Ok(amount)
}

/// Pays the initial tranche once the grant has started.
pub fn collect_initial(
    ledger: &mut Ledger,
    vesting: &mut TokenVesting,
    escrow: &mut Holding,
    beneficiary: &mut Holding,
    now: i64,
) -> Res<u64> {
    let mut grant = vesting.grant.ok_or(YieldTokenError::NoGrant)?;
    let amount = grant.collectable_initial(now)?;
    settlement::transfer_balance(ledger, escrow, beneficiary, amount)?;
    grant.initial_claimed = true;
    vesting.grant = Some(grant);
    Ok(amount)
}

/// Forwards the escrow's yield. Fails `ZeroYield` when nothing is owed.
pub fn collect_yield(
    ledger: &mut Ledger,
    escrow: &mut Holding,
    unclaimed: &mut Holding,
    recipient: &mut Holding,
) -> Res<u64> {
    let amount = settlement::forward_escrow_yield(ledger, escrow, unclaimed, recipient)?;
    if amount == 0 {
        return Err(YieldTokenError::ZeroYield);
    }
    Ok(amount)
}

/// Vested units, the tranche when collectable, and the escrow yield in one
/// go. Succeeds if any of the three is non-zero.
pub fn claim_all(
    ledger: &mut Ledger,
    vesting: &mut TokenVesting,
    escrow: &mut Holding,
    unclaimed: &mut Holding,
    beneficiary: &mut Holding,
    now: i64,
) -> Res<VestingPayout> {
    let mut payout = VestingPayout::default();
    let mut next = vesting.grant;
    if let Some(grant) = next.as_mut() {
        let (months_vested, amount) = grant.calculate_claim(now)?;
        if amount > 0 {
            grant.record_vested_claim(months_vested, amount)?;
            payout.vested = amount;
        }
        if let Ok(tranche) = grant.collectable_initial(now) {
            grant.initial_claimed = true;
            payout.initial = tranche;
        }
    }

    let principal = payout
        .vested
        .checked_add(payout.initial)
        .ok_or(YieldTokenError::ArithmeticOverflow)?;
    if principal == 0 && escrow.pending_yield(ledger.global_index)? == 0 {
        return Err(YieldTokenError::ZeroClaims);
    }
    if principal > 0 {
        settlement::transfer_balance(ledger, escrow, beneficiary, principal)?;
    }
    payout.yield_amount = settlement::forward_escrow_yield(ledger, escrow, unclaimed, beneficiary)?;
    vesting.grant = next;
    Ok(payout)
}

/// Pays the beneficiary what is vested, the outstanding tranche and the
/// escrow yield, returns the rest to the grantor and frees the slot.
pub fn remove_grant(
    ledger: &mut Ledger,
    vesting: &mut TokenVesting,
    escrow: &mut Holding,
    unclaimed: &mut Holding,
    beneficiary: &mut Holding,
    grantor: &mut Holding,
    now: i64,
) -> Res<GrantRemoval> {
    let grant = vesting.grant.ok_or(YieldTokenError::NoGrant)?;
    let (amount_vested, amount_not_vested) = grant.removal_split(now)?;

    let yield_paid = settlement::forward_escrow_yield(ledger, escrow, unclaimed, beneficiary)?;
    if amount_vested > 0 {
        settlement::transfer_balance(ledger, escrow, beneficiary, amount_vested)?;
    }
    if amount_not_vested > 0 {
        settlement::transfer_balance(ledger, escrow, grantor, amount_not_vested)?;
    }
    vesting.grant = None;

    Ok(GrantRemoval {
        amount_vested,
        amount_not_vested,
        yield_paid,
    })
}

/// Locks `amount` of the user's balance until `expiry_time`.
#[allow(clippy::too_many_arguments)]
pub fn open_lock(
    ledger: &mut Ledger,
    vault: &mut LockVault,
    lock: &mut UserLock,
    user_holding: &mut Holding,
    escrow: &mut Holding,
    amount: u64,
    expiry_time: i64,
    now: i64,
) -> Res<()> {
    vault.check_new_lock(lock, amount, expiry_time, now)?;
    let total_locked = vault
        .total_locked
        .checked_add(amount)
        .ok_or(YieldTokenError::ArithmeticOverflow)?;
    settlement::transfer_balance(ledger, user_holding, escrow, amount)?;
    lock.arm(amount, now, expiry_time);
    vault.total_locked = total_locked;
    Ok(())
}

/// Returns the locked units to the user once expired. Only once per lock.
pub fn release_lock(
    ledger: &mut Ledger,
    vault: &mut LockVault,
    lock: &mut UserLock,
    escrow: &mut Holding,
    user_holding: &mut Holding,
    now: i64,
) -> Res<u64> {
    let mut next = lock.clone();
    let amount = next.release(now)?;
    let total_locked = vault
        .total_locked
        .checked_sub(amount)
        .ok_or(YieldTokenError::ArithmeticOverflow)?;
    settlement::transfer_balance(ledger, escrow, user_holding, amount)?;
    *lock = next;
    vault.total_locked = total_locked;
    Ok(amount)
}

/// Moves the lock's expiry out. Returns the previous expiry.
pub fn extend_lock(vault: &LockVault, lock: &mut UserLock, new_expiry_time: i64) -> Res<i64> {
    vault.check_new_expiry(lock, new_expiry_time)?;
    let old_expiry_time = lock.expiry_time;
    lock.expiry_time = new_expiry_time;
    Ok(old_expiry_time)
}
