//! Balance movement and yield settlement over `Ledger` + `Holding`s.
//! Every function validates before it mutates, so an error leaves the
//! accounts untouched.

use anchor_lang::prelude::*;

use crate::constants::is_reserve;
use crate::error::YieldTokenError;
use crate::state::{Holding, Ledger};
use crate::utils::math;

type Res<T> = std::result::Result<T, YieldTokenError>;

/// Outcome of one distribution round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Distribution {
    pub eligible_supply: u64,
    pub index_delta: u128,
    pub global_index: u128,
}

/// Move `amount` without settling either side. Reserve and escrow paths only.
pub fn move_between(
    ledger: &mut Ledger,
    from: &mut Holding,
    to: &mut Holding,
    amount: u64,
) -> Res<()> {
    if from.balance < amount {
        return Err(YieldTokenError::InsufficientBalance);
    }
    to.balance
        .checked_add(amount)
        .ok_or(YieldTokenError::ArithmeticOverflow)?;
    ledger.apply_exempt_move(from.yield_exempt, to.yield_exempt, amount)?;
    from.debit(amount)?;
    to.credit(amount)?;
    Ok(())
}

/// Settle both sides at the current index, then move `amount`.
pub fn transfer_balance(
    ledger: &mut Ledger,
    from: &mut Holding,
    to: &mut Holding,
    amount: u64,
) -> Res<()> {
    if is_reserve(&from.owner) || is_reserve(&to.owner) {
        return Err(YieldTokenError::ReservedAccount);
    }
    if from.owner == to.owner {
        return Err(YieldTokenError::SelfTransfer);
    }
    if from.balance < amount {
        return Err(YieldTokenError::InsufficientBalance);
    }
    let index = ledger.global_index;
    // both pending amounts must be computable before either side is touched
    from.pending_yield(index)?;
    to.pending_yield(index)?;

    from.settle(index)?;
    to.settle(index)?;
    move_between(ledger, from, to, amount)
}

/// Holder-initiated transfer. Escrows are funded only by their own
/// instance, so they cannot receive here.
pub fn transfer(ledger: &mut Ledger, from: &mut Holding, to: &mut Holding, amount: u64) -> Res<()> {
    if to.escrow || from.escrow {
        return Err(YieldTokenError::EscrowHolding);
    }
    transfer_balance(ledger, from, to, amount)
}

/// Spread `amount` from the undistributed sink over the eligible supply.
///
/// Holdings in `excluded` are settled at the old index and moved straight
/// to the new one: they keep what they earned before and earn nothing this
/// round.
pub fn distribute(
    ledger: &mut Ledger,
    undistributed: &mut Holding,
    unclaimed: &mut Holding,
    excluded: &mut [&mut Holding],
    amount: u64,
) -> Res<Distribution> {
    if amount == 0 {
        return Err(YieldTokenError::InvalidAmount);
    }
    if undistributed.balance < amount {
        return Err(YieldTokenError::InsufficientReserve);
    }

    let old_index = ledger.global_index;
    let mut excluded_balance: u64 = 0;
    let mut accrued = Vec::with_capacity(excluded.len());
    for (i, h) in excluded.iter().enumerate() {
        if excluded[..i].iter().any(|prev| prev.owner == h.owner) {
            return Err(YieldTokenError::InvalidExclusionList);
        }
        accrued.push(h.pending_yield(old_index)?);
        if !h.yield_exempt {
            excluded_balance = excluded_balance
                .checked_add(h.balance)
                .ok_or(YieldTokenError::ArithmeticOverflow)?;
        }
    }

    let eligible_supply = ledger.eligible_supply(excluded_balance)?;
    let index_delta = math::index_delta(amount, eligible_supply)?;
    let global_index = old_index
        .checked_add(index_delta)
        .ok_or(YieldTokenError::ArithmeticOverflow)?;
    let total_distributed = ledger
        .total_distributed
        .checked_add(amount)
        .ok_or(YieldTokenError::ArithmeticOverflow)?;
    let distribution_count = ledger
        .distribution_count
        .checked_add(1)
        .ok_or(YieldTokenError::ArithmeticOverflow)?;

    move_between(ledger, undistributed, unclaimed, amount)?;
    for (h, owed) in excluded.iter_mut().zip(accrued) {
        h.accrued_yield = owed;
        h.settled_index = global_index;
    }
    ledger.global_index = global_index;
    ledger.total_distributed = total_distributed;
    ledger.distribution_count = distribution_count;

    msg!(
        "distribute: amount={} eligible={} index={}",
        amount,
        eligible_supply,
        global_index
    );

    Ok(Distribution {
        eligible_supply,
        index_delta,
        global_index,
    })
}

/// Pay `holding`'s pending yield out of the unclaimed sink. Escrow yield is
/// only paid through `forward_escrow_yield`, so it cannot end up stuck as
/// escrow balance.
pub fn claim_yield(ledger: &mut Ledger, holding: &mut Holding, unclaimed: &mut Holding) -> Res<u64> {
    if holding.escrow {
        return Err(YieldTokenError::EscrowHolding);
    }
    pay_out(ledger, holding, unclaimed)
}

fn pay_out(ledger: &mut Ledger, holding: &mut Holding, unclaimed: &mut Holding) -> Res<u64> {
    let owed = holding.pending_yield(ledger.global_index)?;
    if owed == 0 {
        return Err(YieldTokenError::ZeroYield);
    }
    if unclaimed.balance < owed {
        return Err(YieldTokenError::InsufficientReserve);
    }
    holding
        .balance
        .checked_add(owed)
        .ok_or(YieldTokenError::ArithmeticOverflow)?;

    holding.settle(ledger.global_index)?;
    holding.accrued_yield = 0;
    move_between(ledger, unclaimed, holding, owed)?;
    Ok(owed)
}

/// Claim the yield earned by an escrow holding and pass it on to
/// `recipient`. Returns 0 when nothing is owed.
pub fn forward_escrow_yield(
    ledger: &mut Ledger,
    escrow: &mut Holding,
    unclaimed: &mut Holding,
    recipient: &mut Holding,
) -> Res<u64> {
    if escrow.pending_yield(ledger.global_index)? == 0 {
        return Ok(0);
    }
    let owed = pay_out(ledger, escrow, unclaimed)?;
    transfer_balance(ledger, escrow, recipient, owed)?;
    Ok(owed)
}

/// Turn a freshly created (or pre-opened) holding of `owner` into an
/// escrow. A holding opened earlier through `open_holding` keeps its
/// checkpoint and balance.
pub fn adopt_escrow(ledger: &Ledger, holding: &mut Holding, owner: Pubkey, bump: u8) {
    if holding.owner == Pubkey::default() {
        *holding = Holding::new(owner, ledger.global_index, ledger.is_yield_exempt(&owner), bump);
    }
    holding.escrow = true;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{UNCLAIMED_YIELD_ACCOUNT, UNDISTRIBUTED_YIELD_ACCOUNT};

    struct Book {
        ledger: Ledger,
        undistributed: Holding,
        unclaimed: Holding,
    }

    fn book(circulating: u64, reserve: u64) -> Book {
        Book {
            ledger: Ledger {
                total_supply: circulating + reserve,
                exempt_supply: reserve,
                ..Default::default()
            },
            undistributed: Holding {
                owner: UNDISTRIBUTED_YIELD_ACCOUNT,
                balance: reserve,
                yield_exempt: true,
                ..Default::default()
            },
            unclaimed: Holding {
                owner: UNCLAIMED_YIELD_ACCOUNT,
                yield_exempt: true,
                ..Default::default()
            },
        }
    }

    fn holder(balance: u64) -> Holding {
        Holding {
            owner: Pubkey::new_unique(),
            balance,
            ..Default::default()
        }
    }

    #[test]
    fn distribution_validation() {
        let mut b = book(100, 10);
        assert!(matches!(
            distribute(&mut b.ledger, &mut b.undistributed, &mut b.unclaimed, &mut [], 0),
            Err(YieldTokenError::InvalidAmount)
        ));
        assert!(matches!(
            distribute(&mut b.ledger, &mut b.undistributed, &mut b.unclaimed, &mut [], 11),
            Err(YieldTokenError::InsufficientReserve)
        ));

        let mut only = holder(100);
        assert!(matches!(
            distribute(
                &mut b.ledger,
                &mut b.undistributed,
                &mut b.unclaimed,
                &mut [&mut only],
                5
            ),
            Err(YieldTokenError::NoEligibleSupply)
        ));
        assert_eq!(b.undistributed.balance, 10);
        assert_eq!(b.ledger.global_index, 0);
    }

    #[test]
    fn duplicated_exclusion_is_rejected() {
        let mut b = book(100, 10);
        let mut x = holder(50);
        let mut y = Holding {
            owner: x.owner,
            ..holder(50)
        };
        assert!(matches!(
            distribute(
                &mut b.ledger,
                &mut b.undistributed,
                &mut b.unclaimed,
                &mut [&mut x, &mut y],
                5
            ),
            Err(YieldTokenError::InvalidExclusionList)
        ));
    }

    #[test]
    fn transfer_freezes_yield_at_old_balance() {
        let mut b = book(100, 10);
        let mut a = holder(60);
        let mut c = holder(40);
        distribute(&mut b.ledger, &mut b.undistributed, &mut b.unclaimed, &mut [], 10).unwrap();
        transfer_balance(&mut b.ledger, &mut a, &mut c, 60).unwrap();

        assert_eq!(a.pending_yield(b.ledger.global_index).unwrap(), 6);
        assert_eq!(c.pending_yield(b.ledger.global_index).unwrap(), 4);
        assert_eq!(a.balance, 0);
        assert_eq!(c.balance, 100);
    }

    #[test]
    fn transfer_rejections_leave_state() {
        let mut b = book(100, 10);
        let mut a = holder(60);
        let mut c = holder(40);
        assert!(matches!(
            transfer_balance(&mut b.ledger, &mut a, &mut c, 61),
            Err(YieldTokenError::InsufficientBalance)
        ));
        assert!(matches!(
            transfer_balance(&mut b.ledger, &mut a, &mut b.unclaimed, 1),
            Err(YieldTokenError::ReservedAccount)
        ));
        let mut a2 = Holding {
            owner: a.owner,
            ..holder(0)
        };
        assert!(matches!(
            transfer_balance(&mut b.ledger, &mut a, &mut a2, 1),
            Err(YieldTokenError::SelfTransfer)
        ));
        assert_eq!(a.balance, 60);
    }

    #[test]
    fn claim_moves_reserve_and_reports_zero() {
        let mut b = book(100, 10);
        let mut a = holder(100);
        distribute(&mut b.ledger, &mut b.undistributed, &mut b.unclaimed, &mut [], 10).unwrap();

        assert_eq!(claim_yield(&mut b.ledger, &mut a, &mut b.unclaimed).unwrap(), 10);
        assert_eq!(a.balance, 110);
        assert_eq!(b.unclaimed.balance, 0);
        assert_eq!(b.ledger.exempt_supply, 0);
        assert!(matches!(
            claim_yield(&mut b.ledger, &mut a, &mut b.unclaimed),
            Err(YieldTokenError::ZeroYield)
        ));
    }

    fn escrow_of(balance: u64) -> Holding {
        Holding {
            escrow: true,
            ..holder(balance)
        }
    }

    #[test]
    fn escrow_yield_is_forwarded() {
        let mut b = book(100, 10);
        let mut escrow = escrow_of(50);
        let mut owner = holder(50);
        distribute(&mut b.ledger, &mut b.undistributed, &mut b.unclaimed, &mut [], 10).unwrap();

        let paid =
            forward_escrow_yield(&mut b.ledger, &mut escrow, &mut b.unclaimed, &mut owner).unwrap();
        assert_eq!(paid, 5);
        assert_eq!(escrow.balance, 50);
        assert_eq!(owner.balance, 55);
        // owner's own 5 is still pending
        assert_eq!(owner.pending_yield(b.ledger.global_index).unwrap(), 5);
        assert_eq!(
            forward_escrow_yield(&mut b.ledger, &mut escrow, &mut b.unclaimed, &mut owner).unwrap(),
            0
        );
    }

    #[test]
    fn escrow_yield_cannot_be_claimed_in_place() {
        let mut b = book(100, 10);
        let mut escrow = escrow_of(50);
        let mut owner = holder(50);
        distribute(&mut b.ledger, &mut b.undistributed, &mut b.unclaimed, &mut [], 10).unwrap();

        assert!(matches!(
            claim_yield(&mut b.ledger, &mut escrow, &mut b.unclaimed),
            Err(YieldTokenError::EscrowHolding)
        ));
        assert_eq!(escrow.balance, 50);
        assert_eq!(
            forward_escrow_yield(&mut b.ledger, &mut escrow, &mut b.unclaimed, &mut owner).unwrap(),
            5
        );
        assert_eq!(escrow.balance, 50);
    }

    #[test]
    fn holders_cannot_send_into_escrow() {
        let mut b = book(100, 10);
        let mut a = holder(100);
        let mut e = escrow_of(0);
        assert!(matches!(
            transfer(&mut b.ledger, &mut a, &mut e, 1),
            Err(YieldTokenError::EscrowHolding)
        ));
        assert_eq!(a.balance, 100);
        // the owning instance still funds it directly
        transfer_balance(&mut b.ledger, &mut a, &mut e, 1).unwrap();
        assert_eq!(e.balance, 1);
    }

    #[test]
    fn adopting_keeps_a_pre_opened_holding() {
        let b = book(100, 10);
        let owner = Pubkey::new_unique();
        let mut fresh = Holding::default();
        adopt_escrow(&b.ledger, &mut fresh, owner, 7);
        assert_eq!(fresh.owner, owner);
        assert_eq!(fresh.bump, 7);
        assert!(fresh.escrow);

        let mut opened = Holding {
            owner,
            settled_index: 42,
            bump: 3,
            ..Default::default()
        };
        adopt_escrow(&b.ledger, &mut opened, owner, 3);
        assert_eq!(opened.settled_index, 42);
        assert!(opened.escrow);
    }
}
