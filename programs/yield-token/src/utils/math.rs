//! Fixed-point helpers for the global yield index.
//!
//! - index_delta = floor(amount * INDEX_SCALE / eligible_supply)
//! - yield_for   = floor(balance * index_delta / INDEX_SCALE)
//!
//! `balance * index_delta` can exceed u128, so `yield_for` multiplies into
//! three 64-bit limbs and divides them back down one limb at a time.

use crate::constants::INDEX_SCALE;
use crate::error::YieldTokenError;

const LIMB_MASK: u128 = u64::MAX as u128;

/// Index increase that spreads `amount` over `eligible_supply`.
pub fn index_delta(amount: u64, eligible_supply: u64) -> Result<u128, YieldTokenError> {
    if eligible_supply == 0 {
        return Err(YieldTokenError::NoEligibleSupply);
    }
    (amount as u128)
        .checked_mul(INDEX_SCALE)
        .ok_or(YieldTokenError::ArithmeticOverflow)?
        .checked_div(eligible_supply as u128)
        .ok_or(YieldTokenError::ArithmeticOverflow)
}

/// Yield earned by `balance` while the index moved by `index_delta`,
/// rounded toward zero.
pub fn yield_for(balance: u64, index_delta: u128) -> Result<u64, YieldTokenError> {
    if balance == 0 || index_delta == 0 {
        return Ok(0);
    }
    let a = balance as u128;
    let lo = a * (index_delta & LIMB_MASK);
    let hi = a * (index_delta >> 64);

    // product = p2 * 2^128 + p1 * 2^64 + p0
    let p0 = lo & LIMB_MASK;
    let mid = (lo >> 64) + (hi & LIMB_MASK);
    let p1 = mid & LIMB_MASK;
    let p2 = (hi >> 64) + (mid >> 64);

    let q2 = p2 / INDEX_SCALE;
    let r = p2 % INDEX_SCALE;
    let cur = (r << 64) | p1;
    let q1 = cur / INDEX_SCALE;
    let r = cur % INDEX_SCALE;
    let cur = (r << 64) | p0;
    let q0 = cur / INDEX_SCALE;

    if q2 != 0 || q1 != 0 {
        return Err(YieldTokenError::ArithmeticOverflow);
    }
    u64::try_from(q0).map_err(|_| YieldTokenError::ArithmeticOverflow)
}

/// `value * numerator / denominator` rounded toward zero, through u128.
pub fn mul_div_u64(value: u64, numerator: u64, denominator: u64) -> Result<u64, YieldTokenError> {
    if denominator == 0 {
        return Err(YieldTokenError::ArithmeticOverflow);
    }
    let v = (value as u128)
        .checked_mul(numerator as u128)
        .ok_or(YieldTokenError::ArithmeticOverflow)?
        / denominator as u128;
    u64::try_from(v).map_err(|_| YieldTokenError::ArithmeticOverflow)
}
