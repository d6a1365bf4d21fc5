//! Fixed-length month arithmetic for vesting grants.
//! - one month = SECONDS_PER_MONTH (365 days / 12), no calendar clamping
//! - months_elapsed = floor((now - start) / SECONDS_PER_MONTH), 0 before start
//! - vested_months = months_elapsed clamped to the duration, 0 below the cliff

use crate::constants::SECONDS_PER_MONTH;
use crate::error::YieldTokenError;

/// Whole months between `start_ts` and `now_ts`; zero when `now_ts` is earlier.
pub fn months_elapsed(now_ts: i64, start_ts: i64) -> Result<u64, YieldTokenError> {
    if now_ts <= start_ts {
        return Ok(0);
    }
    let elapsed = now_ts
        .checked_sub(start_ts)
        .ok_or(YieldTokenError::ArithmeticOverflow)?;
    Ok((elapsed / SECONDS_PER_MONTH) as u64)
}

/// Months that count toward the vested amount at `now_ts`.
pub fn vested_months(
    now_ts: i64,
    start_ts: i64,
    duration_months: u16,
    cliff_months: u16,
) -> Result<u16, YieldTokenError> {
    let elapsed = months_elapsed(now_ts, start_ts)?;
    if elapsed < cliff_months as u64 {
        return Ok(0);
    }
    Ok(elapsed.min(duration_months as u64) as u16)
}

/// Grant start: zero means "now"; negative timestamps are rejected.
pub fn resolve_start(start_ts: i64, now_ts: i64) -> Result<i64, YieldTokenError> {
    match start_ts {
        0 => Ok(now_ts),
        t if t < 0 => Err(YieldTokenError::InvalidTimestamp),
        t => Ok(t),
    }
}

/// Seconds left until `expiry_ts`, or zero once reached.
pub fn seconds_until(now_ts: i64, expiry_ts: i64) -> i64 {
    expiry_ts.saturating_sub(now_ts).max(0)
}
