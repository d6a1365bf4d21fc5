use anchor_lang::prelude::*;

use crate::constants::LOCK_SEED;
use crate::state::UserLock;
use crate::utils::time;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct LockInfo {
    pub amount: u64,
    pub start_time: i64,
    pub expiry_time: i64,
    pub claimed: bool,
    pub has_lock: bool,
}

pub fn get_user_lock_info(ctx: Context<GetUserLockInfo>, user: Pubkey) -> Result<LockInfo> {
    let lock = &ctx.accounts.user_lock;
    let now = Clock::get()?.unix_timestamp;
    let info = LockInfo {
        amount: lock.amount,
        start_time: lock.start_time,
        expiry_time: lock.expiry_time,
        claimed: lock.claimed,
        has_lock: lock.has_lock(),
    };

    emit!(LockQuote {
        user,
        amount: info.amount,
        expiry_time: info.expiry_time,
        seconds_remaining: time::seconds_until(now, info.expiry_time),
        has_lock: info.has_lock,
    });
    Ok(info)
}

#[derive(Accounts)]
#[instruction(user: Pubkey)]
pub struct GetUserLockInfo<'info> {
    #[account(seeds = [LOCK_SEED, user.as_ref()], bump = user_lock.bump)]
    pub user_lock: Account<'info, UserLock>,
}

#[event]
pub struct LockQuote {
    pub user: Pubkey,
    pub amount: u64,
    pub expiry_time: i64,
    pub seconds_remaining: i64,
    pub has_lock: bool,
}
