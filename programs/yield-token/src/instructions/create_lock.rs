use anchor_lang::prelude::*;

use crate::constants::{HOLDING_SEED, LEDGER_SEED, LOCK_SEED, LOCK_VAULT_SEED};
use crate::state::{Holding, Ledger, LockVault, UserLock};
use crate::utils::{escrow, settlement};

pub fn create_lock(mut ctx: Context<CreateLock>, amount: u64, expiry_time: i64) -> Result<()> {
    let user = ctx.accounts.user.key();
    let user_lock_key = ctx.accounts.user_lock.key();
    let now = Clock::get()?.unix_timestamp;

    // first lock of this user: the slot was just created
    if ctx.accounts.user_lock.user == Pubkey::default() {
        let lock = &mut ctx.accounts.user_lock;
        lock.user = user;
        lock.bump = ctx.bumps.user_lock;
    }
    settlement::adopt_escrow(
        &ctx.accounts.ledger,
        &mut ctx.accounts.escrow,
        user_lock_key,
        ctx.bumps.escrow,
    );

    let accounts = &mut ctx.accounts;
    escrow::open_lock(
        &mut accounts.ledger,
        &mut accounts.vault,
        &mut accounts.user_lock,
        &mut accounts.user_holding,
        &mut accounts.escrow,
        amount,
        expiry_time,
        now,
    )?;

    emit!(LockCreated {
        user,
        amount,
        start_time: now,
        expiry_time,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct CreateLock<'info> {
    #[account(mut, seeds = [LEDGER_SEED], bump = ledger.bump)]
    pub ledger: Account<'info, Ledger>,

    #[account(mut, seeds = [LOCK_VAULT_SEED], bump = vault.bump)]
    pub vault: Account<'info, LockVault>,

    #[account(
        init_if_needed,
        payer = user,
        space = 8 + UserLock::SIZE,
        seeds = [LOCK_SEED, user.key().as_ref()],
        bump
    )]
    pub user_lock: Account<'info, UserLock>,

    #[account(
        init_if_needed,
        payer = user,
        space = 8 + Holding::SIZE,
        seeds = [HOLDING_SEED, user_lock.key().as_ref()],
        bump
    )]
    pub escrow: Account<'info, Holding>,

    #[account(
        mut,
        seeds = [HOLDING_SEED, user.key().as_ref()],
        bump = user_holding.bump
    )]
    pub user_holding: Account<'info, Holding>,

    #[account(mut)]
    pub user: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct LockCreated {
    pub user: Pubkey,
    pub amount: u64,
    pub start_time: i64,
    pub expiry_time: i64,
}
