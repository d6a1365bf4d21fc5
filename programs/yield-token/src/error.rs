use anchor_lang::prelude::*;

/// Custom error codes for the yield token program.
#[error_code]
pub enum YieldTokenError {
    // Ledger
    #[msg("Insufficient balance")]
    InsufficientBalance,

    #[msg("Insufficient allowance")]
    InsufficientAllowance,

    #[msg("Undistributed yield reserve is too small")]
    InsufficientReserve,

    #[msg("No supply is eligible for this distribution")]
    NoEligibleSupply,

    #[msg("Zero yield to claim")]
    ZeroYield,

    #[msg("Reserve accounts cannot send or receive transfers")]
    ReservedAccount,

    #[msg("Escrow holdings only move through their vesting or lock instance")]
    EscrowHolding,

    #[msg("Sender and receiver must differ")]
    SelfTransfer,

    #[msg("Holding does not belong to the expected owner")]
    InvalidHolding,

    #[msg("Exclusion list does not match the supplied holdings")]
    InvalidExclusionList,

    #[msg("Too many excluded accounts")]
    TooManyExclusions,

    #[msg("Unauthorized: distribution authority signature required")]
    UnauthorizedAuthority,

    #[msg("Unauthorized: holding owner signature required")]
    UnauthorizedOwner,

    #[msg("Invalid amount")]
    InvalidAmount,

    #[msg("Invalid public key")]
    InvalidPubkey,

    // Vesting
    #[msg("Unauthorized: grantor signature required")]
    UnauthorizedGrantor,

    #[msg("Unauthorized: beneficiary signature required")]
    UnauthorizedBeneficiary,

    #[msg("Vesting cliff must be non-zero and not longer than the duration")]
    InvalidCliff,

    #[msg("Initial claimable should be less than the total amount")]
    InvalidInitialClaimable,

    #[msg("Token grant already exists")]
    GrantExists,

    #[msg("No token grant")]
    NoGrant,

    #[msg("Zero amount vested")]
    ZeroVested,

    #[msg("Initial claimable already collected")]
    AlreadyCollected,

    #[msg("Initial claimable not claimable before token grant start time")]
    NotYetStarted,

    #[msg("Zero claims")]
    ZeroClaims,

    #[msg("Invalid timestamp")]
    InvalidTimestamp,

    // Locking
    #[msg("Unauthorized: lock vault operator signature required")]
    UnauthorizedOperator,

    #[msg("User already created a lock")]
    AlreadyLocked,

    #[msg("Expiry can not be equal to zero")]
    ZeroExpiry,

    #[msg("Expiry time is too low")]
    ExpiryTooSoon,

    #[msg("Token amount is too low")]
    AmountTooLow,

    #[msg("Asset have not expired")]
    NotExpired,

    #[msg("Asset have already been claimed")]
    AlreadyClaimed,

    #[msg("User has no lock")]
    NoLock,

    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
}
