//! Error types for the Boosted Staking program.
//!
//! This module defines all custom error codes that can be returned by the program.
//! Each error has a unique code and descriptive message.
//!
//! ## Error Code Ranges
//! - 6000-6009: Input validation errors
//! - 6010-6019: Ledger/balance errors
//! - 6020-6029: Math/overflow errors
//! - 6030-6039: Authorization errors
//! - 6040-6049: Account validation errors

use anchor_lang::prelude::*;

/// Custom error codes for the Boosted Staking program.
///
/// Error codes start at 6000 (Anchor's custom error offset).
#[error_code]
pub enum StakingError {
    // ========== Input Validation Errors (6000-6009) ==========

    /// [6000] Cannot deposit, withdraw or fund with zero amount.
    #[msg("Amount must be greater than zero")]
    ZeroAmount,

    /// [6001] A pool for this token is already registered.
    #[msg("A pool for this token already exists")]
    DuplicatePool,

    /// [6002] Batched arguments have different lengths.
    #[msg("Input array lengths do not match")]
    LengthMismatch,

    /// [6003] Order index is past the end of the account's order list.
    #[msg("Order index out of range")]
    InvalidIndex,

    /// [6004] Pool index is past the end of the registry.
    #[msg("Pool index out of range")]
    InvalidPoolIndex,

    /// [6005] The registry cannot hold another pool.
    #[msg("Maximum number of pools reached")]
    TooManyPools,

    /// [6006] The order book cannot hold another order.
    #[msg("Maximum number of orders for this pool reached")]
    OrderBookFull,

    // ========== Ledger/Balance Errors (6010-6019) ==========

    /// [6010] Withdraw amount exceeds the order's remaining principal.
    #[msg("Withdraw amount exceeds order principal")]
    InsufficientPrincipal,

    /// [6011] Computed payout for an order is zero.
    #[msg("No claimable reward for this order")]
    NoClaimableReward,

    /// [6012] Source token account holds less than the requested amount.
    #[msg("Insufficient token balance")]
    InsufficientBalance,

    /// [6013] Caller is a delegate whose approved amount is too small.
    #[msg("Insufficient delegated allowance")]
    InsufficientAllowance,

    /// [6014] Program vault holds less than the requested payout.
    #[msg("Insufficient custody balance")]
    InsufficientCustodyBalance,

    // ========== Math/Overflow Errors (6020-6029) ==========

    /// [6020] Arithmetic overflow occurred during calculation.
    #[msg("Arithmetic overflow occurred during calculation")]
    MathOverflow,

    // ========== Authorization Errors (6030-6039) ==========

    /// [6030] Caller is neither the registry authority nor the affected account.
    #[msg("Unauthorized: caller may not perform this operation")]
    Unauthorized,

    /// [6031] New authority is the zero address.
    #[msg("New authority must not be the default pubkey")]
    InvalidAuthority,

    // ========== Account Validation Errors (6040-6049) ==========

    /// [6040] Token account mint does not match the pool or reward mint.
    #[msg("Token mint mismatch")]
    MintMismatch,

    /// [6041] The provided vault is not the pool's custody vault.
    #[msg("Vault address mismatch")]
    VaultMismatch,

    /// [6042] Token account is not owned by the expected wallet.
    #[msg("Token account owner mismatch")]
    InvalidTokenAccountOwner,

    /// [6043] The provided boost pool is not the one wired into the registry.
    #[msg("Boost pool address mismatch")]
    BoostPoolMismatch,

    /// [6044] Boost pool or position data cannot be decoded or belongs elsewhere.
    #[msg("Invalid boost account")]
    InvalidBoostAccount,
}
