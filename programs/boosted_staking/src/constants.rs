//! Program constants for the Boosted Staking program.
//!
//! This module defines all constant values used throughout the staking program,
//! including PDA seeds, time periods, weight ratios and account capacities.

/// Seed for deriving the registry PDA
pub const REGISTRY_SEED: &[u8] = b"registry";

/// Seed for deriving pool vault PDAs: ["pool_vault", registry, pool_index]
pub const POOL_VAULT_SEED: &[u8] = b"pool_vault";

/// Seed for deriving the reward vault PDA: ["reward_vault", registry]
pub const REWARD_VAULT_SEED: &[u8] = b"reward_vault";

/// Seed for deriving order book PDAs: ["order_book", registry, pool_index, owner]
pub const ORDER_BOOK_SEED: &[u8] = b"order_book";

/// Seed of a user's position PDA under the boost program: ["position", boost_pool, owner]
pub const BOOST_POSITION_SEED: &[u8] = b"position";

/// Number of seconds in a day
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Number of seconds in a year (365 days)
pub const SECONDS_PER_YEAR: u64 = 365 * 86_400;

/// Period after deposit during which claimable rewards are linearly discounted
pub const VESTING_PERIOD: u64 = SECONDS_PER_YEAR;

/// Basis points denominator (100% = 10000 basis points)
pub const BASIS_POINTS_DENOMINATOR: u64 = 10_000;

/// Share of its own principal every order carries as weight (40%)
pub const BASE_WEIGHT_BPS: u64 = 4_000;

/// Share of the pool total that a full boost pool position adds (60%)
pub const BOOST_WEIGHT_BPS: u64 = 6_000;

/// Maximum number of pools the registry account can hold
pub const MAX_POOLS: usize = 16;

/// Maximum number of orders a single order book account can hold
pub const MAX_ORDERS_PER_BOOK: usize = 32;

/// Size of the Anchor account discriminator prefix
pub const DISCRIMINATOR_LEN: usize = 8;
