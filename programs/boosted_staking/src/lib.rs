//! # Boosted Staking Program
//!
//! A multi-pool staking ledger that shares one reward emission rate across
//! several staked tokens.
//!
//! - Each pool receives `reward_rate * reward_weight / total_reward_weight`
//! - Each deposit opens a stake order whose weight is 40% of its principal,
//!   topped up by the owner's share of an external boost pool, capped at 100%
//! - Rewards accrue per order by weight and are linearly discounted until the
//!   order is one year old
//!
//! ## Features
//! - Deposit on behalf of another account
//! - Batched, all-or-nothing withdraw and claim over order indices
//! - Boost re-activation without moving principal
//! - Admin controls for pool creation, reward weights and reward rate
//! - Safe math with overflow protection

use anchor_lang::prelude::*;

declare_id!("BsTk8pV3cJ4Q9rW2mZxN7fHq5LdYe6GuA1oRtKs3vPwM");

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod math;
pub mod state;

use instructions::*;

#[program]
pub mod boosted_staking {
    use super::*;

    /// Initializes the registry and the shared reward vault.
    ///
    /// # Arguments
    /// * `ctx` - The context containing all accounts needed for initialization
    /// * `reward_rate` - Global emission rate in reward tokens per second
    pub fn initialize(ctx: Context<Initialize>, reward_rate: u64) -> Result<()> {
        instructions::initialize::handler(ctx, reward_rate)
    }

    /// Registers a pool for a new staked token and returns its index.
    ///
    /// # Errors
    /// Returns an error if:
    /// - Caller is not the admin
    /// - A pool for the token already exists
    /// - The registry is full
    pub fn create_pool(ctx: Context<CreatePool>) -> Result<u32> {
        instructions::create_pool::handler(ctx)
    }

    /// Admin function to replace every pool's reward weight.
    ///
    /// # Arguments
    /// * `ctx` - The context containing admin accounts
    /// * `weights` - One weight per pool, in pool index order
    ///
    /// # Errors
    /// Returns an error if the caller is not the admin or the length differs
    /// from the pool count.
    pub fn set_reward_weights(ctx: Context<AdminControl>, weights: Vec<u64>) -> Result<()> {
        instructions::admin::set_reward_weights_handler(ctx, weights)
    }

    /// Admin function to set the global reward rate.
    ///
    /// # Arguments
    /// * `ctx` - The context containing admin accounts
    /// * `reward_rate` - Reward tokens emitted per second across all pools
    pub fn set_reward_rate(ctx: Context<AdminControl>, reward_rate: u64) -> Result<()> {
        instructions::admin::set_reward_rate_handler(ctx, reward_rate)
    }

    /// Admin function to transfer authority to a new address.
    pub fn transfer_authority(ctx: Context<AdminControl>, new_authority: Pubkey) -> Result<()> {
        instructions::admin::transfer_authority_handler(ctx, new_authority)
    }

    /// Funds the reward vault with reward tokens.
    pub fn fund_rewards(ctx: Context<FundRewards>, amount: u64) -> Result<()> {
        instructions::fund_rewards::handler(ctx, amount)
    }

    /// Deposits pool tokens and opens a stake order for `recipient`.
    ///
    /// # Arguments
    /// * `ctx` - The context containing all accounts needed for depositing
    /// * `recipient` - Account credited with the order
    /// * `pool_index` - Pool to deposit into
    /// * `amount` - Amount of pool tokens
    ///
    /// # Errors
    /// Returns an error if:
    /// - Amount is zero
    /// - Pool index is unknown
    /// - Insufficient balance or allowance
    pub fn deposit(
        ctx: Context<Deposit>,
        recipient: Pubkey,
        pool_index: u32,
        amount: u64,
    ) -> Result<()> {
        instructions::deposit::handler(ctx, recipient, pool_index, amount)
    }

    /// Withdraws principal from the caller's orders.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The two arrays differ in length
    /// - An order index is out of range
    /// - An amount exceeds the order's principal
    pub fn withdraw(
        ctx: Context<Withdraw>,
        pool_index: u32,
        order_indices: Vec<u32>,
        amounts: Vec<u64>,
    ) -> Result<()> {
        instructions::withdraw::handler(ctx, pool_index, order_indices, amounts)
    }

    /// Recomputes order weights of `account` from its current boost balance.
    ///
    /// Callable by the admin or by `account` itself.
    pub fn activate_boost(
        ctx: Context<ActivateBoost>,
        pool_index: u32,
        account: Pubkey,
        order_indices: Vec<u32>,
    ) -> Result<()> {
        instructions::activate_boost::handler(ctx, pool_index, account, order_indices)
    }

    /// Claims vesting-adjusted rewards for the caller's orders.
    ///
    /// # Errors
    /// Returns an error if:
    /// - No orders are listed, or an order index is out of range
    /// - Any listed order has nothing to claim
    /// - The reward vault has insufficient funds
    pub fn claim(ctx: Context<Claim>, pool_index: u32, order_indices: Vec<u32>) -> Result<()> {
        instructions::claim::handler(ctx, pool_index, order_indices)
    }

    /// Returns the pool's share of the global reward rate.
    pub fn pool_reward_rate(ctx: Context<RegistryView>, pool_index: u32) -> Result<u64> {
        instructions::views::pool_reward_rate_handler(ctx, pool_index)
    }

    /// Returns what a claim on one order would pay right now.
    pub fn pending_reward(
        ctx: Context<OrderView>,
        pool_index: u32,
        owner: Pubkey,
        order_index: u32,
    ) -> Result<u64> {
        instructions::views::pending_reward_handler(ctx, pool_index, owner, order_index)
    }
}
