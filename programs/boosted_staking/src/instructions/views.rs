//! Read-only instructions returning values through Anchor return data.
//!
//! Every other query is served by fetching the registry or an order book and
//! using the accessor methods on those types.

use anchor_lang::prelude::*;

use crate::constants::*;
use crate::state::{OrderBook, Registry};

/// Accounts required for registry queries.
#[derive(Accounts)]
pub struct RegistryView<'info> {
    #[account(seeds = [REGISTRY_SEED], bump = registry.bump)]
    pub registry: Account<'info, Registry>,
}

/// Accounts required for order queries.
#[derive(Accounts)]
#[instruction(pool_index: u32, owner: Pubkey)]
pub struct OrderView<'info> {
    #[account(seeds = [REGISTRY_SEED], bump = registry.bump)]
    pub registry: Account<'info, Registry>,

    #[account(
        seeds = [
            ORDER_BOOK_SEED,
            registry.key().as_ref(),
            pool_index.to_le_bytes().as_ref(),
            owner.as_ref()
        ],
        bump = order_book.bump
    )]
    pub order_book: Account<'info, OrderBook>,
}

/// The pool's current share of the global reward rate.
pub fn pool_reward_rate_handler(ctx: Context<RegistryView>, pool_index: u32) -> Result<u64> {
    ctx.accounts.registry.pool_reward_rate(pool_index)
}

/// What a claim on a single order would pay right now; zero instead of
/// `NoClaimableReward`.
pub fn pending_reward_handler(
    ctx: Context<OrderView>,
    pool_index: u32,
    _owner: Pubkey,
    order_index: u32,
) -> Result<u64> {
    let registry = &ctx.accounts.registry;
    let pool = registry.pool(pool_index)?;
    let order = ctx.accounts.order_book.order(order_index)?;
    let clock = Clock::get()?;

    order.claimable_reward(
        pool,
        registry.pool_reward_rate(pool_index)?,
        clock.unix_timestamp,
    )
}
