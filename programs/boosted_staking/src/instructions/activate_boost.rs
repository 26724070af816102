//! Activate boost instruction handler.
//!
//! Recomputes the weight of existing orders from a fresh boost snapshot,
//! typically after the owner has added to their boost pool position.

use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::StakingError;
use crate::events::BoostActivated;
use crate::state::{BoostSnapshot, OrderBook, Registry};

/// Accounts required for boost activation.
#[derive(Accounts)]
#[instruction(pool_index: u32, account: Pubkey)]
pub struct ActivateBoost<'info> {
    /// Either the registry authority or the order owner.
    #[account(
        constraint = registry.can_activate_boost(&caller.key(), &account)
            @ StakingError::Unauthorized
    )]
    pub caller: Signer<'info>,

    /// The registry.
    #[account(
        mut,
        seeds = [REGISTRY_SEED],
        bump = registry.bump
    )]
    pub registry: Account<'info, Registry>,

    /// The owner's order book for this pool.
    #[account(
        mut,
        seeds = [
            ORDER_BOOK_SEED,
            registry.key().as_ref(),
            pool_index.to_le_bytes().as_ref(),
            account.as_ref()
        ],
        bump = order_book.bump
    )]
    pub order_book: Account<'info, OrderBook>,

    /// CHECK: Address checked against the registry, data decoded by `BoostSnapshot::load`.
    #[account(address = registry.boost_pool @ StakingError::BoostPoolMismatch)]
    pub boost_pool: UncheckedAccount<'info>,

    /// CHECK: Owner's position PDA in the boost pool, address and data checked by `BoostSnapshot::load`.
    /// May be an uncreated account, which counts as a zero boost balance.
    pub boost_position: UncheckedAccount<'info>,
}

/// Refresh order weights for `account` in a pool.
///
/// # Arguments
/// * `ctx` - ActivateBoost accounts context
/// * `pool_index` - Index of the pool in the registry
/// * `account` - Owner of the orders
/// * `order_indices` - Orders to recompute
pub fn handler(
    ctx: Context<ActivateBoost>,
    pool_index: u32,
    account: Pubkey,
    order_indices: Vec<u32>,
) -> Result<()> {
    let pool = *ctx.accounts.registry.pool(pool_index)?;

    let boost = BoostSnapshot::load(
        &ctx.accounts.registry,
        &ctx.accounts.boost_pool,
        &ctx.accounts.boost_position,
        &account,
    )?;

    let update = ctx
        .accounts
        .order_book
        .plan_reweigh(&pool, &order_indices, &boost)?;

    let registry = &mut ctx.accounts.registry;
    let order_book = &mut ctx.accounts.order_book;
    order_book.commit(registry.pool_mut(pool_index)?, update)?;

    let pool_total_weight = registry.pool(pool_index)?.total_deposited_weight;
    msg!("Boost activated for {} in pool {}", account, pool_index);
    msg!(
        "Boost balance {} of {}",
        boost.user_balance,
        boost.pool_total
    );
    msg!("Pool weight: {}", pool_total_weight);

    emit!(BoostActivated {
        owner: account,
        pool_index,
        order_indices,
        pool_total_weight,
    });

    Ok(())
}
