//! Claim instruction handler.
//!
//! Handles paying out vesting-adjusted rewards for a set of the caller's
//! stake orders.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::*;
use crate::error::StakingError;
use crate::events::RewardClaimed;
use crate::state::{OrderBook, Registry};

/// Accounts required for claiming rewards.
#[derive(Accounts)]
#[instruction(pool_index: u32)]
pub struct Claim<'info> {
    /// The order owner claiming rewards.
    pub owner: Signer<'info>,

    /// The registry.
    #[account(
        mut,
        seeds = [REGISTRY_SEED],
        bump = registry.bump,
        has_one = reward_vault @ StakingError::VaultMismatch
    )]
    pub registry: Account<'info, Registry>,

    /// Owner's order book for this pool.
    #[account(
        mut,
        seeds = [
            ORDER_BOOK_SEED,
            registry.key().as_ref(),
            pool_index.to_le_bytes().as_ref(),
            owner.key().as_ref()
        ],
        bump = order_book.bump,
        has_one = owner @ StakingError::Unauthorized
    )]
    pub order_book: Account<'info, OrderBook>,

    /// Owner's token account for receiving rewards.
    #[account(
        mut,
        constraint = owner_token_account.mint == registry.reward_mint @ StakingError::MintMismatch,
        constraint = owner_token_account.owner == owner.key() @ StakingError::InvalidTokenAccountOwner
    )]
    pub owner_token_account: Account<'info, TokenAccount>,

    /// Registry's reward vault.
    #[account(mut)]
    pub reward_vault: Account<'info, TokenAccount>,

    /// Token program.
    pub token_program: Program<'info, Token>,
}

/// Claim rewards for the given orders.
///
/// # Arguments
/// * `ctx` - Claim accounts context
/// * `pool_index` - Index of the pool in the registry
/// * `order_indices` - Orders to claim for
///
/// # Errors
/// `InvalidIndex` for an unknown order, `NoClaimableReward` if any listed
/// order has nothing to pay, `InsufficientCustodyBalance` if the reward vault
/// cannot cover the total.
pub fn handler(ctx: Context<Claim>, pool_index: u32, order_indices: Vec<u32>) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    let clock = Clock::get()?;

    let registry = &ctx.accounts.registry;
    let pool = *registry.pool(pool_index)?;
    let pool_reward_rate = registry.pool_reward_rate(pool_index)?;

    let update = ctx.accounts.order_book.plan_claim(
        &pool,
        pool_reward_rate,
        &order_indices,
        clock.unix_timestamp,
    )?;
    let payout = update.amount;

    update.ensure_covered_by(ctx.accounts.reward_vault.amount)?;
    let total_distributed = registry
        .total_distributed
        .checked_add(payout)
        .ok_or(StakingError::MathOverflow)?;

    // Transfer rewards from vault to owner using the registry PDA signer
    let seeds = &[REGISTRY_SEED, &[registry.bump]];
    let signer_seeds = &[&seeds[..]];

    let cpi_accounts = Transfer {
        from: ctx.accounts.reward_vault.to_account_info(),
        to: ctx.accounts.owner_token_account.to_account_info(),
        authority: ctx.accounts.registry.to_account_info(),
    };
    let cpi_program = ctx.accounts.token_program.to_account_info();
    let cpi_ctx = CpiContext::new_with_signer(cpi_program, cpi_accounts, signer_seeds);
    token::transfer(cpi_ctx, payout)?;

    let registry = &mut ctx.accounts.registry;
    let order_book = &mut ctx.accounts.order_book;
    order_book.commit(registry.pool_mut(pool_index)?, update)?;
    registry.total_distributed = total_distributed;

    msg!("Claimed {} reward tokens from pool {}", payout, pool_index);
    msg!("Orders: {:?}", order_indices);
    msg!("Total distributed: {}", registry.total_distributed);

    emit!(RewardClaimed {
        owner,
        pool_index,
        order_indices,
        amount: payout,
    });

    Ok(())
}
