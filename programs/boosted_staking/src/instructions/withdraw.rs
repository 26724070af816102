//! Withdraw instruction handler.
//!
//! Handles returning principal from one or more of the caller's stake orders.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::*;
use crate::error::StakingError;
use crate::events::Withdrawn;
use crate::state::{BoostSnapshot, OrderBook, Registry};

/// Accounts required for withdrawing.
#[derive(Accounts)]
#[instruction(pool_index: u32)]
pub struct Withdraw<'info> {
    /// The order owner withdrawing principal.
    pub owner: Signer<'info>,

    /// The registry.
    #[account(
        mut,
        seeds = [REGISTRY_SEED],
        bump = registry.bump
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

    /// Owner's token account receiving the principal.
    #[account(
        mut,
        constraint = owner_token_account.owner == owner.key() @ StakingError::InvalidTokenAccountOwner
    )]
    pub owner_token_account: Account<'info, TokenAccount>,

    /// The pool's custody vault.
    #[account(mut)]
    pub pool_vault: Account<'info, TokenAccount>,

    /// CHECK: Address checked against the registry, data decoded by `BoostSnapshot::load`.
    #[account(address = registry.boost_pool @ StakingError::BoostPoolMismatch)]
    pub boost_pool: UncheckedAccount<'info>,

    /// CHECK: Owner's position PDA in the boost pool, address and data checked by `BoostSnapshot::load`.
    pub boost_position: UncheckedAccount<'info>,

    /// Token program.
    pub token_program: Program<'info, Token>,
}

/// Withdraw principal from the caller's orders.
///
/// Every entry is validated before any state changes; the summed amount is
/// returned with a single transfer.
///
/// # Arguments
/// * `ctx` - Withdraw accounts context
/// * `pool_index` - Index of the pool in the registry
/// * `order_indices` - Orders to withdraw from
/// * `amounts` - Amount to withdraw from each order
///
/// # Errors
/// `LengthMismatch`, `InvalidIndex` or `InsufficientPrincipal` for bad
/// entries; `InsufficientCustodyBalance` if the vault cannot cover the total.
pub fn handler(
    ctx: Context<Withdraw>,
    pool_index: u32,
    order_indices: Vec<u32>,
    amounts: Vec<u64>,
) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    let pool = *ctx.accounts.registry.pool(pool_index)?;

    require_keys_eq!(
        ctx.accounts.pool_vault.key(),
        pool.vault,
        StakingError::VaultMismatch
    );
    require_keys_eq!(
        ctx.accounts.owner_token_account.mint,
        pool.token_mint,
        StakingError::MintMismatch
    );

    let boost = BoostSnapshot::load(
        &ctx.accounts.registry,
        &ctx.accounts.boost_pool,
        &ctx.accounts.boost_position,
        &owner,
    )?;

    let update = ctx
        .accounts
        .order_book
        .plan_withdraw(&pool, &order_indices, &amounts, &boost)?;
    let amount = update.amount;

    update.ensure_covered_by(ctx.accounts.pool_vault.amount)?;

    // Transfer principal from vault to owner using the registry PDA signer
    if amount > 0 {
        let seeds = &[REGISTRY_SEED, &[ctx.accounts.registry.bump]];
        let signer_seeds = &[&seeds[..]];

        let cpi_accounts = Transfer {
            from: ctx.accounts.pool_vault.to_account_info(),
            to: ctx.accounts.owner_token_account.to_account_info(),
            authority: ctx.accounts.registry.to_account_info(),
        };
        let cpi_program = ctx.accounts.token_program.to_account_info();
        let cpi_ctx = CpiContext::new_with_signer(cpi_program, cpi_accounts, signer_seeds);
        token::transfer(cpi_ctx, amount)?;
    }

    let registry = &mut ctx.accounts.registry;
    let order_book = &mut ctx.accounts.order_book;
    order_book.commit(registry.pool_mut(pool_index)?, update)?;

    let pool = registry.pool(pool_index)?;
    msg!("Withdrew {} tokens from pool {}", amount, pool_index);
    msg!("Orders: {:?}", order_indices);
    msg!(
        "Pool total: {} (weight {})",
        pool.total_deposited,
        pool.total_deposited_weight
    );

    emit!(Withdrawn {
        owner,
        pool_index,
        order_indices,
        amount,
    });

    Ok(())
}
