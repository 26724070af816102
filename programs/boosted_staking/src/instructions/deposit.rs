//! Deposit instruction handler.
//!
//! Moves staked tokens into a pool's custody and opens a new stake order for
//! the recipient.

use anchor_lang::prelude::*;
use anchor_lang::solana_program::program_option::COption;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::*;
use crate::error::StakingError;
use crate::events::Deposited;
use crate::state::{BoostSnapshot, OrderBook, Registry};

/// Accounts required for depositing.
#[derive(Accounts)]
#[instruction(recipient: Pubkey, pool_index: u32)]
pub struct Deposit<'info> {
    /// The wallet paying the tokens.
    #[account(mut)]
    pub depositor: Signer<'info>,

    /// The registry.
    #[account(
        mut,
        seeds = [REGISTRY_SEED],
        bump = registry.bump
    )]
    pub registry: Account<'info, Registry>,

    /// Recipient's order book for this pool (created on first deposit).
    #[account(
        init_if_needed,
        payer = depositor,
        space = OrderBook::LEN,
        seeds = [
            ORDER_BOOK_SEED,
            registry.key().as_ref(),
            pool_index.to_le_bytes().as_ref(),
            recipient.as_ref()
        ],
        bump
    )]
    pub order_book: Account<'info, OrderBook>,

    /// Source of the deposited tokens; owned by or delegated to the depositor.
    #[account(mut)]
    pub depositor_token_account: Account<'info, TokenAccount>,

    /// The pool's custody vault.
    #[account(mut)]
    pub pool_vault: Account<'info, TokenAccount>,

    /// CHECK: Address checked against the registry, data decoded by `BoostSnapshot::load`.
    #[account(address = registry.boost_pool @ StakingError::BoostPoolMismatch)]
    pub boost_pool: UncheckedAccount<'info>,

    /// CHECK: Recipient's position PDA in the boost pool, address and data checked by `BoostSnapshot::load`.
    /// May be an uncreated account, which counts as a zero boost balance.
    pub boost_position: UncheckedAccount<'info>,

    /// System program.
    pub system_program: Program<'info, System>,

    /// Token program.
    pub token_program: Program<'info, Token>,
}

/// Deposit tokens into a pool on behalf of `recipient`.
///
/// # Arguments
/// * `ctx` - Deposit accounts context
/// * `recipient` - Account credited with the new order (may differ from the depositor)
/// * `pool_index` - Index of the pool in the registry
/// * `amount` - Amount of pool tokens to deposit
///
/// # Returns
/// Result indicating success or error
pub fn handler(
    ctx: Context<Deposit>,
    recipient: Pubkey,
    pool_index: u32,
    amount: u64,
) -> Result<()> {
    require!(amount > 0, StakingError::ZeroAmount);

    let depositor = ctx.accounts.depositor.key();
    let registry_key = ctx.accounts.registry.key();
    let pool = *ctx.accounts.registry.pool(pool_index)?;

    require_keys_eq!(
        ctx.accounts.pool_vault.key(),
        pool.vault,
        StakingError::VaultMismatch
    );

    let source = &ctx.accounts.depositor_token_account;
    require_keys_eq!(source.mint, pool.token_mint, StakingError::MintMismatch);
    check_source(
        &source.owner,
        source.delegate,
        source.delegated_amount,
        source.amount,
        &depositor,
        amount,
    )?;

    let clock = Clock::get()?;
    let boost = BoostSnapshot::load(
        &ctx.accounts.registry,
        &ctx.accounts.boost_pool,
        &ctx.accounts.boost_position,
        &recipient,
    )?;

    // First deposit into this (pool, recipient) pair
    let order_book = &mut ctx.accounts.order_book;
    if order_book.owner == Pubkey::default() {
        order_book.owner = recipient;
        order_book.registry = registry_key;
        order_book.pool_index = pool_index;
        order_book.bump = ctx.bumps.order_book;
    }

    let update = order_book.plan_deposit(&pool, amount, clock.unix_timestamp, &boost)?;
    let (order_index, order) = update.orders[0];

    // Transfer tokens from depositor to the pool vault
    let cpi_accounts = Transfer {
        from: ctx.accounts.depositor_token_account.to_account_info(),
        to: ctx.accounts.pool_vault.to_account_info(),
        authority: ctx.accounts.depositor.to_account_info(),
    };
    let cpi_program = ctx.accounts.token_program.to_account_info();
    let cpi_ctx = CpiContext::new(cpi_program, cpi_accounts);
    token::transfer(cpi_ctx, amount)?;

    let registry = &mut ctx.accounts.registry;
    let order_book = &mut ctx.accounts.order_book;
    order_book.commit(registry.pool_mut(pool_index)?, update)?;

    let pool = registry.pool(pool_index)?;
    msg!("Deposited {} tokens into pool {}", amount, pool_index);
    msg!(
        "Order {} for {} with weight {}",
        order_index,
        recipient,
        order.total_deposited_weight
    );
    msg!(
        "Pool total: {} (weight {})",
        pool.total_deposited,
        pool.total_deposited_weight
    );

    emit!(Deposited {
        depositor,
        recipient,
        pool_index,
        order_index,
        amount,
        weight: order.total_deposited_weight,
    });

    Ok(())
}

/// Checks that `depositor` may move `amount` out of a token account.
///
/// The depositor must own the account or be its delegate, in which case the
/// amount must fit the remaining allowance. The balance must cover it either way.
pub fn check_source(
    source_owner: &Pubkey,
    source_delegate: COption<Pubkey>,
    delegated_amount: u64,
    balance: u64,
    depositor: &Pubkey,
    amount: u64,
) -> Result<()> {
    if source_owner != depositor {
        require!(
            source_delegate == COption::Some(*depositor),
            StakingError::InvalidTokenAccountOwner
        );
        require!(
            delegated_amount >= amount,
            StakingError::InsufficientAllowance
        );
    }
    require!(balance >= amount, StakingError::InsufficientBalance);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owned_source_needs_balance() {
        let depositor = Pubkey::new_unique();

        assert!(check_source(&depositor, COption::None, 0, 1000, &depositor, 1000).is_ok());
        assert_eq!(
            check_source(&depositor, COption::None, 0, 999, &depositor, 1000).unwrap_err(),
            error!(StakingError::InsufficientBalance)
        );
    }

    #[test]
    fn test_delegated_source_needs_allowance_and_balance() {
        let owner = Pubkey::new_unique();
        let depositor = Pubkey::new_unique();
        let delegate = COption::Some(depositor);

        assert!(check_source(&owner, delegate, 500, 1000, &depositor, 500).is_ok());
        assert_eq!(
            check_source(&owner, delegate, 499, 1000, &depositor, 500).unwrap_err(),
            error!(StakingError::InsufficientAllowance)
        );
        assert_eq!(
            check_source(&owner, delegate, 500, 400, &depositor, 500).unwrap_err(),
            error!(StakingError::InsufficientBalance)
        );
    }

    #[test]
    fn test_foreign_source_without_delegation_is_rejected() {
        let owner = Pubkey::new_unique();
        let depositor = Pubkey::new_unique();

        assert_eq!(
            check_source(&owner, COption::None, 1000, 1000, &depositor, 1).unwrap_err(),
            error!(StakingError::InvalidTokenAccountOwner)
        );
        assert_eq!(
            check_source(
                &owner,
                COption::Some(Pubkey::new_unique()),
                1000,
                1000,
                &depositor,
                1
            )
            .unwrap_err(),
            error!(StakingError::InvalidTokenAccountOwner)
        );
    }
}
