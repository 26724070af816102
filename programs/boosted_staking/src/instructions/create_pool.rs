/// Create pool instruction handler.
///
/// Registers a new reward-eligible pool for a staked token and creates its
/// custody vault.
///
/// ## Security Guarantees
/// - One pool per token mint (`DuplicatePool`)
/// - Vault is a PDA keyed by pool index with the registry as token authority

use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::*;
use crate::error::StakingError;
use crate::events::PoolCreated;
use crate::state::{PoolInfo, Registry};

/// Accounts required for pool creation.
#[derive(Accounts)]
pub struct CreatePool<'info> {
    /// The admin authority, paying for the vault.
    #[account(mut)]
    pub authority: Signer<'info>,

    /// The registry receiving the new pool.
    #[account(
        mut,
        seeds = [REGISTRY_SEED],
        bump = registry.bump,
        has_one = authority @ StakingError::Unauthorized
    )]
    pub registry: Account<'info, Registry>,

    /// The token staked in the new pool.
    pub token_mint: Account<'info, Mint>,

    /// Custody vault for the pool's staked principal.
    #[account(
        init,
        payer = authority,
        seeds = [POOL_VAULT_SEED, registry.key().as_ref(), registry.next_pool_seed().as_ref()],
        bump,
        token::mint = token_mint,
        token::authority = registry
    )]
    pub pool_vault: Account<'info, TokenAccount>,

    /// System program for account creation.
    pub system_program: Program<'info, System>,

    /// Token program for token account operations.
    pub token_program: Program<'info, Token>,

    /// Rent sysvar for rent-exempt calculations.
    pub rent: Sysvar<'info, Rent>,
}

/// Create a pool for `token_mint`.
///
/// The pool starts with zeroed aggregates and a reward weight of zero; it
/// earns nothing until `set_reward_weights` assigns it a share.
///
/// # Returns
/// The index of the new pool.
pub fn handler(ctx: Context<CreatePool>) -> Result<u32> {
    let token_mint = ctx.accounts.token_mint.key();
    let vault = ctx.accounts.pool_vault.key();
    let vault_bump = ctx.bumps.pool_vault;

    let registry = &mut ctx.accounts.registry;

    let pool_index = registry.add_pool(PoolInfo::new(token_mint, vault, vault_bump))?;

    msg!("Pool {} created for mint {}", pool_index, token_mint);
    msg!("Vault: {}", vault);
    msg!("Pool count: {}", registry.pool_count());

    emit!(PoolCreated {
        pool_index,
        token_mint,
        vault,
    });

    Ok(pool_index)
}
