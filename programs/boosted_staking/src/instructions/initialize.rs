/// Initialize instruction handler.
///
/// Creates the registry that holds global reward configuration and every
/// pool record, together with the shared reward vault.
///
/// ## Security Guarantees
/// - Reward vault is a PDA owned by the registry
/// - Reward mint and boost pool wiring are locked to registry state
/// - Registry PDA has a single fixed seed, so it can only be created once

use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::*;
use crate::events::RegistryInitialized;
use crate::state::Registry;

/// Accounts required for registry initialization.
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// The admin authority that will control the registry.
    #[account(mut)]
    pub authority: Signer<'info>,

    /// The registry account to be created.
    #[account(
        init,
        payer = authority,
        space = Registry::LEN,
        seeds = [REGISTRY_SEED],
        bump
    )]
    pub registry: Account<'info, Registry>,

    /// The single reward asset shared by all pools.
    pub reward_mint: Account<'info, Mint>,

    /// The vault that will hold reward tokens.
    /// SECURITY: PDA with the registry as token authority.
    #[account(
        init,
        payer = authority,
        seeds = [REWARD_VAULT_SEED, registry.key().as_ref()],
        bump,
        token::mint = reward_mint,
        token::authority = registry
    )]
    pub reward_vault: Account<'info, TokenAccount>,

    /// The external boost pool whose balances feed order weights.
    /// CHECK: Only its address and owning program are recorded here; the data
    /// is decoded by `BoostSnapshot::load` whenever a weight is computed.
    pub boost_pool: UncheckedAccount<'info>,

    /// System program for account creation.
    pub system_program: Program<'info, System>,

    /// Token program for token account operations.
    pub token_program: Program<'info, Token>,

    /// Rent sysvar for rent-exempt calculations.
    pub rent: Sysvar<'info, Rent>,
}

/// Initialize the registry.
///
/// # Arguments
/// * `ctx` - Initialize accounts context
/// * `reward_rate` - Global emission rate in reward tokens per second
///
/// # Returns
/// Result indicating success or error
pub fn handler(ctx: Context<Initialize>, reward_rate: u64) -> Result<()> {
    let registry = &mut ctx.accounts.registry;

    registry.authority = ctx.accounts.authority.key();
    registry.reward_mint = ctx.accounts.reward_mint.key();
    registry.reward_vault = ctx.accounts.reward_vault.key();
    registry.boost_pool = ctx.accounts.boost_pool.key();
    registry.boost_program = *ctx.accounts.boost_pool.owner;
    registry.reward_rate = reward_rate;
    registry.total_reward_weight = 0;
    registry.total_distributed = 0;
    registry.pools = Vec::new();

    registry.bump = ctx.bumps.registry;
    registry.reward_vault_bump = ctx.bumps.reward_vault;

    msg!("Boosted staking registry initialized");
    msg!("Admin: {}", registry.authority);
    msg!("Reward mint: {}", registry.reward_mint);
    msg!("Boost pool: {} (program {})", registry.boost_pool, registry.boost_program);
    msg!("Reward rate: {}/s", reward_rate);

    emit!(RegistryInitialized {
        authority: registry.authority,
        reward_mint: registry.reward_mint,
        boost_pool: registry.boost_pool,
        reward_rate,
    });

    Ok(())
}
