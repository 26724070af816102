/// Admin instruction handlers.
///
/// Handles registry-wide configuration: reward weights, the global reward
/// rate and authority hand-over.
///
/// ## Security Guarantees
/// - All admin functions require signer == registry.authority
/// - PDA validation ensures the canonical registry

use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::StakingError;
use crate::events::{AuthorityTransferred, RewardRateUpdated, RewardWeightsUpdated};
use crate::state::Registry;

/// Accounts required for admin operations.
#[derive(Accounts)]
pub struct AdminControl<'info> {
    /// The admin authority.
    /// SECURITY: Must be signer AND match registry.authority.
    pub authority: Signer<'info>,

    /// The registry to modify.
    #[account(
        mut,
        seeds = [REGISTRY_SEED],
        bump = registry.bump,
        has_one = authority @ StakingError::Unauthorized
    )]
    pub registry: Account<'info, Registry>,
}

/// Replace the reward weight of every pool.
///
/// # Arguments
/// * `ctx` - AdminControl accounts context
/// * `weights` - One weight per pool, in pool index order
///
/// # Errors
/// `LengthMismatch` unless there is exactly one weight per pool.
pub fn set_reward_weights_handler(ctx: Context<AdminControl>, weights: Vec<u64>) -> Result<()> {
    let registry = &mut ctx.accounts.registry;

    registry.set_reward_weights(&weights)?;

    msg!("Reward weights updated: {:?}", weights);
    msg!("Total reward weight: {}", registry.total_reward_weight);

    emit!(RewardWeightsUpdated {
        weights,
        total_reward_weight: registry.total_reward_weight,
    });

    Ok(())
}

/// Set the global reward emission rate.
///
/// Takes effect immediately for every pool. Unclaimed windows are paid at the
/// rate current at claim time.
///
/// # Arguments
/// * `ctx` - AdminControl accounts context
/// * `reward_rate` - Reward tokens emitted per second across all pools
pub fn set_reward_rate_handler(ctx: Context<AdminControl>, reward_rate: u64) -> Result<()> {
    let registry = &mut ctx.accounts.registry;

    let old_rate = registry.reward_rate;
    registry.reward_rate = reward_rate;

    msg!("Reward rate updated: {} -> {}", old_rate, reward_rate);

    emit!(RewardRateUpdated {
        old_rate,
        new_rate: reward_rate,
    });

    Ok(())
}

/// Transfer admin authority to a new address.
///
/// # Arguments
/// * `ctx` - AdminControl accounts context
/// * `new_authority` - New admin pubkey
///
/// # Errors
/// `InvalidAuthority` if the new authority is the default pubkey.
pub fn transfer_authority_handler(
    ctx: Context<AdminControl>,
    new_authority: Pubkey,
) -> Result<()> {
    require!(
        new_authority != Pubkey::default(),
        StakingError::InvalidAuthority
    );

    let registry = &mut ctx.accounts.registry;

    let old_authority = registry.authority;
    registry.authority = new_authority;

    msg!("Authority transferred: {} -> {}", old_authority, new_authority);

    emit!(AuthorityTransferred {
        old_authority,
        new_authority,
    });

    Ok(())
}
