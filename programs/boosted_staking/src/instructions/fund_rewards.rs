/// Fund rewards instruction handler.
///
/// Handles depositing reward tokens into the shared reward vault.
///
/// ## Security Guarantees
/// - Vault validation ensures the registry's reward PDA
/// - Mint validation prevents wrong token deposits
/// - Anyone can fund (no admin restriction)

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::*;
use crate::error::StakingError;
use crate::events::RewardsFunded;
use crate::state::Registry;

/// Accounts required for funding the reward vault.
#[derive(Accounts)]
pub struct FundRewards<'info> {
    /// The funder (anyone can fund - no admin restriction).
    pub funder: Signer<'info>,

    /// The registry.
    #[account(
        seeds = [REGISTRY_SEED],
        bump = registry.bump,
        has_one = reward_vault @ StakingError::VaultMismatch
    )]
    pub registry: Account<'info, Registry>,

    /// Funder's reward token account.
    #[account(
        mut,
        constraint = funder_token_account.mint == registry.reward_mint @ StakingError::MintMismatch,
        constraint = funder_token_account.owner == funder.key() @ StakingError::InvalidTokenAccountOwner
    )]
    pub funder_token_account: Account<'info, TokenAccount>,

    /// Registry's reward vault.
    #[account(mut)]
    pub reward_vault: Account<'info, TokenAccount>,

    /// Token program.
    pub token_program: Program<'info, Token>,
}

/// Fund the reward vault.
///
/// # Arguments
/// * `ctx` - FundRewards accounts context
/// * `amount` - Amount of reward tokens to add
///
/// # Errors
/// `ZeroAmount` for a zero amount, `InsufficientBalance` if the funder holds less.
pub fn handler(ctx: Context<FundRewards>, amount: u64) -> Result<()> {
    require!(amount > 0, StakingError::ZeroAmount);
    require!(
        ctx.accounts.funder_token_account.amount >= amount,
        StakingError::InsufficientBalance
    );

    let cpi_accounts = Transfer {
        from: ctx.accounts.funder_token_account.to_account_info(),
        to: ctx.accounts.reward_vault.to_account_info(),
        authority: ctx.accounts.funder.to_account_info(),
    };
    let cpi_program = ctx.accounts.token_program.to_account_info();
    let cpi_ctx = CpiContext::new(cpi_program, cpi_accounts);
    token::transfer(cpi_ctx, amount)?;

    // Reload vault to get updated balance
    ctx.accounts.reward_vault.reload()?;
    let vault_balance = ctx.accounts.reward_vault.amount;

    msg!("Reward vault funded with {} tokens", amount);
    msg!("New reward vault balance: {}", vault_balance);
    msg!("Funder: {}", ctx.accounts.funder.key());

    emit!(RewardsFunded {
        funder: ctx.accounts.funder.key(),
        amount,
    });

    Ok(())
}
