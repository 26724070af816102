//! Events emitted by the Boosted Staking program.

use anchor_lang::prelude::*;

#[event]
pub struct RegistryInitialized {
    pub authority: Pubkey,
    pub reward_mint: Pubkey,
    pub boost_pool: Pubkey,
    pub reward_rate: u64,
}

#[event]
pub struct PoolCreated {
    pub pool_index: u32,
    pub token_mint: Pubkey,
    pub vault: Pubkey,
}

#[event]
pub struct RewardWeightsUpdated {
    pub weights: Vec<u64>,
    pub total_reward_weight: u64,
}

#[event]
pub struct RewardRateUpdated {
    pub old_rate: u64,
    pub new_rate: u64,
}

#[event]
pub struct AuthorityTransferred {
    pub old_authority: Pubkey,
    pub new_authority: Pubkey,
}

#[event]
pub struct RewardsFunded {
    pub funder: Pubkey,
    pub amount: u64,
}

#[event]
pub struct Deposited {
    pub depositor: Pubkey,
    pub recipient: Pubkey,
    pub pool_index: u32,
    pub order_index: u32,
    pub amount: u64,
    pub weight: u64,
}

#[event]
pub struct Withdrawn {
    pub owner: Pubkey,
    pub pool_index: u32,
    pub order_indices: Vec<u32>,
    pub amount: u64,
}

#[event]
pub struct BoostActivated {
    pub owner: Pubkey,
    pub pool_index: u32,
    pub order_indices: Vec<u32>,
    pub pool_total_weight: u64,
}

#[event]
pub struct RewardClaimed {
    pub owner: Pubkey,
    pub pool_index: u32,
    pub order_indices: Vec<u32>,
    pub amount: u64,
}
