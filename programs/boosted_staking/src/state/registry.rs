use anchor_lang::prelude::*;

use crate::constants::MAX_POOLS;
use crate::error::StakingError;
use crate::math::calculate_pool_reward_rate;

/// Reward accounting for one staked token.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PoolInfo {
    pub token_mint: Pubkey,
    pub vault: Pubkey,

    pub total_deposited: u64,
    pub total_deposited_weight: u64,
    pub reward_weight: u64,

    pub vault_bump: u8,
}

impl PoolInfo {
    pub const LEN: usize = 32 + 32 + (8 * 3) + 1;

    pub fn new(token_mint: Pubkey, vault: Pubkey, vault_bump: u8) -> Self {
        Self {
            token_mint,
            vault,
            vault_bump,
            ..Default::default()
        }
    }
}

#[account]
pub struct Registry {
    pub authority: Pubkey,
    pub reward_mint: Pubkey,
    pub reward_vault: Pubkey,
    pub boost_program: Pubkey,
    pub boost_pool: Pubkey,

    pub reward_rate: u64,
    pub total_reward_weight: u64,
    pub total_distributed: u64,

    pub reward_vault_bump: u8,
    pub bump: u8,

    pub pools: Vec<PoolInfo>,
}

impl Registry {
    pub const LEN: usize = 8
        + (32 * 5)
        + (8 * 3)
        + 2
        + 4 + (MAX_POOLS * PoolInfo::LEN);

    pub fn pool_count(&self) -> u32 {
        self.pools.len() as u32
    }

    /// Seed component of the vault PDA for the next pool to be created.
    pub fn next_pool_seed(&self) -> [u8; 4] {
        self.pool_count().to_le_bytes()
    }

    pub fn pool(&self, pool_index: u32) -> Result<&PoolInfo> {
        self.pools
            .get(pool_index as usize)
            .ok_or_else(|| error!(StakingError::InvalidPoolIndex))
    }

    pub fn pool_mut(&mut self, pool_index: u32) -> Result<&mut PoolInfo> {
        self.pools
            .get_mut(pool_index as usize)
            .ok_or_else(|| error!(StakingError::InvalidPoolIndex))
    }

    pub fn pool_index_of(&self, token_mint: &Pubkey) -> Option<u32> {
        self.pools
            .iter()
            .position(|pool| pool.token_mint == *token_mint)
            .map(|index| index as u32)
    }

    /// Registers a pool for `pool.token_mint` and returns its index.
    pub fn add_pool(&mut self, pool: PoolInfo) -> Result<u32> {
        require!(
            self.pool_index_of(&pool.token_mint).is_none(),
            StakingError::DuplicatePool
        );
        require!(self.pools.len() < MAX_POOLS, StakingError::TooManyPools);

        let index = self.pool_count();
        self.pools.push(pool);
        Ok(index)
    }

    /// Replaces every pool's reward weight; nothing changes on error.
    pub fn set_reward_weights(&mut self, weights: &[u64]) -> Result<()> {
        require!(
            weights.len() == self.pools.len(),
            StakingError::LengthMismatch
        );

        let total = weights
            .iter()
            .try_fold(0u64, |sum, weight| sum.checked_add(*weight))
            .ok_or(StakingError::MathOverflow)?;

        for (pool, weight) in self.pools.iter_mut().zip(weights) {
            pool.reward_weight = *weight;
        }
        self.total_reward_weight = total;

        Ok(())
    }

    /// Whether `caller` may refresh the boost of `account`'s orders.
    pub fn can_activate_boost(&self, caller: &Pubkey, account: &Pubkey) -> bool {
        *caller == self.authority || caller == account
    }

    /// The pool's share of the global reward rate.
    pub fn pool_reward_rate(&self, pool_index: u32) -> Result<u64> {
        let pool = self.pool(pool_index)?;
        calculate_pool_reward_rate(
            self.reward_rate,
            pool.reward_weight,
            self.total_reward_weight,
        )
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::constants::DISCRIMINATOR_LEN;

    pub(crate) fn registry() -> Registry {
        Registry {
            authority: Pubkey::new_unique(),
            reward_mint: Pubkey::new_unique(),
            reward_vault: Pubkey::new_unique(),
            boost_program: Pubkey::new_unique(),
            boost_pool: Pubkey::new_unique(),
            reward_rate: 0,
            total_reward_weight: 0,
            total_distributed: 0,
            reward_vault_bump: 0,
            bump: 0,
            pools: Vec::new(),
        }
    }

    fn new_pool() -> PoolInfo {
        PoolInfo::new(Pubkey::new_unique(), Pubkey::new_unique(), 255)
    }

    #[test]
    fn test_add_pool_assigns_dense_indices() {
        let mut registry = registry();
        for expected in 0..4u32 {
            assert_eq!(registry.add_pool(new_pool()).unwrap(), expected);
        }
        assert_eq!(registry.pool_count(), 4);
        assert_eq!(registry.next_pool_seed(), 4u32.to_le_bytes());

        let pool = registry.pool(2).unwrap();
        assert_eq!(pool.total_deposited, 0);
        assert_eq!(pool.total_deposited_weight, 0);
        assert_eq!(pool.reward_weight, 0);
    }

    #[test]
    fn test_add_pool_rejects_duplicate_token() {
        let mut registry = registry();
        let pool = new_pool();
        registry.add_pool(pool).unwrap();

        let duplicate = PoolInfo::new(pool.token_mint, Pubkey::new_unique(), 254);
        assert_eq!(
            registry.add_pool(duplicate).unwrap_err(),
            error!(StakingError::DuplicatePool)
        );
        assert_eq!(registry.pool_count(), 1);
    }

    #[test]
    fn test_add_pool_respects_capacity() {
        let mut registry = registry();
        for _ in 0..MAX_POOLS {
            registry.add_pool(new_pool()).unwrap();
        }
        assert_eq!(
            registry.add_pool(new_pool()).unwrap_err(),
            error!(StakingError::TooManyPools)
        );
    }

    #[test]
    fn test_pool_lookup_out_of_range() {
        let registry = registry();
        assert_eq!(
            registry.pool(0).unwrap_err(),
            error!(StakingError::InvalidPoolIndex)
        );
    }

    #[test]
    fn test_set_reward_weights_and_rates() {
        let mut registry = registry();
        registry.add_pool(new_pool()).unwrap();
        registry.add_pool(new_pool()).unwrap();
        registry.reward_rate = 1000;

        registry.set_reward_weights(&[1, 3]).unwrap();
        assert_eq!(registry.total_reward_weight, 4);
        assert_eq!(registry.pool_reward_rate(0).unwrap(), 250);
        assert_eq!(registry.pool_reward_rate(1).unwrap(), 750);

        registry.reward_rate = 2000;
        assert_eq!(registry.pool_reward_rate(0).unwrap(), 500);
        assert_eq!(registry.pool_reward_rate(1).unwrap(), 1500);
    }

    #[test]
    fn test_set_reward_weights_length_mismatch_keeps_previous() {
        let mut registry = registry();
        registry.add_pool(new_pool()).unwrap();
        registry.add_pool(new_pool()).unwrap();
        registry.set_reward_weights(&[2, 5]).unwrap();

        assert_eq!(
            registry.set_reward_weights(&[1, 1, 1]).unwrap_err(),
            error!(StakingError::LengthMismatch)
        );
        assert_eq!(
            registry.set_reward_weights(&[9]).unwrap_err(),
            error!(StakingError::LengthMismatch)
        );
        assert_eq!(registry.pool(0).unwrap().reward_weight, 2);
        assert_eq!(registry.pool(1).unwrap().reward_weight, 5);
        assert_eq!(registry.total_reward_weight, 7);
    }

    #[test]
    fn test_reward_rate_is_zero_without_weights() {
        let mut registry = registry();
        registry.add_pool(new_pool()).unwrap();
        registry.reward_rate = 1000;
        assert_eq!(registry.pool_reward_rate(0).unwrap(), 0);
    }

    #[test]
    fn test_boost_activation_is_limited_to_admin_and_owner() {
        let registry = registry();
        let owner = Pubkey::new_unique();

        assert!(registry.can_activate_boost(&owner, &owner));
        assert!(registry.can_activate_boost(&registry.authority, &owner));
        assert!(!registry.can_activate_boost(&Pubkey::new_unique(), &owner));
    }

    #[test]
    fn test_len_fits_full_registry() {
        let mut registry = registry();
        for _ in 0..MAX_POOLS {
            registry.add_pool(new_pool()).unwrap();
        }
        let data = registry.try_to_vec().unwrap();
        assert_eq!(DISCRIMINATOR_LEN + data.len(), Registry::LEN);
    }
}
