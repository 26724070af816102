use anchor_lang::prelude::*;

use crate::constants::{BOOST_POSITION_SEED, DISCRIMINATOR_LEN};
use crate::error::StakingError;
use crate::state::Registry;

/// Leading fields of the boost pool account owned by the boost program.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BoostPoolState {
    pub total_deposited: u64,
}

/// Leading fields of a user's position in the boost pool.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BoostPosition {
    pub boost_pool: Pubkey,
    pub owner: Pubkey,
    pub balance: u64,
}

/// Boost figures for one account, read fresh whenever a weight is computed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BoostSnapshot {
    pub user_balance: u64,
    pub pool_total: u64,
}

impl BoostSnapshot {
    /// Address of `account`'s position PDA under the boost program.
    pub fn position_address(registry: &Registry, account: &Pubkey) -> Pubkey {
        Pubkey::find_program_address(
            &[
                BOOST_POSITION_SEED,
                registry.boost_pool.as_ref(),
                account.as_ref(),
            ],
            &registry.boost_program,
        )
        .0
    }

    /// Reads the boost pool total and `account`'s position balance.
    ///
    /// `position` must sit at `account`'s position address. If that account
    /// has not been created yet the balance is zero. The pool account itself
    /// is expected to be validated against the registry by the caller's
    /// account constraints; it is checked again here.
    pub fn load(
        registry: &Registry,
        boost_pool: &AccountInfo,
        position: &AccountInfo,
        account: &Pubkey,
    ) -> Result<Self> {
        require_keys_eq!(
            boost_pool.key(),
            registry.boost_pool,
            StakingError::BoostPoolMismatch
        );
        require_keys_eq!(
            *boost_pool.owner,
            registry.boost_program,
            StakingError::InvalidBoostAccount
        );
        let pool_state: BoostPoolState = decode(boost_pool)?;

        require_keys_eq!(
            position.key(),
            Self::position_address(registry, account),
            StakingError::InvalidBoostAccount
        );

        let user_balance = if position.data_is_empty() {
            0
        } else {
            require_keys_eq!(
                *position.owner,
                registry.boost_program,
                StakingError::InvalidBoostAccount
            );
            let position: BoostPosition = decode(position)?;
            require_keys_eq!(
                position.boost_pool,
                registry.boost_pool,
                StakingError::InvalidBoostAccount
            );
            require_keys_eq!(position.owner, *account, StakingError::InvalidBoostAccount);
            position.balance
        };

        Ok(Self {
            user_balance,
            pool_total: pool_state.total_deposited,
        })
    }
}

fn decode<T: AnchorDeserialize>(info: &AccountInfo) -> Result<T> {
    let data = info.try_borrow_data()?;
    require!(
        data.len() >= DISCRIMINATOR_LEN,
        StakingError::InvalidBoostAccount
    );
    let mut body: &[u8] = &data[DISCRIMINATOR_LEN..];
    T::deserialize(&mut body).map_err(|_| error!(StakingError::InvalidBoostAccount))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::registry::tests::registry;

    fn encode<T: AnchorSerialize>(value: &T) -> Vec<u8> {
        let mut data = vec![7u8; DISCRIMINATOR_LEN];
        value.serialize(&mut data).unwrap();
        data
    }

    fn position_data(registry: &Registry, owner: Pubkey, balance: u64) -> Vec<u8> {
        encode(&BoostPosition {
            boost_pool: registry.boost_pool,
            owner,
            balance,
        })
    }

    #[test]
    fn test_load_reads_pool_total_and_position() {
        let registry = registry();
        let user = Pubkey::new_unique();

        let pool_key = registry.boost_pool;
        let program = registry.boost_program;
        let mut pool_lamports = 0;
        let mut pool_data = encode(&BoostPoolState { total_deposited: 900 });
        let pool_info = AccountInfo::new(
            &pool_key, false, false, &mut pool_lamports, &mut pool_data, &program, false, 0,
        );

        let position_key = BoostSnapshot::position_address(&registry, &user);
        let mut position_lamports = 0;
        let mut data = position_data(&registry, user, 300);
        let position_info = AccountInfo::new(
            &position_key,
            false,
            false,
            &mut position_lamports,
            &mut data,
            &program,
            false,
            0,
        );

        let snapshot = BoostSnapshot::load(&registry, &pool_info, &position_info, &user).unwrap();
        assert_eq!(
            snapshot,
            BoostSnapshot {
                user_balance: 300,
                pool_total: 900
            }
        );
    }

    #[test]
    fn test_load_uncreated_position_has_zero_balance() {
        let registry = registry();
        let user = Pubkey::new_unique();

        let pool_key = registry.boost_pool;
        let program = registry.boost_program;
        let mut pool_lamports = 0;
        let mut pool_data = encode(&BoostPoolState { total_deposited: 50 });
        let pool_info = AccountInfo::new(
            &pool_key, false, false, &mut pool_lamports, &mut pool_data, &program, false, 0,
        );

        let position_key = BoostSnapshot::position_address(&registry, &user);
        let system = anchor_lang::system_program::ID;
        let mut position_lamports = 0;
        let mut data: Vec<u8> = Vec::new();
        let position_info = AccountInfo::new(
            &position_key,
            false,
            false,
            &mut position_lamports,
            &mut data,
            &system,
            false,
            0,
        );

        let snapshot = BoostSnapshot::load(&registry, &pool_info, &position_info, &user).unwrap();
        assert_eq!(snapshot.user_balance, 0);
        assert_eq!(snapshot.pool_total, 50);
    }

    #[test]
    fn test_load_rejects_position_at_other_address() {
        let registry = registry();
        let recipient = Pubkey::new_unique();

        let pool_key = registry.boost_pool;
        let program = registry.boost_program;
        let mut pool_lamports = 0;
        let mut pool_data = encode(&BoostPoolState { total_deposited: 900 });
        let pool_info = AccountInfo::new(
            &pool_key, false, false, &mut pool_lamports, &mut pool_data, &program, false, 0,
        );

        // An empty stand-in would otherwise zero the recipient's real boost
        let stand_in = Pubkey::new_unique();
        let mut lamports = 0;
        let mut data: Vec<u8> = Vec::new();
        let empty_info = AccountInfo::new(
            &stand_in, false, false, &mut lamports, &mut data, &program, false, 0,
        );
        assert_eq!(
            BoostSnapshot::load(&registry, &pool_info, &empty_info, &recipient).unwrap_err(),
            error!(StakingError::InvalidBoostAccount)
        );

        // Another user's real position is not the recipient's
        let other = Pubkey::new_unique();
        let other_key = BoostSnapshot::position_address(&registry, &other);
        let mut other_lamports = 0;
        let mut other_data = position_data(&registry, other, 300);
        let other_info = AccountInfo::new(
            &other_key,
            false,
            false,
            &mut other_lamports,
            &mut other_data,
            &program,
            false,
            0,
        );
        assert_eq!(
            BoostSnapshot::load(&registry, &pool_info, &other_info, &recipient).unwrap_err(),
            error!(StakingError::InvalidBoostAccount)
        );
    }

    #[test]
    fn test_load_rejects_position_for_wrong_owner() {
        let registry = registry();
        let user = Pubkey::new_unique();

        let pool_key = registry.boost_pool;
        let program = registry.boost_program;
        let mut pool_lamports = 0;
        let mut pool_data = encode(&BoostPoolState { total_deposited: 900 });
        let pool_info = AccountInfo::new(
            &pool_key, false, false, &mut pool_lamports, &mut pool_data, &program, false, 0,
        );

        let position_key = BoostSnapshot::position_address(&registry, &user);
        let mut position_lamports = 0;
        let mut data = position_data(&registry, Pubkey::new_unique(), 300);
        let position_info = AccountInfo::new(
            &position_key,
            false,
            false,
            &mut position_lamports,
            &mut data,
            &program,
            false,
            0,
        );

        assert_eq!(
            BoostSnapshot::load(&registry, &pool_info, &position_info, &user).unwrap_err(),
            error!(StakingError::InvalidBoostAccount)
        );
    }

    #[test]
    fn test_load_rejects_wrong_pool_account() {
        let registry = registry();
        let user = Pubkey::new_unique();
        let wrong_key = Pubkey::new_unique();
        let program = registry.boost_program;
        let mut lamports = 0;
        let mut data = encode(&BoostPoolState { total_deposited: 1 });
        let pool_info =
            AccountInfo::new(&wrong_key, false, false, &mut lamports, &mut data, &program, false, 0);

        let position_key = BoostSnapshot::position_address(&registry, &user);
        let mut position_lamports = 0;
        let mut position_data: Vec<u8> = Vec::new();
        let position_info = AccountInfo::new(
            &position_key,
            false,
            false,
            &mut position_lamports,
            &mut position_data,
            &program,
            false,
            0,
        );

        assert_eq!(
            BoostSnapshot::load(&registry, &pool_info, &position_info, &user).unwrap_err(),
            error!(StakingError::BoostPoolMismatch)
        );
    }
}
