//! Reward and weight arithmetic.
//!
//! All functions are pure: they take plain integers, widen to `u128` for the
//! intermediate products and round down on every division.

use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::StakingError;

/// Computes the reward-eligibility weight of an order.
///
/// Every order carries `BASE_WEIGHT_BPS` of its own principal. When the boost
/// pool is non-empty, the owner's share of it is applied to `BOOST_WEIGHT_BPS`
/// of the whole pool total. The result never exceeds the order principal.
///
/// # Arguments
/// * `pool_total_deposited` - Pool principal including this order's current amount
/// * `order_principal` - Remaining principal of the order
/// * `boost_pool_total` - Total balance of the external boost pool
/// * `boost_user_balance` - Order owner's balance in the boost pool
pub fn calculate_weight(
    pool_total_deposited: u64,
    order_principal: u64,
    boost_pool_total: u64,
    boost_user_balance: u64,
) -> Result<u64> {
    let principal = order_principal as u128;
    let bps = BASIS_POINTS_DENOMINATOR as u128;

    let base = principal
        .checked_mul(BASE_WEIGHT_BPS as u128)
        .ok_or(StakingError::MathOverflow)?
        / bps;

    if boost_pool_total == 0 {
        return u64::try_from(base).map_err(|_| error!(StakingError::MathOverflow));
    }

    let boosted = (pool_total_deposited as u128)
        .checked_mul(boost_user_balance as u128)
        .ok_or(StakingError::MathOverflow)?
        .checked_mul(BOOST_WEIGHT_BPS as u128)
        .ok_or(StakingError::MathOverflow)?
        .checked_div(
            (boost_pool_total as u128)
                .checked_mul(bps)
                .ok_or(StakingError::MathOverflow)?,
        )
        .ok_or(StakingError::MathOverflow)?;

    let weight = base
        .checked_add(boosted)
        .ok_or(StakingError::MathOverflow)?
        .min(principal);

    u64::try_from(weight).map_err(|_| error!(StakingError::MathOverflow))
}

/// Derives a pool's share of the global emission rate.
///
/// Returns zero while no reward weight has been assigned to any pool.
pub fn calculate_pool_reward_rate(
    global_reward_rate: u64,
    reward_weight: u64,
    total_reward_weight: u64,
) -> Result<u64> {
    if total_reward_weight == 0 {
        return Ok(0);
    }

    let rate = (global_reward_rate as u128)
        .checked_mul(reward_weight as u128)
        .ok_or(StakingError::MathOverflow)?
        / total_reward_weight as u128;

    u64::try_from(rate).map_err(|_| error!(StakingError::MathOverflow))
}

/// Reward accrued by an order over `elapsed` seconds before vesting.
///
/// raw = order_weight * pool_reward_rate * elapsed / pool_weight
///
/// An empty pool (zero total weight) accrues nothing.
pub fn calculate_raw_reward(
    order_weight: u64,
    pool_reward_rate: u64,
    elapsed: u64,
    pool_weight: u64,
) -> Result<u64> {
    if pool_weight == 0 || elapsed == 0 {
        return Ok(0);
    }

    let raw = (order_weight as u128)
        .checked_mul(pool_reward_rate as u128)
        .ok_or(StakingError::MathOverflow)?
        .checked_mul(elapsed as u128)
        .ok_or(StakingError::MathOverflow)?
        / pool_weight as u128;

    u64::try_from(raw).map_err(|_| error!(StakingError::MathOverflow))
}

/// Applies the linear vesting discount to a raw reward.
///
/// `age` is the time since the order was deposited, not since the last claim.
pub fn apply_vesting(raw: u64, age: u64) -> Result<u64> {
    if age >= VESTING_PERIOD {
        return Ok(raw);
    }

    let payable = (raw as u128)
        .checked_mul(age as u128)
        .ok_or(StakingError::MathOverflow)?
        / VESTING_PERIOD as u128;

    u64::try_from(payable).map_err(|_| error!(StakingError::MathOverflow))
}

/// Seconds between two timestamps, clamped at zero.
pub fn elapsed_seconds(from: i64, to: i64) -> u64 {
    to.saturating_sub(from).max(0) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_without_boost_pool_is_forty_percent() {
        assert_eq!(calculate_weight(1000, 1000, 0, 0).unwrap(), 400);
        assert_eq!(calculate_weight(5000, 1000, 0, 777).unwrap(), 400);
    }

    #[test]
    fn test_weight_rounds_down() {
        // 0.4 * 7 = 2.8
        assert_eq!(calculate_weight(7, 7, 0, 0).unwrap(), 2);
        // 0.4 * 7 + 7 * 1 * 0.6 / 3 = 2.8 + 1.4, each part floored
        assert_eq!(calculate_weight(7, 7, 3, 1).unwrap(), 3);
    }

    #[test]
    fn test_weight_partial_boost() {
        // base 400, boosted = 1000 * 50 * 0.6 / 100 = 300
        assert_eq!(calculate_weight(1000, 1000, 100, 50).unwrap(), 700);
        // boost is sized against the pool, not the order
        // base 40, boosted = 1000 * 10 * 0.6 / 100 = 60
        assert_eq!(calculate_weight(1000, 100, 100, 10).unwrap(), 100);
    }

    #[test]
    fn test_weight_is_capped_at_principal() {
        assert_eq!(calculate_weight(1_000_000, 1000, 100, 100).unwrap(), 1000);
        assert_eq!(calculate_weight(u64::MAX, u64::MAX, 1, 1).unwrap(), u64::MAX);
    }

    #[test]
    fn test_weight_of_empty_order_is_zero() {
        assert_eq!(calculate_weight(5000, 0, 100, 100).unwrap(), 0);
        assert_eq!(calculate_weight(0, 0, 0, 0).unwrap(), 0);
    }

    #[test]
    fn test_weight_bounds_over_sample_grid() {
        let amounts = [0u64, 1, 3, 999, 1000, 123_456_789, u32::MAX as u64];
        let boosts = [0u64, 1, 50, 100, 10_000];
        for &pool_total in &amounts {
            for &principal in &amounts {
                for &boost_total in &boosts {
                    for &boost_user in &boosts {
                        let weight =
                            calculate_weight(pool_total, principal, boost_total, boost_user)
                                .unwrap();
                        assert!(weight <= principal);
                        if boost_total == 0 || boost_user == 0 {
                            assert_eq!(weight, principal * 4 / 10);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_pool_reward_rate_split() {
        assert_eq!(calculate_pool_reward_rate(100, 1, 4).unwrap(), 25);
        assert_eq!(calculate_pool_reward_rate(100, 3, 4).unwrap(), 75);
        assert_eq!(calculate_pool_reward_rate(100, 1, 3).unwrap(), 33);
        assert_eq!(calculate_pool_reward_rate(100, 0, 0).unwrap(), 0);
    }

    #[test]
    fn test_raw_reward_proportional_to_weight() {
        // half the pool weight earns half the pool rate
        assert_eq!(calculate_raw_reward(500, 10, 100, 1000).unwrap(), 500);
        assert_eq!(calculate_raw_reward(1000, 10, 100, 1000).unwrap(), 1000);
    }

    #[test]
    fn test_raw_reward_zero_cases() {
        assert_eq!(calculate_raw_reward(500, 10, 100, 0).unwrap(), 0);
        assert_eq!(calculate_raw_reward(500, 10, 0, 1000).unwrap(), 0);
        assert_eq!(calculate_raw_reward(0, 10, 100, 1000).unwrap(), 0);
    }

    #[test]
    fn test_vesting_discount() {
        assert_eq!(apply_vesting(1000, 0).unwrap(), 0);
        assert_eq!(apply_vesting(1000, VESTING_PERIOD / 2).unwrap(), 500);
        assert_eq!(apply_vesting(1000, VESTING_PERIOD / 4).unwrap(), 250);
        assert_eq!(apply_vesting(1000, VESTING_PERIOD).unwrap(), 1000);
        assert_eq!(apply_vesting(1000, VESTING_PERIOD * 3).unwrap(), 1000);
    }

    #[test]
    fn test_elapsed_seconds_clamps_negative_spans() {
        assert_eq!(elapsed_seconds(100, 250), 150);
        assert_eq!(elapsed_seconds(250, 100), 0);
    }
}
