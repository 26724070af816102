use anchor_lang::prelude::*;

use crate::constants::MAX_ORDERS_PER_BOOK;
use crate::error::StakingError;
use crate::math::{apply_vesting, calculate_raw_reward, calculate_weight, elapsed_seconds};
use crate::state::{BoostSnapshot, PoolInfo};

/// A single deposit and its principal, weight and claim state.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StakeOrder {
    pub deposit_time: i64,
    pub total_deposited: u64,
    pub total_deposited_weight: u64,
    pub last_claim_time: i64,
}

impl StakeOrder {
    pub const LEN: usize = 8 * 4;

    /// Vesting-adjusted reward owed for the span since the last claim.
    pub fn claimable_reward(
        &self,
        pool: &PoolInfo,
        pool_reward_rate: u64,
        now: i64,
    ) -> Result<u64> {
        let raw = calculate_raw_reward(
            self.total_deposited_weight,
            pool_reward_rate,
            elapsed_seconds(self.last_claim_time, now),
            pool.total_deposited_weight,
        )?;
        apply_vesting(raw, elapsed_seconds(self.deposit_time, now))
    }
}

/// All orders one account holds in one pool. Orders are only ever appended.
#[account]
pub struct OrderBook {
    pub owner: Pubkey,
    pub registry: Pubkey,
    pub pool_index: u32,
    pub bump: u8,
    pub orders: Vec<StakeOrder>,
}

/// Result of planning a ledger operation, computed without touching state.
///
/// `orders` holds `(index, order)` pairs to write back; an index equal to the
/// current order count appends. `amount` is the number of tokens the caller
/// must move for the plan to be valid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderBookUpdate {
    pub pool: PoolInfo,
    pub orders: Vec<(u32, StakeOrder)>,
    pub amount: u64,
}

impl OrderBookUpdate {
    /// Fails unless `custody_balance` can pay out `amount`.
    pub fn ensure_covered_by(&self, custody_balance: u64) -> Result<()> {
        require!(
            custody_balance >= self.amount,
            StakingError::InsufficientCustodyBalance
        );
        Ok(())
    }
}

impl OrderBook {
    pub const LEN: usize = 8 + 32 + 32 + 4 + 1 + 4 + (MAX_ORDERS_PER_BOOK * StakeOrder::LEN);

    pub fn order_count(&self) -> u32 {
        self.orders.len() as u32
    }

    pub fn order(&self, index: u32) -> Result<&StakeOrder> {
        self.orders
            .get(index as usize)
            .ok_or_else(|| error!(StakingError::InvalidIndex))
    }

    /// Plans a new order of `amount` for this book's owner.
    ///
    /// The order's weight is computed against the pool total including the
    /// new amount.
    pub fn plan_deposit(
        &self,
        pool: &PoolInfo,
        amount: u64,
        now: i64,
        boost: &BoostSnapshot,
    ) -> Result<OrderBookUpdate> {
        require!(amount > 0, StakingError::ZeroAmount);
        require!(
            self.orders.len() < MAX_ORDERS_PER_BOOK,
            StakingError::OrderBookFull
        );

        let mut pool = *pool;
        pool.total_deposited = pool
            .total_deposited
            .checked_add(amount)
            .ok_or(StakingError::MathOverflow)?;

        let weight = calculate_weight(
            pool.total_deposited,
            amount,
            boost.pool_total,
            boost.user_balance,
        )?;
        pool.total_deposited_weight = pool
            .total_deposited_weight
            .checked_add(weight)
            .ok_or(StakingError::MathOverflow)?;

        let order = StakeOrder {
            deposit_time: now,
            total_deposited: amount,
            total_deposited_weight: weight,
            last_claim_time: now,
        };

        Ok(OrderBookUpdate {
            pool,
            orders: vec![(self.order_count(), order)],
            amount,
        })
    }

    /// Plans a batched withdrawal.
    ///
    /// Entries apply in order, so a repeated index sees the principal left by
    /// the previous entry. Weights are recomputed against the pool total after
    /// each decrement.
    pub fn plan_withdraw(
        &self,
        pool: &PoolInfo,
        order_indices: &[u32],
        amounts: &[u64],
        boost: &BoostSnapshot,
    ) -> Result<OrderBookUpdate> {
        require!(
            order_indices.len() == amounts.len(),
            StakingError::LengthMismatch
        );

        let mut pool = *pool;
        let mut orders = self.orders.clone();
        let mut touched: Vec<u32> = Vec::with_capacity(order_indices.len());
        let mut total: u64 = 0;

        for (&index, &amount) in order_indices.iter().zip(amounts) {
            let order = orders
                .get_mut(index as usize)
                .ok_or(StakingError::InvalidIndex)?;
            require!(
                amount <= order.total_deposited,
                StakingError::InsufficientPrincipal
            );

            order.total_deposited -= amount;
            pool.total_deposited = pool
                .total_deposited
                .checked_sub(amount)
                .ok_or(StakingError::MathOverflow)?;

            let weight = calculate_weight(
                pool.total_deposited,
                order.total_deposited,
                boost.pool_total,
                boost.user_balance,
            )?;
            reweigh(&mut pool, order, weight)?;

            total = total.checked_add(amount).ok_or(StakingError::MathOverflow)?;
            if !touched.contains(&index) {
                touched.push(index);
            }
        }

        Ok(OrderBookUpdate {
            pool,
            orders: collect(&orders, &touched),
            amount: total,
        })
    }

    /// Plans a weight refresh of the named orders from a new boost snapshot.
    pub fn plan_reweigh(
        &self,
        pool: &PoolInfo,
        order_indices: &[u32],
        boost: &BoostSnapshot,
    ) -> Result<OrderBookUpdate> {
        let mut pool = *pool;
        let mut orders = self.orders.clone();
        let mut touched: Vec<u32> = Vec::with_capacity(order_indices.len());

        for &index in order_indices {
            let order = orders
                .get_mut(index as usize)
                .ok_or(StakingError::InvalidIndex)?;

            let weight = calculate_weight(
                pool.total_deposited,
                order.total_deposited,
                boost.pool_total,
                boost.user_balance,
            )?;
            reweigh(&mut pool, order, weight)?;

            if !touched.contains(&index) {
                touched.push(index);
            }
        }

        Ok(OrderBookUpdate {
            pool,
            orders: collect(&orders, &touched),
            amount: 0,
        })
    }

    /// Plans a claim over the named orders.
    ///
    /// The batch must be non-empty and each order must yield a non-zero
    /// payable amount. Pool aggregates are not affected.
    pub fn plan_claim(
        &self,
        pool: &PoolInfo,
        pool_reward_rate: u64,
        order_indices: &[u32],
        now: i64,
    ) -> Result<OrderBookUpdate> {
        require!(!order_indices.is_empty(), StakingError::NoClaimableReward);

        let mut orders = self.orders.clone();
        let mut touched: Vec<u32> = Vec::with_capacity(order_indices.len());
        let mut total: u64 = 0;

        for &index in order_indices {
            let order = orders
                .get_mut(index as usize)
                .ok_or(StakingError::InvalidIndex)?;

            let payable = order.claimable_reward(pool, pool_reward_rate, now)?;
            require!(payable > 0, StakingError::NoClaimableReward);

            order.last_claim_time = now;
            total = total.checked_add(payable).ok_or(StakingError::MathOverflow)?;
            if !touched.contains(&index) {
                touched.push(index);
            }
        }

        Ok(OrderBookUpdate {
            pool: *pool,
            orders: collect(&orders, &touched),
            amount: total,
        })
    }

    /// Writes a planned update into the book and its pool.
    pub fn commit(&mut self, pool: &mut PoolInfo, update: OrderBookUpdate) -> Result<()> {
        for (index, order) in update.orders {
            match self.orders.get_mut(index as usize) {
                Some(slot) => *slot = order,
                None => {
                    require!(
                        index as usize == self.orders.len(),
                        StakingError::InvalidIndex
                    );
                    self.orders.push(order);
                }
            }
        }
        *pool = update.pool;
        Ok(())
    }
}

fn reweigh(pool: &mut PoolInfo, order: &mut StakeOrder, weight: u64) -> Result<()> {
    pool.total_deposited_weight = pool
        .total_deposited_weight
        .checked_sub(order.total_deposited_weight)
        .ok_or(StakingError::MathOverflow)?
        .checked_add(weight)
        .ok_or(StakingError::MathOverflow)?;
    order.total_deposited_weight = weight;
    Ok(())
}

fn collect(orders: &[StakeOrder], indices: &[u32]) -> Vec<(u32, StakeOrder)> {
    indices
        .iter()
        .map(|&index| (index, orders[index as usize]))
        .collect()
}
