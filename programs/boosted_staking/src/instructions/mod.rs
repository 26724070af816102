//! Instruction handlers for the Boosted Staking program.
//!
//! This module contains all instruction implementations.

pub mod activate_boost;
pub mod admin;
pub mod claim;
pub mod create_pool;
pub mod deposit;
pub mod fund_rewards;
pub mod initialize;
pub mod views;
pub mod withdraw;

pub use activate_boost::*;
pub use admin::*;
pub use claim::*;
pub use create_pool::*;
pub use deposit::*;
pub use fund_rewards::*;
pub use initialize::*;
pub use views::*;
pub use withdraw::*;
