//! State structures for the Boosted Staking program.
//!
//! This module defines all account structures used to store program state,
//! plus the layouts read from the external boost program.

pub mod boost;
pub mod order_book;
pub mod registry;

pub use boost::*;
pub use order_book::*;
pub use registry::*;
