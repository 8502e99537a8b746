#![no_std]

mod contract;
mod events;
mod staking;
mod storage;

pub use contract::*;
pub use staking::StartWithStakingTrait;
pub use storage::{Config, LedgerState};
