#![no_std]

mod contract;
mod controller;
mod events;
mod staking;
mod storage;

pub use contract::*;
pub use staking::StakingTrait;
pub use storage::{Config, LedgerState};
