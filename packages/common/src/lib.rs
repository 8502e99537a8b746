#![no_std]

pub mod constants;
pub mod error;
pub mod ledger;
pub mod macros;
pub mod math;
pub mod storage;
pub mod types;
