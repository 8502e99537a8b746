use soroban_sdk::{Address, Env, Vec};
use staking_common::{error::ErrorCode, types::Staker};

use crate::storage::LedgerState;

/// Staking without claim delay, pause switches or unstake fines. Every unstake waits
/// for an explicit withdrawal.
pub trait StartWithStakingTrait {
    fn initialize(
        env: Env,
        admin: Address,
        token: Address,
        apy: u32,
        unbonding_period: u64,
    ) -> Result<(), ErrorCode>;

    fn update_apy(env: Env, sender: Address, apy: u32) -> Result<(), ErrorCode>;

    fn update_unbonding_period(
        env: Env,
        sender: Address,
        unbonding_period: u64,
    ) -> Result<(), ErrorCode>;

    fn update_admin(env: Env, sender: Address, new_admin: Address) -> Result<(), ErrorCode>;

    fn stake(env: Env, sender: Address, amount: i128) -> Result<(), ErrorCode>;

    fn unstake(env: Env, sender: Address) -> Result<(), ErrorCode>;

    fn withdraw(env: Env, sender: Address) -> Result<i128, ErrorCode>;

    fn claim_rewards(env: Env, sender: Address) -> Result<i128, ErrorCode>;

    fn get_staker(env: Env, account: Address) -> Result<Staker, ErrorCode>;

    fn stake_of(env: Env, account: Address) -> i128;

    fn rewards_of(env: Env, account: Address) -> Result<i128, ErrorCode>;

    fn get_all_stakers(env: Env) -> Vec<Address>;

    fn get_apy(env: Env) -> Result<u32, ErrorCode>;

    fn get_unbonding_period(env: Env) -> Result<u64, ErrorCode>;

    fn query_admin(env: Env) -> Result<Address, ErrorCode>;

    fn query_state(env: Env) -> LedgerState;
}
