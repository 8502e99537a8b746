use soroban_sdk::{Address, Env, Vec};
use staking_common::{
    error::ErrorCode,
    types::{RateSegment, Staker},
};

use crate::storage::{Config, LedgerState};

pub trait StakingTrait {
    // ################################################################
    //                             Admin
    // ################################################################

    /// `pause_status` and `stop_status` are true while staking is active.
    #[allow(clippy::too_many_arguments)]
    fn initialize(
        env: Env,
        admin: Address,
        token: Address,
        apy: u32,
        unbonding_period: u64,
        claim_delay: u64,
        pause_status: bool,
        stop_status: bool,
        immediate_unstake_fine: u32,
    ) -> Result<(), ErrorCode>;

    /// `effective_mode` 0 applies the new APY from now on, 1 also re-prices the time
    /// since the last policy change.
    fn update_apy(env: Env, sender: Address, apy: u32, effective_mode: u32)
        -> Result<(), ErrorCode>;

    fn update_unbonding_period(
        env: Env,
        sender: Address,
        unbonding_period: u64,
    ) -> Result<(), ErrorCode>;

    fn update_claim_delay(env: Env, sender: Address, claim_delay: u64) -> Result<(), ErrorCode>;

    fn update_pause_status(env: Env, sender: Address, pause_status: bool)
        -> Result<(), ErrorCode>;

    /// Stopping also halts reward accrual for every staker until resumed.
    fn update_stop_status(env: Env, sender: Address, stop_status: bool) -> Result<(), ErrorCode>;

    fn update_immediate_unstake_fine(
        env: Env,
        sender: Address,
        immediate_unstake_fine: u32,
    ) -> Result<(), ErrorCode>;

    fn update_admin(env: Env, sender: Address, new_admin: Address) -> Result<(), ErrorCode>;

    // ################################################################
    //                             Users
    // ################################################################

    fn stake(env: Env, sender: Address, amount: i128) -> Result<(), ErrorCode>;

    /// Requests an unstake. Pays out right away when there is no unbonding period or
    /// the caller accepts the immediate unstake fine.
    fn unstake(env: Env, sender: Address, withdraw_with_fine: bool) -> Result<(), ErrorCode>;

    /// Pays out principal and rewards of a pending unstake request.
    fn withdraw(env: Env, sender: Address, withdraw_with_fine: bool) -> Result<i128, ErrorCode>;

    fn claim_rewards(env: Env, sender: Address) -> Result<i128, ErrorCode>;

    // ################################################################
    //                             Queries
    // ################################################################

    fn get_staker(env: Env, account: Address) -> Result<Staker, ErrorCode>;

    fn stake_of(env: Env, account: Address) -> i128;

    fn rewards_of(env: Env, account: Address) -> Result<i128, ErrorCode>;

    fn get_all_stakers(env: Env) -> Vec<Address>;

    fn apy(env: Env) -> Result<u32, ErrorCode>;

    fn unbonding_period(env: Env) -> Result<u64, ErrorCode>;

    fn claim_delay(env: Env) -> Result<u64, ErrorCode>;

    fn pause_status(env: Env) -> Result<bool, ErrorCode>;

    fn stop_status(env: Env) -> Result<bool, ErrorCode>;

    fn immediate_unstake_fine(env: Env) -> Result<u32, ErrorCode>;

    fn query_config(env: Env) -> Result<Config, ErrorCode>;

    fn query_admin(env: Env) -> Result<Address, ErrorCode>;

    fn query_state(env: Env) -> LedgerState;

    /// The segment pricing rewards from its start onward.
    fn query_rate_segment(env: Env) -> Result<RateSegment, ErrorCode>;
}
