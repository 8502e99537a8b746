use soroban_sdk::{contracttype, log, Address, Env};
use staking_common::{
    constants::{PERSISTENT_BUMP_AMOUNT, PERSISTENT_LIFETIME_THRESHOLD},
    error::{ErrorCode, StakingResult},
};

pub use staking_common::storage::{add_staker, get_staker, get_stakers, save_staker};

#[contracttype]
#[derive(Clone, Debug)]
pub enum DataKey {
    Config,
    State,
}

// ################################################################
//                             Config
// ################################################################

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// Token staked and paid out as rewards
    pub token: Address,
    pub admin: Address,
    /// Annual percentage yield, whole percent
    pub apy: u32,
    /// Seconds between an unstake request and the withdrawal
    pub unbonding_period: u64,
    /// Seconds between the last stake or claim and the next claim
    pub claim_delay: u64,
    /// True while staking is not paused
    pub pause_status: bool,
    /// True while staking is not stopped
    pub stop_status: bool,
    /// Percent of principal withheld when unbonding is skipped
    pub immediate_unstake_fine: u32,
}

impl Config {
    pub fn is_staking_active(&self) -> bool {
        self.pause_status && self.stop_status
    }
}

pub fn save_config(env: &Env, config: &Config) {
    env.storage().instance().set(&DataKey::Config, config);
    utils::bump_instance(env);
}

pub fn get_config(env: &Env) -> StakingResult<Config> {
    env.storage()
        .instance()
        .get::<_, Config>(&DataKey::Config)
        .ok_or_else(|| {
            log!(env, "Staking: Config not set");
            ErrorCode::NotInitialized
        })
}

// ################################################################
//                             Ledger
// ################################################################

/// Contract-wide totals.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct LedgerState {
    /// Principal in custody, including principal waiting out unbonding
    pub total_staked: i128,
    pub total_rewards_paid: i128,
    /// Immediate unstake fines kept by the contract
    pub total_fines_collected: i128,
}

pub fn save_state(env: &Env, state: &LedgerState) {
    env.storage().persistent().set(&DataKey::State, state);
    env.storage().persistent().extend_ttl(
        &DataKey::State,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}

pub fn get_state(env: &Env) -> LedgerState {
    let state = env
        .storage()
        .persistent()
        .get::<_, LedgerState>(&DataKey::State)
        .unwrap_or_default();
    if env.storage().persistent().has(&DataKey::State) {
        env.storage().persistent().extend_ttl(
            &DataKey::State,
            PERSISTENT_LIFETIME_THRESHOLD,
            PERSISTENT_BUMP_AMOUNT,
        );
    }

    state
}

// ################################################################
//                             Utils
// ################################################################

pub mod utils {
    use super::*;

    pub use staking_common::storage::utils::{
        bump_instance, is_initialized, set_initialized, transfer_token,
    };

    pub fn require_owner(env: &Env, config: &Config, sender: &Address) -> StakingResult {
        if config.admin != *sender {
            log!(env, "Staking: You are not authorized!");
            return Err(ErrorCode::NotOwner);
        }

        Ok(())
    }
}
