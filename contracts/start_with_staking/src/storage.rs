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

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub token: Address,
    pub admin: Address,
    pub apy: u32,
    pub unbonding_period: u64,
}

#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct LedgerState {
    pub total_staked: i128,
    pub total_rewards_paid: i128,
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
            log!(env, "StartWithStaking: Config not set");
            ErrorCode::NotInitialized
        })
}

pub fn get_state(env: &Env) -> LedgerState {
    let state = env
        .storage()
        .persistent()
        .get::<_, LedgerState>(&DataKey::State)
        .unwrap_or_default();
    env.storage().persistent().has(&DataKey::State).then(|| {
        env.storage().persistent().extend_ttl(
            &DataKey::State,
            PERSISTENT_LIFETIME_THRESHOLD,
            PERSISTENT_BUMP_AMOUNT,
        );
    });

    state
}

pub fn save_state(env: &Env, state: &LedgerState) {
    env.storage().persistent().set(&DataKey::State, state);
    env.storage().persistent().extend_ttl(
        &DataKey::State,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}

pub mod utils {
    use super::*;

    pub use staking_common::storage::utils::{
        bump_instance, is_initialized, set_initialized, transfer_token,
    };

    pub fn require_owner(env: &Env, config: &Config, sender: &Address) -> StakingResult {
        if config.admin != *sender {
            log!(env, "StartWithStaking: You are not authorized!");
            return Err(ErrorCode::NotOwner);
        }

        Ok(())
    }
}
