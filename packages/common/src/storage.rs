use soroban_sdk::{contracttype, log, Address, Env, Vec};

use crate::{
    constants::{
        INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT,
        PERSISTENT_LIFETIME_THRESHOLD,
    },
    error::{ErrorCode, StakingResult},
    types::{RateSegment, Staker},
};

/// Keys of the entries every staking contract keeps.
#[contracttype]
#[derive(Clone, Debug)]
pub enum LedgerKey {
    Initialized,
    Stakers,
    Staker(Address),
    CurrentSegment,
    Segment(u32),
}

// ################################################################
//                             Stakers
// ################################################################

pub fn get_staker(env: &Env, account: &Address) -> Option<Staker> {
    let key = LedgerKey::Staker(account.clone());
    let staker = env.storage().persistent().get::<_, Staker>(&key);
    bump_persistent(env, &key);

    staker
}

pub fn save_staker(env: &Env, account: &Address, staker: &Staker) {
    let key = LedgerKey::Staker(account.clone());
    env.storage().persistent().set(&key, staker);
    env.storage().persistent().extend_ttl(
        &key,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}

/// Every account that ever staked, in order of first stake.
pub fn get_stakers(env: &Env) -> Vec<Address> {
    let stakers = env
        .storage()
        .persistent()
        .get::<_, Vec<Address>>(&LedgerKey::Stakers)
        .unwrap_or(Vec::new(env));
    bump_persistent(env, &LedgerKey::Stakers);

    stakers
}

pub fn add_staker(env: &Env, account: &Address) {
    let mut stakers = get_stakers(env);
    stakers.push_back(account.clone());
    env.storage().persistent().set(&LedgerKey::Stakers, &stakers);
    env.storage().persistent().extend_ttl(
        &LedgerKey::Stakers,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}

// ################################################################
//                          Rate segments
// ################################################################

pub fn get_current_segment_id(env: &Env) -> StakingResult<u32> {
    env.storage()
        .instance()
        .get::<_, u32>(&LedgerKey::CurrentSegment)
        .ok_or_else(|| {
            log!(env, "Ledger: rate index not opened");
            ErrorCode::NotInitialized
        })
}

pub fn save_current_segment_id(env: &Env, id: u32) {
    env.storage().instance().set(&LedgerKey::CurrentSegment, &id);
    utils::bump_instance(env);
}

pub fn get_segment(env: &Env, id: u32) -> StakingResult<RateSegment> {
    let key = LedgerKey::Segment(id);
    let segment = env
        .storage()
        .persistent()
        .get::<_, RateSegment>(&key)
        .ok_or_else(|| {
            log!(env, "Ledger: rate segment {} missing", id);
            ErrorCode::NotInitialized
        })?;
    bump_persistent(env, &key);

    Ok(segment)
}

pub fn save_segment(env: &Env, id: u32, segment: &RateSegment) {
    let key = LedgerKey::Segment(id);
    env.storage().persistent().set(&key, segment);
    env.storage().persistent().extend_ttl(
        &key,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}

pub fn remove_segment(env: &Env, id: u32) {
    env.storage().persistent().remove(&LedgerKey::Segment(id));
}

pub fn has_segment(env: &Env, id: u32) -> bool {
    env.storage().persistent().has(&LedgerKey::Segment(id))
}

fn bump_persistent(env: &Env, key: &LedgerKey) {
    env.storage().persistent().has(key).then(|| {
        env.storage().persistent().extend_ttl(
            key,
            PERSISTENT_LIFETIME_THRESHOLD,
            PERSISTENT_BUMP_AMOUNT,
        );
    });
}

// ################################################################
//                             Utils
// ################################################################

pub mod utils {
    use soroban_sdk::token;

    use super::*;

    pub fn bump_instance(env: &Env) {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
    }

    pub fn transfer_token(env: &Env, token: &Address, from: &Address, to: &Address, amount: i128) {
        let token_client = token::Client::new(env, token);
        token_client.transfer(from, to, &amount);
    }

    pub fn is_initialized(env: &Env) -> bool {
        env.storage()
            .instance()
            .get(&LedgerKey::Initialized)
            .unwrap_or(false)
    }

    pub fn set_initialized(env: &Env) {
        env.storage().instance().set(&LedgerKey::Initialized, &true);
        bump_instance(env);
    }
}
