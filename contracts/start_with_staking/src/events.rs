use soroban_sdk::{Address, Env, Symbol};

pub struct StartWithStakingEvents {}

impl StartWithStakingEvents {
    /// - topics - `["initialize", admin: Address]`
    /// - data - `[token: Address, apy: u32, unbonding_period: u64]`
    pub fn initialize(env: &Env, admin: Address, token: Address, apy: u32, unbonding_period: u64) {
        let topics = (Symbol::new(env, "initialize"), admin);
        env.events().publish(topics, (token, apy, unbonding_period));
    }

    /// - topics - `["stake", user: Address]`
    /// - data - `[amount: i128, balance: i128]`
    pub fn stake(env: &Env, user: Address, amount: i128, balance: i128) {
        let topics = (Symbol::new(env, "stake"), user);
        env.events().publish(topics, (amount, balance));
    }

    /// - topics - `["unstake_request", user: Address]`
    /// - data - `ts: u64`
    pub fn unstake_request(env: &Env, user: Address, ts: u64) {
        let topics = (Symbol::new(env, "unstake_request"), user);
        env.events().publish(topics, ts);
    }

    /// - topics - `["withdraw", user: Address]`
    /// - data - `amount: i128`
    pub fn withdraw(env: &Env, user: Address, amount: i128) {
        let topics = (Symbol::new(env, "withdraw"), user);
        env.events().publish(topics, amount);
    }

    pub fn claim_rewards(env: &Env, user: Address, amount: i128) {
        let topics = (Symbol::new(env, "claim_rewards"), user);
        env.events().publish(topics, amount);
    }

    pub fn update_apy(env: &Env, apy: u32) {
        let topics = (Symbol::new(env, "update_apy"),);
        env.events().publish(topics, apy);
    }

    pub fn update_unbonding_period(env: &Env, unbonding_period: u64) {
        let topics = (Symbol::new(env, "update_unbonding_period"),);
        env.events().publish(topics, unbonding_period);
    }

    /// - topics - `["update_admin", old_admin: Address]`
    /// - data - `new_admin: Address`
    pub fn update_admin(env: &Env, old_admin: Address, new_admin: Address) {
        let topics = (Symbol::new(env, "update_admin"), old_admin);
        env.events().publish(topics, new_admin);
    }
}
