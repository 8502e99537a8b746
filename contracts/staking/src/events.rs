use soroban_sdk::{Address, Env, IntoVal, Symbol, Val};

pub struct StakingEvents {}

impl StakingEvents {
    /// Emitted when the contract is initialized
    ///
    /// - topics - `["initialize", admin: Address]`
    /// - data - `[token: Address, apy: u32]`
    pub fn initialize(env: &Env, admin: Address, token: Address, apy: u32) {
        let topics = (Symbol::new(env, "initialize"), admin);
        env.events().publish(topics, (token, apy));
    }

    /// Emitted when a user stakes
    ///
    /// - topics - `["stake", user: Address]`
    /// - data - `[amount: i128, balance: i128]`
    pub fn stake(env: &Env, user: Address, amount: i128, balance: i128) {
        let topics = (Symbol::new(env, "stake"), user);
        env.events().publish(topics, (amount, balance));
    }

    /// Emitted when a user requests an unstake
    ///
    /// - topics - `["unstake_request", user: Address]`
    /// - data - `[ts: u64, immediate: bool]`
    pub fn unstake_request(env: &Env, user: Address, ts: u64, immediate: bool) {
        let topics = (Symbol::new(env, "unstake_request"), user);
        env.events().publish(topics, (ts, immediate));
    }

    /// Emitted when principal and rewards leave custody
    ///
    /// - topics - `["withdraw", user: Address]`
    /// - data - `[amount: i128, fine: i128]`
    pub fn withdraw(env: &Env, user: Address, amount: i128, fine: i128) {
        let topics = (Symbol::new(env, "withdraw"), user);
        env.events().publish(topics, (amount, fine));
    }

    /// - topics - `["claim_rewards", user: Address]`
    /// - data - `amount: i128`
    pub fn claim_rewards(env: &Env, user: Address, amount: i128) {
        let topics = (Symbol::new(env, "claim_rewards"), user);
        env.events().publish(topics, amount);
    }

    /// - topics - `["update_apy"]`
    /// - data - `[apy: u32, effective_mode: u32]`
    pub fn update_apy(env: &Env, apy: u32, effective_mode: u32) {
        let topics = (Symbol::new(env, "update_apy"),);
        env.events().publish(topics, (apy, effective_mode));
    }

    /// Emitted when the owner changes a policy parameter other than the APY
    ///
    /// - topics - `["update_policy", parameter: Symbol]`
    /// - data - the new value
    pub fn update_policy<V: IntoVal<Env, Val>>(env: &Env, parameter: &str, value: V) {
        let topics = (Symbol::new(env, "update_policy"), Symbol::new(env, parameter));
        env.events().publish(topics, value);
    }

    /// - topics - `["update_admin", old_admin: Address]`
    /// - data - `new_admin: Address`
    pub fn update_admin(env: &Env, old_admin: Address, new_admin: Address) {
        let topics = (Symbol::new(env, "update_admin"), old_admin);
        env.events().publish(topics, new_admin);
    }
}
