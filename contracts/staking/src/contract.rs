use soroban_sdk::{contract, contractimpl, contractmeta, log, Address, Env, Vec};
use staking_common::{
    constants::{MAX_APY, MAX_IMMEDIATE_UNSTAKE_FINE},
    error::ErrorCode,
    ledger,
    types::{ApyEffectiveMode, RateSegment, Staker},
    validate,
};

use crate::{
    controller,
    events::StakingEvents,
    staking::StakingTrait,
    storage::{
        get_config, get_staker, get_stakers, get_state, save_config, save_state,
        utils::{bump_instance, is_initialized, require_owner, set_initialized},
        Config, LedgerState,
    },
};

contractmeta!(
    key = "Description",
    val = "APY staking with unbonding, claim delay and immediate unstake fine"
);

#[contract]
pub struct Staking;

#[contractimpl]
impl StakingTrait for Staking {
    // ################################################################
    //                             Admin
    // ################################################################

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
    ) -> Result<(), ErrorCode> {
        if is_initialized(&env) {
            log!(
                &env,
                "Staking: Initialize: initializing contract twice is not allowed"
            );
            return Err(ErrorCode::AlreadyInitialized);
        }

        validate!(
            &env,
            apy <= MAX_APY,
            ErrorCode::InvalidParameter,
            "Staking: Initialize: apy {} is above the maximum",
            apy
        )?;
        validate!(
            &env,
            immediate_unstake_fine <= MAX_IMMEDIATE_UNSTAKE_FINE,
            ErrorCode::InvalidParameter,
            "Staking: Initialize: fine {} is above the maximum",
            immediate_unstake_fine
        )?;

        set_initialized(&env);

        let now = env.ledger().timestamp();
        save_config(
            &env,
            &Config {
                token: token.clone(),
                admin: admin.clone(),
                apy,
                unbonding_period,
                claim_delay,
                pause_status,
                stop_status,
                immediate_unstake_fine,
            },
        );
        ledger::open(&env, now, apy, stop_status);
        save_state(&env, &LedgerState::default());

        StakingEvents::initialize(&env, admin, token, apy);

        Ok(())
    }

    fn update_apy(
        env: Env,
        sender: Address,
        apy: u32,
        effective_mode: u32,
    ) -> Result<(), ErrorCode> {
        sender.require_auth();
        bump_instance(&env);

        let mut config = get_config(&env)?;
        require_owner(&env, &config, &sender)?;

        validate!(
            &env,
            apy <= MAX_APY,
            ErrorCode::InvalidParameter,
            "Staking: Update APY: apy {} is above the maximum",
            apy
        )?;
        let mode = ApyEffectiveMode::try_from(effective_mode).map_err(|_| {
            log!(
                &env,
                "Staking: Update APY: unknown effective mode {}",
                effective_mode
            );
            ErrorCode::InvalidParameter
        })?;

        match mode {
            ApyEffectiveMode::Immediate => ledger::start_segment(
                &env,
                env.ledger().timestamp(),
                apy,
                config.stop_status,
            )?,
            ApyEffectiveMode::Retroactive => ledger::amend_current_apy(&env, apy)?,
        }

        config.apy = apy;
        save_config(&env, &config);

        StakingEvents::update_apy(&env, apy, effective_mode);

        Ok(())
    }

    fn update_unbonding_period(
        env: Env,
        sender: Address,
        unbonding_period: u64,
    ) -> Result<(), ErrorCode> {
        sender.require_auth();
        bump_instance(&env);

        let mut config = get_config(&env)?;
        require_owner(&env, &config, &sender)?;

        config.unbonding_period = unbonding_period;
        save_config(&env, &config);

        StakingEvents::update_policy(&env, "unbonding_period", unbonding_period);

        Ok(())
    }

    fn update_claim_delay(env: Env, sender: Address, claim_delay: u64) -> Result<(), ErrorCode> {
        sender.require_auth();
        bump_instance(&env);

        let mut config = get_config(&env)?;
        require_owner(&env, &config, &sender)?;

        config.claim_delay = claim_delay;
        save_config(&env, &config);

        StakingEvents::update_policy(&env, "claim_delay", claim_delay);

        Ok(())
    }

    fn update_pause_status(
        env: Env,
        sender: Address,
        pause_status: bool,
    ) -> Result<(), ErrorCode> {
        sender.require_auth();
        bump_instance(&env);

        let mut config = get_config(&env)?;
        require_owner(&env, &config, &sender)?;

        config.pause_status = pause_status;
        save_config(&env, &config);

        StakingEvents::update_policy(&env, "pause_status", pause_status);

        Ok(())
    }

    fn update_stop_status(env: Env, sender: Address, stop_status: bool) -> Result<(), ErrorCode> {
        sender.require_auth();
        bump_instance(&env);

        let mut config = get_config(&env)?;
        require_owner(&env, &config, &sender)?;

        if config.stop_status != stop_status {
            ledger::start_segment(&env, env.ledger().timestamp(), config.apy, stop_status)?;
        }

        config.stop_status = stop_status;
        save_config(&env, &config);

        StakingEvents::update_policy(&env, "stop_status", stop_status);

        Ok(())
    }

    fn update_immediate_unstake_fine(
        env: Env,
        sender: Address,
        immediate_unstake_fine: u32,
    ) -> Result<(), ErrorCode> {
        sender.require_auth();
        bump_instance(&env);

        let mut config = get_config(&env)?;
        require_owner(&env, &config, &sender)?;

        validate!(
            &env,
            immediate_unstake_fine <= MAX_IMMEDIATE_UNSTAKE_FINE,
            ErrorCode::InvalidParameter,
            "Staking: Update fine: fine {} is above the maximum",
            immediate_unstake_fine
        )?;

        config.immediate_unstake_fine = immediate_unstake_fine;
        save_config(&env, &config);

        StakingEvents::update_policy(&env, "immediate_unstake_fine", immediate_unstake_fine);

        Ok(())
    }

    fn update_admin(env: Env, sender: Address, new_admin: Address) -> Result<(), ErrorCode> {
        sender.require_auth();
        bump_instance(&env);

        let mut config = get_config(&env)?;
        require_owner(&env, &config, &sender)?;

        config.admin = new_admin.clone();
        save_config(&env, &config);

        StakingEvents::update_admin(&env, sender, new_admin);

        Ok(())
    }

    // ################################################################
    //                             Users
    // ################################################################

    fn stake(env: Env, sender: Address, amount: i128) -> Result<(), ErrorCode> {
        sender.require_auth();
        bump_instance(&env);

        let config = get_config(&env)?;

        validate!(
            &env,
            amount > 0,
            ErrorCode::InvalidAmount,
            "Staking: Stake: invalid amount {}",
            amount
        )?;
        validate!(
            &env,
            config.is_staking_active(),
            ErrorCode::StakingNotActive,
            "Staking: Stake: staking not active"
        )?;

        controller::stake::stake(&env, &config, &sender, amount)
    }

    fn unstake(env: Env, sender: Address, withdraw_with_fine: bool) -> Result<(), ErrorCode> {
        sender.require_auth();
        bump_instance(&env);

        let config = get_config(&env)?;

        controller::stake::request_unstake(&env, &config, &sender, withdraw_with_fine)
    }

    fn withdraw(env: Env, sender: Address, withdraw_with_fine: bool) -> Result<i128, ErrorCode> {
        sender.require_auth();
        bump_instance(&env);

        let config = get_config(&env)?;

        controller::stake::withdraw(&env, &config, &sender, withdraw_with_fine)
    }

    fn claim_rewards(env: Env, sender: Address) -> Result<i128, ErrorCode> {
        sender.require_auth();
        bump_instance(&env);

        let config = get_config(&env)?;

        controller::stake::claim_rewards(&env, &config, &sender)
    }

    // ################################################################
    //                             Queries
    // ################################################################

    fn get_staker(env: Env, account: Address) -> Result<Staker, ErrorCode> {
        bump_instance(&env);

        match get_staker(&env, &account) {
            Some(staker) => ledger::settled(&env, &staker, env.ledger().timestamp()),
            None => Ok(Staker::default()),
        }
    }

    fn stake_of(env: Env, account: Address) -> i128 {
        bump_instance(&env);

        get_staker(&env, &account)
            .map(|staker| staker.balance)
            .unwrap_or(0)
    }

    fn rewards_of(env: Env, account: Address) -> Result<i128, ErrorCode> {
        bump_instance(&env);

        match get_staker(&env, &account) {
            Some(staker) => Ok(ledger::settled(&env, &staker, env.ledger().timestamp())?.rewards),
            None => Ok(0),
        }
    }

    fn get_all_stakers(env: Env) -> Vec<Address> {
        bump_instance(&env);
        get_stakers(&env)
    }

    fn apy(env: Env) -> Result<u32, ErrorCode> {
        bump_instance(&env);
        Ok(get_config(&env)?.apy)
    }

    fn unbonding_period(env: Env) -> Result<u64, ErrorCode> {
        bump_instance(&env);
        Ok(get_config(&env)?.unbonding_period)
    }

    fn claim_delay(env: Env) -> Result<u64, ErrorCode> {
        bump_instance(&env);
        Ok(get_config(&env)?.claim_delay)
    }

    fn pause_status(env: Env) -> Result<bool, ErrorCode> {
        bump_instance(&env);
        Ok(get_config(&env)?.pause_status)
    }

    fn stop_status(env: Env) -> Result<bool, ErrorCode> {
        bump_instance(&env);
        Ok(get_config(&env)?.stop_status)
    }

    fn immediate_unstake_fine(env: Env) -> Result<u32, ErrorCode> {
        bump_instance(&env);
        Ok(get_config(&env)?.immediate_unstake_fine)
    }

    fn query_config(env: Env) -> Result<Config, ErrorCode> {
        bump_instance(&env);
        get_config(&env)
    }

    fn query_admin(env: Env) -> Result<Address, ErrorCode> {
        bump_instance(&env);
        Ok(get_config(&env)?.admin)
    }

    fn query_state(env: Env) -> LedgerState {
        bump_instance(&env);
        get_state(&env)
    }

    fn query_rate_segment(env: Env) -> Result<RateSegment, ErrorCode> {
        bump_instance(&env);
        Ok(ledger::current_segment(&env)?.1)
    }
}
