use soroban_sdk::{contract, contractimpl, contractmeta, log, Address, Env, Vec};
use staking_common::{
    constants::MAX_APY,
    error::{ErrorCode, StakingResult},
    ledger,
    math::safe_math::SafeMath,
    safe_decrement, safe_increment,
    types::Staker,
    validate,
};

use crate::{
    events::StartWithStakingEvents,
    staking::StartWithStakingTrait,
    storage::{
        add_staker, get_config, get_staker, get_stakers, get_state, save_config, save_staker,
        save_state,
        utils::{bump_instance, is_initialized, require_owner, set_initialized, transfer_token},
        Config, LedgerState,
    },
};

contractmeta!(
    key = "Description",
    val = "APY staking with a plain unbonding period"
);

#[contract]
pub struct StartWithStaking;

fn load_staker(env: &Env, sender: &Address) -> StakingResult<Staker> {
    get_staker(env, sender).ok_or_else(|| {
        log!(env, "StartWithStaking: Not a staker");
        ErrorCode::NotAStaker
    })
}

#[contractimpl]
impl StartWithStakingTrait for StartWithStaking {
    // ################################################################
    //                             Admin
    // ################################################################

    fn initialize(
        env: Env,
        admin: Address,
        token: Address,
        apy: u32,
        unbonding_period: u64,
    ) -> Result<(), ErrorCode> {
        if is_initialized(&env) {
            log!(
                &env,
                "StartWithStaking: Initialize: initializing contract twice is not allowed"
            );
            return Err(ErrorCode::AlreadyInitialized);
        }

        validate!(
            &env,
            apy <= MAX_APY,
            ErrorCode::InvalidParameter,
            "StartWithStaking: Initialize: apy {} is above the maximum",
            apy
        )?;

        set_initialized(&env);

        save_config(
            &env,
            &Config {
                token: token.clone(),
                admin: admin.clone(),
                apy,
                unbonding_period,
            },
        );
        ledger::open(&env, env.ledger().timestamp(), apy, true);
        save_state(&env, &LedgerState::default());

        StartWithStakingEvents::initialize(&env, admin, token, apy, unbonding_period);

        Ok(())
    }

    fn update_apy(env: Env, sender: Address, apy: u32) -> Result<(), ErrorCode> {
        sender.require_auth();
        bump_instance(&env);

        let mut config = get_config(&env)?;
        require_owner(&env, &config, &sender)?;

        validate!(
            &env,
            apy <= MAX_APY,
            ErrorCode::InvalidParameter,
            "StartWithStaking: Update APY: apy {} is above the maximum",
            apy
        )?;

        ledger::start_segment(&env, env.ledger().timestamp(), apy, true)?;

        config.apy = apy;
        save_config(&env, &config);

        StartWithStakingEvents::update_apy(&env, apy);

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

        StartWithStakingEvents::update_unbonding_period(&env, unbonding_period);

        Ok(())
    }

    fn update_admin(env: Env, sender: Address, new_admin: Address) -> Result<(), ErrorCode> {
        sender.require_auth();
        bump_instance(&env);

        let mut config = get_config(&env)?;
        require_owner(&env, &config, &sender)?;

        config.admin = new_admin.clone();
        save_config(&env, &config);

        StartWithStakingEvents::update_admin(&env, sender, new_admin);

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
            "StartWithStaking: Stake: invalid amount {}",
            amount
        )?;

        let now = env.ledger().timestamp();
        let mut state = get_state(&env);

        let existing = get_staker(&env, &sender);
        let is_new_staker = existing.is_none();
        let mut staker = existing.unwrap_or_else(|| Staker::new(now));

        ledger::settle(&env, &mut staker, now)?;
        staker.deposit(&env, amount, now)?;
        safe_increment!(state.total_staked, amount);

        transfer_token(
            &env,
            &config.token,
            &sender,
            &env.current_contract_address(),
            amount,
        );

        if is_new_staker {
            add_staker(&env, &sender);
        }
        save_staker(&env, &sender, &staker);
        save_state(&env, &state);

        StartWithStakingEvents::stake(&env, sender, amount, staker.balance);

        Ok(())
    }

    fn unstake(env: Env, sender: Address) -> Result<(), ErrorCode> {
        sender.require_auth();
        bump_instance(&env);

        get_config(&env)?;

        let now = env.ledger().timestamp();
        let mut staker = load_staker(&env, &sender)?;

        validate!(
            &env,
            !staker.has_pending_unstake(),
            ErrorCode::AlreadyUnstaked,
            "StartWithStaking: Unstake: unstake already requested"
        )?;
        validate!(
            &env,
            staker.balance > 0,
            ErrorCode::NotAStaker,
            "StartWithStaking: Unstake: nothing staked"
        )?;

        ledger::settle_or_forfeit(&env, &mut staker, now)?;
        staker.unstake_time = Some(now);
        save_staker(&env, &sender, &staker);

        StartWithStakingEvents::unstake_request(&env, sender, now);

        Ok(())
    }

    fn withdraw(env: Env, sender: Address) -> Result<i128, ErrorCode> {
        sender.require_auth();
        bump_instance(&env);

        let config = get_config(&env)?;

        let now = env.ledger().timestamp();
        let mut staker = load_staker(&env, &sender)?;

        let requested_at = staker.unstake_time.ok_or_else(|| {
            log!(&env, "StartWithStaking: Withdraw: unstake not requested");
            ErrorCode::UnstakeNotRequested
        })?;
        validate!(
            &env,
            now.safe_sub(requested_at, &env)? >= config.unbonding_period,
            ErrorCode::UnbondingNotOver,
            "StartWithStaking: Withdraw: unbonding not over, requested at {}",
            requested_at
        )?;

        ledger::settle_or_forfeit(&env, &mut staker, now)?;

        let payout = staker.balance.safe_add(staker.rewards, &env)?;

        let mut state = get_state(&env);
        safe_decrement!(state.total_staked, staker.balance);
        safe_increment!(state.total_rewards_paid, staker.rewards);

        staker.reset_after_withdrawal();
        staker.unstake_time = None;
        ledger::release(&env, &mut staker)?;

        if payout > 0 {
            transfer_token(
                &env,
                &config.token,
                &env.current_contract_address(),
                &sender,
                payout,
            );
        }

        save_staker(&env, &sender, &staker);
        save_state(&env, &state);

        StartWithStakingEvents::withdraw(&env, sender, payout);

        Ok(payout)
    }

    fn claim_rewards(env: Env, sender: Address) -> Result<i128, ErrorCode> {
        sender.require_auth();
        bump_instance(&env);

        let config = get_config(&env)?;

        let now = env.ledger().timestamp();
        let mut staker = load_staker(&env, &sender)?;
        ledger::settle(&env, &mut staker, now)?;
        let rewards = staker.take_rewards(now);

        let mut state = get_state(&env);
        safe_increment!(state.total_rewards_paid, rewards);

        if rewards > 0 {
            transfer_token(
                &env,
                &config.token,
                &env.current_contract_address(),
                &sender,
                rewards,
            );
        }

        save_staker(&env, &sender, &staker);
        save_state(&env, &state);

        StartWithStakingEvents::claim_rewards(&env, sender, rewards);

        Ok(rewards)
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

        Ok(Self::get_staker(env, account)?.rewards)
    }

    fn get_all_stakers(env: Env) -> Vec<Address> {
        bump_instance(&env);
        get_stakers(&env)
    }

    fn get_apy(env: Env) -> Result<u32, ErrorCode> {
        bump_instance(&env);
        Ok(get_config(&env)?.apy)
    }

    fn get_unbonding_period(env: Env) -> Result<u64, ErrorCode> {
        bump_instance(&env);
        Ok(get_config(&env)?.unbonding_period)
    }

    fn query_admin(env: Env) -> Result<Address, ErrorCode> {
        bump_instance(&env);
        Ok(get_config(&env)?.admin)
    }

    fn query_state(env: Env) -> LedgerState {
        bump_instance(&env);
        get_state(&env)
    }
}
