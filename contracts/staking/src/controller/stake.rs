use soroban_sdk::{log, Address, Env};
use staking_common::{
    error::{ErrorCode, StakingResult},
    ledger,
    math::{rewards::fine_for, safe_math::SafeMath},
    safe_decrement, safe_increment,
    types::Staker,
    validate,
};

use crate::{
    events::StakingEvents,
    storage::{
        add_staker, get_staker, get_state, save_staker, save_state, utils::transfer_token, Config,
        LedgerState,
    },
};

fn load_staker(env: &Env, sender: &Address) -> StakingResult<Staker> {
    get_staker(env, sender).ok_or_else(|| {
        log!(env, "Staking: Not a staker");
        ErrorCode::NotAStaker
    })
}

pub fn stake(env: &Env, config: &Config, sender: &Address, amount: i128) -> StakingResult {
    let now = env.ledger().timestamp();
    let mut state = get_state(env);

    let existing = get_staker(env, sender);
    let is_new_staker = existing.is_none();
    let mut staker = existing.unwrap_or_else(|| Staker::new(now));

    ledger::settle(env, &mut staker, now)?;
    staker.deposit(env, amount, now)?;
    safe_increment!(state.total_staked, amount);

    transfer_token(
        env,
        &config.token,
        sender,
        &env.current_contract_address(),
        amount,
    );

    if is_new_staker {
        add_staker(env, sender);
    }
    save_staker(env, sender, &staker);
    save_state(env, &state);

    StakingEvents::stake(env, sender.clone(), amount, staker.balance);

    Ok(())
}

pub fn request_unstake(
    env: &Env,
    config: &Config,
    sender: &Address,
    withdraw_with_fine: bool,
) -> StakingResult {
    let now = env.ledger().timestamp();
    let mut staker = load_staker(env, sender)?;

    validate!(
        env,
        !staker.has_pending_unstake(),
        ErrorCode::AlreadyUnstaked,
        "Staking: Unstake: unstake already requested"
    )?;
    validate!(
        env,
        staker.balance > 0,
        ErrorCode::NotAStaker,
        "Staking: Unstake: nothing staked"
    )?;

    ledger::settle_or_forfeit(env, &mut staker, now)?;

    let immediate = config.unbonding_period == 0 || withdraw_with_fine;
    if immediate {
        let mut state = get_state(env);
        let apply_fine = withdraw_with_fine && config.unbonding_period != 0;
        pay_out(env, config, sender, &mut staker, &mut state, apply_fine)?;
        save_state(env, &state);
    }
    staker.unstake_time = Some(now);
    save_staker(env, sender, &staker);

    StakingEvents::unstake_request(env, sender.clone(), now, immediate);

    Ok(())
}

pub fn withdraw(
    env: &Env,
    config: &Config,
    sender: &Address,
    withdraw_with_fine: bool,
) -> StakingResult<i128> {
    let now = env.ledger().timestamp();
    let mut staker = load_staker(env, sender)?;

    let requested_at = staker.unstake_time.ok_or_else(|| {
        log!(env, "Staking: Withdraw: unstake not requested");
        ErrorCode::UnstakeNotRequested
    })?;

    let unbonded = now.safe_sub(requested_at, env)? >= config.unbonding_period;
    validate!(
        env,
        unbonded || withdraw_with_fine,
        ErrorCode::UnbondingNotOver,
        "Staking: Withdraw: unbonding not over, requested at {}",
        requested_at
    )?;

    ledger::settle_or_forfeit(env, &mut staker, now)?;

    let mut state = get_state(env);
    let paid = pay_out(env, config, sender, &mut staker, &mut state, !unbonded)?;
    staker.unstake_time = None;

    save_staker(env, sender, &staker);
    save_state(env, &state);

    Ok(paid)
}

pub fn claim_rewards(env: &Env, config: &Config, sender: &Address) -> StakingResult<i128> {
    let now = env.ledger().timestamp();
    let mut staker = load_staker(env, sender)?;

    let last_action = staker.stake_time.max(staker.rewards_claimed_time);
    validate!(
        env,
        now.safe_sub(last_action, env)? >= config.claim_delay,
        ErrorCode::RewardsCannotBeClaimed,
        "Staking: Claim rewards: claim delay not over since {}",
        last_action
    )?;

    ledger::settle(env, &mut staker, now)?;
    let rewards = staker.take_rewards(now);

    let mut state = get_state(env);
    safe_increment!(state.total_rewards_paid, rewards);

    if rewards > 0 {
        transfer_token(
            env,
            &config.token,
            &env.current_contract_address(),
            sender,
            rewards,
        );
    }

    save_staker(env, sender, &staker);
    save_state(env, &state);

    StakingEvents::claim_rewards(env, sender.clone(), rewards);

    Ok(rewards)
}

/// Sends settled principal and rewards to `recipient` and zeroes the record.
/// Returns the amount transferred.
fn pay_out(
    env: &Env,
    config: &Config,
    recipient: &Address,
    staker: &mut Staker,
    state: &mut LedgerState,
    apply_fine: bool,
) -> StakingResult<i128> {
    let fine = if apply_fine {
        fine_for(env, staker.balance, config.immediate_unstake_fine)?
    } else {
        0
    };
    let payout = staker
        .balance
        .safe_sub(fine, env)?
        .safe_add(staker.rewards, env)?;

    safe_decrement!(state.total_staked, staker.balance);
    safe_increment!(state.total_rewards_paid, staker.rewards);
    safe_increment!(state.total_fines_collected, fine);
    staker.reset_after_withdrawal();
    ledger::release(env, staker)?;

    if payout > 0 {
        transfer_token(
            env,
            &config.token,
            &env.current_contract_address(),
            recipient,
            payout,
        );
    }

    StakingEvents::withdraw(env, recipient.clone(), payout, fine);

    Ok(payout)
}
