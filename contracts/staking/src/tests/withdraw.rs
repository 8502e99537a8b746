use pretty_assertions::assert_eq;
use soroban_sdk::{testutils::Address as _, Address};
use staking_common::{constants::MAX_APY, error::ErrorCode};

use super::setup::{jump, TestContext, ONE_HOUR, ONE_MONTH, ONE_YEAR, TOKEN, UNBONDING_PERIOD};

#[test]
fn withdraw_fails_when_not_a_staker() {
    let ctx = TestContext::new();
    let stranger = Address::generate(&ctx.env);

    match ctx.staking.try_withdraw(&stranger, &false) {
        Err(Ok(e)) => assert_eq!(e, ErrorCode::NotAStaker),
        _ => panic!("expected NotAStaker"),
    }
}

#[test]
fn withdraw_fails_when_unstake_not_requested() {
    let ctx = TestContext::new();
    ctx.fund_and_stake(&ctx.staker, 100 * TOKEN);

    match ctx.staking.try_withdraw(&ctx.staker, &false) {
        Err(Ok(e)) => assert_eq!(e, ErrorCode::UnstakeNotRequested),
        _ => panic!("expected UnstakeNotRequested"),
    }
}

#[test]
fn withdraw_fails_before_unbonding_is_over() {
    let ctx = TestContext::new();
    ctx.fund_and_stake(&ctx.staker, 100 * TOKEN);
    jump(&ctx.env, ONE_HOUR);
    ctx.staking.unstake(&ctx.staker, &false);

    jump(&ctx.env, UNBONDING_PERIOD - 1);

    match ctx.staking.try_withdraw(&ctx.staker, &false) {
        Err(Ok(e)) => assert_eq!(e, ErrorCode::UnbondingNotOver),
        _ => panic!("expected UnbondingNotOver"),
    }
    assert_eq!(ctx.staking.stake_of(&ctx.staker), 100 * TOKEN);
}

#[test]
fn withdraw_pays_principal_and_rewards_after_unbonding() {
    let ctx = TestContext::new();
    ctx.fund_and_stake(&ctx.staker, 100 * TOKEN);
    jump(&ctx.env, ONE_HOUR);
    ctx.staking.unstake(&ctx.staker, &false);
    jump(&ctx.env, ONE_HOUR);

    let initial_balance = ctx.token.balance(&ctx.staker);
    let stake = ctx.staking.stake_of(&ctx.staker);
    let rewards = ctx.staking.rewards_of(&ctx.staker);

    let paid = ctx.staking.withdraw(&ctx.staker, &false);

    assert_eq!(paid, stake + rewards);
    assert_eq!(ctx.token.balance(&ctx.staker), initial_balance + stake + rewards);

    let staker = ctx.staking.get_staker(&ctx.staker);
    assert_eq!(staker.balance, 0);
    assert_eq!(staker.rewards, 0);
    assert_eq!(staker.rewards_claimed_time, 0);
    assert_eq!(staker.unstake_time, None);
    assert_eq!(ctx.staking.rewards_of(&ctx.staker), 0);

    // the roster only grows
    assert_eq!(ctx.staking.get_all_stakers().len(), 1);
    assert_eq!(ctx.staking.query_state().total_staked, 0);
}

#[test]
fn withdraw_exactly_at_end_of_unbonding() {
    let ctx = TestContext::new();
    ctx.fund_and_stake(&ctx.staker, 100 * TOKEN);
    ctx.staking.unstake(&ctx.staker, &false);

    jump(&ctx.env, UNBONDING_PERIOD);

    let rewards = ctx.staking.rewards_of(&ctx.staker);
    assert_eq!(
        ctx.staking.withdraw(&ctx.staker, &false),
        100 * TOKEN + rewards
    );
}

#[test]
fn withdraw_with_fine_skips_unbonding() {
    let ctx = TestContext::new();
    ctx.staking.update_unbonding_period(&ctx.admin, &ONE_HOUR);
    ctx.fund_and_stake(&ctx.staker, 100 * TOKEN);
    ctx.staking.unstake(&ctx.staker, &false);

    let paid = ctx.staking.withdraw(&ctx.staker, &true);

    assert_eq!(paid, 99 * TOKEN);
    assert_eq!(ctx.token.balance(&ctx.staker), 99 * TOKEN);
    assert_eq!(ctx.staking.query_state().total_fines_collected, TOKEN);
    assert_eq!(ctx.staking.get_staker(&ctx.staker).unstake_time, None);
}

#[test]
fn no_fine_once_unbonding_is_over() {
    let ctx = TestContext::new();
    ctx.fund_and_stake(&ctx.staker, 100 * TOKEN);
    ctx.staking.unstake(&ctx.staker, &false);
    jump(&ctx.env, UNBONDING_PERIOD);

    let rewards = ctx.staking.rewards_of(&ctx.staker);
    let paid = ctx.staking.withdraw(&ctx.staker, &true);

    assert_eq!(paid, 100 * TOKEN + rewards);
    assert_eq!(ctx.staking.query_state().total_fines_collected, 0);
}

#[test]
fn large_principal_withdraws_with_rewards() {
    let ctx = TestContext::new();
    let principal = 100_000_000_000_000 * TOKEN;
    ctx.token_admin
        .mint(&ctx.staking.address, &(10_000_000_000_000 * TOKEN));
    ctx.fund_and_stake(&ctx.staker, principal);

    ctx.staking.unstake(&ctx.staker, &false);
    jump(&ctx.env, ONE_MONTH);

    let rewards = principal * 7 * 30 / (100 * 365);
    assert_eq!(ctx.staking.rewards_of(&ctx.staker), rewards);
    assert_eq!(ctx.staking.withdraw(&ctx.staker, &false), principal + rewards);
    assert_eq!(ctx.token.balance(&ctx.staker), principal + rewards);
}

#[test]
fn principal_leaves_even_when_rewards_overflow() {
    let ctx = TestContext::without_reward_pool();
    ctx.staking.update_apy(&ctx.admin, &MAX_APY, &0);
    ctx.fund_and_stake(&ctx.staker, i128::MAX);
    jump(&ctx.env, ONE_YEAR);
    ctx.staking.update_apy(&ctx.admin, &0, &0);

    match ctx.staking.try_rewards_of(&ctx.staker) {
        Err(Ok(e)) => assert_eq!(e, ErrorCode::MathError),
        _ => panic!("expected MathError"),
    }

    ctx.staking.unstake(&ctx.staker, &false);
    assert_eq!(ctx.staking.rewards_of(&ctx.staker), 0);

    jump(&ctx.env, UNBONDING_PERIOD);
    assert_eq!(ctx.staking.withdraw(&ctx.staker, &false), i128::MAX);
    assert_eq!(ctx.token.balance(&ctx.staker), i128::MAX);
    assert_eq!(ctx.staking.query_state().total_staked, 0);
}

#[test]
fn failed_payout_leaves_no_trace() {
    let ctx = TestContext::without_reward_pool();
    ctx.fund_and_stake(&ctx.staker, 100 * TOKEN);
    ctx.staking.unstake(&ctx.staker, &false);
    jump(&ctx.env, ONE_YEAR);

    let staker = ctx.staking.get_staker(&ctx.staker);
    let state = ctx.staking.query_state();
    assert!(staker.rewards > 0);

    // principal plus rewards exceeds what the contract holds
    assert!(ctx.staking.try_withdraw(&ctx.staker, &false).is_err());

    assert_eq!(ctx.staking.get_staker(&ctx.staker), staker);
    assert_eq!(ctx.staking.query_state(), state);
    assert_eq!(ctx.token.balance(&ctx.staking.address), 100 * TOKEN);
    assert_eq!(ctx.token.balance(&ctx.staker), 0);
}
