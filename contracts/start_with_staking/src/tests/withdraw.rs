use pretty_assertions::assert_eq;
use soroban_sdk::{testutils::Address as _, Address};
use staking_common::error::ErrorCode;

use super::setup::{jump, TestContext, ONE_MONTH, ONE_WEEK, ONE_YEAR, TOKEN};

#[test]
fn unstake_fails_when_not_a_staker() {
    let ctx = TestContext::new();
    let stranger = Address::generate(&ctx.env);

    match ctx.staking.try_unstake(&stranger) {
        Err(Ok(e)) => assert_eq!(e, ErrorCode::NotAStaker),
        _ => panic!("expected NotAStaker"),
    }
}

#[test]
fn unstake_twice_fails() {
    let ctx = TestContext::new();
    ctx.fund_and_stake(&ctx.staker, 100 * TOKEN);
    ctx.staking.unstake(&ctx.staker);

    match ctx.staking.try_unstake(&ctx.staker) {
        Err(Ok(e)) => assert_eq!(e, ErrorCode::AlreadyUnstaked),
        _ => panic!("expected AlreadyUnstaked"),
    }
}

#[test]
fn unstake_is_deferred_even_without_unbonding() {
    let ctx = TestContext::new();
    ctx.staking.update_unbonding_period(&ctx.admin, &0);
    ctx.fund_and_stake(&ctx.staker, 100 * TOKEN);

    ctx.staking.unstake(&ctx.staker);

    let staker = ctx.staking.get_staker(&ctx.staker);
    assert_eq!(staker.balance, 100 * TOKEN);
    assert_eq!(staker.unstake_time, Some(ONE_WEEK));
    assert_eq!(ctx.token.balance(&ctx.staker), 0);

    assert_eq!(ctx.staking.withdraw(&ctx.staker), 100 * TOKEN);
}

#[test]
fn withdraw_fails_without_request() {
    let ctx = TestContext::new();
    ctx.fund_and_stake(&ctx.staker, 100 * TOKEN);

    match ctx.staking.try_withdraw(&ctx.staker) {
        Err(Ok(e)) => assert_eq!(e, ErrorCode::UnstakeNotRequested),
        _ => panic!("expected UnstakeNotRequested"),
    }
}

#[test]
fn withdraw_fails_before_unbonding_is_over() {
    let ctx = TestContext::new();
    ctx.fund_and_stake(&ctx.staker, 100 * TOKEN);
    ctx.staking.unstake(&ctx.staker);
    jump(&ctx.env, ONE_WEEK - 1);

    match ctx.staking.try_withdraw(&ctx.staker) {
        Err(Ok(e)) => assert_eq!(e, ErrorCode::UnbondingNotOver),
        _ => panic!("expected UnbondingNotOver"),
    }
}

#[test]
fn withdraw_pays_principal_and_rewards() {
    let ctx = TestContext::new();
    ctx.fund_and_stake(&ctx.staker, 100 * TOKEN);
    jump(&ctx.env, ONE_YEAR);
    ctx.staking.unstake(&ctx.staker);
    jump(&ctx.env, ONE_WEEK);

    let expected = ctx.staking.get_staker(&ctx.staker).rewards + 100 * TOKEN;
    let paid = ctx.staking.withdraw(&ctx.staker);

    assert_eq!(paid, expected);
    assert!(paid > 107 * TOKEN);
    assert_eq!(ctx.token.balance(&ctx.staker), paid);

    let staker = ctx.staking.get_staker(&ctx.staker);
    assert_eq!(staker.balance, 0);
    assert_eq!(staker.rewards, 0);
    assert_eq!(staker.unstake_time, None);

    let state = ctx.staking.query_state();
    assert_eq!(state.total_staked, 0);
    assert_eq!(state.total_rewards_paid, paid - 100 * TOKEN);

    match ctx.staking.try_withdraw(&ctx.staker) {
        Err(Ok(e)) => assert_eq!(e, ErrorCode::UnstakeNotRequested),
        _ => panic!("expected UnstakeNotRequested"),
    }
}

#[test]
fn staking_again_cancels_pending_request() {
    let ctx = TestContext::new();
    ctx.fund_and_stake(&ctx.staker, 100 * TOKEN);
    ctx.staking.unstake(&ctx.staker);
    ctx.fund_and_stake(&ctx.staker, TOKEN);

    assert_eq!(ctx.staking.get_staker(&ctx.staker).unstake_time, None);
    ctx.staking.unstake(&ctx.staker);
}

#[test]
fn large_principal_withdraws_with_rewards() {
    let ctx = TestContext::new();
    let principal = 100_000_000_000_000 * TOKEN;
    ctx.token_admin
        .mint(&ctx.staking.address, &(10_000_000_000_000 * TOKEN));
    ctx.fund_and_stake(&ctx.staker, principal);
    ctx.staking.unstake(&ctx.staker);
    jump(&ctx.env, ONE_MONTH);

    let rewards = principal * 7 * 30 / (100 * 365);
    assert_eq!(ctx.staking.rewards_of(&ctx.staker), rewards);
    assert_eq!(ctx.staking.withdraw(&ctx.staker), principal + rewards);
}

#[test]
fn failed_withdrawal_leaves_no_trace() {
    let ctx = TestContext::without_reward_pool();
    ctx.fund_and_stake(&ctx.staker, 100 * TOKEN);
    ctx.staking.unstake(&ctx.staker);
    jump(&ctx.env, ONE_YEAR);

    let staker = ctx.staking.get_staker(&ctx.staker);
    let state = ctx.staking.query_state();

    assert!(ctx.staking.try_withdraw(&ctx.staker).is_err());

    assert_eq!(ctx.staking.get_staker(&ctx.staker), staker);
    assert_eq!(ctx.staking.query_state(), state);
    assert_eq!(ctx.token.balance(&ctx.staking.address), 100 * TOKEN);
}
