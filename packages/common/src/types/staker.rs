use soroban_sdk::{contracttype, Env};

use crate::{
    error::StakingResult,
    math::{rewards::rewards_for, safe_math::SafeMath},
};

/// Ledger record of a single staker.
///
/// Rewards are settled lazily: `rewards` holds everything accrued up to
/// `last_accrual_time` and every mutation settles up to the current time first.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Staker {
    /// Staked principal held in custody
    pub balance: i128,
    /// Accrued and not yet paid rewards
    pub rewards: i128,
    /// Time of the most recent stake
    pub stake_time: u64,
    /// Time of the pending unstake request
    pub unstake_time: Option<u64>,
    /// Time of the last reward claim, zero after a withdrawal
    pub rewards_claimed_time: u64,
    /// Time up to which `rewards` has been settled
    pub last_accrual_time: u64,
    /// Rate segment `last_accrual_time` falls in
    pub segment: Option<u32>,
}

impl Staker {
    pub fn new(now: u64) -> Self {
        Staker {
            last_accrual_time: now,
            ..Default::default()
        }
    }

    pub fn has_pending_unstake(&self) -> bool {
        self.unstake_time.is_some()
    }

    /// Credits the rewards earned while the rate index moved by `index_delta` and
    /// returns the amount added.
    pub fn accrue(&mut self, env: &Env, index_delta: i128, now: u64) -> StakingResult<i128> {
        let accrued = rewards_for(env, self.balance, index_delta)?;
        self.rewards = self.rewards.safe_add(accrued, env)?;
        self.last_accrual_time = self.last_accrual_time.max(now);

        Ok(accrued)
    }

    /// Adds `amount` to the principal. A new stake cancels any pending unstake request.
    pub fn deposit(&mut self, env: &Env, amount: i128, now: u64) -> StakingResult {
        self.balance = self.balance.safe_add(amount, env)?;
        self.stake_time = now;
        self.unstake_time = None;

        Ok(())
    }

    /// Zeroes the settled rewards and returns them.
    pub fn take_rewards(&mut self, now: u64) -> i128 {
        let rewards = self.rewards;
        self.rewards = 0;
        self.rewards_claimed_time = now;

        rewards
    }

    pub fn reset_after_withdrawal(&mut self) {
        self.balance = 0;
        self.rewards = 0;
        self.rewards_claimed_time = 0;
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{constants::SECONDS_PER_YEAR, error::ErrorCode};
    use soroban_sdk::Env;

    const TOKEN: i128 = 1_000_000_000_000_000_000;
    const ONE_YEAR_AT_SEVEN: i128 = 7 * SECONDS_PER_YEAR as i128;

    #[test]
    fn accrue_credits_rewards_and_moves_the_clock() {
        let env = Env::default();
        let mut staker = Staker::new(100);
        staker.balance = 100 * TOKEN;

        let accrued = staker
            .accrue(&env, ONE_YEAR_AT_SEVEN, 100 + SECONDS_PER_YEAR)
            .unwrap();

        assert_eq!(accrued, 7 * TOKEN);
        assert_eq!(staker.rewards, 7 * TOKEN);
        assert_eq!(staker.last_accrual_time, 100 + SECONDS_PER_YEAR);

        assert_eq!(staker.accrue(&env, 0, 100).unwrap(), 0);
        assert_eq!(staker.rewards, 7 * TOKEN);
        assert_eq!(staker.last_accrual_time, 100 + SECONDS_PER_YEAR);
    }

    #[test]
    fn empty_record_accrues_nothing() {
        let env = Env::default();
        let mut staker = Staker::new(0);

        assert_eq!(staker.accrue(&env, ONE_YEAR_AT_SEVEN, SECONDS_PER_YEAR).unwrap(), 0);
        assert_eq!(staker.last_accrual_time, SECONDS_PER_YEAR);
    }

    #[test]
    fn overflowing_rewards_leave_the_record_untouched() {
        let env = Env::default();
        let mut staker = Staker::new(0);
        staker.balance = i128::MAX;
        staker.rewards = 5;

        assert_eq!(
            staker.accrue(&env, 10_000 * SECONDS_PER_YEAR as i128, SECONDS_PER_YEAR),
            Err(ErrorCode::MathError)
        );
        assert_eq!(staker.rewards, 5);
        assert_eq!(staker.last_accrual_time, 0);
    }

    #[test]
    fn deposit_cancels_pending_unstake() {
        let env = Env::default();
        let mut staker = Staker::new(0);
        staker.unstake_time = Some(5);

        staker.deposit(&env, 10, 7).unwrap();

        assert_eq!(staker.balance, 10);
        assert_eq!(staker.stake_time, 7);
        assert_eq!(staker.unstake_time, None);
    }

    #[test]
    fn pending_unstake_at_time_zero_is_kept() {
        let mut staker = Staker::new(0);
        staker.unstake_time = Some(0);

        assert!(staker.has_pending_unstake());
    }

    #[test]
    fn take_rewards_zeroes_and_stamps() {
        let mut staker = Staker::new(0);
        staker.rewards = 42;

        assert_eq!(staker.take_rewards(9), 42);
        assert_eq!(staker.rewards, 0);
        assert_eq!(staker.rewards_claimed_time, 9);
    }

    #[test]
    fn reset_after_withdrawal_keeps_times() {
        let mut staker = Staker {
            balance: 10,
            rewards: 5,
            stake_time: 1,
            unstake_time: Some(2),
            rewards_claimed_time: 3,
            last_accrual_time: 4,
            segment: Some(1),
        };

        staker.reset_after_withdrawal();

        assert_eq!(
            staker,
            Staker {
                balance: 0,
                rewards: 0,
                stake_time: 1,
                unstake_time: Some(2),
                rewards_claimed_time: 0,
                last_accrual_time: 4,
                segment: Some(1),
            }
        );
    }
}
