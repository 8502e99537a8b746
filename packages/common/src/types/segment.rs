use soroban_sdk::{contracttype, Env};

use crate::{error::StakingResult, math::safe_math::SafeMath};

/// Stretch of time between two policy changes, priced at a single APY.
///
/// `base` is the cumulative rate index at `start`: the sum of APY percent times seconds
/// over every earlier accruing stretch. While `accruing` is false the index stands still.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RateSegment {
    pub start: u64,
    pub base: i128,
    pub apy: u32,
    pub accruing: bool,
    /// Staker records last settled inside this segment
    pub members: u32,
}

impl RateSegment {
    pub fn new(start: u64, apy: u32, accruing: bool) -> Self {
        RateSegment {
            start,
            base: 0,
            apy,
            accruing,
            members: 0,
        }
    }

    /// Cumulative rate index at `time`, clamped to the start of the segment.
    pub fn index_at(&self, env: &Env, time: u64) -> StakingResult<i128> {
        if !self.accruing || time <= self.start {
            return Ok(self.base);
        }

        let elapsed = i128::from(time - self.start);
        self.base
            .safe_add(i128::from(self.apy).safe_mul(elapsed, env)?, env)
    }

    /// The segment that takes over from this one at `now`.
    pub fn next(&self, env: &Env, now: u64, apy: u32, accruing: bool) -> StakingResult<RateSegment> {
        Ok(RateSegment {
            start: now,
            base: self.index_at(env, now)?,
            apy,
            accruing,
            members: 0,
        })
    }
}

/// How an APY update is applied to rewards not settled yet.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ApyEffectiveMode {
    /// The old APY governs everything before the update, the new one everything after.
    Immediate = 0,
    /// The new APY replaces the current one since the last policy change.
    Retroactive = 1,
}

impl TryFrom<u32> for ApyEffectiveMode {
    type Error = ();

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ApyEffectiveMode::Immediate),
            1 => Ok(ApyEffectiveMode::Retroactive),
            _ => Err(()),
        }
    }
}
