use soroban_fixed_point_math::FixedPoint;
use soroban_sdk::{log, Env, I256};

use crate::{
    constants::{PERCENTAGE_PRECISION_I128, REWARD_RATE_DENOMINATOR},
    error::{ErrorCode, StakingResult},
    math::safe_math::SafeMath,
};

/// `floor(x * y / denominator)` for non-negative operands.
///
/// Falls back to 256-bit intermediates when `x * y` does not fit in an `i128`; fails only
/// when the quotient itself does not fit.
pub fn mul_div_floor(env: &Env, x: i128, y: i128, denominator: i128) -> StakingResult<i128> {
    if let Some(result) = x.fixed_mul_floor(y, denominator) {
        return Ok(result);
    }

    if denominator == 0 {
        log!(env, "Math error: division by zero");
        return Err(ErrorCode::MathError);
    }

    I256::from_i128(env, x)
        .mul(&I256::from_i128(env, y))
        .div(&I256::from_i128(env, denominator))
        .to_i128()
        .ok_or_else(|| {
            log!(env, "Math error: {} * {} does not fit after division", x, y);
            ErrorCode::MathError
        })
}

/// Rewards earned by `principal` over `rate_seconds` (APY percent times seconds), floored.
pub fn rewards_for(env: &Env, principal: i128, rate_seconds: i128) -> StakingResult<i128> {
    if principal == 0 || rate_seconds == 0 {
        return Ok(0);
    }

    mul_div_floor(env, principal, rate_seconds, REWARD_RATE_DENOMINATOR)
}

/// Simple interest earned by `principal` over `elapsed` seconds at `apy` percent, floored.
pub fn reward_for_period(env: &Env, principal: i128, apy: u32, elapsed: u64) -> StakingResult<i128> {
    let rate_seconds = i128::from(apy).safe_mul(i128::from(elapsed), env)?;
    rewards_for(env, principal, rate_seconds)
}

/// Penalty withheld from `principal` when unbonding is skipped.
pub fn fine_for(env: &Env, principal: i128, fine_percent: u32) -> StakingResult<i128> {
    if principal == 0 || fine_percent == 0 {
        return Ok(0);
    }

    mul_div_floor(
        env,
        principal,
        i128::from(fine_percent),
        PERCENTAGE_PRECISION_I128,
    )
}
