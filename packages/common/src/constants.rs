// ################################################################
//                             Time
// ################################################################

pub const ONE_HOUR: u64 = 60 * 60;
pub const ONE_DAY: u64 = 24 * ONE_HOUR;
pub const SECONDS_PER_YEAR: u64 = 365 * ONE_DAY;

// ################################################################
//                           Precision
// ################################################################

/// APY and unstake fines are whole percents.
pub const PERCENTAGE_PRECISION: u32 = 100;
pub const PERCENTAGE_PRECISION_I128: i128 = PERCENTAGE_PRECISION as i128;

/// `reward = principal * apy * seconds / REWARD_RATE_DENOMINATOR`
pub const REWARD_RATE_DENOMINATOR: i128 = PERCENTAGE_PRECISION_I128 * SECONDS_PER_YEAR as i128;

pub const MAX_APY: u32 = 10_000;
pub const MAX_IMMEDIATE_UNSTAKE_FINE: u32 = PERCENTAGE_PRECISION;

// ################################################################
//                          Storage TTL
// ################################################################

pub const DAY_IN_LEDGERS: u32 = 17_280;

pub const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - DAY_IN_LEDGERS;
