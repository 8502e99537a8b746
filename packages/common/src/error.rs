use soroban_sdk::contracterror;

pub type StakingResult<T = ()> = Result<T, ErrorCode>;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ErrorCode {
    #[doc = "Stake amount must be positive"]
    InvalidAmount = 1,
    #[doc = "Staking is paused or stopped"]
    StakingNotActive = 2,
    NotAStaker = 3,
    #[doc = "An unstake request is already pending"]
    AlreadyUnstaked = 4,
    UnstakeNotRequested = 5,
    UnbondingNotOver = 6,
    #[doc = "Claim delay since the last stake or claim has not passed"]
    RewardsCannotBeClaimed = 7,
    NotOwner = 8,
    AlreadyInitialized = 9,
    NotInitialized = 10,
    InvalidParameter = 11,
    MathError = 12,
}
