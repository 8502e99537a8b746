pub mod rewards;
pub mod safe_math;
