pub mod segment;
pub mod staker;

pub use segment::{ApyEffectiveMode, RateSegment};
pub use staker::Staker;
