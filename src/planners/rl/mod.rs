//! Pieces shared with a reinforcement learning agent trained against the
//! engine: the shaped reward and the decisions left to the scripted bot.

pub mod metrics;
mod reward;
mod scripted;

pub use metrics::{MovingAverage, RewardBreakdown};
pub use reward::RewardShaper;
pub use scripted::scripted_override;
