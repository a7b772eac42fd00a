// Strategy modules
pub mod planner;

mod blocks;

pub mod advance_carrier;
pub mod approach_ball;
pub mod assist;
pub mod blitz;
pub mod cage;
pub mod pickup_ball;
pub mod reposition_receivers;
pub mod risky_block;
pub mod safe_block;
pub mod stand_up;

pub use planner::{SelectManeuver, StrategyPlanner};
