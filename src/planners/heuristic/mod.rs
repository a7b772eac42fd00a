mod bot;
mod context;
mod expander;
mod formation;
mod planner_state;
pub mod procedures;
mod strategies;

#[cfg(test)]
pub(crate) mod test_support;

pub use bot::ScriptedBot;
pub use context::{Maneuver, OpenPlayers, PlanContext};
pub use expander::expand_path;
pub use formation::Formation;
pub use planner_state::{Phase, PlannerState};
pub use strategies::{SelectManeuver, StrategyPlanner};
