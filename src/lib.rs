pub mod config;
pub mod error;
pub mod infra;
pub mod planners;
pub mod state;

// Re-export commonly used types for convenience
pub use config::{PlannerConfig, RewardConfig};
pub use error::PlanError;
pub use infra::{Path, PathQuery, PathTarget, Pathfinder, PlayerId, Rules, Square, TeamId};
pub use planners::heuristic::ScriptedBot;
pub use planners::rl::{RewardShaper, scripted_override};
pub use state::{Action, ActionKind, GameState};
