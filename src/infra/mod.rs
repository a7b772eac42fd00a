pub mod logging;
mod pathfinding;
mod rules;
mod types;

pub use logging::init_logging;
pub use pathfinding::{Path, PathQuery, PathTarget, Pathfinder};
pub use rules::{BlockOdds, Rules};
pub use types::{PlayerId, Square, TeamId};
