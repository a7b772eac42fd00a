use thiserror::Error;

use crate::infra::{PlayerId, Square, TeamId};
use crate::state::ActionKind;

/// Failures that must stop the bot. Illegal actions and missing paths are not
/// errors; they are handled by re-planning.
#[derive(Debug, Error)]
pub enum PlanError {
    /// A maneuver produced a path whose destination does not fit the action
    /// performed there. Points at a bug in the maneuver that built it.
    #[error("inconsistent {kind:?} path to {square}: {reason}")]
    InconsistentPath {
        kind: ActionKind,
        square: Square,
        reason: String,
    },

    #[error("path for {0} has no steps")]
    EmptyPath(PlayerId),

    #[error("{0} is not part of the current game state")]
    UnknownTeam(TeamId),

    #[error("{0} is not part of the current game state")]
    UnknownPlayer(PlayerId),
}
