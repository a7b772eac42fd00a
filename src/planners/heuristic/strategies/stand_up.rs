use tracing::debug;

use crate::error::PlanError;
use crate::planners::heuristic::context::{Maneuver, PlanContext};
use crate::planners::heuristic::strategies::planner::SelectManeuver;
use crate::state::{Action, ActionKind};

/// Gets a fallen player back up while an opponent is marking them.
pub struct StandUpStrategy;

impl SelectManeuver for StandUpStrategy {
    fn name(&self) -> &'static str {
        "StandUp"
    }

    #[tracing::instrument(level = "debug", skip(self, ctx), fields(strategy = "StandUp"))]
    fn try_select(&self, ctx: &PlanContext) -> Result<Option<Maneuver>, PlanError> {
        let fallen = ctx
            .own_players()
            .find(|p| !p.up && !p.stunned && !p.used && ctx.state.tackle_zones_in(p) > 0);

        let Some(player) = fallen else {
            return Ok(None);
        };

        debug!("Standing up {} next to an opponent", player.id);
        let actions = vec![
            Action::with_player(ActionKind::StartMove, player.id),
            Action::new(ActionKind::StandUp),
        ];
        Ok(Some(Maneuver::new(player.id, ActionKind::StartMove, actions, 1.0)))
    }
}
