use tracing::debug;

use crate::error::PlanError;
use crate::infra::PathQuery;
use crate::planners::heuristic::context::{Maneuver, PlanContext};
use crate::planners::heuristic::strategies::planner::SelectManeuver;
use crate::state::{ActionKind, Skill};

/// Moves an unmarked catcher who could still reach the end zone this turn
/// into a free square as close to the goal as is certain.
pub struct RepositionReceiversStrategy;

impl SelectManeuver for RepositionReceiversStrategy {
    fn name(&self) -> &'static str {
        "RepositionReceivers"
    }

    #[tracing::instrument(level = "debug", skip(self, ctx), fields(strategy = "RepositionReceivers"))]
    fn try_select(&self, ctx: &PlanContext) -> Result<Option<Maneuver>, PlanError> {
        for player in ctx.open_players() {
            if !player.has_skill(Skill::Catch) || ctx.state.is_ball_carrier(player.id) {
                continue;
            }
            // Only receivers who could still score this turn
            if ctx
                .state
                .distance_to_endzone(player)
                .is_none_or(|d| d > player.num_moves_left())
            {
                continue;
            }

            let paths = ctx.paths.all_paths(ctx.state, player, &PathQuery::default());
            if let Some(best) = ctx.best_goal_path(player, paths) {
                debug!("Receiver {} moves up to {:?}", player.id, best.last_step());
                let actions = ctx.start_and_follow(ActionKind::StartMove, player, &best)?;
                return Ok(Some(Maneuver::new(
                    player.id,
                    ActionKind::StartMove,
                    actions,
                    best.prob,
                )));
            }
        }
        Ok(None)
    }
}
