use tracing::debug;

use crate::error::PlanError;
use crate::infra::PathTarget;
use crate::planners::heuristic::context::{Maneuver, PlanContext};
use crate::planners::heuristic::strategies::planner::SelectManeuver;
use crate::state::ActionKind;

/// Fills the free diagonal squares around the own ball carrier, one corner per
/// planning pass.
pub struct CageStrategy;

impl SelectManeuver for CageStrategy {
    fn name(&self) -> &'static str {
        "Cage"
    }

    #[tracing::instrument(level = "debug", skip(self, ctx), fields(strategy = "Cage"))]
    fn try_select(&self, ctx: &PlanContext) -> Result<Option<Maneuver>, PlanError> {
        let Some(carrier) = ctx.own_carrier() else {
            return Ok(None);
        };
        let Some(ball_pos) = carrier.position else {
            return Ok(None);
        };
        let cage = ball_pos.diagonals();

        for corner in cage {
            // Occupied corners are covered either way
            if ctx.state.is_out_of_bounds(&corner) || ctx.state.player_at(&corner).is_some() {
                continue;
            }

            for player in ctx.open_players() {
                let Some(position) = player.position else {
                    continue;
                };
                // Players already forming the cage stay put
                if player.id == carrier.id
                    || cage.contains(&position)
                    || position.distance(&corner) > player.num_moves_left()
                    || !ctx.is_uncontested(player)
                {
                    continue;
                }

                let Some(path) = ctx
                    .paths
                    .safest_path(ctx.state, player, PathTarget::Square(corner))
                else {
                    continue;
                };
                if path.prob <= ctx.config.cage_min_prob {
                    continue;
                }

                debug!("{} closes cage corner {} (p={:.2})", player.id, corner, path.prob);
                let actions = ctx.start_and_follow(ActionKind::StartMove, player, &path)?;
                return Ok(Some(Maneuver::new(
                    player.id,
                    ActionKind::StartMove,
                    actions,
                    path.prob,
                )));
            }
        }
        Ok(None)
    }
}
