use tracing::debug;

use crate::error::PlanError;
use crate::infra::{Path, PathQuery, Square};
use crate::planners::heuristic::context::{Maneuver, PlanContext};
use crate::planners::heuristic::strategies::planner::SelectManeuver;
use crate::state::ActionKind;

/// Brings a free player closer to a loose ball or to the opposing carrier.
pub struct ApproachBallStrategy;

impl ApproachBallStrategy {
    fn target(ctx: &PlanContext) -> Option<Square> {
        let ball = ctx.state.ball?;
        match ball.carrier {
            None => Some(ball.position),
            Some(id) => ctx
                .state
                .player(id)
                .filter(|carrier| carrier.team != ctx.own)
                .and_then(|carrier| carrier.position),
        }
    }
}

impl SelectManeuver for ApproachBallStrategy {
    fn name(&self) -> &'static str {
        "ApproachBall"
    }

    #[tracing::instrument(level = "debug", skip(self, ctx), fields(strategy = "ApproachBall"))]
    fn try_select(&self, ctx: &PlanContext) -> Result<Option<Maneuver>, PlanError> {
        let Some(target) = Self::target(ctx) else {
            return Ok(None);
        };

        for player in ctx.open_players() {
            if ctx.state.is_ball_carrier(player.id) || !ctx.is_uncontested(player) {
                continue;
            }

            let mut best: Option<(i32, Path)> = None;
            for path in ctx.paths.all_paths(ctx.state, player, &PathQuery::default()) {
                let Some(last) = path.last_step() else {
                    continue;
                };
                // No dice on the way in
                if !path.is_certain() {
                    continue;
                }
                let distance = last.distance(&target);
                if best.as_ref().is_none_or(|(d, _)| distance < *d) {
                    best = Some((distance, path));
                }
            }

            if let Some((distance, path)) = best {
                debug!("{} closes in on {} (distance {})", player.id, target, distance);
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
