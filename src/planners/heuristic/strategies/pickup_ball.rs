use tracing::debug;

use crate::error::PlanError;
use crate::infra::{Path, PathQuery, PathTarget};
use crate::planners::heuristic::context::{Maneuver, PlanContext};
use crate::planners::heuristic::expander::expand_path;
use crate::planners::heuristic::strategies::planner::SelectManeuver;
use crate::state::{ActionKind, PlayerState};

/// Sends the player with the safest route to a loose ball and, when they can
/// keep going unmarked, carries on toward the end zone.
pub struct PickupBallStrategy;

impl SelectManeuver for PickupBallStrategy {
    fn name(&self) -> &'static str {
        "PickupBall"
    }

    #[tracing::instrument(level = "debug", skip(self, ctx), fields(strategy = "PickupBall"))]
    fn try_select(&self, ctx: &PlanContext) -> Result<Option<Maneuver>, PlanError> {
        let Some(ball) = ctx.state.ball.filter(|b| b.carrier.is_none()) else {
            return Ok(None);
        };
        let ball_pos = ball.position;

        let mut best: Option<(&PlayerState, Path)> = None;
        for player in ctx.own_players().filter(|p| !p.used) {
            let Some(position) = player.position else {
                continue;
            };
            // Rushing adds up to two squares beyond the movement allowance
            if position.distance(&ball_pos) > player.ma + ctx.config.pickup_range_bonus {
                continue;
            }
            let Some(path) = ctx
                .paths
                .safest_path(ctx.state, player, PathTarget::Square(ball_pos))
            else {
                continue;
            };
            if best.as_ref().is_none_or(|(_, b)| path.prob > b.prob) {
                best = Some((player, path));
            }
        }

        let Some((player, pickup)) = best else {
            return Ok(None);
        };
        if pickup.prob <= ctx.config.pickup_min_prob {
            debug!("Pickup by {} too risky (p={:.2})", player.id, pickup.prob);
            return Ok(None);
        }

        debug!("{} goes for the ball at {} (p={:.2})", player.id, ball_pos, pickup.prob);
        let mut actions = ctx.start_and_follow(ActionKind::StartMove, player, &pickup)?;

        // Keep running only from an unmarked ball square short of the end zone
        if ctx.state.tackle_zones_at(ctx.own, &ball_pos) == 0 && ball_pos.x != ctx.target_x {
            // Moves spent reaching the ball are gone
            let query = PathQuery::continuing_from(ball_pos, pickup.len() as i32);
            let onward = ctx.paths.all_paths(ctx.state, player, &query);
            if let Some(onward) = ctx.best_goal_path(player, onward) {
                debug!("{} continues to {:?} after the pickup", player.id, onward.last_step());
                actions.extend(expand_path(ctx.state, ctx.rules, player, &onward, false)?);
            }
        }

        Ok(Some(Maneuver::new(
            player.id,
            ActionKind::StartMove,
            actions,
            pickup.prob,
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::{PlayerId, Square};
    use crate::planners::heuristic::test_support::{path, Fixture};
    use crate::state::{Action, BallState};

    fn loose_ball(fx: &mut Fixture, x: i32, y: i32) {
        fx.state.ball = Some(BallState {
            position: Square::new(x, y),
            carrier: None,
        });
    }

    #[test]
    fn test_safest_pickup_is_chained_toward_goal() {
        let mut fx = Fixture::new();
        fx.own(1, 12, 8).own(2, 14, 8);
        loose_ball(&mut fx, 10, 8);
        fx.paths.safest.insert(
            (PlayerId(1), PathTarget::Square(Square::new(10, 8))),
            path(&[(11, 8), (10, 8)], 0.5),
        );
        fx.paths.safest.insert(
            (PlayerId(2), PathTarget::Square(Square::new(10, 8))),
            path(&[(13, 8), (12, 7), (11, 8), (10, 8)], 0.8),
        );
        fx.paths.continued.insert(
            PlayerId(2),
            vec![path(&[(9, 8)], 1.0), path(&[(9, 8), (8, 8)], 1.0)],
        );

        let maneuver = fx.with_ctx(|ctx| PickupBallStrategy.try_select(ctx)).unwrap().unwrap();
        assert_eq!(maneuver.player, PlayerId(2));
        // start + 4 pickup squares + 2 onward squares
        assert_eq!(maneuver.actions.len(), 7);
        assert_eq!(maneuver.actions[4], Action::at(ActionKind::Move, Square::new(10, 8)));
        assert_eq!(maneuver.actions[6], Action::at(ActionKind::Move, Square::new(8, 8)));
    }

    #[test]
    fn test_low_probability_pickup_is_rejected() {
        let mut fx = Fixture::new();
        fx.own(1, 12, 8);
        loose_ball(&mut fx, 10, 8);
        fx.paths.safest.insert(
            (PlayerId(1), PathTarget::Square(Square::new(10, 8))),
            path(&[(11, 8), (10, 8)], 0.33),
        );
        assert!(fx.with_ctx(|ctx| PickupBallStrategy.try_select(ctx)).unwrap().is_none());
    }

    #[test]
    fn test_player_out_of_range_is_skipped() {
        let mut fx = Fixture::new();
        fx.own(1, 20, 8);
        loose_ball(&mut fx, 10, 8);
        fx.paths.safest.insert(
            (PlayerId(1), PathTarget::Square(Square::new(10, 8))),
            path(&[(10, 8)], 1.0),
        );
        assert!(fx.with_ctx(|ctx| PickupBallStrategy.try_select(ctx)).unwrap().is_none());
    }

    #[test]
    fn test_marked_ball_square_has_no_second_leg() {
        let mut fx = Fixture::new();
        fx.own(1, 12, 8).opp(20, 9, 8);
        loose_ball(&mut fx, 10, 8);
        fx.paths.safest.insert(
            (PlayerId(1), PathTarget::Square(Square::new(10, 8))),
            path(&[(11, 8), (10, 8)], 0.9),
        );
        fx.paths.continued.insert(PlayerId(1), vec![path(&[(10, 7)], 1.0)]);

        let maneuver = fx.with_ctx(|ctx| PickupBallStrategy.try_select(ctx)).unwrap().unwrap();
        assert_eq!(maneuver.actions.len(), 3);
    }
}
