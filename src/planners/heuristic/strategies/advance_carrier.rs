use tracing::debug;

use crate::error::PlanError;
use crate::infra::{Path, PathQuery, PathTarget};
use crate::planners::heuristic::context::{Maneuver, PlanContext};
use crate::planners::heuristic::strategies::planner::SelectManeuver;
use crate::state::{ActionKind, PlayerState};

/// Moves the own ball carrier: straight for the end zone when the odds are
/// good, to a teammate in scoring range, or as far forward as is safe.
pub struct AdvanceCarrierStrategy;

impl SelectManeuver for AdvanceCarrierStrategy {
    fn name(&self) -> &'static str {
        "AdvanceCarrier"
    }

    #[tracing::instrument(level = "debug", skip(self, ctx), fields(strategy = "AdvanceCarrier"))]
    fn try_select(&self, ctx: &PlanContext) -> Result<Option<Maneuver>, PlanError> {
        let Some(carrier) = ctx.own_carrier().filter(|c| !c.used) else {
            return Ok(None);
        };

        if let Some(td_path) = ctx.paths.safest_path(ctx.state, carrier, PathTarget::Endzone)
            && td_path.prob >= ctx.config.carrier_td_min_prob
        {
            debug!("Carrier {} runs for the end zone (p={:.2})", carrier.id, td_path.prob);
            let actions = ctx.start_and_follow(ActionKind::StartMove, carrier, &td_path)?;
            return Ok(Some(Maneuver::new(
                carrier.id,
                ActionKind::StartMove,
                actions,
                td_path.prob,
            )));
        }

        if let Some(maneuver) = handoff_to_scorer(ctx, carrier)? {
            return Ok(Some(maneuver));
        }

        // A marked carrier would have to dodge out
        if !ctx.is_uncontested(carrier) {
            return Ok(None);
        }

        let paths = ctx.paths.all_paths(ctx.state, carrier, &PathQuery::default());
        let Some(best) = ctx.best_goal_path(carrier, paths) else {
            return Ok(None);
        };
        debug!("Carrier {} advances to {:?}", carrier.id, best.last_step());
        let actions = ctx.start_and_follow(ActionKind::StartMove, carrier, &best)?;
        Ok(Some(Maneuver::new(carrier.id, ActionKind::StartMove, actions, best.prob)))
    }
}

/// Hand the ball to the teammate most likely to score with it.
fn handoff_to_scorer(
    ctx: &PlanContext,
    carrier: &PlayerState,
) -> Result<Option<Maneuver>, PlanError> {
    if !ctx.state.handoff_available {
        return Ok(None);
    }

    let mut best: Option<(f32, Path)> = None;
    for teammate in ctx.own_players() {
        if teammate.id == carrier.id || teammate.used || !teammate.up {
            continue;
        }
        let Some(position) = teammate.position else {
            continue;
        };
        if ctx
            .state
            .distance_to_endzone(teammate)
            .is_none_or(|d| d > teammate.num_moves_left())
        {
            continue;
        }
        let Some(td_path) = ctx.paths.safest_path(ctx.state, teammate, PathTarget::Endzone) else {
            continue;
        };
        let Some(reach) = ctx
            .paths
            .safest_path(ctx.state, carrier, PathTarget::Square(position))
        else {
            continue;
        };
        if reach.terminal_kind() != ActionKind::Handoff {
            debug!("Path to {} does not end in a hand-off, skipping", teammate.id);
            continue;
        }

        let p_catch = ctx.rules.catch_probability(ctx.state, teammate, true);
        let score = td_path.prob * reach.prob * p_catch;
        if best.as_ref().is_none_or(|(best_score, _)| score > *best_score) {
            best = Some((score, reach));
        }
    }

    let Some((score, reach)) = best else {
        return Ok(None);
    };
    let last_turn = ctx
        .state
        .team(ctx.own)
        .is_some_and(|t| t.turn >= ctx.state.turns_per_half);
    if score < ctx.config.handoff_min_prob && !last_turn {
        debug!("Best hand-off too risky (p={:.2})", score);
        return Ok(None);
    }

    debug!("Carrier {} hands off (p={:.2}, last turn={})", carrier.id, score, last_turn);
    let actions = ctx.start_and_follow(ActionKind::StartHandoff, carrier, &reach)?;
    Ok(Some(Maneuver::new(carrier.id, ActionKind::StartHandoff, actions, score)))
}
