use tracing::debug;

use crate::error::PlanError;
use crate::planners::heuristic::context::{Maneuver, PlanContext};
use crate::planners::heuristic::strategies::blocks::best_block;
use crate::planners::heuristic::strategies::planner::SelectManeuver;

/// Throws the best block when the attacker almost surely stays up and cannot
/// lose the ball doing it.
pub struct SafeBlockStrategy;

impl SelectManeuver for SafeBlockStrategy {
    fn name(&self) -> &'static str {
        "SafeBlock"
    }

    #[tracing::instrument(level = "debug", skip(self, ctx), fields(strategy = "SafeBlock"))]
    fn try_select(&self, ctx: &PlanContext) -> Result<Option<Maneuver>, PlanError> {
        let Some(candidate) = best_block(ctx) else {
            return Ok(None);
        };

        let p_up = candidate.odds.attacker_up();
        if p_up <= ctx.config.safe_block_min_up || candidate.odds.attacker_fumble != 0.0 {
            debug!(
                "Best block {} on {} not safe (up={:.3}, fumble={:.3})",
                candidate.attacker.id, candidate.defender.id, p_up, candidate.odds.attacker_fumble
            );
            return Ok(None);
        }

        debug!("Safe block {} on {} (up={:.3})", candidate.attacker.id, candidate.defender.id, p_up);
        Ok(candidate.into_maneuver(p_up))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::{BlockOdds, PlayerId, Square};
    use crate::planners::heuristic::test_support::Fixture;
    use crate::state::{Action, ActionKind};

    fn odds(attacker_down: f32, defender_down: f32, attacker_fumble: f32) -> BlockOdds {
        BlockOdds {
            attacker_down,
            defender_down,
            attacker_fumble,
            defender_fumble: 0.0,
        }
    }

    #[test]
    fn test_safe_block_selected() {
        let mut fx = Fixture::new();
        fx.own(1, 10, 8).opp(20, 11, 8);
        fx.rules.odds.insert((PlayerId(1), PlayerId(20)), odds(0.03, 0.6, 0.0));

        let maneuver = fx.with_ctx(|ctx| SafeBlockStrategy.try_select(ctx)).unwrap().unwrap();
        assert_eq!(
            maneuver.actions,
            vec![
                Action::with_player(ActionKind::StartBlock, PlayerId(1)),
                Action::at(ActionKind::Block, Square::new(11, 8)),
            ]
        );
    }

    #[test]
    fn test_fumble_risk_rejects_block() {
        let mut fx = Fixture::new();
        fx.own(1, 10, 8).opp(20, 11, 8);
        fx.rules.odds.insert((PlayerId(1), PlayerId(20)), odds(0.01, 0.6, 0.01));
        assert!(fx.with_ctx(|ctx| SafeBlockStrategy.try_select(ctx)).unwrap().is_none());
    }

    #[test]
    fn test_better_pair_needs_defender_down_over_fumble() {
        let mut fx = Fixture::new();
        fx.own(1, 10, 8).opp(20, 11, 8).own(2, 15, 8).opp(21, 16, 8);
        fx.rules.odds.insert((PlayerId(1), PlayerId(20)), odds(0.1, 0.5, 0.0));
        // Stays up more often but fails the knock-down check, so never replaces
        fx.rules.odds.insert((PlayerId(2), PlayerId(21)), odds(0.0, 0.0, 0.1));

        assert!(fx.with_ctx(|ctx| SafeBlockStrategy.try_select(ctx)).unwrap().is_none());
    }
}
