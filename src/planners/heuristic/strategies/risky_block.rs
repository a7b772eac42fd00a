use tracing::debug;

use crate::error::PlanError;
use crate::planners::heuristic::context::{Maneuver, PlanContext};
use crate::planners::heuristic::strategies::blocks::best_block;
use crate::planners::heuristic::strategies::planner::SelectManeuver;

/// Last resort: throw the best block anyway when it is more likely to floor
/// the defender than the attacker, or might shake the ball loose.
pub struct RiskyBlockStrategy;

impl SelectManeuver for RiskyBlockStrategy {
    fn name(&self) -> &'static str {
        "RiskyBlock"
    }

    #[tracing::instrument(level = "debug", skip(self, ctx), fields(strategy = "RiskyBlock"))]
    fn try_select(&self, ctx: &PlanContext) -> Result<Option<Maneuver>, PlanError> {
        let Some(candidate) = best_block(ctx) else {
            return Ok(None);
        };

        let odds = candidate.odds;
        if odds.defender_down <= 1.0 - odds.attacker_up() && odds.defender_fumble <= 0.0 {
            return Ok(None);
        }

        debug!(
            "Risky block {} on {} (down={:.3}, up={:.3})",
            candidate.attacker.id,
            candidate.defender.id,
            odds.defender_down,
            odds.attacker_up()
        );
        Ok(candidate.into_maneuver(odds.defender_down))
    }
}
