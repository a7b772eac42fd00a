use tracing::debug;

use crate::error::PlanError;
use crate::planners::heuristic::context::{Maneuver, PlanContext};
use crate::planners::heuristic::strategies::*;

pub trait SelectManeuver: Send {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Propose one maneuver for the own team, or `None` when the heuristic does
    /// not apply. Strategies only read the context; the caller queues the result.
    fn try_select(&self, ctx: &PlanContext) -> Result<Option<Maneuver>, PlanError>;
}

/// Strategies in priority order. The first one that proposes a maneuver wins
/// the planning pass.
pub struct StrategyPlanner {
    strategies: Vec<Box<dyn SelectManeuver>>,
}

impl StrategyPlanner {
    pub fn new() -> Self {
        Self {
            strategies: vec![
                Box::new(stand_up::StandUpStrategy),
                Box::new(advance_carrier::AdvanceCarrierStrategy),
                Box::new(safe_block::SafeBlockStrategy),
                Box::new(pickup_ball::PickupBallStrategy),
                Box::new(reposition_receivers::RepositionReceiversStrategy),
                Box::new(blitz::BlitzStrategy),
                Box::new(cage::CageStrategy),
                Box::new(assist::AssistStrategy),
                Box::new(approach_ball::ApproachBallStrategy),
                Box::new(risky_block::RiskyBlockStrategy),
            ],
        }
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    #[tracing::instrument(level = "debug", skip(self, ctx), fields(open = ctx.open_players.len()))]
    pub fn select_maneuver(&self, ctx: &PlanContext) -> Result<Option<Maneuver>, PlanError> {
        for strategy in &self.strategies {
            if let Some(maneuver) = strategy.try_select(ctx)? {
                debug!(
                    "{} selected {:?} for {} ({} actions, score {:.3})",
                    strategy.name(),
                    maneuver.kind,
                    maneuver.player,
                    maneuver.actions.len(),
                    maneuver.score
                );
                return Ok(Some(maneuver));
            }
        }
        debug!("No strategy applies");
        Ok(None)
    }
}

impl Default for StrategyPlanner {
    fn default() -> Self {
        Self::new()
    }
}
