use crate::error::PlanError;
use crate::planners::heuristic::procedures;
use crate::state::{Action, GameState, Procedure};

/// Decision points a learning agent leaves to the scripted bot. Block dice are
/// picked by the fixed rules; everything else returns `None` so the policy
/// decides.
pub fn scripted_override(state: &GameState) -> Result<Option<Action>, PlanError> {
    match &state.procedure {
        Procedure::Block(roll) => procedures::block_choice(state, roll).map(Some),
        _ => Ok(None),
    }
}
