use std::collections::HashSet;

use tracing::debug;

use crate::error::PlanError;
use crate::infra::{PathQuery, Square};
use crate::planners::heuristic::context::{Maneuver, PlanContext};
use crate::planners::heuristic::strategies::planner::SelectManeuver;
use crate::state::ActionKind;

/// Moves a free player next to an opponent that one of ours cannot yet block
/// at an advantage, on a square where only that opponent marks them.
pub struct AssistStrategy;

/// Empty squares from which an extra player would assist a block that is
/// currently not favourable.
fn assist_squares(ctx: &PlanContext) -> HashSet<Square> {
    let mut squares = HashSet::new();
    for defender in ctx.opp_players().filter(|p| p.up) {
        let Some(def_pos) = defender.position else {
            continue;
        };
        for attacker in ctx.state.adjacent_players(&def_pos, ctx.own, true) {
            // Already favourable without help
            let (att_str, def_str) = ctx.rules.block_strengths(ctx.state, attacker, defender);
            if def_str < att_str {
                continue;
            }
            for square in ctx.state.adjacent_empty_squares(&def_pos) {
                // A second marker would cancel the assist
                if ctx.state.adjacent_players(&square, ctx.opp, true).len() == 1 {
                    squares.insert(square);
                }
            }
        }
    }
    squares
}

impl SelectManeuver for AssistStrategy {
    fn name(&self) -> &'static str {
        "Assist"
    }

    #[tracing::instrument(level = "debug", skip(self, ctx), fields(strategy = "Assist"))]
    fn try_select(&self, ctx: &PlanContext) -> Result<Option<Maneuver>, PlanError> {
        let squares = assist_squares(ctx);
        if squares.is_empty() {
            return Ok(None);
        }

        // First open player with a safe route to any of the squares
        for player in ctx.open_players() {
            let paths = ctx.paths.all_paths(ctx.state, player, &PathQuery::default());
            let found = paths.into_iter().find(|path| {
                path.prob >= ctx.config.assist_min_prob
                    && path.last_step().is_some_and(|last| squares.contains(&last))
            });
            if let Some(path) = found {
                debug!("{} moves in to assist at {:?}", player.id, path.last_step());
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
