use tracing::debug;

use crate::error::PlanError;
use crate::infra::{BlockOdds, Path, PathQuery};
use crate::planners::heuristic::context::{Maneuver, PlanContext};
use crate::planners::heuristic::strategies::planner::SelectManeuver;
use crate::state::{ActionKind, PlayerState, Skill};

/// Uses the turn's blitz on the most profitable target an unmarked Block
/// player can reach.
pub struct BlitzStrategy;

/// Expected value of a blitz along `path`.
fn blitz_score(path: &Path, odds: &BlockOdds, carries_ball: bool) -> f32 {
    let p = path.prob;
    let self_up = p * odds.attacker_up();
    let opp_down = p * odds.defender_down;
    let opp_fumble = p * odds.defender_fumble;
    let self_fumble = if carries_ball {
        p + (1.0 - p) * odds.attacker_fumble
    } else {
        odds.attacker_fumble
    };
    self_up + opp_down + opp_fumble - self_fumble
}

impl SelectManeuver for BlitzStrategy {
    fn name(&self) -> &'static str {
        "Blitz"
    }

    #[tracing::instrument(level = "debug", skip(self, ctx), fields(strategy = "Blitz"))]
    fn try_select(&self, ctx: &PlanContext) -> Result<Option<Maneuver>, PlanError> {
        if !ctx.state.blitz_available {
            return Ok(None);
        }

        let mut best: Option<(f32, &PlayerState, Path)> = None;
        for blitzer in ctx.open_players().filter(|p| p.has_skill(Skill::Block)) {
            let Some(position) = blitzer.position else {
                continue;
            };
            let carries_ball = ctx.state.is_ball_carrier(blitzer.id);

            for path in ctx.paths.all_paths(ctx.state, blitzer, &PathQuery::blitz()) {
                let Some(last) = path.last_step() else {
                    continue;
                };
                let Some(defender) = ctx.state.player_at(&last) else {
                    continue;
                };
                if path.terminal_kind() != ActionKind::Block {
                    continue;
                }
                // Block is thrown from the square before the defender
                let from = if path.len() > 1 {
                    path.steps[path.len() - 2]
                } else {
                    position
                };

                let odds = ctx.rules.blitz_odds(ctx.state, blitzer, from, defender);
                let score = blitz_score(&path, &odds, carries_ball);
                if best.as_ref().is_none_or(|(best_score, _, _)| score > *best_score) {
                    best = Some((score, blitzer, path));
                }
            }
        }

        let Some((score, blitzer, path)) = best else {
            return Ok(None);
        };
        if score < ctx.config.blitz_min_score {
            debug!("Best blitz by {} scores only {:.3}", blitzer.id, score);
            return Ok(None);
        }

        debug!("{} blitzes {:?} (score {:.3})", blitzer.id, path.last_step(), score);
        let actions = ctx.start_and_follow(ActionKind::StartBlitz, blitzer, &path)?;
        Ok(Some(Maneuver::new(blitzer.id, ActionKind::StartBlitz, actions, score)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::{PlayerId, Square};
    use crate::planners::heuristic::test_support::{path, Fixture};
    use crate::state::{Action, BallState};

    fn odds() -> BlockOdds {
        BlockOdds {
            attacker_down: 0.1,
            defender_down: 0.6,
            attacker_fumble: 0.0,
            defender_fumble: 0.0,
        }
    }

    #[test]
    fn test_blitz_score_formula() {
        let path = path(&[(3, 3)], 0.8);
        // 0.8*0.9 + 0.8*0.6
        assert!((blitz_score(&path, &odds(), false) - 1.2).abs() < 1e-6);

        let carrying = BlockOdds {
            attacker_fumble: 0.5,
            ..odds()
        };
        // 0.72 + 0.48 - (0.8 + 0.2*0.5)
        assert!((blitz_score(&path, &carrying, true) - 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_profitable_blitz_is_queued() {
        let mut fx = Fixture::new();
        fx.own(1, 10, 8).opp(20, 13, 8);
        fx.player_mut(1).skills.insert(Skill::Block);
        fx.paths
            .blitzes
            .insert(PlayerId(1), vec![path(&[(11, 8), (12, 8), (13, 8)], 1.0).with_block(2)]);
        fx.rules.odds.insert((PlayerId(1), PlayerId(20)), odds());

        let maneuver = fx.with_ctx(|ctx| BlitzStrategy.try_select(ctx)).unwrap().unwrap();
        assert_eq!(maneuver.kind, ActionKind::StartBlitz);
        assert!((maneuver.score - 1.5).abs() < 1e-6);
        assert_eq!(maneuver.actions[0], Action::with_player(ActionKind::StartBlitz, PlayerId(1)));
        assert_eq!(maneuver.actions.last(), Some(&Action::at(ActionKind::Block, Square::new(13, 8))));
    }

    #[test]
    fn test_no_blitz_when_used_or_unprofitable() {
        let mut fx = Fixture::new();
        fx.own(1, 10, 8).opp(20, 13, 8);
        fx.player_mut(1).skills.insert(Skill::Block);
        fx.paths
            .blitzes
            .insert(PlayerId(1), vec![path(&[(11, 8), (12, 8), (13, 8)], 0.5).with_block(2)]);
        fx.rules.odds.insert((PlayerId(1), PlayerId(20)), odds());
        assert!(fx.with_ctx(|ctx| BlitzStrategy.try_select(ctx)).unwrap().is_none());

        fx.paths
            .blitzes
            .insert(PlayerId(1), vec![path(&[(11, 8), (12, 8), (13, 8)], 1.0).with_block(2)]);
        fx.state.blitz_available = false;
        assert!(fx.with_ctx(|ctx| BlitzStrategy.try_select(ctx)).unwrap().is_none());
    }

    #[test]
    fn test_carrier_blitz_penalised() {
        let mut fx = Fixture::new();
        fx.own(1, 10, 8).opp(20, 13, 8);
        fx.player_mut(1).skills.insert(Skill::Block);
        fx.state.ball = Some(BallState {
            position: Square::new(10, 8),
            carrier: Some(PlayerId(1)),
        });
        fx.paths
            .blitzes
            .insert(PlayerId(1), vec![path(&[(11, 8), (12, 8), (13, 8)], 1.0).with_block(2)]);
        fx.rules.odds.insert((PlayerId(1), PlayerId(20)), odds());
        assert!(fx.with_ctx(|ctx| BlitzStrategy.try_select(ctx)).unwrap().is_none());
    }
}
