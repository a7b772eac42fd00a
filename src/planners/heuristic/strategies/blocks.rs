use crate::infra::BlockOdds;
use crate::planners::heuristic::context::{Maneuver, PlanContext};
use crate::state::{Action, ActionKind, PlayerState};

/// The attacker/defender pair shared by the safe and the risky block.
pub struct BlockCandidate<'a> {
    pub attacker: &'a PlayerState,
    pub defender: &'a PlayerState,
    pub odds: BlockOdds,
}

impl BlockCandidate<'_> {
    pub fn into_maneuver(self, score: f32) -> Option<Maneuver> {
        let target = self.defender.position?;
        let actions = vec![
            Action::with_player(ActionKind::StartBlock, self.attacker.id),
            Action::at(ActionKind::Block, target),
        ];
        Some(Maneuver::new(
            self.attacker.id,
            ActionKind::StartBlock,
            actions,
            score,
        ))
    }
}

/// Over every unused standing own player and each standing opponent next to
/// them, the pair that keeps the attacker standing most often. A later pair
/// only replaces the incumbent when it knocks the defender down at least as
/// often as it loses the ball.
pub fn best_block<'a>(ctx: &PlanContext<'a>) -> Option<BlockCandidate<'a>> {
    let mut best: Option<BlockCandidate<'a>> = None;
    for attacker in ctx.own_players().filter(|p| p.up && !p.used) {
        for defender in ctx.state.adjacent_opponents(attacker, true) {
            let odds = ctx.rules.block_odds(ctx.state, attacker, defender);
            let replace = match &best {
                None => true,
                Some(incumbent) => {
                    odds.attacker_up() > incumbent.odds.attacker_up()
                        && odds.defender_down >= odds.attacker_fumble
                }
            };
            if replace {
                best = Some(BlockCandidate {
                    attacker,
                    defender,
                    odds,
                });
            }
        }
    }
    best
}
